use crate::{
    Error, FootState, GaitController, LizardConfig, Side, SolverParams, Spine, Target, Vec2,
    advance_spine, checked_pair_anchors, pair_anchors,
};

fn assert_approx(actual: f32, expected: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 1.0e-3,
        "expected {expected}, got {actual} (diff {diff})"
    );
}

fn spawn(config: &LizardConfig) -> (Spine, GaitController) {
    let spine = Spine::new(config.joint_count(), config.spacing(), Vec2::ZERO).unwrap();
    let gait = GaitController::new(&spine, config).unwrap();
    (spine, gait)
}

fn assert_pairs_exclusive(gait: &GaitController) {
    for (index, foot) in gait.feet().iter().enumerate() {
        let opposite = &gait.feet()[foot.opposite()];
        assert!(
            !(foot.is_stepping() && opposite.is_stepping()),
            "foot {index} and its opposite {} step together",
            foot.opposite()
        );
    }
}

#[test]
fn default_layout_anchors_two_pairs_behind_the_neck() {
    let config = LizardConfig::default();
    assert_eq!(pair_anchors(&config), vec![5, 9]);

    let (spine, gait) = spawn(&config);
    let feet = gait.feet();
    assert_eq!(feet.len(), 4);

    let sides: Vec<_> = feet.iter().map(|f| f.side()).collect();
    assert_eq!(sides, vec![Side::Left, Side::Left, Side::Right, Side::Right]);
    let opposites: Vec<_> = feet.iter().map(|f| f.opposite()).collect();
    assert_eq!(opposites, vec![2, 3, 0, 1]);

    for foot in feet {
        assert_eq!(foot.state(), FootState::Idle);
        assert_eq!(
            foot.position(),
            gait.next_step(&spine, foot.anchor(), foot.side())
        );
    }
}

#[test]
fn single_pair_feet_oppose_each_other() {
    let config = LizardConfig {
        feet_pairs: 1,
        ..LizardConfig::default()
    };
    let (_, gait) = spawn(&config);
    assert_eq!(gait.feet().len(), 2);
    assert_eq!(gait.feet()[0].opposite(), 1);
    assert_eq!(gait.feet()[1].opposite(), 0);
}

#[test]
fn next_step_projects_forward_at_the_side_angle() {
    let config = LizardConfig::default();
    let (spine, gait) = spawn(&config);
    let anchor = spine.joints()[5];

    // Heading is 180 for a spine lying along +x.
    let left = gait.next_step(&spine, 5, Side::Left);
    let right = gait.next_step(&spine, 5, Side::Right);
    assert_approx(left.distance(anchor), 40.0);
    assert_approx(right.distance(anchor), 40.0);
    assert_approx(left.x, right.x);
    assert_approx(left.y, -right.y);
    assert!(left.x < anchor.x);
}

#[test]
fn step_length_scales_with_the_creature() {
    let config = LizardConfig {
        scale: 2.0,
        ..LizardConfig::default()
    };
    let (spine, gait) = spawn(&config);
    let step = gait.next_step(&spine, 5, Side::Right);
    assert_approx(step.distance(spine.joints()[5]), 80.0);
}

#[test]
fn anchors_past_the_spine_are_rejected() {
    let config = LizardConfig {
        head_segments: 10,
        body_segments: 1,
        tail_segments: 1,
        feet_pairs: 1,
        ..LizardConfig::default()
    };
    let err = checked_pair_anchors(&config, config.segment_count()).unwrap_err();
    assert!(matches!(
        err,
        Error::AnchorOutOfRange {
            anchor: 11,
            segment_count: 11,
            ..
        }
    ));

    let spine = Spine::new(config.joint_count(), config.spacing(), Vec2::ZERO).unwrap();
    assert!(GaitController::new(&spine, &config).is_err());
}

#[test]
fn planted_feet_stay_put_while_the_spine_is_still() {
    let config = LizardConfig::default();
    let (spine, mut gait) = spawn(&config);
    let before: Vec<_> = gait.feet().iter().map(|f| f.position()).collect();
    for _ in 0..10 {
        gait.advance(&spine);
    }
    let after: Vec<_> = gait.feet().iter().map(|f| f.position()).collect();
    assert_eq!(before, after);
    assert!(gait.feet().iter().all(|f| f.state() == FootState::Idle));
}

#[test]
fn stepping_feet_close_in_and_land_exactly() {
    let config = LizardConfig::default();
    let (mut spine, mut gait) = spawn(&config);
    for joint in spine.joints_mut() {
        *joint += Vec2::new(-200.0, 30.0);
    }

    let mut distances = vec![f32::INFINITY; gait.feet().len()];
    let mut ticks = 0;
    loop {
        gait.advance(&spine);
        assert_pairs_exclusive(&gait);
        for (index, foot) in gait.feet().iter().enumerate() {
            if foot.is_stepping() {
                let remaining =
                    foot.position().distance(gait.next_step(&spine, foot.anchor(), foot.side()));
                assert!(remaining < distances[index], "foot {index} stopped closing in");
                distances[index] = remaining;
            } else {
                distances[index] = f32::INFINITY;
            }
        }
        ticks += 1;
        let settled = gait.feet().iter().all(|foot| {
            foot.state() == FootState::Idle
                && foot.position() == gait.next_step(&spine, foot.anchor(), foot.side())
        });
        if settled {
            break;
        }
        assert!(ticks < 100, "feet never settled");
    }
}

#[test]
fn first_foot_and_its_diagonal_lift_together() {
    let config = LizardConfig::default();
    let (mut spine, mut gait) = spawn(&config);
    for joint in spine.joints_mut() {
        *joint += Vec2::new(-150.0, 0.0);
    }
    gait.advance(&spine);

    let states: Vec<_> = gait.feet().iter().map(|f| f.state()).collect();
    assert_eq!(
        states,
        vec![
            FootState::Stepping,
            FootState::Idle,
            FootState::Idle,
            FootState::Stepping
        ]
    );
}

#[test]
fn paired_feet_never_step_together_while_walking() {
    let config = LizardConfig::default();
    let (mut spine, mut gait) = spawn(&config);
    let params = SolverParams::default();

    let mut lifted = 0;
    for tick in 0..800 {
        let t = tick as f32 * 0.02;
        let target = Target::fresh(Vec2::new(
            (t * 1.3).cos() * 400.0,
            (t * 0.7).sin() * 300.0,
        ));
        advance_spine(&mut spine, &target, None, &params, config.speed);
        gait.advance(&spine);
        assert_pairs_exclusive(&gait);
        lifted += gait.feet().iter().filter(|f| f.is_stepping()).count();
    }
    assert!(lifted > 0, "the lizard never took a step");
}
