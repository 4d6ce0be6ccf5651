use crate::{DEFAULT_TANGENT, Spine, Vec2};

fn assert_approx(actual: f32, expected: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 1.0e-4,
        "expected {expected}, got {actual} (diff {diff})"
    );
}

#[test]
fn new_lays_joints_out_along_x_from_origin() {
    let spine = Spine::new(5, 20.0, Vec2::new(100.0, 50.0)).unwrap();
    assert_eq!(spine.joint_count(), 5);
    assert_eq!(spine.segment_count(), 4);
    assert_eq!(spine.head(), Vec2::new(100.0, 50.0));
    for (i, joint) in spine.joints().iter().enumerate() {
        assert_approx(joint.x, 100.0 + 20.0 * i as f32);
        assert_approx(joint.y, 50.0);
    }
}

#[test]
fn new_rejects_short_chains_and_bad_spacing() {
    assert!(Spine::new(1, 20.0, Vec2::ZERO).is_err());
    assert!(Spine::new(4, 0.0, Vec2::ZERO).is_err());
    assert!(Spine::new(4, -3.0, Vec2::ZERO).is_err());
    assert!(Spine::new(4, f32::NAN, Vec2::ZERO).is_err());
}

#[test]
fn segment_queries_follow_adjacent_joints() {
    let mut spine = Spine::new(3, 10.0, Vec2::ZERO).unwrap();
    spine.joints_mut()[2] = Vec2::new(10.0, 10.0);

    assert_approx(spine.segment_tangent(0).unwrap(), 0.0);
    assert_approx(spine.segment_tangent(1).unwrap(), 90.0);

    let mid = spine.segment_midpoint(1);
    assert_approx(mid.x, 10.0);
    assert_approx(mid.y, 5.0);

    assert_approx(spine.heading(0), 180.0);
    assert_approx(spine.heading(1), -90.0);
}

#[test]
fn degenerate_segment_reuses_previous_tangent() {
    let mut spine = Spine::new(5, 10.0, Vec2::ZERO).unwrap();
    spine.joints_mut()[1] = Vec2::new(0.0, 10.0);
    spine.joints_mut()[2] = Vec2::new(0.0, 20.0);
    spine.joints_mut()[3] = Vec2::new(0.0, 20.0);

    assert_eq!(spine.segment_tangent(2), None);
    assert_approx(spine.resolved_tangent(2), 90.0);

    let tangents = spine.resolved_tangents();
    assert_eq!(tangents.len(), 4);
    assert_approx(tangents[1], 90.0);
    assert_approx(tangents[2], 90.0);
}

#[test]
fn degenerate_first_segment_uses_default_direction() {
    let mut spine = Spine::new(3, 10.0, Vec2::ZERO).unwrap();
    spine.joints_mut()[1] = Vec2::ZERO;

    assert_eq!(spine.segment_tangent(0), None);
    assert_approx(spine.resolved_tangent(0), DEFAULT_TANGENT);
    assert!(spine.heading(0).is_finite());
}
