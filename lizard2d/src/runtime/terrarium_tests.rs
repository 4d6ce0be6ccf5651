use crate::{Bounds, LizardConfig, Target, Terrarium, Vec2};

#[test]
fn spawn_places_the_lizard_at_the_center_of_the_bounds() {
    let mut terrarium = Terrarium::new(Some(Bounds::from_size(800.0, 600.0)));
    let lizard = terrarium.spawn(LizardConfig::default()).unwrap();
    assert_eq!(lizard.spine().head(), Vec2::new(400.0, 300.0));

    let mut unbounded = Terrarium::default();
    let lizard = unbounded.spawn(LizardConfig::default()).unwrap();
    assert_eq!(lizard.spine().head(), Vec2::ZERO);
}

#[test]
fn spawn_replaces_existing_lizards() {
    let mut terrarium = Terrarium::new(Some(Bounds::from_size(800.0, 600.0)));
    terrarium.add(LizardConfig::default(), Vec2::ZERO).unwrap();
    terrarium
        .add(LizardConfig::default(), Vec2::new(100.0, 100.0))
        .unwrap();
    assert_eq!(terrarium.lizards().len(), 2);

    let config = LizardConfig {
        feet_pairs: 3,
        ..LizardConfig::default()
    };
    terrarium.spawn(config).unwrap();
    assert_eq!(terrarium.lizards().len(), 1);
    assert_eq!(terrarium.lizards()[0].feet().len(), 6);
}

#[test]
fn failed_spawn_keeps_the_current_lizards() {
    let mut terrarium = Terrarium::default();
    terrarium.spawn(LizardConfig::default()).unwrap();

    let broken = LizardConfig {
        tail_segments: 0,
        ..LizardConfig::default()
    };
    assert!(terrarium.spawn(broken).is_err());
    assert_eq!(terrarium.lizards().len(), 1);
}

#[test]
fn tick_drives_every_lizard_toward_the_shared_target() {
    let mut terrarium = Terrarium::default();
    let first = terrarium
        .add(LizardConfig::default(), Vec2::new(0.0, 0.0))
        .unwrap();
    let second = terrarium
        .add(LizardConfig::default(), Vec2::new(0.0, 200.0))
        .unwrap();
    assert_eq!((first, second), (0, 1));

    let target = Target::fresh(Vec2::new(-500.0, 100.0));
    let before: Vec<_> = terrarium
        .lizards()
        .iter()
        .map(|l| l.spine().head().distance(target.point))
        .collect();
    for _ in 0..10 {
        terrarium.tick(&target);
    }
    for (lizard, before) in terrarium.lizards().iter().zip(before) {
        assert!(lizard.spine().head().distance(target.point) < before);
    }
}

#[test]
fn despawn_all_empties_the_terrarium() {
    let mut terrarium = Terrarium::default();
    terrarium.spawn(LizardConfig::default()).unwrap();
    terrarium.despawn_all();
    assert!(terrarium.lizards().is_empty());
    terrarium.tick(&Target::stale(Vec2::ZERO));
}

#[test]
fn resizing_the_bounds_is_reflected_immediately() {
    let mut terrarium = Terrarium::default();
    assert!(terrarium.bounds().is_none());
    let bounds = Bounds::from_size(320.0, 240.0);
    terrarium.set_bounds(Some(bounds));
    assert_eq!(terrarium.bounds(), Some(&bounds));
}
