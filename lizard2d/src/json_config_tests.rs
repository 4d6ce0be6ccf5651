use crate::{Color, Error, LizardConfig};

#[test]
fn empty_object_yields_defaults() {
    let config = LizardConfig::from_json_str("{}").unwrap();
    assert_eq!(config, LizardConfig::default());
}

#[test]
fn spawn_panel_options_override_defaults() {
    let config = LizardConfig::from_json_str(
        r##"
{
  "headLength": 3,
  "bodyLength": 10,
  "tailLength": 12,
  "feetPairs": 3,
  "scale": 1.5,
  "chonk": 0.75,
  "speed": 2,
  "primaryColor": "#112233",
  "secondaryColor": "abcdef"
}
"##,
    )
    .unwrap();

    assert_eq!(config.head_segments, 3);
    assert_eq!(config.body_segments, 10);
    assert_eq!(config.tail_segments, 12);
    assert_eq!(config.feet_pairs, 3);
    assert_eq!(config.scale, 1.5);
    assert_eq!(config.chonk, 0.75);
    assert_eq!(config.speed, 2.0);
    assert_eq!(config.primary_color, Color::rgb(0x11, 0x22, 0x33));
    assert_eq!(config.secondary_color, Color::rgb(0xab, 0xcd, 0xef));
    assert_eq!(config.solver, LizardConfig::default().solver);
}

#[test]
fn segment_aliases_are_accepted() {
    let config =
        LizardConfig::from_json_str(r#"{"headSegments": 2, "bodySegments": 5, "tailSegments": 7}"#)
            .unwrap();
    assert_eq!(config.joint_count(), 14);
}

#[test]
fn parsed_config_is_validated() {
    let err = LizardConfig::from_json_str(r#"{"feetPairs": 12}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidFeetPairs { .. }));

    let err = LizardConfig::from_json_str(r#"{"primaryColor": "green"}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidColor { .. }));
}

#[test]
fn malformed_json_is_reported() {
    let err = LizardConfig::from_json_str(r#"{"headLength": "#).unwrap_err();
    assert!(matches!(err, Error::JsonParse { .. }));

    let err = LizardConfig::from_json_str(r#"{"headLength": -1}"#).unwrap_err();
    assert!(matches!(err, Error::JsonParse { .. }));
}
