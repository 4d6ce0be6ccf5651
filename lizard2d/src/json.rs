//! Loading [`LizardConfig`] from the option object produced by the spawn panel.

use crate::{Color, Error, LizardConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDef {
    #[serde(default, alias = "headSegments")]
    head_length: Option<usize>,
    #[serde(default, alias = "bodySegments")]
    body_length: Option<usize>,
    #[serde(default, alias = "tailSegments")]
    tail_length: Option<usize>,
    #[serde(default)]
    feet_pairs: Option<usize>,
    #[serde(default)]
    scale: Option<f32>,
    #[serde(default)]
    chonk: Option<f32>,
    #[serde(default)]
    speed: Option<f32>,
    #[serde(default)]
    primary_color: Option<String>,
    #[serde(default)]
    secondary_color: Option<String>,
}

impl LizardConfig {
    /// Parses a JSON option object such as
    /// `{"headLength": 4, "bodyLength": 8, "tailLength": 10, "feetPairs": 2, "primaryColor": "#65ab8a"}`.
    ///
    /// Missing fields keep their defaults; the result is validated.
    pub fn from_json_str(input: &str) -> Result<Self, Error> {
        let def: ConfigDef = serde_json::from_str(input).map_err(|e| Error::JsonParse {
            message: e.to_string(),
        })?;

        let mut config = LizardConfig::default();
        if let Some(v) = def.head_length {
            config.head_segments = v;
        }
        if let Some(v) = def.body_length {
            config.body_segments = v;
        }
        if let Some(v) = def.tail_length {
            config.tail_segments = v;
        }
        if let Some(v) = def.feet_pairs {
            config.feet_pairs = v;
        }
        if let Some(v) = def.scale {
            config.scale = v;
        }
        if let Some(v) = def.chonk {
            config.chonk = v;
        }
        if let Some(v) = def.speed {
            config.speed = v;
        }
        if let Some(v) = def.primary_color.as_deref() {
            config.primary_color = Color::from_hex(v)?;
        }
        if let Some(v) = def.secondary_color.as_deref() {
            config.secondary_color = Color::from_hex(v)?;
        }

        config.validate()?;
        Ok(config)
    }
}
