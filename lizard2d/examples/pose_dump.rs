use lizard2d::{Bounds, Lizard, LizardConfig, Target, Vec2};
use serde_json::json;
use std::path::PathBuf;

fn load_config(path: Option<&PathBuf>) -> LizardConfig {
    let Some(path) = path else {
        return LizardConfig::default();
    };
    let json = std::fs::read_to_string(path).expect("read config json");
    LizardConfig::from_json_str(&json).expect("parse config json")
}

/// Lissajous path through the viewport; the pointer goes quiet for the last quarter of
/// every 200 ticks so the head also cruises.
fn scripted_target(tick: usize, bounds: &Bounds) -> Target {
    let t = tick as f32 * 0.03;
    let half = (bounds.max - bounds.min) * 0.4;
    let point = bounds.center() + Vec2::new(t.cos() * half.x, (1.7 * t).sin() * half.y);
    if tick % 200 < 150 {
        Target::fresh(point)
    } else {
        Target::stale(point)
    }
}

fn points(values: &[Vec2]) -> Vec<[f32; 2]> {
    values.iter().map(|p| p.to_array()).collect()
}

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut positional = Vec::<String>::new();
    let mut width = 800.0f32;
    let mut height = 600.0f32;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                if let Some((w, h)) = args.get(i + 1).and_then(|s| s.split_once('x')) {
                    width = w.parse().unwrap_or(width);
                    height = h.parse().unwrap_or(height);
                }
                i += 2;
            }
            other => {
                positional.push(other.to_string());
                i += 1;
            }
        }
    }

    let config_path = positional
        .first()
        .filter(|p| p.as_str() != "-")
        .map(PathBuf::from);
    let ticks: usize = positional
        .get(1)
        .cloned()
        .unwrap_or_else(|| "120".to_string())
        .parse()
        .unwrap_or(120);

    let bounds = Bounds::from_size(width, height);
    let config = load_config(config_path.as_ref());
    let mut lizard = Lizard::spawn(config, bounds.center()).expect("spawn lizard");

    let mut escapes = 0usize;
    let mut corrections = 0usize;
    for tick in 0..ticks {
        let report = lizard.tick(&scripted_target(tick, &bounds), Some(&bounds));
        escapes += usize::from(report.escaped);
        corrections += report.corrections;
    }

    let pose = lizard.pose();
    let feet: Vec<_> = pose
        .feet
        .iter()
        .enumerate()
        .map(|(i, foot)| {
            json!({
                "i": i,
                "anchor": foot.anchor(),
                "side": format!("{:?}", foot.side()),
                "pair": foot.pair(),
                "opposite": foot.opposite(),
                "stepping": if foot.is_stepping() { 1 } else { 0 },
                "position": foot.position().to_array(),
            })
        })
        .collect();
    let legs: Vec<_> = pose
        .legs
        .iter()
        .map(|leg| {
            json!({
                "foot": leg.foot(),
                "hip": leg.hip().to_array(),
                "knee": leg.knee().to_array(),
                "ankle": leg.ankle().to_array(),
            })
        })
        .collect();

    let out = json!({
        "ticks": ticks,
        "bounds": {"min": bounds.min.to_array(), "max": bounds.max.to_array()},
        "config": {
            "headLength": lizard.config().head_segments,
            "bodyLength": lizard.config().body_segments,
            "tailLength": lizard.config().tail_segments,
            "feetPairs": lizard.config().feet_pairs,
            "scale": lizard.config().scale,
            "chonk": lizard.config().chonk,
            "speed": lizard.config().speed,
            "primaryColor": lizard.config().primary_color.to_hex(),
            "secondaryColor": lizard.config().secondary_color.to_hex(),
        },
        "solver": {"escapes": escapes, "corrections": corrections},
        "joints": points(pose.joints),
        "tangents": lizard.tangents(),
        "body": points(pose.body),
        "markings": points(pose.markings),
        "feet": feet,
        "legs": legs,
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&out).expect("serialize pose")
    );
}
