//! Procedural animation core for a legged 2D lizard.
//!
//! Each tick the head steers toward a target, the spine relaxes behind it with bounded
//! curvature, body and marking outlines are rebuilt around the spine, feet step in an
//! alternating gait and legs are re-posed between spine and feet.
//!
//! This crate is renderer-agnostic. It exposes the pose as point sequences and can
//! tessellate it into a [`DrawList`]; GPU integrations live in separate crates
//! (e.g. `lizard2d-wgpu`).

#![forbid(unsafe_code)]

mod error;
mod geometry;
mod input;
pub mod math;
mod model;
mod render;
mod runtime;

#[cfg(feature = "json")]
mod json;

pub use error::*;
pub use geometry::{smooth_closed, smooth_open};
pub use input::*;
pub use model::*;
pub use render::*;
pub use runtime::*;

/// Re-exported so callers can name points without depending on `glam` directly.
pub use glam::Vec2;




#[cfg(test)]
mod render_tests;

#[cfg(all(test, feature = "json"))]
mod json_config_tests;
