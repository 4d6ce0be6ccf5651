//! wgpu renderer for [`lizard2d::DrawList`]s.

#![forbid(unsafe_code)]

mod renderer;

pub use renderer::*;
