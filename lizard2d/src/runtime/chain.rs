use crate::Error;
use crate::math::{angle_of, midpoint, wrap_degrees};
use glam::Vec2;

/// Tailward tangent assumed when the first segment has no direction.
pub const DEFAULT_TANGENT: f32 = 0.0;

/// Segments shorter than this have no usable direction.
pub(crate) const DEGENERATE_LENGTH: f32 = 1.0e-5;

/// Ordered joint chain; index 0 is the head, the last index the tail tip.
#[derive(Clone, Debug)]
pub struct Spine {
    joints: Vec<Vec2>,
    spacing: f32,
}

impl Spine {
    /// Lays `joint_count` joints out along +x from `origin`, `spacing` apart.
    pub fn new(joint_count: usize, spacing: f32, origin: Vec2) -> Result<Self, Error> {
        if joint_count < 2 {
            return Err(Error::InvalidValue {
                message: format!("a spine needs at least 2 joints, got {joint_count}"),
            });
        }
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(Error::InvalidValue {
                message: format!("spine spacing must be a positive number, got {spacing}"),
            });
        }

        let joints = (0..joint_count)
            .map(|i| origin + Vec2::new(i as f32 * spacing, 0.0))
            .collect();
        Ok(Self { joints, spacing })
    }

    pub fn joints(&self) -> &[Vec2] {
        &self.joints
    }

    pub(crate) fn joints_mut(&mut self) -> &mut [Vec2] {
        &mut self.joints
    }

    pub fn joint(&self, index: usize) -> Option<Vec2> {
        self.joints.get(index).copied()
    }

    pub fn head(&self) -> Vec2 {
        self.joints[0]
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn segment_count(&self) -> usize {
        self.joints.len() - 1
    }

    /// Vector from joint `index` to joint `index + 1`.
    pub fn segment_vector(&self, index: usize) -> Vec2 {
        self.joints[index + 1] - self.joints[index]
    }

    pub fn segment_midpoint(&self, index: usize) -> Vec2 {
        midpoint(self.joints[index], self.joints[index + 1])
    }

    /// Tailward direction of segment `index` in degrees, or `None` when its joints coincide.
    pub fn segment_tangent(&self, index: usize) -> Option<f32> {
        let v = self.segment_vector(index);
        (v.length() > DEGENERATE_LENGTH).then(|| angle_of(v))
    }

    /// Tangent of segment `index`, falling back to the nearest valid segment toward the
    /// head, then to [`DEFAULT_TANGENT`].
    pub fn resolved_tangent(&self, index: usize) -> f32 {
        (0..=index)
            .rev()
            .find_map(|i| self.segment_tangent(i))
            .unwrap_or(DEFAULT_TANGENT)
    }

    /// Fills `out` with every segment's resolved tangent in one pass.
    pub fn resolve_tangents_into(&self, out: &mut Vec<f32>) {
        out.clear();
        let mut previous = DEFAULT_TANGENT;
        for i in 0..self.segment_count() {
            match self.segment_tangent(i) {
                Some(tangent) => previous = tangent,
                None => log::trace!("segment {i} is degenerate, reusing tangent {previous}"),
            }
            out.push(previous);
        }
    }

    pub fn resolved_tangents(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.segment_count());
        self.resolve_tangents_into(&mut out);
        out
    }

    /// Headward direction of segment `index` in degrees.
    pub fn heading(&self, index: usize) -> f32 {
        wrap_degrees(self.resolved_tangent(index) + 180.0)
    }
}
