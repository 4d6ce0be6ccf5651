use crate::LizardConfig;
use crate::math::polar;
use crate::runtime::chain::Spine;
use glam::Vec2;

/// Half-width of the body and markings at each spine segment.
///
/// Each section of the creature has its own trigonometric shape; the nose and the tail tip
/// use constants so the outline closes cleanly at both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyProfile {
    head_segments: usize,
    body_segments: usize,
    tail_segments: usize,
    girth: f32,
}

impl BodyProfile {
    pub fn new(config: &LizardConfig) -> Self {
        Self {
            head_segments: config.head_segments,
            body_segments: config.body_segments,
            tail_segments: config.tail_segments,
            girth: config.scale * config.chonk,
        }
    }

    fn joint_count(&self) -> usize {
        self.head_segments + self.body_segments + self.tail_segments
    }

    pub fn segment_count(&self) -> usize {
        self.joint_count() - 1
    }

    /// Distance from the spine to the body edge at segment `index`. Never negative.
    pub fn body_depth(&self, index: usize) -> f32 {
        let neck = self.head_segments;
        let waist = neck + self.body_segments;
        let i = index as f32;

        let depth = if index == 0 {
            5.0
        } else if index + 2 == self.joint_count() {
            2.0
        } else if index < neck {
            20.0 * (i / 3.14).sin() + 5.0
        } else if index == neck {
            15.0 * (i / 3.14).sin() + 5.0
        } else if index < waist {
            25.0 * ((index - neck) as f32 / (self.body_segments as f32 / 3.14)).sin()
        } else {
            10.0 * ((index - waist) as f32 / (self.tail_segments as f32 / 1.57)).cos()
        };
        (depth * self.girth).max(0.0)
    }

    /// Signed marking offset at segment `index`; its magnitude never exceeds the body depth.
    /// Negative values put the marking on the opposite side of the spine.
    pub fn marking_depth(&self, index: usize) -> f32 {
        let i = index as f32;
        let raw = 8.0
            * (i - 2.0 / 3.0).sin()
            * (i / self.joint_count() as f32 * 3.5).sin()
            * self.girth;
        let body = self.body_depth(index);
        raw.clamp(-body, body)
    }
}

/// The body outline and the marking overlay, rebuilt from the spine every tick.
///
/// Both are closed polygons of `2 * segment_count` points ordered
/// `[left_0 .. left_n-1, right_n-1 .. right_0]`, where "left" is the +90° side of the
/// tailward tangent.
#[derive(Clone, Debug)]
pub struct Contours {
    body: Vec<Vec2>,
    markings: Vec<Vec2>,
    body_depths: Vec<f32>,
    marking_depths: Vec<f32>,
}

impl Contours {
    pub fn new(profile: &BodyProfile) -> Self {
        let segment_count = profile.segment_count();
        let body_depths = (0..segment_count).map(|i| profile.body_depth(i)).collect();
        let marking_depths = (0..segment_count)
            .map(|i| profile.marking_depth(i))
            .collect();
        Self {
            body: Vec::with_capacity(segment_count * 2),
            markings: Vec::with_capacity(segment_count * 2),
            body_depths,
            marking_depths,
        }
    }

    /// Recomputes both outlines from scratch. `tangents` holds one resolved tangent per
    /// spine segment.
    pub fn rebuild(&mut self, spine: &Spine, tangents: &[f32]) {
        trace_outline(&mut self.body, spine, tangents, &self.body_depths);
        trace_outline(&mut self.markings, spine, tangents, &self.marking_depths);
    }

    pub fn body(&self) -> &[Vec2] {
        &self.body
    }

    pub fn markings(&self) -> &[Vec2] {
        &self.markings
    }

    pub fn body_depths(&self) -> &[f32] {
        &self.body_depths
    }

    pub fn marking_depths(&self) -> &[f32] {
        &self.marking_depths
    }
}

fn trace_outline(out: &mut Vec<Vec2>, spine: &Spine, tangents: &[f32], depths: &[f32]) {
    let n = depths.len().min(tangents.len()).min(spine.segment_count());
    out.clear();
    out.resize(n * 2, Vec2::ZERO);
    for i in 0..n {
        let center = spine.segment_midpoint(i);
        out[i] = center + polar(tangents[i] + 90.0, depths[i]);
        out[2 * n - 1 - i] = center + polar(tangents[i] - 90.0, depths[i]);
    }
}
