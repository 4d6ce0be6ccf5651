use crate::math::{midpoint, polar};
use crate::runtime::chain::Spine;
use crate::runtime::gait::Foot;
use glam::Vec2;

/// Three-point leg pose: hip on the spine, ankle on the foot, knee bent tailward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Leg {
    foot: usize,
    hip: Vec2,
    knee: Vec2,
    ankle: Vec2,
}

impl Leg {
    /// Index of the foot this leg ends in.
    pub fn foot(&self) -> usize {
        self.foot
    }

    pub fn hip(&self) -> Vec2 {
        self.hip
    }

    pub fn knee(&self) -> Vec2 {
        self.knee
    }

    pub fn ankle(&self) -> Vec2 {
        self.ankle
    }

    pub fn points(&self) -> [Vec2; 3] {
        [self.hip, self.knee, self.ankle]
    }
}

#[derive(Clone, Debug)]
pub struct LimbPlacer {
    legs: Vec<Leg>,
    knee_offset: f32,
}

impl LimbPlacer {
    pub fn new(knee_offset: f32) -> Self {
        Self {
            legs: Vec::new(),
            knee_offset,
        }
    }

    /// Re-derives one leg per foot. `tangents` holds one resolved tangent per spine segment.
    pub fn rebuild(&mut self, spine: &Spine, feet: &[Foot], tangents: &[f32]) {
        let joints = spine.joints();
        self.legs.clear();
        self.legs.extend(feet.iter().enumerate().map(|(index, foot)| {
            let hip = joints[foot.anchor()];
            let ankle = foot.position();
            let knee = midpoint(hip, ankle) + polar(tangents[foot.anchor()], self.knee_offset);
            Leg {
                foot: index,
                hip,
                knee,
                ankle,
            }
        }));
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }
}
