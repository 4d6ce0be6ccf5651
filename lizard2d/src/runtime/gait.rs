use crate::math::{polar, with_length};
use crate::runtime::chain::Spine;
use crate::{Error, GaitParams, LizardConfig};
use glam::Vec2;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum FootState {
    /// Planted; waits for its step target to drift past the trigger distance.
    #[default]
    Idle,
    /// Travelling toward a step target that is recomputed every tick.
    Stepping,
}

#[derive(Clone, Debug)]
pub struct Foot {
    anchor: usize,
    side: Side,
    pair: usize,
    opposite: usize,
    position: Vec2,
    state: FootState,
}

impl Foot {
    /// Spine joint this foot steps around.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Index of the foot pair, counted from the head.
    pub fn pair(&self) -> usize {
        self.pair
    }

    /// Index of the other foot of the same pair.
    pub fn opposite(&self) -> usize {
        self.opposite
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn state(&self) -> FootState {
        self.state
    }

    pub fn is_stepping(&self) -> bool {
        self.state == FootState::Stepping
    }
}

/// Spine joint each foot pair anchors to, counted from the head.
///
/// Pairs are spread over a stretch twice the head length, starting just behind the neck.
pub fn pair_anchors(config: &LizardConfig) -> Vec<usize> {
    let pairs = config.feet_pairs.max(1);
    let head = config.head_segments as f32;
    let leg_spacing = head * 2.0 / pairs as f32;
    (0..pairs)
        .map(|pair| (head + leg_spacing * pair as f32).round() as usize + 1)
        .collect()
}

/// [`pair_anchors`], rejecting any anchor without a spine segment behind it.
pub fn checked_pair_anchors(
    config: &LizardConfig,
    segment_count: usize,
) -> Result<Vec<usize>, Error> {
    let anchors = pair_anchors(config);
    if let Some((pair, &anchor)) = anchors
        .iter()
        .enumerate()
        .find(|&(_, &anchor)| anchor >= segment_count)
    {
        return Err(Error::AnchorOutOfRange {
            foot: pair,
            anchor,
            segment_count,
        });
    }
    Ok(anchors)
}

/// Owns the feet and decides, per tick, which of them step.
#[derive(Clone, Debug)]
pub struct GaitController {
    feet: Vec<Foot>,
    params: GaitParams,
    step_length: f32,
    speed: f32,
}

impl GaitController {
    /// Places every foot on its resting step target. Fails without building anything if an
    /// anchor falls outside the spine's segments.
    pub fn new(spine: &Spine, config: &LizardConfig) -> Result<Self, Error> {
        let anchors = checked_pair_anchors(config, spine.segment_count())?;
        let pairs = anchors.len();

        let mut gait = Self {
            feet: Vec::with_capacity(pairs * 2),
            params: config.gait,
            step_length: config.gait.step_length * config.scale,
            speed: config.speed,
        };
        for (side_index, side) in [Side::Left, Side::Right].into_iter().enumerate() {
            for (pair, &anchor) in anchors.iter().enumerate() {
                let index = side_index * pairs + pair;
                gait.feet.push(Foot {
                    anchor,
                    side,
                    pair,
                    opposite: (index + pairs) % (pairs * 2),
                    position: gait.next_step(spine, anchor, side),
                    state: FootState::Idle,
                });
            }
        }
        log::debug!("gait: {} feet anchored at joints {anchors:?}", gait.feet.len());
        Ok(gait)
    }

    pub fn feet(&self) -> &[Foot] {
        &self.feet
    }

    /// Where a foot anchored at `anchor` wants to stand right now.
    pub fn next_step(&self, spine: &Spine, anchor: usize, side: Side) -> Vec2 {
        let angle = spine.heading(anchor) + side.sign() * self.params.step_angle_degrees;
        spine.joints()[anchor] + polar(angle, self.step_length)
    }

    /// A foot may lift only while neither the foot before it nor its opposite is stepping.
    fn can_lift(&self, index: usize) -> bool {
        let previous_planted = index
            .checked_sub(1)
            .is_none_or(|previous| !self.feet[previous].is_stepping());
        previous_planted && !self.feet[self.feet[index].opposite].is_stepping()
    }

    pub fn advance(&mut self, spine: &Spine) {
        let reach = self.params.max_foot_speed * self.speed;
        for index in 0..self.feet.len() {
            let foot = &self.feet[index];
            let step = self.next_step(spine, foot.anchor, foot.side);
            let remaining = step - foot.position;

            if foot.state == FootState::Idle
                && remaining.length() > self.params.step_trigger
                && self.can_lift(index)
            {
                log::trace!("foot {index} lifts toward {step}");
                self.feet[index].state = FootState::Stepping;
            }

            let foot = &mut self.feet[index];
            if foot.state == FootState::Stepping {
                if remaining.length() <= reach {
                    foot.position = step;
                    foot.state = FootState::Idle;
                    log::trace!("foot {index} lands at {step}");
                } else {
                    foot.position += with_length(remaining, reach);
                }
            }
        }
    }
}
