use crate::math::{directed_angle, polar, rotate, with_length};
use crate::runtime::chain::{DEFAULT_TANGENT, Spine};
use crate::{Bounds, CurvePolicy, SolverParams, Target};
use glam::Vec2;

/// What one solver pass did, for callers that want to observe it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SolveReport {
    /// Translation applied to the head this tick.
    pub head_step: Vec2,
    /// The steering vector was replaced because it left the bounds.
    pub escaped: bool,
    /// Number of segments re-aimed by curvature limiting.
    pub corrections: usize,
}

/// Steers the head toward `target`, then drags the rest of the chain behind it.
///
/// Relaxation and curvature limiting share one head-to-tail sweep: each joint is placed
/// exactly `spacing` behind its already-final predecessor, along a direction that bends at
/// most `turn_limit_degrees` away from the previous segment.
pub fn advance_spine(
    spine: &mut Spine,
    target: &Target,
    bounds: Option<&Bounds>,
    params: &SolverParams,
    speed: f32,
) -> SolveReport {
    let (head_step, escaped) = steer_head(spine, target, bounds, params, speed);
    let corrections = relax_chain(spine, params);
    SolveReport {
        head_step,
        escaped,
        corrections,
    }
}

fn steer_head(
    spine: &mut Spine,
    target: &Target,
    bounds: Option<&Bounds>,
    params: &SolverParams,
    speed: f32,
) -> (Vec2, bool) {
    let head = spine.head();
    let mut steering = if target.fresh {
        target.point - head
    } else {
        polar(spine.heading(0), params.cruise_length)
    };

    let mut escaped = false;
    if let Some(bounds) = bounds {
        if !bounds.contains(head + steering) {
            log::debug!(
                "steering from {head} leaves bounds, heading back to {}",
                bounds.center()
            );
            steering = bounds.center() - head;
            escaped = true;
        }
    }

    let distance = steering.length();
    if distance <= params.arrival_radius {
        return (Vec2::ZERO, escaped);
    }

    let easing = if target.fresh {
        (distance / params.easing_distance).min(1.0)
    } else {
        1.0
    };
    let step = with_length(steering, distance.min(params.max_head_step)) * easing * speed;
    spine.joints_mut()[0] += step;
    (step, escaped)
}

fn relax_chain(spine: &mut Spine, params: &SolverParams) -> usize {
    let spacing = spine.spacing();
    let limit = params.turn_limit_degrees;
    let joints = spine.joints_mut();

    let mut corrections = 0;
    // Headward vector of the previous, already corrected segment.
    let mut previous: Option<Vec2> = None;
    for i in 0..joints.len() - 1 {
        let anchor = joints[i];
        let mut forward = with_length(anchor - joints[i + 1], spacing);
        if forward == Vec2::ZERO {
            forward = previous.unwrap_or_else(|| polar(DEFAULT_TANGENT + 180.0, spacing));
        }

        if let Some(previous) = previous {
            let bend = directed_angle(previous, forward);
            if bend.abs() > limit {
                forward = match params.curve_policy {
                    CurvePolicy::Align => previous,
                    CurvePolicy::AlignAndRotate { degrees } => {
                        rotate(previous, degrees.copysign(bend))
                    }
                };
                corrections += 1;
            }
        }

        joints[i + 1] = anchor - forward;
        previous = Some(forward);
    }
    corrections
}
