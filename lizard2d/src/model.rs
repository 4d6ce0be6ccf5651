use crate::Error;

/// Distance between adjacent spine joints at `scale == 1`.
pub const SPACING_PER_SCALE: f32 = 20.0;

/// Foot radius and leg stroke width at `scale == 1` and `chonk == 1`.
pub const LIMB_SIZE_PER_SCALE: f32 = 12.0;

/// 8-bit sRGB color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Result<Self, Error> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        let invalid = || Error::InvalidColor {
            value: value.to_string(),
        };
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Shifts every channel by `round(2.55 * percent)`, saturating at 0 and 255.
    pub fn brightness(self, percent: f32) -> Self {
        let amount = (2.55 * percent).round() as i32;
        let shift = |channel: u8| (i32::from(channel) + amount).clamp(0, 255) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }

    /// Normalized sRGB components with opaque alpha.
    pub fn to_rgba(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            1.0,
        ]
    }
}

/// What the solver does with a segment that bends past the turn limit.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum CurvePolicy {
    /// Align the segment with the previous one.
    #[default]
    Align,
    /// Align, then rotate back toward the original bend by `degrees`.
    AlignAndRotate { degrees: f32 },
}

/// Head steering and chain relaxation tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverParams {
    /// The head stops steering once the target is this close.
    pub arrival_radius: f32,
    /// Longest distance the head travels in one tick, before the speed factor.
    pub max_head_step: f32,
    pub turn_limit_degrees: f32,
    /// Fresh targets closer than this are approached with proportional easing.
    pub easing_distance: f32,
    /// Length of the cruise vector used while the target is stale.
    pub cruise_length: f32,
    pub curve_policy: CurvePolicy,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            arrival_radius: 45.0,
            max_head_step: 10.0,
            turn_limit_degrees: 20.0,
            easing_distance: 200.0,
            cruise_length: 50.0,
            curve_policy: CurvePolicy::Align,
        }
    }
}

/// Foot stepping and leg shaping tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GaitParams {
    /// A foot lifts once its step target is farther away than this.
    pub step_trigger: f32,
    /// Longest distance a stepping foot travels in one tick, before the speed factor.
    pub max_foot_speed: f32,
    /// Angle between the anchor's heading and the step target; mirrored for the left side.
    pub step_angle_degrees: f32,
    /// Distance from the anchor to the step target, before the scale factor.
    pub step_length: f32,
    /// Knee displacement along the anchor tangent.
    pub knee_offset: f32,
}

impl Default for GaitParams {
    fn default() -> Self {
        Self {
            step_trigger: 85.0,
            max_foot_speed: 30.0,
            step_angle_degrees: 55.0,
            step_length: 40.0,
            knee_offset: 20.0,
        }
    }
}

/// Static creature configuration. Immutable once a lizard is spawned from it.
#[derive(Clone, Debug, PartialEq)]
pub struct LizardConfig {
    pub head_segments: usize,
    pub body_segments: usize,
    pub tail_segments: usize,
    pub feet_pairs: usize,
    pub scale: f32,
    /// Girth multiplier for the body, feet and legs.
    pub chonk: f32,
    pub speed: f32,
    pub primary_color: Color,
    pub secondary_color: Color,
    pub solver: SolverParams,
    pub gait: GaitParams,
}

impl Default for LizardConfig {
    fn default() -> Self {
        Self {
            head_segments: 4,
            body_segments: 8,
            tail_segments: 10,
            feet_pairs: 2,
            scale: 1.0,
            chonk: 1.0,
            speed: 1.0,
            primary_color: Color::rgb(0x65, 0xab, 0x8a),
            secondary_color: Color::rgb(0xa3, 0x46, 0x3e),
            solver: SolverParams::default(),
            gait: GaitParams::default(),
        }
    }
}

impl LizardConfig {
    pub fn joint_count(&self) -> usize {
        self.head_segments + self.body_segments + self.tail_segments
    }

    pub fn segment_count(&self) -> usize {
        self.joint_count().saturating_sub(1)
    }

    pub fn spacing(&self) -> f32 {
        SPACING_PER_SCALE * self.scale
    }

    pub fn foot_radius(&self) -> f32 {
        LIMB_SIZE_PER_SCALE * self.scale * self.chonk
    }

    pub fn limb_width(&self) -> f32 {
        LIMB_SIZE_PER_SCALE * self.scale * self.chonk
    }

    /// Checks every parameter that spawning depends on. Anchor placement is checked
    /// separately by the gait layout since it depends on the derived spine length.
    pub fn validate(&self) -> Result<(), Error> {
        for (section, value) in [
            ("head", self.head_segments),
            ("body", self.body_segments),
            ("tail", self.tail_segments),
        ] {
            if value == 0 {
                return Err(Error::InvalidSegmentCount { section, value });
            }
        }
        if self.feet_pairs == 0 || self.feet_pairs > self.body_segments {
            return Err(Error::InvalidFeetPairs {
                feet_pairs: self.feet_pairs,
                body_segments: self.body_segments,
            });
        }

        require_positive("scale", self.scale)?;
        require_positive("chonk", self.chonk)?;
        require_positive("speed", self.speed)?;

        let solver = &self.solver;
        require_positive("arrival radius", solver.arrival_radius)?;
        require_positive("max head step", solver.max_head_step)?;
        require_positive("easing distance", solver.easing_distance)?;
        require_positive("cruise length", solver.cruise_length)?;
        require_positive("turn limit", solver.turn_limit_degrees)?;
        if solver.turn_limit_degrees > 180.0 {
            return Err(Error::InvalidValue {
                message: format!(
                    "turn limit must not exceed 180 degrees, got {}",
                    solver.turn_limit_degrees
                ),
            });
        }
        if let CurvePolicy::AlignAndRotate { degrees } = solver.curve_policy {
            if !degrees.is_finite() || degrees < 0.0 || degrees > solver.turn_limit_degrees {
                return Err(Error::InvalidValue {
                    message: format!(
                        "curve over-rotation must be within 0..={} degrees, got {degrees}",
                        solver.turn_limit_degrees
                    ),
                });
            }
        }

        let gait = &self.gait;
        require_positive("step trigger", gait.step_trigger)?;
        require_positive("max foot speed", gait.max_foot_speed)?;
        require_positive("step length", gait.step_length)?;
        if !gait.step_angle_degrees.is_finite() {
            return Err(Error::InvalidValue {
                message: format!("step angle must be finite, got {}", gait.step_angle_degrees),
            });
        }
        if !gait.knee_offset.is_finite() {
            return Err(Error::InvalidValue {
                message: format!("knee offset must be finite, got {}", gait.knee_offset),
            });
        }

        Ok(())
    }
}

fn require_positive(name: &str, value: f32) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            message: format!("{name} must be a positive number, got {value}"),
        })
    }
}
