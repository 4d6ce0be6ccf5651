//! Degree-based vector helpers on top of `glam::Vec2`.
//!
//! Angles follow screen conventions: 0° points along +x and positive angles turn
//! toward +y.

use glam::Vec2;

/// Vector of `length` pointing at `degrees`.
pub fn polar(degrees: f32, length: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()) * length
}

/// Direction of `v` in degrees, in `(-180, 180]`. Zero vectors report 0.
pub fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}

/// Signed angle in degrees that rotates `from` onto `to`, in `[-180, 180]`.
pub fn directed_angle(from: Vec2, to: Vec2) -> f32 {
    from.perp_dot(to).atan2(from.dot(to)).to_degrees()
}

/// `v` rescaled to `length`, keeping its direction. Zero vectors stay zero.
pub fn with_length(v: Vec2, length: f32) -> Vec2 {
    v.normalize_or_zero() * length
}

/// `v` rotated by `degrees`.
pub fn rotate(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

pub(crate) fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Wraps `degrees` into `(-180, 180]`.
pub(crate) fn wrap_degrees(mut degrees: f32) -> f32 {
    degrees = degrees.rem_euclid(360.0);
    if degrees > 180.0 {
        degrees -= 360.0;
    }
    degrees
}
