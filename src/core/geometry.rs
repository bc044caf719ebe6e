//! Rope geometry derived from the rope end and the window center.
//!
//! Everything here is a pure function of its inputs. Points are screen-space
//! pixels with +y pointing down, so an angle of 0 means the rope hangs
//! straight down from the center.

use glam::Vec2;
use std::f32::consts::PI;

/// Direction used when a projection has no defined heading (zero-length
/// vector): straight down in screen space.
pub const FALLBACK_DIRECTION: Vec2 = Vec2::new(0.0, 1.0);

/// Length and angle of the rope for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RopeGeometry {
    /// Euclidean distance from the window center to the rope end, always >= 0.
    pub length: f32,
    /// Signed angle from the vertical axis in (-π, π].
    pub angle: f32,
}

impl RopeGeometry {
    pub fn between(center: Vec2, rope_end: Vec2) -> Self {
        Self {
            length: rope_length(center, rope_end),
            angle: rope_angle(center, rope_end),
        }
    }
}

#[inline]
pub fn rope_length(center: Vec2, rope_end: Vec2) -> f32 {
    center.distance(rope_end)
}

/// `atan2(dx, dy)`, folded so that -π maps to π.
#[inline]
pub fn rope_angle(center: Vec2, rope_end: Vec2) -> f32 {
    let d = rope_end - center;
    let a = d.x.atan2(d.y);
    if a <= -PI {
        PI
    } else {
        a
    }
}

/// Project `toward` onto the circle of `radius` around `center`.
///
/// Falls back to [`FALLBACK_DIRECTION`] when `toward` coincides with `center`.
pub fn project_onto_circle(center: Vec2, toward: Vec2, radius: f32) -> Vec2 {
    let dir = (toward - center).try_normalize().unwrap_or(FALLBACK_DIRECTION);
    center + dir * radius
}

/// Map `length` into [0, 1] over `[min, max]`, clamped at both ends.
#[inline]
pub fn normalize_length(length: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span <= 0.0 {
        return if length >= max { 1.0 } else { 0.0 };
    }
    ((length - min) / span).clamp(0.0, 1.0)
}

/// Map an angle in (-π, π] to [0, 1].
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    ((angle + PI) / (2.0 * PI)).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
