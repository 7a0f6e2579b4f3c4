//! Planar math primitives for the seesaw balance simulator.
//!
//! The board rotates about its pivot in screen space. Placing a weight from a
//! pointer event requires the inverse rotation: the pointer arrives in the
//! tilted frame and must be mapped back onto the flat board.

use nalgebra as na;

/// 2D vector alias.
pub type Vec2 = na::Vector2<f64>;

/// Rotate `v` about the origin by `angle_rad`.
///
/// Standard planar rotation; with screen coordinates (y down) a positive
/// angle matches the CSS `rotate()` direction.
#[inline]
pub fn rotate(v: Vec2, angle_rad: f64) -> Vec2 {
    let (s, c) = angle_rad.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// X component of `v` rotated back by the board's current tilt.
///
/// `v` is a pointer position relative to the pivot, in the frame rotated by
/// `tilt_deg`. Rotating by the negative tilt recovers where the point lies
/// along the un-tilted board axis.
#[inline]
pub fn unrotate_x(v: Vec2, tilt_deg: f64) -> f64 {
    rotate(v, -tilt_deg.to_radians()).x
}
