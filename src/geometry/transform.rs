//! Rotation, reflection and polar-coordinate helpers.
//!
//! Angles are in degrees, measured from the positive x-axis. Canvas space has
//! y pointing down, so a positive angle turns clockwise on screen.

use egui::{Pos2, Vec2};

/// Angle of sector boundary `index` when the circle is split into `sectors`.
pub fn sector_angle(index: u32, sectors: u32) -> f32 {
    index as f32 * (360.0 / sectors as f32)
}

/// Rotate `p` around `center` by `angle_deg`.
pub fn rotate_around(p: Pos2, center: Pos2, angle_deg: f32) -> Pos2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let d = p - center;
    Pos2::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Reflect `p` across the vertical line `x = axis_x`.
pub fn mirror_across_vertical_axis(p: Pos2, axis_x: f32) -> Pos2 {
    Pos2::new(2.0 * axis_x - p.x, p.y)
}

/// Returns `(radius, angle_deg)` of `p` relative to `center`.
pub fn to_polar(p: Pos2, center: Pos2) -> (f32, f32) {
    let d = p - center;
    (d.length(), d.y.atan2(d.x).to_degrees())
}

pub fn from_polar(radius: f32, angle_deg: f32, center: Pos2) -> Pos2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    center + Vec2::new(radius * cos, radius * sin)
}

pub fn distance(a: Pos2, b: Pos2) -> f32 {
    a.distance(b)
}
