use egui::Pos2;

/// A point in canvas pixel space.
///
/// Points are recorded exactly as the pointer reported them (rounded to whole
/// pixels) and never change afterwards; every derived position (rotated or
/// mirrored images) is computed as an `egui::Pos2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a floating point position to the nearest pixel.
    pub fn from_pos2(pos: Pos2) -> Self {
        Self {
            x: pos.x.round() as i32,
            y: pos.y.round() as i32,
        }
    }

    pub fn to_pos2(self) -> Pos2 {
        Pos2::new(self.x as f32, self.y as f32)
    }
}

impl From<Point> for Pos2 {
    fn from(point: Point) -> Self {
        point.to_pos2()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
