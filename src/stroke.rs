use egui::Color32;
use std::sync::Arc;

use crate::config::CanvasConfig;
use crate::geometry::Point;

// Immutable stroke for sharing
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    width: u32,
    color: Color32,
    mirrored: bool,
    // Kept for parity with older drawings; nothing currently sets it.
    is_eraser_stroke: bool,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    /// Create a new immutable stroke. `points` must not be empty.
    pub fn new(points: Vec<Point>, width: u32, color: Color32, mirrored: bool) -> Self {
        debug_assert!(!points.is_empty(), "a stroke needs at least one point");
        Self {
            points,
            width,
            color,
            mirrored,
            is_eraser_stroke: false,
        }
    }

    // Create a new reference-counted Stroke
    pub fn new_ref(points: Vec<Point>, width: u32, color: Color32, mirrored: bool) -> StrokeRef {
        Arc::new(Self::new(points, width, color, mirrored))
    }

    /// A stroke made of `points` that inherits every render attribute of `self`.
    pub fn fragment(&self, points: Vec<Point>) -> Self {
        Self {
            points,
            width: self.width,
            color: self.color,
            mirrored: self.mirrored,
            is_eraser_stroke: false,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn mirrored(&self) -> bool {
        self.mirrored
    }

    pub fn is_eraser_stroke(&self) -> bool {
        self.is_eraser_stroke
    }
}

/// Points gathered between a press and a release.
///
/// The builder holds no render attributes: those are taken from the live
/// config when the path is previewed or committed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeBuilder {
    points: Vec<Point>,
}

impl StrokeBuilder {
    pub fn new(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Finish the path, snapshotting width, color and reflecting from `config`.
    pub fn finish(self, config: &CanvasConfig) -> Option<StrokeRef> {
        if self.points.is_empty() {
            return None;
        }
        Some(Stroke::new_ref(
            self.points,
            config.stroke_width(),
            config.color(),
            config.reflecting,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_snapshots_config() {
        let mut config = CanvasConfig::default();
        config.set_stroke_width(9).unwrap();
        config.set_color(Color32::GREEN);
        config.reflecting = true;

        let mut builder = StrokeBuilder::new(Point::new(1, 2));
        builder.add_point(Point::new(3, 4));
        let stroke = builder.finish(&config).unwrap();

        // Later config changes must not leak into the committed stroke
        config.set_stroke_width(2).unwrap();
        config.reflecting = false;

        assert_eq!(stroke.points(), &[Point::new(1, 2), Point::new(3, 4)]);
        assert_eq!(stroke.width(), 9);
        assert_eq!(stroke.color(), Color32::GREEN);
        assert!(stroke.mirrored());
        assert!(!stroke.is_eraser_stroke());
    }

    #[test]
    fn test_fragment_inherits_attributes() {
        let parent = Stroke::new(
            vec![Point::new(0, 0), Point::new(5, 5), Point::new(9, 9)],
            7,
            Color32::BLUE,
            true,
        );
        let child = parent.fragment(vec![Point::new(9, 9)]);
        assert_eq!(child.width(), 7);
        assert_eq!(child.color(), Color32::BLUE);
        assert!(child.mirrored());
        assert_eq!(child.len(), 1);
    }
}
