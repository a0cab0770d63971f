// src/renderer/mod.rs
//! Rotational and mirror replication of strokes.
//!
//! The renderer never draws directly. It turns strokes into [`PaintedMark`]s
//! and hands each one to a [`Surface`], so the same code feeds the on-screen
//! egui painter, the off-screen bitmap used for thumbnails, and tests.

mod painter;
mod raster;

use egui::{Color32, Pos2};

use crate::config::CanvasConfig;
use crate::geometry::{
    from_polar, mirror_across_vertical_axis, rotate_around, sector_angle, Point,
};
use crate::stroke::{Stroke, StrokeRef};
use crate::stroke_store::StrokeStore;

pub use painter::PainterSurface;
pub use raster::{render_to_bitmap, RasterSurface};

/// Line segments are drawn at `width / LINE_THINNING`; single points use the full width.
pub const LINE_THINNING: f32 = std::f32::consts::SQRT_2;
pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;
pub const GUIDE_LINE_COLOR: Color32 = Color32::WHITE;
pub const GUIDE_LINE_WIDTH: f32 = 1.0;

/// How a mark combines with what is already on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Normal painting
    SourceOver,
    /// Remove destination coverage where the mark lands (eraser preview)
    DestinationOut,
}

/// A single primitive in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    Disc { center: Pos2, diameter: f32 },
    Segment { from: Pos2, to: Pos2, width: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintedMark {
    pub mark: Mark,
    pub color: Color32,
    pub composite: Composite,
}

/// Anything marks can be painted onto.
pub trait Surface {
    fn paint(&mut self, mark: &PaintedMark);
}

/// Records marks in paint order.
impl Surface for Vec<PaintedMark> {
    fn paint(&mut self, mark: &PaintedMark) {
        self.push(*mark);
    }
}

/// One rotation, optionally preceded by a reflection across the vertical
/// axis through the canvas center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorTransform {
    pub angle: f32,
    pub mirrored: bool,
}

impl SectorTransform {
    pub fn apply(&self, p: Pos2, center: Pos2) -> Pos2 {
        let p = if self.mirrored {
            mirror_across_vertical_axis(p, center.x)
        } else {
            p
        };
        rotate_around(p, center, self.angle)
    }
}

/// Render attributes for one path
#[derive(Debug, Clone, Copy)]
struct Appearance {
    width: u32,
    color: Color32,
    mirrored: bool,
    composite: Composite,
}

/// Replicates strokes around the canvas center using the live config.
pub struct SymmetryRenderer<'a> {
    config: &'a CanvasConfig,
}

impl<'a> SymmetryRenderer<'a> {
    pub fn new(config: &'a CanvasConfig) -> Self {
        Self { config }
    }

    /// Every sector rotation, each followed by its mirrored twin when `mirrored` is set.
    pub fn sector_transforms(&self, mirrored: bool) -> Vec<SectorTransform> {
        let sectors = self.config.sector_count();
        let mut transforms = Vec::with_capacity(sectors as usize * if mirrored { 2 } else { 1 });
        for k in 0..sectors {
            let angle = sector_angle(k, sectors);
            transforms.push(SectorTransform { angle, mirrored: false });
            if mirrored {
                transforms.push(SectorTransform { angle, mirrored: true });
            }
        }
        transforms
    }

    /// All replicated images of `p`.
    pub fn images(&self, p: Pos2, mirrored: bool) -> Vec<Pos2> {
        let center = self.config.canvas_center();
        self.sector_transforms(mirrored)
            .iter()
            .map(|t| t.apply(p, center))
            .collect()
    }

    /// Paint a committed stroke with its own width, color and mirror flag.
    pub fn render_stroke(&self, stroke: &Stroke, surface: &mut dyn Surface) {
        let appearance = Appearance {
            width: stroke.width(),
            color: stroke.color(),
            mirrored: stroke.mirrored(),
            composite: Composite::SourceOver,
        };
        self.render_points(stroke.points(), appearance, surface);
    }

    /// Paint the path currently being dragged.
    ///
    /// The path has no attributes of its own yet, so width, color and mirroring
    /// come from the config. While erasing it is painted with
    /// [`Composite::DestinationOut`] as a preview of the cut.
    pub fn render_path(&self, points: &[Point], surface: &mut dyn Surface) {
        let appearance = Appearance {
            width: self.config.stroke_width(),
            color: self.config.color(),
            mirrored: self.config.reflecting,
            composite: if self.config.erasing {
                Composite::DestinationOut
            } else {
                Composite::SourceOver
            },
        };
        self.render_points(points, appearance, surface);
    }

    /// Bottom to top.
    pub fn render_strokes(&self, strokes: &[StrokeRef], surface: &mut dyn Surface) {
        for stroke in strokes {
            self.render_stroke(stroke, surface);
        }
    }

    /// One radial line per sector boundary, long enough to reach the corners.
    pub fn render_guide_lines(&self, surface: &mut dyn Surface) {
        let center = self.config.canvas_center();
        let length = (self.config.canvas_size() / 2.0).length();
        let sectors = self.config.sector_count();
        for k in 0..sectors {
            let to = from_polar(length, sector_angle(k, sectors), center);
            surface.paint(&PaintedMark {
                mark: Mark::Segment {
                    from: center,
                    to,
                    width: GUIDE_LINE_WIDTH,
                },
                color: GUIDE_LINE_COLOR,
                composite: Composite::SourceOver,
            });
        }
    }

    /// Guide lines, then the committed strokes, then the in-progress path on top.
    pub fn render_scene(
        &self,
        store: &StrokeStore,
        in_progress: Option<&[Point]>,
        surface: &mut dyn Surface,
    ) {
        if self.config.show_guide_lines {
            self.render_guide_lines(surface);
        }
        self.render_strokes(store.current(), surface);
        if let Some(points) = in_progress {
            self.render_path(points, surface);
        }
    }

    fn render_points(&self, points: &[Point], appearance: Appearance, surface: &mut dyn Surface) {
        let center = self.config.canvas_center();
        let transforms = self.sector_transforms(appearance.mirrored);

        match points {
            [] => {}
            [single] => {
                let p = single.to_pos2();
                for t in &transforms {
                    surface.paint(&PaintedMark {
                        mark: Mark::Disc {
                            center: t.apply(p, center),
                            diameter: appearance.width as f32,
                        },
                        color: appearance.color,
                        composite: appearance.composite,
                    });
                }
            }
            _ => {
                let width = appearance.width as f32 / LINE_THINNING;
                for pair in points.windows(2) {
                    let (a, b) = (pair[0].to_pos2(), pair[1].to_pos2());
                    for t in &transforms {
                        surface.paint(&PaintedMark {
                            mark: Mark::Segment {
                                from: t.apply(a, center),
                                to: t.apply(b, center),
                                width,
                            },
                            color: appearance.color,
                            composite: appearance.composite,
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Vec2;

    fn config(sectors: u32) -> CanvasConfig {
        let mut config = CanvasConfig::default();
        config.set_canvas_size(Vec2::new(200.0, 200.0));
        config.set_sector_count(sectors).unwrap();
        config
    }

    #[test]
    fn test_transform_count() {
        let config = config(5);
        let renderer = SymmetryRenderer::new(&config);
        assert_eq!(renderer.sector_transforms(false).len(), 5);
        assert_eq!(renderer.sector_transforms(true).len(), 10);
    }

    #[test]
    fn test_segments_use_thinned_width() {
        let config = config(3);
        let renderer = SymmetryRenderer::new(&config);
        let stroke = Stroke::new(
            vec![Point::new(120, 100), Point::new(130, 100), Point::new(140, 110)],
            10,
            Color32::RED,
            false,
        );
        let mut marks: Vec<PaintedMark> = Vec::new();
        renderer.render_stroke(&stroke, &mut marks);

        // two segments, three sectors each
        assert_eq!(marks.len(), 6);
        for painted in &marks {
            match painted.mark {
                Mark::Segment { width, .. } => {
                    assert!((width - 10.0 / std::f32::consts::SQRT_2).abs() < 1e-4)
                }
                Mark::Disc { .. } => panic!("multi-point strokes draw segments"),
            }
        }
    }

    #[test]
    fn test_erasing_preview_subtracts() {
        let mut config = config(2);
        config.erasing = true;
        let renderer = SymmetryRenderer::new(&config);
        let mut marks: Vec<PaintedMark> = Vec::new();
        renderer.render_path(&[Point::new(150, 100)], &mut marks);
        assert_eq!(marks.len(), 2);
        assert!(marks.iter().all(|m| m.composite == Composite::DestinationOut));
    }

    #[test]
    fn test_guide_lines_start_at_center() {
        let config = config(8);
        let renderer = SymmetryRenderer::new(&config);
        let mut marks: Vec<PaintedMark> = Vec::new();
        renderer.render_guide_lines(&mut marks);
        assert_eq!(marks.len(), 8);
        for painted in &marks {
            match painted.mark {
                Mark::Segment { from, to, .. } => {
                    assert_eq!(from, Pos2::new(100.0, 100.0));
                    assert!((from.distance(to) - Vec2::new(100.0, 100.0).length()).abs() < 1e-3);
                }
                Mark::Disc { .. } => panic!("guide lines are segments"),
            }
        }
    }

    #[test]
    fn test_empty_path_draws_nothing() {
        let config = config(4);
        let renderer = SymmetryRenderer::new(&config);
        let mut marks: Vec<PaintedMark> = Vec::new();
        renderer.render_path(&[], &mut marks);
        assert!(marks.is_empty());
    }
}
