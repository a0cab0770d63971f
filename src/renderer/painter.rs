use egui::{Color32, Painter, Pos2, Rect};

use super::{Composite, Mark, PaintedMark, Surface, BACKGROUND_COLOR};

/// Paints marks through an egui [`Painter`].
///
/// Canvas coordinates are offset by `origin` (the top-left of the drawing
/// panel). egui has no destination-out blending, so subtracted marks are
/// painted in the background color, which looks the same on the opaque
/// canvas.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    background: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin,
            background: BACKGROUND_COLOR,
        }
    }

    pub fn fill_background(&self, rect: Rect) {
        self.painter.rect_filled(rect, 0.0, self.background);
    }

    fn to_screen(&self, p: Pos2) -> Pos2 {
        self.origin + p.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn paint(&mut self, painted: &PaintedMark) {
        let color = match painted.composite {
            Composite::SourceOver => painted.color,
            Composite::DestinationOut => self.background,
        };
        match painted.mark {
            Mark::Disc { center, diameter } => {
                self.painter
                    .circle_filled(self.to_screen(center), diameter / 2.0, color);
            }
            Mark::Segment { from, to, width } => {
                self.painter.line_segment(
                    [self.to_screen(from), self.to_screen(to)],
                    egui::Stroke::new(width, color),
                );
            }
        }
    }
}
