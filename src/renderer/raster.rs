use egui::{Color32, Pos2, Vec2};
use image::{Rgba, RgbaImage};

use super::{Composite, Mark, PaintedMark, Surface, SymmetryRenderer, BACKGROUND_COLOR};
use crate::config::CanvasConfig;
use crate::stroke_store::StrokeStore;

/// CPU rasterizer over an [`RgbaImage`].
///
/// Marks are given in logical canvas coordinates and mapped into the image
/// with a uniform `scale` and `offset`. Edges get one pixel of linear
/// anti-aliasing.
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    offset: Vec2,
}

impl RasterSurface {
    /// A surface whose pixels map 1:1 to canvas coordinates.
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(background)),
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// A surface that fits a `logical` canvas into `width` x `height`,
    /// keeping the aspect ratio and centering the result.
    pub fn fitted(width: u32, height: u32, logical: Vec2, background: Color32) -> Self {
        let mut surface = Self::new(width, height, background);
        if logical.x > 0.0 && logical.y > 0.0 {
            let target = Vec2::new(width as f32, height as f32);
            surface.scale = (target.x / logical.x).min(target.y / logical.y);
            surface.offset = (target - logical * surface.scale) / 2.0;
        }
        surface
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn to_target(&self, p: Pos2) -> Pos2 {
        (p.to_vec2() * self.scale + self.offset).to_pos2()
    }

    /// Blend `color` into every pixel whose center gets non-zero coverage.
    fn fill<F>(&mut self, min: Pos2, max: Pos2, color: Color32, composite: Composite, coverage: F)
    where
        F: Fn(Pos2) -> f32,
    {
        let (w, h) = self.image.dimensions();
        let x0 = (min.x - 1.0).floor().max(0.0) as u32;
        let y0 = (min.y - 1.0).floor().max(0.0) as u32;
        let x1 = ((max.x + 1.0).ceil().max(0.0) as u32).min(w);
        let y1 = ((max.y + 1.0).ceil().max(0.0) as u32).min(h);

        for y in y0..y1 {
            for x in x0..x1 {
                let alpha = coverage(Pos2::new(x as f32 + 0.5, y as f32 + 0.5)).clamp(0.0, 1.0);
                if alpha <= 0.0 {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(x, y);
                blend(pixel, color, alpha, composite);
            }
        }
    }
}

impl Surface for RasterSurface {
    fn paint(&mut self, painted: &PaintedMark) {
        match painted.mark {
            Mark::Disc { center, diameter } => {
                let center = self.to_target(center);
                let radius = diameter * self.scale / 2.0;
                let extent = Vec2::splat(radius);
                self.fill(
                    center - extent,
                    center + extent,
                    painted.color,
                    painted.composite,
                    |p| radius + 0.5 - p.distance(center),
                );
            }
            Mark::Segment { from, to, width } => {
                let from = self.to_target(from);
                let to = self.to_target(to);
                let half = width * self.scale / 2.0;
                let extent = Vec2::splat(half);
                self.fill(
                    from.min(to) - extent,
                    from.max(to) + extent,
                    painted.color,
                    painted.composite,
                    |p| half + 0.5 - distance_to_segment(p, from, to),
                );
            }
        }
    }
}

/// Rasterize guide lines (if enabled) and the visible strokes at any size.
///
/// The logical canvas from `config` is fitted into `width` x `height`; the
/// live viewport plays no part. The in-progress path is never included.
pub fn render_to_bitmap(
    store: &StrokeStore,
    config: &CanvasConfig,
    width: u32,
    height: u32,
) -> RgbaImage {
    let mut surface = RasterSurface::fitted(width, height, config.canvas_size(), BACKGROUND_COLOR);
    let renderer = SymmetryRenderer::new(config);
    if config.show_guide_lines {
        renderer.render_guide_lines(&mut surface);
    }
    renderer.render_strokes(store.current(), &mut surface);
    surface.into_image()
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Rgba([r, g, b, a])
}

fn blend(pixel: &mut Rgba<u8>, color: Color32, alpha: f32, composite: Composite) {
    let Rgba([dr, dg, db, da]) = *pixel;
    let dst_alpha = da as f32 / 255.0;

    match composite {
        Composite::SourceOver => {
            let [sr, sg, sb, sa] = color.to_srgba_unmultiplied();
            let src_alpha = alpha * sa as f32 / 255.0;
            let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
            if out_alpha <= 0.0 {
                *pixel = Rgba([0, 0, 0, 0]);
                return;
            }
            let mix = |s: u8, d: u8| {
                let value = (s as f32 * src_alpha + d as f32 * dst_alpha * (1.0 - src_alpha)) / out_alpha;
                value.round().clamp(0.0, 255.0) as u8
            };
            *pixel = Rgba([
                mix(sr, dr),
                mix(sg, dg),
                mix(sb, db),
                (out_alpha * 255.0).round() as u8,
            ]);
        }
        Composite::DestinationOut => {
            let out_alpha = dst_alpha * (1.0 - alpha);
            pixel.0[3] = (out_alpha * 255.0).round() as u8;
        }
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
