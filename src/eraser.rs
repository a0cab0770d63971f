use std::collections::BTreeSet;
use std::sync::Arc;

use egui::Pos2;

use crate::config::CanvasConfig;
use crate::geometry::{distance, from_polar, mirror_across_vertical_axis, sector_angle, to_polar, Point};
use crate::stroke::{Stroke, StrokeRef};
use crate::stroke_store::StrokeStore;

/// Outcome of one eraser release
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EraseSummary {
    /// Strokes that lost at least one point and were removed
    pub strokes_touched: usize,
    /// Surviving pieces appended back on top of the stack
    pub fragments_created: usize,
}

/// Every rotated image of the eraser path, computed once per release.
struct EraserImages {
    plain: Vec<Pos2>,
    mirrored: Vec<Pos2>,
}

/// Cuts strokes along a released eraser drag.
///
/// The eraser sweeps all sectors at once: each eraser point is rotated into
/// every sector, and for mirrored strokes its reflection is rotated as well,
/// so erasing one copy of a pattern erases the source points of all copies.
pub struct EraserEngine<'a> {
    config: &'a CanvasConfig,
}

impl<'a> EraserEngine<'a> {
    pub fn new(config: &'a CanvasConfig) -> Self {
        Self { config }
    }

    /// Rewrite `store.current()` in place: untouched strokes keep their
    /// relative order, erased strokes are dropped, and their surviving
    /// fragments go on top. The redo stack is not touched.
    pub fn erase(&self, store: &mut StrokeStore, eraser_path: &[Point]) -> EraseSummary {
        let mut summary = EraseSummary::default();
        if eraser_path.is_empty() {
            return summary;
        }

        let images = self.eraser_images(eraser_path);
        let mut kept = Vec::new();
        let mut fragments: Vec<StrokeRef> = Vec::new();

        for stroke in store.take_current() {
            let erased = self.marked_indices(&stroke, &images);
            if erased.is_empty() {
                kept.push(stroke);
                continue;
            }
            summary.strokes_touched += 1;
            fragments.extend(split_stroke(&stroke, &erased).into_iter().map(Arc::new));
        }

        summary.fragments_created = fragments.len();
        kept.extend(fragments);
        store.set_current(kept);

        log::info!(
            "Eraser cut {} stroke(s) into {} fragment(s)",
            summary.strokes_touched,
            summary.fragments_created
        );
        summary
    }

    /// Indices of `stroke`'s points within the eraser radius of any eraser image.
    pub fn erased_indices(&self, stroke: &Stroke, eraser_path: &[Point]) -> BTreeSet<usize> {
        let images = self.eraser_images(eraser_path);
        self.marked_indices(stroke, &images)
    }

    fn marked_indices(&self, stroke: &Stroke, images: &EraserImages) -> BTreeSet<usize> {
        let radius = self.config.eraser_radius();
        let mirrored = stroke.mirrored();
        stroke
            .points()
            .iter()
            .enumerate()
            .filter(|(_, point)| {
                let p = point.to_pos2();
                let hit = |image: &Pos2| distance(p, *image) <= radius;
                images.plain.iter().any(hit) || (mirrored && images.mirrored.iter().any(hit))
            })
            .map(|(index, _)| index)
            .collect()
    }

    fn eraser_images(&self, eraser_path: &[Point]) -> EraserImages {
        let center = self.config.canvas_center();
        let mut images = EraserImages {
            plain: Vec::new(),
            mirrored: Vec::new(),
        };
        for e in eraser_path {
            let e = e.to_pos2();
            self.push_rotations(e, center, &mut images.plain);
            self.push_rotations(mirror_across_vertical_axis(e, center.x), center, &mut images.mirrored);
        }
        images
    }

    fn push_rotations(&self, p: Pos2, center: Pos2, out: &mut Vec<Pos2>) {
        let sectors = self.config.sector_count();
        let (radius, angle) = to_polar(p, center);
        out.extend((0..sectors).map(|k| from_polar(radius, angle + sector_angle(k, sectors), center)));
    }
}

/// Split `stroke` into the maximal runs of points whose indices are not in
/// `erased`, in the order they appear. Each run becomes a stroke with the
/// parent's width, color and mirror flag. Erasing every point yields nothing.
pub fn split_stroke(stroke: &Stroke, erased: &BTreeSet<usize>) -> Vec<Stroke> {
    let mut fragments = Vec::new();
    let mut run = Vec::new();

    for (index, point) in stroke.points().iter().enumerate() {
        if erased.contains(&index) {
            if !run.is_empty() {
                fragments.push(stroke.fragment(std::mem::take(&mut run)));
            }
        } else {
            run.push(*point);
        }
    }
    if !run.is_empty() {
        fragments.push(stroke.fragment(run));
    }
    fragments
}
