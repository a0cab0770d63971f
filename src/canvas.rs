use image::RgbaImage;

use crate::config::CanvasConfig;
use crate::eraser::{EraseSummary, EraserEngine};
use crate::error::HistoryError;
use crate::geometry::Point;
use crate::input::{DragState, InputEvent};
use crate::renderer::{render_to_bitmap, Surface, SymmetryRenderer};
use crate::stroke::{StrokeBuilder, StrokeRef};
use crate::stroke_store::StrokeStore;

/// What a release did to the drawing
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    Stroke(StrokeRef),
    Erased(EraseSummary),
}

/// The drawing surface: committed strokes plus the drag in progress.
///
/// `DoilyCanvas` owns no settings. Every call that needs them takes the
/// config by reference, so a setting changed between a press and its
/// release is honored at release time.
#[derive(Debug, Default)]
pub struct DoilyCanvas {
    store: StrokeStore,
    drag: DragState,
}

impl DoilyCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one pointer event through the drag state machine.
    ///
    /// On release the path is either committed as a new stroke or, when
    /// erasing, used to cut the existing strokes and then thrown away.
    pub fn handle_event(&mut self, event: InputEvent, config: &CanvasConfig) -> Option<Commit> {
        let path = self.drag.handle(event)?;

        if config.erasing {
            Some(Commit::Erased(self.erase(&path, config)))
        } else {
            let stroke = StrokeBuilder::from_points(path).finish(config)?;
            log::info!(
                "Committed stroke: {} point(s), width {}, mirrored {}",
                stroke.len(),
                stroke.width(),
                stroke.mirrored()
            );
            self.store.push(stroke.clone());
            Some(Commit::Stroke(stroke))
        }
    }

    pub fn erase(&mut self, eraser_path: &[Point], config: &CanvasConfig) -> EraseSummary {
        EraserEngine::new(config).erase(&mut self.store, eraser_path)
    }

    pub fn undo(&mut self) -> Result<StrokeRef, HistoryError> {
        let result = self.store.undo();
        match &result {
            Ok(stroke) => log::info!("Undo: moved a {}-point stroke to redo", stroke.len()),
            Err(err) => log::warn!("Undo ignored: {}", err),
        }
        result
    }

    pub fn redo(&mut self) -> Result<StrokeRef, HistoryError> {
        let result = self.store.redo();
        match &result {
            Ok(stroke) => log::info!("Redo: restored a {}-point stroke", stroke.len()),
            Err(err) => log::warn!("Redo ignored: {}", err),
        }
        result
    }

    /// Remove every visible stroke. The redo stack is kept.
    pub fn clear(&mut self) {
        log::info!("Clearing {} stroke(s)", self.store.current().len());
        self.store.clear();
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StrokeStore {
        &mut self.store
    }

    pub fn in_progress(&self) -> Option<&[Point]> {
        self.drag.in_progress()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Full render pass: guide lines, strokes, then the live drag on top.
    pub fn render(&self, config: &CanvasConfig, surface: &mut dyn Surface) {
        SymmetryRenderer::new(config).render_scene(&self.store, self.in_progress(), surface);
    }

    pub fn render_to_bitmap(&self, config: &CanvasConfig, width: u32, height: u32) -> RgbaImage {
        render_to_bitmap(&self.store, config, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::PaintedMark;
    use egui::Color32;

    #[test]
    fn test_release_commits_with_release_time_settings() {
        let mut config = CanvasConfig::default();
        let mut canvas = DoilyCanvas::new();

        canvas.handle_event(InputEvent::Press(Point::new(10, 10)), &config);
        canvas.handle_event(InputEvent::Drag(Point::new(12, 14)), &config);
        config.set_color(Color32::GREEN);
        config.reflecting = true;

        let commit = canvas.handle_event(InputEvent::Release(Point::new(12, 14)), &config);
        let Some(Commit::Stroke(stroke)) = commit else {
            panic!("expected a committed stroke");
        };
        assert_eq!(stroke.color(), Color32::GREEN);
        assert!(stroke.mirrored());
        assert_eq!(canvas.store().current().len(), 1);
        assert!(!canvas.is_dragging());
    }

    #[test]
    fn test_erasing_release_never_becomes_a_stroke() {
        let mut config = CanvasConfig::default();
        let mut canvas = DoilyCanvas::new();
        config.erasing = true;

        canvas.handle_event(InputEvent::Press(Point::new(10, 10)), &config);
        let commit = canvas.handle_event(InputEvent::Release(Point::new(10, 10)), &config);
        assert_eq!(commit, Some(Commit::Erased(EraseSummary::default())));
        assert!(canvas.store().current().is_empty());
    }

    #[test]
    fn test_undo_on_empty_canvas_reports_status() {
        let mut canvas = DoilyCanvas::new();
        assert!(canvas.undo().is_err());
        assert!(canvas.redo().is_err());
    }

    #[test]
    fn test_in_progress_path_is_drawn_last() {
        let mut config = CanvasConfig::default();
        config.show_guide_lines = false;
        config.set_sector_count(2).unwrap();
        let mut canvas = DoilyCanvas::new();

        canvas.handle_event(InputEvent::Press(Point::new(1, 1)), &config);
        canvas.handle_event(InputEvent::Release(Point::new(1, 1)), &config);
        config.set_color(Color32::BLUE);
        canvas.handle_event(InputEvent::Press(Point::new(5, 5)), &config);

        let mut marks: Vec<PaintedMark> = Vec::new();
        canvas.render(&config, &mut marks);
        assert_eq!(marks.len(), 4);
        assert_eq!(marks[0].color, Color32::RED);
        assert_eq!(marks[3].color, Color32::BLUE);
    }
}
