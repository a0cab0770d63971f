use egui::TextureHandle;

use crate::canvas::{Commit, DoilyCanvas};
use crate::config::CanvasConfig;
use crate::gallery::Gallery;
use crate::input::{InputEvent, InputHandler};
use crate::panels::{central_panel, gallery_window, settings_panel};
use crate::texture_manager::ThumbnailCache;

/// The whole application: settings, canvas, gallery.
pub struct DoilyApp {
    canvas: DoilyCanvas,
    config: CanvasConfig,
    gallery: Gallery,
    thumbnails: ThumbnailCache,
    input_handler: InputHandler,
    show_gallery: bool,
}

impl Default for DoilyApp {
    fn default() -> Self {
        Self {
            canvas: DoilyCanvas::new(),
            config: CanvasConfig::default(),
            gallery: Gallery::new(),
            thumbnails: ThumbnailCache::new(),
            input_handler: InputHandler::new(egui::Rect::NOTHING),
            show_gallery: false,
        }
    }
}

impl DoilyApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::default()
    }

    pub fn canvas(&self) -> &DoilyCanvas {
        &self.canvas
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CanvasConfig {
        &mut self.config
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut Gallery {
        &mut self.gallery
    }

    pub fn input_handler_mut(&mut self) -> &mut InputHandler {
        &mut self.input_handler
    }

    pub fn show_gallery(&self) -> bool {
        self.show_gallery
    }

    pub fn set_show_gallery(&mut self, show: bool) {
        self.show_gallery = show;
    }

    pub fn handle_input_event(&mut self, event: InputEvent) {
        log::debug!("Input event: {:?}", event);
        match self.canvas.handle_event(event, &self.config) {
            Some(Commit::Stroke(stroke)) => {
                log::debug!("Stroke committed with {} point(s)", stroke.len());
            }
            Some(Commit::Erased(summary)) => {
                log::debug!("Erase finished: {:?}", summary);
            }
            None => {}
        }
    }

    /// Undo the last stroke. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.canvas.undo().is_ok()
    }

    pub fn redo(&mut self) -> bool {
        self.canvas.redo().is_ok()
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Capture the canvas at half size into the gallery.
    pub fn save_to_gallery(&mut self) -> usize {
        let size = self.config.canvas_size() / 2.0;
        let thumbnail = self
            .canvas
            .render_to_bitmap(&self.config, size.x.max(1.0) as u32, size.y.max(1.0) as u32);
        self.gallery.save(thumbnail)
    }

    pub fn remove_from_gallery(&mut self) {
        if let Some(index) = self.gallery.selected() {
            if self.gallery.remove_selected().is_some() {
                self.thumbnails.forget(index);
            }
        }
    }

    /// Texture for a filled gallery slot
    pub fn thumbnail_texture(&mut self, ctx: &egui::Context, index: usize) -> Option<TextureHandle> {
        let entry = self.gallery.slot(index)?;
        Some(self.thumbnails.texture_for(ctx, index, entry))
    }
}

impl eframe::App for DoilyApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        settings_panel(self, ctx);
        gallery_window(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_drawing_then_saving_to_gallery() {
        let mut app = DoilyApp::default();
        app.handle_input_event(InputEvent::Press(Point::new(500, 375)));
        app.handle_input_event(InputEvent::Drag(Point::new(520, 380)));
        app.handle_input_event(InputEvent::Release(Point::new(520, 380)));
        assert_eq!(app.canvas().store().current().len(), 1);

        let slot = app.save_to_gallery();
        assert_eq!(slot, 0);
        let entry = app.gallery().slot(0).unwrap();
        assert_eq!(entry.image.dimensions(), (400, 375));
    }

    #[test]
    fn test_undo_redo_status() {
        let mut app = DoilyApp::default();
        assert!(!app.undo());
        app.handle_input_event(InputEvent::Press(Point::new(1, 1)));
        app.handle_input_event(InputEvent::Release(Point::new(1, 1)));
        assert!(app.undo());
        assert!(app.redo());
        assert!(!app.redo());
    }
}
