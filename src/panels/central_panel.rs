use crate::renderer::{PainterSurface, BACKGROUND_COLOR};
use crate::DoilyApp;

pub fn central_panel(app: &mut DoilyApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(BACKGROUND_COLOR))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;

            // The logical canvas follows the panel
            app.config_mut().set_canvas_size(rect.size());
            app.input_handler_mut().set_canvas_rect(rect);

            // Only start drags on the canvas itself, not through overlapping windows
            if response.hovered() || app.input_handler_mut().is_tracking() {
                let events = app.input_handler_mut().process_input(ctx);
                for event in events {
                    app.handle_input_event(event);
                }
            }

            let mut surface = PainterSurface::new(&painter, rect.min);
            surface.fill_background(rect);
            app.canvas().render(app.config(), &mut surface);
        });
}
