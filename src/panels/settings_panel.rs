use egui::color_picker::{color_edit_button_srgba, Alpha};

use crate::config::{SECTOR_COUNT_RANGE, STROKE_WIDTH_RANGE};
use crate::DoilyApp;

pub fn settings_panel(app: &mut DoilyApp, ctx: &egui::Context) {
    egui::SidePanel::left("settings_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Colour:");
                let mut color = app.config().color();
                if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    app.config_mut().set_color(color);
                }
            });

            ui.add_space(8.0);
            let mut sectors = app.config().sector_count();
            if ui
                .add(egui::Slider::new(&mut sectors, SECTOR_COUNT_RANGE).text("Number of Sectors"))
                .changed()
            {
                if let Err(err) = app.config_mut().set_sector_count(sectors) {
                    log::warn!("{}", err);
                }
            }

            let mut width = app.config().stroke_width();
            if ui
                .add(egui::Slider::new(&mut width, STROKE_WIDTH_RANGE).text("Size"))
                .changed()
            {
                if let Err(err) = app.config_mut().set_stroke_width(width) {
                    log::warn!("{}", err);
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.clear();
                }
                let can_undo = app.canvas().store().can_undo();
                let can_redo = app.canvas().store().can_redo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });

            ui.separator();

            let config = app.config_mut();
            ui.checkbox(&mut config.show_guide_lines, "Draw Sector Lines");
            ui.checkbox(&mut config.reflecting, "Reflect Dragged Line");
            ui.checkbox(&mut config.erasing, "Eraser");

            ui.separator();

            if ui.button("Gallery").clicked() {
                app.set_show_gallery(true);
            }

            ui.separator();
            let store = app.canvas().store();
            ui.horizontal(|ui| {
                ui.label(format!("Strokes: {}", store.current().len()));
                ui.label(format!("Redo: {}", store.redo_stack().len()));
            });
        });
}
