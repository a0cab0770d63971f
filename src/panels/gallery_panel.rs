use crate::DoilyApp;

const THUMBNAIL_SIZE: egui::Vec2 = egui::vec2(200.0, 187.5);

/// The gallery window: a 3x2 page of thumbnail slots plus paging controls.
pub fn gallery_window(app: &mut DoilyApp, ctx: &egui::Context) {
    let mut open = app.show_gallery();

    egui::Window::new("Doily Gallery")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            egui::Grid::new("gallery_grid")
                .num_columns(2)
                .spacing([8.0, 8.0])
                .show(ui, |ui| {
                    for (position, index) in app.gallery().page_slots().enumerate() {
                        let selected = app.gallery().selected() == Some(index);
                        let response = match app.thumbnail_texture(ctx, index) {
                            Some(texture) => ui.add(
                                egui::ImageButton::new(
                                    egui::Image::from_texture(&texture)
                                        .fit_to_exact_size(THUMBNAIL_SIZE),
                                )
                                .selected(selected),
                            ),
                            None => ui.add_sized(
                                THUMBNAIL_SIZE,
                                egui::SelectableLabel::new(selected, "Empty"),
                            ),
                        };
                        if response.clicked() {
                            app.gallery_mut().toggle_selected(index);
                        }
                        if position % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });

            ui.separator();

            ui.horizontal(|ui| {
                let has_previous = app.gallery().has_previous_page();
                let has_next = app.gallery().has_next_page();
                if ui.add_enabled(has_previous, egui::Button::new("Previous Page")).clicked() {
                    app.gallery_mut().previous_page();
                }
                if ui.button("Remove").clicked() {
                    app.remove_from_gallery();
                }
                if ui.button("Save").clicked() {
                    app.save_to_gallery();
                }
                if ui.add_enabled(has_next, egui::Button::new("Next Page")).clicked() {
                    app.gallery_mut().next_page();
                }
            });
        });

    app.set_show_gallery(open);
}
