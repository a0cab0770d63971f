mod central_panel;
mod gallery_panel;
mod settings_panel;

pub use central_panel::central_panel;
pub use gallery_panel::gallery_window;
pub use settings_panel::settings_panel;
