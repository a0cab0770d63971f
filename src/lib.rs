#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod eraser;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod stroke;
pub mod stroke_store;
pub mod texture_manager;

pub use app::DoilyApp;
pub use canvas::{Commit, DoilyCanvas};
pub use config::CanvasConfig;
pub use eraser::{split_stroke, EraseSummary, EraserEngine};
pub use error::{ConfigError, DoilyError, HistoryError, HistoryStack};
pub use geometry::Point;
pub use input::{DragState, InputEvent};
pub use renderer::{render_to_bitmap, Composite, Mark, PaintedMark, Surface, SymmetryRenderer};
pub use stroke::{Stroke, StrokeBuilder, StrokeRef};
pub use stroke_store::StrokeStore;
