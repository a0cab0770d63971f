use std::ops::RangeInclusive;

use egui::{Color32, Pos2, Vec2};

use crate::error::ConfigError;

pub const SECTOR_COUNT_RANGE: RangeInclusive<u32> = 1..=60;
pub const STROKE_WIDTH_RANGE: RangeInclusive<u32> = 1..=20;

pub const DEFAULT_SECTOR_COUNT: u32 = 12;
pub const DEFAULT_STROKE_WIDTH: u32 = 5;
pub const DEFAULT_CANVAS_SIZE: Vec2 = Vec2::new(800.0, 750.0);

/// Live drawing settings shared by the renderer and the eraser.
///
/// Nothing caches these values across events: every render, commit and
/// erase reads them at the moment it runs. The numeric fields are private so
/// that `sector_count` and `stroke_width` can never leave their valid ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    sector_count: u32,
    stroke_width: u32,
    color: Color32,
    pub reflecting: bool,
    pub erasing: bool,
    pub show_guide_lines: bool,
    canvas_size: Vec2,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            sector_count: DEFAULT_SECTOR_COUNT,
            stroke_width: DEFAULT_STROKE_WIDTH,
            color: Color32::RED,
            reflecting: false,
            erasing: false,
            show_guide_lines: true,
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl CanvasConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Set the number of sectors, rejecting values outside `1..=60`.
    pub fn set_sector_count(&mut self, sectors: u32) -> Result<(), ConfigError> {
        if !SECTOR_COUNT_RANGE.contains(&sectors) {
            log::warn!("Rejected sector count {}", sectors);
            return Err(ConfigError::SectorCountOutOfRange { value: sectors });
        }
        self.sector_count = sectors;
        Ok(())
    }

    /// Set the number of sectors, clamping into `1..=60`. Returns the stored value.
    pub fn clamp_sector_count(&mut self, sectors: u32) -> u32 {
        self.sector_count = sectors.clamp(*SECTOR_COUNT_RANGE.start(), *SECTOR_COUNT_RANGE.end());
        self.sector_count
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Set the stroke width, rejecting values outside `1..=20`.
    pub fn set_stroke_width(&mut self, width: u32) -> Result<(), ConfigError> {
        if !STROKE_WIDTH_RANGE.contains(&width) {
            log::warn!("Rejected stroke width {}", width);
            return Err(ConfigError::StrokeWidthOutOfRange { value: width });
        }
        self.stroke_width = width;
        Ok(())
    }

    pub fn clamp_stroke_width(&mut self, width: u32) -> u32 {
        self.stroke_width = width.clamp(*STROKE_WIDTH_RANGE.start(), *STROKE_WIDTH_RANGE.end());
        self.stroke_width
    }

    /// Half the current stroke width; the proximity threshold of the eraser.
    pub fn eraser_radius(&self) -> f32 {
        self.stroke_width as f32 / 2.0
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Strokes are opaque; any alpha in `color` is dropped.
    pub fn set_color(&mut self, color: Color32) {
        self.color = Color32::from_rgb(color.r(), color.g(), color.b());
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Update the logical canvas size, normally from the drawing panel's rect.
    pub fn set_canvas_size(&mut self, size: Vec2) {
        self.canvas_size = size.max(Vec2::ZERO);
    }

    pub fn canvas_center(&self) -> Pos2 {
        (self.canvas_size / 2.0).to_pos2()
    }
}
