//! Colors and sizing for the clock window

use egui::{Color32, Vec2};

pub struct Theme;

impl Theme {
    /// Window background
    pub const BACKGROUND: Color32 = Color32::from_rgb(240, 240, 240);

    /// Countdown digits
    pub const TEXT: Color32 = Color32::from_rgb(20, 20, 20);

    /// Label used to measure the window when the current one is blank
    pub const MEASURE_FALLBACK: &'static str = "0:00";
}

/// Window size that fits a label of `text_size` with `padding` on every side
pub fn fitted_window_size(text_size: Vec2, padding: f32) -> Vec2 {
    let padding = padding.max(0.0);
    Vec2::new(
        (text_size.x + 2.0 * padding).ceil(),
        (text_size.y + 2.0 * padding).ceil(),
    )
}
