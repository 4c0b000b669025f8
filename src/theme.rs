//! Theme Module
//! Colors and sizes handed explicitly to every widget that draws.

use egui::Color32;

/// Visual settings shared by the menu, pages and charts.
#[derive(Debug, Clone)]
pub struct Theme {
    pub black: Color32,
    pub light_gray: Color32,
    pub dark_gray: Color32,
    pub dark_green: Color32,
    pub accent: Color32,
    pub error: Color32,
    /// Font size of menu entries
    pub menu_font_size: f32,
    /// Horizontal indent per tree level
    pub menu_indent: f32,
    /// Vertical padding around each menu entry
    pub menu_padding: f32,
    /// Marker drawn before the active leaf
    pub active_marker: &'static str,
    pub title_size: f32,
    pub subtitle_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            black: Color32::from_rgb(0, 0, 0),
            light_gray: Color32::from_rgb(242, 242, 242),
            dark_gray: Color32::from_rgb(97, 97, 97),
            dark_green: Color32::from_rgb(41, 121, 75),
            accent: Color32::from_rgb(100, 149, 237),
            error: Color32::from_rgb(220, 53, 69),
            menu_font_size: 18.0,
            menu_indent: 15.0,
            menu_padding: 5.0,
            active_marker: "→",
            title_size: 26.0,
            subtitle_size: 15.0,
        }
    }
}

impl Theme {
    /// Bar color for a relative change: gray when negative, green otherwise.
    pub fn change_color(&self, value: f64) -> Color32 {
        if value < 0.0 {
            self.dark_gray
        } else {
            self.dark_green
        }
    }
}
