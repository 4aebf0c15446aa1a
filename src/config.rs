// Startup configuration: layout, geometry and background styling.
// Built once in main and handed by reference to everything that needs it.

use crate::error::Result;
use crate::types::Rgb;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Dot-grid look of the blank canvas.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackgroundStyle {
    pub base: [u8; 3],
    pub grid_spacing: usize,
    pub base_bright: i32,
    pub vary_amp: f64,
    pub vary_freq: f64,
    pub blue_tint: i32,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            base: [8, 7, 17],
            grid_spacing: 28,
            base_bright: 20,
            vary_amp: 7.0,
            vary_freq: 0.12,
            blue_tint: 10,
        }
    }
}

impl BackgroundStyle {
    pub fn base_color(&self) -> Rgb {
        Rgb(self.base[0], self.base[1], self.base[2])
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window_width: usize,
    pub window_height: usize,
    pub panel_width: usize,
    /// Side length of the square drawing canvas.
    pub canvas_size: usize,
    /// Padding between canvas edge and the outermost curve point.
    pub canvas_margin: f64,
    /// Resolution of the main curve (points = steps + 1).
    pub curve_steps: usize,
    pub max_undo: usize,
    pub preview_size: usize,
    pub preview_ghost_steps: usize,
    pub preview_margin: f64,
    /// Radians per frame the preview wheel turns while idle / drawing.
    pub preview_spin_idle: f64,
    pub preview_spin_drawing: f64,
    pub tick_rate: usize,
    pub save_dir: PathBuf,
    pub background: BackgroundStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1060,
            window_height: 720,
            panel_width: 330,
            canvas_size: 680,
            canvas_margin: 28.0,
            curve_steps: 6000,
            max_undo: 20,
            preview_size: 155,
            preview_ghost_steps: 900,
            preview_margin: 10.0,
            preview_spin_idle: 0.018,
            preview_spin_drawing: 0.055,
            tick_rate: 60,
            save_dir: default_save_dir(),
            background: BackgroundStyle::default(),
        }
    }
}

impl Config {
    /// Read a JSON config; any field left out keeps its default.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let cfg = serde_json::from_str(&text)?;
        Ok(cfg)
    }

    /// Top-left corner of the canvas inside the window.
    pub fn canvas_origin(&self) -> (usize, usize) {
        let x = self.panel_width + 25;
        let y = self.window_height.saturating_sub(self.canvas_size) / 2;
        (x, y)
    }
}

/// `<Desktop>/spirograph`, else `<home>/spirograph`, else `./spirograph`.
pub fn default_save_dir() -> PathBuf {
    dirs::desktop_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spirograph")
}
