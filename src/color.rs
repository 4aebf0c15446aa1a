// Pen colors: one fixed preset, or a hue sweep along the stroke.

use crate::types::Rgb;

/// The eight pen presets offered by the color picker.
pub const PRESET_COLORS: [Rgb; 8] = [
    Rgb(255, 255, 255),
    Rgb(249, 87, 87),
    Rgb(252, 150, 55),
    Rgb(252, 215, 30),
    Rgb(60, 225, 120),
    Rgb(30, 210, 245),
    Rgb(105, 108, 255),
    Rgb(232, 75, 230),
];

/// Decides the color of each stroke segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSource {
    Solid(Rgb),
    Rainbow,
}

impl ColorSource {
    /// Color for segment `index` out of `total`.
    pub fn resolve(&self, index: usize, total: usize) -> Rgb {
        match self {
            ColorSource::Solid(c) => *c,
            ColorSource::Rainbow => {
                let h = (index as f64 / total.max(1) as f64).rem_euclid(1.0);
                hsv_to_rgb(h, 1.0, 1.0)
            }
        }
    }
}

/// Six-sector HSV -> RGB; all inputs in [0,1], channels truncated to 0..=255.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let to_u8 = |c: f64| (c * 255.0) as u8;
    if s == 0.0 {
        return Rgb(to_u8(v), to_u8(v), to_u8(v));
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb(to_u8(r), to_u8(g), to_u8(b))
}

/// Front-end picker state: a selected preset plus the rainbow toggle.
#[derive(Clone, Debug, Default)]
pub struct ColorPicker {
    selected: usize,
    rainbow: bool,
}

impl ColorPicker {
    /// Choosing a swatch also switches rainbow off.
    pub fn select(&mut self, index: usize) {
        if index < PRESET_COLORS.len() {
            self.selected = index;
            self.rainbow = false;
        }
    }

    pub fn toggle_rainbow(&mut self) {
        self.rainbow = !self.rainbow;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_rainbow(&self) -> bool {
        self.rainbow
    }

    /// The preset color, regardless of rainbow mode (the preview pen uses this).
    pub fn current_solid(&self) -> Rgb {
        PRESET_COLORS[self.selected]
    }

    pub fn source(&self) -> ColorSource {
        if self.rainbow {
            ColorSource::Rainbow
        } else {
            ColorSource::Solid(self.current_solid())
        }
    }
}
