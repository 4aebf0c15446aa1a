// Palette for the panel, the preview and the canvas frame.

use crate::types::Rgb;

pub const BG: Rgb = Rgb(15, 12, 28);
pub const PANEL: Rgb = Rgb(22, 19, 42);
pub const CARD: Rgb = Rgb(30, 26, 54);
pub const CARD_EDGE: Rgb = Rgb(52, 48, 92);
pub const TEXT: Rgb = Rgb(235, 232, 255);
pub const TEXT_DIM: Rgb = Rgb(130, 122, 175);

pub const DRAW: Rgb = Rgb(99, 102, 241);
pub const SAVE: Rgb = Rgb(22, 163, 74);
pub const RAINBOW_ACTIVE: Rgb = Rgb(252, 211, 40);

/// Accent per slider: big circle, little wheel, pen reach, speed, line width.
pub const SLIDER_COLORS: [Rgb; 5] = [
    Rgb(129, 140, 248),
    Rgb(251, 113, 133),
    Rgb(52, 211, 153),
    Rgb(251, 191, 36),
    Rgb(167, 139, 250),
];

pub const PREVIEW_OUTER_RING: Rgb = Rgb(65, 60, 110);
pub const PREVIEW_TICK: Rgb = Rgb(85, 80, 135);
pub const PREVIEW_WHEEL_FILL: Rgb = Rgb(40, 38, 70);
pub const PREVIEW_WHEEL_FILL_A: u8 = 180;
pub const PREVIEW_CROSSHAIR: Rgb = Rgb(70, 65, 110);
pub const PREVIEW_GHOST_A: u8 = 50;

pub const CANVAS_GLOW_IDLE: Rgb = Rgb(48, 44, 88);
pub const STATUS_DOT_IDLE: Rgb = Rgb(55, 50, 88);
