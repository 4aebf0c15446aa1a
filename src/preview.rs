// Animated mechanism preview: outer ring, inner wheel rolling inside it,
// the pen arm, and a faint ghost of the whole curve.
// The ghost is cached per (R, r, d) and only recomputed when they change.

use crate::config::Config;
use crate::draw::{
    draw_circle, draw_line, draw_line_blend, draw_text_5x7, draw_thick_line, fill_circle,
    text_width_5x7,
};
use crate::fit::fit_to_canvas;
use crate::spiro::compute_points;
use crate::theme;
use crate::types::{FrameBuffer, Point, PointSequence, Rgb};
use std::f64::consts::{PI, TAU};

pub struct Preview {
    size: usize,
    ghost_steps: usize,
    margin: f64,
    spin_idle: f64,
    spin_drawing: f64,
    angle: f64,
    ghost: PointSequence,
    ghost_params: Option<(i32, i32, i32)>,
    ghost_builds: usize,
    surface: FrameBuffer,
}

impl Preview {
    pub fn new(config: &Config) -> Self {
        let size = config.preview_size;
        Self {
            size,
            ghost_steps: config.preview_ghost_steps,
            margin: config.preview_margin,
            spin_idle: config.preview_spin_idle,
            spin_drawing: config.preview_spin_drawing,
            angle: 0.0,
            ghost: Vec::new(),
            ghost_params: None,
            ghost_builds: 0,
            surface: FrameBuffer::new(size, size, theme::CARD),
        }
    }

    /// Advance the wheel; it spins faster while the main canvas is drawing.
    pub fn update(&mut self, drawing: bool) {
        self.angle += if drawing { self.spin_drawing } else { self.spin_idle };
    }

    /// How many times the ghost curve has been (re)computed.
    pub fn ghost_builds(&self) -> usize {
        self.ghost_builds
    }

    /// Ghost trace in preview-surface pixels, recomputed only when the
    /// parameters differ from the last call.
    pub fn ghost(&mut self, outer: i32, inner: i32, offset: i32) -> &[Point] {
        let params = (outer, inner, offset);
        if self.ghost_params != Some(params) {
            let raw = compute_points(outer as f64, inner as f64, offset as f64, self.ghost_steps);
            self.ghost = fit_to_canvas(&raw, self.size as f64, self.margin);
            self.ghost_params = Some(params);
            self.ghost_builds += 1;
        }
        &self.ghost
    }

    /// Paint the mechanism for the current angle and return the surface.
    pub fn render(&mut self, outer: i32, inner: i32, offset: i32, pen: Rgb) -> &FrameBuffer {
        self.ghost(outer, inner, offset);

        let sz = self.size as i32;
        let fb = &mut self.surface;
        fb.fill(theme::CARD);

        let (cx, cy) = (sz / 2, sz / 2);
        let outer = outer.max(1);
        let scale = (sz / 2 - 10) as f64 / (outer + 4) as f64;
        let rc = inner.min(outer - 1);
        let rcf = (rc as f64).max(0.001);
        let roll = (outer - rc) as f64;
        let inner_rot = -roll / rcf * self.angle;

        // Ghost trace
        for pair in self.ghost.windows(2) {
            draw_line_blend(
                fb,
                pair[0].x as i32, pair[0].y as i32,
                pair[1].x as i32, pair[1].y as i32,
                pen,
                theme::PREVIEW_GHOST_A,
            );
        }

        // Outer ring + tick marks
        let ring = (outer as f64 * scale) as i32;
        draw_circle(fb, cx, cy, ring, 2, theme::PREVIEW_OUTER_RING);
        for i in 0..12 {
            let a = i as f64 * PI / 6.0;
            let (c, s) = (a.cos(), a.sin());
            draw_line(
                fb,
                cx + ((ring - 5) as f64 * c) as i32, cy + ((ring - 5) as f64 * s) as i32,
                cx + (ring as f64 * c) as i32, cy + (ring as f64 * s) as i32,
                theme::PREVIEW_TICK,
            );
        }

        // Inner wheel
        let wx = cx + (roll * scale * self.angle.cos()) as i32;
        let wy = cy + (roll * scale * self.angle.sin()) as i32;
        let wheel = ((rc as f64 * scale) as i32).max(2);
        fill_circle(fb, wx, wy, wheel, theme::PREVIEW_WHEEL_FILL, theme::PREVIEW_WHEEL_FILL_A);
        draw_circle(fb, wx, wy, wheel, 2, theme::SLIDER_COLORS[1]);

        // Gear dots + crosshair
        let teeth = (rc / 12).max(4);
        for i in 0..teeth {
            let ga = inner_rot + i as f64 * (TAU / teeth as f64);
            let gx = wx + ((wheel - 3) as f64 * ga.cos()) as i32;
            let gy = wy + ((wheel - 3) as f64 * ga.sin()) as i32;
            fill_circle(fb, gx, gy, 2, theme::SLIDER_COLORS[1], 255);
        }
        draw_line(fb, wx - wheel + 4, wy, wx + wheel - 4, wy, theme::PREVIEW_CROSSHAIR);
        draw_line(fb, wx, wy - wheel + 4, wx, wy + wheel - 4, theme::PREVIEW_CROSSHAIR);

        // Pen arm + dot
        let px = wx + (offset as f64 * scale * inner_rot.cos()) as i32;
        let py = wy + (offset as f64 * scale * inner_rot.sin()) as i32;
        draw_thick_line(fb, wx, wy, px, py, 2, theme::SLIDER_COLORS[2]);
        fill_circle(fb, px, py, 5, pen, 255);
        fill_circle(fb, px, py, 3, Rgb::WHITE, 255);
        fill_circle(fb, px, py, 2, pen, 255);

        // R= / r= labels
        let lbl_outer = format!("R={outer}");
        let tint = theme::SLIDER_COLORS[0].lerp(Rgb(200, 200, 255), 0.4);
        draw_text_5x7(fb, cx - text_width_5x7(&lbl_outer) / 2, sz - 12, &lbl_outer, tint);
        let lbl_inner = format!("r={inner}");
        let lx = (wx + wheel + 3).min(sz - text_width_5x7(&lbl_inner) - 2);
        draw_text_5x7(fb, lx, wy - 3, &lbl_inner, theme::SLIDER_COLORS[1]);

        &self.surface
    }
}
