// Left-hand control panel and the canvas frame.
// Visual layout, top to bottom: title bar, mechanism preview, slider rows,
// pen colors, key hints, status strip.

use crate::color::PRESET_COLORS;
use crate::config::Config;
use crate::controls::Controls;
use crate::draw::{blend_pixel, blit, draw_text_5x7, fill_circle, fill_rect, stroke_rect, text_width_5x7};
use crate::engine::DrawingEngine;
use crate::theme;
use crate::types::{FrameBuffer, Rgb};

/// Frames the "saved" message stays up.
const FLASH_FRAMES: u32 = 120;

const SWATCH: i32 = 26;
const SWATCH_GAP: i32 = 6;
const ROW_H: i32 = 44;

pub struct Panel {
    width: i32,
    height: i32,
    preview_size: i32,
    flash: u32,
    flash_text: String,
    flash_color: Rgb,
}

impl Panel {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.panel_width as i32,
            height: config.window_height as i32,
            preview_size: config.preview_size as i32,
            flash: 0,
            flash_text: String::new(),
            flash_color: theme::SAVE,
        }
    }

    pub fn notify_saved(&mut self, file_name: &str) {
        self.flash = FLASH_FRAMES;
        self.flash_text = format!("SAVED {file_name}");
        self.flash_color = theme::SAVE;
    }

    pub fn notify_error(&mut self, message: &str) {
        self.flash = FLASH_FRAMES;
        self.flash_text = message.to_uppercase();
        self.flash_color = theme::SLIDER_COLORS[1];
    }

    /// Text for the bottom strip; counts down the flash while it is showing.
    pub fn status_line(&mut self, engine: &DrawingEngine) -> (String, Rgb) {
        if engine.is_drawing() {
            let pct = (engine.progress() * 100.0) as u32;
            return (format!("DRAWING... {pct}%"), theme::TEXT_DIM);
        }
        if self.flash > 0 {
            self.flash -= 1;
            return (self.flash_text.clone(), self.flash_color);
        }
        (
            format!("LAYERS: {}   UNDO: {}", engine.layer_count(), engine.undo_depth()),
            theme::TEXT_DIM,
        )
    }

    pub fn render(
        &mut self,
        screen: &mut FrameBuffer,
        engine: &DrawingEngine,
        controls: &Controls,
        preview: &FrameBuffer,
        tick: u64,
    ) {
        let (w, h) = (self.width, self.height);
        fill_rect(screen, 0, 0, w, h, theme::PANEL);

        // Title bar with a status dot that pulses while drawing
        fill_rect(screen, 0, 0, w, 44, theme::CARD);
        fill_rect(screen, 0, 44, w, 1, theme::CARD_EDGE);
        let dot = if engine.is_drawing() {
            let pulse = 0.5 + 0.5 * (tick as f32 * 0.07).sin();
            Rgb(70, 65, 110).lerp(theme::DRAW, pulse)
        } else {
            theme::STATUS_DOT_IDLE
        };
        fill_circle(screen, 16, 22, 6, dot, 255);
        draw_text_5x7(screen, 28, 19, "SPIROGRAPH STUDIO", theme::TEXT);

        // Preview card
        let card_y = 48;
        let card_h = self.preview_size + 22;
        card(screen, 6, card_y, w - 6, card_h);
        draw_text_5x7(screen, 14, card_y + 8, "PREVIEW", theme::TEXT_DIM);
        if let Some(name) = controls.preset_name() {
            draw_text_5x7(screen, 14, card_y + 20, &name.to_uppercase(), theme::TEXT_DIM);
        }
        blit(screen, preview, ((w - self.preview_size) / 2) as usize, (card_y + 11) as usize);

        // Sliders card
        let sliders_y = card_y + card_h + 6;
        let rows = controls.sliders.len() as i32;
        card(screen, 6, sliders_y, w - 6, rows * ROW_H + 30);
        draw_text_5x7(screen, 14, sliders_y + 8, "ADJUST THE SHAPE", theme::TEXT_DIM);
        let track_w = w - 16 * 2 - 12;
        for (i, slider) in controls.sliders.iter().enumerate() {
            let y = sliders_y + 24 + i as i32 * ROW_H;
            let accent = theme::SLIDER_COLORS[i % theme::SLIDER_COLORS.len()];
            let selected = i == controls.selected();
            let label_color = if selected { theme::TEXT } else { theme::TEXT_DIM };
            if selected {
                draw_text_5x7(screen, 8, y + 4, ">", accent);
            }
            draw_text_5x7(screen, 16, y + 4, slider.label, label_color);
            let value = slider.value.to_string();
            draw_text_5x7(screen, 16 + track_w - text_width_5x7(&value), y + 4, &value, accent);

            let ty = y + 20;
            fill_rect(screen, 16, ty, track_w, 7, theme::CARD_EDGE);
            let filled = (track_w as f32 * slider.fraction()) as i32;
            fill_rect(screen, 16, ty, filled, 7, accent);
            fill_circle(screen, 16 + filled, ty + 3, if selected { 7 } else { 5 }, accent, 255);
            fill_circle(screen, 16 + filled, ty + 3, 2, Rgb::WHITE, 255);
        }

        // Pen colors
        let color_y = sliders_y + rows * ROW_H + 30 + 6;
        card(screen, 6, color_y, w - 6, SWATCH + 48);
        draw_text_5x7(screen, 14, color_y + 8, "COLOR", theme::TEXT_DIM);
        let sy = color_y + 22;
        for (i, &c) in PRESET_COLORS.iter().enumerate() {
            let sx = 16 + i as i32 * (SWATCH + SWATCH_GAP);
            if i == controls.colors.selected() && !controls.colors.is_rainbow() {
                stroke_rect(screen, sx - 3, sy - 3, SWATCH + 6, SWATCH + 6, c);
            }
            fill_rect(screen, sx, sy, SWATCH, SWATCH, c);
        }
        let rb_y = sy + SWATCH + 6;
        let rb_color = if controls.colors.is_rainbow() { theme::RAINBOW_ACTIVE } else { theme::CARD_EDGE };
        fill_rect(screen, 16, rb_y, 10, 10, rb_color);
        stroke_rect(screen, 16, rb_y, 10, 10, theme::TEXT_DIM);
        let label_color = if controls.colors.is_rainbow() { theme::RAINBOW_ACTIVE } else { theme::TEXT_DIM };
        draw_text_5x7(screen, 32, rb_y + 2, "RAINBOW", label_color);

        // Key hints
        let keys_y = color_y + SWATCH + 48 + 6;
        card(screen, 6, keys_y, w - 6, 52);
        let hints = [
            "ENTER DRAW   U UNDO   C CLEAR",
            "S SAVE   SPACE RAINBOW   P PRESET",
            "UP/DN SELECT   <> ADJUST   1-8 PEN",
        ];
        for (i, line) in hints.iter().enumerate() {
            draw_text_5x7(screen, 14, keys_y + 8 + i as i32 * 13, line, theme::TEXT_DIM);
        }

        // Status strip
        let status_y = h - 30;
        fill_rect(screen, 0, status_y, w, 1, theme::CARD_EDGE);
        if engine.is_drawing() {
            let bar_w = w - 16;
            fill_rect(screen, 8, status_y + 6, bar_w, 6, theme::CARD_EDGE);
            let done = (bar_w as f64 * engine.progress()) as i32;
            fill_rect(screen, 8, status_y + 6, done, 6, theme::DRAW);
        }
        let (text, color) = self.status_line(engine);
        draw_text_5x7(screen, 10, status_y + 17, &text, color);

        fill_rect(screen, w - 1, 0, 1, h, theme::CARD_EDGE);
    }
}

/// Canvas with a soft aura that lights up while drawing.
pub fn render_canvas(screen: &mut FrameBuffer, config: &Config, engine: &DrawingEngine) {
    let (cx, cy) = config.canvas_origin();
    let (cx, cy) = (cx as i32, cy as i32);
    let size = config.canvas_size as i32;
    let glow = if engine.is_drawing() { theme::DRAW } else { theme::CANVAS_GLOW_IDLE };

    for (offset, alpha) in [(16, 12u8), (9, 28), (3, 50)] {
        let (x0, y0) = (cx - offset, cy - offset);
        let side = size + offset * 2;
        for y in y0..y0 + side {
            for x in x0..x0 + side {
                blend_pixel(screen, x, y, glow, alpha);
            }
        }
    }
    stroke_rect(screen, cx - 2, cy - 2, size + 4, size + 4, theme::CARD_EDGE);
    stroke_rect(screen, cx - 1, cy - 1, size + 2, size + 2, theme::CARD_EDGE);
    blit(screen, engine.canvas(), cx as usize, cy as usize);
}

fn card(screen: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32) {
    fill_rect(screen, x, y, w, h, theme::CARD);
    stroke_rect(screen, x, y, w, h, theme::CARD_EDGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> Config {
        Config { canvas_size: 120, curve_steps: 200, ..Config::default() }
    }

    #[test]
    fn idle_status_shows_counts() {
        let cfg = small_config();
        let mut engine = DrawingEngine::new(&cfg);
        engine.clear();
        let mut panel = Panel::new(&cfg);
        assert_eq!(panel.status_line(&engine).0, "LAYERS: 0   UNDO: 1");
    }

    #[test]
    fn drawing_status_shows_percentage() {
        let cfg = small_config();
        let mut engine = DrawingEngine::new(&cfg);
        engine.start(100, 30, 50).unwrap();
        engine.step(100, 1, &crate::color::ColorSource::Rainbow);
        let mut panel = Panel::new(&cfg);
        // 101 of 201 points
        assert_eq!(panel.status_line(&engine).0, "DRAWING... 50%");
    }

    #[test]
    fn save_flash_expires() {
        let cfg = small_config();
        let engine = DrawingEngine::new(&cfg);
        let mut panel = Panel::new(&cfg);
        panel.notify_saved("x.png");
        for _ in 0..FLASH_FRAMES {
            assert_eq!(panel.status_line(&engine).0, "SAVED x.png");
        }
        assert!(panel.status_line(&engine).0.starts_with("LAYERS"));
    }

    #[test]
    fn full_frame_renders_without_panicking() {
        let cfg = Config::default();
        let mut screen = FrameBuffer::new(cfg.window_width, cfg.window_height, theme::BG);
        let mut engine = DrawingEngine::new(&cfg);
        engine.start(150, 80, 100).unwrap();
        engine.step(25, 2, &crate::color::ColorSource::Rainbow);
        let controls = Controls::default();
        let preview = FrameBuffer::new(cfg.preview_size, cfg.preview_size, theme::CARD);
        let mut panel = Panel::new(&cfg);

        render_canvas(&mut screen, &cfg, &engine);
        panel.render(&mut screen, &engine, &controls, &preview, 7);

        let (cx, cy) = cfg.canvas_origin();
        assert_eq!(screen.get(cx, cy), engine.canvas().get(0, 0));
        assert_eq!(screen.get(0, 0), Some(theme::CARD));
    }
}
