// Window + software drawing utilities.
// Everything on screen goes through here:
// 1) A window that shows the composed panel + canvas.
// 2) Raster primitives (pixels, lines, thick strokes, circles, rects, blits).
// 3) A tiny 5x7 bitmap font for the panel text.

use crate::error::Error;
use crate::types::{FrameBuffer, Rgb};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window of the given size, throttled to `fps` updates per second.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Keys that went down since the last frame (auto-repeat included, so
    /// holding an arrow keeps nudging a slider).
    pub fn keys_pressed(&self) -> Vec<Key> {
        self.window.get_keys_pressed(KeyRepeat::Yes)
    }

    pub fn ctrl_down(&self) -> bool {
        self.window.is_key_down(Key::LeftCtrl)
            || self.window.is_key_down(Key::RightCtrl)
            || self.window.is_key_down(Key::LeftSuper)
            || self.window.is_key_down(Key::RightSuper)
    }

    pub fn shift_down(&self) -> bool {
        self.window.is_key_down(Key::LeftShift) || self.window.is_key_down(Key::RightShift)
    }
}

/* ---------- Software drawing: pixels, lines, shapes ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: Rgb) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color.to_u32();
}

/// Mix `color` over the existing pixel with coverage `alpha` (0..=255).
#[inline]
pub fn blend_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: Rgb, alpha: u8) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    let old = Rgb::from_u32(fb.pixels[idx]);
    let a = alpha as u32;
    let mix = |o: u8, n: u8| ((n as u32 * a + o as u32 * (255 - a) + 127) / 255) as u8;
    fb.pixels[idx] = Rgb(mix(old.0, color.0), mix(old.1, color.1), mix(old.2, color.2)).to_u32();
}

/// Walk the Bresenham path from (x0,y0) to (x1,y1), both ends included.
fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        plot(x0, y0);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Draw a thin line between (x0,y0) and (x1,y1).
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
    bresenham(x0, y0, x1, y1, |x, y| put_pixel(fb, x, y, color));
}

/// Thin translucent line (used for the preview's ghost trace).
pub fn draw_line_blend(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb, alpha: u8) {
    bresenham(x0, y0, x1, y1, |x, y| blend_pixel(fb, x, y, color, alpha));
}

/// Line of width `thickness`: a square brush stamped along the Bresenham path.
/// Thickness 1 (or 0) is the plain 1-pixel line.
pub fn draw_thick_line(
    fb: &mut FrameBuffer,
    x0: i32, y0: i32,
    x1: i32, y1: i32,
    thickness: u32,
    color: Rgb,
) {
    // A brush wider than the buffer covers it already.
    let cap = fb.width.max(fb.height).max(1).min(i32::MAX as usize) as u32;
    let w = thickness.clamp(1, cap) as i32;
    if w == 1 {
        draw_line(fb, x0, y0, x1, y1, color);
        return;
    }
    let lo = -((w - 1) / 2);
    let hi = w / 2;
    let (max_x, max_y) = (fb.width as i64 - 1, fb.height as i64 - 1);
    bresenham(x0, y0, x1, y1, |x, y| {
        let (x, y) = (x as i64, y as i64);
        let (ys, ye) = ((y + lo as i64).max(0), (y + hi as i64).min(max_y));
        let (xs, xe) = ((x + lo as i64).max(0), (x + hi as i64).min(max_x));
        for py in ys..=ye {
            for px in xs..=xe {
                put_pixel(fb, px as i32, py as i32, color);
            }
        }
    });
}

/// Circle outline `width` pixels thick, growing inward from `radius`.
pub fn draw_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, width: i32, color: Rgb) {
    if radius <= 0 { return; }
    let outer2 = radius * radius;
    let inner = (radius - width.max(1)).max(0);
    let inner2 = inner * inner;
    for y in -radius..=radius {
        for x in -radius..=radius {
            let d2 = x * x + y * y;
            if d2 <= outer2 && d2 > inner2 {
                put_pixel(fb, cx + x, cy + y, color);
            }
        }
    }
}

/// Filled disc, optionally translucent.
pub fn fill_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: Rgb, alpha: u8) {
    if radius < 0 { return; }
    let r2 = radius * radius;
    for y in -radius..=radius {
        for x in -radius..=radius {
            if x * x + y * y <= r2 {
                if alpha == 255 {
                    put_pixel(fb, cx + x, cy + y, color);
                } else {
                    blend_pixel(fb, cx + x, cy + y, color, alpha);
                }
            }
        }
    }
}

pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
    for yy in y..y + h {
        for xx in x..x + w {
            put_pixel(fb, xx, yy, color);
        }
    }
}

/// 1-pixel rectangle outline.
pub fn stroke_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
    if w <= 0 || h <= 0 { return; }
    draw_line(fb, x, y, x + w - 1, y, color);
    draw_line(fb, x, y + h - 1, x + w - 1, y + h - 1, color);
    draw_line(fb, x, y, x, y + h - 1, color);
    draw_line(fb, x + w - 1, y, x + w - 1, y + h - 1, color);
}

/// Copy `src` into `dst` with its top-left corner at (x,y); clipped to `dst`.
pub fn blit(dst: &mut FrameBuffer, src: &FrameBuffer, x: usize, y: usize) {
    if x >= dst.width || y >= dst.height { return; }
    let w = src.width.min(dst.width - x);
    let h = src.height.min(dst.height - y);
    for row in 0..h {
        let s = row * src.width;
        let d = (y + row) * dst.width + x;
        dst.pixels[d..d + w].copy_from_slice(&src.pixels[s..s + w]);
    }
}

/* ---------- 5x7 bitmap font ---------- */

/// Return a 5x7 glyph bitmap.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
/// Lowercase letters other than `r` and `d` fall back to uppercase.
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase A..Z
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        // The two lowercase letters the mechanism labels need
        'r' => g!(0b00000,0b00000,0b10110,0b11001,0b10000,0b10000,0b10000),
        'd' => g!(0b00001,0b00001,0b01101,0b10011,0b10001,0b10011,0b01101),

        // Punctuation
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '=' => g!(0b00000,0b00000,0b11111,0b00000,0b11111,0b00000,0b00000),
        '%' => g!(0b11000,0b11001,0b00010,0b00100,0b01000,0b10011,0b00011),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '+' => g!(0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000),
        '/' => g!(0b00000,0b00001,0b00010,0b00100,0b01000,0b10000,0b00000),
        '<' => g!(0b00010,0b00100,0b01000,0b10000,0b01000,0b00100,0b00010),
        '>' => g!(0b01000,0b00100,0b00010,0b00001,0b00010,0b00100,0b01000),

        c if c.is_ascii_lowercase() => glyph5x7(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) with a 1-pixel black shadow.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: Rgb) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass first, then the glyph itself
        for (ofs, c) in [(1, Rgb::BLACK), (0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_pixel(fb, x + rx + ofs, y + ry as i32 + ofs, c);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: Rgb) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

/// Pixel width of `text` as drawn by `draw_text_5x7`.
pub fn text_width_5x7(text: &str) -> i32 {
    (text.chars().count() as i32 * 6 - 1).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb = Rgb(0, 0, 0);
    const INK: Rgb = Rgb(255, 255, 255);

    fn count(fb: &FrameBuffer, c: Rgb) -> usize {
        fb.pixels.iter().filter(|&&p| p == c.to_u32()).count()
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut fb = FrameBuffer::new(20, 20, BG);
        draw_line(&mut fb, 2, 3, 15, 11, INK);
        assert_eq!(fb.get(2, 3), Some(INK));
        assert_eq!(fb.get(15, 11), Some(INK));
    }

    #[test]
    fn horizontal_line_pixel_count() {
        let mut fb = FrameBuffer::new(20, 20, BG);
        draw_line(&mut fb, 0, 5, 9, 5, INK);
        assert_eq!(count(&fb, INK), 10);
    }

    #[test]
    fn out_of_bounds_is_clipped() {
        let mut fb = FrameBuffer::new(8, 8, BG);
        draw_line(&mut fb, -10, -10, 20, 20, INK);
        assert_eq!(count(&fb, INK), 8);
    }

    #[test]
    fn thick_line_covers_square_brush() {
        let mut fb = FrameBuffer::new(20, 20, BG);
        draw_thick_line(&mut fb, 5, 10, 5, 10, 3, INK);
        assert_eq!(count(&fb, INK), 9);
        assert_eq!(fb.get(4, 9), Some(INK));
        assert_eq!(fb.get(6, 11), Some(INK));

        let mut fb = FrameBuffer::new(20, 20, BG);
        draw_thick_line(&mut fb, 5, 10, 5, 10, 2, INK);
        assert_eq!(count(&fb, INK), 4);
        assert_eq!(fb.get(6, 11), Some(INK));
    }

    #[test]
    fn huge_thickness_fills_buffer_without_wrapping() {
        let mut fb = FrameBuffer::new(20, 20, BG);
        draw_thick_line(&mut fb, 9, 9, 10, 10, 3_000_000_000, INK);
        assert_eq!(count(&fb, INK), 400);

        let mut fb = FrameBuffer::new(20, 20, BG);
        draw_thick_line(&mut fb, 0, 0, 0, 0, u32::MAX, INK);
        assert_eq!(fb.get(0, 0), Some(INK));
        assert_eq!(fb.get(9, 9), Some(INK));
    }

    #[test]
    fn thick_brush_is_clipped_at_edges() {
        let mut fb = FrameBuffer::new(10, 10, BG);
        draw_thick_line(&mut fb, 0, 9, 0, 9, 5, INK);
        // 5x5 brush centred on the corner keeps a 3x3 quarter
        assert_eq!(count(&fb, INK), 9);
    }

    #[test]
    fn blend_half_alpha_mixes() {
        let mut fb = FrameBuffer::new(1, 1, BG);
        blend_pixel(&mut fb, 0, 0, Rgb(200, 100, 0), 128);
        assert_eq!(fb.get(0, 0), Some(Rgb(100, 50, 0)));
    }

    #[test]
    fn blit_is_clipped_to_destination() {
        let mut dst = FrameBuffer::new(10, 10, BG);
        let src = FrameBuffer::new(6, 6, INK);
        blit(&mut dst, &src, 7, 7);
        assert_eq!(count(&dst, INK), 9);
        assert_eq!(dst.get(9, 9), Some(INK));
    }

    #[test]
    fn circle_outline_leaves_center_empty() {
        let mut fb = FrameBuffer::new(40, 40, BG);
        draw_circle(&mut fb, 20, 20, 10, 2, INK);
        assert_eq!(fb.get(20, 20), Some(BG));
        assert_eq!(fb.get(30, 20), Some(INK));
        assert_eq!(fb.get(29, 20), Some(INK));
        assert_eq!(fb.get(28, 20), Some(BG));
    }

    #[test]
    fn text_renders_known_glyphs_only() {
        assert!(glyph5x7('Q').is_some());
        assert_eq!(glyph5x7('q'), glyph5x7('Q'));
        assert_ne!(glyph5x7('r'), glyph5x7('R'));
        assert!(glyph5x7('~').is_none());
        assert_eq!(text_width_5x7("AB"), 11);
        assert_eq!(text_width_5x7(""), 0);
    }
}
