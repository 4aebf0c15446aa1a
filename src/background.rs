// The blank canvas: a dark fill with a faint, slightly shimmering dot grid.
// Built once per engine and copied whenever the canvas is cleared.

use crate::config::BackgroundStyle;
use crate::types::{FrameBuffer, Rgb};

pub fn make_background(size: usize, style: &BackgroundStyle) -> FrameBuffer {
    let mut fb = FrameBuffer::new(size, size, style.base_color());
    let spacing = style.grid_spacing.max(1);

    for gx in (spacing..size).step_by(spacing) {
        for gy in (spacing..size).step_by(spacing) {
            // brightness wobbles a little across the grid
            let wave = style.vary_amp * (gx as f64 * style.vary_freq).sin() * (gy as f64 * style.vary_freq).cos();
            let c = style.base_bright + wave as i32;
            let blue = (c + style.blue_tint).clamp(0, 255) as u8;
            let c = c.clamp(0, 255) as u8;
            fb.pixels[gy * size + gx] = Rgb(c, c, blue).to_u32();
        }
    }
    fb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_sit_on_the_grid() {
        let style = BackgroundStyle::default();
        let bg = make_background(100, &style);
        assert_eq!(bg.get(0, 0), Some(style.base_color()));
        assert_eq!(bg.get(27, 28), Some(style.base_color()));
        // sin(28*0.12)=-0.2167.., cos(28*0.12)=-0.9761.. -> 20 + trunc(1.48) = 21
        assert_eq!(bg.get(28, 28), Some(Rgb(21, 21, 31)));
        assert_ne!(bg.get(56, 84), Some(style.base_color()));
    }

    #[test]
    fn background_is_deterministic() {
        let style = BackgroundStyle::default();
        assert_eq!(make_background(200, &style), make_background(200, &style));
    }
}
