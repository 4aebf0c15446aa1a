// Canvas export: a timestamped PNG in the configured save directory.

use crate::error::Result;
use crate::types::FrameBuffer;
use chrono::{Local, NaiveDateTime};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// `spirograph_YYYYMMDD_HHMMSS.png`
pub fn file_name_for(at: NaiveDateTime) -> String {
    format!("spirograph_{}.png", at.format("%Y%m%d_%H%M%S"))
}

/// Unpack 0x00RRGGBB pixels into an RGB image.
pub fn canvas_to_image(canvas: &FrameBuffer) -> RgbImage {
    RgbImage::from_fn(canvas.width as u32, canvas.height as u32, |x, y| {
        let px = canvas.pixels[y as usize * canvas.width + x as usize];
        Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
    })
}

/// Write the canvas into `dir` (created if missing) stamped with `at`.
pub fn save_canvas_at(canvas: &FrameBuffer, dir: &Path, at: NaiveDateTime) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name_for(at));
    canvas_to_image(canvas).save(&path)?;
    Ok(path)
}

/// Write the canvas into `dir` stamped with the local time now.
pub fn save_canvas(canvas: &FrameBuffer, dir: &Path) -> Result<PathBuf> {
    save_canvas_at(canvas, dir, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb as Px;
    use chrono::NaiveDate;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 42)
            .unwrap()
    }

    #[test]
    fn file_name_pattern() {
        assert_eq!(file_name_for(stamp()), "spirograph_20240309_070542.png");
    }

    #[test]
    fn saved_png_round_trips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("out");
        let mut canvas = FrameBuffer::new(8, 6, Px(8, 7, 17));
        canvas.pixels[3 * 8 + 5] = Px(250, 10, 120).to_u32();

        let path = save_canvas_at(&canvas, &target, stamp()).unwrap();
        assert_eq!(path, target.join("spirograph_20240309_070542.png"));

        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back.dimensions(), (8, 6));
        assert_eq!(back.get_pixel(5, 3), &Rgb([250, 10, 120]));
        assert_eq!(back.get_pixel(0, 0), &Rgb([8, 7, 17]));
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let canvas = FrameBuffer::new(2, 2, Px::BLACK);
        assert!(save_canvas_at(&canvas, &blocker.join("sub"), stamp()).is_err());
    }
}
