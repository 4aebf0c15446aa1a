// Core types shared by the curve math, the drawing engine and the window.

use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the surface is (pixels)
    pub height: usize,     // how tall the surface is (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A surface of `width * height` pixels, all set to `fill`.
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        Self { width, height, pixels: vec![fill.to_u32(); width * height] }
    }

    /// Pixel at (x,y), or None when outside the surface.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgb::from_u32(self.pixels[y * self.width + x]))
    }

    pub fn fill(&mut self, color: Rgb) {
        let c = color.to_u32();
        for p in &mut self.pixels { *p = c; }
    }
}

/// 8-bit RGB color. Packs to the 0x00RRGGBB layout the window expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }

    #[inline]
    pub fn from_u32(px: u32) -> Self {
        Rgb(((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
    }

    /// Linear mix toward `other`; t is clamped to [0,1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// A 2D point in curve space (origin-centered) or canvas space (pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub type PointSequence = Vec<Point>;

/// Outer ring radius `R`, inner wheel radius `r`, pen offset `d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MechanismParams {
    outer: i32,
    inner: i32,
    offset: i32,
}

impl MechanismParams {
    /// Validated constructor: `R >= 1`, `1 <= r < R`, `d >= 0`.
    pub fn new(outer: i32, inner: i32, offset: i32) -> Result<Self, Error> {
        if outer < 1 {
            return Err(Error::InvalidParameter(format!("outer radius R={outer} must be >= 1")));
        }
        if inner < 1 || inner >= outer {
            return Err(Error::InvalidParameter(format!(
                "inner radius r={inner} must be in 1..{outer} (R={outer})"
            )));
        }
        if offset < 0 {
            return Err(Error::InvalidParameter(format!("pen offset d={offset} must be >= 0")));
        }
        Ok(Self { outer, inner, offset })
    }

    pub fn outer(&self) -> i32 {
        self.outer
    }

    pub fn inner(&self) -> i32 {
        self.inner
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_packs_as_minifb_pixel() {
        assert_eq!(Rgb(0x12, 0x34, 0x56).to_u32(), 0x00_12_34_56);
        assert_eq!(Rgb::from_u32(0x00_AB_CD_EF), Rgb(0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgb(0, 100, 200);
        let b = Rgb(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb(100, 100, 100));
    }

    #[test]
    fn mechanism_params_reject_inner_not_below_outer() {
        assert!(MechanismParams::new(150, 80, 100).is_ok());
        assert!(matches!(MechanismParams::new(100, 100, 50), Err(Error::InvalidParameter(_))));
        assert!(matches!(MechanismParams::new(100, 0, 50), Err(Error::InvalidParameter(_))));
        assert!(matches!(MechanismParams::new(0, 0, 0), Err(Error::InvalidParameter(_))));
        assert!(matches!(MechanismParams::new(100, 30, -1), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn frame_buffer_get_is_bounds_checked() {
        let fb = FrameBuffer::new(4, 3, Rgb(1, 2, 3));
        assert_eq!(fb.get(3, 2), Some(Rgb(1, 2, 3)));
        assert_eq!(fb.get(4, 0), None);
        assert_eq!(fb.get(0, 3), None);
    }
}
