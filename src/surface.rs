// One off-screen render target: an 8-bit RGB image, quantized every frame.
// Visual: invisible on its own; the presenter copies the front one to the window.

use crate::error::Error;
use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};

/// Largest accepted side length; anything above is treated as an allocation failure.
pub const MAX_SURFACE_SIDE: u32 = 16_384;

pub struct Surface {
    image: RgbImage,
}

impl Surface {
    /// Allocate a black surface. Zero or oversized sides fail instead of panicking.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width == 0 || height == 0 || width > MAX_SURFACE_SIDE || height > MAX_SURFACE_SIDE {
            return Err(Error::SurfaceAlloc { width, height });
        }
        Ok(Self { image: RgbImage::new(width, height) })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Raw interleaved RGB bytes, rows top to bottom (`width * 3` bytes per row).
    pub fn raw_mut(&mut self) -> &mut [u8] {
        &mut *self.image
    }

    /// Fill every pixel with one color (components in [0,1]).
    pub fn flood(&mut self, color: Vec3) {
        let px = to_rgb8(color);
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Color at integer pixel (x,y), top-left origin, components in [0,1].
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        to_vec3(*self.image.get_pixel(x, y))
    }

    /// Write a color, clamped and rounded to 8 bits.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Vec3) {
        self.image.put_pixel(x, y, to_rgb8(color));
    }

    /// Bilinear, clamp-to-edge read at texture coordinate `uv` (y up, pixel centers
    /// at half-texel offsets).
    pub fn sample(&self, uv: Vec2) -> Vec3 {
        let w = self.width() as f32;
        let h = self.height() as f32;
        let fx = (uv.x * w - 0.5).clamp(0.0, w - 1.0);
        let fy = ((1.0 - uv.y) * h - 0.5).clamp(0.0, h - 1.0);

        let x0 = fx.floor() as u32;
        let y0 = fy.floor() as u32;
        let x1 = (x0 + 1).min(self.width() - 1);
        let y1 = (y0 + 1).min(self.height() - 1);
        let tx = fx - x0 as f32;
        let ty = fy - y0 as f32;

        let top = self.get(x0, y0).lerp(self.get(x1, y0), tx);
        let bottom = self.get(x0, y1).lerp(self.get(x1, y1), tx);
        top.lerp(bottom, ty)
    }
}

#[inline]
pub fn to_rgb8(color: Vec3) -> Rgb<u8> {
    let c = color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
    Rgb([c.x.round() as u8, c.y.round() as u8, c.z.round() as u8])
}

#[inline]
pub fn to_vec3(px: Rgb<u8>) -> Vec3 {
    Vec3::new(px[0] as f32, px[1] as f32, px[2] as f32) / 255.0
}
