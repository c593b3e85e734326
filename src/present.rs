// Compositor/presenter: turns the front surface into the window's frame buffer.
// Visual: what you see is exactly the last accumulated picture, scaled up when the
// garden renders at a reduced internal resolution.

use crate::surface::{Surface, to_rgb8};
use crate::types::{FrameBuffer, Viewport, pack_rgb};
use glam::Vec3;

pub struct Presenter {
    screen: FrameBuffer, // reused every frame
    background: Vec3,
}

impl Presenter {
    pub fn new(background: Vec3) -> Self {
        Self { screen: FrameBuffer::default(), background }
    }

    /// Blit `front` into a frame of the viewport's size (nearest-neighbour upscale).
    /// Without a front surface the frame is a plain background field.
    pub fn present(&mut self, front: Option<&Surface>, viewport: Viewport) -> &FrameBuffer {
        let (w, h) = (viewport.width as usize, viewport.height as usize);
        if self.screen.width != w || self.screen.height != h {
            self.screen = FrameBuffer::filled(w, h, 0);
        }

        let Some(front) = front else {
            let bg = to_rgb8(self.background);
            self.screen.pixels.fill(pack_rgb(bg[0], bg[1], bg[2]));
            return &self.screen;
        };

        let (sw, sh) = (front.width() as usize, front.height() as usize);
        let image = front.image();
        for y in 0..h {
            let sy = (y * sh / h.max(1)).min(sh - 1);
            let row = &mut self.screen.pixels[y * w..(y + 1) * w];
            for (x, out) in row.iter_mut().enumerate() {
                let sx = (x * sw / w.max(1)).min(sw - 1);
                let px = image.get_pixel(sx as u32, sy as u32);
                *out = pack_rgb(px[0], px[1], px[2]);
            }
        }
        &self.screen
    }
}
