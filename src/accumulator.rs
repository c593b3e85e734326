// Feedback accumulator: two surfaces fed back into each other every frame.
// Visual: the picture is never cleared. Each frame reads the last one, adds the live
// stroke on top, and becomes the new "front" that the presenter shows.

use crate::error::Error;
use crate::noise::simplex;
use crate::shape::{self, Fragment, ShadeContext};
use crate::stroke::StrokeState;
use crate::surface::{Surface, to_rgb8};
use glam::{Vec2, Vec3};
use rayon::prelude::*;

/// Sideways wobble of the feedback read.
const DRIFT_WARP: f32 = 0.000_07;
/// Upward slide of the feedback read per frame.
const DRIFT_RISE: f32 = 0.000_05;
/// Fraction of the background color added to every feedback read.
const BACKGROUND_CREEP: f32 = 0.0015;

/// Which of the two surfaces currently holds the finished picture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Front {
    Ping,
    Pong,
}

/// The ping/pong pair. `ping_is_front` is the only thing a swap touches.
struct SurfacePair {
    ping: Surface,
    pong: Surface,
    ping_is_front: bool,
}

impl SurfacePair {
    /// (front to read, back to write); never the same surface.
    fn split(&mut self) -> (&Surface, &mut Surface) {
        if self.ping_is_front {
            (&self.ping, &mut self.pong)
        } else {
            (&self.pong, &mut self.ping)
        }
    }

    fn front(&self) -> &Surface {
        if self.ping_is_front { &self.ping } else { &self.pong }
    }

    fn swap(&mut self) {
        self.ping_is_front = !self.ping_is_front;
    }
}

pub struct Accumulator {
    pair: Option<SurfacePair>, // None until a usable size has been allocated
    background: Vec3,
    drift: bool,
}

impl Accumulator {
    /// Allocate both surfaces and flood the front with the background.
    /// A failed allocation leaves the accumulator empty; `resize` retries.
    pub fn new(width: u32, height: u32, background: Vec3, drift: bool) -> Self {
        let mut acc = Self { pair: None, background, drift };
        if let Err(e) = acc.resize(width, height) {
            log::warn!("{e}; rendering paused until the next resize");
        }
        acc
    }

    /// Reallocate both surfaces at the new size. Accumulated history is dropped.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        self.pair = None;
        let mut ping = Surface::new(width, height)?;
        let pong = Surface::new(width, height)?;
        ping.flood(self.background);
        self.pair = Some(SurfacePair { ping, pong, ping_is_front: true });
        Ok(())
    }

    pub fn is_allocated(&self) -> bool {
        self.pair.is_some()
    }

    /// Size of each surface, if allocated.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.pair.as_ref().map(|p| (p.ping.width(), p.ping.height()))
    }

    pub fn front(&self) -> Option<&Surface> {
        self.pair.as_ref().map(SurfacePair::front)
    }

    pub fn front_label(&self) -> Option<Front> {
        self.pair.as_ref().map(|p| if p.ping_is_front { Front::Ping } else { Front::Pong })
    }

    /// Render one frame: back = front (drifted, crept) + stroke, then swap.
    /// Rows are evaluated in parallel; each reads only `front` and writes its own row.
    pub fn accumulate(&mut self, stroke: &StrokeState, ctx: &ShadeContext) -> Result<(), Error> {
        let drift = self.drift;
        let creep = BACKGROUND_CREEP * self.background;
        let pair = self.pair.as_mut().ok_or(Error::SurfaceUnavailable)?;
        let (front, back) = pair.split();

        let (w, h) = (back.width() as usize, back.height() as usize);
        let stride = w * 3;

        back.raw_mut().par_chunks_mut(stride).enumerate().for_each(|(py, row_out)| {
            let v = 1.0 - (py as f32 + 0.5) / h as f32;
            for (px, out) in row_out.chunks_exact_mut(3).enumerate() {
                let uv = Vec2::new((px as f32 + 0.5) / w as f32, v);
                let sample_uv = if drift { drift_uv(uv, ctx.elapsed) } else { uv };

                let base = front.sample(sample_uv) + creep;
                let delta = shape::evaluate_stroke(Fragment { uv, sample_uv }, base, stroke, ctx);
                out.copy_from_slice(&to_rgb8(base + delta).0);
            }
        });

        pair.swap();
        Ok(())
    }

    #[cfg(test)]
    fn front_mut(&mut self) -> Option<&mut Surface> {
        self.pair.as_mut().map(|p| if p.ping_is_front { &mut p.ping } else { &mut p.pong })
    }
}

/// Where a drifting frame reads its previous picture: a noise wobble on both axes
/// plus a constant upward slide, so old paint creeps down the page.
fn drift_uv(uv: Vec2, elapsed: f32) -> Vec2 {
    let warp_phase = Vec2::new(0.0, 15.0 * (0.1 * elapsed).cos());
    let mut s = uv + Vec2::splat(DRIFT_WARP * simplex(uv * 6.0 + warp_phase));
    s.y += DRIFT_RISE;
    s
}
