// The garden: one owner for the stroke, the clock, the surfaces and the presenter.
// Every external event goes through `&mut Garden`. Stroke events are latched and applied
// at the start of the next frame, so a frame never sees a half-applied stroke and a
// burst of clicks between two frames costs one reset.

use crate::accumulator::Accumulator;
use crate::clock::Clock;
use crate::config::GardenSettings;
use crate::present::Presenter;
use crate::shape::ShadeContext;
use crate::stroke::{StrokeController, StrokeState};
use crate::surface::Surface;
use crate::types::{FrameBuffer, Viewport};
use glam::{Vec2, Vec3};

pub struct Garden {
    viewport: Viewport,
    render_scale: u32,
    background: Vec3,
    clock: Clock,
    strokes: StrokeController,
    accumulator: Accumulator,
    presenter: Presenter,
    pending_stroke: Option<Vec2>, // normalized, last event wins
    failed_size: Option<(u32, u32)>, // surface size whose allocation was already reported
}

impl Garden {
    /// Build a garden with a blank background page and the first flower ready to grow.
    pub fn new(settings: GardenSettings, rng: fastrand::Rng) -> Self {
        let viewport = Viewport::new(settings.width, settings.height);
        let render_scale = settings.render_scale.max(1);
        let (sw, sh) = surface_size(viewport, render_scale);
        log::info!(
            "garden {}x{} (surfaces {}x{}, drift {})",
            viewport.width,
            viewport.height,
            sw,
            sh,
            settings.drift
        );
        let accumulator = Accumulator::new(sw, sh, settings.background, settings.drift);
        // the accumulator already warned about a failed first allocation
        let failed_size = (!accumulator.is_allocated()).then_some((sw, sh));
        Self {
            viewport,
            render_scale,
            background: settings.background,
            clock: Clock::new(),
            strokes: StrokeController::new(rng),
            accumulator,
            presenter: Presenter::new(settings.background),
            pending_stroke: None,
            failed_size,
        }
    }

    /// New stroke at window pixel (x,y), top-left origin. Replaces the live stroke at
    /// the start of the next frame; later events before that frame override earlier ones.
    pub fn stroke_event(&mut self, x: f32, y: f32) {
        let w = self.viewport.width as f32;
        let h = self.viewport.height as f32;
        // zero-sized viewports divide to NaN/inf; the controller clamps those
        self.pending_stroke = Some(Vec2::new(x / w, y / h));
    }

    /// A stroke event waiting for the next frame, normalized to the viewport.
    pub fn pending_stroke(&self) -> Option<Vec2> {
        self.pending_stroke
    }

    /// Freeze or unfreeze. Frozen gardens neither advance nor present.
    pub fn set_paused(&mut self, paused: bool) {
        if self.clock.is_paused() != paused {
            log::debug!("{}", if paused { "frozen" } else { "unfrozen" });
        }
        self.clock.set_paused(paused);
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// New window size. Both surfaces are reallocated and the picture restarts blank.
    pub fn resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height);
        if viewport == self.viewport && self.accumulator.is_allocated() {
            return;
        }
        self.viewport = viewport;
        if self.allocate() {
            log::info!("resized to {width}x{height}; picture cleared");
        }
    }

    /// (Re)allocate the surfaces for the current viewport. A failure is reported once
    /// per size; retries at the same size stay quiet.
    fn allocate(&mut self) -> bool {
        let size = surface_size(self.viewport, self.render_scale);
        match self.accumulator.resize(size.0, size.1) {
            Ok(()) => {
                self.failed_size = None;
                true
            }
            Err(e) if self.failed_size == Some(size) => {
                log::debug!("{e}; still skipping frames");
                false
            }
            Err(e) => {
                log::warn!("{e}; frames skipped until a usable size");
                self.failed_size = Some(size);
                false
            }
        }
    }

    /// Surface size whose allocation last failed, if the garden is currently without
    /// surfaces because of it.
    pub fn failed_allocation(&self) -> Option<(u32, u32)> {
        self.failed_size
    }

    /// One frame: apply a latched stroke event, tick the clock, advance the stroke,
    /// accumulate, present. Returns `None` when nothing new should be shown (frozen or
    /// no surfaces).
    pub fn advance_frame(&mut self, delta: f32) -> Option<&FrameBuffer> {
        if self.clock.is_paused() {
            return None;
        }
        if let Some(position) = self.pending_stroke.take() {
            self.strokes.on_stroke_event(position);
        }
        let dt = self.clock.tick(delta);
        self.strokes.advance(dt);

        if !self.accumulator.is_allocated() && !self.viewport.is_empty() && !self.allocate() {
            return None;
        }

        let ctx = ShadeContext {
            background: self.background,
            elapsed: self.clock.elapsed(),
            aspect: self.viewport.aspect(),
        };
        if let Err(e) = self.accumulator.accumulate(self.strokes.stroke(), &ctx) {
            log::debug!("{e}; frame skipped");
            return None;
        }
        Some(self.presenter.present(self.accumulator.front(), self.viewport))
    }

    /// Present the current front again without advancing. The main loop shows this
    /// while frozen so a resized window still gets a correctly sized frame.
    pub fn present(&mut self) -> &FrameBuffer {
        self.presenter.present(self.accumulator.front(), self.viewport)
    }

    pub fn stroke(&self) -> &StrokeState {
        self.strokes.stroke()
    }

    pub fn front(&self) -> Option<&Surface> {
        self.accumulator.front()
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }
}

/// Surface size for a viewport at a render scale; never rounds a non-empty side to 0.
fn surface_size(viewport: Viewport, scale: u32) -> (u32, u32) {
    let side = |v: u32| if v == 0 { 0 } else { (v / scale).max(1) };
    (side(viewport.width), side(viewport.height))
}
