// The one live stroke (a growing flower) and the controller that admits new ones.
// Visual: each click starts a stem that grows up to the click point and, if the
// random radius is big enough, opens into a bloom.

use glam::{Vec2, Vec3};

/// Stroke-time multiplier applied to the local timer.
pub const STROKE_SPEED: f32 = 1.3;
/// Stem growth window, in stroke time.
pub const GROW_DURATION: f32 = 0.6;
/// How fast the stem's top mask slides upward.
pub const GROW_SPEED: f32 = 2.0 * STROKE_SPEED;
/// Strokes with a base radius at or above this bloom; smaller ones stay grass.
pub const OPEN_RADIUS: f32 = 0.1;
/// Bloom window length per unit of `seed.y`, in stroke time.
pub const BLOOM_SCALE: f32 = 0.3;

/// Where the first flower appears before anyone clicks (pointer space, y down).
pub const FIRST_FLOWER_POINTER: Vec2 = Vec2::new(0.65, 0.3);
/// Fixed seed of the first flower so the opening frames are reproducible.
pub const FIRST_FLOWER_SEED: Vec3 = Vec3::new(0.5, 1.0, 1.0);

/// Lifecycle of a stroke, derived from its stroke time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Growing,  // stem still rising
    Blooming, // stem done, flower head still opening
    Done,     // nothing more to draw
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeState {
    origin: Vec2,    // normalized, y up
    seed: Vec3,      // each component in [0,1)
    local_time: f32, // seconds since the stroke started
}

impl StrokeState {
    /// A fresh stroke at `origin` (already y-flipped) with local time 0.
    pub fn new(origin: Vec2, seed: Vec3) -> Self {
        Self { origin, seed, local_time: 0.0 }
    }

    /// The pre-seeded opening flower.
    pub fn first_flower() -> Self {
        Self::new(flip_y(FIRST_FLOWER_POINTER), FIRST_FLOWER_SEED)
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn seed(&self) -> Vec3 {
        self.seed
    }

    pub fn local_time(&self) -> f32 {
        self.local_time
    }

    /// Local time scaled by the stroke speed; all phase windows are in this unit.
    pub fn stroke_time(&self) -> f32 {
        STROKE_SPEED * self.local_time
    }

    pub fn base_radius(&self) -> f32 {
        0.02 + 0.2 * self.seed.y
    }

    pub fn is_open(&self) -> bool {
        self.base_radius() >= OPEN_RADIUS
    }

    /// Zero for grass: a closed stroke has no bloom window at all.
    pub fn bloom_duration(&self) -> f32 {
        if self.is_open() { BLOOM_SCALE * self.seed.y } else { 0.0 }
    }

    pub fn phase(&self) -> Phase {
        let t = self.stroke_time();
        if t < GROW_DURATION {
            Phase::Growing
        } else if self.is_open() && t < GROW_DURATION + self.bloom_duration() {
            Phase::Blooming
        } else {
            Phase::Done
        }
    }

    /// The bloom is drawn for the whole life of an open stroke, stem phase included;
    /// it stays invisible until its radius ramps above zero.
    pub fn blooms_now(&self) -> bool {
        self.is_open() && self.phase() != Phase::Done
    }

    /// Advance the local timer. Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.local_time += dt;
        }
    }
}

/// Pointer space (y down) to stroke space (y up).
#[inline]
pub fn flip_y(p: Vec2) -> Vec2 {
    Vec2::new(p.x, 1.0 - p.y)
}

/// Clamp one normalized coordinate; NaN lands in the middle.
#[inline]
fn sanitize_unit(v: f32) -> f32 {
    if v.is_nan() { 0.5 } else { v.clamp(0.0, 1.0) }
}

/// Admits stroke events: the only writer of the live `StrokeState` besides the frame tick.
pub struct StrokeController {
    rng: fastrand::Rng,
    stroke: StrokeState,
}

impl StrokeController {
    /// Starts with the first flower; `rng` supplies every later seed.
    pub fn new(rng: fastrand::Rng) -> Self {
        Self { rng, stroke: StrokeState::first_flower() }
    }

    pub fn stroke(&self) -> &StrokeState {
        &self.stroke
    }

    /// Start a new stroke at a normalized pointer position (y down).
    /// The old stroke is dropped as-is; whatever it painted stays in the picture.
    pub fn on_stroke_event(&mut self, position: Vec2) {
        let pointer = Vec2::new(sanitize_unit(position.x), sanitize_unit(position.y));
        let seed = Vec3::new(self.rng.f32(), self.rng.f32(), self.rng.f32());
        self.stroke = StrokeState::new(flip_y(pointer), seed);
        log::debug!(
            "stroke at ({:.3}, {:.3}) seed ({:.3}, {:.3}, {:.3}) open={}",
            self.stroke.origin.x,
            self.stroke.origin.y,
            seed.x,
            seed.y,
            seed.z,
            self.stroke.is_open()
        );
    }

    pub fn advance(&mut self, dt: f32) {
        self.stroke.advance(dt);
    }
}
