// Pausable frame clock.
// Visual: while frozen nothing moves, and on resume strokes continue exactly where
// they stopped (time spent frozen is never counted).

/// Elapsed time at startup; shifts the hue of the first flower.
pub const START_ELAPSED: f32 = 0.9;

#[derive(Clone, Debug)]
pub struct Clock {
    elapsed: f32,
    paused: bool,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self { elapsed: START_ELAPSED, paused: false }
    }

    /// Feed one frame's wall-clock delta; returns the delta the frame should use.
    /// Paused clocks, negative and non-finite deltas all yield 0.
    pub fn tick(&mut self, delta: f32) -> f32 {
        if self.paused || !delta.is_finite() || delta <= 0.0 {
            return 0.0;
        }
        self.elapsed += delta;
        delta
    }

    /// Seconds since start (plus the start offset), excluding paused time.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_accumulates() {
        let mut c = Clock::new();
        assert_eq!(c.tick(0.5), 0.5);
        assert_eq!(c.tick(0.25), 0.25);
        assert!((c.elapsed() - (START_ELAPSED + 0.75)).abs() < 1e-6);
    }

    #[test]
    fn paused_time_is_not_counted() {
        let mut c = Clock::new();
        c.tick(0.5);
        c.set_paused(true);
        c.set_paused(true);
        assert_eq!(c.tick(3.0), 0.0);
        c.set_paused(false);
        assert!((c.elapsed() - (START_ELAPSED + 0.5)).abs() < 1e-6);
        assert!(!c.is_paused());
    }

    #[test]
    fn bad_deltas_are_dropped() {
        let mut c = Clock::new();
        assert_eq!(c.tick(-0.1), 0.0);
        assert_eq!(c.tick(f32::NAN), 0.0);
        assert_eq!(c.elapsed(), START_ELAPSED);
    }
}
