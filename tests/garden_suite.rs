use bloom_garden::accumulator::Front;
use bloom_garden::stroke::{GROW_DURATION, Phase, STROKE_SPEED};
use bloom_garden::{Garden, GardenSettings};

const FRAME: f32 = 1.0 / 60.0;
const WHITE: u32 = 0x00FF_FFFF;

fn garden(width: u32, height: u32, drift: bool) -> Garden {
    let settings = GardenSettings { width, height, drift, render_scale: 1, ..GardenSettings::default() };
    Garden::new(settings, fastrand::Rng::with_seed(42))
}

fn snapshot(g: &Garden) -> Vec<u8> {
    g.front().expect("surfaces allocated").image().as_raw().clone()
}

// ── End-to-end ──────────────────────────────────────────────────────────────

#[test]
fn first_frame_is_white_outside_the_stem_column() {
    let mut g = garden(800, 600, true);
    assert_eq!(g.stroke().local_time(), 0.0);
    assert_eq!(g.stroke().phase(), Phase::Growing);

    let frame = g.advance_frame(0.0).expect("first frame presented");
    assert_eq!((frame.width, frame.height), (800, 600));
    // origin x = 0.65 → pixel 520; allow a generous column for stem noise
    for y in 0..600 {
        for x in (0..800).filter(|x| !(360..680).contains(x)) {
            assert_eq!(frame.pixel(x, y), WHITE, "pixel ({x},{y}) painted");
        }
    }
}

#[test]
fn first_flower_paints_something_eventually() {
    let mut g = garden(160, 120, true);
    for _ in 0..40 {
        g.advance_frame(FRAME);
    }
    let painted = g.present().pixels.iter().filter(|&&p| p != WHITE).count();
    assert!(painted > 0);
}

// ── Accumulation ────────────────────────────────────────────────────────────

#[test]
fn picture_is_carried_forward_after_stroke_finishes() {
    let mut g = garden(120, 90, false);
    for _ in 0..45 {
        g.advance_frame(FRAME);
    }
    // run the first flower to completion
    g.advance_frame(2.0);
    assert_eq!(g.stroke().phase(), Phase::Done);
    let before = snapshot(&g);
    for _ in 0..10 {
        let label = g.accumulator().front_label();
        g.advance_frame(FRAME);
        assert_ne!(g.accumulator().front_label(), label);
        assert_eq!(snapshot(&g), before);
    }
}

#[test]
fn parity_flips_each_frame() {
    let mut g = garden(32, 24, true);
    assert_eq!(g.accumulator().front_label(), Some(Front::Ping));
    g.advance_frame(FRAME);
    assert_eq!(g.accumulator().front_label(), Some(Front::Pong));
    g.advance_frame(FRAME);
    assert_eq!(g.accumulator().front_label(), Some(Front::Ping));
}

// ── Strokes ─────────────────────────────────────────────────────────────────

#[test]
fn stroke_event_resets_time_and_flips_y() {
    let mut g = garden(800, 600, true);
    for _ in 0..10 {
        g.advance_frame(FRAME);
    }
    assert!(g.stroke().local_time() > 0.0);
    g.stroke_event(200.0, 150.0);
    g.advance_frame(0.0);
    let s = *g.stroke();
    assert_eq!(s.local_time(), 0.0);
    assert!((s.origin().x - 0.25).abs() < 1e-6);
    assert!((s.origin().y - 0.75).abs() < 1e-6);
    for v in s.seed().to_array() {
        assert!((0.0..1.0).contains(&v));
    }

    g.stroke_event(200.0, 150.0);
    g.advance_frame(0.0);
    assert_ne!(g.stroke().seed(), s.seed());
}

#[test]
fn out_of_range_clicks_are_clamped() {
    let mut g = garden(100, 100, true);
    g.stroke_event(-50.0, f32::NAN);
    g.advance_frame(0.0);
    assert_eq!(g.stroke().origin().x, 0.0);
    assert_eq!(g.stroke().origin().y, 0.5);
    g.stroke_event(1e9, 1e9);
    g.advance_frame(0.0);
    assert_eq!(g.stroke().origin().x, 1.0);
    assert_eq!(g.stroke().origin().y, 0.0);
}

#[test]
fn interrupting_keeps_already_painted_pixels() {
    let mut g = garden(200, 150, false);
    // let the first flower grow and partly bloom
    for _ in 0..30 {
        g.advance_frame(FRAME);
    }
    let painted = snapshot(&g);
    assert!(painted.iter().any(|&c| c != 255));

    // new stroke near the bottom-left corner; it takes effect on the next frame
    g.stroke_event(10.0, 148.0);
    assert_eq!(snapshot(&g), painted, "stroke event touched the surfaces");
    assert!(g.stroke().local_time() > 0.1);

    // its first frame (stroke time 0.13) neither reaches the old flower nor blooms yet
    g.advance_frame(0.1);
    assert!(g.stroke().stroke_time() < GROW_DURATION);
    assert_eq!(snapshot(&g), painted);
}

// ── Pause ───────────────────────────────────────────────────────────────────

#[test]
fn pause_is_idempotent_and_resumable() {
    let mut g = garden(64, 48, true);
    for _ in 0..5 {
        g.advance_frame(FRAME);
    }
    let t = g.stroke().local_time();
    let elapsed = g.elapsed();
    let picture = snapshot(&g);

    g.set_paused(true);
    g.set_paused(true);
    for _ in 0..20 {
        assert!(g.advance_frame(FRAME).is_none());
    }
    assert_eq!(g.stroke().local_time(), t);
    assert_eq!(g.elapsed(), elapsed);
    assert_eq!(snapshot(&g), picture);

    g.set_paused(false);
    assert_eq!(g.stroke().local_time(), t);
    assert!(g.advance_frame(FRAME).is_some());
    assert!((g.stroke().local_time() - (t + FRAME)).abs() < 1e-6);
}

// ── Resize ──────────────────────────────────────────────────────────────────

#[test]
fn resize_through_zero_is_safe() {
    let mut g = garden(800, 600, true);
    g.advance_frame(FRAME);

    g.resize(0, 0);
    assert!(g.advance_frame(FRAME).is_none());
    assert!(g.front().is_none());
    assert!(g.present().pixels.is_empty());
    g.stroke_event(10.0, 10.0);

    g.resize(640, 480);
    let frame = g.advance_frame(FRAME).expect("frame after resize");
    assert_eq!((frame.width, frame.height), (640, 480));
    assert_eq!(frame.pixels.len(), 640 * 480);
}

#[test]
fn resize_clears_history() {
    let mut g = garden(120, 90, true);
    for _ in 0..40 {
        g.advance_frame(FRAME);
    }
    g.resize(100, 80);
    let front = g.front().expect("reallocated");
    assert_eq!((front.width(), front.height()), (100, 80));
    assert!(front.image().as_raw().iter().all(|&c| c == 255));
}

#[test]
fn default_render_scale_halves_surfaces() {
    let mut g = Garden::new(GardenSettings::default(), fastrand::Rng::with_seed(3));
    assert_eq!(g.accumulator().size(), Some((400, 300)));
    let frame = g.advance_frame(FRAME).unwrap();
    assert_eq!((frame.width, frame.height), (800, 600));
}

#[test]
fn render_scale_shrinks_surfaces_not_frames() {
    let settings = GardenSettings { width: 200, height: 100, render_scale: 4, ..GardenSettings::default() };
    let mut g = Garden::new(settings, fastrand::Rng::with_seed(3));
    assert_eq!(g.accumulator().size(), Some((50, 25)));
    let frame = g.advance_frame(FRAME).unwrap();
    assert_eq!(frame.pixels.len(), 200 * 100);
}

#[test]
fn grow_window_matches_stroke_speed() {
    let mut g = garden(40, 30, true);
    let frames_to_grow = (GROW_DURATION / STROKE_SPEED / FRAME).ceil() as usize;
    for _ in 0..frames_to_grow + 1 {
        g.advance_frame(FRAME);
    }
    assert_ne!(g.stroke().phase(), Phase::Growing);
}
