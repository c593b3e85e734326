// What you SEE:
// • A white page; the first flower grows on its own near the upper right.
// • Click anywhere: a new stem grows up to the click and may open into a bloom.
//   Clicking again mid-growth starts over elsewhere; the half-grown one stays painted.
// • Space freezes/unfreezes (clicking also unfreezes). ESC quits.

mod draw;

use bloom_garden::{Config, Error, Garden};
use clap::Parser;
use draw::Drawer;
use std::time::{Duration, Instant};

fn main() -> Result<(), Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::parse();

    /* --- Window + garden setup ---
       Visual: window opens on a blank background page. */
    let mut drawer = Drawer::new(
        "Bloom Garden",
        config.width as usize,
        config.height as usize,
        config.fps as usize,
    )?;
    let mut garden = Garden::new(config.settings(), config.rng());

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut last_frame_time = Instant::now();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        let dt = (now - last_frame_time).as_secs_f32(); // visual: drives stroke growth
        last_frame_time = now;

        /* 1) Window size: a resize clears the picture. */
        let (w, h) = drawer.size();
        garden.resize(w as u32, h as u32);

        /* 2) Inputs, applied before the frame is rendered. */
        if drawer.space_pressed_once() {
            garden.set_paused(!garden.is_paused());
        }
        if let Some((mx, my)) = drawer.left_click() {
            garden.stroke_event(mx, my); // visual: new stem starts growing
            garden.set_paused(false);
        }

        /* 3) Advance + accumulate + present. Frozen frames re-show the last picture
              at the current window size. */
        match garden.advance_frame(dt) {
            Some(frame) => drawer.present(frame)?,
            None => drawer.present(garden.present())?,
        }

        /* 4) FPS once per second */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            log::info!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
