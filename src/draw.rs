// Window glue: the only place that talks to minifb.
// Visual effects provided here:
// 1) A resizable window that shows the garden.
// 2) Clicks become new flowers; Space freezes/unfreezes; Esc quits.

use bloom_garden::{Error, FrameBuffer};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,       // the on-screen window you see
    left_was_down: bool,  // for turning a held button into one click
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window =
            Window::new(title, width, height, options).map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window, left_was_down: false })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new picture.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        if framebuffer.width == 0 || framebuffer.height == 0 {
            self.window.update();
            return Ok(());
        }
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we’ll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Inner size in pixels; changes when the user resizes the window.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Position of a fresh left click (press edge, not hold), in window pixels.
    pub fn left_click(&mut self) -> Option<(f32, f32)> {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let pressed = down && !self.left_was_down;
        self.left_was_down = down;
        if !pressed {
            return None;
        }
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    /// Space toggles freeze.
    pub fn space_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::Space, KeyRepeat::No)
    }
}
