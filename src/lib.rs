//! Feedback-accumulation flower painter.
//!
//! Every click starts a stroke: a stem that grows toward the click and, for large
//! enough random radii, a bloom. Strokes are shaded per pixel on top of the previous
//! frame and the result is fed back in the next frame, so the picture only ever gets
//! painted over.

pub mod accumulator;
pub mod clock;
pub mod config;
pub mod error;
pub mod garden;
pub mod noise;
pub mod present;
pub mod shape;
pub mod stroke;
pub mod surface;
pub mod types;

pub use config::{Config, GardenSettings};
pub use error::Error;
pub use garden::Garden;
pub use types::{FrameBuffer, Viewport};
