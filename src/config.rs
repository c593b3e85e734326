use crate::error::Error;
use clap::Parser;
use glam::Vec3;

#[derive(Parser, Debug, Clone)]
#[command(name = "bloom-garden", version, about = "Click to grow flowers into a picture that never clears")]
pub struct Config {
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Background color as RRGGBB hex
    #[arg(long, default_value = "ffffff", value_parser = parse_background)]
    pub background: Vec3,

    /// Surfaces are rendered at window size divided by this, then scaled up
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub render_scale: u32,

    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Fixed RNG seed for reproducible strokes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Slow noise drift of the accumulated picture
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub drift: bool,
}

impl Config {
    pub fn settings(&self) -> GardenSettings {
        GardenSettings {
            width: self.width,
            height: self.height,
            background: self.background,
            render_scale: self.render_scale,
            drift: self.drift,
        }
    }

    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

/// Everything the garden needs at startup, independent of the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GardenSettings {
    pub width: u32,
    pub height: u32,
    pub background: Vec3,
    pub render_scale: u32,
    pub drift: bool,
}

impl Default for GardenSettings {
    fn default() -> Self {
        Self { width: 800, height: 600, background: Vec3::ONE, render_scale: 2, drift: true }
    }
}

/// "RRGGBB" (optionally with a leading '#') to a color in [0,1]³.
pub fn parse_hex_color(text: &str) -> Result<Vec3, Error> {
    let hex = text.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(Error::InvalidColor(text.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(text.to_string()))
    };
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    Ok(Vec3::new(r as f32, g as f32, b as f32) / 255.0)
}

fn parse_background(text: &str) -> Result<Vec3, String> {
    parse_hex_color(text).map_err(|e| e.to_string())
}
