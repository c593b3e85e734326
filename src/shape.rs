// Per-pixel flower shapes: a stem that rises to the click and a bloom that opens on top.
// Everything here is a pure function of (pixel, stroke, time); the accumulator calls
// `evaluate_stroke` once per pixel per frame.

use crate::noise::simplex;
use crate::stroke::{GROW_SPEED, Phase, StrokeState};
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Thinnest stem half-width (flower stems are this plus a little).
pub const STEM_WIDTH_BASE: f32 = 0.01;
/// How far stem noise pushes the stem sideways.
const STEM_NOISE_POWER: f32 = 0.2;

/// One pixel being shaded.
#[derive(Clone, Copy, Debug)]
pub struct Fragment {
    pub uv: Vec2,        // pixel center in [0,1]², y up
    pub sample_uv: Vec2, // where the feedback read happened (uv plus drift)
}

/// Frame-wide inputs that are not part of the stroke.
#[derive(Clone, Copy, Debug)]
pub struct ShadeContext {
    pub background: Vec3,
    pub elapsed: f32, // wall clock, drives the hue drift
    pub aspect: f32,
}

/// Hermite step between `e0` and `e1`; reversed edges invert it, equal edges are a hard step.
#[inline]
pub fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    if e0 == e1 {
        return if x < e0 { 0.0 } else { 1.0 };
    }
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Soft disc: 1 inside `edge_fraction * radius_max`, fading to 0 at `radius_max`
/// (measured on 4·|dist|²). A non-positive radius draws nothing.
#[inline]
pub fn dot_shape(dist: Vec2, radius_max: f32, edge_fraction: f32) -> f32 {
    if !(radius_max > 0.0) || !radius_max.is_finite() {
        return 0.0;
    }
    1.0 - smoothstep(edge_fraction * radius_max, radius_max, dist.dot(dist) * 4.0)
}

/// Stem silhouette intensity in [0,1].
///
/// `flowery` = 1 gives the thin stem under a flower (with a bud dot of `size`);
/// `flowery` = 0 gives a short, wide, noisy blade of grass. `grow_time` slides the
/// top mask upward so the stem appears to grow toward the cursor.
pub fn stem_shape(mut cursor: Vec2, uv: Vec2, grow_time: f32, size: f32, flowery: f32, rand: Vec2) -> f32 {
    let mut horizontal_noise =
        STEM_NOISE_POWER * (1.0 + (1.0 - flowery)) * simplex(3.0 * uv * (rand - Vec2::splat(0.5)));

    // still at the flower head and at the bottom of the screen
    horizontal_noise *= (cursor.y * cursor.y).powf(0.3 * flowery);
    horizontal_noise *= (uv.y * uv.y).powf(0.3);
    cursor.x += horizontal_noise;

    // grass is shorter
    cursor.y *= 1.0 - (1.0 - flowery) * 0.7;
    cursor.y += (1.0 - flowery) * 0.7 * rand.x;

    // ...and wider
    let width = (1.0 - flowery) * 0.9 * (uv.y * cursor.x) + flowery * (STEM_WIDTH_BASE + 0.02) - 0.02;

    let left = smoothstep(-width, 0.0, cursor.x);
    let right = smoothstep(width, 0.0, cursor.x);
    let mut stem = left * right;

    let top_mask = smoothstep(cursor.y - 0.1, cursor.y, (grow_time - 1.0).min(-0.1));

    // bud on top
    stem *= top_mask;
    stem += 0.5 * dot_shape(cursor + Vec2::new(0.0, 0.02), 0.15 * size, 0.5);
    stem *= top_mask;

    stem.clamp(0.0, 1.0)
}

/// Color change for one pixel given the feedback `base` color under it.
///
/// Growing strokes darken a stem toward the background's complement; open strokes
/// additionally paint a bloom (disc, mask, two highlight rings, a center dot).
/// A finished stroke returns exactly zero.
pub fn evaluate_stroke(frag: Fragment, base: Vec3, stroke: &StrokeState, ctx: &ShadeContext) -> Vec3 {
    let t = stroke.stroke_time();
    let seed = stroke.seed();
    let base_radius = stroke.base_radius();
    let growing = stroke.phase() == Phase::Growing;
    let blooming = stroke.blooms_now();
    if !growing && !blooming {
        return Vec3::ZERO;
    }

    let mut color = base;

    if growing {
        let mut cursor = frag.sample_uv - stroke.origin();
        cursor.x *= ctx.aspect;
        let grow_time = GROW_SPEED * t;

        let stem_color = ctx.background - Vec3::new(0.3, 0.5, 0.1).normalize();
        let stem = stem_shape(cursor, frag.sample_uv, grow_time, base_radius, 1.0, Vec2::new(seed.x, seed.y))
            + stem_shape(cursor, frag.sample_uv, grow_time, 0.0, 0.0, Vec2::new(seed.y, seed.z))
            + stem_shape(cursor, frag.sample_uv, grow_time, 0.0, 0.0, Vec2::new(seed.z, seed.y));
        color -= stem * stem_color;
    }

    if blooming {
        color = bloom(frag.uv, color, stroke, ctx);
    }

    color - base
}

/// Flower head over `color`. Only called for open strokes.
fn bloom(uv: Vec2, mut color: Vec3, stroke: &StrokeState, ctx: &ShadeContext) -> Vec3 {
    let t = stroke.stroke_time();
    let seed = stroke.seed();
    let blooming_time = ((1.1 * t).powi(2) - 0.05).max(0.0);
    let radius = stroke.base_radius() * blooming_time;

    let mut noisy = uv - stroke.origin();
    noisy.x *= ctx.aspect;
    noisy.y *= 1.0 + seed.y;
    noisy -= Vec2::splat(0.02 * simplex(noisy * 10.0 + Vec2::new(0.0, 10.0 * (0.5 * t + PI).sin())));

    // hue drifts with wall time, so consecutive flowers differ
    let hue = 2.0 * ctx.elapsed;
    let flower_color = ctx.background - Vec3::new(0.5 + 0.5 * hue.sin(), 0.3, 0.5 + 0.5 * (hue + PI).sin()).normalize();
    color -= 0.4 * dot_shape(noisy, 1.5 * radius, 0.0) * flower_color;

    // pull the outside of the disc back toward the background
    let inside = 1.0 - dot_shape(noisy, radius, 0.0);
    color = 0.7 * color + 0.3 * ctx.background.lerp(color, inside);

    // big inner ring
    noisy.y -= 0.02;
    color += Vec3::splat(0.2 * blooming_time * ring(noisy, 0.7 * radius, 0.2 * radius));

    // small inner ring
    color += Vec3::splat(0.1 * t.max(0.0).sqrt() * ring(noisy, 0.4 * radius, 0.1 * radius));

    // center dot
    let mut low = uv - stroke.origin();
    low.x *= 0.5 * ctx.aspect;
    low.y += 0.02;
    low += Vec2::splat(0.01 * simplex(low * 10.0 + Vec2::splat(t)));
    color -= Vec3::splat(t.powi(5) * dot_shape(low, 0.01 * radius, 0.0));

    color
}

#[inline]
fn ring(dist: Vec2, inner: f32, width: f32) -> f32 {
    dot_shape(dist, inner + width, 0.9) - dot_shape(dist, inner, 0.9)
}
