// 2D simplex noise: the organic wobble on every stem and petal edge.
// Visual: shape boundaries breathe smoothly instead of being perfect circles/lines.

use glam::{Vec2, Vec3};

// Skew/unskew factors for the 2D simplex grid.
const C_X: f32 = 0.211_324_87; // (3 - sqrt(3)) / 6
const C_Y: f32 = 0.366_025_42; // (sqrt(3) - 1) / 2
const C_Z: f32 = -0.577_350_26; // -1 + 2 * C_X
const C_W: f32 = 0.024_390_243; // 1 / 41

#[inline]
fn mod289_2(x: Vec2) -> Vec2 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_3(x: Vec3) -> Vec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

/// Permutation polynomial (34x² + x) mod 289; hashes lattice corners without a table.
#[inline]
fn permute(x: Vec3) -> Vec3 {
    mod289_3((x * 34.0 + Vec3::ONE) * x)
}

#[inline]
fn fract(x: Vec3) -> Vec3 {
    x - x.floor()
}

/// Simplex gradient noise at `v`, roughly in [-1, 1].
/// Deterministic and allocation-free; called several times per pixel per frame.
pub fn simplex(v: Vec2) -> f32 {
    // First corner
    let mut i = (v + Vec2::splat(v.dot(Vec2::splat(C_Y)))).floor();
    let x0 = v - i + Vec2::splat(i.dot(Vec2::splat(C_X)));

    // Other corners
    let i1 = if x0.x > x0.y { Vec2::new(1.0, 0.0) } else { Vec2::new(0.0, 1.0) };
    let x1 = x0 + Vec2::splat(C_X) - i1;
    let x2 = x0 + Vec2::splat(C_Z);

    // Permutations
    i = mod289_2(i);
    let p = permute(
        permute(Vec3::splat(i.y) + Vec3::new(0.0, i1.y, 1.0)) + Vec3::splat(i.x) + Vec3::new(0.0, i1.x, 1.0),
    );

    let mut m = (Vec3::splat(0.5) - Vec3::new(x0.dot(x0), x1.dot(x1), x2.dot(x2))).max(Vec3::ZERO);
    m *= m;
    m *= m;

    // Gradients: 41 points uniformly over a line, mapped onto a diamond.
    let x = fract(p * C_W) * 2.0 - Vec3::ONE;
    let h = x.abs() - Vec3::splat(0.5);
    let ox = (x + Vec3::splat(0.5)).floor();
    let a0 = x - ox;

    // Normalise gradients implicitly by scaling m.
    m *= Vec3::splat(1.792_842_9) - (a0 * a0 + h * h) * 0.853_734_7;

    let g = Vec3::new(
        a0.x * x0.x + h.x * x0.y,
        a0.y * x1.x + h.y * x1.y,
        a0.z * x2.x + h.z * x2.y,
    );
    130.0 * m.dot(g)
}
