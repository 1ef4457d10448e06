//! Hash-based value noise with an analytic gradient.
//!
//! The lattice hash is a fract/dot shuffle with no table and no RNG state, so
//! the field is reproducible from the input point alone and ports verbatim to
//! the WGSL evaluator. Interpolation uses the quintic kernel, which is zero
//! and flat at both cell edges, giving first-derivative continuity across
//! lattice boundaries.

use glam::{vec2, Vec2};

/// One noise evaluation: the interpolated value and its exact gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseSample {
    /// Interpolated lattice value in `[0, 1)`.
    pub value: f32,
    /// Analytic partial derivatives with respect to the input axes.
    pub derivative: Vec2,
}

fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Deterministic scalar hash of a lattice point, in `[0, 1)`.
#[must_use]
pub fn lattice_hash(p: Vec2) -> f32 {
    let mut x = fract(p.x * 0.1031);
    let mut y = fract(p.y * 0.1031);
    let mut z = fract(p.x * 0.1031);
    let d = x * (y + 33.33) + y * (z + 33.33) + z * (x + 33.33);
    x += d;
    y += d;
    z += d;
    fract((x + y) * z)
}

/// Value noise at `p` with its analytic gradient.
///
/// Hashes the four surrounding lattice corners and blends them with the
/// quintic kernel `u = f^3 (f (6f - 15) + 10)`; the gradient follows from the
/// product rule over the same blend weights, so value and derivative always
/// agree exactly.
#[must_use]
pub fn value_noise(p: Vec2) -> NoiseSample {
    let cell = p.floor();
    let f = p - cell;

    let u = f * f * f * (f * (f * 6.0 - 15.0) + 10.0);
    let du = 30.0 * f * f * (f * (f - 2.0) + 1.0);

    let a = lattice_hash(cell);
    let b = lattice_hash(cell + vec2(1.0, 0.0));
    let c = lattice_hash(cell + vec2(0.0, 1.0));
    let d = lattice_hash(cell + vec2(1.0, 1.0));

    let k1 = b - a;
    let k2 = c - a;
    let k3 = a - b - c + d;

    NoiseSample {
        value: a + k1 * u.x + k2 * u.y + k3 * u.x * u.y,
        derivative: vec2(du.x * (k1 + k3 * u.y), du.y * (k2 + k3 * u.x)),
    }
}
