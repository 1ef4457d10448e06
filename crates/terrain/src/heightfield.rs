//! Fractal terrain heightfield.
//!
//! Classic fBm over the value noise field: each octave doubles the sampling
//! frequency and halves the amplitude (for the default Hurst exponent), and
//! the analytic noise gradients accumulate alongside the heights so the
//! surface normal costs nothing extra. Raw octave samples are remapped from
//! `[0, 1)` to a signed range before accumulating; without that the terrain
//! could never dip below the water plane.

use glam::{vec2, Vec2, Vec3};

use crate::noise::value_noise;
use crate::params::TerrainParams;

/// Height and surface normal at one horizontal query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainSample {
    pub height: f32,
    /// Unit surface normal, `+Y` on the water plane.
    pub normal: Vec3,
}

/// Raw fractal height and horizontal gradient at `p`, before the water clamp.
#[must_use]
pub fn fbm(p: Vec2, params: &TerrainParams) -> (f32, Vec2) {
    let gain = params.gain();
    let mut frequency = 1.0_f32;
    let mut amplitude = 1.0_f32;
    let mut height = 0.0_f32;
    let mut gradient = Vec2::ZERO;

    for _ in 0..params.octaves {
        let n = value_noise(frequency * params.scale * p);
        height += amplitude * (2.0 * n.value - 1.0);
        gradient += amplitude * frequency * 2.0 * n.derivative;
        frequency *= params.lacunarity;
        amplitude *= gain;
    }

    (
        height * params.height,
        gradient * params.height * params.scale,
    )
}

/// Terrain sample at the horizontal point `p`.
///
/// The normal comes from the accumulated gradient as
/// `normalize(-dh/dx, 1, -dh/dy)`; the fixed middle component keeps it away
/// from zero for any gradient. Heights below the water level clamp hard to a
/// flat plane facing straight up.
#[must_use]
pub fn sample_terrain(p: Vec2, params: &TerrainParams) -> TerrainSample {
    let (height, gradient) = fbm(p, params);
    if height < params.water_height {
        return TerrainSample {
            height: params.water_height,
            normal: Vec3::Y,
        };
    }
    TerrainSample {
        height,
        normal: Vec3::new(-gradient.x, 1.0, -gradient.y).normalize(),
    }
}

/// Convenience wrapper for 3D positions; only `x` and `z` matter.
#[must_use]
pub fn sample_terrain_at(position: Vec3, params: &TerrainParams) -> TerrainSample {
    sample_terrain(vec2(position.x, position.z), params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_is_deterministic() {
        let params = TerrainParams::default();
        let p = vec2(1000.0, 0.0);
        let first = sample_terrain(p, &params);
        let second = sample_terrain(p, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn normals_are_unit_length() {
        let params = TerrainParams::default();
        for i in 0..200 {
            let p = vec2(-3000.0 + i as f32 * 31.7, 2000.0 - i as f32 * 17.3);
            let sample = sample_terrain(p, &params);
            assert!(
                (sample.normal.length() - 1.0).abs() < 1e-4,
                "normal at {p} has length {}",
                sample.normal.length()
            );
            assert!(sample.normal.y > 0.0);
        }
    }

    #[test]
    fn water_clamp_flattens_low_terrain() {
        let params = TerrainParams::default();
        // Raw fbm is far below the water level here (around -155).
        let p = vec2(-5000.0, -5000.0);
        let (raw, _) = fbm(p, &params);
        assert!(raw < params.water_height - 20.0, "raw height {raw}");
        let sample = sample_terrain(p, &params);
        assert_eq!(sample.height, params.water_height);
        assert_eq!(sample.normal, Vec3::Y);
    }

    #[test]
    fn water_clamp_holds_wherever_raw_height_is_low() {
        let params = TerrainParams::default();
        let mut clamped = 0;
        for gx in -20..=20 {
            for gy in -20..=20 {
                let p = vec2(gx as f32 * 500.0 + 250.0, gy as f32 * 500.0 + 250.0);
                let (raw, _) = fbm(p, &params);
                if raw < params.water_height {
                    let sample = sample_terrain(p, &params);
                    assert_eq!(sample.height, params.water_height);
                    assert_eq!(sample.normal, Vec3::Y);
                    clamped += 1;
                }
            }
        }
        assert!(clamped > 0, "grid never reached the water plane");
    }

    #[test]
    fn height_is_continuous_across_noise_cells() {
        let params = TerrainParams::default();
        // Octave 0 lattice edges land every 1/scale = 500 world units.
        let eps = 0.01;
        for (x, y) in [(500.0, 123.0), (-1500.0, -777.0), (2000.0, 42.0)] {
            let below = sample_terrain(vec2(x - eps, y), &params).height;
            let above = sample_terrain(vec2(x + eps, y), &params).height;
            assert!(
                (below - above).abs() < 0.05,
                "height jump at x={x}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn height_scales_with_height_parameter() {
        let base = TerrainParams::default();
        let doubled = TerrainParams {
            height: base.height * 2.0,
            ..base
        };
        let p = vec2(321.0, -654.0);
        let (h1, _) = fbm(p, &base);
        let (h2, _) = fbm(p, &doubled);
        assert!((h2 - 2.0 * h1).abs() < 1e-3 * h1.abs().max(1.0));
    }
}
