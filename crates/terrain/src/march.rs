//! Ray-terrain intersection by adaptive marching.
//!
//! Not true sphere tracing: the heightfield is not a distance bound, so the
//! step size is a heuristic, a fraction of the vertical gap damped by the
//! slope (the up component of the terrain normal). Big strides over plains,
//! short careful steps against cliffs. A fixed iteration budget bounds the
//! worst case regardless of the step sizes produced.

use glam::Vec3;

use crate::camera::Ray;
use crate::heightfield::sample_terrain_at;
use crate::params::{MarchParams, TerrainParams};

/// First intersection of a ray with the terrain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// March distance along the ray, in `[0, max_distance]`.
    pub distance: f32,
    /// Terrain normal at the intersection, unit length.
    pub normal: Vec3,
}

/// Outcome of one march, including the iterations it consumed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct March {
    pub hit: Option<Hit>,
    /// Stepping iterations performed, never above `max_iterations`.
    pub iterations: u32,
}

/// Heuristic step for a given vertical gap and terrain slope.
///
/// `normal_up` is the up component of the terrain normal: 1 on flat ground,
/// near zero against cliffs. Positive whenever the ray is above the surface
/// by at least the hit threshold, so the march distance never regresses.
#[must_use]
pub fn step_size(gap: f32, normal_up: f32, params: &MarchParams) -> f32 {
    params.step_scale * gap * (params.slope_bias + normal_up)
}

/// Marches `ray` against the terrain until a hit, the distance cap, or the
/// iteration budget runs out.
///
/// On a hit the exact crossing is recovered by a secant correction between
/// the previous and current samples. A zero or negative step (the ray
/// started at or below the surface) resolves as an immediate hit instead of
/// stalling the loop.
#[must_use]
pub fn march(ray: &Ray, terrain: &TerrainParams, params: &MarchParams) -> March {
    let mut prev_height = 0.0_f32;
    let mut prev_y = ray.origin.y;
    let mut t = 0.0_f32;

    for iteration in 0..params.max_iterations {
        let position = ray.origin + ray.direction * t;
        let sample = sample_terrain_at(position, terrain);

        let gap = position.y - sample.height;
        let dt = step_size(gap, sample.normal.y, params);

        if gap < params.hit_threshold || dt <= 0.0 {
            let denom = position.y - prev_y - sample.height + prev_height;
            let distance = if denom.abs() > 1e-6 {
                t - dt + dt * (prev_height - prev_y) / denom
            } else {
                t
            };
            return March {
                hit: Some(Hit {
                    distance: distance.clamp(0.0, params.max_distance),
                    normal: sample.normal,
                }),
                iterations: iteration + 1,
            };
        }

        if t > params.max_distance {
            return March {
                hit: None,
                iterations: iteration + 1,
            };
        }

        t += dt;
        prev_y = position.y;
        prev_height = sample.height;
    }

    March {
        hit: None,
        iterations: params.max_iterations,
    }
}

/// [`march`] without the iteration count.
#[must_use]
pub fn cast_ray(ray: &Ray, terrain: &TerrainParams, params: &MarchParams) -> Option<Hit> {
    march(ray, terrain, params).hit
}
