//! Primary ray generation.
//!
//! The camera is fixed: it sits on the `x = 1000` axis, rides 100 units above
//! the terrain under it and looks at the world origin at the same altitude.
//! Field of view is baked into the forward weight of the direction sum.

use glam::{vec2, Vec2, Vec3};

use crate::heightfield::sample_terrain;
use crate::params::{FrameUniforms, TerrainParams};

/// Camera eye anchor; `y` is replaced by the terrain height plus the offset.
const EYE_ANCHOR: Vec3 = Vec3::new(1000.0, 0.0, 0.0);
/// Height of the eye above the terrain below it.
const EYE_LIFT: f32 = 100.0;
/// Forward weight of the direction sum; larger means a narrower view.
const FOV_WEIGHT: f32 = 2.0;

/// A world-space ray with unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Builds the primary ray for a screen coordinate in `[0, 1]^2`.
///
/// Screen space has its origin at the top-left, so the vertical axis flips
/// before the remap to `[-1, 1]^2`; the horizontal axis then stretches by the
/// aspect ratio so pixels stay square.
#[must_use]
pub fn build_ray(uv: Vec2, uniforms: &FrameUniforms, terrain: &TerrainParams) -> Ray {
    let mut ndc = vec2(uv.x, 1.0 - uv.y) * 2.0 - 1.0;
    ndc.x *= uniforms.render_width / uniforms.render_height;

    let ground = sample_terrain(vec2(EYE_ANCHOR.x, EYE_ANCHOR.z), terrain).height + EYE_LIFT;
    let eye = Vec3::new(EYE_ANCHOR.x, ground, EYE_ANCHOR.z);
    let target = Vec3::new(0.0, ground, 0.0);

    let forward = (target - eye).try_normalize().unwrap_or(Vec3::NEG_X);
    let right = forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::NEG_Z);
    let up = right.cross(forward).normalize();

    Ray {
        origin: eye,
        direction: (ndc.x * right + ndc.y * up + FOV_WEIGHT * forward).normalize(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniforms() -> FrameUniforms {
        FrameUniforms::new(0.0, 1920.0, 1080.0)
    }

    #[test]
    fn center_pixel_looks_along_camera_forward() {
        let ray = build_ray(vec2(0.5, 0.5), &uniforms(), &TerrainParams::default());
        assert!((ray.direction - Vec3::NEG_X).length() < 1e-6);
    }

    #[test]
    fn eye_rides_above_the_terrain() {
        let terrain = TerrainParams::default();
        let ray = build_ray(vec2(0.5, 0.5), &uniforms(), &terrain);
        let ground = sample_terrain(vec2(1000.0, 0.0), &terrain).height;
        assert!((ray.origin.y - (ground + 100.0)).abs() < 1e-3);
        assert_eq!(ray.origin.x, 1000.0);
        assert_eq!(ray.origin.z, 0.0);
    }

    #[test]
    fn directions_are_unit_length() {
        let terrain = TerrainParams::default();
        for (u, v) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.3, 0.8)] {
            let ray = build_ray(vec2(u, v), &uniforms(), &terrain);
            assert!((ray.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn vertical_axis_is_flipped() {
        let terrain = TerrainParams::default();
        // v = 0 is the top of the screen, so that ray must tilt upward.
        let top = build_ray(vec2(0.5, 0.0), &uniforms(), &terrain);
        let bottom = build_ray(vec2(0.5, 1.0), &uniforms(), &terrain);
        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);
    }

    #[test]
    fn horizontal_axis_follows_aspect_ratio() {
        let terrain = TerrainParams::default();
        let wide = build_ray(vec2(1.0, 0.5), &uniforms(), &terrain);
        let square = build_ray(
            vec2(1.0, 0.5),
            &FrameUniforms::new(0.0, 1080.0, 1080.0),
            &terrain,
        );
        // right is -Z for this camera, so a wider frame pushes further along -Z
        assert!(wide.direction.z < square.direction.z);
    }
}
