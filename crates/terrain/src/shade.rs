//! Lighting, fog and sky.
//!
//! A miss shades as flat sky. A hit picks its surface (water near the clamp
//! plane, rock everywhere else), lights it with Blinn-Phong against the fixed
//! directional light, optionally attenuates by a binary shadow ray, and
//! finally blends toward the fog color by an exponential height fog factor.

use glam::Vec3;

use crate::camera::Ray;
use crate::march::{cast_ray, Hit};
use crate::params::{SceneParams, ShadeParams, TerrainParams};

/// Offset of the shadow-ray origin above the surface, avoids
/// self-intersection on the first sample.
const SHADOW_LIFT: f32 = 1e-3;

/// Below this the fog integral degenerates to 0/0 and the analytic limit for
/// a level ray is used instead.
const LEVEL_RAY_EPS: f32 = 1e-4;

/// Albedo and specular exponent for a surface at the given height.
#[must_use]
pub fn surface_material(height: f32, shade: &ShadeParams, terrain: &TerrainParams) -> (Vec3, f32) {
    if height - terrain.water_height < shade.water_band {
        (shade.water_color, shade.water_specular)
    } else {
        (shade.rock_color, shade.rock_specular)
    }
}

/// Blinn-Phong lighting with a constant ambient floor.
///
/// `view_dir` is the ray direction (pointing at the surface); `to_light`
/// points from the surface toward the light, unit length.
#[must_use]
pub fn blinn_phong(
    view_dir: Vec3,
    albedo: Vec3,
    normal: Vec3,
    specular_exponent: f32,
    to_light: Vec3,
    light_color: Vec3,
    ambient: f32,
) -> Vec3 {
    let diffuse = normal.dot(to_light).max(0.0);
    let half_dir = (to_light - view_dir)
        .try_normalize()
        .unwrap_or(normal);
    let specular = normal.dot(half_dir).max(0.0).powf(specular_exponent);
    albedo * light_color * (ambient + diffuse) + light_color * specular
}

/// Exponential height fog blend factor, always in `[0, 1]`.
///
/// Closed-form integral of an exponentially falling density along the view
/// ray; `dir_y` near zero takes the analytic limit for a level ray.
#[must_use]
pub fn fog_factor(origin_y: f32, dir_y: f32, distance: f32, shade: &ShadeParams) -> f32 {
    let density = shade.fog_density;
    let falloff = shade.fog_falloff;
    let amount = if dir_y.abs() < LEVEL_RAY_EPS {
        density * distance * (-origin_y * falloff).exp()
    } else {
        (density / falloff) * (-origin_y * falloff).exp()
            * (1.0 - (-distance * dir_y * falloff).exp())
            / dir_y
    };
    // 0 * inf shows up when the ray is far above the fog and the distance
    // overflows the exponential; the limit there is no fog at all.
    if amount.is_nan() {
        0.0
    } else {
        amount.clamp(0.0, 1.0)
    }
}

/// Final color for a ray and its intersection result.
pub fn shade(ray: &Ray, hit: Option<&Hit>, scene: &SceneParams) -> Vec3 {
    let Some(hit) = hit else {
        return scene.shade.sky_color;
    };

    let surface = ray.origin + ray.direction * hit.distance;
    let (albedo, specular_exponent) =
        surface_material(surface.y, &scene.shade, &scene.terrain);

    let to_light = -scene.shade.light_dir;
    let occlusion = if scene.shade.shadows {
        let shadow_ray = Ray {
            origin: surface + Vec3::new(0.0, SHADOW_LIFT, 0.0),
            direction: to_light,
        };
        if cast_ray(&shadow_ray, &scene.terrain, &scene.shadow_march()).is_some() {
            0.0
        } else {
            1.0
        }
    } else {
        1.0
    };

    let lit = occlusion
        * blinn_phong(
            ray.direction,
            albedo,
            hit.normal,
            specular_exponent,
            to_light,
            scene.shade.light_color,
            scene.shade.ambient,
        );

    let fog = fog_factor(ray.origin.y, ray.direction.y, hit.distance, &scene.shade);
    lit.lerp(scene.shade.fog_color, fog)
}
