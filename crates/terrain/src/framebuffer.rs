//! Headless CPU driver: the full pipeline as a parallel map over pixels.
//!
//! Each pixel is an independent pure invocation of camera, march and shading,
//! so rows split across the rayon pool with no shared mutable state. Output
//! matches the GPU path up to floating-point noise.

use glam::{vec2, Vec2, Vec3};
use rayon::prelude::*;

use crate::camera::build_ray;
use crate::march::cast_ray;
use crate::params::{FrameUniforms, SceneParams};
use crate::shade::shade;

/// Evaluates one pixel: ray, intersection, color.
#[must_use]
pub fn shade_pixel(uv: Vec2, uniforms: &FrameUniforms, scene: &SceneParams) -> Vec3 {
    let ray = build_ray(uv, uniforms, &scene.terrain);
    let hit = cast_ray(&ray, &scene.terrain, &scene.march);
    shade(&ray, hit.as_ref(), scene)
}

/// Renders a full frame to a tightly packed RGBA8 buffer, row-major from the
/// top-left, alpha fixed at 255.
#[must_use]
pub fn render_frame(uniforms: &FrameUniforms, scene: &SceneParams) -> Vec<u8> {
    let width = uniforms.render_width as usize;
    let height = uniforms.render_height as usize;
    let mut pixels = vec![0_u8; width * height * 4];

    pixels
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let uv = vec2(
                    (x as f32 + 0.5) / uniforms.render_width,
                    (y as f32 + 0.5) / uniforms.render_height,
                );
                let color = shade_pixel(uv, uniforms, scene);
                let texel = &mut row[x * 4..x * 4 + 4];
                texel[0] = to_channel(color.x);
                texel[1] = to_channel(color.y);
                texel[2] = to_channel(color.z);
                texel[3] = 255;
            }
        });

    pixels
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
