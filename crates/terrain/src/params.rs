//! Configuration records for the evaluator.
//!
//! Every tuning literal of the pipeline lives here as a named field with a
//! `Default` impl carrying the reference values, so tests can perturb one
//! knob at a time instead of fighting inline constants.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Per-frame inputs delivered by the driver before the evaluation pass.
///
/// Written once per frame, read-only to every pixel invocation. The layout
/// is shared with the GPU uniform buffer, hence `repr(C)` and the explicit
/// padding to a 16-byte stride.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Seconds elapsed since startup.
    pub time: f32,
    /// Output width in pixels.
    pub render_width: f32,
    /// Output height in pixels.
    pub render_height: f32,
    pub _pad: f32,
}

impl FrameUniforms {
    #[must_use]
    pub const fn new(time: f32, render_width: f32, render_height: f32) -> Self {
        Self {
            time,
            render_width,
            render_height,
            _pad: 0.0,
        }
    }
}

/// Fractal heightfield shape.
#[derive(Clone, Copy, Debug)]
pub struct TerrainParams {
    /// Number of noise octaves accumulated.
    pub octaves: u32,
    /// Hurst exponent; per-octave gain is `2^-hurst`.
    pub hurst: f32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f32,
    /// World units to noise-lattice units.
    pub scale: f32,
    /// Vertical scale applied to the accumulated noise.
    pub height: f32,
    /// Heights below this are clamped to a flat water plane.
    pub water_height: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            octaves: 10,
            hurst: 1.0,
            lacunarity: 2.0,
            scale: 0.002,
            height: 190.0,
            water_height: -10.5,
        }
    }
}

impl TerrainParams {
    /// Per-octave amplitude multiplier derived from the Hurst exponent.
    #[must_use]
    pub fn gain(&self) -> f32 {
        2.0_f32.powf(-self.hurst)
    }
}

/// Iteration and step budget for one raymarch.
#[derive(Clone, Copy, Debug)]
pub struct MarchParams {
    /// Hard cap on stepping iterations.
    pub max_iterations: u32,
    /// March distance beyond which the ray counts as a miss.
    pub max_distance: f32,
    /// Vertical gap below which the sample counts as an intersection.
    pub hit_threshold: f32,
    /// Fraction of the vertical gap advanced per step.
    pub step_scale: f32,
    /// Keeps the slope damping term away from zero on vertical faces.
    pub slope_bias: f32,
}

impl Default for MarchParams {
    /// Primary-ray budget.
    fn default() -> Self {
        Self {
            max_iterations: 150,
            max_distance: 2000.0,
            hit_threshold: 0.05,
            step_scale: 0.6,
            slope_bias: 0.001,
        }
    }
}

impl MarchParams {
    /// Reduced budget for shadow rays toward the light.
    #[must_use]
    pub fn shadow() -> Self {
        Self {
            max_iterations: 64,
            max_distance: 400.0,
            ..Self::default()
        }
    }
}

/// Lighting, fog and surface palette.
#[derive(Clone, Copy, Debug)]
pub struct ShadeParams {
    pub sky_color: Vec3,
    pub fog_color: Vec3,
    /// Direction the light travels (pointing down at the terrain), unit length.
    pub light_dir: Vec3,
    pub light_color: Vec3,
    pub rock_color: Vec3,
    pub rock_specular: f32,
    pub water_color: Vec3,
    pub water_specular: f32,
    /// Surfaces within this distance of the water height shade as water.
    pub water_band: f32,
    /// Fog extinction coefficient.
    pub fog_density: f32,
    /// Fog altitude falloff coefficient.
    pub fog_falloff: f32,
    /// Constant lighting floor so unlit faces stay visible.
    pub ambient: f32,
    /// Cast a shadow ray per hit and zero the direct light when it is
    /// occluded. Off by default.
    pub shadows: bool,
}

impl Default for ShadeParams {
    fn default() -> Self {
        Self {
            sky_color: Vec3::new(0.4, 0.4, 0.8),
            fog_color: Vec3::new(0.4, 0.4, 0.7),
            light_dir: Vec3::new(0.5, -1.0, 0.0).normalize(),
            light_color: Vec3::new(0.7, 0.7, 1.0),
            rock_color: Vec3::new(0.9, 0.7, 0.73),
            rock_specular: 32.0,
            water_color: Vec3::new(0.1, 0.5, 0.8),
            water_specular: 2.0,
            water_band: 0.05,
            fog_density: 0.005,
            fog_falloff: 0.09,
            ambient: 0.1,
            shadows: false,
        }
    }
}

/// Everything one pixel invocation needs besides the frame uniforms.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneParams {
    pub terrain: TerrainParams,
    pub march: MarchParams,
    pub shade: ShadeParams,
}

impl SceneParams {
    /// Budget used for shadow rays when [`ShadeParams::shadows`] is on.
    #[must_use]
    pub fn shadow_march(&self) -> MarchParams {
        MarchParams::shadow()
    }
}
