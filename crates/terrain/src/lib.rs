#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
//! # Relief terrain evaluator
//!
//! The core of the relief renderer: a pure, per-pixel evaluator that turns a
//! normalized screen coordinate plus a per-frame uniform record into a final
//! color by raymarching a procedural heightfield.
//!
//! ## Key Components
//!
//! -   **Noise:** [`noise`] provides a hash-based value noise with an analytic
//!     gradient, the only source of randomness in the system. It is a pure
//!     function of its input point.
//! -   **Heightfield:** [`heightfield`] accumulates noise octaves into a
//!     fractal terrain height and surface normal, clamped to a flat water
//!     plane below [`TerrainParams::water_height`].
//! -   **Intersector:** [`march`] steps a ray through the heightfield with an
//!     adaptive, slope-damped step size and a fixed iteration budget.
//! -   **Camera:** [`camera`] builds the primary ray for a screen coordinate.
//! -   **Shading:** [`shade`] lights an intersection with Blinn-Phong,
//!     optional shadow occlusion and exponential height fog.
//! -   **Framebuffer:** [`framebuffer`] runs the whole pipeline over a pixel
//!     grid as a parallel map, one independent invocation per pixel.
//!
//! Every stage is stateless: nothing is cached between pixels or frames, so
//! the evaluator can run on any number of threads (or as the WGSL port in the
//! render crate) without synchronization.
//!
//! ## Usage
//!
//! ```rust
//! use glam::vec2;
//! use terrain::{FrameUniforms, SceneParams};
//!
//! let uniforms = FrameUniforms::new(0.0, 1920.0, 1080.0);
//! let scene = SceneParams::default();
//! let color = terrain::shade_pixel(vec2(0.5, 0.75), &uniforms, &scene);
//! assert!(color.min_element() >= 0.0);
//! ```

pub mod camera;
pub mod framebuffer;
pub mod heightfield;
pub mod march;
pub mod noise;
pub mod params;
pub mod shade;

pub use camera::{build_ray, Ray};
pub use framebuffer::{render_frame, shade_pixel};
pub use heightfield::{sample_terrain, TerrainSample};
pub use march::{cast_ray, Hit};
pub use params::{FrameUniforms, MarchParams, SceneParams, ShadeParams, TerrainParams};
pub use shade::shade;
