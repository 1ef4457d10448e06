//! Windowed driver for the terrain evaluator.
//!
//! Everything here is swapchain plumbing: a winit window, a wgpu surface, one
//! fullscreen-quad pipeline and one uniform buffer carrying
//! [`terrain::FrameUniforms`]. The evaluator itself runs in
//! `src/terrain.wgsl`, the GPU port of the terrain crate.

pub mod pipeline;
pub mod run;
pub mod state;

pub use run::run;
