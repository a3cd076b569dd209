//! 2D Rendering Library
//!
//! This crate provides the wgpu-based rendering layer for the Ricochet demo:
//! flat-colored 2D primitives drawn in pixel coordinates.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ShapePipeline`] - Render pipeline for colored triangles
//! - [`canvas::Canvas`] - Immediate-mode tessellation of quads, lines, and
//!   filled circles into a triangle list
//!
//! A frame is produced by clearing a [`Canvas`], recording draw calls into
//! it, and handing it to [`pipeline::ShapePipeline::draw`].

pub mod canvas;
pub mod context;
pub mod pipeline;

pub use canvas::{Canvas, Color, Vertex2D};
pub use context::RenderContext;
pub use pipeline::ShapePipeline;
