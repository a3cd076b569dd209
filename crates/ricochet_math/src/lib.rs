//! 2D Mathematics Library
//!
//! This crate provides the 2D vector type shared by the Ricochet physics and
//! rendering crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//!
//! Ricochet works in screen coordinates: the origin is the top-left corner of
//! the window and +y points down. Gravity is therefore a positive-y vector.

mod vec2;

pub use vec2::Vec2;
