//! 2D rigid body simulation for Ricochet
//!
//! This crate provides the dynamics side of the demo:
//! - Collision shapes (circles, segments, convex polygons)
//! - Collision detection between a circle body and static geometry
//! - Rigid body integration with gravity
//!
//! Coordinates are screen-space: +y is down, so gravity is a positive-y
//! vector.

pub mod body;
pub mod collision;
pub mod material;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{moment_for_circle, BodyKey, RigidBody};
pub use collision::{circle_vs_polygon, circle_vs_segment, Contact};
pub use material::SurfaceProperties;
pub use shapes::{Circle, ConvexPolygon, Segment, StaticShape};
pub use world::World;
