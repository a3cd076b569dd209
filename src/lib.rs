//! Ricochet - a small 2D physics demo
//!
//! A ball drops onto a slanted line and a convex quad and bounces around.
//! Clicking anywhere kicks the ball up and to the left. Physics lives in
//! `ricochet_physics`, drawing in `ricochet_render`; this crate wires them
//! into a windowed application.

pub mod config;
pub mod input;
pub mod scene;
pub mod simulation;
