//! Scene construction
//!
//! Provides the builder for physics scenes and the compiled-in demo scene:
//! a ball dropped onto a slanted line with a convex quad further down.

mod scene_builder;

pub use scene_builder::{Scene, SceneBuilder};

use ricochet_math::Vec2;
use ricochet_physics::SurfaceProperties;

// The demo scene's geometry, as pixel coordinates in an 800x600 window.

/// Static line the ball lands on and rolls off
pub const LINE_A: Vec2 = Vec2::new(0.0, 300.0);
pub const LINE_B: Vec2 = Vec2::new(400.0, 350.0);

/// Static convex quad below and to the right of the line
pub const QUAD_VERTS: [Vec2; 4] = [
    Vec2::new(437.0, 430.0),
    Vec2::new(493.0, 406.0),
    Vec2::new(687.0, 444.0),
    Vec2::new(462.0, 560.0),
];

/// Ball parameters
pub const BALL_START: Vec2 = Vec2::new(50.0, 15.0);
pub const BALL_MASS: f32 = 1.0;
pub const BALL_RADIUS: f32 = 10.0;

const STATIC_SURFACE: SurfaceProperties = SurfaceProperties {
    friction: 1.0,
    elasticity: 0.5,
};

const BALL_SURFACE: SurfaceProperties = SurfaceProperties {
    friction: 0.7,
    elasticity: 1.0,
};

/// Build the demo scene with the given gravity
pub fn demo_scene(gravity: Vec2) -> Scene {
    SceneBuilder::new(gravity)
        .add_static_segment(LINE_A, LINE_B, STATIC_SURFACE)
        .add_static_polygon(QUAD_VERTS.to_vec(), STATIC_SURFACE)
        .with_ball(BALL_START, BALL_MASS, BALL_RADIUS, BALL_SURFACE)
        .build()
}
