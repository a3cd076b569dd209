//! SceneBuilder - fluent construction of a physics scene

use ricochet_math::Vec2;
use ricochet_physics::{BodyKey, RigidBody, SurfaceProperties, World};

/// A built scene: the world plus the key of the one dynamic ball
pub struct Scene {
    pub world: World,
    pub ball: BodyKey,
}

/// Builder for scenes with static geometry and a single dynamic ball
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new(Vec2::new(0.0, 300.0))
///     .add_static_segment(Vec2::new(0.0, 300.0), Vec2::new(400.0, 350.0), surface)
///     .with_ball(Vec2::new(50.0, 15.0), 1.0, 10.0, ball_surface)
///     .build();
/// ```
pub struct SceneBuilder {
    world: World,
    ball: Option<BodyKey>,
}

impl SceneBuilder {
    /// Create a builder for a world with the given gravity
    pub fn new(gravity: Vec2) -> Self {
        Self {
            world: World::new(gravity),
            ball: None,
        }
    }

    /// Add an immovable line segment
    pub fn add_static_segment(mut self, a: Vec2, b: Vec2, surface: SurfaceProperties) -> Self {
        self.world.add_static_segment(a, b, surface);
        self
    }

    /// Add an immovable convex polygon
    pub fn add_static_polygon(mut self, verts: Vec<Vec2>, surface: SurfaceProperties) -> Self {
        self.world.add_static_polygon(verts, surface);
        self
    }

    /// Add the dynamic ball (replaces any previously added ball)
    pub fn with_ball(
        mut self,
        position: Vec2,
        mass: f32,
        radius: f32,
        surface: SurfaceProperties,
    ) -> Self {
        if let Some(old) = self.ball.take() {
            self.world.remove_body(old);
        }
        let body = RigidBody::circle(position, mass, radius).with_surface(surface);
        self.ball = Some(self.world.add_body(body));
        self
    }

    /// Finish the scene
    ///
    /// # Panics
    /// Panics if no ball was added; the demo has no meaning without one.
    pub fn build(self) -> Scene {
        let ball = self.ball.expect("scene needs a ball: call with_ball()");
        Scene {
            world: self.world,
            ball,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{demo_scene, BALL_RADIUS, BALL_START};

    #[test]
    fn test_builder_creates_ball() {
        let scene = SceneBuilder::new(Vec2::new(0.0, 300.0))
            .with_ball(Vec2::new(50.0, 15.0), 1.0, 10.0, SurfaceProperties::default())
            .build();

        let ball = scene.world.body(scene.ball).expect("ball should exist");
        assert_eq!(ball.position, Vec2::new(50.0, 15.0));
        assert_eq!(ball.mass, 1.0);
        assert_eq!(ball.radius, 10.0);
    }

    #[test]
    fn test_with_ball_replaces_previous() {
        let scene = SceneBuilder::new(Vec2::ZERO)
            .with_ball(Vec2::ZERO, 1.0, 5.0, SurfaceProperties::default())
            .with_ball(Vec2::new(9.0, 9.0), 2.0, 6.0, SurfaceProperties::default())
            .build();

        assert_eq!(scene.world.body_count(), 1);
        assert_eq!(scene.world.body(scene.ball).unwrap().position, Vec2::new(9.0, 9.0));
    }

    #[test]
    #[should_panic]
    fn test_build_without_ball_panics() {
        SceneBuilder::new(Vec2::ZERO).build();
    }

    #[test]
    fn test_demo_scene_layout() {
        let scene = demo_scene(Vec2::new(0.0, 300.0));

        assert_eq!(scene.world.static_shapes().len(), 2);
        assert_eq!(scene.world.body_count(), 1);

        let ball = scene.world.body(scene.ball).unwrap();
        assert_eq!(ball.position, BALL_START);
        assert_eq!(ball.radius, BALL_RADIUS);
        assert_eq!(ball.velocity, Vec2::ZERO);
        // Moment for a solid disc: 1 * 10^2 / 2
        assert_eq!(ball.moment, 50.0);
        assert_eq!(ball.surface.friction, 0.7);
        assert_eq!(ball.surface.elasticity, 1.0);
    }

    #[test]
    fn test_demo_scene_static_surfaces() {
        let scene = demo_scene(Vec2::new(0.0, 300.0));
        for shape in scene.world.static_shapes() {
            assert_eq!(shape.surface().friction, 1.0);
            assert_eq!(shape.surface().elasticity, 0.5);
        }
    }
}
