//! Rigid body types for 2D simulation

use crate::material::SurfaceProperties;
use ricochet_math::Vec2;
use slotmap::new_key_type;

// Define generational key type for rigid bodies
new_key_type! {
    /// Key to a rigid body in the physics world
    ///
    /// Uses generational indexing so a stale key returns None instead of
    /// pointing at a reused slot.
    pub struct BodyKey;
}

/// Moment of inertia for a circle (hoop when `inner > 0`, solid disc when 0)
///
/// The rotational analogue of mass: m * (r_inner^2 + r_outer^2) / 2.
pub fn moment_for_circle(mass: f32, inner: f32, outer: f32) -> f32 {
    mass * (inner * inner + outer * outer) * 0.5
}

/// A dynamic circular rigid body
#[derive(Clone, Debug)]
pub struct RigidBody {
    /// Position in world coordinates (circle center)
    pub position: Vec2,
    /// Velocity in units per second
    pub velocity: Vec2,
    /// Rotation angle in radians
    pub angle: f32,
    /// Angular velocity in radians per second
    pub angular_velocity: f32,
    /// Mass of the body
    pub mass: f32,
    /// Moment of inertia
    pub moment: f32,
    /// Collision circle radius
    pub radius: f32,
    /// Surface properties of the attached circle shape
    pub surface: SurfaceProperties,
}

impl RigidBody {
    /// Create a circular body with a moment for a solid disc
    pub fn circle(position: Vec2, mass: f32, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            mass,
            moment: moment_for_circle(mass, 0.0, radius),
            radius,
            surface: SurfaceProperties::default(),
        }
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the surface properties of the collision shape
    pub fn with_surface(mut self, surface: SurfaceProperties) -> Self {
        self.surface = surface;
        self
    }

    /// Override the moment of inertia
    pub fn with_moment(mut self, moment: f32) -> Self {
        self.moment = moment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moment_for_solid_disc() {
        // m=1, r=10 -> 1 * (0 + 100) / 2 = 50
        assert_eq!(moment_for_circle(1.0, 0.0, 10.0), 50.0);
    }

    #[test]
    fn test_moment_for_hoop() {
        // All mass at radius r: m * r^2
        assert_eq!(moment_for_circle(2.0, 3.0, 3.0), 18.0);
    }

    #[test]
    fn test_circle_body_defaults() {
        let pos = Vec2::new(50.0, 15.0);
        let body = RigidBody::circle(pos, 1.0, 10.0);

        assert_eq!(body.position, pos);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.mass, 1.0);
        assert_eq!(body.radius, 10.0);
        assert_eq!(body.moment, 50.0);
        assert_eq!(body.angle, 0.0);
        assert_eq!(body.angular_velocity, 0.0);
    }

    #[test]
    fn test_builder_methods() {
        let body = RigidBody::circle(Vec2::ZERO, 1.0, 5.0)
            .with_velocity(Vec2::new(3.0, -2.0))
            .with_surface(SurfaceProperties::new(0.7, 1.0))
            .with_moment(12.0);

        assert_eq!(body.velocity, Vec2::new(3.0, -2.0));
        assert_eq!(body.surface.friction, 0.7);
        assert_eq!(body.surface.elasticity, 1.0);
        assert_eq!(body.moment, 12.0);
    }
}
