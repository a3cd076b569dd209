//! Physics world and simulation

use crate::body::{BodyKey, RigidBody};
use crate::collision::{circle_vs_polygon, circle_vs_segment, Contact};
use crate::shapes::{Circle, ConvexPolygon, Segment, StaticShape};
use crate::material::SurfaceProperties;
use ricochet_math::Vec2;
use slotmap::SlotMap;

/// The physics world containing all rigid bodies and static geometry
///
/// One world owns everything that is simulated together: the gravity vector,
/// the dynamic bodies, and the immovable shapes they collide with. The demo
/// creates exactly one for the process lifetime.
pub struct World {
    /// Constant acceleration applied to every body (positive y = down)
    gravity: Vec2,
    /// All dynamic bodies (generational keys)
    bodies: SlotMap<BodyKey, RigidBody>,
    /// Immovable collision shapes; never mutated after creation
    static_shapes: Vec<StaticShape>,
}

impl World {
    /// Create a new world with the given gravity
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            bodies: SlotMap::with_key(),
            static_shapes: Vec::new(),
        }
    }

    /// The world's gravity vector
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Add an immovable line segment
    pub fn add_static_segment(&mut self, a: Vec2, b: Vec2, surface: SurfaceProperties) {
        self.static_shapes.push(StaticShape::Segment {
            segment: Segment::new(a, b, 0.0),
            surface,
        });
    }

    /// Add an immovable convex polygon
    pub fn add_static_polygon(&mut self, verts: Vec<Vec2>, surface: SurfaceProperties) {
        self.static_shapes.push(StaticShape::Polygon {
            polygon: ConvexPolygon::new(verts),
            surface,
        });
    }

    /// Get immutable access to the static shapes
    pub fn static_shapes(&self) -> &[StaticShape] {
        &self.static_shapes
    }

    /// Add a body to the world and return its key
    pub fn add_body(&mut self, body: RigidBody) -> BodyKey {
        self.bodies.insert(body)
    }

    /// Remove a body from the world and return it
    pub fn remove_body(&mut self, key: BodyKey) -> Option<RigidBody> {
        self.bodies.remove(key)
    }

    /// Get an immutable reference to a body by key
    pub fn body(&self, key: BodyKey) -> Option<&RigidBody> {
        self.bodies.get(key)
    }

    /// Get a mutable reference to a body by key
    pub fn body_mut(&mut self, key: BodyKey) -> Option<&mut RigidBody> {
        self.bodies.get_mut(key)
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Step the simulation forward by exactly `dt` seconds
    ///
    /// This performs:
    /// 1. Gravity application and semi-implicit Euler integration
    /// 2. Collision detection and resolution against static shapes
    ///
    /// The caller's cadence is trusted; there is no internal sub-stepping.
    pub fn step(&mut self, dt: f32) {
        // Phase 1: integrate velocities and positions
        for (_key, body) in &mut self.bodies {
            body.velocity += self.gravity * dt;
            body.position += body.velocity * dt;
            body.angle += body.angular_velocity * dt;
        }

        // Phase 2: resolve contacts with static geometry
        self.resolve_static_collisions();
    }

    fn check_static_collision(circle: &Circle, shape: &StaticShape) -> Option<Contact> {
        match shape {
            StaticShape::Segment { segment, .. } => circle_vs_segment(circle, segment),
            StaticShape::Polygon { polygon, .. } => circle_vs_polygon(circle, polygon),
        }
    }

    fn resolve_static_collisions(&mut self) {
        for (_key, body) in &mut self.bodies {
            for shape in &self.static_shapes {
                let circle = Circle::new(body.position, body.radius);
                let contact = match Self::check_static_collision(&circle, shape) {
                    Some(c) if c.is_colliding() => c,
                    _ => continue,
                };

                // Push the body out of the shape
                body.position += contact.normal * contact.penetration;

                let combined = body.surface.combine(shape.surface());

                // Velocity response only when moving into the surface
                let velocity_along_normal = body.velocity.dot(contact.normal);
                if velocity_along_normal < 0.0 {
                    // Reflect the normal component, scaled by elasticity
                    let normal_velocity = contact.normal * velocity_along_normal;
                    body.velocity -= normal_velocity * (1.0 + combined.elasticity);

                    // Friction damps the tangential component
                    let tangent_velocity =
                        body.velocity - contact.normal * body.velocity.dot(contact.normal);
                    let tangent_speed = tangent_velocity.length();
                    if tangent_speed > 0.0001 {
                        let friction_factor = 1.0 - combined.friction;
                        body.velocity = contact.normal * body.velocity.dot(contact.normal)
                            + tangent_velocity * friction_factor;
                    }
                }
            }
        }
    }
}
