//! Collision detection between the dynamic circle and static geometry

use crate::shapes::{Circle, ConvexPolygon, Segment};
use ricochet_math::Vec2;

/// Contact information from a collision
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// Point of contact on the static shape's surface
    pub point: Vec2,
    /// Normal pointing from the static shape toward the circle
    pub normal: Vec2,
    /// Penetration depth (positive means overlapping)
    pub penetration: f32,
}

impl Contact {
    /// Create a new contact
    pub fn new(point: Vec2, normal: Vec2, penetration: f32) -> Self {
        Self {
            point,
            normal,
            penetration,
        }
    }

    /// Check if this represents an actual collision (positive penetration)
    pub fn is_colliding(&self) -> bool {
        self.penetration > 0.0
    }
}

/// Test circle vs segment collision
///
/// The contact normal points from the segment toward the circle center, so
/// the same segment can be hit from either side.
pub fn circle_vs_segment(circle: &Circle, segment: &Segment) -> Option<Contact> {
    let closest = segment.closest_point(circle.center);
    let delta = circle.center - closest;
    let dist_sq = delta.length_squared();
    let min_dist = circle.radius + segment.radius;

    if dist_sq >= min_dist * min_dist {
        return None;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > 0.0001 {
        delta.normalized()
    } else {
        // Center exactly on the segment; push out perpendicular to it
        (segment.b - segment.a).normalized().perp()
    };

    let penetration = min_dist - dist;
    let point = closest + normal * segment.radius;
    Some(Contact::new(point, normal, penetration))
}

/// Test circle vs convex polygon collision
///
/// Works off the polygon boundary: if the center is outside, the normal runs
/// from the closest boundary point toward the center; if the center is
/// inside, the normal pushes it out through the nearest edge.
pub fn circle_vs_polygon(circle: &Circle, polygon: &ConvexPolygon) -> Option<Contact> {
    let closest = polygon.closest_boundary_point(circle.center);
    let delta = circle.center - closest;
    let dist = delta.length();

    if polygon.contains(circle.center) {
        // Center inside: escape through the nearest boundary point
        let normal = if dist > 0.0001 {
            (closest - circle.center).normalized()
        } else {
            Vec2::new(0.0, -1.0)
        };
        return Some(Contact::new(closest, normal, circle.radius + dist));
    }

    if dist >= circle.radius {
        return None;
    }

    let normal = if dist > 0.0001 {
        delta.normalized()
    } else {
        Vec2::new(0.0, -1.0)
    };
    Some(Contact::new(closest, normal, circle.radius - dist))
}
