//! Collision shapes for 2D physics
//!
//! Lightweight primitives used for collision detection. The dynamic ball is
//! a [`Circle`]; static geometry is a [`Segment`] or a [`ConvexPolygon`],
//! wrapped in [`StaticShape`] together with its surface properties.

use crate::material::SurfaceProperties;
use ricochet_math::Vec2;

/// A circle defined by center and radius
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Create a new circle at the given center with the given radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if a point is inside or on the circle
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

/// A line segment between two endpoints, with an optional thickness radius
///
/// A zero radius models an infinitely thin wall; a positive radius gives the
/// segment a capsule-like cross section.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub radius: f32,
}

impl Segment {
    /// Create a new segment between two endpoints
    pub fn new(a: Vec2, b: Vec2, radius: f32) -> Self {
        Self { a, b, radius }
    }

    /// Closest point on the segment to the given point
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let ab = self.b - self.a;
        let len_sq = ab.length_squared();
        if len_sq <= f32::EPSILON {
            // Degenerate segment
            return self.a;
        }
        let t = ((point - self.a).dot(ab) / len_sq).clamp(0.0, 1.0);
        self.a + ab * t
    }
}

/// A convex polygon defined by its vertices in order
///
/// Either winding is accepted; queries work off the boundary rather than
/// assuming an edge normal direction.
#[derive(Clone, Debug)]
pub struct ConvexPolygon {
    verts: Vec<Vec2>,
}

impl ConvexPolygon {
    /// Create a polygon from its vertices
    ///
    /// Requires at least 3 vertices; the polygon must be convex for
    /// containment tests to be meaningful.
    pub fn new(verts: Vec<Vec2>) -> Self {
        assert!(verts.len() >= 3, "polygon needs at least 3 vertices");
        Self { verts }
    }

    /// The polygon's vertices
    pub fn verts(&self) -> &[Vec2] {
        &self.verts
    }

    /// Edges as (start, end) pairs
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| (self.verts[i], self.verts[(i + 1) % n]))
    }

    /// Check if a point is inside the polygon (works for either winding)
    pub fn contains(&self, point: Vec2) -> bool {
        let mut sign = 0.0f32;
        for (a, b) in self.edges() {
            let cross = (b - a).cross(point - a);
            if cross.abs() <= f32::EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Closest point on the polygon boundary to the given point
    pub fn closest_boundary_point(&self, point: Vec2) -> Vec2 {
        let mut best = self.verts[0];
        let mut best_dist_sq = f32::MAX;
        for (a, b) in self.edges() {
            let candidate = Segment::new(a, b, 0.0).closest_point(point);
            let dist_sq = (point - candidate).length_squared();
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best = candidate;
            }
        }
        best
    }
}

/// Static geometry: an immovable shape with surface properties
///
/// Never mutated after being added to the world.
#[derive(Clone, Debug)]
pub enum StaticShape {
    Segment { segment: Segment, surface: SurfaceProperties },
    Polygon { polygon: ConvexPolygon, surface: SurfaceProperties },
}

impl StaticShape {
    /// The shape's surface properties
    pub fn surface(&self) -> &SurfaceProperties {
        match self {
            StaticShape::Segment { surface, .. } => surface,
            StaticShape::Polygon { surface, .. } => surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_contains() {
        let circle = Circle::new(Vec2::ZERO, 1.0);
        assert!(circle.contains(Vec2::ZERO));
        assert!(circle.contains(Vec2::new(1.0, 0.0))); // on boundary
        assert!(!circle.contains(Vec2::new(1.1, 0.0)));
    }

    #[test]
    fn test_segment_closest_point_interior() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 0.0);
        let closest = seg.closest_point(Vec2::new(5.0, 3.0));
        assert_eq!(closest, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_segment_closest_point_clamps_to_endpoints() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 0.0);
        assert_eq!(seg.closest_point(Vec2::new(-5.0, 1.0)), Vec2::new(0.0, 0.0));
        assert_eq!(seg.closest_point(Vec2::new(15.0, 1.0)), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_segment_degenerate() {
        let seg = Segment::new(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0), 0.0);
        assert_eq!(seg.closest_point(Vec2::new(5.0, 5.0)), Vec2::new(2.0, 2.0));
    }

    fn unit_square() -> ConvexPolygon {
        ConvexPolygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_polygon_contains() {
        let square = unit_square();
        assert!(square.contains(Vec2::new(0.5, 0.5)));
        assert!(!square.contains(Vec2::new(1.5, 0.5)));
        assert!(!square.contains(Vec2::new(-0.1, 0.5)));
    }

    #[test]
    fn test_polygon_contains_either_winding() {
        let reversed = ConvexPolygon::new(vec![
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
        ]);
        assert!(reversed.contains(Vec2::new(0.5, 0.5)));
        assert!(!reversed.contains(Vec2::new(2.0, 0.5)));
    }

    #[test]
    fn test_polygon_closest_boundary_point_outside() {
        let square = unit_square();
        let closest = square.closest_boundary_point(Vec2::new(0.5, -1.0));
        assert_eq!(closest, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_polygon_closest_boundary_point_inside() {
        let square = unit_square();
        // Center is closest to... any edge midpoint at distance 0.5
        let closest = square.closest_boundary_point(Vec2::new(0.5, 0.1));
        assert_eq!(closest, Vec2::new(0.5, 0.0));
    }

    #[test]
    #[should_panic]
    fn test_polygon_too_few_vertices() {
        ConvexPolygon::new(vec![Vec2::ZERO, Vec2::X]);
    }

    #[test]
    fn test_static_shape_surface() {
        let surface = SurfaceProperties::new(1.0, 0.5);
        let shape = StaticShape::Segment {
            segment: Segment::new(Vec2::ZERO, Vec2::X, 0.0),
            surface,
        };
        assert_eq!(*shape.surface(), surface);
    }
}
