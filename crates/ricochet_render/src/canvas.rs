//! Immediate-mode tessellation of 2D primitives
//!
//! A [`Canvas`] collects a frame's worth of draw calls as a flat triangle
//! list in pixel coordinates. It is cleared and rebuilt every frame; the
//! pipeline uploads the result in one go.

use bytemuck::{Pod, Zeroable};
use ricochet_math::Vec2;

/// RGBA color with premultiplied-nothing straight alpha
pub type Color = [f32; 4];

/// A vertex in pixel coordinates with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in pixels (origin top-left, +y down)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Create a new vertex
    pub fn new(position: Vec2, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// CPU-side triangle list built once per frame
///
/// Drawing methods only append vertices; the canvas never touches the GPU or
/// any simulation state, so identical call sequences produce identical
/// buffers.
#[derive(Default)]
pub struct Canvas {
    vertices: Vec<Vertex2D>,
}

impl Canvas {
    /// Create an empty canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all recorded vertices, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// The recorded triangle list (length is a multiple of 3)
    pub fn vertices(&self) -> &[Vertex2D] {
        &self.vertices
    }

    /// Number of recorded vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn push_triangle(&mut self, a: Vertex2D, b: Vertex2D, c: Vertex2D) {
        self.vertices.push(a);
        self.vertices.push(b);
        self.vertices.push(c);
    }

    /// Fill a quadrilateral with per-vertex colors
    ///
    /// Vertices are given in order around the quad; it is split along the
    /// v0-v2 diagonal.
    pub fn fill_quad(&mut self, corners: [Vec2; 4], colors: [Color; 4]) {
        let v: Vec<Vertex2D> = corners
            .iter()
            .zip(colors.iter())
            .map(|(&p, &c)| Vertex2D::new(p, c))
            .collect();
        self.push_triangle(v[0], v[1], v[2]);
        self.push_triangle(v[0], v[2], v[3]);
    }

    /// Stroke a line of the given width with per-endpoint colors
    ///
    /// The line is extruded perpendicular to its direction into a quad.
    pub fn stroke_line(&mut self, a: Vec2, b: Vec2, width: f32, color_a: Color, color_b: Color) {
        let dir = (b - a).normalized();
        if dir == Vec2::ZERO {
            return;
        }
        let offset = dir.perp() * (width * 0.5);
        self.fill_quad(
            [a + offset, b + offset, b - offset, a - offset],
            [color_a, color_b, color_b, color_a],
        );
    }

    /// Fill a convex polygon with a single color (fan from the first vertex)
    pub fn fill_convex_polygon(&mut self, verts: &[Vec2], color: Color) {
        if verts.len() < 3 {
            return;
        }
        let first = Vertex2D::new(verts[0], color);
        for pair in verts[1..].windows(2) {
            self.push_triangle(first, Vertex2D::new(pair[0], color), Vertex2D::new(pair[1], color));
        }
    }

    /// Fill a circle as a triangle fan with the given segment count
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, segments: u32, color: Color) {
        let segments = segments.max(3);
        let center_vertex = Vertex2D::new(center, color);
        let point_at = |i: u32| {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            Vertex2D::new(
                center + Vec2::new(angle.cos(), angle.sin()) * radius,
                color,
            )
        };
        for i in 0..segments {
            self.push_triangle(center_vertex, point_at(i), point_at(i + 1));
        }
    }
}
