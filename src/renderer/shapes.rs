//! Shape tessellation for 2D primitives
//!
//! All shapes are emitted as triangle lists in playfield coordinates
//! (top-left origin, y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Segments per rounded corner quarter-circle
const CORNER_SEGMENTS: u32 = 6;

/// Generate vertices for an axis-aligned filled quad
pub fn quad(top_left: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x, y) = (top_left.x, top_left.y);
    let (w, h) = (size.x, size.y);
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y + h, color),
    ]
}

/// Quad with a vertical color gradient (the GPU interpolates per-vertex
/// colors across each triangle)
pub fn gradient_quad(
    top_left: Vec2,
    size: Vec2,
    top_color: [f32; 4],
    bottom_color: [f32; 4],
) -> Vec<Vertex> {
    let (x, y) = (top_left.x, top_left.y);
    let (w, h) = (size.x, size.y);
    vec![
        Vertex::new(x, y, top_color),
        Vertex::new(x, y + h, bottom_color),
        Vertex::new(x + w, y, top_color),
        Vertex::new(x + w, y, top_color),
        Vertex::new(x, y + h, bottom_color),
        Vertex::new(x + w, y + h, bottom_color),
    ]
}

/// Generate vertices for a five-point star filling a bounding square.
///
/// Outer points sit at angles 18 + i*72 degrees, inner points halfway
/// between at half radius; y is negated because playfield y grows downward.
pub fn star_polygon(top_left: Vec2, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let center = top_left + Vec2::splat(size / 2.0);
    let r = size / 2.0;

    let mut perimeter = [Vec2::ZERO; 10];
    for i in 0..5 {
        let outer = (18.0 + i as f32 * 72.0) / 180.0 * PI;
        let inner = (54.0 + i as f32 * 72.0) / 180.0 * PI;
        perimeter[i * 2] = center + Vec2::new(outer.cos() * r, -outer.sin() * r);
        perimeter[i * 2 + 1] = center + Vec2::new(inner.cos() * r * 0.5, -inner.sin() * r * 0.5);
    }

    // Fan from the center over the closed perimeter
    let mut vertices = Vec::with_capacity(30);
    for i in 0..10 {
        let a = perimeter[i];
        let b = perimeter[(i + 1) % 10];
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }
    vertices
}

/// Generate vertices for a rounded rectangle: a center slab, two side slabs
/// and four quarter-circle corner fans.
pub fn rounded_rect(top_left: Vec2, size: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (w, h) = (size.x, size.y);
    let r = radius.min(w / 2.0).min(h / 2.0);

    let mut vertices = Vec::new();

    // Center slab spans the full height between the rounded sides
    vertices.extend(quad(
        top_left + Vec2::new(r, 0.0),
        Vec2::new(w - 2.0 * r, h),
        color,
    ));
    // Left and right slabs between the corner arcs
    vertices.extend(quad(
        top_left + Vec2::new(0.0, r),
        Vec2::new(r, h - 2.0 * r),
        color,
    ));
    vertices.extend(quad(
        top_left + Vec2::new(w - r, r),
        Vec2::new(r, h - 2.0 * r),
        color,
    ));

    // Corner centers and their starting angles (quarter circles)
    let corners = [
        (top_left + Vec2::new(r, r), PI),             // top-left
        (top_left + Vec2::new(w - r, r), 1.5 * PI),   // top-right
        (top_left + Vec2::new(w - r, h - r), 0.0),    // bottom-right
        (top_left + Vec2::new(r, h - r), 0.5 * PI),   // bottom-left
    ];
    for (center, start) in corners {
        for i in 0..CORNER_SEGMENTS {
            let a1 = start + (i as f32 / CORNER_SEGMENTS as f32) * 0.5 * PI;
            let a2 = start + ((i + 1) as f32 / CORNER_SEGMENTS as f32) * 0.5 * PI;
            vertices.push(Vertex::new(center.x, center.y, color));
            vertices.push(Vertex::new(center.x + r * a1.cos(), center.y + r * a1.sin(), color));
            vertices.push(Vertex::new(center.x + r * a2.cos(), center.y + r * a2.sin(), color));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(vertices: &[Vertex]) -> (f32, f32, f32, f32) {
        let mut min = (f32::MAX, f32::MAX);
        let mut max = (f32::MIN, f32::MIN);
        for v in vertices {
            min.0 = min.0.min(v.position[0]);
            min.1 = min.1.min(v.position[1]);
            max.0 = max.0.max(v.position[0]);
            max.1 = max.1.max(v.position[1]);
        }
        (min.0, min.1, max.0, max.1)
    }

    #[test]
    fn test_quad_covers_rect() {
        let verts = quad(Vec2::new(10.0, 20.0), Vec2::new(100.0, 50.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert_eq!(bounds(&verts), (10.0, 20.0, 110.0, 70.0));
    }

    #[test]
    fn test_star_polygon_stays_in_bounding_square() {
        let verts = star_polygon(Vec2::new(100.0, 100.0), 30.0, [1.0; 4]);
        assert_eq!(verts.len(), 30);
        let (min_x, min_y, max_x, max_y) = bounds(&verts);
        assert!(min_x >= 100.0 - 0.001 && max_x <= 130.0 + 0.001);
        assert!(min_y >= 100.0 - 0.001 && max_y <= 130.0 + 0.001);
    }

    #[test]
    fn test_rounded_rect_vertex_count() {
        let verts = rounded_rect(Vec2::ZERO, Vec2::new(120.0, 18.0), 8.0, [1.0; 4]);
        // 3 slabs * 6 + 4 corners * CORNER_SEGMENTS * 3
        assert_eq!(verts.len(), 18 + 4 * CORNER_SEGMENTS as usize * 3);
        let (min_x, min_y, max_x, max_y) = bounds(&verts);
        assert!(min_x >= -0.001 && max_x <= 120.001);
        assert!(min_y >= -0.001 && max_y <= 18.001);
    }
}
