//! Circle fan geometry.
//!
//! The mesh is a fixed, deterministic computation: one shared center vertex
//! plus a closed ring of perimeter vertices, drawn as a triangle fan.

use bytemuck::{Pod, Zeroable};

/// Segment count of the circle approximation used by the demo.
pub const CIRCLE_SEGMENTS: u32 = 100;

/// Circle radius in normalized device coordinates.
pub const CIRCLE_RADIUS: f32 = 0.5;

/// A single 2D vertex, tightly packed for upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
}

impl Vertex {
    /// Byte stride of one vertex in the buffer.
    pub const STRIDE: i32 = std::mem::size_of::<Vertex>() as i32;
}

/// Builds the triangle-fan vertex list for a circle of radius
/// [`CIRCLE_RADIUS`] centered at the origin.
///
/// Vertex 0 is the shared fan center; vertices `1..=segments + 1` sit on the
/// perimeter at angle `2π·i/segments` for `i` in `0..=segments`. The final
/// perimeter vertex repeats the first (angle 2π) so the fan closes. For
/// `segments` = 100 this is exactly 102 vertices.
pub fn circle_fan(segments: u32) -> Vec<Vertex> {
    debug_assert!(segments >= 3, "a circle fan needs at least 3 segments");

    let mut vertices = Vec::with_capacity(segments as usize + 2);
    vertices.push(Vertex { pos: [0.0, 0.0] });

    for i in 0..=segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            pos: [CIRCLE_RADIUS * angle.cos(), CIRCLE_RADIUS * angle.sin()],
        });
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_mesh_is_exactly_102_vertices() {
        assert_eq!(circle_fan(CIRCLE_SEGMENTS).len(), 102);
    }

    #[test]
    fn vertex_count_is_segments_plus_two() {
        assert_eq!(circle_fan(3).len(), 5);
        assert_eq!(circle_fan(64).len(), 66);
    }

    #[test]
    fn center_is_origin() {
        let mesh = circle_fan(CIRCLE_SEGMENTS);
        assert_eq!(mesh[0].pos, [0.0, 0.0]);
    }

    #[test]
    fn perimeter_matches_closed_form() {
        let mesh = circle_fan(CIRCLE_SEGMENTS);
        for i in 0..=CIRCLE_SEGMENTS {
            let angle = std::f32::consts::TAU * i as f32 / CIRCLE_SEGMENTS as f32;
            let expected = [CIRCLE_RADIUS * angle.cos(), CIRCLE_RADIUS * angle.sin()];
            assert_eq!(mesh[i as usize + 1].pos, expected, "perimeter vertex {i}");
        }
    }

    #[test]
    fn fan_closes_on_the_first_perimeter_vertex() {
        let mesh = circle_fan(CIRCLE_SEGMENTS);
        let first = mesh[1].pos;
        let last = mesh[mesh.len() - 1].pos;
        assert!((first[0] - last[0]).abs() < 1e-6);
        assert!((first[1] - last[1]).abs() < 1e-6);
    }

    #[test]
    fn all_perimeter_vertices_sit_on_the_radius() {
        for v in circle_fan(CIRCLE_SEGMENTS).iter().skip(1) {
            let r = (v.pos[0] * v.pos[0] + v.pos[1] * v.pos[1]).sqrt();
            assert!((r - CIRCLE_RADIUS).abs() < 1e-6);
        }
    }

    #[test]
    fn vertex_stride_is_two_floats() {
        assert_eq!(Vertex::STRIDE, 8);
    }
}
