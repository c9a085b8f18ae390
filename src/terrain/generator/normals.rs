use nalgebra::Vector3;

use crate::terrain::{coords::GridSpecs, vertex::Vertex};

fn position(vertices: &[Vertex], i: usize) -> Vector3<f32> {
    Vector3::from(vertices[i].position)
}

// cross product of the edges from `origin` to `a` and to `b`
fn face_normal(vertices: &[Vertex], origin: usize, a: usize, b: usize) -> [f32; 3] {
    let p = position(vertices, origin);
    let n = (position(vertices, a) - p).cross(&(position(vertices, b) - p));
    [n.x, n.y, n.z]
}

/// Recomputes the normals of both grid copies from the current positions.
///
/// The primary copy uses the edges towards `+Z` and `+X`. The mirror copy
/// belongs to the second triangle of each cell, so vertex `t` uses the edges
/// towards `t + z_dim` and `t + z_dim - 1` instead. Vertices on the border
/// that either stencil would reach past take the normal of the closest vertex
/// in the same copy that it does cover.
///
/// Normals are left unnormalized.
pub fn estimate_normals(vertices: &mut [Vertex], specs: &GridSpecs) {
    if specs.is_degenerate() {
        return;
    }

    let (x_dim, z_dim) = (specs.x_dim, specs.z_dim);
    let offset = specs.vertex_count();
    debug_assert!(vertices.len() >= offset * 2);

    for r in 0..x_dim - 1 {
        for c in 0..z_dim - 1 {
            let i = specs.index(r, c);
            let n = face_normal(vertices, i, i + 1, i + z_dim);
            vertices[i].normal = n;
        }
        for c in 1..z_dim {
            let t = offset + specs.index(r, c);
            let n = face_normal(vertices, t, t + z_dim, t + z_dim - 1);
            vertices[t].normal = n;
        }
    }

    for r in 0..x_dim {
        for c in 0..z_dim {
            let i = specs.index(r, c);

            if r == x_dim - 1 || c == z_dim - 1 {
                let src = specs.index(r.min(x_dim - 2), c.min(z_dim - 2));
                vertices[i].normal = vertices[src].normal;
            }
            if r == x_dim - 1 || c == 0 {
                let src = offset + specs.index(r.min(x_dim - 2), c.max(1));
                vertices[offset + i].normal = vertices[src].normal;
            }
        }
    }
}
