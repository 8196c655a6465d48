//! Rounded belt cap: a 2D profile extruded by the paper thickness.
//!
//! The profile is built once at startup; it only depends on the dimension
//! table.

use crate::constants::BELT_CURVE_SEGMENTS;
use crate::dims::Dims;
use crate::mesh::{Mesh, Vertex};
use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

/// Closed counter-clockwise outline of the belt cap.
///
/// The straight pivot edge sits on x = 0 spanning y ∈ \[-h/2, h/2\]; the band
/// extends toward -x and ends in a half circle of radius h/2 whose leftmost
/// point is at x = -width. The closing edge back to the first point is implicit.
pub fn belt_profile(width: f32, height: f32, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(1);
    let r = height / 2.0;
    let arc_center = Vec2::new(-(width - r), 0.0);
    let mut points = Vec::with_capacity(segments + 3);
    points.push(Vec2::new(0.0, r));
    for i in 0..=segments {
        let a = FRAC_PI_2 + PI * i as f32 / segments as f32;
        points.push(arc_center + r * Vec2::new(a.cos(), a.sin()));
    }
    points.push(Vec2::new(0.0, -r));
    points
}

/// Extrude a convex counter-clockwise outline along +Z from z = 0 to z = `depth`.
pub fn extrude(profile: &[Vec2], depth: f32) -> Mesh {
    let mut m = Mesh::default();
    let n = profile.len();
    if n < 3 {
        return m;
    }

    // caps: fan triangulation, valid for the convex outline above
    let front = m.vertices.len() as u32;
    for p in profile {
        m.vertices
            .push(Vertex::new(Vec3::new(p.x, p.y, depth), Vec3::Z));
    }
    for i in 1..(n as u32 - 1) {
        m.indices.extend_from_slice(&[front, front + i, front + i + 1]);
    }
    let back = m.vertices.len() as u32;
    for p in profile {
        m.vertices
            .push(Vertex::new(Vec3::new(p.x, p.y, 0.0), Vec3::NEG_Z));
    }
    for i in 1..(n as u32 - 1) {
        m.indices.extend_from_slice(&[back, back + i + 1, back + i]);
    }

    // side walls, one flat quad per outline edge
    for i in 0..n {
        let a = profile[i];
        let b = profile[(i + 1) % n];
        let edge = b - a;
        if edge.length_squared() <= f32::EPSILON {
            continue;
        }
        let normal = Vec3::new(edge.y, -edge.x, 0.0).normalize();
        let base = m.vertices.len() as u32;
        m.vertices.push(Vertex::new(a.extend(0.0), normal));
        m.vertices.push(Vertex::new(b.extend(0.0), normal));
        m.vertices.push(Vertex::new(b.extend(depth), normal));
        m.vertices.push(Vertex::new(a.extend(depth), normal));
        m.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    m
}

/// The belt cap mesh for the given dimensions.
pub fn belt_mesh(dims: &Dims) -> Mesh {
    let profile = belt_profile(dims.belt_w, dims.belt_h, BELT_CURVE_SEGMENTS);
    extrude(&profile, dims.paper_thickness)
}

/// Signed area of a closed outline; positive for counter-clockwise.
pub fn signed_area(profile: &[Vec2]) -> f32 {
    let n = profile.len();
    (0..n)
        .map(|i| {
            let a = profile[i];
            let b = profile[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum::<f32>()
        * 0.5
}
