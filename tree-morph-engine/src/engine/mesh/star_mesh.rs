use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

/// Builds the extruded five-point star for the capstone. The outline
/// alternates outer and inner radii and is rotated a quarter turn so one
/// spike points straight up; the profile is extruded symmetrically along z.
pub fn build_star_mesh(outer: f32, inner: f32, spikes: usize, depth: f32) -> Mesh {
    let outline = star_outline(outer, inner, spikes);
    let n = outline.len();
    let half = depth / 2.0;

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    let uv_of = |p: Vec2| [(p.x / outer + 1.0) / 2.0, (p.y / outer + 1.0) / 2.0];

    // Front cap, fanned from the center. The outline is star-shaped with
    // respect to the centroid, so the fan cannot fold.
    let front_center = positions.len() as u32;
    positions.push([0.0, 0.0, half]);
    normals.push([0.0, 0.0, 1.0]);
    uvs.push([0.5, 0.5]);
    for p in &outline {
        positions.push([p.x, p.y, half]);
        normals.push([0.0, 0.0, 1.0]);
        uvs.push(uv_of(*p));
    }
    for i in 0..n as u32 {
        let j = (i + 1) % n as u32;
        indices.extend([front_center, front_center + 1 + i, front_center + 1 + j]);
    }

    // Back cap, wound the other way.
    let back_center = positions.len() as u32;
    positions.push([0.0, 0.0, -half]);
    normals.push([0.0, 0.0, -1.0]);
    uvs.push([0.5, 0.5]);
    for p in &outline {
        positions.push([p.x, p.y, -half]);
        normals.push([0.0, 0.0, -1.0]);
        uvs.push(uv_of(*p));
    }
    for i in 0..n as u32 {
        let j = (i + 1) % n as u32;
        indices.extend([back_center, back_center + 1 + j, back_center + 1 + i]);
    }

    // Sides: one flat-shaded quad per outline edge.
    for i in 0..n {
        let j = (i + 1) % n;
        let a = outline[i];
        let b = outline[j];
        let edge = b - a;
        let normal = Vec2::new(edge.y, -edge.x).normalize_or_zero();
        let normal = [normal.x, normal.y, 0.0];

        let base = positions.len() as u32;
        positions.push([a.x, a.y, half]);
        positions.push([b.x, b.y, half]);
        positions.push([b.x, b.y, -half]);
        positions.push([a.x, a.y, -half]);
        for _ in 0..4 {
            normals.push(normal);
        }
        uvs.extend([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);

        // front_a, back_a, back_b / front_a, back_b, front_b
        indices.extend([base, base + 3, base + 2, base, base + 2, base + 1]);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

fn star_outline(outer: f32, inner: f32, spikes: usize) -> Vec<Vec2> {
    (0..spikes * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = (i as f32 / spikes as f32) * PI + FRAC_PI_2;
            Vec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_alternates_radii_and_points_up() {
        let outline = star_outline(1.2, 0.5, 5);
        assert_eq!(outline.len(), 10);
        for (i, p) in outline.iter().enumerate() {
            let expected = if i % 2 == 0 { 1.2 } else { 0.5 };
            assert!((p.length() - expected).abs() < 1e-5);
        }
        // First vertex is the upward spike.
        assert!(outline[0].x.abs() < 1e-5);
        assert!((outline[0].y - 1.2).abs() < 1e-5);
    }

    #[test]
    fn mesh_is_a_closed_extrusion() {
        let mesh = build_star_mesh(1.2, 0.5, 5, 0.2);
        let outline_len = 10;
        let expected_vertices = 2 * (outline_len + 1) + 4 * outline_len;
        assert_eq!(mesh.count_vertices(), expected_vertices);

        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("star mesh must be indexed");
        };
        // Two caps of `outline_len` triangles plus two triangles per side.
        assert_eq!(indices.len(), (outline_len * 2 + outline_len * 2) * 3);
        let max = *indices.iter().max().unwrap() as usize;
        assert!(max < expected_vertices);
    }
}
