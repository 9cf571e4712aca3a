use anyhow::bail;
use cgmath::{InnerSpace, Vector3};
use wgpu::util::DeviceExt;

use crate::{
    data_structures::model::{MaterialSegment, NormalVertex, PositionVertex, Segment, StaticModel},
    pipelines::model::mk_material_bind_group,
};

/**
 * Static models are authored as bare triangle lists without normals, so the
 * per-face normals have to be derived before the buffers can be uploaded.
 */
pub fn compute_flat_normals(positions: &[PositionVertex]) -> Vec<NormalVertex> {
    positions
        .chunks_exact(3)
        .flat_map(|triangle| {
            let p0: Vector3<f32> = triangle[0].position.into();
            let p1: Vector3<f32> = triangle[1].position.into();
            let p2: Vector3<f32> = triangle[2].position.into();
            let normal = (p1 - p0).cross(p2 - p0);
            // A degenerate triangle has no face normal; any unit vector keeps
            // the buffer well-formed.
            let normal = if normal.magnitude2() > 0.0 {
                normal.normalize()
            } else {
                Vector3::unit_y()
            };
            let vertex = NormalVertex {
                normal: normal.into(),
            };
            [vertex; 3]
        })
        .collect()
}

/// Check that a material table tiles the vertex range exactly.
///
/// Segments have to start at zero, be contiguous, cover whole triangles and
/// together span every vertex of the buffer.
pub fn validate_segments(segments: &[MaterialSegment], vertex_count: u32) -> anyhow::Result<()> {
    let mut next = 0u32;
    for (idx, segment) in segments.iter().enumerate() {
        if segment.first != next {
            bail!(
                "segment {} starts at vertex {} but the previous one ended at {}",
                idx,
                segment.first,
                next
            );
        }
        if segment.count == 0 || segment.count % 3 != 0 {
            bail!(
                "segment {} covers {} vertices, which is not a whole number of triangles",
                idx,
                segment.count
            );
        }
        next += segment.count;
    }
    if next != vertex_count {
        bail!(
            "material table covers {} vertices but the buffer holds {}",
            next,
            vertex_count
        );
    }
    Ok(())
}

/// Upload a triangle list once and slice it into material segments.
///
/// This is the only place model buffers are created; they are static for the
/// rest of the run.
pub fn build_static_model(
    device: &wgpu::Device,
    name: &str,
    positions: &[PositionVertex],
    table: &[MaterialSegment],
) -> anyhow::Result<StaticModel> {
    if positions.is_empty() || positions.len() % 3 != 0 {
        bail!(
            "{} holds {} vertices, which is not a whole number of triangles",
            name,
            positions.len()
        );
    }
    validate_segments(table, positions.len() as u32)?;

    let normals = compute_flat_normals(positions);

    let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Position Buffer", name)),
        contents: bytemuck::cast_slice(positions),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let normal_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Normal Buffer", name)),
        contents: bytemuck::cast_slice(&normals),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let layout = crate::pipelines::model::material_layout(device);
    let segments = table
        .iter()
        .map(|material| Segment {
            material: *material,
            bind_group: mk_material_bind_group(device, &layout, material),
        })
        .collect();

    Ok(StaticModel {
        name: name.to_string(),
        position_buffer,
        normal_buffer,
        vertex_count: positions.len() as u32,
        segments,
    })
}
