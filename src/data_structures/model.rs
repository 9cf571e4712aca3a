//! Vertex layouts, material segments and static models.
//!
//! A [`StaticModel`] is a piece of geometry that is uploaded to the GPU once
//! at startup and never mutated afterwards. Positions and normals live in two
//! separate vertex buffers. The model is not drawn in one call: a list of
//! [`Segment`]s slices the vertex range into consecutive spans that each bind
//! their own material before issuing the draw.

use wgpu::RenderPass;

/// Describes the memory layout of one vertex buffer to the pipeline.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// A single vertex position, fed to the shaders at location 0.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl Vertex for PositionVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<PositionVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }
}

/// A single vertex normal, fed to the shaders at location 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NormalVertex {
    pub normal: [f32; 3],
}

impl Vertex for NormalVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<NormalVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }
}

/// One entry of a model's material table.
///
/// The table replaces per-vertex materials: a segment covers the vertices
/// `first..first + count` of the model's buffers and colours them with one
/// diffuse/specular pair. Tables are plain `const` data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialSegment {
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub first: u32,
    pub count: u32,
}

/// A material segment with its GPU-side bind group, ready to draw.
#[derive(Debug)]
pub struct Segment {
    pub material: MaterialSegment,
    pub bind_group: wgpu::BindGroup,
}

/// Geometry uploaded once: two static vertex buffers plus the segment list.
#[derive(Debug)]
pub struct StaticModel {
    pub name: String,
    pub position_buffer: wgpu::Buffer,
    pub normal_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub segments: Vec<Segment>,
}

/// Draw helpers so render code reads as verbs on the pass.
pub trait DrawStaticModel<'a> {
    /// Issue one draw call per material segment of `model`.
    fn draw_static_model(
        &mut self,
        model: &'a StaticModel,
        camera_bind_group: &'a wgpu::BindGroup,
        light_bind_group: &'a wgpu::BindGroup,
    );
}

impl<'a, 'b> DrawStaticModel<'b> for RenderPass<'a>
where
    'b: 'a,
{
    fn draw_static_model(
        &mut self,
        model: &'b StaticModel,
        camera_bind_group: &'b wgpu::BindGroup,
        light_bind_group: &'b wgpu::BindGroup,
    ) {
        self.set_vertex_buffer(0, model.position_buffer.slice(..));
        self.set_vertex_buffer(1, model.normal_buffer.slice(..));
        self.set_bind_group(1, camera_bind_group, &[]);
        self.set_bind_group(2, light_bind_group, &[]);
        for segment in &model.segments {
            let first = segment.material.first;
            let count = segment.material.count;
            self.set_bind_group(0, &segment.bind_group, &[]);
            self.draw(first..first + count, 0..1);
        }
    }
}
