//! The sky pass: a unit cube rendered around the camera with a cube map.
//!
//! The skybox draws first every frame with depth writes disabled and its
//! vertices forced onto the far plane, so scene geometry rendered afterwards
//! always wins the depth test. Only the camera's rotation reaches the sky
//! shader; the cube stays centred on the eye.

use wgpu::util::DeviceExt;

use crate::{
    data_structures::{
        model::{PositionVertex, Vertex},
        texture::Texture,
    },
    pipelines::model::mk_render_pipeline,
    resources::texture::cube_map_layout,
};

const fn v(x: f32, y: f32, z: f32) -> PositionVertex {
    PositionVertex {
        position: [x, y, z],
    }
}

/// Unit cube triangle list, two triangles per face.
#[rustfmt::skip]
pub const SKYBOX_VERTICES: [PositionVertex; 36] = [
    // +X
    v(1.0, -1.0, -1.0), v(1.0, 1.0, -1.0), v(1.0, 1.0, 1.0),
    v(1.0, -1.0, -1.0), v(1.0, 1.0, 1.0), v(1.0, -1.0, 1.0),
    // -X
    v(-1.0, -1.0, -1.0), v(-1.0, -1.0, 1.0), v(-1.0, 1.0, 1.0),
    v(-1.0, -1.0, -1.0), v(-1.0, 1.0, 1.0), v(-1.0, 1.0, -1.0),
    // +Y
    v(-1.0, 1.0, -1.0), v(-1.0, 1.0, 1.0), v(1.0, 1.0, 1.0),
    v(-1.0, 1.0, -1.0), v(1.0, 1.0, 1.0), v(1.0, 1.0, -1.0),
    // -Y
    v(-1.0, -1.0, -1.0), v(1.0, -1.0, -1.0), v(1.0, -1.0, 1.0),
    v(-1.0, -1.0, -1.0), v(1.0, -1.0, 1.0), v(-1.0, -1.0, 1.0),
    // +Z
    v(-1.0, -1.0, 1.0), v(1.0, -1.0, 1.0), v(1.0, 1.0, 1.0),
    v(-1.0, -1.0, 1.0), v(1.0, 1.0, 1.0), v(-1.0, 1.0, 1.0),
    // -Z
    v(-1.0, -1.0, -1.0), v(-1.0, 1.0, -1.0), v(1.0, 1.0, -1.0),
    v(-1.0, -1.0, -1.0), v(1.0, 1.0, -1.0), v(1.0, -1.0, -1.0),
];

/// The sky's GPU resources: cube geometry, cube map and its bind group.
#[derive(Debug)]
pub struct SkyboxResources {
    pub texture: Texture,
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub bind_group: wgpu::BindGroup,
}

impl SkyboxResources {
    pub fn new(device: &wgpu::Device, texture: Texture) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Skybox Vertex Buffer"),
            contents: bytemuck::cast_slice(&SKYBOX_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let layout = cube_map_layout(device);
        let sampler = texture
            .sampler
            .as_ref()
            .expect("cube map textures always carry a sampler");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
            label: Some("Skybox bind_group"),
        });
        Self {
            texture,
            vertex_buffer,
            vertex_count: SKYBOX_VERTICES.len() as u32,
            bind_group,
        }
    }
}

pub fn mk_skybox_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Skybox Pipeline Layout"),
        bind_group_layouts: &[&cube_map_layout(device), camera_bind_group_layout],
        push_constant_ranges: &[],
    });

    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Skybox Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("skybox_shader.wgsl").into()),
    };

    // The camera sits inside the cube, so back-face culling must stay off.
    mk_render_pipeline(
        device,
        &render_pipeline_layout,
        config.format,
        Some(wgpu::BlendState {
            alpha: wgpu::BlendComponent::REPLACE,
            color: wgpu::BlendComponent::REPLACE,
        }),
        Some(Texture::DEPTH_FORMAT),
        false,
        None,
        &[PositionVertex::desc()],
        shader,
    )
}

/// Draw helper so render code reads as verbs on the pass.
pub trait DrawSkybox<'a> {
    fn draw_skybox(&mut self, skybox: &'a SkyboxResources, camera_bind_group: &'a wgpu::BindGroup);
}

impl<'a, 'b> DrawSkybox<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_skybox(&mut self, skybox: &'b SkyboxResources, camera_bind_group: &'b wgpu::BindGroup) {
        self.set_vertex_buffer(0, skybox.vertex_buffer.slice(..));
        self.set_bind_group(0, &skybox.bind_group, &[]);
        self.set_bind_group(1, camera_bind_group, &[]);
        self.draw(0..skybox.vertex_count, 0..1);
    }
}
