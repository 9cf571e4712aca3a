use crate::{
    data_structures::texture::Texture,
    pipelines::skybox::SkyboxResources,
    resources::texture::load_cube_texture,
};

/**
 * This module contains all logic for loading textures and building GPU
 * resources from external files and built-in data.
 */
pub mod mesh;
pub mod texture;

/// Sky colour used when no cube map asset could be loaded.
pub const FALLBACK_SKY_COLOUR: [u8; 4] = [96, 118, 153, 255];

/// Load the skybox, degrading to an untextured sky on failure.
///
/// A missing or malformed cube map must not take the whole scene down with
/// it; the failure is logged and the sky renders as a solid colour instead.
/// Use [`load_cube_texture`] directly to treat a broken asset as fatal.
pub async fn load_skybox(
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> SkyboxResources {
    let texture = match load_cube_texture(file_name, device, queue).await {
        Ok(texture) => texture,
        Err(e) => {
            log::warn!("could not load cube map {file_name}, using a solid sky: {e}");
            Texture::create_solid_cube_map(FALLBACK_SKY_COLOUR, device, queue)
        }
    };
    SkyboxResources::new(device, texture)
}
