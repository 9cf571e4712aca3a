//! Render composition and pipeline batching.
//!
//! This module defines the [`Render`] enum, which is used by scenes to
//! specify what they draw each frame. The engine uses `Render` to sort
//! objects into the fixed pass order (sky first with depth writes off, then
//! segmented models) and to support custom per-object render passes.

use wgpu::RenderPass;

use crate::{
    context::Context, data_structures::model::StaticModel, pipelines::skybox::SkyboxResources,
};

/// Specifies what a scene draws this frame.
///
/// # Variants
///
/// - `None` renders nothing
/// - `Sky(..)` renders a cube-mapped skybox behind everything else
/// - `Model(..)` renders a static model, one draw call per material segment
/// - `Composed(..)` recursively renders a composition of multiple renders
/// - `Custom(..)` invokes a user-defined closure for custom rendering
///
pub enum Render<'a, 'pass>
where
    'pass: 'a,
{
    None,
    Sky(&'a SkyboxResources),
    Model(&'a StaticModel),
    Composed(Vec<Render<'a, 'pass>>),
    Custom(Box<dyn 'a + FnOnce(&Context, &mut RenderPass<'pass>) -> ()>),
}

impl<'a, 'pass> Render<'a, 'pass> {
    /// Sort this render into the engine's per-pipeline batches.
    ///
    /// Custom renders run immediately; everything else is collected so the
    /// frame can bind each pipeline exactly once.
    pub(crate) fn set_pipelines(
        self,
        ctx: &Context,
        render_pass: &mut RenderPass<'pass>,
        skies: &mut Vec<&'a SkyboxResources>,
        models: &mut Vec<&'a StaticModel>,
    ) {
        match self {
            Render::Sky(sky) => skies.push(sky),
            Render::Model(model) => models.push(model),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.set_pipelines(ctx, render_pass, skies, models)),
            Render::Custom(f) => f(ctx, render_pass),
            Render::None => (),
        }
    }
}

impl<'a, 'pass> From<&'a StaticModel> for Render<'a, 'pass> {
    fn from(model: &'a StaticModel) -> Self {
        Render::Model(model)
    }
}

impl<'a, 'pass> From<&'a SkyboxResources> for Render<'a, 'pass> {
    fn from(sky: &'a SkyboxResources) -> Self {
        Render::Sky(sky)
    }
}
