#[cfg(feature = "integration-tests")]
use sky_orbit::flow::ImageTestResult;
use sky_orbit::{
    context::Context,
    flow::{GraphicsFlow, Out},
    render::Render,
};

pub(crate) struct FrameCounter(pub(crate) u32);
impl Default for FrameCounter {
    fn default() -> Self {
        Self(0)
    }
}
impl FrameCounter {
    pub(crate) fn frame(&self) -> u32 {
        self.0
    }

    pub(crate) fn progress(&mut self) {
        self.0 += 1;
    }
}

#[cfg(feature = "integration-tests")]
pub(crate) struct TestRender<'a, 'pass> {
    pub(crate) setup: &'a dyn Fn(&mut Context, &mut FrameCounter),
    pub(crate) render: Render<'a, 'pass>,
    pub(crate) validate: &'a dyn Fn(
        &Context,
        &mut FrameCounter,
        &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error>,
}

#[cfg(feature = "integration-tests")]
impl<'a, 'b> GraphicsFlow<FrameCounter, ()> for TestRender<'a, 'b>
where
    'b: 'a,
{
    fn on_init(&mut self, ctx: &mut Context, s: &mut FrameCounter) -> Out<FrameCounter, ()> {
        (self.setup)(ctx, s);
        Out::Empty
    }

    fn on_render<'pass>(&self) -> Render<'_, 'pass> {
        match &self.render {
            Render::None => Render::None,
            Render::Sky(sky) => Render::Sky(*sky),
            Render::Model(model) => Render::Model(*model),
            Render::Composed(_) => panic!("Composed not supported in Integration Tests"),
            Render::Custom(_) => panic!("Custom not supported in Integration Tests"),
        }
    }

    fn render_to_texture(
        &self,
        ctx: &Context,
        s: &mut FrameCounter,
        texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error> {
        (self.validate)(ctx, s, texture)
    }

    fn on_update(
        &mut self,
        _: &Context,
        state: &mut FrameCounter,
        _: std::time::Duration,
    ) -> Out<FrameCounter, ()> {
        state.progress();
        Out::Empty
    }

    fn on_tick(&mut self, _: &Context, _: &mut FrameCounter) -> Out<FrameCounter, ()> {
        Out::Empty
    }

    fn on_device_events(
        &mut self,
        _: &Context,
        _: &mut FrameCounter,
        _: &sky_orbit::DeviceEvent,
    ) -> Out<FrameCounter, ()> {
        Out::Empty
    }

    fn on_window_events(
        &mut self,
        _: &Context,
        _: &mut FrameCounter,
        _: &sky_orbit::WindowEvent,
    ) -> Out<FrameCounter, ()> {
        Out::Empty
    }

    fn on_custom_events(&mut self, _: &Context, _: &mut FrameCounter, event: ()) -> Option<()> {
        Some(event)
    }
}

#[macro_export]
macro_rules! golden_image_test {
    ($mk_flow:expr) => {{
        use crate::common::test_utils::FrameCounter;
        use sky_orbit::flow::FlowConstructor;
        use sky_orbit::flow::GraphicsFlow;
        let flow_constructor: FlowConstructor<FrameCounter, ()> = Box::new(|ctx| {
            Box::pin(async move {
                let g_flow: Box<dyn GraphicsFlow<FrameCounter, ()>> =
                    Box::new(($mk_flow)(ctx).await);
                g_flow
            })
        });

        sky_orbit::flow::run(vec![flow_constructor])
            .expect("Failed to run flow for integration test.");
    }};
}
