#[cfg(feature = "integration-tests")]
use wgpu::Color;

#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_render_clear_colour() {
    use crate::common::test_utils::{FrameCounter, TestRender};
    use sky_orbit::{
        context::{Context, InitContext},
        render::Render,
    };

    golden_image_test!(async move |_: InitContext| {
        TestRender {
            setup: &|ctx: &mut Context, _| {
                ctx.clear_colour = Color::WHITE;
            },
            render: Render::None,
            validate: &|_, state: &mut FrameCounter, texture| {
                if state.frame() > 0 {
                    let colour = Color::WHITE;
                    let f_to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
                    let desired_pixel = image::Rgba([
                        f_to_u8(colour.r),
                        f_to_u8(colour.g),
                        f_to_u8(colour.b),
                        f_to_u8(colour.a),
                    ]);

                    for pixel in texture.pixels() {
                        assert_eq!(*pixel, desired_pixel);
                    }
                    Ok(sky_orbit::flow::ImageTestResult::Passed)
                } else {
                    Ok(sky_orbit::flow::ImageTestResult::Waiting)
                }
            },
        }
    });
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_cover_the_frame_with_the_fallback_sky() {
    use crate::common::test_utils::FrameCounter;
    use sky_orbit::{
        context::{Context, InitContext},
        data_structures::texture::Texture,
        flow::{GraphicsFlow, ImageTestResult, Out},
        pipelines::skybox::SkyboxResources,
        render::Render,
        resources::FALLBACK_SKY_COLOUR,
    };

    struct SkyFlow {
        skybox: SkyboxResources,
    }

    impl GraphicsFlow<FrameCounter, ()> for SkyFlow {
        fn on_init(&mut self, ctx: &mut Context, _: &mut FrameCounter) -> Out<FrameCounter, ()> {
            // A loud clear colour; no pixel of it may survive the sky pass.
            ctx.clear_colour = Color::WHITE;
            Out::Empty
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

        fn on_render<'pass>(&self) -> Render<'_, 'pass> {
            Render::Sky(&self.skybox)
        }

        fn render_to_texture(
            &self,
            _: &Context,
            state: &mut FrameCounter,
            texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
        ) -> Result<ImageTestResult, anyhow::Error> {
            if state.frame() == 0 {
                return Ok(ImageTestResult::Waiting);
            }

            // The exact channel values depend on the surface format, so the
            // assertion is about coverage: one uniform sky colour everywhere,
            // and none of the clear colour left.
            let reference = *texture
                .pixels()
                .next()
                .expect("test texture has at least one pixel");
            let white = image::Rgba([255u8, 255, 255, 255]);
            assert_ne!(reference, white, "the sky did not cover the clear colour");
            for (x, y, pixel) in texture.enumerate_pixels() {
                assert_eq!(*pixel, reference, "sky not uniform at ({}, {})", x, y);
            }
            Ok(ImageTestResult::Passed)
        }
    }

    golden_image_test!(async move |ctx: InitContext| {
        let texture = Texture::create_solid_cube_map(FALLBACK_SKY_COLOUR, &ctx.device, &ctx.queue);
        SkyFlow {
            skybox: SkyboxResources::new(&ctx.device, texture),
        }
    });
}
