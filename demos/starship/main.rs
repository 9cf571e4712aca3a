use sky_orbit::{
    context::{Context, InitContext},
    data_structures::{
        model::StaticModel,
        starship::{STARSHIP_POSITIONS, STARSHIP_SEGMENTS},
    },
    flow::{FlowConstructor, GraphicsFlow, Out},
    pipelines::skybox::SkyboxResources,
    render::Render,
    resources,
};

#[derive(Default)]
struct State {}

enum Event {}

struct StarshipScene {
    ship: StaticModel,
    skybox: SkyboxResources,
}

impl StarshipScene {
    async fn new(ctx: &InitContext) -> anyhow::Result<StarshipScene> {
        let ship = resources::mesh::build_static_model(
            &ctx.device,
            "starship",
            &STARSHIP_POSITIONS,
            &STARSHIP_SEGMENTS,
        )?;
        let skybox = resources::load_skybox("skybox.png", &ctx.device, &ctx.queue).await;
        Ok(Self { ship, skybox })
    }
}

impl GraphicsFlow<State, Event> for StarshipScene {
    fn on_init(&mut self, _: &mut Context, _: &mut State) -> Out<State, Event> {
        Out::Configure(Box::new(|ctx| {
            ctx.clear_colour = sky_orbit::Color {
                r: 0.5,
                g: 0.1,
                b: 0.1,
                a: 1.0,
            };
        }))
    }

    fn on_update(&mut self, _: &Context, _: &mut State, _: std::time::Duration) -> Out<State, Event> {
        Out::Empty
    }

    fn on_tick(&mut self, _: &Context, _: &mut State) -> Out<State, Event> {
        Out::Empty
    }

    fn on_device_events(
        &mut self,
        _: &Context,
        _: &mut State,
        _: &sky_orbit::DeviceEvent,
    ) -> Out<State, Event> {
        Out::Empty
    }

    fn on_window_events(
        &mut self,
        _: &Context,
        _: &mut State,
        _: &sky_orbit::WindowEvent,
    ) -> Out<State, Event> {
        Out::Empty
    }

    fn on_custom_events(&mut self, _: &Context, _: &mut State, event: Event) -> Option<Event> {
        Some(event)
    }

    fn on_render<'pass>(&self) -> Render<'_, 'pass> {
        Render::Composed(vec![Render::Sky(&self.skybox), Render::Model(&self.ship)])
    }

    #[cfg(feature = "integration-tests")]
    fn render_to_texture(
        &self,
        _: &Context,
        _: &mut State,
        _: &mut image::ImageBuffer<image::Rgba<u8>, sky_orbit::BufferView>,
    ) -> Result<sky_orbit::flow::ImageTestResult, anyhow::Error> {
        Ok(sky_orbit::flow::ImageTestResult::Passed)
    }
}

fn main() {
    let scene: FlowConstructor<State, Event> = Box::new(|ctx| {
        Box::pin(async move {
            let scene = StarshipScene::new(&ctx)
                .await
                .expect("failed to build the starship scene");
            Box::new(scene) as Box<dyn GraphicsFlow<_, _>>
        })
    });

    let _ = sky_orbit::flow::run(vec![scene]);
}
