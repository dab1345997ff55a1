#[macro_use] extern crate log;

use amethyst::{
    core::{math::Vector3, transform::TransformBundle},
    input::{InputBundle, StringBindings},
    prelude::*,
    renderer::{
        plugins::{RenderDebugLines, RenderShaded3D, RenderToWindow},
        palette::Srgba,
        resources::AmbientColor,
        types::DefaultBackend,
        RenderingBundle,
    },
    utils::application_root_dir,
};
use rand::{rngs::StdRng, SeedableRng};

use solar_system::{
    appearance::Surface,
    config::SolarSystemConfig,
    entities,
    resources::BodyHandles,
    systems,
    tools,
};

const CAMERA_DIMS: (f32, f32) = (1280.0, 720.0);
const AMBIENT: [f32; 4] = [0.25, 0.25, 0.25, 1.0];    // 0x404040

struct MainState {
    config: SolarSystemConfig,
}

impl SimpleState for MainState {
    fn on_start(&mut self, data: StateData<'_, GameData<'_, '_>>) {
        let world = data.world;
        let config = &self.config;

        let model = config.to_model();
        let appearance = config.appearance();
        let sphere = entities::unit_sphere(world);

        let sun_material = entities::material(world, &Surface::glowing(config.sun_color()));
        entities::body::add_body(
            world,
            sphere.clone(),
            sun_material,
            Vector3::zeros(),
            config.sun.radius,
            config.sun.spin_rate,
        );
        entities::body::add_sun_light(world, config.sun_color(), config.sun.light_intensity, config.sun.light_radius);
        world.insert(AmbientColor(Srgba::new(AMBIENT[0], AMBIENT[1], AMBIENT[2], AMBIENT[3])));

        let mut handles = BodyHandles::default();
        let mut rings = Vec::with_capacity(model.bodies().len());
        for body in model.bodies() {
            let material = entities::material(world, &appearance.surface(&body.id));
            let entity = entities::body::add_body(
                world,
                sphere.clone(),
                material,
                body.position(),
                body.visual_radius,
                config.planet_spin_rate,
            );
            handles.insert(body.id.clone(), entity);
            rings.push(tools::orbit_ring_points(body.orbital_radius, config.orbit_ring_segments));

            info!("{}: {:.2}", body.id, body.angular_speed);
        }
        entities::backdrop::add_orbit_rings(world, &rings);

        let stars = match config.starfield.seed {
            Some(seed) => tools::starfield_points(&mut StdRng::seed_from_u64(seed), config.starfield.count, config.starfield.extent),
            None => tools::starfield_points(&mut rand::thread_rng(), config.starfield.count, config.starfield.extent),
        };
        entities::backdrop::add_starfield(world, &stars);

        entities::init_camera(world, config.camera_position, CAMERA_DIMS);

        world.insert(model);
        world.insert(handles);
    }
}


fn main() -> amethyst::Result<()> {
    amethyst::start_logger(Default::default());

    let app_root = application_root_dir()?;

    let assets_dir = app_root.join("assets");
    let config_dir = app_root.join("config");
    let display_config_path = config_dir.join("display.ron");
    let bindings_path = config_dir.join("bindings.ron");
    let solar_config_path = config_dir.join("solar_system.ron");

    let config = if solar_config_path.exists() {
        SolarSystemConfig::load(&solar_config_path)?
    } else {
        warn!("{} not found, using built-in solar system", solar_config_path.display());
        SolarSystemConfig::default()
    };
    let speed_step = config.speed_step;
    let max_frame = config.max_frame_seconds;

    let game_data = GameDataBuilder::default()
        .with_bundle(InputBundle::<StringBindings>::new().with_bindings_from_file(bindings_path)?)?
        .with(systems::ControlInputSystem::new(speed_step), "control_input_system", &["input_system"])
        .with_system_desc(
            systems::ControlProcessingSystemDesc { speed_step },
            "control_processing_system",
            &["control_input_system"],
        )
        .with(systems::OrbitSystem { max_frame }, "orbit_system", &["control_processing_system"])
        .with(systems::SpinSystem { max_frame }, "spin_system", &["control_processing_system"])
        .with_bundle(TransformBundle::new().with_dep(&["orbit_system", "spin_system"]))?
        .with_bundle(
            RenderingBundle::<DefaultBackend>::new()
                .with_plugin(
                    RenderToWindow::from_config_path(display_config_path)?
                        .with_clear([0.0, 0.0, 0.0, 1.0]),
                )
                .with_plugin(RenderShaded3D::default())
                .with_plugin(RenderDebugLines::default()),
        )?;

    let mut game = Application::new(assets_dir, MainState { config }, game_data)?;
    game.run();

    Ok(())
}
