use amethyst::{
    assets::{AssetLoaderSystemData, Handle},
    core::{
        math::{Point3, Vector3},
        transform::Transform,
    },
    ecs::Entity,
    prelude::*,
    renderer::{
        debug_drawing::DebugLinesComponent,
        light::{Light, PointLight},
        loaders::load_from_linear_rgba,
        palette::{LinSrgba, Srgb, Srgba},
        rendy::mesh::{Normal, Position, Tangent, TexCoord},
        shape::Shape,
        Camera, Material, MaterialDefaults, Mesh, Texture,
    },
};

use crate::appearance::Surface;
use crate::components::Spin;

// Everything is drawn with one unit sphere, scaled per body.
pub fn unit_sphere(world: &mut World) -> Handle<Mesh> {
    world.exec(|loader: AssetLoaderSystemData<'_, Mesh>| {
        loader.load_from_data(
            Shape::Sphere(32, 32)
                .generate::<(Vec<Position>, Vec<Normal>, Vec<Tangent>, Vec<TexCoord>)>(None)
                .into(),
            (),
        )
    })
}

fn linear(color: [f32; 3], alpha: f32) -> LinSrgba {
    let lin = Srgb::new(color[0], color[1], color[2]).into_linear();
    LinSrgba::new(lin.red, lin.green, lin.blue, alpha)
}

pub fn material(world: &mut World, surface: &Surface) -> Handle<Material> {
    let defaults = world.read_resource::<MaterialDefaults>().0.clone();

    world.exec(
        |(mtl_loader, tex_loader): (AssetLoaderSystemData<'_, Material>, AssetLoaderSystemData<'_, Texture>)| {
            let albedo = tex_loader.load_from_data(load_from_linear_rgba(linear(surface.color, 1.0)).into(), ());
            // Channels are (unused, roughness, metallic, unused)
            let metallic_roughness = tex_loader.load_from_data(
                load_from_linear_rgba(LinSrgba::new(0.0, surface.roughness, surface.metallic, 0.0)).into(),
                (),
            );
            let emission = if surface.emissive {
                tex_loader.load_from_data(load_from_linear_rgba(linear(surface.color, 1.0)).into(), ())
            } else {
                defaults.emission.clone()
            };

            mtl_loader.load_from_data(
                Material {
                    albedo,
                    metallic_roughness,
                    emission,
                    ..defaults.clone()
                },
                (),
            )
        },
    )
}

pub mod body {
    use super::*;

    /// Sphere of `radius` at `position`, optionally spinning about y.
    pub fn add_body(
        world: &mut World,
        mesh: Handle<Mesh>,
        material: Handle<Material>,
        position: Vector3<f32>,
        radius: f32,
        spin: f32,
    ) -> Entity {
        let mut transform = Transform::default();
        transform.set_translation(position);
        transform.set_scale(Vector3::new(radius, radius, radius));

        world.create_entity()
            .with(mesh)
            .with(material)
            .with(transform)
            .with(Spin(spin))
            .build()
    }

    // The sun is also the only light source besides the ambient term.
    pub fn add_sun_light(world: &mut World, color: [f32; 3], intensity: f32, radius: f32) -> Entity {
        let light: Light = PointLight {
            color: Srgb::new(color[0], color[1], color[2]),
            intensity,
            radius,
            ..PointLight::default()
        }.into();

        world.create_entity()
            .with(light)
            .with(Transform::default())
            .build()
    }
}

pub mod backdrop {
    use super::*;

    const ORBIT_RING_COLOR: [f32; 4] = [0.33, 0.33, 0.33, 0.2];    // 0x555555 at 20%
    const STAR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    const STAR_SIZE: f32 = 0.5;

    fn srgba(c: [f32; 4]) -> Srgba {
        Srgba::new(c[0], c[1], c[2], c[3])
    }

    pub fn add_orbit_rings(world: &mut World, rings: &[Vec<Point3<f32>>]) -> Entity {
        let segments: usize = rings.iter().map(|r| r.len().saturating_sub(1)).sum();
        let mut lines = DebugLinesComponent::with_capacity(segments);

        for ring in rings {
            for pair in ring.windows(2) {
                lines.add_line(pair[0], pair[1], srgba(ORBIT_RING_COLOR));
            }
        }

        world.create_entity().with(lines).build()
    }

    // Each star is a tiny line segment, debug lines have no point primitive.
    pub fn add_starfield(world: &mut World, stars: &[Point3<f32>]) -> Entity {
        let mut lines = DebugLinesComponent::with_capacity(stars.len());
        let offset = Vector3::new(STAR_SIZE, 0.0, 0.0);

        for star in stars {
            lines.add_line(*star, star + offset, srgba(STAR_COLOR));
        }

        world.create_entity().with(lines).build()
    }
}

pub fn init_camera(world: &mut World, position: [f32; 3], dims: (f32, f32)) -> Entity {
    let mut transform = Transform::default();
    transform.set_translation_xyz(position[0], position[1], position[2]);
    transform.face_towards(Vector3::new(0.0, 0.0, 0.0), Vector3::y());

    world.create_entity()
        .with(Camera::standard_3d(dims.0, dims.1))
        .with(transform)
        .build()
}
