use amethyst::config::Config;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::appearance::{parse_hex_color, Appearance, MonochromeAppearance, PaletteAppearance};
use crate::error::{SolarResult, SolarSystemError};
use crate::orbit::{self, Body, BodyId, OrbitalModel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    pub id: BodyId,
    pub orbital_radius: f32,
    pub angular_speed: f32,
    pub visual_radius: f32,
    pub color: String,
}

impl BodyConfig {
    fn new(id: &str, visual_radius: f32, orbital_radius: f32, angular_speed: f32, color: &str) -> Self {
        Self {
            id: id.into(),
            orbital_radius,
            angular_speed,
            visual_radius,
            color: color.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub radius: f32,
    pub color: String,
    pub spin_rate: f32,         // rad/s about y
    pub light_intensity: f32,
    pub light_radius: f32,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            color: "#FFD700".to_owned(),
            spin_rate: 0.5,
            light_intensity: 2.0,
            light_radius: 200.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    pub extent: f32,            // Side of the cube the stars are scattered in
    pub seed: Option<u64>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            extent: 2000.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppearanceConfig {
    Palette,
    Monochrome(String),
}

/// Everything the app reads from `config/solar_system.ron`. Missing fields fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarSystemConfig {
    pub time_scale: f32,
    pub max_frame_seconds: f32,     // Longest frame the animation systems accept
    pub speed_step: f32,
    pub planet_spin_rate: f32,
    pub orbit_ring_segments: usize,
    pub camera_position: [f32; 3],
    pub appearance: AppearanceConfig,
    pub sun: SunConfig,
    pub starfield: StarfieldConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Default for SolarSystemConfig {
    fn default() -> Self {
        Self {
            time_scale: orbit::TIME_SCALE,
            max_frame_seconds: crate::systems::DEFAULT_MAX_FRAME,
            speed_step: 0.1,
            planet_spin_rate: 2.0,
            orbit_ring_segments: 64,
            camera_position: [0.0, 50.0, 80.0],
            appearance: AppearanceConfig::Palette,
            sun: SunConfig::default(),
            starfield: StarfieldConfig::default(),
            bodies: vec![
                BodyConfig::new("Mercury", 0.8, 15.0, 4.74, "#8C7853"),
                BodyConfig::new("Venus", 1.2, 20.0, 3.50, "#FFC649"),
                BodyConfig::new("Earth", 1.3, 25.0, 2.98, "#6B93D6"),
                BodyConfig::new("Mars", 1.0, 30.0, 2.41, "#CD5C5C"),
                BodyConfig::new("Jupiter", 3.5, 40.0, 1.31, "#D8CA9D"),
                BodyConfig::new("Saturn", 3.0, 50.0, 0.97, "#FAD5A5"),
                BodyConfig::new("Uranus", 2.2, 60.0, 0.68, "#4FD0E3"),
                BodyConfig::new("Neptune", 2.1, 70.0, 0.54, "#4B70DD"),
            ],
        }
    }
}

fn ensure_positive(owner: &str, field: &'static str, value: f32) -> SolarResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SolarSystemError::NotPositive {
            owner: owner.to_owned(),
            field,
            value,
        })
    }
}

fn color_of(owner: &str, color: &str) -> SolarResult<[f32; 3]> {
    parse_hex_color(color).ok_or_else(|| SolarSystemError::InvalidColor {
        owner: owner.to_owned(),
        color: color.to_owned(),
    })
}

impl SolarSystemConfig {
    /// Reads and validates a RON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> SolarResult<Self> {
        let config = <Self as Config>::load(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SolarResult<()> {
        if self.bodies.is_empty() {
            return Err(SolarSystemError::NoBodies);
        }

        ensure_positive("config", "time_scale", self.time_scale)?;
        ensure_positive("config", "max_frame_seconds", self.max_frame_seconds)?;
        ensure_positive("config", "speed_step", self.speed_step)?;
        ensure_positive("sun", "radius", self.sun.radius)?;
        ensure_positive("starfield", "extent", self.starfield.extent)?;
        color_of("sun", &self.sun.color)?;
        if let AppearanceConfig::Monochrome(color) = &self.appearance {
            color_of("appearance", color)?;
        }

        let mut seen = HashSet::with_capacity(self.bodies.len());
        for body in &self.bodies {
            if !seen.insert(&body.id) {
                return Err(SolarSystemError::DuplicateBody(body.id.to_string()));
            }
            ensure_positive(&body.id, "orbital_radius", body.orbital_radius)?;
            ensure_positive(&body.id, "visual_radius", body.visual_radius)?;
            color_of(&body.id, &body.color)?;

            let clamped = orbit::clamp_speed(body.angular_speed);
            if clamped != body.angular_speed {
                warn!("{}: angular_speed {} out of range, using {}", body.id, body.angular_speed, clamped);
            }
        }

        Ok(())
    }

    pub fn to_model(&self) -> OrbitalModel {
        let bodies = self.bodies.iter()
            .map(|b| Body::new(b.id.clone(), b.orbital_radius, b.angular_speed, b.visual_radius))
            .collect();

        OrbitalModel::new(bodies).with_time_scale(self.time_scale)
    }

    // Colours were checked by `validate`; anything unparsable still falls back to grey.
    pub fn appearance(&self) -> Box<dyn Appearance> {
        match &self.appearance {
            AppearanceConfig::Palette => {
                let colors: HashMap<BodyId, [f32; 3]> = self.bodies.iter()
                    .filter_map(|b| parse_hex_color(&b.color).map(|c| (b.id.clone(), c)))
                    .collect();
                Box::new(PaletteAppearance::new(colors))
            }
            AppearanceConfig::Monochrome(color) => {
                Box::new(MonochromeAppearance(parse_hex_color(color).unwrap_or([0.5, 0.5, 0.5])))
            }
        }
    }

    pub fn sun_color(&self) -> [f32; 3] {
        parse_hex_color(&self.sun.color).unwrap_or([1.0, 1.0, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_valid() {
        let config = SolarSystemConfig::default();
        config.validate().unwrap();
        assert_eq!(config.bodies.len(), 8);

        let model = config.to_model();
        assert_eq!(model.bodies().len(), 8);
        assert!((model.time_scale() - 0.1).abs() < 1e-6);
        assert_eq!(model.speed(&"Earth".into()), 2.98);
        assert!(model.bodies().iter().all(|b| b.phase_angle == 0.0));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut config = SolarSystemConfig::default();
        let dup = config.bodies[2].clone();
        config.bodies.push(dup);

        match config.validate() {
            Err(SolarSystemError::DuplicateBody(id)) => assert_eq!(id, "Earth"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn non_positive_radii_rejected() {
        let mut config = SolarSystemConfig::default();
        config.bodies[0].orbital_radius = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SolarSystemError::NotPositive { field: "orbital_radius", .. })
        ));

        let mut config = SolarSystemConfig::default();
        config.bodies[1].visual_radius = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(SolarSystemError::NotPositive { field: "visual_radius", .. })
        ));

        let mut config = SolarSystemConfig::default();
        config.time_scale = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_and_bad_colours_rejected() {
        let mut config = SolarSystemConfig::default();
        config.bodies.clear();
        assert!(matches!(config.validate(), Err(SolarSystemError::NoBodies)));

        let mut config = SolarSystemConfig::default();
        config.bodies[3].color = "red".to_owned();
        assert!(matches!(config.validate(), Err(SolarSystemError::InvalidColor { .. })));

        let mut config = SolarSystemConfig::default();
        config.appearance = AppearanceConfig::Monochrome("#12".to_owned());
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_speed_is_clamped_not_rejected() {
        let mut config = SolarSystemConfig::default();
        config.bodies[0].angular_speed = 42.0;
        config.validate().unwrap();
        assert_eq!(config.to_model().speed(&"Mercury".into()), orbit::MAX_SPEED);
    }

    #[test]
    fn appearance_follows_config() {
        let config = SolarSystemConfig::default();
        let earth = config.appearance().surface(&"Earth".into());
        assert_eq!(Some(earth.color), parse_hex_color("#6B93D6"));

        let mut config = SolarSystemConfig::default();
        config.appearance = AppearanceConfig::Monochrome("#FFFFFF".to_owned());
        assert_eq!(config.appearance().surface(&"Mars".into()).color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn loads_partial_ron_file() {
        let path = std::env::temp_dir().join(format!("solar_system_test_{}.ron", std::process::id()));
        fs::write(
            &path,
            r##"(
                time_scale: 0.5,
                bodies: [
                    (id: "Alpha", orbital_radius: 12.0, angular_speed: 1.0, visual_radius: 1.0, color: "#FF0000"),
                ],
            )"##,
        ).unwrap();

        let loaded = SolarSystemConfig::load(&path);
        fs::remove_file(&path).unwrap();

        let config = loaded.unwrap();
        assert_eq!(config.bodies.len(), 1);
        assert!((config.time_scale - 0.5).abs() < 1e-6);
        assert_eq!(config.speed_step, 0.1);
        assert_eq!(config.starfield.count, 10_000);
    }
}
