use solar_system::config::SolarSystemConfig;
use solar_system::events::ControlEvent;
use solar_system::orbit::{BodyId, OrbitalModel};
use solar_system::resources::Selection;
use std::path::PathBuf;

/// The config shipped with the app
pub fn shipped_config() -> SolarSystemConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config").join("solar_system.ron");
    SolarSystemConfig::load(path).expect("shipped config should load")
}

/// Run `frames` frames of `dt` seconds using the model's own play flag
pub fn run_frames(model: &mut OrbitalModel, frames: usize, dt: f32) {
    for _ in 0..frames {
        model.tick(dt);
    }
}

// ==================================================================================
// Config tests
// ==================================================================================

#[test]
fn shipped_config_matches_builtin_defaults() {
    let shipped = shipped_config().to_model();
    let builtin = SolarSystemConfig::default().to_model();

    assert_eq!(shipped.bodies().len(), builtin.bodies().len());
    for (a, b) in shipped.bodies().iter().zip(builtin.bodies()) {
        assert_eq!(a.id, b.id);
        assert!((a.orbital_radius - b.orbital_radius).abs() < 1e-6);
        assert!((a.angular_speed - b.angular_speed).abs() < 1e-6);
        assert!((a.visual_radius - b.visual_radius).abs() < 1e-6);
    }
    assert!((shipped.time_scale() - builtin.time_scale()).abs() < 1e-6);
}

// ==================================================================================
// Session tests
// ==================================================================================

#[test]
fn pause_freezes_and_resume_continues() {
    let mut model = shipped_config().to_model();
    let mut selection = Selection::default();
    let earth = BodyId::from("Earth");

    run_frames(&mut model, 60, 1.0 / 60.0);
    let moved = model.position(&earth);
    assert!(moved.z > 0.0, "Earth should have moved counter to +z");

    ControlEvent::TogglePlay.apply(&mut model, &mut selection, 0.1);
    run_frames(&mut model, 60, 1.0 / 60.0);
    assert_eq!(model.position(&earth), moved);

    ControlEvent::TogglePlay.apply(&mut model, &mut selection, 0.1);
    run_frames(&mut model, 60, 1.0 / 60.0);
    assert!(model.position(&earth).z > moved.z);
}

#[test]
fn inner_planets_lead_outer_planets() {
    let mut model = shipped_config().to_model();
    run_frames(&mut model, 120, 1.0 / 60.0);

    let phases: Vec<f32> = model.bodies().iter().map(|b| b.phase_angle).collect();
    for pair in phases.windows(2) {
        assert!(pair[0] > pair[1], "Phases should decrease outward: {:?}", phases);
    }
}

#[test]
fn stopped_body_stays_put_while_others_move() {
    let mut model = shipped_config().to_model();
    let mut selection = Selection { index: 4 };
    let jupiter = BodyId::from("Jupiter");

    for _ in 0..20 {
        ControlEvent::NudgeSpeed(-0.1).apply(&mut model, &mut selection, 0.1);
    }
    assert_eq!(model.speed(&jupiter), 0.0);

    run_frames(&mut model, 30, 1.0 / 30.0);
    let pos = model.position(&jupiter);
    assert!((pos.x - 40.0).abs() < 1e-4 && pos.z.abs() < 1e-4);
    assert!(model.body(&BodyId::from("Mars")).unwrap().phase_angle > 0.0);
}

#[test]
fn reset_after_long_session() {
    let mut model = shipped_config().to_model();
    let mut selection = Selection::default();

    run_frames(&mut model, 10_000, 1.0 / 60.0);
    ControlEvent::Reset.apply(&mut model, &mut selection, 0.1);

    for body in model.bodies() {
        let pos = body.position();
        assert!((pos.x - body.orbital_radius).abs() < 1e-4);
        assert!(pos.z.abs() < 1e-4);
    }
    assert!(model.is_running());
}
