use amethyst::core::math::Vector3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;

pub const TIME_SCALE: f32 = 0.1;    // Cosmetic: real seconds -> radians per unit speed
pub const MIN_SPEED: f32 = 0.0;
pub const MAX_SPEED: f32 = 10.0;

#[derive(Shrinkwrap, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub String);

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One orbiting body. Only `phase_angle` moves it; `angular_speed` is user adjustable.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub orbital_radius: f32,
    pub angular_speed: f32,
    pub phase_angle: f32,
    pub visual_radius: f32,
}

impl Body {
    pub fn new(id: BodyId, orbital_radius: f32, angular_speed: f32, visual_radius: f32) -> Self {
        Self {
            id,
            orbital_radius,
            angular_speed: clamp_speed(angular_speed),
            phase_angle: 0.0,
            visual_radius,
        }
    }

    // All orbits are coplanar, so y is always 0.
    pub fn position(&self) -> Vector3<f32> {
        Vector3::new(
            self.orbital_radius * self.phase_angle.cos(),
            0.0,
            self.orbital_radius * self.phase_angle.sin(),
        )
    }
}

/// Negative or non-finite elapsed time counts as 0.
pub fn sanitize_step(elapsed_seconds: f32) -> f32 {
    if elapsed_seconds.is_finite() {
        elapsed_seconds.max(0.0)
    } else {
        0.0
    }
}

pub fn clamp_speed(speed: f32) -> f32 {
    if speed.is_nan() {
        MIN_SPEED
    } else {
        speed.max(MIN_SPEED).min(MAX_SPEED)
    }
}

/// Deterministic circular-orbit animation state.
///
/// The body set is fixed at construction. Nothing in here knows about entities or
/// meshes; whoever draws the bodies keeps its own `BodyId -> handle` mapping and
/// asks for positions after each tick.
#[derive(Debug, Clone)]
pub struct OrbitalModel {
    bodies: Vec<Body>,
    time_scale: f32,
    running: bool,
}

impl OrbitalModel {
    /// Panics on duplicate ids or on radii that are not positive and finite.
    pub fn new(bodies: Vec<Body>) -> Self {
        for (i, body) in bodies.iter().enumerate() {
            assert!(
                bodies[i + 1..].iter().all(|o| o.id != body.id),
                "Duplicate body id `{}`", body.id
            );
            assert!(
                body.orbital_radius.is_finite() && body.orbital_radius > 0.0,
                "Body `{}` has orbital radius {}", body.id, body.orbital_radius
            );
            assert!(
                body.visual_radius.is_finite() && body.visual_radius > 0.0,
                "Body `{}` has visual radius {}", body.id, body.visual_radius
            );
        }

        Self {
            bodies,
            time_scale: TIME_SCALE,
            running: true,
        }
    }

    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: &BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == *id)
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Phases are kept in `[0, 2π)` so f32 precision holds over long sessions.
    /// Negative or non-finite deltas (clock hiccups) are dropped; any other delta is applied in full.
    pub fn advance(&mut self, elapsed_seconds: f32, running: bool) {
        if !running {
            return;
        }

        let dt = sanitize_step(elapsed_seconds);
        if dt == 0.0 {
            return;
        }

        let scale = self.time_scale;
        for body in self.bodies.iter_mut() {
            body.phase_angle = (body.phase_angle + body.angular_speed * dt * scale).rem_euclid(2.0 * PI);
        }
    }

    /// Advance using the model's own play/pause flag.
    pub fn tick(&mut self, elapsed_seconds: f32) {
        let running = self.running;
        self.advance(elapsed_seconds, running);
    }

    pub fn position(&self, id: &BodyId) -> Vector3<f32> {
        self.expect_body(id).position()
    }

    pub fn speed(&self, id: &BodyId) -> f32 {
        self.expect_body(id).angular_speed
    }

    /// Out of range speeds are clamped into `[MIN_SPEED, MAX_SPEED]`. Returns the stored speed.
    pub fn set_speed(&mut self, id: &BodyId, speed: f32) -> f32 {
        let body = self.bodies.iter_mut()
            .find(|b| b.id == *id)
            .unwrap_or_else(|| panic!("No body with id `{}`", id));

        body.angular_speed = clamp_speed(speed);
        body.angular_speed
    }

    // Speeds and the play flag are left alone.
    pub fn reset(&mut self) {
        for body in self.bodies.iter_mut() {
            body.phase_angle = 0.0;
        }
    }

    pub fn toggle_play(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.running = playing;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // The body set is fixed and known up front, so a miss is a caller bug.
    fn expect_body(&self, id: &BodyId) -> &Body {
        self.body(id).unwrap_or_else(|| panic!("No body with id `{}`", id))
    }
}

impl Default for OrbitalModel {
    fn default() -> Self {
        crate::config::SolarSystemConfig::default().to_model()
    }
}
