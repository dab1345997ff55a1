use amethyst::ecs::{Component, DenseVecStorage};

/// Rotation about the local y axis in rad/s. Only turns while the animation is playing.
#[derive(Shrinkwrap, Component, Debug, Copy, Clone)]
#[shrinkwrap(mutable)]
pub struct Spin(pub f32);
