use amethyst::config::ConfigError;
use thiserror::Error;

pub type SolarResult<T> = Result<T, SolarSystemError>;

#[derive(Error, Debug)]
pub enum SolarSystemError {
    #[error("Could not load config: {0}")]
    Config(#[from] ConfigError),

    #[error("No bodies configured")]
    NoBodies,

    #[error("Duplicate body id: {0}")]
    DuplicateBody(String),

    #[error("{owner}: {field} must be positive and finite, got {value}")]
    NotPositive {
        owner: String,
        field: &'static str,
        value: f32,
    },

    #[error("{owner}: invalid colour {color:?}, expected #RRGGBB")]
    InvalidColor {
        owner: String,
        color: String,
    },
}
