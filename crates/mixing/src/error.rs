use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("gray saturation factor must be between 0 and 1 but was {0}")]
    InvalidGrayFactor(f32),
}
