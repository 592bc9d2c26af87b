use thiserror::Error;

/// Invalid slider configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("slider needs at least one segment")]
    NoSegments,
    #[error("radius must be a positive finite number, got {0}")]
    InvalidRadius(f64),
    #[error("{field} must be a non-negative finite number, got {value}")]
    NegativeSize { field: &'static str, value: f64 },
    #[error("max angle length must be positive, got {0}")]
    InvalidMaxAngleLength(f64),
    #[error("angles must be finite, got start {start_angle} and length {angle_length}")]
    NonFiniteRange { start_angle: f64, angle_length: f64 },
    #[error("invalid color {0:?}, expected 3, 6 or 8 hex digits")]
    InvalidColor(String),
}
