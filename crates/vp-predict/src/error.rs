//! Error types for the prediction surface.

use thiserror::Error;
use vp_core::CoreError;
use vp_kinematics::DomainError;

pub type PredictResult<T> = Result<T, PredictError>;

/// Errors surfaced by the prediction facade.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error("Missing parameter: {name}")]
    MissingParameter { name: &'static str },

    #[error("timestep must be positive, got {timestep} s")]
    NonPositiveTimestep { timestep: f64 },

    #[error("timestep {timestep} s exceeds the prediction horizon {delta_t} s")]
    TimestepExceedsHorizon { timestep: f64, delta_t: f64 },

    #[error(transparent)]
    Kinematics(#[from] DomainError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Model error: {message}")]
    Model { message: String },
}

/// Rejection of a state or control sequence by the constraint checker.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstraintError {
    #[error("{field} {value} outside [{min}, {max}]")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error(
        "steering command rate {rate} rad/s at input {index} exceeds the \
         limit {limit} rad/s"
    )]
    SteeringRateExceeded { index: usize, rate: f64, limit: f64 },

    #[error("control input sequence is empty")]
    NoControlInputs,
}
