use thiserror::Error;

use crate::quantity::KinematicQuantity;

pub type KinematicsResult<T> = Result<T, DomainError>;

/// Rejection of a kinematics query whose inputs lie outside the physical
/// domain of the constant-acceleration equations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{quantity} must be non-negative, got {value}")]
    NegativeQuantity {
        quantity: KinematicQuantity,
        value: f64,
    },

    #[error(
        "acceleration {acceleration} m/s^2 contradicts the velocity change \
         {v_initial} -> {v_final} m/s"
    )]
    InconsistentAcceleration {
        v_initial: f64,
        v_final: f64,
        acceleration: f64,
    },

    #[error("no physically valid solution for {quantity}: {reason}")]
    NoPhysicalSolution {
        quantity: KinematicQuantity,
        reason: &'static str,
    },

    #[error("output and unavailable must name two distinct quantities, both were {quantity}")]
    AmbiguousQuery { quantity: KinematicQuantity },
}
