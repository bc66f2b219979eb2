//! Prediction surface for vehicle motion forecasting.
//!
//! Provides:
//! - `ParameterServer` trait + in-memory backend for physical constants
//! - `VehicleMotionModel` trait, the seam a concrete dynamics model plugs
//!   into
//! - `ConstraintChecker` validating states and control sequences against
//!   configured limits before they reach any numerical engine
//! - `VehiclePredictor`, the facade exposing the two prediction entry
//!   points: freeze-last-state extrapolation and controlled prediction

pub mod constraint;
pub mod error;
pub mod model;
pub mod params;
pub mod predictor;

pub use constraint::{ConstraintChecker, ConstraintLimits};
pub use error::{ConstraintError, PredictError, PredictResult};
pub use model::{VehicleMotionModel, VehicleTrajectory};
pub use params::{MapParameterServer, ParameterServer, required_parameter};
pub use predictor::VehiclePredictor;
