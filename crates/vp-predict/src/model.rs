//! The seam a concrete vehicle dynamics model implements.

use std::sync::Arc;

use vp_core::{VehicleControlInput, VehicleState};

use crate::error::PredictResult;
use crate::params::ParameterServer;

/// Time-stamped vehicle states, one per prediction timestep, in ascending
/// time order starting one timestep after the initial condition.
pub type VehicleTrajectory = Vec<(f64, VehicleState)>;

/// A pluggable vehicle dynamics model.
///
/// Implementations own their equations of motion and typically drive the
/// generic integration engine internally; this crate ships no concrete
/// model. The parameter server is handed over once, before any
/// prediction, so a model can read its physical constants (mass,
/// wheelbase, tire stiffness, ...).
pub trait VehicleMotionModel {
    /// Wire in the parameter source and load model constants.
    fn set_parameter_server(&mut self, server: Arc<dyn ParameterServer>) -> PredictResult<()>;

    /// Predict the trajectory under the given control sequence, holding
    /// each command constant for one `timestep`.
    ///
    /// Inputs have already been validated by the constraint layer.
    fn predict(
        &self,
        initial_state: &VehicleState,
        controls: &[VehicleControlInput],
        timestep: f64,
    ) -> PredictResult<VehicleTrajectory>;
}
