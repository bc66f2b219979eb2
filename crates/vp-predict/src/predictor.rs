//! The facade exposing the two prediction entry points.

use std::sync::Arc;

use tracing::debug;
use vp_core::{VehicleControlInput, VehicleState};
use vp_kinematics::{KinematicQuantity, solve};

use crate::constraint::ConstraintChecker;
use crate::error::{PredictError, PredictResult};
use crate::model::{VehicleMotionModel, VehicleTrajectory};
use crate::params::ParameterServer;

/// Owns a motion model and the constraint checker guarding it.
///
/// Construction wires the parameter server into both. The predictor is an
/// ordinary owned value: build one per vehicle configuration and share it
/// behind whatever synchronization the caller already has. Prediction
/// itself takes `&self` and holds no interior mutability.
pub struct VehiclePredictor<M: VehicleMotionModel> {
    model: M,
    constraints: ConstraintChecker,
}

impl<M: VehicleMotionModel> VehiclePredictor<M> {
    pub fn new(mut model: M, server: Arc<dyn ParameterServer>) -> PredictResult<Self> {
        let constraints = ConstraintChecker::new(server.as_ref())?;
        model.set_parameter_server(server)?;
        Ok(Self { model, constraints })
    }

    pub fn constraints(&self) -> &ConstraintChecker {
        &self.constraints
    }

    /// Extrapolate the current state forward with no active control.
    ///
    /// The last known state is frozen: velocities, heading, steering and
    /// wheel speeds are held, and the vehicle travels in a straight line
    /// along its current velocity direction. The per-step travel distance
    /// comes from the kinematics solver's zero-acceleration distance form.
    /// Produces `floor(delta_t / timestep)` states stamped `timestep,
    /// 2*timestep, ...`.
    pub fn predict(
        &self,
        initial_state: &VehicleState,
        timestep: f64,
        delta_t: f64,
    ) -> PredictResult<VehicleTrajectory> {
        validate_timestep(timestep)?;
        if timestep > delta_t {
            return Err(PredictError::TimestepExceedsHorizon { timestep, delta_t });
        }
        self.constraints.validate_initial_state(initial_state)?;

        let step_count = (delta_t / timestep).floor() as usize;
        debug!(step_count, timestep, "freeze-state extrapolation");

        let speed = initial_state
            .longitudinal_vel
            .hypot(initial_state.lateral_vel);
        let step_distance = solve(
            KinematicQuantity::Distance,
            KinematicQuantity::FinalVelocity,
            speed,
            0.0,
            timestep,
        )?;
        // Travel direction: heading plus the slip implied by the frozen
        // velocity components.
        let course = initial_state.heading
            + initial_state
                .lateral_vel
                .atan2(initial_state.longitudinal_vel);

        let mut trajectory = VehicleTrajectory::with_capacity(step_count);
        let mut state = *initial_state;
        for step in 1..=step_count {
            state.x_pos += step_distance * course.cos();
            state.y_pos += step_distance * course.sin();
            trajectory.push((step as f64 * timestep, state));
        }
        Ok(trajectory)
    }

    /// Predict under a control command sequence via the dynamics model.
    ///
    /// The state and the command sequence are validated against the
    /// configured limits first; the model receives only contract-clean
    /// inputs.
    pub fn predict_with_controls(
        &self,
        initial_state: &VehicleState,
        controls: &[VehicleControlInput],
        timestep: f64,
    ) -> PredictResult<VehicleTrajectory> {
        validate_timestep(timestep)?;
        self.constraints.validate_initial_state(initial_state)?;
        self.constraints
            .validate_control_inputs(initial_state, controls, timestep)?;

        debug!(
            inputs = controls.len(),
            timestep, "controlled prediction via model"
        );
        self.model.predict(initial_state, controls, timestep)
    }
}

fn validate_timestep(timestep: f64) -> PredictResult<()> {
    if timestep <= 0.0 {
        return Err(PredictError::NonPositiveTimestep { timestep });
    }
    Ok(())
}
