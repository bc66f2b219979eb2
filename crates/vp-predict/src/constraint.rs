//! Validation of states and control sequences against configured limits.

use vp_core::units::{self, Angle, AngularVel, Velocity, si};
use vp_core::{VehicleControlInput, VehicleState};

use crate::error::{ConstraintError, PredictResult};
use crate::params::{ParameterServer, required_parameter};

/// Physical limits the vehicle is trusted to respect, loaded once from the
/// parameter server. Angles are signed; speeds are forward-positive.
#[derive(Clone, Copy, Debug)]
pub struct ConstraintLimits {
    pub max_forward_speed: Velocity,
    pub min_forward_speed: Velocity,
    pub max_steering_angle: Angle,
    pub min_steering_angle: Angle,
    pub max_steering_angle_rate: AngularVel,
    pub max_trailer_angle: Angle,
    pub min_trailer_angle: Angle,
}

impl ConstraintLimits {
    /// Parameter names follow the deployment convention: all values SI.
    pub fn from_parameter_server(server: &dyn ParameterServer) -> PredictResult<Self> {
        Ok(Self {
            max_forward_speed: units::mps(required_parameter(server, "max_forward_speed")?),
            min_forward_speed: units::mps(required_parameter(server, "min_forward_speed")?),
            max_steering_angle: units::rad(required_parameter(server, "max_steering_angle")?),
            min_steering_angle: units::rad(required_parameter(server, "min_steering_angle")?),
            max_steering_angle_rate: units::radps(required_parameter(
                server,
                "max_steering_angle_rate",
            )?),
            max_trailer_angle: units::rad(required_parameter(server, "max_trailer_angle")?),
            min_trailer_angle: units::rad(required_parameter(server, "min_trailer_angle")?),
        })
    }
}

/// Gatekeeper between callers and the numerical engines.
///
/// The engines themselves perform no validation; everything that must hold
/// before integration starts is enforced here.
#[derive(Clone, Debug)]
pub struct ConstraintChecker {
    limits: ConstraintLimits,
}

impl ConstraintChecker {
    pub fn new(server: &dyn ParameterServer) -> PredictResult<Self> {
        Ok(Self {
            limits: ConstraintLimits::from_parameter_server(server)?,
        })
    }

    pub fn limits(&self) -> &ConstraintLimits {
        &self.limits
    }

    /// Check the fields of the initial state that the limits constrain.
    pub fn validate_initial_state(&self, state: &VehicleState) -> Result<(), ConstraintError> {
        in_bounds(
            "longitudinal velocity",
            state.longitudinal_vel,
            si::meters_per_second(self.limits.min_forward_speed),
            si::meters_per_second(self.limits.max_forward_speed),
        )?;
        in_bounds(
            "steering angle",
            state.steering_angle,
            si::radians(self.limits.min_steering_angle),
            si::radians(self.limits.max_steering_angle),
        )?;
        in_bounds(
            "trailer angle",
            state.trailer_angle,
            si::radians(self.limits.min_trailer_angle),
            si::radians(self.limits.max_trailer_angle),
        )?;
        Ok(())
    }

    /// Check a control sequence against the limits.
    ///
    /// The steering rate of the first command is measured against the
    /// current steering angle of `state`; later commands are measured
    /// against their predecessor.
    pub fn validate_control_inputs(
        &self,
        state: &VehicleState,
        controls: &[VehicleControlInput],
        timestep: f64,
    ) -> Result<(), ConstraintError> {
        if controls.is_empty() {
            return Err(ConstraintError::NoControlInputs);
        }

        let rate_limit = si::radians_per_second(self.limits.max_steering_angle_rate);
        let mut prev_steering = state.steering_angle;

        for (index, control) in controls.iter().enumerate() {
            in_bounds(
                "target velocity",
                control.target_velocity,
                si::meters_per_second(self.limits.min_forward_speed),
                si::meters_per_second(self.limits.max_forward_speed),
            )?;
            in_bounds(
                "target steering angle",
                control.target_steering_angle,
                si::radians(self.limits.min_steering_angle),
                si::radians(self.limits.max_steering_angle),
            )?;

            let rate = (control.target_steering_angle - prev_steering).abs() / timestep;
            if rate > rate_limit {
                return Err(ConstraintError::SteeringRateExceeded {
                    index,
                    rate,
                    limit: rate_limit,
                });
            }
            prev_steering = control.target_steering_angle;
        }

        Ok(())
    }
}

fn in_bounds(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConstraintError> {
    if value < min || value > max {
        return Err(ConstraintError::OutOfBounds {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictError;
    use crate::params::MapParameterServer;

    fn test_server() -> MapParameterServer {
        MapParameterServer::new()
            .with("max_forward_speed", 35.0)
            .with("min_forward_speed", 0.0)
            .with("max_steering_angle", 0.6)
            .with("min_steering_angle", -0.6)
            .with("max_steering_angle_rate", 0.5)
            .with("max_trailer_angle", 0.8)
            .with("min_trailer_angle", -0.8)
    }

    fn nominal_state() -> VehicleState {
        VehicleState {
            longitudinal_vel: 12.0,
            steering_angle: 0.05,
            ..Default::default()
        }
    }

    #[test]
    fn missing_limit_is_reported() {
        let server = MapParameterServer::new().with("max_forward_speed", 35.0);
        let err = ConstraintChecker::new(&server).err().unwrap();
        assert!(matches!(err, PredictError::MissingParameter { .. }));
    }

    #[test]
    fn nominal_state_accepted() {
        let checker = ConstraintChecker::new(&test_server()).unwrap();
        assert!(checker.validate_initial_state(&nominal_state()).is_ok());
    }

    #[test]
    fn overspeed_state_rejected() {
        let checker = ConstraintChecker::new(&test_server()).unwrap();
        let state = VehicleState {
            longitudinal_vel: 40.0,
            ..nominal_state()
        };
        let err = checker.validate_initial_state(&state).unwrap_err();
        assert!(matches!(
            err,
            ConstraintError::OutOfBounds {
                field: "longitudinal velocity",
                ..
            }
        ));
    }

    #[test]
    fn oversteered_state_rejected() {
        let checker = ConstraintChecker::new(&test_server()).unwrap();
        let state = VehicleState {
            steering_angle: -0.7,
            ..nominal_state()
        };
        let err = checker.validate_initial_state(&state).unwrap_err();
        assert!(matches!(
            err,
            ConstraintError::OutOfBounds {
                field: "steering angle",
                ..
            }
        ));
    }

    #[test]
    fn control_sequence_accepted() {
        let checker = ConstraintChecker::new(&test_server()).unwrap();
        let controls = vec![
            VehicleControlInput {
                target_steering_angle: 0.06,
                target_velocity: 12.5,
            },
            VehicleControlInput {
                target_steering_angle: 0.08,
                target_velocity: 13.0,
            },
        ];
        assert!(
            checker
                .validate_control_inputs(&nominal_state(), &controls, 0.1)
                .is_ok()
        );
    }

    #[test]
    fn empty_control_sequence_rejected() {
        let checker = ConstraintChecker::new(&test_server()).unwrap();
        let err = checker
            .validate_control_inputs(&nominal_state(), &[], 0.1)
            .unwrap_err();
        assert_eq!(err, ConstraintError::NoControlInputs);
    }

    #[test]
    fn command_out_of_bounds_rejected() {
        let checker = ConstraintChecker::new(&test_server()).unwrap();
        let controls = vec![VehicleControlInput {
            target_steering_angle: 0.05,
            target_velocity: 50.0,
        }];
        let err = checker
            .validate_control_inputs(&nominal_state(), &controls, 0.1)
            .unwrap_err();
        assert!(matches!(
            err,
            ConstraintError::OutOfBounds {
                field: "target velocity",
                ..
            }
        ));
    }

    #[test]
    fn steering_rate_limit_enforced() {
        let checker = ConstraintChecker::new(&test_server()).unwrap();

        // First command checked against the state's current steering angle:
        // |0.3 - 0.05| / 0.1 = 2.5 rad/s > 0.5 rad/s.
        let controls = vec![VehicleControlInput {
            target_steering_angle: 0.3,
            target_velocity: 12.0,
        }];
        let err = checker
            .validate_control_inputs(&nominal_state(), &controls, 0.1)
            .unwrap_err();
        assert!(matches!(
            err,
            ConstraintError::SteeringRateExceeded { index: 0, .. }
        ));

        // Later commands checked against their predecessor.
        let controls = vec![
            VehicleControlInput {
                target_steering_angle: 0.08,
                target_velocity: 12.0,
            },
            VehicleControlInput {
                target_steering_angle: 0.2,
                target_velocity: 12.0,
            },
        ];
        let err = checker
            .validate_control_inputs(&nominal_state(), &controls, 0.1)
            .unwrap_err();
        assert!(matches!(
            err,
            ConstraintError::SteeringRateExceeded { index: 1, .. }
        ));
    }
}
