//! Vehicle state and control input data model.
//!
//! The full vehicle state carries every dynamic variable a motion model may
//! evolve, including slots that are only updated once per prediction step
//! (previous command values). Models exchange it with the integration
//! engine through the flat vector form, using the field order documented
//! on [`VehicleState::to_vector`].

use nalgebra::DVector;

use crate::error::{CoreError, CoreResult};

/// Number of components in the flat vector form of a [`VehicleState`].
pub const STATE_LEN: usize = 12;

/// Full dynamic state of the vehicle at one instant.
///
/// Positions are in the global map frame. Units: meters, meters/second,
/// radians, radians/second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleState {
    /// Global x position of the vehicle center of mass (m)
    pub x_pos: f64,
    /// Global y position of the vehicle center of mass (m)
    pub y_pos: f64,
    /// Heading in the global frame (rad)
    pub heading: f64,
    /// Velocity along the vehicle center line (m/s)
    pub longitudinal_vel: f64,
    /// Velocity perpendicular to the vehicle center line (m/s)
    pub lateral_vel: f64,
    /// Rate of change of heading (rad/s)
    pub yaw_rate: f64,
    /// Front wheel rotation rate (rad/s)
    pub front_wheel_rate: f64,
    /// Rear wheel rotation rate (rad/s)
    pub rear_wheel_rate: f64,
    /// Front wheel steering angle (rad)
    pub steering_angle: f64,
    /// Trailer angle relative to the vehicle center line (rad)
    pub trailer_angle: f64,
    /// Steering command applied during the previous timestep (rad)
    pub prev_steering_cmd: f64,
    /// Velocity command applied during the previous timestep (m/s)
    pub prev_velocity_cmd: f64,
}

impl VehicleState {
    /// Flatten to the vector form used by the integration engine.
    ///
    /// Component order: x, y, heading, longitudinal velocity, lateral
    /// velocity, yaw rate, front wheel rate, rear wheel rate, steering
    /// angle, trailer angle, previous steering command, previous velocity
    /// command.
    pub fn to_vector(&self) -> DVector<f64> {
        DVector::from_vec(vec![
            self.x_pos,
            self.y_pos,
            self.heading,
            self.longitudinal_vel,
            self.lateral_vel,
            self.yaw_rate,
            self.front_wheel_rate,
            self.rear_wheel_rate,
            self.steering_angle,
            self.trailer_angle,
            self.prev_steering_cmd,
            self.prev_velocity_cmd,
        ])
    }

    /// Rebuild from the vector form. The vector length must be [`STATE_LEN`].
    pub fn from_vector(v: &DVector<f64>) -> CoreResult<Self> {
        if v.len() != STATE_LEN {
            return Err(CoreError::LengthMismatch {
                what: "vehicle state vector",
                expected: STATE_LEN,
                actual: v.len(),
            });
        }
        Ok(Self {
            x_pos: v[0],
            y_pos: v[1],
            heading: v[2],
            longitudinal_vel: v[3],
            lateral_vel: v[4],
            yaw_rate: v[5],
            front_wheel_rate: v[6],
            rear_wheel_rate: v[7],
            steering_angle: v[8],
            trailer_angle: v[9],
            prev_steering_cmd: v[10],
            prev_velocity_cmd: v[11],
        })
    }
}

/// One control command, held constant over a single prediction timestep.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleControlInput {
    /// Commanded front wheel steering angle (rad)
    pub target_steering_angle: f64,
    /// Commanded forward velocity (m/s)
    pub target_velocity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_round_trip() {
        let state = VehicleState {
            x_pos: 1.0,
            y_pos: -2.0,
            heading: 0.5,
            longitudinal_vel: 10.0,
            lateral_vel: 0.1,
            yaw_rate: 0.05,
            front_wheel_rate: 30.0,
            rear_wheel_rate: 29.5,
            steering_angle: 0.02,
            trailer_angle: 0.0,
            prev_steering_cmd: 0.01,
            prev_velocity_cmd: 9.8,
        };

        let v = state.to_vector();
        assert_eq!(v.len(), STATE_LEN);
        let back = VehicleState::from_vector(&v).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn from_vector_rejects_wrong_length() {
        let short = DVector::from_vec(vec![0.0; STATE_LEN - 1]);
        let err = VehicleState::from_vector(&short).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Length mismatch"));
    }
}
