//! The `solve` dispatch over all (output, unavailable) quantity pairs.

use crate::error::{DomainError, KinematicsResult};
use crate::quantity::KinematicQuantity::{
    self, Acceleration, Distance, FinalVelocity, InitialVelocity, Time,
};

/// Solve one constant-acceleration kinematic quantity from three others.
///
/// `output` names the quantity to compute, `unavailable` the quantity that
/// is excluded from the inputs. The three remaining quantities are passed
/// as `p1..p3` in canonical order (initial velocity, final velocity,
/// acceleration, distance, time) with the two excluded quantities removed.
///
/// For example, solving `d = v_i*t + 0.5*a*t^2` reads:
///
/// ```
/// use vp_kinematics::{KinematicQuantity, solve};
///
/// let d = solve(
///     KinematicQuantity::Distance,
///     KinematicQuantity::FinalVelocity,
///     15.1666,  // v_i
///     2.5,      // a
///     2.4,      // t
/// ).unwrap();
/// assert!((d - 43.598).abs() < 1e-2);
/// ```
///
/// Every input other than acceleration must be non-negative, and an
/// acceleration provided alongside both velocities must match the sign of
/// the velocity change. Quadratic time solutions select the smallest
/// non-negative root; the zero-acceleration degenerate form `d = v*t` is
/// handled explicitly rather than through the quadratic formula.
pub fn solve(
    output: KinematicQuantity,
    unavailable: KinematicQuantity,
    p1: f64,
    p2: f64,
    p3: f64,
) -> KinematicsResult<f64> {
    if output == unavailable {
        return Err(DomainError::AmbiguousQuery { quantity: output });
    }
    validate_signs(output, unavailable, [p1, p2, p3])?;

    match (output, unavailable) {
        // v_i from d = v_i*t + 0.5*a*t^2 and friends
        (InitialVelocity, FinalVelocity) => {
            let (a, d, t) = (p1, p2, p3);
            Ok(d / t - 0.5 * a * t)
        }
        (InitialVelocity, Acceleration) => {
            let (v_f, d, t) = (p1, p2, p3);
            Ok(2.0 * d / t - v_f)
        }
        (InitialVelocity, Distance) => {
            let (v_f, a, t) = (p1, p2, p3);
            Ok(v_f - a * t)
        }
        (InitialVelocity, Time) => {
            let (v_f, a, d) = (p1, p2, p3);
            speed_from_squared(v_f * v_f - 2.0 * a * d, InitialVelocity)
        }

        // v_f
        (FinalVelocity, InitialVelocity) => {
            let (a, d, t) = (p1, p2, p3);
            Ok(d / t + 0.5 * a * t)
        }
        (FinalVelocity, Acceleration) => {
            let (v_i, d, t) = (p1, p2, p3);
            Ok(2.0 * d / t - v_i)
        }
        (FinalVelocity, Distance) => {
            let (v_i, a, t) = (p1, p2, p3);
            Ok(v_i + a * t)
        }
        (FinalVelocity, Time) => {
            let (v_i, a, d) = (p1, p2, p3);
            speed_from_squared(v_i * v_i + 2.0 * a * d, FinalVelocity)
        }

        // a
        (Acceleration, InitialVelocity) => {
            let (v_f, d, t) = (p1, p2, p3);
            Ok(2.0 * (v_f * t - d) / (t * t))
        }
        (Acceleration, FinalVelocity) => {
            let (v_i, d, t) = (p1, p2, p3);
            Ok(2.0 * (d - v_i * t) / (t * t))
        }
        (Acceleration, Distance) => {
            let (v_i, v_f, t) = (p1, p2, p3);
            Ok((v_f - v_i) / t)
        }
        (Acceleration, Time) => {
            let (v_i, v_f, d) = (p1, p2, p3);
            Ok((v_f * v_f - v_i * v_i) / (2.0 * d))
        }

        // d
        (Distance, InitialVelocity) => {
            let (v_f, a, t) = (p1, p2, p3);
            Ok(v_f * t - 0.5 * a * t * t)
        }
        (Distance, FinalVelocity) => {
            let (v_i, a, t) = (p1, p2, p3);
            Ok(v_i * t + 0.5 * a * t * t)
        }
        (Distance, Acceleration) => {
            let (v_i, v_f, t) = (p1, p2, p3);
            Ok(0.5 * (v_i + v_f) * t)
        }
        (Distance, Time) => {
            let (v_i, v_f, a) = (p1, p2, p3);
            check_accel_sign(v_i, v_f, a)?;
            if a == 0.0 {
                // v_i == v_f here; any distance satisfies the relation
                return Err(DomainError::NoPhysicalSolution {
                    quantity: Distance,
                    reason: "underdetermined with zero acceleration and equal velocities",
                });
            }
            Ok((v_f * v_f - v_i * v_i) / (2.0 * a))
        }

        // t
        (Time, InitialVelocity) => {
            let (v_f, a, d) = (p1, p2, p3);
            time_reaching_final(v_f, a, d)
        }
        (Time, FinalVelocity) => {
            let (v_i, a, d) = (p1, p2, p3);
            time_from_initial(v_i, a, d)
        }
        (Time, Acceleration) => {
            let (v_i, v_f, d) = (p1, p2, p3);
            if v_i + v_f == 0.0 {
                return Err(DomainError::NoPhysicalSolution {
                    quantity: Time,
                    reason: "both velocities are zero",
                });
            }
            Ok(2.0 * d / (v_i + v_f))
        }
        (Time, Distance) => {
            let (v_i, v_f, a) = (p1, p2, p3);
            check_accel_sign(v_i, v_f, a)?;
            if a == 0.0 {
                // v_i == v_f here; any time satisfies the relation
                return Err(DomainError::NoPhysicalSolution {
                    quantity: Time,
                    reason: "underdetermined with zero acceleration and equal velocities",
                });
            }
            Ok((v_f - v_i) / a)
        }

        // output == unavailable was rejected above
        _ => unreachable!("all distinct quantity pairs are matched"),
    }
}

/// Reject any provided quantity other than acceleration that is negative.
fn validate_signs(
    output: KinematicQuantity,
    unavailable: KinematicQuantity,
    provided: [f64; 3],
) -> KinematicsResult<()> {
    let mut index = 0;
    for quantity in KinematicQuantity::CANONICAL {
        if quantity == output || quantity == unavailable {
            continue;
        }
        let value = provided[index];
        index += 1;
        if quantity != Acceleration && value < 0.0 {
            return Err(DomainError::NegativeQuantity { quantity, value });
        }
    }
    Ok(())
}

/// Reject an acceleration whose sign contradicts the change from `v_i` to
/// `v_f`. Zero acceleration with unequal velocities is a contradiction as
/// well.
fn check_accel_sign(v_i: f64, v_f: f64, a: f64) -> KinematicsResult<()> {
    let dv = v_f - v_i;
    if (dv > 0.0 && a <= 0.0) || (dv < 0.0 && a >= 0.0) {
        return Err(DomainError::InconsistentAcceleration {
            v_initial: v_i,
            v_final: v_f,
            acceleration: a,
        });
    }
    Ok(())
}

/// Recover a speed from its square, rejecting negative radicands (an
/// acceleration/distance pair no non-negative speed can satisfy).
fn speed_from_squared(v_squared: f64, quantity: KinematicQuantity) -> KinematicsResult<f64> {
    if v_squared < 0.0 {
        return Err(DomainError::NoPhysicalSolution {
            quantity,
            reason: "the squared-velocity form has no real root",
        });
    }
    Ok(v_squared.sqrt())
}

/// Time to cover `d` ending at `v_f` under acceleration `a`.
///
/// From `d = v_f*t - 0.5*a*t^2` the quadratic formula gives
/// `t = (v_f +/- sqrt(v_f^2 - 2*a*d)) / a`. The smaller root is the
/// physical one: it is always non-negative and leaves the implied initial
/// velocity `v_f - a*t = sqrt(v_f^2 - 2*a*d)` non-negative, while the
/// larger root runs the motion through a negative initial velocity.
fn time_reaching_final(v_f: f64, a: f64, d: f64) -> KinematicsResult<f64> {
    if a == 0.0 {
        return constant_speed_time(v_f, d);
    }
    let radicand = v_f * v_f - 2.0 * a * d;
    if radicand < 0.0 {
        return Err(DomainError::NoPhysicalSolution {
            quantity: Time,
            reason: "the quadratic has no real root",
        });
    }
    Ok((v_f - radicand.sqrt()) / a)
}

/// Time to cover `d` starting at `v_i` under acceleration `a`.
///
/// From `d = v_i*t + 0.5*a*t^2` the quadratic formula gives
/// `t = (-v_i +/- sqrt(v_i^2 + 2*a*d)) / a`. The `+` root is the physical
/// one for either sign of `a`; the other root is negative (accelerating)
/// or places the crossing after the motion has reversed (decelerating).
fn time_from_initial(v_i: f64, a: f64, d: f64) -> KinematicsResult<f64> {
    if a == 0.0 {
        return constant_speed_time(v_i, d);
    }
    let radicand = v_i * v_i + 2.0 * a * d;
    if radicand < 0.0 {
        return Err(DomainError::NoPhysicalSolution {
            quantity: Time,
            reason: "the motion stops before covering the distance",
        });
    }
    Ok((radicand.sqrt() - v_i) / a)
}

/// Degenerate `d = v*t` form used by both time solutions when `a` is zero.
fn constant_speed_time(v: f64, d: f64) -> KinematicsResult<f64> {
    if v > 0.0 {
        Ok(d / v)
    } else if d == 0.0 {
        Err(DomainError::NoPhysicalSolution {
            quantity: Time,
            reason: "underdetermined: at rest over zero distance",
        })
    } else {
        Err(DomainError::NoPhysicalSolution {
            quantity: Time,
            reason: "the distance is never covered at zero velocity",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Consistent dataset: v_f = v_i + a*t and d = 0.5*(v_i + v_f)*t
    const D: f64 = 43.6;
    const A: f64 = 2.5;
    const T: f64 = 2.4;
    const V_I: f64 = 15.16666666;
    const V_F: f64 = 21.16666666;
    const TOL: f64 = 1e-7;

    fn assert_near(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOL,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn solve_initial_velocity_all_paths() {
        assert_near(solve(InitialVelocity, FinalVelocity, A, D, T).unwrap(), V_I);
        assert_near(solve(InitialVelocity, Acceleration, V_F, D, T).unwrap(), V_I);
        assert_near(solve(InitialVelocity, Distance, V_F, A, T).unwrap(), V_I);
        assert_near(solve(InitialVelocity, Time, V_F, A, D).unwrap(), V_I);
    }

    #[test]
    fn solve_final_velocity_all_paths() {
        assert_near(solve(FinalVelocity, InitialVelocity, A, D, T).unwrap(), V_F);
        assert_near(solve(FinalVelocity, Acceleration, V_I, D, T).unwrap(), V_F);
        assert_near(solve(FinalVelocity, Distance, V_I, A, T).unwrap(), V_F);
        assert_near(solve(FinalVelocity, Time, V_I, A, D).unwrap(), V_F);
    }

    #[test]
    fn solve_acceleration_all_paths() {
        assert_near(solve(Acceleration, InitialVelocity, V_F, D, T).unwrap(), A);
        assert_near(solve(Acceleration, FinalVelocity, V_I, D, T).unwrap(), A);
        assert_near(solve(Acceleration, Distance, V_I, V_F, T).unwrap(), A);
        assert_near(solve(Acceleration, Time, V_I, V_F, D).unwrap(), A);
    }

    #[test]
    fn solve_distance_all_paths() {
        assert_near(solve(Distance, InitialVelocity, V_F, A, T).unwrap(), D);
        assert_near(solve(Distance, FinalVelocity, V_I, A, T).unwrap(), D);
        assert_near(solve(Distance, Acceleration, V_I, V_F, T).unwrap(), D);
        assert_near(solve(Distance, Time, V_I, V_F, A).unwrap(), D);
    }

    #[test]
    fn solve_time_all_paths() {
        assert_near(solve(Time, InitialVelocity, V_F, A, D).unwrap(), T);
        assert_near(solve(Time, FinalVelocity, V_I, A, D).unwrap(), T);
        assert_near(solve(Time, Acceleration, V_I, V_F, D).unwrap(), T);
        assert_near(solve(Time, Distance, V_I, V_F, A).unwrap(), T);
    }

    #[test]
    fn negative_inputs_rejected() {
        let err = solve(Distance, FinalVelocity, -1.0, A, T).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NegativeQuantity {
                quantity: InitialVelocity,
                ..
            }
        ));

        let err = solve(FinalVelocity, Acceleration, V_I, -5.0, T).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NegativeQuantity {
                quantity: Distance,
                ..
            }
        ));

        let err = solve(Acceleration, Distance, V_I, V_F, -0.1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NegativeQuantity { quantity: Time, .. }
        ));
    }

    #[test]
    fn negative_acceleration_is_a_valid_input() {
        // Decelerating from 20 m/s to 10 m/s at -2 m/s^2
        let t = solve(Time, Distance, 20.0, 10.0, -2.0).unwrap();
        assert_near(t, 5.0);
        let d = solve(Distance, Time, 20.0, 10.0, -2.0).unwrap();
        assert_near(d, 75.0);
    }

    #[test]
    fn contradictory_acceleration_sign_rejected() {
        // Speeding up while decelerating
        let err = solve(Distance, Time, 10.0, 20.0, -2.0).unwrap_err();
        assert!(matches!(err, DomainError::InconsistentAcceleration { .. }));

        // Slowing down while accelerating
        let err = solve(Time, Distance, 20.0, 10.0, 2.0).unwrap_err();
        assert!(matches!(err, DomainError::InconsistentAcceleration { .. }));

        // Velocity change with zero acceleration
        let err = solve(Distance, Time, 10.0, 20.0, 0.0).unwrap_err();
        assert!(matches!(err, DomainError::InconsistentAcceleration { .. }));
    }

    #[test]
    fn quadratic_time_picks_physical_root() {
        // d = v_i*t + 0.5*a*t^2 with v_i=10, a=-2, d=21 has roots t=3 and
        // t=7; at t=7 the motion has already reversed, so t=3 is returned.
        let t = solve(Time, FinalVelocity, 10.0, -2.0, 21.0).unwrap();
        assert_near(t, 3.0);

        // d = v_f*t - 0.5*a*t^2 with v_f=10, a=2, d=21 has roots t=3 and
        // t=7; t=7 implies a negative initial velocity, so t=3 is returned.
        let t = solve(Time, InitialVelocity, 10.0, 2.0, 21.0).unwrap();
        assert_near(t, 3.0);
    }

    #[test]
    fn unreachable_distance_rejected() {
        // Decelerating from 10 m/s at -2 m/s^2 stops after 25 m; 30 m is
        // never covered.
        let err = solve(Time, FinalVelocity, 10.0, -2.0, 30.0).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NoPhysicalSolution { quantity: Time, .. }
        ));
    }

    #[test]
    fn negative_radicand_rejected_for_velocities() {
        // v_i^2 = v_f^2 - 2*a*d < 0: more speed gained over d than v_f holds
        let err = solve(InitialVelocity, Time, 5.0, 3.0, 100.0).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NoPhysicalSolution {
                quantity: InitialVelocity,
                ..
            }
        ));
    }

    #[test]
    fn zero_acceleration_time_is_linear() {
        let t = solve(Time, FinalVelocity, 8.0, 0.0, 24.0).unwrap();
        assert_near(t, 3.0);
        let t = solve(Time, InitialVelocity, 8.0, 0.0, 24.0).unwrap();
        assert_near(t, 3.0);
    }

    #[test]
    fn degenerate_queries_rejected() {
        let err = solve(Time, FinalVelocity, 0.0, 0.0, 5.0).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NoPhysicalSolution { quantity: Time, .. }
        ));

        let err = solve(Distance, Time, 7.0, 7.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NoPhysicalSolution {
                quantity: Distance,
                ..
            }
        ));

        let err = solve(Time, Acceleration, 0.0, 0.0, 5.0).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NoPhysicalSolution { quantity: Time, .. }
        ));
    }

    #[test]
    fn same_quantity_twice_rejected() {
        let err = solve(Distance, Distance, V_I, V_F, T).unwrap_err();
        assert!(matches!(
            err,
            DomainError::AmbiguousQuery {
                quantity: Distance
            }
        ));
    }
}
