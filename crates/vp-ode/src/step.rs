//! Single classical RK4 step.

use crate::{State, StateDot};

/// Advance `state` by one step of size `h` starting at time `t`.
///
/// All four vector-field evaluations see the same `control`; injecting the
/// per-step control is the caller's job (see [`integrate`](crate::integrate)).
///
/// Combine weights are the classical 1/6, 1/3, 1/3, 1/6.
pub fn rk4_step<Control, Tracker, F>(
    vector_field: &F,
    state: &State,
    control: &Control,
    tracker: &mut Tracker,
    t: f64,
    h: f64,
) -> State
where
    F: Fn(&State, &Control, &mut Tracker, f64) -> StateDot,
{
    let k1 = vector_field(state, control, tracker, t);

    let x2 = state + &k1 * (0.5 * h);
    let k2 = vector_field(&x2, control, tracker, t + 0.5 * h);

    let x3 = state + &k2 * (0.5 * h);
    let k3 = vector_field(&x3, control, tracker, t + 0.5 * h);

    let x4 = state + &k3 * h;
    let k4 = vector_field(&x4, control, tracker, t + h);

    state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
}
