//! Fixed-step integration loop with per-step control injection.

use crate::step::rk4_step;
use crate::{State, StateDot, Trajectory};

/// Integrate a vector field through `step_count` steps of `step_size`,
/// starting at t = 0, holding `controls[k]` constant across step k.
///
/// After each completed step the `post_step` hook receives, in order: the
/// raw integrated state, the control active during the step, the tracker,
/// the step end time, the previous step's finalized output (the initial
/// state for the first step), and a mutable output slot sized like the
/// state. Whatever the hook leaves in the slot is recorded in the
/// trajectory; integration itself always continues from the raw state.
/// The t = 0 initial condition is never passed to the hook or recorded.
///
/// The active control advances to `controls[k + 1]` right after step k is
/// recorded, so every vector-field evaluation inside a step sees that
/// step's control. `controls` must hold one entry per step; length
/// consistency is the caller's contract and is not checked here.
///
/// The tracker is threaded mutably through every vector-field and hook
/// invocation, letting a model carry bookkeeping (previous evaluation
/// time, accumulated slip, ...) across the call without global state.
pub fn integrate<Control, Tracker, F, P>(
    vector_field: F,
    step_count: usize,
    step_size: f64,
    initial_state: &State,
    controls: &[Control],
    mut post_step: P,
    tracker: &mut Tracker,
) -> Trajectory
where
    F: Fn(&State, &Control, &mut Tracker, f64) -> StateDot,
    P: FnMut(&State, &Control, &mut Tracker, f64, &State, &mut State),
{
    let mut trajectory = Trajectory::with_capacity(step_count);
    if step_count == 0 {
        return trajectory;
    }

    let mut raw_state = initial_state.clone();
    let mut prev_output = initial_state.clone();
    let mut active_control = &controls[0];

    for step in 0..step_count {
        let t_start = step as f64 * step_size;
        raw_state = rk4_step(
            &vector_field,
            &raw_state,
            active_control,
            tracker,
            t_start,
            step_size,
        );
        let t_end = t_start + step_size;

        let mut output = State::zeros(raw_state.len());
        post_step(
            &raw_state,
            active_control,
            tracker,
            t_end,
            &prev_output,
            &mut output,
        );
        prev_output = output.clone();
        trajectory.push((t_end, output));

        // Step k is recorded; expose the next control, except after the
        // final step where none exists.
        if step + 1 < controls.len() {
            active_control = &controls[step + 1];
        }
    }

    trajectory
}
