//! Generic fixed-step ODE integration for vehicle motion models.
//!
//! The engine advances an arbitrary dynamical system through a sequence of
//! piecewise-constant control inputs using classical 4th-order Runge-Kutta,
//! one fixed time step per control input. It knows nothing about any
//! concrete model: the equations of motion arrive as a vector-field
//! closure, and a post-step hook lets the model reconcile state components
//! the differential equations do not evolve directly (discrete per-step
//! increments, command bookkeeping).
//!
//! The engine performs no validation. Step size and count positivity and
//! the control-sequence length are the caller's contract, enforced by the
//! constraint layer upstream. Everything here is a pure synchronous
//! computation; concurrent calls are safe as long as each call owns its
//! tracker.

use nalgebra::DVector;

pub mod engine;
pub mod step;

/// Flat vector of the dynamic variables of a model.
pub type State = DVector<f64>;

/// Time derivative of a [`State`]; always the same length.
pub type StateDot = DVector<f64>;

/// Time-stamped states, one entry per completed step, in ascending time
/// order. The t=0 initial condition is not included.
pub type Trajectory = Vec<(f64, State)>;

pub use engine::integrate;
pub use step::rk4_step;
