//! Closed-form solver for the constant-acceleration kinematic equations.
//!
//! The caller names the quantity to compute and the quantity that is not
//! available; the remaining three quantities are passed positionally in
//! canonical order. Every one of the twenty (output, unavailable) pairs is
//! solved by the unique rearrangement of
//!
//! ```text
//! v_f = v_i + a*t
//! d   = v_i*t + 0.5*a*t^2
//! ```
//!
//! All values are SI: meters, meters/second, meters/second^2, seconds.

pub mod error;
pub mod quantity;
pub mod solver;

pub use error::{DomainError, KinematicsResult};
pub use quantity::KinematicQuantity;
pub use solver::solve;
