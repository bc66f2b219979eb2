//! vp-core: stable foundation for the vehicle prediction workspace.
//!
//! Contains:
//! - state (the vehicle state / control input data model)
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod state;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use state::{STATE_LEN, VehicleControlInput, VehicleState};
