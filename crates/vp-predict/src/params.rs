//! Read-only parameter access for physical constants and limits.

use std::collections::HashMap;

use crate::error::{PredictError, PredictResult};

/// Source of named physical constants and constraint limits.
///
/// Implementations must be cheap to query; the library reads parameters
/// once at construction time, never in prediction hot paths.
pub trait ParameterServer: Send + Sync {
    /// Look up a parameter by name. `None` if the backend has no value.
    fn parameter(&self, name: &str) -> Option<f64>;
}

/// In-memory [`ParameterServer`] backed by a map.
#[derive(Clone, Debug, Default)]
pub struct MapParameterServer {
    values: HashMap<String, f64>,
}

impl MapParameterServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, consuming and returning self for chaining.
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }
}

impl ParameterServer for MapParameterServer {
    fn parameter(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

/// Read a parameter that the caller cannot proceed without.
pub fn required_parameter(server: &dyn ParameterServer, name: &'static str) -> PredictResult<f64> {
    server
        .parameter(name)
        .ok_or(PredictError::MissingParameter { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_server_lookup() {
        let server = MapParameterServer::new()
            .with("wheel_radius", 0.33)
            .with("wheelbase", 2.7);

        assert_eq!(server.parameter("wheel_radius"), Some(0.33));
        assert_eq!(server.parameter("wheelbase"), Some(2.7));
        assert_eq!(server.parameter("missing"), None);
    }

    #[test]
    fn required_parameter_reports_name() {
        let server = MapParameterServer::new();
        let err = required_parameter(&server, "wheelbase").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("wheelbase"));
    }
}
