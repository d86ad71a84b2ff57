//! Error types for the simulation core and scenario loading.

use thiserror::Error;

/// Errors produced by the core and by scenario loading.
///
/// Non-finite pendulum values are not errors; they stay in the state.
#[derive(Debug, Error)]
pub enum SimError {
    /// The body set already holds its maximum number of bodies.
    #[error("body set is full ({cap} bodies)")]
    CapacityExceeded {
        /// Spawn cap of the set.
        cap: usize,
    },

    /// A configuration value is out of its valid range.
    #[error("invalid parameter `{name}`: {value} ({reason})")]
    InvalidParameter {
        /// Parameter name as it appears in the scenario file.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },

    /// Reading the scenario file failed.
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    /// The scenario file is not valid YAML for the config schema.
    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SimError {
    /// Creates an invalid parameter error.
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
