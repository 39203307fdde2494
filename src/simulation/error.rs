//! Errors reported by the simulation.

use thiserror::Error;

/// Errors returned by genetic operators and parameter loading.
///
/// Operators that fail leave the ecosystem untouched, so every variant is
/// recoverable.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// An operator was invoked on a population that is too small for it.
    #[error("{operator} requires at least {required} seekers, found {found}")]
    PreconditionViolation {
        /// Name of the operator that refused to run.
        operator: &'static str,
        /// Minimum population the operator needs.
        required: usize,
        /// Population at the time of the call.
        found: usize,
    },
    /// A parameter value is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParams {
        /// Name of the offending field.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// Reading or writing a parameter file failed.
    #[error("parameter file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// A parameter file could not be (de)serialized.
    #[error("parameter file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
