//! Error types for typed environment variable access

use std::num::ParseIntError;

use crate::port::{PortBound, PortRangeError};

/// Errors that can occur when reading a typed value from the environment.
///
/// Every variant carries the name of the environment variable involved so the
/// message alone is enough to diagnose a misconfigured deployment:
/// - A mandatory variable is not set
/// - A variable is set but its text does not parse as the requested type
/// - A resolved integer is not a valid port number
///
/// These errors describe misconfiguration. Callers are expected to propagate
/// them to `main` and abort startup rather than recover.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Required environment variable is not set.
    ///
    /// Only returned by the `require_*` family. Fallback forms substitute
    /// their fallback instead.
    #[error("Environment variable '{name}' is required but not set")]
    Missing {
        /// Name of the missing environment variable
        name: String,
    },

    /// Environment variable is set but its value is malformed for the target type.
    #[error("Invalid value for environment variable '{name}': {value:?} ({reason})")]
    InvalidValue {
        /// Name of the environment variable being parsed
        name: String,
        /// Raw text value as found in the environment
        value: String,
        /// Rule the value violated
        #[source]
        reason: InvalidValueReason,
    },

    /// Resolved integer lies outside the port range `[0, 65535]`.
    ///
    /// Raised for fallback values too, not only for values read from the
    /// environment.
    #[error("Invalid port number for environment variable '{name}': {number} {bound}")]
    InvalidPort {
        /// Name of the environment variable the port was resolved for
        name: String,
        /// Resolved integer
        number: i32,
        /// Bound that was violated
        bound: PortBound,
    },
}

/// Why a present value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidValueReason {
    /// Value is not one of the accepted boolean literals.
    #[error("must be one of: {}", .accepted.join(", "))]
    NotBool {
        /// Accepted literals, truthy values first
        accepted: Vec<&'static str>,
    },

    /// Value is not a base-10 integer of the requested width.
    #[error("not a valid base-10 integer: {0}")]
    NotInteger(#[from] ParseIntError),
}

impl EnvError {
    /// Create a missing environment variable error
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    /// Create an invalid value error
    pub fn invalid_value(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<InvalidValueReason>,
    ) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Attach a variable name to a port range failure
    pub fn invalid_port(name: impl Into<String>, err: PortRangeError) -> Self {
        Self::InvalidPort {
            name: name.into(),
            number: err.number,
            bound: err.bound,
        }
    }

    /// Name of the environment variable this error refers to
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name }
            | Self::InvalidValue { name, .. }
            | Self::InvalidPort { name, .. } => name,
        }
    }
}
