//! Parsing rules for environment variable values
//!
//! Each function takes the variable name only to attach it to the error.

use crate::error::{EnvError, InvalidValueReason};
use crate::port::PortNumber;

/// Literals that parse as `true`. Matching is case-sensitive.
pub const TRUTHY_VALUES: [&str; 4] = ["true", "1", "on", "yes"];

/// Literals that parse as `false`. Matching is case-sensitive.
pub const FALSY_VALUES: [&str; 3] = ["false", "0", "off"];

/// All accepted boolean literals, truthy first
pub fn accepted_bool_values() -> Vec<&'static str> {
    TRUTHY_VALUES.iter().chain(FALSY_VALUES.iter()).copied().collect()
}

/// Parse a boolean literal
pub fn parse_bool(name: &str, value: &str) -> Result<bool, EnvError> {
    if TRUTHY_VALUES.contains(&value) {
        return Ok(true);
    }

    if FALSY_VALUES.contains(&value) {
        return Ok(false);
    }

    Err(EnvError::invalid_value(
        name,
        value,
        InvalidValueReason::NotBool {
            accepted: accepted_bool_values(),
        },
    ))
}

/// Parse a base-10 32-bit signed integer
pub fn parse_i32(name: &str, value: &str) -> Result<i32, EnvError> {
    value
        .parse::<i32>()
        .map_err(|e| EnvError::invalid_value(name, value, e))
}

/// Parse a base-10 64-bit signed integer
pub fn parse_i64(name: &str, value: &str) -> Result<i64, EnvError> {
    value
        .parse::<i64>()
        .map_err(|e| EnvError::invalid_value(name, value, e))
}

/// Range-check a resolved integer as a port number
pub fn check_port(name: &str, number: i32) -> Result<PortNumber, EnvError> {
    PortNumber::try_from(number).map_err(|e| EnvError::invalid_port(name, e))
}
