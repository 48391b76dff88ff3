//! Validated network port numbers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Smallest accepted port number
pub const MIN_PORT: i32 = 0;

/// Largest accepted port number
pub const MAX_PORT: i32 = 65535;

/// A network port number in `[0, 65535]`.
///
/// Only obtainable through range-checked conversion, so holding a
/// `PortNumber` means the value has already been validated. Serde
/// (de)serializes it as a plain integer and applies the same check when
/// deserializing.
///
/// ```rust
/// use typenv::PortNumber;
///
/// let port = PortNumber::try_from(8080).unwrap();
/// assert_eq!(port.get(), 8080);
/// assert!(PortNumber::try_from(65536).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PortNumber(u16);

impl PortNumber {
    /// Port number as `u16`, ready for socket addresses
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Port number widened back to the integer it was parsed from
    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }
}

/// Which end of the port range was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortBound {
    /// Number was negative
    Min,
    /// Number exceeded 65535
    Max,
}

impl fmt::Display for PortBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => write!(f, "< {MIN_PORT}"),
            Self::Max => write!(f, "> {MAX_PORT}"),
        }
    }
}

/// Integer outside the port range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid port number {number} {bound}")]
pub struct PortRangeError {
    /// Rejected integer
    pub number: i32,
    /// Bound that was violated
    pub bound: PortBound,
}

impl TryFrom<i32> for PortNumber {
    type Error = PortRangeError;

    fn try_from(number: i32) -> Result<Self, Self::Error> {
        if number < MIN_PORT {
            return Err(PortRangeError {
                number,
                bound: PortBound::Min,
            });
        }

        u16::try_from(number).map(Self).map_err(|_| PortRangeError {
            number,
            bound: PortBound::Max,
        })
    }
}

impl From<u16> for PortNumber {
    fn from(port: u16) -> Self {
        Self(port)
    }
}

impl From<PortNumber> for u16 {
    fn from(port: PortNumber) -> Self {
        port.0
    }
}

impl From<PortNumber> for i32 {
    fn from(port: PortNumber) -> Self {
        port.as_i32()
    }
}

impl fmt::Display for PortNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
