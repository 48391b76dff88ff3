//! Typed accessors for process environment variables
//!
//! `typenv` reads a named environment variable and converts it into a typed
//! value: string, boolean, 32/64-bit integer, or a validated [`PortNumber`].
//!
//! Every kind comes in two forms:
//!
//! - **Fallback form** (`get_*`): returns a caller-supplied fallback when the
//!   variable is unset. A variable that *is* set must still parse.
//! - **Mandatory form** (`require_*`): fails with [`EnvError::Missing`] when
//!   the variable is unset.
//!
//! # Failing fast
//!
//! These functions are meant to run once at startup. Any [`EnvError`] they
//! return means the process is misconfigured: propagate it with `?` out of
//! `main` so the process exits with a message naming the variable, the
//! offending value and the rule it broke.
//!
//! # Value Parsing
//!
//! - Booleans: `true`, `1`, `on`, `yes` / `false`, `0`, `off` (case-sensitive).
//!   An unset boolean reads as `false`.
//! - Integers: base-10 text within the range of `i32` or `i64`.
//! - Ports: a base-10 `i32` within `[0, 65535]`. Fallbacks are range-checked too.
//!
//! # Example
//!
//! ```rust
//! # fn main() -> Result<(), typenv::EnvError> {
//! #     std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! #     std::env::remove_var("PORT");
//! #     std::env::remove_var("DEBUG");
//! let database_url = typenv::require_string("DATABASE_URL")?;
//! let port = typenv::get_port("PORT", 8080)?;
//! let debug = typenv::get_bool("DEBUG")?;
//!
//! assert_eq!(database_url, "postgres://localhost/db");
//! assert_eq!(port.get(), 8080);
//! assert!(!debug);
//! #     Ok(())
//! # }
//! ```
//!
//! # Testing without the process environment
//!
//! The free functions read the real process environment. For tests, build an
//! [`Env`] over an [`InMemoryEnv`] instead of mutating global state:
//!
//! ```rust
//! use typenv::{Env, EnvError, InMemoryEnv};
//!
//! let env = Env::new(InMemoryEnv::new().with("PORT", "70000"));
//! assert!(matches!(env.require_port("PORT"), Err(EnvError::InvalidPort { .. })));
//! ```

pub mod de;
pub mod source;

mod env;
mod error;
mod port;

pub use env::Env;
pub use error::{EnvError, InvalidValueReason};
pub use port::{PortBound, PortNumber, PortRangeError, MAX_PORT, MIN_PORT};
pub use source::{InMemoryEnv, ReadEnv, SystemEnv};

/// Raw value of `key` in the process environment, `None` when unset
pub fn lookup(key: &str) -> Option<String> {
    Env::system().lookup(key)
}

/// See [`Env::get_string`]
pub fn get_string(key: &str, fallback: impl Into<String>) -> String {
    Env::system().get_string(key, fallback)
}

/// See [`Env::require_string`]
pub fn require_string(key: &str) -> Result<String, EnvError> {
    Env::system().require_string(key)
}

/// See [`Env::get_bool`]
pub fn get_bool(key: &str) -> Result<bool, EnvError> {
    Env::system().get_bool(key)
}

/// See [`Env::require_bool`]
pub fn require_bool(key: &str) -> Result<bool, EnvError> {
    Env::system().require_bool(key)
}

/// See [`Env::get_i32`]
pub fn get_i32(key: &str, fallback: i32) -> Result<i32, EnvError> {
    Env::system().get_i32(key, fallback)
}

/// See [`Env::require_i32`]
pub fn require_i32(key: &str) -> Result<i32, EnvError> {
    Env::system().require_i32(key)
}

/// See [`Env::get_i64`]
pub fn get_i64(key: &str, fallback: i64) -> Result<i64, EnvError> {
    Env::system().get_i64(key, fallback)
}

/// See [`Env::require_i64`]
pub fn require_i64(key: &str) -> Result<i64, EnvError> {
    Env::system().require_i64(key)
}

/// See [`Env::get_port`]
pub fn get_port(key: &str, fallback: i32) -> Result<PortNumber, EnvError> {
    Env::system().get_port(key, fallback)
}

/// See [`Env::require_port`]
pub fn require_port(key: &str) -> Result<PortNumber, EnvError> {
    Env::system().require_port(key)
}
