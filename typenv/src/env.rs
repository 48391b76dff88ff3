//! Typed accessor over an environment table

use crate::de;
use crate::error::EnvError;
use crate::port::PortNumber;
use crate::source::{ReadEnv, SystemEnv};

/// Typed accessor over a [`ReadEnv`] source.
///
/// Every value kind comes in two forms:
/// - `get_*` returns a fallback when the variable is unset
/// - `require_*` fails with [`EnvError::Missing`] when the variable is unset
///
/// A variable that is set is always parsed, so a malformed value fails in
/// both forms. Nothing is cached; each call re-reads the source.
///
/// ```rust
/// use typenv::{Env, InMemoryEnv};
///
/// let env = Env::new(InMemoryEnv::new().with("DEBUG", "yes"));
/// assert!(env.get_bool("DEBUG").unwrap());
/// assert_eq!(env.get_i32("WORKERS", 4).unwrap(), 4);
/// assert!(env.require_string("NAME").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env<E = SystemEnv> {
    source: E,
}

impl Env<SystemEnv> {
    /// Accessor over the process environment
    pub fn system() -> Self {
        Self { source: SystemEnv }
    }
}

impl<E: ReadEnv> Env<E> {
    pub fn new(source: E) -> Self {
        Self { source }
    }

    /// Raw value of `key`, `None` when unset
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.source.lookup(key)
    }

    fn require(&self, key: &str) -> Result<String, EnvError> {
        self.lookup(key).ok_or_else(|| EnvError::missing(key))
    }

    /// Value of `key`, or `fallback` when unset
    pub fn get_string(&self, key: &str, fallback: impl Into<String>) -> String {
        match self.lookup(key) {
            Some(value) => value,
            None => {
                tracing::debug!("Environment variable '{}' not set, using fallback", key);
                fallback.into()
            }
        }
    }

    /// Value of `key`
    ///
    /// # Errors
    ///
    /// - [`EnvError::Missing`] if `key` is unset
    pub fn require_string(&self, key: &str) -> Result<String, EnvError> {
        self.require(key)
    }

    /// Boolean value of `key`, `false` when unset
    ///
    /// Accepts `true`, `1`, `on`, `yes` and `false`, `0`, `off`, matched
    /// case-sensitively.
    ///
    /// # Errors
    ///
    /// - [`EnvError::InvalidValue`] if `key` is set to any other text
    pub fn get_bool(&self, key: &str) -> Result<bool, EnvError> {
        match self.lookup(key) {
            Some(value) => de::parse_bool(key, &value),
            None => {
                tracing::debug!("Environment variable '{}' not set, using fallback false", key);
                Ok(false)
            }
        }
    }

    /// Boolean value of `key`
    ///
    /// # Errors
    ///
    /// - [`EnvError::Missing`] if `key` is unset
    /// - [`EnvError::InvalidValue`] if the value is not an accepted literal
    pub fn require_bool(&self, key: &str) -> Result<bool, EnvError> {
        de::parse_bool(key, &self.require(key)?)
    }

    /// 32-bit integer value of `key`, or `fallback` when unset
    ///
    /// # Errors
    ///
    /// - [`EnvError::InvalidValue`] if the value is not a base-10 `i32`
    pub fn get_i32(&self, key: &str, fallback: i32) -> Result<i32, EnvError> {
        match self.lookup(key) {
            Some(value) => de::parse_i32(key, &value),
            None => {
                tracing::debug!(
                    "Environment variable '{}' not set, using fallback {}",
                    key,
                    fallback
                );
                Ok(fallback)
            }
        }
    }

    /// 32-bit integer value of `key`
    ///
    /// # Errors
    ///
    /// - [`EnvError::Missing`] if `key` is unset
    /// - [`EnvError::InvalidValue`] if the value is not a base-10 `i32`
    pub fn require_i32(&self, key: &str) -> Result<i32, EnvError> {
        de::parse_i32(key, &self.require(key)?)
    }

    /// 64-bit integer value of `key`, or `fallback` when unset
    ///
    /// # Errors
    ///
    /// - [`EnvError::InvalidValue`] if the value is not a base-10 `i64`
    pub fn get_i64(&self, key: &str, fallback: i64) -> Result<i64, EnvError> {
        match self.lookup(key) {
            Some(value) => de::parse_i64(key, &value),
            None => {
                tracing::debug!(
                    "Environment variable '{}' not set, using fallback {}",
                    key,
                    fallback
                );
                Ok(fallback)
            }
        }
    }

    /// 64-bit integer value of `key`
    ///
    /// # Errors
    ///
    /// - [`EnvError::Missing`] if `key` is unset
    /// - [`EnvError::InvalidValue`] if the value is not a base-10 `i64`
    pub fn require_i64(&self, key: &str) -> Result<i64, EnvError> {
        de::parse_i64(key, &self.require(key)?)
    }

    /// Port number from `key`, or from `fallback` when unset
    ///
    /// The fallback goes through the same range check as a value read from
    /// the environment.
    ///
    /// # Errors
    ///
    /// - [`EnvError::InvalidValue`] if the value is not a base-10 `i32`
    /// - [`EnvError::InvalidPort`] if the resolved integer (including the
    ///   fallback) lies outside `[0, 65535]`
    pub fn get_port(&self, key: &str, fallback: i32) -> Result<PortNumber, EnvError> {
        de::check_port(key, self.get_i32(key, fallback)?)
    }

    /// Port number from `key`
    ///
    /// # Errors
    ///
    /// - [`EnvError::Missing`] if `key` is unset
    /// - [`EnvError::InvalidValue`] if the value is not a base-10 `i32`
    /// - [`EnvError::InvalidPort`] if the value lies outside `[0, 65535]`
    pub fn require_port(&self, key: &str) -> Result<PortNumber, EnvError> {
        de::check_port(key, self.require_i32(key)?)
    }
}
