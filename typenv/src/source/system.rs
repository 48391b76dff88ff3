use std::env;

use super::ReadEnv;

/// Zero-sized type, delegates to `std::env`.
///
/// Values that are not valid Unicode are converted lossily rather than
/// treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        let value = env::var_os(key)?;
        match value.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::warn!(
                    "Environment variable '{}' is not valid Unicode, replacing invalid sequences",
                    key
                );
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}
