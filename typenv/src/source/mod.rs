//! Where environment variables are read from
//!
//! | Source | Backing | Use |
//! |--------|---------|-----|
//! | [`SystemEnv`] | process environment | production |
//! | [`InMemoryEnv`] | `HashMap` | tests, embedding |

mod memory;
mod system;

pub use memory::InMemoryEnv;
pub use system::SystemEnv;

/// Read-only view of an environment variable table.
///
/// `lookup` distinguishes a variable that is unset (`None`) from one that is
/// set to empty text (`Some(String::new())`). Implementations must not cache:
/// every call reflects the table as it is now.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site if an
/// accessor is shared across threads; both provided sources satisfy them.
pub trait ReadEnv {
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<T: ReadEnv + ?Sized> ReadEnv for &T {
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
