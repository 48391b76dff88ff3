use std::collections::HashMap;

use super::ReadEnv;

/// Environment table held in memory.
///
/// Lets tests (and programs that assemble their own environment) run the
/// typed accessors without touching the real process environment.
///
/// ```rust
/// use typenv::{Env, InMemoryEnv};
///
/// let env = Env::new(InMemoryEnv::new().with("PORT", "3000"));
/// assert_eq!(env.get_port("PORT", 8080).unwrap().get(), 3000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryEnv {
    vars: HashMap<String, String>,
}

impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`InMemoryEnv::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl ReadEnv for InMemoryEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for InMemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_lookup() {
        let mut env = InMemoryEnv::new();
        env.set("KEY", "value");
        assert_eq!(env.lookup("KEY").as_deref(), Some("value"));
        assert_eq!(env.lookup("OTHER"), None);
    }

    #[test]
    fn test_empty_value_is_present() {
        let env = InMemoryEnv::new().with("EMPTY", "");
        assert_eq!(env.lookup("EMPTY").as_deref(), Some(""));
    }

    #[test]
    fn test_remove() {
        let mut env = InMemoryEnv::new().with("KEY", "value");
        assert_eq!(env.remove("KEY").as_deref(), Some("value"));
        assert_eq!(env.lookup("KEY"), None);
        assert!(env.is_empty());
    }

    #[test]
    fn test_from_iter_last_wins() {
        let env: InMemoryEnv = [("A", "1"), ("B", "2"), ("A", "3")].into_iter().collect();
        assert_eq!(env.len(), 2);
        assert_eq!(env.lookup("A").as_deref(), Some("3"));
    }

    #[test]
    fn test_reference_is_a_source() {
        fn read<E: ReadEnv>(env: E, key: &str) -> Option<String> {
            env.lookup(key)
        }

        let env = InMemoryEnv::new().with("KEY", "value");
        assert_eq!(read(&env, "KEY").as_deref(), Some("value"));
    }
}
