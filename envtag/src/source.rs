//! Environment variable sources.
//!
//! The loader never touches `std::env` directly; it asks a [`Source`]. The process
//! environment is the default, and in-memory maps let callers load configuration
//! from a fixed table.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// A read-only table of environment variables.
pub trait Source {
    /// Look up `name`, returning `None` if it is not set.
    fn var(&self, name: &str) -> Option<String>;

    /// Look up `name`, treating an empty value as unset.
    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.var(name).filter(|value| !value.is_empty())
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::warn!(env = name, "ignoring environment variable with non UTF-8 value");
                None
            }
        }
    }
}

impl<K, V, S> Source for HashMap<K, V, S>
where
    K: std::borrow::Borrow<str> + Eq + std::hash::Hash,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.as_ref().to_string())
    }
}

impl<K, V> Source for BTreeMap<K, V>
where
    K: std::borrow::Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.as_ref().to_string())
    }
}

impl<T: Source + ?Sized> Source for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_process_env_reads_variable() {
        env::set_var("ENVTAG_SOURCE_TEST", "value");
        assert_eq!(
            ProcessEnv.var("ENVTAG_SOURCE_TEST"),
            Some("value".to_string())
        );
        env::remove_var("ENVTAG_SOURCE_TEST");
        assert_eq!(ProcessEnv.var("ENVTAG_SOURCE_TEST"), None);
    }

    #[test]
    #[serial]
    fn test_process_env_empty_value_is_unset() {
        env::set_var("ENVTAG_SOURCE_EMPTY", "");
        assert_eq!(ProcessEnv.var("ENVTAG_SOURCE_EMPTY"), Some(String::new()));
        assert_eq!(ProcessEnv.non_empty_var("ENVTAG_SOURCE_EMPTY"), None);
        env::remove_var("ENVTAG_SOURCE_EMPTY");
    }

    #[test]
    fn test_hash_map_source() {
        let vars = HashMap::from([("PORT", "8080"), ("EMPTY", "")]);
        assert_eq!(vars.var("PORT"), Some("8080".to_string()));
        assert_eq!(vars.non_empty_var("EMPTY"), None);
        assert_eq!(vars.var("MISSING"), None);
    }

    #[test]
    fn test_btree_map_source_with_owned_strings() {
        let mut vars = BTreeMap::new();
        vars.insert("HOST".to_string(), "localhost".to_string());
        assert_eq!(vars.var("HOST"), Some("localhost".to_string()));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let vars = HashMap::from([("PORT", "8080")]);
        assert_eq!(vars.var("port"), None);
    }
}
