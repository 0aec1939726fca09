//! Parsing of `#[envconfig("...")]` annotation strings.
//!
//! An annotation is a comma separated list of `key=value` pairs such as
//! `env=DATABASE_URL,default=postgres://localhost/db,required=true`.

use std::collections::HashMap;

/// Name of the field attribute carrying the annotation.
pub const TAG: &str = "envconfig";

/// Key naming the environment variable to read.
pub const ENV_KEY: &str = "env";

/// Key holding the fallback value used when the variable is unset.
pub const DEFAULT_KEY: &str = "default";

/// Key marking a field as required; only the exact value `true` takes effect.
pub const REQUIRED_KEY: &str = "required";

/// Parsed annotation: trimmed keys mapped to trimmed values.
pub type TagMap = HashMap<String, String>;

/// Parse an annotation string into a [`TagMap`].
///
/// Fragments without `=` are dropped and only the first `=` of a fragment splits
/// key from value, so `default=a=b` yields `"a=b"`. A repeated key keeps its last
/// value. This never fails; an empty or entirely malformed string gives an empty map.
pub fn parse_tag(raw: &str) -> TagMap {
    raw.split(',')
        .filter_map(|fragment| fragment.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> TagMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_tag() {
        assert_eq!(parse_tag(""), TagMap::new());
    }

    #[test]
    fn test_single_pair() {
        assert_eq!(parse_tag("env=TEST_VAR"), map(&[("env", "TEST_VAR")]));
    }

    #[test]
    fn test_multiple_pairs() {
        assert_eq!(
            parse_tag("env=TEST_VAR,default=default value,required=true"),
            map(&[
                ("env", "TEST_VAR"),
                ("default", "default value"),
                ("required", "true"),
            ])
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            parse_tag(" env = TEST_VAR , default = default value "),
            map(&[("env", "TEST_VAR"), ("default", "default value")])
        );
    }

    #[test]
    fn test_fragment_without_value_is_dropped() {
        assert_eq!(parse_tag("env"), TagMap::new());
        assert_eq!(parse_tag(",,,"), TagMap::new());
    }

    #[test]
    fn test_mixed_valid_and_invalid() {
        assert_eq!(
            parse_tag("env=TEST_VAR,invalid,default=value"),
            map(&[("env", "TEST_VAR"), ("default", "value")])
        );
    }

    #[test]
    fn test_splits_on_first_equals_only() {
        assert_eq!(
            parse_tag("default=a=b"),
            map(&[("default", "a=b")])
        );
    }

    #[test]
    fn test_empty_value_is_kept() {
        assert_eq!(parse_tag("default="), map(&[("default", "")]));
    }

    #[test]
    fn test_last_duplicate_wins() {
        assert_eq!(
            parse_tag("env=FIRST,env=SECOND"),
            map(&[("env", "SECOND")])
        );
    }
}
