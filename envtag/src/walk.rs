//! Recursive traversal of configuration structs.
//!
//! Fields are visited depth-first in declaration order. For each settable field:
//!
//! 1. An untagged struct field is walked as a nested scope. Nested scopes do not
//!    inherit any prefix from their parent.
//! 2. An untagged scalar field reads the variable named after the field in upper
//!    case. If that variable is unset the field keeps its current value.
//! 3. A tagged field reads `env` (or the upper-cased field name), then falls back to
//!    `default`. With neither available, `required=true` is an error and anything
//!    else leaves the field untouched.
//! 4. A resolved value is converted into the field's type. A tagged struct field is
//!    walked instead of converted.
//!
//! The first error stops the traversal. Fields assigned before it keep their new
//! values; nothing is rolled back.

use crate::coerce;
use crate::error::LoadError;
use crate::field::{EnvField, Record, Slot};
use crate::source::{ProcessEnv, Source};
use crate::tag::{parse_tag, DEFAULT_KEY, ENV_KEY, REQUIRED_KEY};

/// Load `config` from the process environment.
///
/// `config` must be a struct deriving [`EnvConfig`](crate::EnvConfig); any other
/// target fails with [`LoadError::NotStruct`] before anything is read.
pub fn load<T>(config: &mut T) -> Result<(), LoadError>
where
    T: EnvField + ?Sized,
{
    load_from(config, &ProcessEnv)
}

/// Load `config` from an explicit [`Source`].
pub fn load_from<T, S>(config: &mut T, source: &S) -> Result<(), LoadError>
where
    T: EnvField + ?Sized,
    S: Source + ?Sized,
{
    match config.slot() {
        Slot::Record(record) => load_struct_from(record, source),
        _ => Err(LoadError::NotStruct),
    }
}

/// Build a `T` from its `Default` value and load it from the process environment.
pub fn from_env<T>() -> Result<T, LoadError>
where
    T: EnvField + Default,
{
    let mut config = T::default();
    load(&mut config)?;
    Ok(config)
}

/// Walk the fields of `record`, reading the process environment.
pub fn load_struct(record: &mut dyn Record) -> Result<(), LoadError> {
    load_struct_from(record, &ProcessEnv)
}

/// Walk the fields of `record`, reading `source`.
pub fn load_struct_from<S>(record: &mut dyn Record, source: &S) -> Result<(), LoadError>
where
    S: Source + ?Sized,
{
    let type_name = record.type_name();
    tracing::trace!(record = type_name, "loading struct");

    for field in record.fields() {
        let Some(slot) = field.slot else {
            tracing::trace!(
                record = type_name,
                field = field.name,
                "skipping field that is not settable"
            );
            continue;
        };

        let Some(tag) = field.tag else {
            load_untagged(field.name, slot, source)?;
            continue;
        };

        let tags = parse_tag(tag);
        let env_name = tags
            .get(ENV_KEY)
            .cloned()
            .unwrap_or_else(|| field.name.to_uppercase());

        let value = match source.non_empty_var(&env_name) {
            Some(value) => {
                tracing::debug!(field = field.name, env = %env_name, "using environment value");
                value
            }
            None => match tags.get(DEFAULT_KEY) {
                Some(default) => {
                    tracing::debug!(field = field.name, env = %env_name, "using default value");
                    default.clone()
                }
                None if tags.get(REQUIRED_KEY).is_some_and(|r| r == "true") => {
                    return Err(LoadError::required(field.name, &env_name));
                }
                None => {
                    tracing::trace!(
                        field = field.name,
                        env = %env_name,
                        "no value, leaving field unchanged"
                    );
                    continue;
                }
            },
        };

        set_field_value(slot, &value, field.name, source)?;
    }

    Ok(())
}

fn load_untagged<S>(name: &str, slot: Slot<'_>, source: &S) -> Result<(), LoadError>
where
    S: Source + ?Sized,
{
    if let Slot::Record(nested) = slot {
        return load_struct_from(nested, source);
    }

    let env_name = name.to_uppercase();
    match source.non_empty_var(&env_name) {
        Some(value) => {
            tracing::debug!(field = name, env = %env_name, "using environment value");
            coerce::assign(slot, &value, name)
        }
        None => Ok(()),
    }
}

fn set_field_value<S>(
    slot: Slot<'_>,
    value: &str,
    name: &str,
    source: &S,
) -> Result<(), LoadError>
where
    S: Source + ?Sized,
{
    match slot {
        Slot::Record(nested) => load_struct_from(nested, source),
        scalar => coerce::assign(scalar, value, name),
    }
}
