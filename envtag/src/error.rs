//! Error types for loading configuration from environment variables

/// Boxed cause of a failed conversion.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when loading configuration from environment variables.
///
/// Every error aborts the traversal that produced it. Fields visited before the
/// failing one keep the values that were already assigned to them.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The value passed to [`load`](crate::load) is not a struct.
    #[error("config must be a mutable reference to a struct")]
    NotStruct,

    /// A value resolved for a field whose type has no conversion rule.
    #[error("unsupported field type: {kind}")]
    UnsupportedFieldType {
        /// Kind label of the offending field type (e.g. `"Vec"`)
        kind: &'static str,
    },

    /// A field marked `required=true` has neither an environment value nor a default.
    #[error(
        "missing required field: field '{field_name}' is required but no value was provided (env: {env_name})"
    )]
    RequiredField {
        /// Name of the struct field
        field_name: String,
        /// Environment variable that was consulted
        env_name: String,
    },

    /// The resolved text could not be converted into the field's type.
    #[error("failed to parse value '{value}' as {field_type} for field '{field_name}': {source}")]
    Parse {
        /// Name of the struct field
        field_name: String,
        /// Type label of the field (e.g. `"i32"`, `"duration"`)
        field_type: &'static str,
        /// Text that failed to convert
        value: String,
        /// Underlying conversion error
        source: BoxError,
    },
}

impl LoadError {
    pub(crate) fn required(field_name: &str, env_name: &str) -> Self {
        Self::RequiredField {
            field_name: field_name.to_string(),
            env_name: env_name.to_string(),
        }
    }

    pub(crate) fn parse(
        field_name: &str,
        field_type: &'static str,
        value: &str,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Parse {
            field_name: field_name.to_string(),
            field_type,
            value: value.to_string(),
            source: source.into(),
        }
    }

    /// Returns `true` if this error reports a missing required field.
    pub fn is_missing_required(&self) -> bool {
        matches!(self, Self::RequiredField { .. })
    }

    /// Returns `true` if this error reports a field type without a conversion rule.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedFieldType { .. })
    }
}
