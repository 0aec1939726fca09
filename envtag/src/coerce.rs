//! Conversion of resolved text into typed field values.

use crate::error::{BoxError, LoadError};
use crate::field::{InstantSlot, Slot};
use chrono::{DateTime, Utc};

/// The text is not one of the accepted boolean spellings.
#[derive(Debug, thiserror::Error)]
#[error("invalid syntax")]
pub struct ParseBoolError;

/// Parse a boolean, accepting `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(raw: &str) -> Result<bool, ParseBoolError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseBoolError),
    }
}

/// Convert `raw` and store it through `slot`.
///
/// Nothing is written when conversion fails. Record slots are walked by the
/// loader rather than converted, so they are rejected here.
pub fn assign(slot: Slot<'_>, raw: &str, field_name: &str) -> Result<(), LoadError> {
    let kind = slot.kind();
    let fail = |source: BoxError| LoadError::parse(field_name, kind, raw, source);

    match slot {
        Slot::Instant(instant) => {
            let parsed = DateTime::parse_from_rfc3339(raw).map_err(|e| fail(e.into()))?;
            match instant {
                InstantSlot::Fixed(target) => *target = parsed,
                InstantSlot::Utc(target) => *target = parsed.with_timezone(&Utc),
            }
        }
        Slot::Duration(target) => {
            *target = humantime::parse_duration(raw).map_err(|e| fail(e.into()))?;
        }
        Slot::Text(target) => *target = raw.to_string(),
        Slot::Int(mut target) => target.assign(raw).map_err(|e| fail(e.into()))?,
        Slot::Uint(mut target) => target.assign(raw).map_err(|e| fail(e.into()))?,
        Slot::Float(mut target) => target.assign(raw).map_err(|e| fail(e.into()))?,
        Slot::Bool(target) => *target = parse_bool(raw).map_err(|e| fail(e.into()))?,
        Slot::Record(_) | Slot::Unsupported(_) => {
            return Err(LoadError::UnsupportedFieldType { kind });
        }
    }
    Ok(())
}
