//! Field descriptors and typed slots.
//!
//! `#[derive(EnvConfig)]` implements [`Record`] for a struct, producing one [`Field`]
//! per declared field. Each settable field hands out a [`Slot`], a mutable reference
//! tagged with the kind of value it accepts. The walker dispatches on that closed set
//! of kinds instead of inspecting types at runtime.

use chrono::{DateTime, FixedOffset, Utc};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// A value that can be the target of an environment lookup.
///
/// Implemented for the supported leaf types and, through the derive macro, for
/// every configuration struct.
pub trait EnvField {
    /// Borrow this value as a typed slot.
    fn slot(&mut self) -> Slot<'_>;
}

/// A struct whose fields can be populated from the environment.
pub trait Record {
    /// Name of the struct, used in log output.
    fn type_name(&self) -> &'static str;

    /// Descriptors of all fields, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// Descriptor of one struct field.
pub struct Field<'a> {
    /// Field name as written in the struct, without any `r#` prefix.
    pub name: &'static str,
    /// Raw `#[envconfig("...")]` annotation, if the field carries one.
    pub tag: Option<&'static str>,
    /// Writable slot, or `None` for fields that are not settable (non-`pub` fields).
    pub slot: Option<Slot<'a>>,
}

impl<'a> Field<'a> {
    /// Descriptor for a settable field.
    pub fn settable(name: &'static str, tag: Option<&'static str>, slot: Slot<'a>) -> Self {
        Self {
            name,
            tag: tag.filter(|t| !t.is_empty()),
            slot: Some(slot),
        }
    }

    /// Descriptor for a field the walker must leave untouched.
    pub fn hidden(name: &'static str) -> Self {
        Self {
            name,
            tag: None,
            slot: None,
        }
    }

    pub fn is_settable(&self) -> bool {
        self.slot.is_some()
    }
}

/// Mutable reference to a field, tagged by the kind of value it accepts.
pub enum Slot<'a> {
    Instant(InstantSlot<'a>),
    Duration(&'a mut Duration),
    Text(&'a mut String),
    Int(IntSlot<'a>),
    Uint(UintSlot<'a>),
    Float(FloatSlot<'a>),
    Bool(&'a mut bool),
    Record(&'a mut dyn Record),
    /// A type with no conversion rule; carries its kind label.
    Unsupported(&'static str),
}

impl Slot<'_> {
    /// Kind label of the slot, as reported in errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Slot::Instant(_) => "temporal instant",
            Slot::Duration(_) => "duration",
            Slot::Text(_) => "String",
            Slot::Int(slot) => slot.kind(),
            Slot::Uint(slot) => slot.kind(),
            Slot::Float(slot) => slot.kind(),
            Slot::Bool(_) => "bool",
            Slot::Record(_) => "struct",
            Slot::Unsupported(kind) => *kind,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Slot::Record(_))
    }
}

/// Date-time targets, parsed from RFC 3339 text.
pub enum InstantSlot<'a> {
    Fixed(&'a mut DateTime<FixedOffset>),
    Utc(&'a mut DateTime<Utc>),
}

macro_rules! numeric_slot {
    ($outer:ident, $slot:ident, $err:ty, { $($variant:ident => $ty:ty),+ $(,)? }) => {
        #[doc = concat!("Numeric targets of the `", stringify!($outer), "` kind.")]
        pub enum $slot<'a> {
            $($variant(&'a mut $ty)),+
        }

        impl $slot<'_> {
            /// Rust type name of the target.
            pub fn kind(&self) -> &'static str {
                match self {
                    $($slot::$variant(_) => stringify!($ty)),+
                }
            }

            /// Parse `raw` as base-10 into the exact target width.
            pub(crate) fn assign(&mut self, raw: &str) -> Result<(), $err> {
                match self {
                    $($slot::$variant(target) => **target = raw.parse()?),+
                }
                Ok(())
            }
        }

        $(
            impl EnvField for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$outer($slot::$variant(self))
                }
            }
        )+
    };
}

numeric_slot!(Int, IntSlot, std::num::ParseIntError, {
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    I128 => i128,
    Isize => isize,
});

numeric_slot!(Uint, UintSlot, std::num::ParseIntError, {
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    U128 => u128,
    Usize => usize,
});

numeric_slot!(Float, FloatSlot, std::num::ParseFloatError, {
    F32 => f32,
    F64 => f64,
});

impl EnvField for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Text(self)
    }
}

impl EnvField for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

impl EnvField for Duration {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Duration(self)
    }
}

impl EnvField for DateTime<FixedOffset> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Instant(InstantSlot::Fixed(self))
    }
}

impl EnvField for DateTime<Utc> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Instant(InstantSlot::Utc(self))
    }
}

// Types a config struct may reasonably contain but that have no conversion rule.
// They only fail once a value actually resolves for them.

impl EnvField for char {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("char")
    }
}

impl EnvField for PathBuf {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("PathBuf")
    }
}

impl<T> EnvField for Option<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("Option")
    }
}

impl<T> EnvField for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("Vec")
    }
}

impl<K, V, S> EnvField for HashMap<K, V, S> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("HashMap")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_kind_labels() {
        let mut a = 0i32;
        let mut b = 0u8;
        let mut c = 0f64;
        assert_eq!(a.slot().kind(), "i32");
        assert_eq!(b.slot().kind(), "u8");
        assert_eq!(c.slot().kind(), "f64");
    }

    #[test]
    fn test_special_kind_labels() {
        let mut d = Duration::ZERO;
        let mut t = DateTime::<Utc>::default();
        let mut v: Vec<String> = Vec::new();
        assert_eq!(d.slot().kind(), "duration");
        assert_eq!(t.slot().kind(), "temporal instant");
        assert_eq!(v.slot().kind(), "Vec");
    }

    #[test]
    fn test_int_assign_respects_width() {
        let mut small = 0i8;
        match small.slot() {
            Slot::Int(mut slot) => {
                assert!(slot.assign("127").is_ok());
                assert!(slot.assign("128").is_err());
            }
            _ => panic!("expected an integer slot"),
        }
        assert_eq!(small, 127);
    }

    #[test]
    fn test_empty_tag_counts_as_absent() {
        let mut value = String::new();
        let field = Field::settable("value", Some(""), value.slot());
        assert!(field.tag.is_none());
        assert!(field.is_settable());
        assert!(!Field::hidden("secret").is_settable());
    }
}
