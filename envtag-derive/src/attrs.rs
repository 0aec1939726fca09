//! Attribute parsing for `#[envconfig("...")]` annotations.
//!
//! The annotation string is not interpreted here. It is validated only as a single
//! string literal and forwarded verbatim to the runtime tag parser.

use syn::{Field, LitStr, Visibility};

/// Name of the field attribute.
const ATTR: &str = "envconfig";

/// Parsed attributes of one struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw annotation string, if the field carries `#[envconfig("...")]`.
    pub tag: Option<String>,

    /// Whether the walker may write the field (`pub` or `pub(...)`).
    pub settable: bool,
}

impl FieldAttrs {
    /// Extract the annotation and settability of a struct field.
    ///
    /// Unrelated attributes are ignored so other derives can use them.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self {
            tag: None,
            settable: !matches!(field.vis, Visibility::Inherited),
        };

        for attr in &field.attrs {
            if !attr.path().is_ident(ATTR) {
                continue;
            }

            if attrs.tag.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate `envconfig` attribute",
                ));
            }

            let lit: LitStr = attr.parse_args().map_err(|_| {
                syn::Error::new_spanned(
                    attr,
                    r#"expected `#[envconfig("key=value,...")]`"#,
                )
            })?;
            attrs.tag = Some(lit.value());
        }

        Ok(attrs)
    }
}
