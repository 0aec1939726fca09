//! Derive macro implementation for envtag

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::FieldAttrs;

/// `EnvConfig` derive macro
///
/// Implements `envtag::Record` and `envtag::EnvField` for a struct with named
/// fields, so it can be passed to `envtag::load` or nested inside another
/// configuration struct.
///
/// # Field attribute
///
/// - `#[envconfig("env=NAME,default=VALUE,required=true")]`: raw annotation string,
///   parsed when the struct is loaded
///
/// Only `pub` (or `pub(...)`) fields are written; other fields are skipped.
///
/// # Example
///
/// See the `envtag` crate documentation for usage examples.
#[proc_macro_derive(EnvConfig, attributes(envconfig))]
pub fn derive_envconfig(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let type_name = struct_name.unraw().to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new(
                    struct_name.span(),
                    "EnvConfig only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                struct_name.span(),
                "EnvConfig only supports structs",
            ));
        }
    };

    let mut errors: Option<syn::Error> = None;
    let mut descriptors = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let name = ident.unraw().to_string();

        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(err) => {
                match errors.as_mut() {
                    Some(existing) => existing.combine(err),
                    None => errors = Some(err),
                }
                continue;
            }
        };

        if !attrs.settable {
            descriptors.push(quote! {
                ::envtag::Field::hidden(#name)
            });
            continue;
        }

        let tag = match attrs.tag {
            Some(tag) => quote! { ::std::option::Option::Some(#tag) },
            None => quote! { ::std::option::Option::None },
        };

        descriptors.push(quote! {
            ::envtag::Field::settable(
                #name,
                #tag,
                ::envtag::EnvField::slot(&mut self.#ident),
            )
        });
    }

    if let Some(err) = errors {
        return Err(err);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envtag::Record for #struct_name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn fields(&mut self) -> ::std::vec::Vec<::envtag::Field<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }

        impl #impl_generics ::envtag::EnvField for #struct_name #ty_generics #where_clause {
            fn slot(&mut self) -> ::envtag::Slot<'_> {
                ::envtag::Slot::Record(self)
            }
        }
    })
}
