//! Procedural macros for the `defaultable` crate
//!
//! Provides `#[derive(Defaultable)]`, which reads `#[default_value("...")]`
//! field attributes and generates the static field metadata table plus the
//! per-field assignment dispatch.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, LitStr, Type};

/// Derive macro for the `Defaultable` trait
///
/// # Usage
///
/// ```ignore
/// #[derive(Default, Defaultable)]
/// pub struct ServerConfig {
///     #[default_value("127.0.0.1")]
///     pub host: String,
///
///     #[default_value("8080")]
///     pub port: i32,
///
///     /// No annotation - never touched by apply_defaults
///     pub name: String,
/// }
/// ```
#[proc_macro_derive(Defaultable, attributes(default_value))]
pub fn derive_defaultable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    // The field table is cached by TypeId, which requires a concrete type.
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Defaultable does not support generic structs",
        ));
    }

    let fields: Vec<&Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(), // Unit struct has no fields
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Defaultable does not support tuple structs",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Defaultable only supports structs",
            ))
        }
    };

    let mut metas = Vec::new();
    let mut arms = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let ident = field.ident.as_ref().unwrap();
        let field_name = ident.to_string();
        let kind = classify_kind(&field.ty);
        let kind_tokens = kind.tokens();
        let default = default_annotation(field)?;

        metas.push(match &default {
            Some(text) => quote! {
                defaultable::FieldMeta::new(#index, #field_name, #kind_tokens)
                    .with_default(#text)
            },
            None => quote! {
                defaultable::FieldMeta::new(#index, #field_name, #kind_tokens)
            },
        });

        // Only annotated fields of a supported kind get a dispatch arm;
        // everything else falls through to the no-op arm.
        if default.is_some() {
            if let Some(helper) = kind.helper() {
                arms.push(quote! {
                    #index => defaultable::value::#helper(&mut self.#ident, meta.name, text),
                });
            }
        }
    }

    let count = metas.len();

    let apply_field = if arms.is_empty() {
        quote! {
            fn apply_field(&mut self, _meta: &defaultable::FieldMeta) {}
        }
    } else {
        quote! {
            fn apply_field(&mut self, meta: &defaultable::FieldMeta) {
                let Some(text) = meta.default else {
                    return;
                };
                match meta.index {
                    #(#arms)*
                    _ => {}
                }
            }
        }
    };

    Ok(quote! {
        impl defaultable::Defaultable for #name {
            fn fields() -> &'static [defaultable::FieldMeta] {
                static FIELDS: [defaultable::FieldMeta; #count] = [
                    #(#metas),*
                ];
                &FIELDS
            }

            #apply_field
        }
    })
}

/// The closed set of field kinds the applicator understands
#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    String,
    Integer,
    Float,
    Boolean,
    StringList,
    IntegerList,
    Unsupported,
}

impl Kind {
    /// The `defaultable::FieldKind` variant for the metadata table
    fn tokens(self) -> proc_macro2::TokenStream {
        match self {
            Kind::String => quote! { defaultable::FieldKind::String },
            Kind::Integer => quote! { defaultable::FieldKind::Integer },
            Kind::Float => quote! { defaultable::FieldKind::Float },
            Kind::Boolean => quote! { defaultable::FieldKind::Boolean },
            Kind::StringList => quote! { defaultable::FieldKind::StringList },
            Kind::IntegerList => quote! { defaultable::FieldKind::IntegerList },
            Kind::Unsupported => quote! { defaultable::FieldKind::Unsupported },
        }
    }

    /// The `defaultable::value` helper that applies this kind, if any
    fn helper(self) -> Option<proc_macro2::TokenStream> {
        match self {
            Kind::String => Some(quote! { set_string }),
            Kind::Integer => Some(quote! { set_integer }),
            Kind::Float => Some(quote! { set_float }),
            Kind::Boolean => Some(quote! { set_bool }),
            Kind::StringList => Some(quote! { append_strings }),
            Kind::IntegerList => Some(quote! { append_integers }),
            Kind::Unsupported => None,
        }
    }
}

/// Classify a declared field type into a Kind
fn classify_kind(ty: &Type) -> Kind {
    let Type::Path(path) = ty else {
        return Kind::Unsupported;
    };
    let Some(segment) = path.path.segments.last() else {
        return Kind::Unsupported;
    };

    if segment.ident == "Vec" {
        // Classify by element type: only string and signed-integer
        // elements are supported.
        if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
            if let Some(syn::GenericArgument::Type(element)) = args.args.first() {
                return match classify_kind(element) {
                    Kind::String => Kind::StringList,
                    Kind::Integer => Kind::IntegerList,
                    _ => Kind::Unsupported,
                };
            }
        }
        return Kind::Unsupported;
    }

    if segment.ident == "String" {
        Kind::String
    } else if segment.ident == "i8"
        || segment.ident == "i16"
        || segment.ident == "i32"
        || segment.ident == "i64"
        || segment.ident == "isize"
    {
        Kind::Integer
    } else if segment.ident == "f32" || segment.ident == "f64" {
        Kind::Float
    } else if segment.ident == "bool" {
        Kind::Boolean
    } else {
        Kind::Unsupported
    }
}

/// Extract the #[default_value("...")] annotation text, if present
fn default_annotation(field: &Field) -> syn::Result<Option<String>> {
    for attr in &field.attrs {
        if attr.path().is_ident("default_value") {
            let text: LitStr = attr.parse_args()?;
            return Ok(Some(text.value()));
        }
    }
    Ok(None)
}
