//! Expansion of `#[sizer_error]`.

use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

/// Variant that carries a `context` slot, plus the `#[cfg]` gates it was declared under.
struct ContextSlot {
    variant: syn::Ident,
    cfg: Vec<Attribute>,
}

pub fn expand(mut input: DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "#[sizer_error] expects an enum"));
    };

    let mut slots = Vec::new();
    for variant in &data.variants {
        let Fields::Named(fields) = &variant.fields else {
            continue;
        };
        let Some(field) = fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == "context"))
        else {
            continue;
        };
        if !is_optional_cow_str(&field.ty) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "`context` must be declared as Option<Cow<'static, str>>",
            ));
        }
        slots.push(ContextSlot {
            variant: variant.ident.clone(),
            cfg: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).cloned().collect(),
        });
    }

    inject_derives(&mut input);

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");
    let arms = slots.iter().map(|ContextSlot { variant, cfg }| {
        quote! { #(#cfg)* #name::#variant { context: slot, .. } => *slot = Some(context.into()), }
    });

    Ok(quote! {
        #input

        /// Attaches caller context to a failed result.
        pub trait #ext<T> {
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    #[allow(unreachable_patterns)]
                    match &mut err {
                        #(#arms)*
                        _ => {}
                    }
                    err
                })
            }
        }

        #[allow(dead_code)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            match context {
                Some(c) => ::std::borrow::Cow::Owned(format!(" ({c})")),
                None => ::std::borrow::Cow::Borrowed(""),
            }
        }
    })
}

/// Adds `Debug` and `thiserror::Error` unless the enum already derives them.
fn inject_derives(input: &mut DeriveInput) {
    let mut present = FxHashSet::default();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                present.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    let missing: Vec<TokenStream> = [("Debug", quote!(Debug)), ("Error", quote!(::thiserror::Error))]
        .into_iter()
        .filter(|(ident, _)| !present.contains(*ident))
        .map(|(_, path)| path)
        .collect();

    if !missing.is_empty() {
        input.attrs.push(syn::parse_quote!(#[derive(#(#missing),*)]));
    }
}

fn is_optional_cow_str(ty: &Type) -> bool {
    let option_args = generic_args(ty, "Option");
    let Some([GenericArgument::Type(inner)]) = option_args.as_deref() else {
        return false;
    };
    matches!(
        generic_args(inner, "Cow").as_deref(),
        Some([GenericArgument::Lifetime(lt), GenericArgument::Type(target)])
            if lt.ident == "static" && generic_args(target, "str").is_some_and(|a| a.is_empty())
    )
}

/// Generic arguments of `ty` if its last path segment is `ident`.
fn generic_args(ty: &Type, ident: &str) -> Option<Vec<GenericArgument>> {
    let Type::Path(path) = ty else {
        return None;
    };
    let last = path.path.segments.last().filter(|seg| seg.ident == ident)?;
    Some(match &last.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().cloned().collect(),
        _ => Vec::new(),
    })
}
