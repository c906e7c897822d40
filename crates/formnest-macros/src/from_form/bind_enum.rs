
use darling::FromVariant;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt as _;
use syn::{DataEnum, Fields};

use crate::attrs::VariantAttrs;
use crate::context::MacroContext;

/// Unit-only enums bind from the text of a scalar node.
pub fn generate_enum_binder(
    context: &MacroContext,
    input: &DataEnum,
) -> darling::Result<TokenStream> {
    let mut errors = darling::Error::accumulator();
    let mut arms = Vec::new();
    for variant in &input.variants {
        if !matches!(variant.fields, Fields::Unit) {
            errors.push(
                darling::Error::custom("FromForm can only be derived for enums with unit variants")
                    .with_span(variant),
            );
            continue;
        }
        let Some(attrs) = errors.handle(VariantAttrs::from_variant(variant)) else {
            continue;
        };
        let variant_ident = &variant.ident;
        let key = attrs
            .rename
            .unwrap_or_else(|| context.apply_rename(&variant_ident.unraw().to_string()));
        arms.push(quote! { #key => ::core::option::Option::Some(Self::#variant_ident), });
    }
    errors.finish()?;

    Ok(context.impl_from_form(quote! {
        match ctx.raw()? {
            #(#arms)*
            _ => ::core::option::Option::None,
        }
    }))
}
