
use darling::FromField;
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::ext::IdentExt as _;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{DataStruct, Field, Fields};

use crate::attrs::FieldAttrs;
use crate::context::MacroContext;

pub fn generate_record_binder(
    context: &MacroContext,
    input: &DataStruct,
) -> darling::Result<TokenStream> {
    match &input.fields {
        Fields::Named(fields) => generate_named_struct(context, &fields.named),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            generate_newtype_struct(context, &fields.unnamed[0])
        }
        Fields::Unnamed(fields) => generate_tuple_struct(context, &fields.unnamed),
        Fields::Unit => Ok(generate_unit_struct(context)),
    }
}

fn generate_named_struct(
    context: &MacroContext,
    fields: &Punctuated<Field, Comma>,
) -> darling::Result<TokenStream> {
    let ident = context.ident();
    let mut errors = darling::Error::accumulator();
    let mut bound_any = false;
    let mut field_assignments = Vec::new();
    for f in fields {
        let Some(field_name) = f.ident.as_ref() else {
            continue;
        };
        let Some(attrs) = errors.handle(FieldAttrs::from_field(f)) else {
            continue;
        };
        if attrs.skip && attrs.rename.is_some() {
            errors.push(
                darling::Error::custom(format!(
                    "cannot use both #[form(skip)] and #[form(rename)] on field `{field_name}`"
                ))
                .with_span(f),
            );
            continue;
        }

        let assignment = if attrs.skip {
            quote! { #field_name: ::core::default::Default::default() }
        } else {
            bound_any = true;
            let field_ty = &f.ty;
            let key = attrs
                .rename
                .unwrap_or_else(|| context.apply_rename(&field_name.unraw().to_string()));
            quote! { #field_name: rec.field::<#field_ty>(#key) }
        };
        field_assignments.push(assignment);
    }
    errors.finish()?;

    let record = if bound_any {
        quote! { let rec = ctx.record()?; }
    } else {
        quote! { ctx.record()?; }
    };
    Ok(context.impl_from_form(quote! {
        #record
        ::core::option::Option::Some(#ident {
            #(#field_assignments),*
        })
    }))
}

fn generate_newtype_struct(context: &MacroContext, field: &Field) -> darling::Result<TokenStream> {
    let ident = context.ident();
    let attrs = unnamed_field_attrs(field)?;
    let field_ty = &field.ty;
    Ok(if attrs.skip {
        context.impl_from_form(quote! {
            ::core::option::Option::Some(#ident(::core::default::Default::default()))
        })
    } else {
        context.impl_from_form(quote! {
            ctx.bind::<#field_ty>().map(#ident)
        })
    })
}

fn generate_tuple_struct(
    context: &MacroContext,
    fields: &Punctuated<Field, Comma>,
) -> darling::Result<TokenStream> {
    let ident = context.ident();
    let mut errors = darling::Error::accumulator();
    let mut elements = Vec::new();
    for (index, f) in fields.iter().enumerate() {
        let Some(attrs) = errors.handle(unnamed_field_attrs(f)) else {
            continue;
        };
        let field_ty = &f.ty;
        let index = Literal::usize_unsuffixed(index);
        elements.push(if attrs.skip {
            quote! { ::core::default::Default::default() }
        } else {
            quote! { ctx.element::<#field_ty>(#index) }
        });
    }
    errors.finish()?;

    Ok(context.impl_from_form(quote! {
        ::core::option::Option::Some(#ident(#(#elements),*))
    }))
}

fn generate_unit_struct(context: &MacroContext) -> TokenStream {
    let ident = context.ident();
    context.impl_from_form(quote! {
        ::core::option::Option::Some(#ident)
    })
}

fn unnamed_field_attrs(field: &Field) -> darling::Result<FieldAttrs> {
    let attrs = FieldAttrs::from_field(field)?;
    if attrs.rename.is_some() {
        return Err(
            darling::Error::custom("#[form(rename)] is only supported on named fields")
                .with_span(field),
        );
    }
    Ok(attrs)
}
