use proc_macro2::TokenStream;
use quote::quote;
use syn::{ConstParam, DeriveInput, Generics, Ident, LifetimeParam, TypeParam};

use crate::config::MacroConfig;

pub struct MacroContext {
    pub config: MacroConfig,
    pub input: DeriveInput,
}

impl MacroContext {
    pub fn new(config: MacroConfig, input: DeriveInput) -> Self {
        Self { config, input }
    }

    pub fn ident(&self) -> &Ident {
        &self.input.ident
    }

    pub fn generics(&self) -> &Generics {
        &self.input.generics
    }

    /// Returns generics for the impl<...>, with every type parameter
    /// required to implement `FromForm`.
    pub fn impl_generics(&self) -> Vec<TokenStream> {
        let from_form = self.FromForm();
        self.generics()
            .lifetimes()
            .map(
                |LifetimeParam {
                     lifetime,
                     colon_token,
                     bounds,
                     ..
                 }| {
                    quote! { #lifetime #colon_token #bounds }
                },
            )
            .chain(self.generics().const_params().map(
                |ConstParam {
                     const_token,
                     ident,
                     colon_token,
                     ty,
                     ..
                 }| {
                    quote! { #const_token #ident #colon_token #ty }
                },
            ))
            .chain(self.generics().type_params().map(
                |TypeParam {
                     ident,
                     colon_token,
                     bounds,
                     ..
                 }| {
                    if bounds.is_empty() {
                        quote! { #ident: #from_form }
                    } else {
                        quote! { #ident #colon_token #bounds + #from_form }
                    }
                },
            ))
            .collect()
    }

    /// Returns generics for the for #ident<...>
    pub fn for_generics(&self) -> Vec<TokenStream> {
        self.generics()
            .lifetimes()
            .map(|LifetimeParam { lifetime, .. }| quote! { #lifetime })
            .chain(
                self.generics()
                    .const_params()
                    .map(|ConstParam { ident, .. }| quote! { #ident }),
            )
            .chain(
                self.generics()
                    .type_params()
                    .map(|TypeParam { ident, .. }| quote! { #ident }),
            )
            .collect()
    }

    #[allow(non_snake_case)]
    pub fn FromForm(&self) -> TokenStream {
        let document_crate = &self.config.document_crate;
        quote!(#document_crate::bind::FromForm)
    }

    #[allow(non_snake_case)]
    pub fn BindContext(&self) -> TokenStream {
        let document_crate = &self.config.document_crate;
        quote!(#document_crate::bind::BindContext)
    }

    /// Applies container-level `rename_all` to a field or variant name.
    pub fn apply_rename(&self, name: &str) -> String {
        match self.config.rename_all {
            Some(rename_all) => rename_all.apply(name),
            None => name.to_string(),
        }
    }

    pub fn impl_from_form(&self, bind_body: TokenStream) -> TokenStream {
        let ident = self.ident();
        let impl_generics = self.impl_generics();
        let for_generics = self.for_generics();
        let where_clause = &self.generics().where_clause;
        let from_form = self.FromForm();
        let bind_context = self.BindContext();

        quote! {
            impl<#(#impl_generics),*> #from_form for #ident<#(#for_generics),*> #where_clause {
                fn from_form(ctx: &#bind_context<'_>) -> ::core::option::Option<Self> {
                    #bind_body
                }
            }
        }
    }
}
