use darling::FromDeriveInput;
use syn::parse_macro_input;

use crate::{attrs::ContainerAttrs, config::MacroConfig, context::MacroContext};

mod attrs;
pub(crate) mod config;
pub(crate) mod context;
mod from_form;

/// Implements `FromForm` for a struct or a unit-only enum.
///
/// See the crate README for the supported `#[form(...)]` attributes.
#[proc_macro_derive(FromForm, attributes(form))]
pub fn from_form_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    match create_context(input) {
        Ok(context) => from_form::derive(context).into(),
        Err(err) => err.write_errors().into(),
    }
}

fn create_context(input: syn::DeriveInput) -> darling::Result<MacroContext> {
    let attrs = ContainerAttrs::from_derive_input(&input)?;
    Ok(MacroContext::new(MacroConfig::from_attrs(attrs), input))
}
