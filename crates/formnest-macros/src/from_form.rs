mod bind_enum;
mod bind_record;

use proc_macro2::TokenStream;
use syn::Data;

use crate::context::MacroContext;

pub fn derive(context: MacroContext) -> TokenStream {
    derive_inner(&context).unwrap_or_else(darling::Error::write_errors)
}

fn derive_inner(context: &MacroContext) -> darling::Result<TokenStream> {
    match &context.input.data {
        Data::Struct(data) => bind_record::generate_record_binder(context, data),
        Data::Enum(data) => bind_enum::generate_enum_binder(context, data),
        Data::Union(data) => Err(darling::Error::custom(
            "FromForm cannot be derived for unions",
        )
        .with_span(&data.union_token)),
    }
}
