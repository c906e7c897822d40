use proc_macro2::TokenStream;
use quote::{ToTokens as _, quote};

use crate::attrs::{ContainerAttrs, RenameAll};

pub struct MacroConfig {
    pub document_crate: TokenStream,
    pub rename_all: Option<RenameAll>,
}

impl MacroConfig {
    pub fn from_attrs(attrs: ContainerAttrs) -> Self {
        let document_crate = attrs
            .crate_path
            .map(|path| path.into_token_stream())
            .unwrap_or_else(|| quote! { ::formnest::document });
        Self {
            document_crate,
            rename_all: attrs.rename_all,
        }
    }
}
