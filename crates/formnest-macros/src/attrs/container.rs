use darling::FromDeriveInput;
use syn::Path;

use super::RenameAll;

#[derive(Debug, Default, FromDeriveInput)]
#[darling(attributes(form), default)]
pub struct ContainerAttrs {
    /// Path of the document crate, `::formnest::document` when absent.
    #[darling(rename = "crate")]
    pub crate_path: Option<Path>,
    /// Renames all fields of a struct, or all variants of an enum.
    pub rename_all: Option<RenameAll>,
}
