use darling::FromVariant;

#[derive(Debug, Default, FromVariant)]
#[darling(default, attributes(form))]
pub struct VariantAttrs {
    /// Text that selects this variant (overrides rename_all)
    pub rename: Option<String>,
}
