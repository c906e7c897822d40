use darling::FromField;

#[derive(Debug, Default, FromField)]
#[darling(default, attributes(form))]
pub struct FieldAttrs {
    /// Form key of this field (overrides rename_all)
    pub rename: Option<String>,
    /// Never bind this field, use `Default::default()`
    pub skip: bool,
}
