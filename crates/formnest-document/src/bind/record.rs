//! RecordBinder for binding record types from form documents.

use super::{BindContext, FromForm};
use crate::document::node::NodeKind;

/// Helper for binding a record from a node that reads as an object.
///
/// Fields are looked up by name among the node's named children. A field
/// that is absent or does not convert takes its default value.
///
/// # Example
///
/// ```ignore
/// impl FromForm for User {
///     fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
///         let rec = ctx.record()?;
///         Some(User {
///             id: rec.field("user_id"),
///             name: rec.field("name"),
///         })
///     }
/// }
/// ```
#[must_use]
pub struct RecordBinder<'doc> {
    ctx: BindContext<'doc>,
}

impl<'doc> RecordBinder<'doc> {
    /// `None` unless the node reads as an object.
    pub(crate) fn new(ctx: &BindContext<'doc>) -> Option<Self> {
        if ctx.node().kind() != NodeKind::Object {
            return None;
        }
        Some(Self { ctx: ctx.clone() })
    }

    pub fn context(&self) -> &BindContext<'doc> {
        &self.ctx
    }

    /// Bind the field `name`, or its default.
    pub fn field<T: FromForm>(&self, name: &str) -> T {
        match self.ctx.named(name) {
            Some(child) => child.bind_or_default(),
            None => self.ctx.missing(name),
        }
    }

    /// Bind the field `name` when present and convertible.
    pub fn field_optional<T: FromForm>(&self, name: &str) -> Option<T> {
        self.ctx.named(name)?.bind()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.ctx.node().get_named(name).is_some()
    }

    /// Names of all fields present on the node.
    pub fn field_names(&self) -> impl Iterator<Item = &'doc str> {
        self.ctx.node().named.keys().map(String::as_str)
    }
}
