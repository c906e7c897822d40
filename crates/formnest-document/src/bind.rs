//! Typed binding of a [`FormDocument`] into Rust values.
//!
//! Binding never fails. Whatever is absent or cannot be converted takes the
//! destination's [`Default`] value and is reported as a [`BindWarning`].

pub mod form_key;
pub mod record;

use core::any::type_name;
use core::cell::RefCell;
use core::hash::{BuildHasher, Hash};
use core::str::FromStr;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use tracing::trace;

pub use form_key::FromFormKey;
pub use record::RecordBinder;

use crate::prelude_internal::*;
use crate::value::parse_bool_literal;

/// Trait for types that can be bound from a form node.
///
/// # Examples
///
/// ```
/// use formnest_document::bind::{BindContext, FromForm};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Lead {
///     id: u64,
///     name: String,
/// }
///
/// impl FromForm for Lead {
///     fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
///         let rec = ctx.record()?;
///         Some(Lead {
///             id: rec.field("id"),
///             name: rec.field("name"),
///         })
///     }
/// }
/// ```
pub trait FromForm: Sized + Default {
    /// Bind from a node that exists. `None` means the node holds nothing
    /// usable for this type.
    fn from_form(ctx: &BindContext<'_>) -> Option<Self>;

    /// Value for a field whose node does not exist. `None` reports the
    /// field as missing.
    fn from_missing() -> Option<Self> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindWarningKind {
    /// No entry provided this field.
    Missing,
    /// An entry exists but does not convert to the expected type.
    Uncoercible { expected: &'static str },
}

/// A field that fell back to its default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindWarning {
    /// Bracket path of the field, e.g. `leads[0][id]`.
    pub path: String,
    pub kind: BindWarningKind,
}

impl core::fmt::Display for BindWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            BindWarningKind::Missing => write!(f, "`{}` is missing", self.path),
            BindWarningKind::Uncoercible { expected } => {
                write!(f, "`{}` is not a valid {expected}", self.path)
            }
        }
    }
}

/// Shared sink for warnings raised anywhere below a bind call.
#[derive(Debug, Clone, Default)]
pub struct BindReport(Rc<RefCell<Vec<BindWarning>>>);

impl BindReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, warning: BindWarning) {
        self.0.borrow_mut().push(warning);
    }

    pub fn take(&self) -> Vec<BindWarning> {
        core::mem::take(&mut *self.0.borrow_mut())
    }
}

/// Position of a bind operation inside a [`FormDocument`].
#[derive(Clone, Debug)]
pub struct BindContext<'doc> {
    doc: &'doc FormDocument,
    node_id: NodeId,
    path: String,
    report: BindReport,
}

impl<'doc> BindContext<'doc> {
    pub fn new(doc: &'doc FormDocument, node_id: NodeId) -> Self {
        Self::with_report(doc, node_id, BindReport::new())
    }

    pub fn with_report(doc: &'doc FormDocument, node_id: NodeId, report: BindReport) -> Self {
        Self {
            doc,
            node_id,
            path: String::new(),
            report,
        }
    }

    pub fn document(&self) -> &'doc FormDocument {
        self.doc
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn node(&self) -> &'doc Node {
        self.doc.node(self.node_id)
    }

    /// Bracket path of this node, empty at the document root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn report(&self) -> &BindReport {
        &self.report
    }

    /// Raw text of this node when it reads as a scalar.
    pub fn raw(&self) -> Option<&'doc str> {
        self.node().as_scalar().map(|leaf| leaf.raw.as_str())
    }

    /// Bind this node as a record, if it reads as an object.
    pub fn record(&self) -> Option<RecordBinder<'doc>> {
        RecordBinder::new(self)
    }

    pub fn named(&self, name: &str) -> Option<BindContext<'doc>> {
        let id = self.node().get_named(name)?;
        Some(self.child(id, name))
    }

    pub fn indexed(&self, index: usize) -> Option<BindContext<'doc>> {
        let id = self.node().get_indexed(index)?;
        Some(self.child(id, &index.to_string()))
    }

    fn child(&self, node_id: NodeId, segment: &str) -> BindContext<'doc> {
        BindContext {
            doc: self.doc,
            node_id,
            path: self.child_path(segment),
            report: self.report.clone(),
        }
    }

    fn child_path(&self, segment: &str) -> String {
        if self.path.is_empty() {
            segment.to_string()
        } else {
            format!("{}[{segment}]", self.path)
        }
    }

    pub fn bind<T: FromForm>(&self) -> Option<T> {
        T::from_form(self)
    }

    /// Bind the indexed child `index`, or its default.
    pub fn element<T: FromForm>(&self, index: usize) -> T {
        match self.indexed(index) {
            Some(child) => child.bind_or_default(),
            None => self.missing(&index.to_string()),
        }
    }

    /// Bind this node, falling back to the default value with a warning.
    pub fn bind_or_default<T: FromForm>(&self) -> T {
        match T::from_form(self) {
            Some(value) => value,
            None => {
                let expected = type_name::<T>();
                trace!(path = %self.path, expected, "uncoercible, using default");
                self.report.push(BindWarning {
                    path: self.path.clone(),
                    kind: BindWarningKind::Uncoercible { expected },
                });
                T::default()
            }
        }
    }

    /// Default value for a child that does not exist.
    pub(crate) fn missing<T: FromForm>(&self, segment: &str) -> T {
        if let Some(value) = T::from_missing() {
            return value;
        }
        let path = self.child_path(segment);
        trace!(path = %path, "missing, using default");
        self.report.push(BindWarning {
            path,
            kind: BindWarningKind::Missing,
        });
        T::default()
    }

    /// Map entries of this node: named children first, then indexed
    /// children keyed by the text their index was written with. Entries whose key or value
    /// does not convert are skipped.
    fn entries<K: FromFormKey, V: FromForm>(&self) -> impl Iterator<Item = (K, V)> + '_ {
        let node = self.node();
        let named = node
            .named
            .iter()
            .map(|(name, &id)| (name.clone(), id));
        let indexed = node
            .indexed
            .iter()
            .map(move |(&index, &id)| (node.index_key(index), id));
        named.chain(indexed).filter_map(move |(key, id)| {
            let Some(k) = K::from_form_key(&key) else {
                trace!(path = %self.path, key = %key, "map key skipped");
                return None;
            };
            let Some(v) = V::from_form(&self.child(id, &key)) else {
                trace!(path = %self.path, key = %key, "map value skipped");
                return None;
            };
            Some((k, v))
        })
    }
}

impl FormDocument {
    /// Bind the whole document into `T`.
    pub fn bind<T: FromForm>(&self) -> T {
        self.bind_with_report().0
    }

    /// Bind the whole document into `T`, also returning every field that
    /// fell back to its default.
    pub fn bind_with_report<T: FromForm>(&self) -> (T, Vec<BindWarning>) {
        let ctx = BindContext::new(self, self.root_id());
        let value = ctx.bind_or_default::<T>();
        (value, ctx.report().take())
    }
}

impl FromForm for String {
    fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
        ctx.raw().map(str::to_string)
    }
}

impl FromForm for bool {
    fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
        parse_bool_literal(ctx.raw()?)
    }
}

impl FromForm for char {
    fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
        char::from_form_key(ctx.raw()?)
    }
}

impl FromForm for f64 {
    fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
        ctx.raw()?.parse().ok()
    }
}

impl FromForm for f32 {
    fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
        f64::from_form(ctx).map(|f| f as f32)
    }
}

macro_rules! impl_from_form_for_int {
    ($parse:path; $($ty:ty),*) => {
        $(
            impl FromForm for $ty {
                fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
                    $parse(ctx.raw()?)
                }
            }
        )*
    };
}

impl_from_form_for_int!(parse_signed; i8, i16, i32, i64, i128, isize);
impl_from_form_for_int!(parse_unsigned; u8, u16, u32, u64, u128, usize);

pub(crate) fn parse_signed<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

/// Unsigned text carries no sign at all, `+5` included.
pub(crate) fn parse_unsigned<T: FromStr>(raw: &str) -> Option<T> {
    if raw.starts_with('+') {
        return None;
    }
    raw.parse().ok()
}

impl FromForm for FormValue {
    fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
        Some(ctx.document().node_value(ctx.node_id()))
    }
}

impl<T: FromForm> FromForm for Option<T> {
    fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
        Some(T::from_form(ctx))
    }

    fn from_missing() -> Option<Self> {
        Some(None)
    }
}

impl<T: FromForm> FromForm for Vec<T> {
    fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
        let node = ctx.node();
        let mut items = Vec::new();
        items.resize_with(node.array_len(), T::default);
        for &index in node.indexed.keys() {
            if let Some(slot) = ctx.indexed(index) {
                items[index] = slot.bind_or_default();
            }
        }
        Some(items)
    }
}

impl<K, V, S> FromForm for HashMap<K, V, S>
where
    K: FromFormKey + Eq + Hash,
    V: FromForm,
    S: BuildHasher + Default,
{
    fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
        Some(ctx.entries().collect())
    }
}

impl<K, V> FromForm for BTreeMap<K, V>
where
    K: FromFormKey + Ord,
    V: FromForm,
{
    fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
        Some(ctx.entries().collect())
    }
}

impl<K, V, S> FromForm for indexmap::IndexMap<K, V, S>
where
    K: FromFormKey + Eq + Hash,
    V: FromForm,
    S: BuildHasher + Default,
{
    fn from_form(ctx: &BindContext<'_>) -> Option<Self> {
        Some(ctx.entries().collect())
    }
}
