#![doc = include_str!("../README.md")]

/// Bracket key paths such as `leads[0][name]`.
pub mod path;

/// Coerced scalars and the generic nested value.
pub mod value;

/// Decoding of form-urlencoded input into flat key/value entries.
pub mod corpus;

/// Limits applied while building documents.
pub mod config;

/// The tree of form entries.
pub mod document;

/// Reports about inputs that were resolved silently.
pub mod diagnostic;

/// Typed binding of documents into Rust values.
pub mod bind;

pub use bind::{BindContext, BindWarning, FromForm, FromFormKey, RecordBinder};
pub use config::Config;
pub use corpus::{DecodeError, FlatCorpus};
pub use diagnostic::Diagnostic;
pub use document::{FormDocument, NodeId};
pub use value::{FormValue, Scalar};

pub type Map<K, V> = indexmap::IndexMap<K, V>;

pub(crate) mod prelude_internal {
    #![allow(unused_imports)]
    pub use crate::Map;
    pub use crate::config::Config;
    pub use crate::diagnostic::Diagnostic;
    pub use crate::document::node::{Leaf, Node, NodeKind};
    pub use crate::document::{FormDocument, NodeId};
    pub use crate::value::{FormValue, Scalar, ValueKind};
}
