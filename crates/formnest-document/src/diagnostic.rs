use core::fmt::Display;

use crate::path::KeyPathError;

/// Something that was silently resolved while building or reading a
/// [`FormDocument`](crate::document::FormDocument).
///
/// Diagnostics never change the produced values.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Values dropped because their key had already been seen.
    RepeatedValues { count: usize },
    /// A key whose bracket groups could not be read; only its base was used.
    MalformedKey { key: String, error: KeyPathError },
    /// A bracket index above the configured limit, kept as an object key.
    IndexOverLimit {
        key: String,
        index: usize,
        max_index: usize,
    },
    /// A key with more bracket groups than allowed; the extra groups were cut.
    DepthOverLimit {
        key: String,
        depth: usize,
        max_depth: usize,
    },
    /// Two keys resolved to the same path; the later value replaced the earlier one.
    ScalarReplaced {
        path: String,
        previous: String,
        raw: String,
    },
    /// A node carries both a value and children; the value is not emitted.
    ScalarShadowed { path: String, raw: String },
    /// A node reads as an array, so its named children are not emitted.
    NamedChildrenDropped { path: String, names: Vec<String> },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Diagnostic::RepeatedValues { count } => {
                write!(f, "{count} repeated value(s) ignored, first value per key kept")
            }
            Diagnostic::MalformedKey { key, error } => {
                write!(f, "malformed key {key:?} treated as its base name: {error}")
            }
            Diagnostic::IndexOverLimit {
                key,
                index,
                max_index,
            } => write!(
                f,
                "index {index} in key {key:?} exceeds {max_index}, used as an object key"
            ),
            Diagnostic::DepthOverLimit {
                key,
                depth,
                max_depth,
            } => write!(
                f,
                "key {key:?} has {depth} bracket groups, only the first {max_depth} are used"
            ),
            Diagnostic::ScalarReplaced {
                path,
                previous,
                raw,
            } => write!(f, "value {previous:?} at `{path}` replaced by {raw:?}"),
            Diagnostic::ScalarShadowed { path, raw } => {
                write!(f, "value {raw:?} at `{path}` dropped in favor of its children")
            }
            Diagnostic::NamedChildrenDropped { path, names } => write!(
                f,
                "`{path}` is an array, named children dropped: {}",
                names.join(", ")
            ),
        }
    }
}
