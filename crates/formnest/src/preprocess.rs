//! Clean-up applied to form data before decoding, for payloads that arrive
//! JSON-escaped or as `key = value` lines.

use formnest_document::corpus::{self, DecodeError};

const UNICODE_ESCAPES: [(&str, &str); 7] = [
    ("\\u0026", "&"),
    ("\\u0027", "'"),
    ("\\u0022", "\""),
    ("\\u003C", "<"),
    ("\\u003E", ">"),
    ("\\u002B", "+"),
    ("\\u0020", " "),
];

/// Replace the literal escapes `\u0026 \u0027 \u0022 \u003C \u003E \u002B \u0020`
/// with the characters they stand for. Other escapes are kept.
pub fn unescape_unicode(data: &str) -> String {
    UNICODE_ESCAPES
        .iter()
        .fold(data.to_string(), |acc, &(escaped, plain)| acc.replace(escaped, plain))
}

/// Turn `key = value` lines into `key=value&...` when the text has both a
/// newline and ` = `. Anything else is returned unchanged.
///
/// ```
/// use formnest::preprocess::normalize_form_data;
///
/// assert_eq!(normalize_form_data("a = 1\n b = x y \nnoise\n"), "a=1&b=x y");
/// assert_eq!(normalize_form_data("a=1&b=2"), "a=1&b=2");
/// ```
pub fn normalize_form_data(data: &str) -> String {
    if !(data.contains('\n') && data.contains(" = ")) {
        return data.to_string();
    }
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once(" = "))
        .map(|(key, value)| format!("{}={}", key.trim(), value.trim()))
        .collect::<Vec<_>>()
        .join("&")
}

/// Prepare an escaped payload for regular parsing: Unicode escapes, then a
/// whole-string query unescape, then line normalization.
pub fn prepare_encoded(data: &str) -> Result<String, DecodeError> {
    let unescaped = corpus::unescape(&unescape_unicode(data))?;
    Ok(normalize_form_data(&unescaped))
}
