//! Flat key/value input decoded from form-urlencoded text.

use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::Map;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid semicolon separator in query piece {piece:?}")]
    Semicolon { piece: String },
    #[error("invalid URL escape {escape:?} at byte {position}")]
    InvalidEscape { escape: String, position: usize },
}

/// Decoded form input: every raw key with the first value supplied for it.
///
/// Later values for an already present key are dropped and only counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatCorpus {
    entries: Map<String, String>,
    discarded: usize,
}

impl FlatCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `application/x-www-form-urlencoded` text.
    ///
    /// ```
    /// use formnest_document::corpus::FlatCorpus;
    ///
    /// let corpus = FlatCorpus::parse("name=John+Doe&tags%5B0%5D=a&name=ignored").unwrap();
    /// assert_eq!(corpus.get("name"), Some("John Doe"));
    /// assert_eq!(corpus.get("tags[0]"), Some("a"));
    /// assert_eq!(corpus.discarded(), 1);
    /// ```
    pub fn parse(query: &str) -> Result<Self, DecodeError> {
        let mut corpus = Self::new();
        for piece in query.split('&') {
            if piece.is_empty() {
                continue;
            }
            if piece.contains(';') {
                return Err(DecodeError::Semicolon {
                    piece: piece.to_string(),
                });
            }
            let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
            corpus.insert(unescape(key)?, unescape(value)?);
        }
        Ok(corpus)
    }

    /// Build a corpus from already decoded pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut corpus = Self::new();
        for (key, value) in pairs {
            corpus.insert(key, value);
        }
        corpus
    }

    /// Build a corpus from a multi-valued map, reading the first value of
    /// each key. Keys without values are ignored.
    pub fn from_multi_map<I, K, V, S>(map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut corpus = Self::new();
        for (key, values) in map {
            let mut values = values.into_iter();
            let Some(first) = values.next() else {
                continue;
            };
            corpus.insert(key, first);
            corpus.discarded += values.count();
        }
        corpus
    }

    /// Record a value for `key` unless one is already present.
    ///
    /// Returns `false` when the value was discarded.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.entries.contains_key(&key) {
            debug!(key = %key, "discarding repeated value");
            self.discarded += 1;
            return false;
        }
        self.entries.insert(key, value.into());
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of values dropped because their key was already present.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a FlatCorpus {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Query-unescape a whole string: `+` becomes a space and `%XX` becomes
/// the byte `XX`. Invalid UTF-8 in the result is replaced.
pub fn unescape(text: &str) -> Result<String, DecodeError> {
    check_escapes(text)?;
    let spaced = text.replace('+', " ");
    Ok(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

fn check_escapes(text: &str) -> Result<(), DecodeError> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            let end = (i + 3).min(bytes.len());
            return Err(DecodeError::InvalidEscape {
                escape: String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                position: i,
            });
        }
        i += 3;
    }
    Ok(())
}
