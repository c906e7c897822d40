use core::fmt::Display;

/// One bracket group of a key, classified by its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Purely decimal content, e.g. the `0` in `leads[0]`
    Index(usize),
    /// Any other content, e.g. the `id` in `leads[0][id]`
    Name(String),
}

impl PathSegment {
    /// Classify the content of a single bracket group.
    ///
    /// Digit runs that do not fit in `usize` are kept as names.
    pub fn from_content(content: &str) -> Self {
        if !content.is_empty() && content.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = content.parse::<usize>() {
                return PathSegment::Index(index);
            }
        }
        PathSegment::Name(content.to_string())
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Index(index) => Some(*index),
            PathSegment::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            PathSegment::Index(_) => None,
            PathSegment::Name(name) => Some(name),
        }
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "[{index}]"),
            PathSegment::Name(name) => write!(f, "[{name}]"),
        }
    }
}

/// A raw form key split into its base name and bracket segments.
///
/// ```
/// use formnest_document::path::{ParsedKey, PathSegment};
///
/// let key = ParsedKey::parse("leads[0][name]");
/// assert_eq!(key.base, "leads");
/// assert_eq!(
///     key.segments,
///     vec![PathSegment::Index(0), PathSegment::Name("name".to_string())]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedKey {
    pub base: String,
    pub segments: Vec<PathSegment>,
}

/// Why a key could not be read as `base[seg][seg]...`.
///
/// Positions are byte offsets into the raw key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyPathError {
    #[error("bracket opened at byte {position} is never closed")]
    UnclosedBracket { position: usize },
    #[error("empty bracket group at byte {position}")]
    EmptySegment { position: usize },
    #[error("nested `[` at byte {position}")]
    NestedBracket { position: usize },
    #[error("unexpected {found:?} at byte {position}, expected `[`")]
    UnexpectedCharacter { position: usize, found: char },
}

impl KeyPathError {
    pub fn position(&self) -> usize {
        match self {
            KeyPathError::UnclosedBracket { position }
            | KeyPathError::EmptySegment { position }
            | KeyPathError::NestedBracket { position }
            | KeyPathError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

impl ParsedKey {
    /// A key without any segments.
    pub fn bare(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            segments: Vec::new(),
        }
    }

    /// Parse a raw key, degrading malformed bracket sequences to the bare
    /// base name (everything before the first `[`).
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_else(|_| Self::bare(base_of(raw)))
    }

    /// Parse a raw key, rejecting anything that is not a run of adjacent,
    /// non-empty, flat bracket groups after the base name.
    pub fn try_parse(raw: &str) -> Result<Self, KeyPathError> {
        let Some(open) = raw.find('[') else {
            return Ok(Self::bare(raw));
        };

        let mut segments = Vec::new();
        let mut rest = &raw[open..];
        let mut offset = open;
        while !rest.is_empty() {
            let Some(body) = rest.strip_prefix('[') else {
                let found = rest.chars().next().unwrap_or_default();
                return Err(KeyPathError::UnexpectedCharacter {
                    position: offset,
                    found,
                });
            };
            let close = body
                .find(']')
                .ok_or(KeyPathError::UnclosedBracket { position: offset })?;
            let content = &body[..close];
            if let Some(nested) = content.find('[') {
                return Err(KeyPathError::NestedBracket {
                    position: offset + 1 + nested,
                });
            }
            if content.is_empty() {
                return Err(KeyPathError::EmptySegment { position: offset });
            }
            segments.push(PathSegment::from_content(content));

            // `[` + content + `]`
            let consumed = close + 2;
            rest = &rest[consumed..];
            offset += consumed;
        }

        Ok(Self {
            base: raw[..open].to_string(),
            segments,
        })
    }

    pub fn is_bare(&self) -> bool {
        self.segments.is_empty()
    }
}

/// The portion of a raw key before its first `[`.
pub fn base_of(raw: &str) -> &str {
    raw.find('[').map_or(raw, |open| &raw[..open])
}

impl Display for ParsedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.base)?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
