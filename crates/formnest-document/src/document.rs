pub mod materialize;
pub mod node;

use tracing::{debug, trace};

use crate::corpus::{DecodeError, FlatCorpus};
use crate::path::{base_of, ParsedKey, PathSegment};
use crate::prelude_internal::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Every form entry folded into one tree.
///
/// The root is synthetic: its named children are the base keys of the
/// input. A path is created at most once, later entries sharing a prefix
/// reuse the existing nodes.
#[derive(Debug, Clone)]
pub struct FormDocument {
    root: NodeId,
    nodes: Vec<Node>,
    /// Diagnostics collected while inserting entries.
    build_diagnostics: Vec<Diagnostic>,
}

impl Default for FormDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDocument {
    pub fn new() -> Self {
        Self {
            root: NodeId(0),
            nodes: vec![Node::default()],
            build_diagnostics: Vec::new(),
        }
    }

    /// Build the tree for a decoded corpus.
    pub fn from_corpus(corpus: &FlatCorpus, config: &Config) -> Self {
        let mut doc = Self::new();
        if corpus.discarded() > 0 {
            doc.build_diagnostics.push(Diagnostic::RepeatedValues {
                count: corpus.discarded(),
            });
        }
        for (key, value) in corpus.iter() {
            doc.insert(key, value, config);
        }
        doc
    }

    /// Decode form-urlencoded text and build its tree.
    pub fn parse(query: &str, config: &Config) -> Result<Self, DecodeError> {
        let corpus = FlatCorpus::parse(query)?;
        Ok(Self::from_corpus(&corpus, config))
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> &Node {
        self.node(self.root)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn base_keys(&self) -> impl Iterator<Item = &str> {
        self.root().named.keys().map(String::as_str)
    }

    /// Insert one raw entry.
    ///
    /// Malformed keys fall back to their base name, keys deeper than
    /// [`Config::max_depth`] are cut, and indices above [`Config::max_index`]
    /// are kept as object keys.
    pub fn insert(&mut self, raw_key: &str, value: &str, config: &Config) {
        let mut parsed = match ParsedKey::try_parse(raw_key) {
            Ok(parsed) => parsed,
            Err(error) => {
                debug!(key = raw_key, %error, "malformed key, using its base name");
                self.build_diagnostics.push(Diagnostic::MalformedKey {
                    key: raw_key.to_string(),
                    error,
                });
                ParsedKey::bare(base_of(raw_key))
            }
        };
        if parsed.segments.len() > config.max_depth {
            debug!(key = raw_key, max_depth = config.max_depth, "key too deep, cut");
            self.build_diagnostics.push(Diagnostic::DepthOverLimit {
                key: raw_key.to_string(),
                depth: parsed.segments.len(),
                max_depth: config.max_depth,
            });
            parsed.segments.truncate(config.max_depth);
        }
        let texts = segment_texts(raw_key, &parsed);
        let parsed = self.limit_indices(raw_key, parsed, &texts, config.max_index);
        self.insert_segments(&parsed, &texts, value);
    }

    /// Insert an entry whose key has already been parsed.
    ///
    /// No limits are applied, see [`FormDocument::insert`].
    pub fn insert_parsed(&mut self, key: &ParsedKey, raw: &str) -> NodeId {
        self.insert_segments(key, &[], raw)
    }

    fn insert_segments(&mut self, key: &ParsedKey, texts: &[&str], raw: &str) -> NodeId {
        let mut current = self.named_child(self.root, &key.base);
        for (position, segment) in key.segments.iter().enumerate() {
            current = match segment {
                PathSegment::Index(index) => {
                    self.indexed_child(current, *index, texts.get(position).copied())
                }
                PathSegment::Name(name) => self.named_child(current, name),
            };
        }

        let leaf = Leaf::new(raw);
        trace!(key = %key, value = ?leaf.value, "insert");
        if let Some(previous) = self.node_mut(current).scalar.replace(leaf) {
            debug!(path = %key, previous = %previous.raw, raw, "value replaced");
            self.build_diagnostics.push(Diagnostic::ScalarReplaced {
                path: key.to_string(),
                previous: previous.raw,
                raw: raw.to_string(),
            });
        }
        current
    }

    fn limit_indices(
        &mut self,
        raw_key: &str,
        mut key: ParsedKey,
        texts: &[&str],
        max_index: usize,
    ) -> ParsedKey {
        for (position, segment) in key.segments.iter_mut().enumerate() {
            if let PathSegment::Index(index) = *segment
                && index > max_index
            {
                debug!(key = raw_key, index, max_index, "index over limit");
                self.build_diagnostics.push(Diagnostic::IndexOverLimit {
                    key: raw_key.to_string(),
                    index,
                    max_index,
                });
                let name = texts
                    .get(position)
                    .map_or_else(|| index.to_string(), |text| text.to_string());
                *segment = PathSegment::Name(name);
            }
        }
        key
    }

    fn create_node(&mut self) -> NodeId {
        self.nodes.push(Node::default());
        NodeId(self.nodes.len() - 1)
    }

    fn named_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        if let Some(id) = self.node(parent).get_named(name) {
            return id;
        }
        let id = self.create_node();
        self.node_mut(parent).named.insert(name.to_string(), id);
        id
    }

    fn indexed_child(&mut self, parent: NodeId, index: usize, text: Option<&str>) -> NodeId {
        if let Some(id) = self.node(parent).get_indexed(index) {
            return id;
        }
        let id = self.create_node();
        let node = self.node_mut(parent);
        node.indexed.insert(index, id);
        if let Some(text) = text {
            node.index_keys.insert(index, text.to_string());
        }
        id
    }

    /// Find the node for a path, if any entry created it.
    pub fn lookup(&self, key: &ParsedKey) -> Option<NodeId> {
        let mut current = self.root().get_named(&key.base)?;
        for segment in &key.segments {
            let node = self.node(current);
            current = match segment {
                PathSegment::Index(index) => node.get_indexed(*index)?,
                PathSegment::Name(name) => node.get_named(name)?,
            };
        }
        Some(current)
    }

    /// Everything resolved silently while building and reading this tree.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.build_diagnostics.clone();
        for (name, &id) in &self.root().named {
            self.collect_shadowing(id, name.clone(), &mut diagnostics);
        }
        diagnostics
    }

    fn collect_shadowing(&self, id: NodeId, path: String, out: &mut Vec<Diagnostic>) {
        let node = self.node(id);
        if let Some(leaf) = &node.scalar
            && node.has_children()
        {
            out.push(Diagnostic::ScalarShadowed {
                path: path.clone(),
                raw: leaf.raw.clone(),
            });
        }
        if !node.indexed.is_empty() && !node.named.is_empty() {
            out.push(Diagnostic::NamedChildrenDropped {
                path: path.clone(),
                names: node.named.keys().cloned().collect(),
            });
        }
        for (index, &child) in &node.indexed {
            self.collect_shadowing(child, format!("{path}[{index}]"), out);
        }
        for (name, &child) in &node.named {
            self.collect_shadowing(child, format!("{path}[{name}]"), out);
        }
    }
}

/// Bracket contents of a well-formed key, in order. Empty for bare keys,
/// including malformed keys that fell back to their base.
fn segment_texts<'a>(raw_key: &'a str, key: &ParsedKey) -> Vec<&'a str> {
    if key.is_bare() {
        return Vec::new();
    }
    raw_key[key.base.len()..]
        .strip_prefix('[')
        .and_then(|groups| groups.strip_suffix(']'))
        .map_or_else(Vec::new, |groups| groups.split("][").collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(pairs: &[(&str, &str)]) -> FormDocument {
        FormDocument::from_corpus(&FlatCorpus::from_pairs(pairs.iter().copied()), &Config::default())
    }

    #[test]
    fn test_shared_prefix_reuses_nodes() {
        let doc = build(&[("a[0][x]", "1"), ("a[0][y]", "2"), ("a[1][x]", "3")]);
        // root, a, a[0], a[0][x], a[0][y], a[1], a[1][x]
        assert_eq!(doc.node_count(), 7);
        let a = doc.root().get_named("a").unwrap();
        assert_eq!(doc.node(a).indexed.len(), 2);
    }

    #[test]
    fn test_numeric_base_is_a_name() {
        let doc = build(&[("0", "x")]);
        assert_eq!(doc.base_keys().collect::<Vec<_>>(), vec!["0"]);
        assert!(doc.root().indexed.is_empty());
    }

    #[test]
    fn test_lookup() {
        let doc = build(&[("leads[0][name]", "A")]);
        let id = doc.lookup(&ParsedKey::parse("leads[0][name]")).unwrap();
        assert_eq!(doc.node(id).raw(), Some("A"));
        assert!(doc.lookup(&ParsedKey::parse("leads[1]")).is_none());
    }

    #[test]
    fn test_same_path_from_two_keys_replaces() {
        let doc = build(&[("a[0]", "first"), ("a[00]", "second")]);
        let id = doc.lookup(&ParsedKey::parse("a[0]")).unwrap();
        assert_eq!(doc.node(id).raw(), Some("second"));
        assert_eq!(
            doc.diagnostics(),
            vec![Diagnostic::ScalarReplaced {
                path: "a[0]".to_string(),
                previous: "first".to_string(),
                raw: "second".to_string(),
            }]
        );
    }

    #[test]
    fn test_malformed_key_uses_base() {
        let doc = build(&[("a[b", "1")]);
        let id = doc.lookup(&ParsedKey::bare("a")).unwrap();
        assert_eq!(doc.node(id).raw(), Some("1"));
        assert!(matches!(
            doc.diagnostics().as_slice(),
            [Diagnostic::MalformedKey { key, .. }] if key == "a[b"
        ));
    }

    #[test]
    fn test_index_over_limit_becomes_name() {
        let config = Config::default().with_max_index(10);
        let doc = FormDocument::from_corpus(&FlatCorpus::from_pairs([("a[11]", "x")]), &config);
        let a = doc.root().get_named("a").unwrap();
        assert!(doc.node(a).indexed.is_empty());
        assert!(doc.node(a).get_named("11").is_some());
        assert_eq!(
            doc.diagnostics(),
            vec![Diagnostic::IndexOverLimit {
                key: "a[11]".to_string(),
                index: 11,
                max_index: 10,
            }]
        );
    }

    #[test]
    fn test_deep_key_is_cut() {
        let config = Config::default().with_max_depth(3);
        let key = format!("a{}", "[x]".repeat(5));
        let doc = FormDocument::from_corpus(&FlatCorpus::from_pairs([(key.as_str(), "1")]), &config);
        let id = doc.lookup(&ParsedKey::parse("a[x][x][x]")).unwrap();
        assert_eq!(doc.node(id).raw(), Some("1"));
        assert!(!doc.node(id).has_children());
        assert_eq!(
            doc.diagnostics(),
            vec![Diagnostic::DepthOverLimit {
                key,
                depth: 5,
                max_depth: 3,
            }]
        );
    }

    #[test]
    fn test_very_deep_key_materializes() {
        let key = format!("a{}", "[x]".repeat(100_000));
        let doc = FormDocument::from_corpus(
            &FlatCorpus::from_pairs([(key.as_str(), "1")]),
            &Config::default(),
        );
        // root, `a`, and one node per kept bracket group
        assert_eq!(doc.node_count(), Config::DEFAULT_MAX_DEPTH + 2);
        let mut value = doc.to_value();
        let mut depth = 0;
        while let Some(inner) = value.get("a").or_else(|| value.get("x")).cloned() {
            value = inner;
            depth += 1;
        }
        assert_eq!(depth, Config::DEFAULT_MAX_DEPTH + 1);
        assert_eq!(value, FormValue::Integer(1));
    }

    #[test]
    fn test_index_keeps_its_text() {
        let doc = build(&[("m[007]", "x"), ("m[7]", "y"), ("m[1]", "z")]);
        let m = doc.node(doc.root().get_named("m").unwrap());
        assert_eq!(m.index_key(7), "007");
        assert_eq!(m.index_key(1), "1");
        assert_eq!(m.index_key(9), "9");
    }

    #[test]
    fn test_index_over_limit_keeps_its_text() {
        let config = Config::default().with_max_index(10);
        let doc = FormDocument::from_corpus(&FlatCorpus::from_pairs([("a[0011]", "x")]), &config);
        let a = doc.root().get_named("a").unwrap();
        assert!(doc.node(a).get_named("0011").is_some());
    }

    #[test]
    fn test_shadowing_diagnostics() {
        let doc = build(&[("a", "v"), ("a[0]", "x"), ("a[k]", "y")]);
        assert_eq!(
            doc.diagnostics(),
            vec![
                Diagnostic::ScalarShadowed {
                    path: "a".to_string(),
                    raw: "v".to_string(),
                },
                Diagnostic::NamedChildrenDropped {
                    path: "a".to_string(),
                    names: vec!["k".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_repeated_values_reported() {
        let corpus = FlatCorpus::parse("a=1&a=2").unwrap();
        let doc = FormDocument::from_corpus(&corpus, &Config::default());
        assert_eq!(doc.diagnostics(), vec![Diagnostic::RepeatedValues { count: 1 }]);
    }
}
