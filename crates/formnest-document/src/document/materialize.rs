//! Conversion of a [`FormDocument`] into a generic [`FormValue`].

use crate::prelude_internal::*;

impl FormDocument {
    /// Materialize the whole document as an object of its base keys.
    ///
    /// ```
    /// use formnest_document::{Config, FormDocument, FormValue};
    ///
    /// let doc = FormDocument::parse("tags[2]=x&name=a", &Config::default()).unwrap();
    /// let value = doc.to_value();
    /// assert_eq!(value.get("name"), Some(&FormValue::String("a".into())));
    /// assert_eq!(value.get("tags").and_then(FormValue::as_array).map(<[_]>::len), Some(3));
    /// ```
    pub fn to_value(&self) -> FormValue {
        FormValue::Object(self.to_map())
    }

    /// Materialize every base key.
    pub fn to_map(&self) -> Map<String, FormValue> {
        self.root()
            .named
            .iter()
            .map(|(name, &child)| (name.clone(), self.node_value(child)))
            .collect()
    }

    /// Materialize the subtree rooted at `id`.
    ///
    /// Arrays are dense up to their largest index, unsupplied slots are
    /// [`FormValue::Null`].
    pub fn node_value(&self, id: NodeId) -> FormValue {
        let node = self.node(id);
        match node.kind() {
            NodeKind::Scalar => node
                .scalar
                .as_ref()
                .map_or(FormValue::Null, |leaf| leaf.value.to_value()),
            NodeKind::Array => {
                let mut items = vec![FormValue::Null; node.array_len()];
                for (&index, &child) in &node.indexed {
                    items[index] = self.node_value(child);
                }
                FormValue::Array(items)
            }
            NodeKind::Object => FormValue::Object(
                node.named
                    .iter()
                    .map(|(name, &child)| (name.clone(), self.node_value(child)))
                    .collect(),
            ),
        }
    }
}
