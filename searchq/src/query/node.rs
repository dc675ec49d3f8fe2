//! Parsed clauses and the node builder that normalizes them.

use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One parsed clause: `-key:v1,v2`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Clause key (empty for a bare phrase such as `hello` or `"two words"`)
    pub key: String,
    /// Values in first-occurrence order, never empty, no duplicates
    pub values: Vec<String>,
    /// Clause was prefixed with `-`
    pub negative: bool,
}

impl Node {
    /// Create a node from a key and its values.
    pub fn new(key: impl Into<String>, values: Vec<String>, negative: bool) -> Self {
        Self {
            key: key.into(),
            values,
            negative,
        }
    }

    /// Check if this clause has no key.
    pub fn is_keyless(&self) -> bool {
        self.key.is_empty()
    }
}

/// Parsed clauses in input order. Clauses with the same key are kept apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nodes(Vec<Node>);

impl Nodes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append `node` after deduplicating its values.
    ///
    /// Nodes left without values are dropped. Key and negation are kept as-is.
    pub(crate) fn append(&mut self, node: Node) {
        let values = dedup_values(node.values);
        if values.is_empty() {
            return;
        }
        debug!(key = %node.key, values = ?values, negative = node.negative, "flushed node");
        self.0.push(Node {
            key: node.key,
            values,
            negative: node.negative,
        });
    }

    /// Clauses whose key equals `key`, in input order.
    pub fn keyed<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.0.iter().filter(move |n| n.key == key)
    }

    /// Bare phrases (clauses without a key).
    pub fn keyless(&self) -> impl Iterator<Item = &Node> {
        self.0.iter().filter(|n| n.is_keyless())
    }

    /// Clauses prefixed with `-`.
    pub fn negated(&self) -> impl Iterator<Item = &Node> {
        self.0.iter().filter(|n| n.negative)
    }

    pub fn positive(&self) -> impl Iterator<Item = &Node> {
        self.0.iter().filter(|n| !n.negative)
    }

    pub fn into_vec(self) -> Vec<Node> {
        self.0
    }
}

impl Deref for Nodes {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.0
    }
}

impl From<Vec<Node>> for Nodes {
    fn from(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }
}

impl IntoIterator for Nodes {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Nodes {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Stable dedup: keeps the first occurrence of each value.
fn dedup_values(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

/// Compact form: `{key [v1 v2] false}`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} [{}] {}}}", self.key, self.values.join(" "), self.negative)
    }
}

/// Compact form: `[{k1 [v1] false} {k2 [v2] true}]`.
impl fmt::Display for Nodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", node)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_append_dedups_in_order() {
        let mut nodes = Nodes::new();
        nodes.append(Node::new("k", strings(&["b", "a", "b", "c", "a"]), false));
        assert_eq!(nodes[0].values, strings(&["b", "a", "c"]));
    }

    #[test]
    fn test_append_drops_empty() {
        let mut nodes = Nodes::new();
        nodes.append(Node::new("k", Vec::new(), true));
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_append_keeps_empty_string_value() {
        let mut nodes = Nodes::new();
        nodes.append(Node::new("k", strings(&["", ""]), false));
        assert_eq!(nodes[0].values, strings(&[""]));
    }

    #[test]
    fn test_display() {
        let nodes = Nodes::from(vec![
            Node::new("", strings(&["a"]), false),
            Node::new("k", strings(&["v1", "v2"]), true),
        ]);
        assert_eq!(nodes.to_string(), "[{ [a] false} {k [v1 v2] true}]");
        assert_eq!(Nodes::new().to_string(), "[]");
    }

    #[test]
    fn test_filters() {
        let nodes = Nodes::from(vec![
            Node::new("a", strings(&["b"]), false),
            Node::new("", strings(&["x"]), true),
            Node::new("a", strings(&["c"]), true),
        ]);
        assert_eq!(nodes.keyed("a").count(), 2);
        assert_eq!(nodes.keyless().count(), 1);
        assert_eq!(nodes.negated().count(), 2);
        assert_eq!(nodes.positive().count(), 1);
    }

    #[test]
    fn test_serde_shape() {
        let nodes = Nodes::from(vec![Node::new("k", strings(&["v"]), true)]);
        let json = serde_json::to_string(&nodes).unwrap();
        assert_eq!(json, r#"[{"key":"k","values":["v"],"negative":true}]"#);

        let back: Nodes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, nodes);
    }
}
