//! The universal recursive value type.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::path::PathSegment;

/// Runtime kind of a [`Node`].
///
/// Two values whose kinds differ are reported as a type modification and
/// never compared further.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Mapping,
    Sequence,
    Bool,
    Int,
    Float,
    String,
    Null,
    Binary,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Null => "null",
            Self::Binary => "binary",
        }
    }

    /// Returns `true` for mappings and sequences.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Mapping | Self::Sequence)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaf value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Integer(i128),
    Float(f64),
    String(String),
    Null,
    Binary(Vec<u8>),
}

impl Scalar {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Bool(_) => NodeKind::Bool,
            Self::Integer(_) => NodeKind::Int,
            Self::Float(_) => NodeKind::Float,
            Self::String(_) => NodeKind::String,
            Self::Null => NodeKind::Null,
            Self::Binary(_) => NodeKind::Binary,
        }
    }
}

/// Field map that keeps keys unique and remembers insertion order.
///
/// Order matters to the differ: it iterates fields in the order the decoder
/// produced them. Equality ignores order.
#[derive(Clone, Debug, Default)]
pub struct Mapping {
    entries: IndexMap<String, Node>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a field. An existing key keeps its position and the previous
    /// value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: Node) -> Option<Node> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| o == v))
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

/// A nested value as produced by a decoder.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Mapping(Mapping),
    Sequence(Vec<Node>),
    Scalar(Scalar),
}

impl Node {
    pub fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Mapping(_) => NodeKind::Mapping,
            Self::Sequence(_) => NodeKind::Sequence,
            Self::Scalar(s) => s.kind(),
        }
    }

    pub fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    /// Child identifiers in native order: mapping keys, or `0..len` for a
    /// sequence. Scalars have none.
    pub fn fields(&self) -> Option<Vec<PathSegment>> {
        match self {
            Self::Mapping(m) => Some(m.keys().map(PathSegment::from).collect()),
            Self::Sequence(items) => Some((0..items.len()).map(PathSegment::Index).collect()),
            Self::Scalar(_) => None,
        }
    }

    /// Look up a direct child. A field on a sequence or an index on a
    /// mapping is simply absent.
    pub fn child(&self, segment: &PathSegment) -> Option<&Node> {
        match (self, segment) {
            (Self::Mapping(m), PathSegment::Field(name)) => m.get(name),
            (Self::Sequence(items), PathSegment::Index(i)) => items.get(*i),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<Mapping> for Node {
    fn from(m: Mapping) -> Self {
        Self::Mapping(m)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::Sequence(items)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Self::Scalar(Scalar::Integer(i128::from(i)))
    }
}

impl From<f64> for Node {
    fn from(x: f64) -> Self {
        Self::Scalar(Scalar::Float(x))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}
