//! Difference records produced by the differ.

use std::fmt;

use dsd_types::{Node, NodeKind, Path};
use serde::Serialize;

/// The four kinds of reported discrepancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeKind {
    Added,
    Deleted,
    TypeModified,
    ValueModified,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::TypeModified => "type-modified",
            Self::ValueModified => "value-modified",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single discrepancy between the baseline (left) and compared (right)
/// trees. Payloads are owned copies of the input values.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Difference {
    /// Present only on the right.
    Added { path: Path, value: Node },
    /// Present only on the left.
    Deleted { path: Path, value: Node },
    /// Present on both sides with different kinds; not compared further.
    TypeModified {
        path: Path,
        old_kind: NodeKind,
        new_kind: NodeKind,
    },
    /// Scalars of the same kind that are not equal.
    ValueModified { path: Path, old: Node, new: Node },
}

impl Difference {
    pub fn path(&self) -> &Path {
        match self {
            Self::Added { path, .. }
            | Self::Deleted { path, .. }
            | Self::TypeModified { path, .. }
            | Self::ValueModified { path, .. } => path,
        }
    }

    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::Added { .. } => ChangeKind::Added,
            Self::Deleted { .. } => ChangeKind::Deleted,
            Self::TypeModified { .. } => ChangeKind::TypeModified,
            Self::ValueModified { .. } => ChangeKind::ValueModified,
        }
    }

    /// The payload rendered as display strings, in record order.
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::Added { value, .. } | Self::Deleted { value, .. } => vec![value.to_string()],
            Self::TypeModified {
                old_kind, new_kind, ..
            } => vec![old_kind.to_string(), new_kind.to_string()],
            Self::ValueModified { old, new, .. } => vec![old.to_string(), new.to_string()],
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, {}", self.path(), self.kind(), self.details().join(" "))
    }
}

/// The ordered result of comparing two trees.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StructDiff {
    /// Records in depth-first, field-union order.
    pub changes: Vec<Difference>,
}

impl StructDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no differences.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of differences.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Difference> {
        self.changes.iter()
    }

    /// Number of records of the given kind.
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind() == kind).count()
    }

    pub fn additions(&self) -> usize {
        self.count(ChangeKind::Added)
    }

    pub fn deletions(&self) -> usize {
        self.count(ChangeKind::Deleted)
    }

    pub fn type_modifications(&self) -> usize {
        self.count(ChangeKind::TypeModified)
    }

    pub fn value_modifications(&self) -> usize {
        self.count(ChangeKind::ValueModified)
    }
}

impl From<Vec<Difference>> for StructDiff {
    fn from(changes: Vec<Difference>) -> Self {
        Self { changes }
    }
}

impl IntoIterator for StructDiff {
    type Item = Difference;
    type IntoIter = std::vec::IntoIter<Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a StructDiff {
    type Item = &'a Difference;
    type IntoIter = std::slice::Iter<'a, Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(field: &str) -> Path {
        Path::root().child(field)
    }

    #[test]
    fn display_value_modified() {
        let d = Difference::ValueModified {
            path: at("outer").child("inner"),
            old: Node::from(1i64),
            new: Node::from(2i64),
        };
        assert_eq!(d.to_string(), "outer/inner: value-modified, 1 2");
    }

    #[test]
    fn display_type_modified() {
        let d = Difference::TypeModified {
            path: at("k"),
            old_kind: NodeKind::Sequence,
            new_kind: NodeKind::String,
        };
        assert_eq!(d.to_string(), "k: type-modified, sequence string");
    }

    #[test]
    fn display_added_renders_json() {
        let d = Difference::Added {
            path: at("z").child(0usize),
            value: Node::from(json!({"a": "b"})),
        };
        assert_eq!(d.to_string(), r#"z/0: added, {"a":"b"}"#);
    }

    #[test]
    fn serialize_is_tagged() {
        let d = Difference::Deleted {
            path: at("x"),
            value: Node::from(1i64),
        };
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({"kind": "deleted", "path": ["x"], "value": 1})
        );
    }

    #[test]
    fn counts_by_kind() {
        let diff = StructDiff::from(vec![
            Difference::Added { path: at("a"), value: Node::null() },
            Difference::Added { path: at("b"), value: Node::null() },
            Difference::Deleted { path: at("c"), value: Node::null() },
            Difference::ValueModified {
                path: at("d"),
                old: Node::from(1i64),
                new: Node::from(2i64),
            },
        ]);
        assert_eq!(diff.len(), 4);
        assert_eq!(diff.additions(), 2);
        assert_eq!(diff.deletions(), 1);
        assert_eq!(diff.type_modifications(), 0);
        assert_eq!(diff.value_modifications(), 1);
    }

    #[test]
    fn empty_diff() {
        let diff = StructDiff::new();
        assert!(diff.is_empty());
        assert_eq!(serde_json::to_string(&diff).unwrap(), "[]");
    }
}
