//! Structural comparison of two node trees.
//!
//! Fields are visited in union order: the left side's fields in its native
//! order, then fields only the right side has, in the right side's order.
//! Composite values of the same kind are compared recursively; each level
//! returns its own records and the caller appends them, so the output is
//! depth-first in union order.

use std::collections::{BTreeSet, HashSet};

use dsd_types::{Node, Path, PathSegment};
use tracing::{debug, trace};

use crate::difference::{Difference, StructDiff};
use crate::error::{DiffError, DiffResult, Side};
use crate::tolerance::Tolerance;

/// Field names skipped at every depth.
pub type Exclusions = BTreeSet<String>;

/// Default nesting limit for [`Differ`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// A configured structural comparison.
#[derive(Clone, Debug)]
pub struct Differ {
    exclusions: Exclusions,
    tolerance: Tolerance,
    max_depth: usize,
}

impl Default for Differ {
    fn default() -> Self {
        Self {
            exclusions: Exclusions::new(),
            tolerance: Tolerance::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Differ {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip any mapping field named `field`, wherever it appears.
    pub fn exclude(mut self, field: impl Into<String>) -> Self {
        self.exclusions.insert(field.into());
        self
    }

    pub fn exclude_all<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusions.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Maximum number of nested composite levels below the roots.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn exclusions(&self) -> &Exclusions {
        &self.exclusions
    }

    /// Compare `left` (the baseline) against `right`.
    pub fn compare(&self, left: &Node, right: &Node) -> DiffResult<StructDiff> {
        let changes = self.compare_at(left, right, &Path::root())?;
        debug!(
            changes = changes.len(),
            exclusions = self.exclusions.len(),
            "structural diff complete"
        );
        Ok(StructDiff::from(changes))
    }

    /// Compare two composites whose records are reported relative to `base`.
    pub fn compare_at(&self, left: &Node, right: &Node, base: &Path) -> DiffResult<Vec<Difference>> {
        if !left.is_composite() {
            return Err(DiffError::NotComposite {
                side: Side::Left,
                kind: left.kind(),
            });
        }
        if !right.is_composite() {
            return Err(DiffError::NotComposite {
                side: Side::Right,
                kind: right.kind(),
            });
        }
        self.diff_composites(left, right, base, 0)
    }

    fn diff_composites(
        &self,
        left: &Node,
        right: &Node,
        base: &Path,
        depth: usize,
    ) -> DiffResult<Vec<Difference>> {
        let mut changes = Vec::new();

        for field in field_union(left, right) {
            if let Some(name) = field.as_field() {
                if self.exclusions.contains(name) {
                    trace!(path = %base, field = name, "excluded field skipped");
                    continue;
                }
            }

            let (in_left, in_right) = (left.child(&field), right.child(&field));
            let path = base.child(field);

            match (in_left, in_right) {
                (None, Some(value)) => changes.push(Difference::Added {
                    path,
                    value: value.clone(),
                }),
                (Some(value), None) => changes.push(Difference::Deleted {
                    path,
                    value: value.clone(),
                }),
                (Some(old), Some(new)) => {
                    changes.extend(self.diff_values(old, new, path, depth)?);
                }
                (None, None) => {}
            }
        }

        Ok(changes)
    }

    fn diff_values(
        &self,
        old: &Node,
        new: &Node,
        path: Path,
        depth: usize,
    ) -> DiffResult<Vec<Difference>> {
        let (old_kind, new_kind) = (old.kind(), new.kind());
        if old_kind != new_kind {
            return Ok(vec![Difference::TypeModified {
                path,
                old_kind,
                new_kind,
            }]);
        }

        match (old, new) {
            (Node::Scalar(a), Node::Scalar(b)) => {
                if self.tolerance.scalars_equal(a, b) {
                    Ok(Vec::new())
                } else {
                    Ok(vec![Difference::ValueModified {
                        path,
                        old: old.clone(),
                        new: new.clone(),
                    }])
                }
            }
            _ => {
                if depth + 1 > self.max_depth {
                    return Err(DiffError::DepthExceeded {
                        path,
                        limit: self.max_depth,
                    });
                }
                self.diff_composites(old, new, &path, depth + 1)
            }
        }
    }
}

/// Left fields in order, then right-only fields in order.
fn field_union(left: &Node, right: &Node) -> Vec<PathSegment> {
    let mut union = left.fields().unwrap_or_default();
    let seen: HashSet<PathSegment> = union.iter().cloned().collect();
    union.extend(
        right
            .fields()
            .unwrap_or_default()
            .into_iter()
            .filter(|f| !seen.contains(f)),
    );
    union
}

/// Compare two composites with default tolerance, reporting paths below
/// `base`.
pub fn compare(
    left: &Node,
    right: &Node,
    exclusions: &Exclusions,
    base: &Path,
) -> DiffResult<Vec<Difference>> {
    Differ::new()
        .exclude_all(exclusions.iter().cloned())
        .compare_at(left, right, base)
}

/// Compare two composites with default settings.
pub fn diff_nodes(left: &Node, right: &Node) -> DiffResult<StructDiff> {
    Differ::new().compare(left, right)
}
