// ferrokin_core/src/ancestry.rs

//! The per-column ancestor index (`parents_fromRow`).
//!
//! Entry `c` holds the velocity column that precedes column `c` when walking
//! from a joint toward the root: the previous column of the same joint, or
//! the last column of the nearest ancestor joint that has degrees of freedom.
//! `None` marks the root. Walking the index from a joint's last column visits
//! that joint's columns and then every ancestor column, strictly decreasing.

use std::iter::FusedIterator;

use crate::model::Model;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AncestorIndex {
    parents: Vec<Option<usize>>,
}

impl AncestorIndex {
    /// Wraps a raw parent-column array. Every entry must point to a strictly
    /// smaller column.
    pub fn from_parents(parents: Vec<Option<usize>>) -> Self {
        debug_assert!(parents
            .iter()
            .enumerate()
            .all(|(col, p)| p.map_or(true, |p| p < col)));
        Self { parents }
    }

    pub fn from_model(model: &Model) -> Self {
        let mut parents = vec![None; model.nv];
        for (joint_id, joint) in model.joints.iter().enumerate() {
            let parent_last = if joint_id == 0 {
                None
            } else {
                model.last_column(model.parents[joint_id])
            };
            for (d, col) in joint.columns().enumerate() {
                parents[col] = if d == 0 { parent_last } else { Some(col - 1) };
            }
        }
        Self { parents }
    }

    /// Number of velocity columns covered.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// The column preceding `col` on its ancestor chain.
    pub fn parent(&self, col: usize) -> Option<usize> {
        self.parents[col]
    }

    /// Iterates `start, parent(start), ...` until the root.
    /// `None` yields an empty chain (a joint with no moving ancestors).
    pub fn chain(&self, start: Option<usize>) -> AncestorColumns<'_> {
        AncestorColumns {
            parents: &self.parents,
            next: start,
        }
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.parents
    }
}

/// Iterator over an ancestor chain. Cloning it restarts from the same position.
#[derive(Debug, Clone)]
pub struct AncestorColumns<'a> {
    parents: &'a [Option<usize>],
    next: Option<usize>,
}

impl Iterator for AncestorColumns<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let col = self.next?;
        self.next = self.parents[col];
        Some(col)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(col) => (1, Some(col + 1)),
        }
    }
}

impl FusedIterator for AncestorColumns<'_> {}
