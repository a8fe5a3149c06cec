//! A node struct used in the decision tree algorithm.
use log::debug;

use crate::FeatureVector;
use super::splitter::*;

use std::mem;

/// Stands in for the training document of a leaf that has none,
/// e.g., a leaf read from a tree dump.
static EMPTY_VECTOR: FeatureVector = FeatureVector::empty();

/// Enumeration of branch and leaf nodes.
/// A branch always owns exactly two children and never carries a label;
/// a leaf always carries a label and never has children.
#[derive(Debug, Clone)]
pub enum Node {
    /// A node that have two childrens.
    Branch {
        /// Routing rule of this node.
        splitter: Splitter,
        /// Subtree for documents with `frequency < threshold`.
        left:     Box<Node>,
        /// Subtree for documents with `frequency >= threshold`.
        right:    Box<Node>,
    },
    /// A node that have no child.
    Leaf {
        /// Predicted label.
        label:  String,
        /// The training document that created this leaf, if retained.
        vector: Option<FeatureVector>,
    },
}

impl Node {
    /// Construct a branch node from the given components.
    pub fn branch(splitter: Splitter, left: Box<Node>, right: Box<Node>)
        -> Self
    {
        Self::Branch {
            splitter,
            left,
            right,
        }
    }

    /// Construct a leaf node without a training document.
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Self::Leaf { label: label.into(), vector: None, }
    }

    /// Construct a leaf node that keeps the document it was created from.
    pub fn training_leaf<S: Into<String>>(label: S, vector: FeatureVector)
        -> Self
    {
        Self::Leaf { label: label.into(), vector: Some(vector), }
    }

    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Routes `vector` down this subtree and stores it.
    ///
    /// A leaf with the same label absorbs the document.
    /// A leaf with another label turns into a branch
    /// that separates the old leaf from a new one.
    pub(super) fn insert(&mut self, vector: FeatureVector, label: &str) {
        let mut node = self;
        while let Self::Branch { splitter, left, right } = node {
            node = match splitter.split(&vector) {
                LeftRight::Left  => left.as_mut(),
                LeftRight::Right => right.as_mut(),
            };
        }
        node.split_leaf(vector, label);
    }

    fn split_leaf(&mut self, vector: FeatureVector, label: &str) {
        let Self::Leaf { label: current, vector: existing } = self else {
            return;
        };
        if current.as_str() == label {
            return;
        }

        let existing = existing.as_ref().unwrap_or(&EMPTY_VECTOR);
        let splitter = Splitter::between(&vector, existing);
        debug!("split leaf `{current}` from `{label}` on [{splitter}]");

        let side = splitter.split(&vector);
        let fresh = Box::new(Self::training_leaf(label, vector));
        let old = Box::new(mem::replace(self, Self::leaf("")));
        let (left, right) = match side {
            LeftRight::Left  => (fresh, old),
            LeftRight::Right => (old, fresh),
        };

        *self = Self::branch(splitter, left, right);
    }

    /// Returns the label of the leaf `vector` reaches.
    pub(super) fn classify(&self, vector: &FeatureVector) -> &str {
        let mut node = self;
        loop {
            match node {
                Self::Branch { splitter, left, right } => {
                    node = match splitter.split(vector) {
                        LeftRight::Left  => left.as_ref(),
                        LeftRight::Right => right.as_ref(),
                    };
                },
                Self::Leaf { label, .. } => {
                    return label;
                },
            }
        }
    }

    /// Returns the number of leaves of this sub-tree.
    pub(super) fn leaves(&self) -> usize {
        let mut stack = vec![self];
        let mut n_leaves = 0_usize;
        while let Some(node) = stack.pop() {
            match node {
                Self::Branch { left, right, .. } => {
                    stack.push(left.as_ref());
                    stack.push(right.as_ref());
                },
                Self::Leaf { .. } => { n_leaves += 1; },
            }
        }
        n_leaves
    }

    /// Returns the number of edges on the longest root-to-leaf path.
    pub(super) fn depth(&self) -> usize {
        let mut stack = vec![(self, 0_usize)];
        let mut depth = 0_usize;
        while let Some((node, d)) = stack.pop() {
            match node {
                Self::Branch { left, right, .. } => {
                    stack.push((left.as_ref(), d + 1));
                    stack.push((right.as_ref(), d + 1));
                },
                Self::Leaf { .. } => { depth = depth.max(d); },
            }
        }
        depth
    }

    /// Drops the training documents kept by the leaves.
    pub(super) fn strip_training_data(&mut self) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Branch { left, right, .. } => {
                    stack.push(left.as_mut());
                    stack.push(right.as_mut());
                },
                Self::Leaf { vector, .. } => { *vector = None; },
            }
        }
    }

    /// Returns the body of the dot graph of this sub-tree.
    /// Nodes are numbered in pre-order, starting from `id`.
    pub(super) fn to_dot_info(&self, id: usize) -> Vec<String> {
        // (node, parent id, edge label)
        let mut stack = vec![(self, None, "")];
        let mut next_id = id;
        let mut info = Vec::new();
        while let Some((node, parent, edge)) = stack.pop() {
            let id = next_id;
            next_id += 1;

            match node {
                Self::Branch { splitter, left, right } => {
                    info.push(format!(
                        "\tnode_{id} [ label = \"{feat} < {thr:.4} ?\" ];\n",
                        feat = escape(&splitter.feature),
                        thr  = splitter.threshold,
                    ));
                    stack.push((right.as_ref(), Some(id), "No"));
                    stack.push((left.as_ref(), Some(id), "Yes"));
                },
                Self::Leaf { label, .. } => {
                    info.push(format!(
                        "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                        label = escape(label),
                    ));
                },
            }

            if let Some(parent) = parent {
                info.push(format!(
                    "\tnode_{parent} -- node_{id} [ label = \"{edge}\" ];\n",
                ));
            }
        }
        info
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (
                    Self::Branch { splitter: s1, left: l1, right: r1 },
                    Self::Branch { splitter: s2, left: l2, right: r2 },
                ) => {
                    if s1 != s2 {
                        return false;
                    }
                    stack.push((l1.as_ref(), l2.as_ref()));
                    stack.push((r1.as_ref(), r2.as_ref()));
                },
                (
                    Self::Leaf { label: a, vector: u },
                    Self::Leaf { label: b, vector: v },
                ) => {
                    if a != b || u != v {
                        return false;
                    }
                },
                _ => return false,
            }
        }
        true
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
