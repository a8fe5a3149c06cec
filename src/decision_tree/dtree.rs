//! Defines the word-frequency decision tree.
use log::info;

use crate::{Classifier, Dataset, FeatureVector};
use crate::error::{Error, Result};
use super::node::*;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

/// A binary decision tree over word frequencies.
///
/// The tree grows one labeled document at a time.
/// When a document reaches a leaf with a different label,
/// the leaf is split on the word whose frequency differs the most
/// between the two documents,
/// at the midpoint of the two frequencies.
/// Insertion order alone determines the shape of the tree;
/// there is no re-balancing.
///
/// # Example
/// ```
/// use spamtree::prelude::*;
///
/// let mut tree = DecisionTree::new();
/// tree.insert(FeatureVector::new("buy now"), "Spam");
/// tree.insert(FeatureVector::new("hello friend"), "Ham");
///
/// assert_eq!(tree.classify(&FeatureVector::new("buy")), "Spam");
/// assert_eq!(tree.classify(&FeatureVector::new("hello")), "Ham");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecisionTree {
    pub(super) root: Option<Node>,
}

impl From<Node> for DecisionTree {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root: Some(root) }
    }
}

impl DecisionTree {
    /// Construct an empty tree.
    /// An empty tree classifies every document as `""`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Trains a tree by inserting `data[i]` with `labels[i]`
    /// in order.
    /// Fails if the sequences differ in length or are empty.
    pub fn fit<S>(data: Vec<FeatureVector>, labels: &[S]) -> Result<Self>
        where S: AsRef<str>
    {
        if data.len() != labels.len() {
            return Err(Error::invalid_input(format!(
                "Length of provided data [{}] doesn't match provided labels [{}]",
                data.len(),
                labels.len(),
            )));
        }
        if data.is_empty() {
            return Err(Error::invalid_input("training data is empty"));
        }

        let mut tree = Self::new();
        for (vector, label) in data.into_iter().zip(labels) {
            tree.insert(vector, label.as_ref());
        }
        info!(
            "trained a tree with {} leaves and depth {}",
            tree.leaves(),
            tree.depth(),
        );

        Ok(tree)
    }

    /// Trains a tree on every example of `dataset`.
    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        let (data, labels) = dataset.into_parts();
        Self::fit(data, &labels[..])
    }

    /// Inserts one labeled document.
    pub fn insert<S: AsRef<str>>(&mut self, vector: FeatureVector, label: S) {
        let label = label.as_ref();
        match self.root {
            Some(ref mut root) => root.insert(vector, label),
            None => {
                self.root = Some(Node::training_leaf(label, vector));
            },
        }
    }

    /// Classifies a document that may be absent.
    /// An absent document is an error.
    pub fn try_classify(&self, vector: Option<&FeatureVector>)
        -> Result<String>
    {
        let vector = vector.ok_or_else(|| {
            Error::invalid_input("cannot classify an absent document")
        })?;
        Ok(self.classify(vector))
    }

    /// Returns `true` if nothing has been inserted or loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns the number of leaves.
    pub fn leaves(&self) -> usize {
        self.root.as_ref().map_or(0, Node::leaves)
    }

    /// Returns the length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }

    /// Drops the training documents kept by the leaves.
    /// Classification is unaffected,
    /// but later insertions split those leaves
    /// as if their document were empty.
    pub fn strip_training_data(&mut self) {
        if let Some(ref mut root) = self.root {
            root.strip_training_data();
        }
    }

    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        if let Some(ref root) = self.root {
            for row in root.to_dot_info(0) {
                f.write_all(row.as_bytes())?;
            }
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}

// A chain of boxed nodes would otherwise be dropped recursively.
impl Drop for DecisionTree {
    fn drop(&mut self) {
        let mut stack = self.root.take()
            .into_iter()
            .collect::<Vec<_>>();
        while let Some(node) = stack.pop() {
            if let Node::Branch { left, right, .. } = node {
                stack.push(*left);
                stack.push(*right);
            }
        }
    }
}

impl Classifier for DecisionTree {
    fn classify(&self, vector: &FeatureVector) -> String {
        self.root.as_ref()
            .map(|root| root.classify(vector).to_string())
            .unwrap_or_default()
    }
}
