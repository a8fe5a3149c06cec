//! The files in `decision_tree/` directory define
//! the word-frequency decision tree and its dump format.

/// Defines the decision tree.
pub mod dtree;
/// Defines the nodes of `DecisionTree`.
pub mod node;
/// Defines the split rule of a branch.
pub mod splitter;

mod persist;

pub use dtree::DecisionTree;
pub use node::Node;
pub use splitter::{LeftRight, Splitter, midpoint};
