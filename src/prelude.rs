//! Exports the tree, the feature vector and the traits.
//!
pub use crate::text::FeatureVector;


pub use crate::decision_tree::{
    DecisionTree,
    Node,
    Splitter,
};


pub use crate::classifier::Classifier;
pub use crate::accuracy::Accuracy;


pub use crate::sample::{
    Dataset,
    DatasetReader,
};


pub use crate::error::{Error, Result};
