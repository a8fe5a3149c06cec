#![warn(missing_docs)]

//!
//! A crate that classifies short text documents,
//! such as e-mails or SMS messages, with a binary decision tree
//! over word frequencies.
//!
//! - Feature representation
//!     A document is a [`FeatureVector`]:
//!     the frequency of each whitespace-separated word.
//!
//! - Training
//!     [`DecisionTree`] grows one labeled document at a time.
//!     A document that reaches a leaf of another label
//!     splits that leaf on the word whose frequency differs the most
//!     between the two documents.
//!
//! - Persistence
//!     A tree is saved to and loaded from a line-oriented dump,
//!     and can be exported to a Graphviz dot file.
//!
//! # Example
//! ```no_run
//! use spamtree::prelude::*;
//!
//! let train = DatasetReader::default()
//!     .file("data/emails/train.csv")
//!     .seed(1234)
//!     .read()
//!     .unwrap();
//! let test = DatasetReader::default()
//!     .file("data/emails/test.csv")
//!     .read()
//!     .unwrap();
//!
//! let tree = DecisionTree::from_dataset(train).unwrap();
//! let accuracy = tree.accuracy(test.data(), test.labels()).unwrap();
//! println!("{accuracy}");
//! ```

pub mod constants;
pub mod error;
pub mod text;
pub mod decision_tree;
pub mod classifier;
pub mod accuracy;
pub mod sample;
pub mod prelude;

pub use error::{Error, Result};
pub use text::FeatureVector;
pub use decision_tree::DecisionTree;
pub use classifier::Classifier;
pub use accuracy::Accuracy;
pub use sample::{Dataset, DatasetReader};
