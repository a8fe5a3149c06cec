//! The files in `text/` directory define
//! the word-frequency representation of a document.

/// Defines `FeatureVector`.
pub mod feature_vector;

pub use feature_vector::FeatureVector;
