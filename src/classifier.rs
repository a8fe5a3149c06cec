//! The core trait for text classifiers.
//!
//! A classifier maps a [`FeatureVector`] to a label.
//! Bulk prediction and accuracy measurement are derived from
//! [`Classifier::classify`], so every query goes through
//! the same traversal.
use crate::{Accuracy, FeatureVector};
use crate::error::{Error, Result};

/// A trait that defines the behavor of classifier.
/// You only need to implement `classify` method.
pub trait Classifier {
    /// Predicts the label of `vector`.
    fn classify(&self, vector: &FeatureVector) -> String;

    /// Predicts the labels of `vectors`.
    fn classify_all(&self, vectors: &[FeatureVector]) -> Vec<String> {
        vectors.iter()
            .map(|vector| self.classify(vector))
            .collect::<Vec<_>>()
    }

    /// Computes the accuracy on `data`,
    /// where `labels[i]` is the expected label of `data[i]`.
    /// The report holds one entry per expected label
    /// and the aggregate entry `"Overall"`.
    fn accuracy<S>(&self, data: &[FeatureVector], labels: &[S])
        -> Result<Accuracy>
        where S: AsRef<str>
    {
        if data.len() != labels.len() {
            return Err(Error::invalid_input(format!(
                "Length of provided data [{}] doesn't match provided labels [{}]",
                data.len(),
                labels.len(),
            )));
        }

        let mut accuracy = Accuracy::default();
        for (vector, label) in data.iter().zip(labels) {
            let prediction = self.classify(vector);
            accuracy.record(label.as_ref(), &prediction);
        }
        Ok(accuracy)
    }
}
