use rand::prelude::*;

use crate::FeatureVector;
use crate::error::{Error, Result};

/// Struct `Dataset` holds documents and their labels.
/// `labels()[i]` is the label of `data()[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    data: Vec<FeatureVector>,
    labels: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from raw documents and their labels.
    pub fn new<C, L>(contents: &[C], labels: &[L]) -> Result<Self>
        where C: AsRef<str>,
              L: AsRef<str>,
    {
        let data = contents.iter()
            .map(|content| FeatureVector::new(content.as_ref()))
            .collect::<Vec<_>>();
        let labels = labels.iter()
            .map(|label| label.as_ref().to_string())
            .collect::<Vec<_>>();

        Self::from_parts(data, labels)
    }

    /// Builds a dataset from vectors and labels of the same length.
    pub fn from_parts(data: Vec<FeatureVector>, labels: Vec<String>)
        -> Result<Self>
    {
        if data.len() != labels.len() {
            return Err(Error::invalid_input(format!(
                "Length of provided data [{}] doesn't match provided labels [{}]",
                data.len(),
                labels.len(),
            )));
        }
        Ok(Self { data, labels })
    }

    /// Returns the number of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there is no example.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the documents.
    #[inline]
    pub fn data(&self) -> &[FeatureVector] {
        &self.data[..]
    }

    /// Returns the labels.
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels[..]
    }

    /// Iterates over `(document, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FeatureVector, &str)> + '_ {
        self.data.iter()
            .zip(self.labels.iter().map(String::as_str))
    }

    /// Splits the dataset into documents and labels.
    pub fn into_parts(self) -> (Vec<FeatureVector>, Vec<String>) {
        (self.data, self.labels)
    }

    /// Shuffles the examples with a generator seeded by `seed`.
    /// Documents and labels are permuted identically.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffles the examples with the given generator.
    /// Documents and labels are permuted identically.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let data = std::mem::take(&mut self.data);
        let labels = std::mem::take(&mut self.labels);

        let mut pairs = data.into_iter()
            .zip(labels)
            .collect::<Vec<_>>();
        pairs.shuffle(rng);

        let (data, labels): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        self.data = data;
        self.labels = labels;
    }
}
