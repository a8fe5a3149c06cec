//! Defines the word-frequency vector of a single document.
use std::collections::{BTreeMap, BTreeSet};
use std::convert::Infallible;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A document represented as word counts.
/// The frequency of a word is its count divided by
/// the number of tokens in the document.
///
/// Tokens are the whitespace-separated pieces of the text.
/// Words are stored in lexicographic order,
/// so [`FeatureVector::features`] enumerates them sorted.
///
/// # Example
/// ```
/// use spamtree::FeatureVector;
/// let v = FeatureVector::new("buy now buy");
/// assert_eq!(v.total_tokens(), 3);
/// assert!((v.frequency("buy") - 2.0 / 3.0).abs() < 1e-12);
/// assert_eq!(v.frequency("hello"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureVector {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl FeatureVector {
    /// Construct a new instance of [`FeatureVector`] from raw text.
    pub fn new(content: &str) -> Self {
        let mut counts = BTreeMap::new();
        let mut total = 0_usize;
        for word in content.split_whitespace() {
            *counts.entry(word.to_string()).or_insert(0_usize) += 1;
            total += 1;
        }

        Self { counts, total }
    }

    /// A vector with no tokens.
    pub const fn empty() -> Self {
        Self { counts: BTreeMap::new(), total: 0 }
    }

    /// Returns the occurrence ratio of `word`.
    /// Unknown words, and every word of an empty document, have frequency `0`.
    #[inline]
    pub fn frequency(&self, word: &str) -> f64 {
        if self.total == 0 {
            return 0f64;
        }
        self.counts.get(word)
            .map(|&count| count as f64 / self.total as f64)
            .unwrap_or(0f64)
    }

    /// Returns the number of occurrences of `word`.
    #[inline]
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Returns the number of tokens in the document.
    #[inline]
    pub fn total_tokens(&self) -> usize {
        self.total
    }

    /// Returns the number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the document has no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over the distinct words in lexicographic order.
    pub fn features(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }

    /// Returns `true` if `word` occurs in the document.
    #[inline]
    pub fn has_feature(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Returns the word whose frequency differs the most
    /// between `self` and `other`.
    ///
    /// The union of both vocabularies is scanned in lexicographic order
    /// and only a strictly larger difference replaces the current best,
    /// so ties go to the lexicographically smallest word.
    /// Returns `None` if no word has a nonzero difference.
    pub fn most_different_feature<'a>(&'a self, other: &'a Self)
        -> Option<&'a str>
    {
        let words = self.features()
            .chain(other.features())
            .collect::<BTreeSet<_>>();

        let mut best_word = None;
        let mut highest_diff = 0f64;
        for word in words {
            let diff = (self.frequency(word) - other.frequency(word)).abs();
            if diff > highest_diff {
                best_word = Some(word);
                highest_diff = diff;
            }
        }

        best_word
    }
}

impl From<&str> for FeatureVector {
    #[inline]
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl FromStr for FeatureVector {
    type Err = Infallible;
    #[inline]
    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(content))
    }
}

impl TryFrom<Option<&str>> for FeatureVector {
    type Error = Error;
    /// Absent content is rejected; empty content is a valid empty document.
    fn try_from(content: Option<&str>) -> Result<Self> {
        content.map(Self::new)
            .ok_or_else(|| Error::invalid_input("document content is absent"))
    }
}
