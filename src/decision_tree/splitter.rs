//! This file defines the split rule of a branch node.
use std::fmt;

use crate::FeatureVector;

/// The output of [`Splitter::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// The frequency is below the threshold.
    Left,
    /// The frequency is at or above the threshold.
    Right,
}

/// A rule of the form `frequency(feature) < threshold`.
#[derive(Debug, Clone, PartialEq)]
pub struct Splitter {
    /// The word whose frequency is compared.
    pub feature: String,
    /// The frequency routing a document left (below) or right.
    pub threshold: f64,
}

impl Splitter {
    /// Construct a new rule on the word `name`.
    #[inline]
    pub fn new(name: &str, threshold: f64) -> Self {
        let feature = name.to_string();
        Self {
            feature,
            threshold
        }
    }

    /// Returns the rule separating `incoming` from `existing`.
    /// The feature is the word whose frequency differs the most,
    /// the threshold is the midpoint of both frequencies.
    /// If the two documents cannot be told apart,
    /// the rule tests the empty word against `0`,
    /// which sends every document to the right.
    pub fn between(incoming: &FeatureVector, existing: &FeatureVector)
        -> Self
    {
        match incoming.most_different_feature(existing) {
            Some(word) => {
                let threshold = midpoint(
                    existing.frequency(word),
                    incoming.frequency(word),
                );
                Self::new(word, threshold)
            },
            None => Self::new("", 0f64),
        }
    }

    /// Defines the splitting.
    #[inline]
    pub fn split(&self, vector: &FeatureVector) -> LeftRight {
        let value = vector.frequency(&self.feature);

        if value < self.threshold { LeftRight::Left } else { LeftRight::Right }
    }
}

impl fmt::Display for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} < {}", self.feature, self.threshold)
    }
}

/// The arithmetic mean of `a` and `b`,
/// computed as `min + |a - b| / 2`.
#[inline]
pub fn midpoint(a: f64, b: f64) -> f64 {
    a.min(b) + (a - b).abs() / 2f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_midpoint_01() {
        let res = midpoint(0.0, 0.5);
        let exp = 0.25;
        assert!((exp - res).abs() < TEST_TOLERANCE, "expected {exp}, got {res}.");
    }

    #[test]
    fn test_midpoint_bounds_and_symmetry() {
        let pairs = [
            (0.0, 0.0),
            (0.1, 0.9),
            (1.0, 0.2),
            (1e300, -1e300),
            (-3.5, -7.25),
            (f64::MAX, f64::MAX),
        ];
        for (a, b) in pairs {
            let m = midpoint(a, b);
            assert!(a.min(b) <= m && m <= a.max(b), "midpoint({a}, {b}) = {m}.");
            assert_eq!(m, midpoint(b, a), "midpoint is not symmetric for ({a}, {b}).");
        }
    }

    #[test]
    fn test_midpoint_no_overflow() {
        let res = midpoint(f64::MAX, f64::MAX / 2f64);
        assert!(res.is_finite(), "got {res}.");
    }

    #[test]
    fn test_split_01() {
        let rule = Splitter::new("buy", 0.25);
        assert_eq!(LeftRight::Right, rule.split(&FeatureVector::new("buy")));
        assert_eq!(LeftRight::Left, rule.split(&FeatureVector::new("hello")));
        // exactly on the threshold goes right
        let v = FeatureVector::new("buy a b c");
        assert_eq!(LeftRight::Right, rule.split(&v));
    }

    #[test]
    fn test_between_01() {
        let existing = FeatureVector::new("buy now");
        let incoming = FeatureVector::new("hello friend");
        let rule = Splitter::between(&incoming, &existing);
        assert_eq!("buy", rule.feature);
        assert!((rule.threshold - 0.25).abs() < TEST_TOLERANCE, "got {rule:?}.");
        assert_eq!(LeftRight::Left, rule.split(&incoming));
        assert_eq!(LeftRight::Right, rule.split(&existing));
    }

    #[test]
    fn test_between_indistinguishable() {
        let v = FeatureVector::new("same text");
        let rule = Splitter::between(&v, &v.clone());
        assert_eq!(Splitter::new("", 0f64), rule);
        assert_eq!(LeftRight::Right, rule.split(&v));
    }
}
