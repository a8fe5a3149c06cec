//! Per-label accuracy report.
use serde::{Serialize, Serializer};

use crate::constants::OVERALL;

use std::collections::BTreeMap;
use std::fmt;

/// Correct and total counts per expected label.
/// The aggregate over all examples is kept under `"Overall"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accuracy {
    correct: BTreeMap<String, usize>,
    total: BTreeMap<String, usize>,
}

impl Accuracy {
    /// Records one prediction for an example labeled `expected`.
    pub fn record(&mut self, expected: &str, predicted: &str) {
        *self.total.entry(expected.to_string()).or_insert(0) += 1;
        *self.total.entry(OVERALL.to_string()).or_insert(0) += 1;
        if predicted == expected {
            *self.correct.entry(predicted.to_string()).or_insert(0) += 1;
            *self.correct.entry(OVERALL.to_string()).or_insert(0) += 1;
        }
    }

    /// Returns the accuracy for `label`,
    /// or `None` if no example was labeled `label`.
    pub fn get(&self, label: &str) -> Option<f64> {
        let total = *self.total.get(label)?;
        let correct = self.correct.get(label).copied().unwrap_or(0);
        Some(correct as f64 / total as f64)
    }

    /// Returns the accuracy over all examples,
    /// or `None` if nothing was recorded.
    pub fn overall(&self) -> Option<f64> {
        self.get(OVERALL)
    }

    /// Returns the number of examples recorded.
    pub fn n_examples(&self) -> usize {
        self.total.get(OVERALL).copied().unwrap_or(0)
    }

    /// Iterates over `(label, accuracy)` in label order,
    /// including `"Overall"`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.total.keys()
            .filter_map(|label| {
                self.get(label).map(|acc| (label.as_str(), acc))
            })
    }

    /// Returns the report as a map from label to accuracy.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter()
            .map(|(label, acc)| (label.to_string(), acc))
            .collect()
    }
}

impl Serialize for Accuracy {
    fn serialize<S: Serializer>(&self, serializer: S)
        -> Result<S::Ok, S::Error>
    {
        self.to_map().serialize(serializer)
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, acc) in self.iter() {
            writeln!(f, "{label}: {acc}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_01() {
        let mut acc = Accuracy::default();
        acc.record("Spam", "Spam");
        acc.record("Spam", "Ham");
        acc.record("Ham", "Ham");
        acc.record("Ham", "Ham");

        assert_eq!(Some(0.5), acc.get("Spam"));
        assert_eq!(Some(1.0), acc.get("Ham"));
        assert_eq!(Some(0.75), acc.overall());
        assert_eq!(4, acc.n_examples());
    }

    #[test]
    fn test_record_prediction_only_label() {
        let mut acc = Accuracy::default();
        acc.record("Ham", "Phishing");
        assert_eq!(None, acc.get("Phishing"));
        assert_eq!(Some(0.0), acc.get("Ham"));
        let labels = acc.iter().map(|(l, _)| l).collect::<Vec<_>>();
        assert_eq!(vec!["Ham", "Overall"], labels);
    }

    #[test]
    fn test_empty_report() {
        let acc = Accuracy::default();
        assert_eq!(None, acc.overall());
        assert!(acc.to_map().is_empty());
        assert_eq!("", acc.to_string());
    }

    #[test]
    fn test_serialize_as_map() {
        let mut acc = Accuracy::default();
        acc.record("Ham", "Ham");
        acc.record("Spam", "Ham");
        let res = serde_json::to_string(&acc).unwrap();
        let exp = r#"{"Ham":1.0,"Overall":0.5,"Spam":0.0}"#;
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }
}
