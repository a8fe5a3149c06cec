//! Constants shared by the tree, its dump format and the readers.

/// Prefix of the line holding the feature word of a branch.
pub const FEATURE_PREFIX:   &str = "Feature: ";
/// Prefix of the line holding the threshold of a branch.
pub const THRESHOLD_PREFIX: &str = "Threshold: ";
/// Key of the aggregate entry in an accuracy report.
pub const OVERALL:          &str = "Overall";

/// Default seed used when shuffling a dataset.
pub const DEFAULT_SEED:           u64 = 1234;
/// Default column index of the label in a CSV row.
pub const DEFAULT_LABEL_COLUMN:   usize = 0;
/// Default column index of the message in a CSV row.
pub const DEFAULT_CONTENT_COLUMN: usize = 1;
