//! Struct `Dataset` represents a labeled batch of documents.

// Provides dataset struct.
pub(crate) mod dataset;

// Provides a struct that reads a file.
pub(crate) mod reader;

pub use dataset::Dataset;
pub use reader::DatasetReader;
