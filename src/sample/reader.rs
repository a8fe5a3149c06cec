use log::info;
use polars::prelude::*;

use crate::FeatureVector;
use crate::constants::{
    DEFAULT_CONTENT_COLUMN,
    DEFAULT_LABEL_COLUMN,
    DEFAULT_SEED,
};
use crate::error::{Error, Result};

use std::path::Path;

use super::dataset::Dataset;

/// A struct that returns [`Dataset`].
/// Using this struct, one can read a CSV file to [`Dataset`].
/// Every column is read as text;
/// one column holds the label, another the message.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use spamtree::DatasetReader;
/// let filename = "/path/to/csv/file.csv";
/// let dataset = DatasetReader::default()
///     .file(filename)
///     .has_header(true)
///     .label_column(0)
///     .content_column(1)
///     .seed(777)
///     .read()
///     .unwrap();
/// ```
pub struct DatasetReader<P> {
    file: Option<P>,
    has_header: bool,
    label_column: usize,
    content_column: usize,
    seed: u64,
    shuffle: bool,
}

impl<P> Default for DatasetReader<P> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: true,
            label_column: DEFAULT_LABEL_COLUMN,
            content_column: DEFAULT_CONTENT_COLUMN,
            seed: DEFAULT_SEED,
            shuffle: true,
        }
    }
}

impl<P> DatasetReader<P> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `true.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }

    /// Set the index of the column holding the label.
    /// Default is `0.`
    pub fn label_column(mut self, index: usize) -> Self {
        self.label_column = index;
        self
    }

    /// Set the index of the column holding the message.
    /// Default is `1.`
    pub fn content_column(mut self, index: usize) -> Self {
        self.content_column = index;
        self
    }

    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set whether the examples are shuffled after reading.
    /// Default is `true.`
    pub fn shuffle(mut self, flag: bool) -> Self {
        self.shuffle = flag;
        self
    }
}

impl<P> DatasetReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }

    /// Reads the file based on the arguments,
    /// and returns `spamtree::Result<Dataset>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Dataset> {
        let file = self.file
            .ok_or_else(|| Error::invalid_input("The file name for csv is not set"))?;
        let file = file.as_ref();

        let df = CsvReader::from_path(file)?
            .has_header(self.has_header)
            .infer_schema(Some(0))
            .finish()?;

        let contents = text_column(&df, self.content_column, "content")?;
        let labels = text_column(&df, self.label_column, "label")?;

        // An empty CSV field comes back as null; it is an empty message.
        let data = contents.into_iter()
            .map(|content| FeatureVector::new(content.as_deref().unwrap_or("")))
            .collect::<Vec<_>>();
        let labels = labels.into_iter()
            .enumerate()
            .map(|(row, label)| {
                label.ok_or_else(|| Error::invalid_input(format!(
                    "label is absent at row {row}"
                )))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut dataset = Dataset::from_parts(data, labels)?;
        if self.shuffle {
            dataset.shuffle(self.seed);
        }
        info!("read {} examples from {}", dataset.len(), file.display());

        Ok(dataset)
    }
}

/// Returns the `index`-th column of `df` as optional strings.
fn text_column(df: &DataFrame, index: usize, role: &str)
    -> Result<Vec<Option<String>>>
{
    let series = df.get_columns()
        .get(index)
        .ok_or_else(|| Error::invalid_input(format!(
            "{role} column [{index}] does not exist; the file has {} columns",
            df.width(),
        )))?;

    let series = series.cast(&DataType::Utf8)?;
    let values = series.utf8()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect::<Vec<_>>();

    Ok(values)
}
