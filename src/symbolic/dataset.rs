//! Dataset files: sampled values of the function to recover.
//!
//! The text format is a header line of whitespace-separated column names
//! followed by one line of values per sample. The last column is the function
//! output, every other column an input variable.

use std::fmt;
use std::fs;
use std::path::Path;

/// Sampled inputs and expected outputs of an unknown function.
#[derive(Debug, Clone)]
pub struct Dataset {
    inputs: Vec<Vec<f64>>,
    expected: Vec<f64>,
    num_inputs: usize,
}

impl Dataset {
    /// Parse a dataset file from disk.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] on I/O failure or malformed content.
    pub fn parse(path: &Path) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path)?;
        Self::parse_str(&text)
    }

    /// Parse the dataset text format.
    ///
    /// # Errors
    ///
    /// Returns a [`DatasetError`] when the header is missing or declares
    /// fewer than two columns, a value fails to parse, a sample row has the
    /// wrong width, or no sample rows follow the header.
    pub fn parse_str(text: &str) -> Result<Self, DatasetError> {
        let mut lines = text.lines().enumerate();
        let (_, header) = lines.next().ok_or(DatasetError::MissingHeader)?;
        let columns = header.split_whitespace().count();
        if columns < 2 {
            return Err(DatasetError::NotEnoughColumns { found: columns });
        }
        let num_inputs = columns - 1;

        let mut inputs = Vec::new();
        let mut expected = Vec::new();
        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let mut values = Vec::with_capacity(columns);
            for token in line.split_whitespace() {
                let value = token.parse().map_err(|_| DatasetError::InvalidNumber {
                    line: index + 1,
                    token: token.to_string(),
                })?;
                values.push(value);
            }
            if values.len() != columns {
                return Err(DatasetError::WrongColumnCount {
                    line: index + 1,
                    declared: columns,
                    found: values.len(),
                });
            }
            expected.push(values.pop().unwrap_or_default());
            inputs.push(values);
        }
        if inputs.is_empty() {
            return Err(DatasetError::NoSamples);
        }
        Ok(Self {
            inputs,
            expected,
            num_inputs,
        })
    }

    /// Number of samples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.inputs.len()
    }

    /// Number of input variables per sample.
    #[must_use]
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Input vector of one sample.
    #[must_use]
    pub fn input(&self, sample: usize) -> &[f64] {
        &self.inputs[sample]
    }

    /// Expected output of one sample.
    #[must_use]
    pub fn expected(&self, sample: usize) -> f64 {
        self.expected[sample]
    }

    /// Summed squared error between candidate outputs and the expected
    /// outputs, sample by sample.
    #[must_use]
    pub fn squared_error(&self, outputs: &[f64]) -> f64 {
        debug_assert_eq!(outputs.len(), self.expected.len());
        self.expected
            .iter()
            .zip(outputs)
            .map(|(expected, output)| (expected - output) * (expected - output))
            .sum()
    }
}

/// Failures while loading a dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// File I/O error.
    Io(std::io::Error),
    /// The file is empty.
    MissingHeader,
    /// The header declares fewer than one input and one output column.
    NotEnoughColumns {
        /// Number of columns found in the header.
        found: usize,
    },
    /// A value failed to parse as a number.
    InvalidNumber {
        /// One-based line number of the offending row.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A sample row disagrees with the header's column count.
    WrongColumnCount {
        /// One-based line number of the offending row.
        line: usize,
        /// Column count declared by the header.
        declared: usize,
        /// Number of values found in the row.
        found: usize,
    },
    /// The file holds a header but no sample rows.
    NoSamples,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(e) => write!(f, "I/O error: {e}"),
            DatasetError::MissingHeader => write!(f, "dataset is empty"),
            DatasetError::NotEnoughColumns { found } => {
                write!(f, "dataset header declares {found} columns, need at least 2")
            }
            DatasetError::InvalidNumber { line, token } => {
                write!(f, "invalid number {token:?} on dataset line {line}")
            }
            DatasetError::WrongColumnCount {
                line,
                declared,
                found,
            } => {
                write!(
                    f,
                    "dataset line {line} holds {found} values, header declares {declared}"
                )
            }
            DatasetError::NoSamples => write!(f, "dataset holds no samples"),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        DatasetError::Io(e)
    }
}
