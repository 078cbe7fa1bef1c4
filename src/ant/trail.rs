//! Trail files: the food layout the ant forages on.
//!
//! The text format is a `ROWSxCOLS` header line followed by one line per
//! row, where a `1` marks a food cell and any other character an empty one.

use std::fmt;
use std::fs;
use std::path::Path;

/// Character marking a food cell in trail files.
const FOOD: char = '1';

/// An immutable food layout on a toroidal grid.
#[derive(Debug, Clone)]
pub struct Trail {
    rows: usize,
    cols: usize,
    food: Vec<bool>,
}

impl Trail {
    /// Build a trail from an explicit food matrix, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::InvalidDimensions`] if either dimension is zero
    /// or the matrix length does not match.
    pub fn new(rows: usize, cols: usize, food: Vec<bool>) -> Result<Self, TrailError> {
        if rows == 0 || cols == 0 || food.len() != rows * cols {
            return Err(TrailError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols, food })
    }

    /// Parse a trail file from disk.
    ///
    /// # Errors
    ///
    /// Returns a [`TrailError`] on I/O failure or malformed content.
    pub fn parse(path: &Path) -> Result<Self, TrailError> {
        let text = fs::read_to_string(path)?;
        Self::parse_str(&text)
    }

    /// Parse the trail text format.
    ///
    /// # Errors
    ///
    /// Returns a [`TrailError`] on a malformed header, too many rows, or a
    /// row wider than the header declares.
    pub fn parse_str(text: &str) -> Result<Self, TrailError> {
        let mut lines = text.lines();
        let header = lines
            .next()
            .ok_or_else(|| TrailError::InvalidHeader(String::new()))?;
        let (rows, cols) = parse_header(header.trim())?;

        let mut food = vec![false; rows * cols];
        let mut row = 0;
        for line in lines {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            if row >= rows {
                return Err(TrailError::TooManyRows { declared: rows });
            }
            for (col, cell) in line.chars().enumerate() {
                if col >= cols {
                    return Err(TrailError::RowTooWide { row, declared: cols });
                }
                if cell == FOOD {
                    food[row * cols + col] = true;
                }
            }
            row += 1;
        }
        Self::new(rows, cols, food)
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell holds food.
    #[must_use]
    pub fn has_food(&self, row: usize, col: usize) -> bool {
        self.food[row * self.cols + col]
    }

    /// Total food cells on the trail.
    #[must_use]
    pub fn food_count(&self) -> usize {
        self.food.iter().filter(|&&cell| cell).count()
    }

    pub(crate) fn fill(&self, cells: &mut Vec<bool>) {
        cells.clear();
        cells.extend_from_slice(&self.food);
    }
}

fn parse_header(header: &str) -> Result<(usize, usize), TrailError> {
    let mut parts = header.split('x');
    let rows = parts.next().and_then(|p| p.trim().parse().ok());
    let cols = parts.next().and_then(|p| p.trim().parse().ok());
    match (rows, cols, parts.next()) {
        (Some(rows), Some(cols), None) if rows > 0 && cols > 0 => Ok((rows, cols)),
        _ => Err(TrailError::InvalidHeader(header.to_string())),
    }
}

/// Failures while loading a trail.
#[derive(Debug)]
pub enum TrailError {
    /// File I/O error.
    Io(std::io::Error),
    /// The `ROWSxCOLS` header line is missing or malformed.
    InvalidHeader(String),
    /// Dimensions and matrix length disagree, or a dimension is zero.
    InvalidDimensions {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
    },
    /// More data rows than the header declares.
    TooManyRows {
        /// Declared row count.
        declared: usize,
    },
    /// A data row is wider than the header declares.
    RowTooWide {
        /// Index of the offending row.
        row: usize,
        /// Declared column count.
        declared: usize,
    },
}

impl fmt::Display for TrailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailError::Io(e) => write!(f, "I/O error: {e}"),
            TrailError::InvalidHeader(header) => {
                write!(f, "invalid trail header: {header:?}")
            }
            TrailError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid trail dimensions: {rows}x{cols}")
            }
            TrailError::TooManyRows { declared } => {
                write!(f, "more trail rows than the declared {declared}")
            }
            TrailError::RowTooWide { row, declared } => {
                write!(f, "trail row {row} wider than the declared {declared} columns")
            }
        }
    }
}

impl std::error::Error for TrailError {}

impl From<std::io::Error> for TrailError {
    fn from(e: std::io::Error) -> Self {
        TrailError::Io(e)
    }
}
