//! Error types for discprofile operations.
//!
//! Row-level problems are modelled as [`RowIssue`] values and accumulated with
//! stillwater's `Validation` so every problem in a row is known before the
//! cells are flagged. Callers of the form controller only ever see the single
//! aggregate [`DiscError::Validation`]; the row detail stays in the inline
//! cell flags.

use std::fmt;
use std::path::PathBuf;
use stillwater::{NonEmptyVec, Validation};
use thiserror::Error;

/// Message shown when submission is refused.
pub const PERMUTATION_MESSAGE: &str = "Each row must use 1, 2, 3, and 4 exactly once.";

/// Main error type for discprofile operations
#[derive(Debug, Error)]
pub enum DiscError {
    /// At least one row is not a permutation of 1..4
    #[error("{}", PERMUTATION_MESSAGE)]
    Validation,

    /// Caller supplied a row or cell outside the grid, or a malformed row
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DiscError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// Result type alias for discprofile operations
pub type Result<T> = std::result::Result<T, DiscError>;

/// A single problem found in one ranking row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    /// Cell is blank.
    IncompleteRow { cell: usize },
    /// Cell holds a non-integer or a value outside 1..=4.
    OutOfRangeValue { cell: usize, raw: String },
    /// The row's values are not pairwise distinct. Every cell is implicated.
    DuplicateValue { values: [u32; 4] },
}

impl RowIssue {
    /// Cells to flag for this issue.
    pub fn flagged_cells(&self) -> Vec<usize> {
        match self {
            Self::IncompleteRow { cell } | Self::OutOfRangeValue { cell, .. } => vec![*cell],
            Self::DuplicateValue { .. } => (0..crate::core::CELLS_PER_ROW).collect(),
        }
    }
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteRow { cell } => write!(f, "cell {} is blank", cell + 1),
            Self::OutOfRangeValue { cell, raw } => {
                write!(f, "cell {} holds '{}', expected 1-4", cell + 1, raw)
            }
            Self::DuplicateValue { values } => write!(
                f,
                "values {:?} are not a permutation of 1, 2, 3, 4",
                values
            ),
        }
    }
}

/// Validation result accumulating every issue in a row.
pub type RowValidation<T> = Validation<T, NonEmptyVec<RowIssue>>;

/// Create a row validation from collected issues; empty means success.
pub fn row_issues<T>(value: T, issues: Vec<RowIssue>) -> RowValidation<T> {
    match NonEmptyVec::from_vec(issues) {
        Some(issues) => Validation::Failure(issues),
        None => Validation::Success(value),
    }
}
