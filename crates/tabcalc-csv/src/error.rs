//! CSV error types

use tabcalc_core::CellAddress;
use tabcalc_formula::FormulaError;
use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Table model rejected the line (bad or repeated column/row names)
    #[error("Line {line}: {source}")]
    Table {
        line: u64,
        #[source]
        source: tabcalc_core::Error,
    },

    /// Formula token could not be parsed
    #[error("Line {line}: {source}")]
    Formula {
        line: u64,
        #[source]
        source: FormulaError,
    },

    /// Token is neither an integer literal nor a formula
    #[error("Line {line}: incorrect value '{token}'")]
    InvalidToken { line: u64, token: String },

    /// Row label is not a positive integer
    #[error("Line {line}: row label '{label}' is not a positive number")]
    InvalidRowLabel { line: u64, label: String },

    /// Integer literal does not fit a cell
    #[error("Line {line}: value '{token}' is out of range")]
    LiteralOutOfRange { line: u64, token: String },

    /// Line holds no fields at all
    #[error("Line {line}: empty line")]
    EmptyLine { line: u64 },

    /// Row has the wrong number of fields
    #[error("Line {line}: expected {expected} fields (row label + columns), found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A declared cell has no value when writing
    #[error("No value for cell {0}")]
    MissingValue(CellAddress),
}
