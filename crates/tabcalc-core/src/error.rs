//! Error types for tabcalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the table model
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Column name is not purely alphabetic
    #[error("Invalid column name: '{0}'")]
    InvalidColumnName(String),

    /// The header declared no columns
    #[error("There are no columns")]
    NoColumns,

    /// Column declared twice
    #[error("Column name repeats: {0}")]
    DuplicateColumn(String),

    /// Row declared twice
    #[error("Row number repeats: {0}")]
    DuplicateRow(u32),

    /// Address references a column that was never declared
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Address references a row that was never declared
    #[error("Unknown row: {0}")]
    UnknownRow(u32),

    /// Cell was assigned content twice
    #[error("Cell {0} already has content")]
    DuplicateCell(String),
}
