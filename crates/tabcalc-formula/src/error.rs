//! Formula error types

use tabcalc_core::CellAddress;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors raised while applying an operator to two integers
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Right operand of a division was zero
    #[error("division by 0")]
    DivisionByZero,

    /// Result does not fit a cell integer
    #[error("integer overflow")]
    Overflow,

    /// Operator character outside `+ - * /`
    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(char),
}

/// Errors that can occur during formula parsing or resolution
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// Formula token could not be split into operands and operator
    #[error("Malformed formula: {0}")]
    MalformedFormula(String),

    /// Operand is neither a settled value nor a pending formula
    #[error("Incorrect reference in the formula of {cell}: {operand} has no value")]
    DanglingReference {
        cell: CellAddress,
        operand: CellAddress,
    },

    /// Formula depends on itself, directly or transitively
    #[error("Circular reference detected involving cell {cell}")]
    CircularReference {
        cell: CellAddress,
        /// Dependency chain that led back to `cell`, outermost first
        chain: Vec<CellAddress>,
    },

    /// Arithmetic failure while computing a cell
    #[error("Cannot compute {cell}: {source}")]
    Arithmetic {
        cell: CellAddress,
        #[source]
        source: ArithmeticError,
    },
}

impl FormulaError {
    /// The cell whose resolution failed, if the error is tied to one
    pub fn cell(&self) -> Option<&CellAddress> {
        match self {
            FormulaError::MalformedFormula(_) => None,
            FormulaError::DanglingReference { cell, .. }
            | FormulaError::CircularReference { cell, .. }
            | FormulaError::Arithmetic { cell, .. } => Some(cell),
        }
    }
}
