//! # tabcalc
//!
//! A Rust library for resolving tables whose cells hold integers or formulas
//! over other cells.
//!
//! ## Features
//!
//! - Read tables from comma-separated text
//! - Resolve formulas that reference other formulas, in any declaration order
//! - Reject circular references, dangling references and division by zero
//! - Write the resolved grid back out
//!
//! ## Example
//!
//! ```rust
//! use tabcalc::prelude::*;
//!
//! let input = ",A,B\n1,5,10\n2,=A1+B1,3\n";
//! let mut table = CsvReader::read_str(input, &CsvReadOptions::default()).unwrap();
//!
//! table.calculate().unwrap();
//!
//! let output = CsvWriter::write_to_string(&table, &CsvWriteOptions::default()).unwrap();
//! assert_eq!(output, ",A,B\n1,5,10\n2,15,3\n");
//! ```

pub mod calculation;
pub mod prelude;

// Re-export calculation types
pub use calculation::{CalculationOptions, CalculationStats, TableCalculationExt};

// Re-export core types
pub use tabcalc_core::{
    CellAddress, CellInt, ColumnRegistry, Error as TableError, Formula, FormulaStore, Operator,
    RowRegistry, Table, ValueStore,
};

// Re-export formula types
pub use tabcalc_formula::{
    apply, parse_formula, ArithmeticError, DependencyGraph, FormulaError, FormulaResult,
    ResolveStats, Resolver, Strategy,
};

// Re-export I/O types
pub use tabcalc_csv::{
    classify, CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator,
    TokenKind,
};

use std::path::Path;

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from loading, calculating or saving a table
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing the table text failed
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// Resolving the formulas failed
    #[error(transparent)]
    Formula(#[from] FormulaError),
}

/// Extension trait for Table to add file I/O
pub trait TableExt: Sized {
    /// Open a table from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Save the table to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl TableExt for Table {
    fn open<P: AsRef<Path>>(path: P) -> Result<Table> {
        Ok(CsvReader::read_file(path, &CsvReadOptions::default())?)
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        Ok(CsvWriter::write_file(self, path, &CsvWriteOptions::default())?)
    }
}

/// Read a table from `path` and resolve all of its formulas
///
/// The first error wins: nothing is returned for a table that fails to read
/// or to resolve.
pub fn evaluate_file<P: AsRef<Path>>(
    path: P,
    read_options: &CsvReadOptions,
    options: &CalculationOptions,
) -> Result<Table> {
    let mut table = CsvReader::read_file(path, read_options)?;
    table.calculate_with_options(options)?;
    Ok(table)
}
