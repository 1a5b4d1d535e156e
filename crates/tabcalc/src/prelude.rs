//! Prelude module - common imports for tabcalc users
//!
//! ```rust
//! use tabcalc::prelude::*;
//! ```

pub use crate::{
    // Formula types
    parse_formula,
    // Calculation types
    CalculationOptions,
    CalculationStats,
    // Cell types
    CellAddress,
    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    // Error types
    Error,
    Formula,
    FormulaError,
    Operator,
    Result,
    Strategy,
    // Main types
    Table,
    // Extension traits
    TableCalculationExt,
    TableExt,
};
