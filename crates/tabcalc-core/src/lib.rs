//! # tabcalc-core
//!
//! Core data structures for the tabcalc table calculator.
//!
//! This crate provides the table model shared by every other tabcalc crate:
//! - [`CellAddress`] - A cell's location as a (column name, row number) pair
//! - [`Formula`] and [`Operator`] - A binary expression over two cell addresses
//! - [`ValueStore`] and [`FormulaStore`] - Resolved integers and pending formulas
//! - [`Table`] - The declared grid together with both stores
//!
//! ## Example
//!
//! ```rust
//! use tabcalc_core::{CellAddress, Formula, Operator, Table};
//!
//! let mut table = Table::new(["A", "B"]).unwrap();
//! table.add_row(1).unwrap();
//!
//! table.set_value(CellAddress::parse("A1").unwrap(), 5).unwrap();
//! table
//!     .set_formula(
//!         CellAddress::parse("B1").unwrap(),
//!         Formula::new(
//!             CellAddress::parse("A1").unwrap(),
//!             Operator::Multiply,
//!             CellAddress::parse("A1").unwrap(),
//!         ),
//!     )
//!     .unwrap();
//!
//! assert_eq!(table.formulas().len(), 1);
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod row;
pub mod table;

// Re-exports for convenience
pub use cell::{CellAddress, Formula, FormulaStore, Operator, ValueStore};
pub use column::ColumnRegistry;
pub use error::{Error, Result};
pub use row::RowRegistry;
pub use table::Table;

/// Integer type held by every resolved cell
pub type CellInt = i64;
