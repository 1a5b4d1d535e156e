//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1", "Price12")
//! - [`Formula`] - A binary expression over two cell addresses
//! - [`ValueStore`] / [`FormulaStore`] - Address-keyed storage for both kinds of cell

mod address;
mod formula;
mod storage;

pub use address::CellAddress;
pub use formula::{Formula, Operator};
pub use storage::{FormulaStore, ValueStore};

pub(crate) use address::is_column_name;
