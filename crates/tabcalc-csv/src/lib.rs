//! # tabcalc-csv
//!
//! Reader and writer for the comma-separated table format used by tabcalc.
//!
//! ```text
//! ,A,B,Cell
//! 1,1,0,1
//! 2,2,=A1+Cell30,0
//! 30,0,=B1+A1,5
//! ```
//!
//! The first line names the columns (a leading empty field stands for the
//! row-label column). Every other line starts with a row number followed by
//! one field per column: an integer literal or a formula `=<cell><op><cell>`.

mod error;
mod options;
mod reader;
mod token;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use token::{classify, TokenKind};
pub use writer::CsvWriter;
