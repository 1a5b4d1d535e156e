//! Cell address type

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "Total12")
///
/// Columns are identified by their declared name rather than by position, so
/// an address is a (column name, row number) pair. Column names are compared
/// case-sensitively; `a1` and `A1` are different cells.
///
/// Ordering is column-major: first by column name, then by row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Column name (non-empty, ASCII letters only)
    column: String,
    /// Row number (1-based)
    row: u32,
}

impl CellAddress {
    /// Create a new cell address, validating the column name and row number
    pub fn new<S: Into<String>>(column: S, row: u32) -> Result<Self> {
        let column = column.into();
        if !is_column_name(&column) {
            return Err(Error::InvalidAddress(format!(
                "column name '{}' must be one or more letters",
                column
            )));
        }
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}0'",
                column
            )));
        }
        Ok(Self { column, row })
    }

    /// Build an address from parts that were validated when declared
    pub(crate) fn from_declared(column: &str, row: u32) -> Self {
        Self {
            column: column.to_string(),
            row,
        }
    }

    /// Parse a cell address from `<letters><digits>` notation
    ///
    /// # Examples
    /// ```
    /// use tabcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.column(), "A");
    /// assert_eq!(addr.row(), 1);
    ///
    /// let addr = CellAddress::parse("Total12").unwrap();
    /// assert_eq!(addr.column(), "Total");
    /// assert_eq!(addr.row(), 12);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0') {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("row number out of range in '{}'", s)))?;

        Self::new(letters, row)
    }

    /// Column name
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Row number (1-based)
    pub fn row(&self) -> u32 {
        self.row
    }
}

/// Check whether `name` is a valid column name (`[A-Za-z]+`)
pub(crate) fn is_column_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
