//! Row registry

use ahash::AHashSet;

use crate::error::{Error, Result};

/// Declared row numbers, in declaration order
#[derive(Debug, Clone, Default)]
pub struct RowRegistry {
    rows: Vec<u32>,
    seen: AHashSet<u32>,
}

impl RowRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a row
    ///
    /// Fails for row 0 or for a row declared before.
    pub fn declare(&mut self, row: u32) -> Result<()> {
        if row == 0 {
            return Err(Error::InvalidAddress(
                "row number must be >= 1".into(),
            ));
        }
        if !self.seen.insert(row) {
            return Err(Error::DuplicateRow(row));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Check if a row was declared
    pub fn contains(&self, row: u32) -> bool {
        self.seen.contains(&row)
    }

    /// Row numbers in declaration order
    pub fn numbers(&self) -> &[u32] {
        &self.rows
    }

    /// Number of declared rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no row was declared
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
