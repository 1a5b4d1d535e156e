//! Column registry

use ahash::AHashSet;

use crate::cell::is_column_name;
use crate::error::{Error, Result};

/// Declared column names, in declaration order
#[derive(Debug, Clone, Default)]
pub struct ColumnRegistry {
    names: Vec<String>,
    seen: AHashSet<String>,
}

impl ColumnRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a column
    ///
    /// Fails if the name is not purely alphabetic or was declared before.
    pub fn declare<S: Into<String>>(&mut self, name: S) -> Result<()> {
        let name = name.into();
        if !is_column_name(&name) {
            return Err(Error::InvalidColumnName(name));
        }
        if !self.seen.insert(name.clone()) {
            return Err(Error::DuplicateColumn(name));
        }
        self.names.push(name);
        Ok(())
    }

    /// Check if a column was declared
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Column names in declaration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of declared columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no column was declared
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
