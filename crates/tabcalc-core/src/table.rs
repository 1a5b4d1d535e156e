//! Table type

use crate::cell::{CellAddress, Formula, FormulaStore, ValueStore};
use crate::column::ColumnRegistry;
use crate::error::{Error, Result};
use crate::row::RowRegistry;
use crate::CellInt;

/// A table of named columns and numbered rows
///
/// Every declared cell holds either a literal integer (in the value store) or
/// a pending formula (in the formula store). Formula operands are not checked
/// against the declared grid here; an operand outside the grid surfaces as a
/// dangling reference when the table is resolved.
#[derive(Debug, Clone)]
pub struct Table {
    columns: ColumnRegistry,
    rows: RowRegistry,
    values: ValueStore,
    formulas: FormulaStore,
}

impl Table {
    /// Create a table with the given columns and no rows
    ///
    /// Fails with [`Error::NoColumns`] when `columns` is empty, and when a
    /// name is invalid or repeated.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = ColumnRegistry::new();
        for name in columns {
            registry.declare(name)?;
        }
        if registry.is_empty() {
            return Err(Error::NoColumns);
        }

        Ok(Self {
            columns: registry,
            rows: RowRegistry::new(),
            values: ValueStore::new(),
            formulas: FormulaStore::new(),
        })
    }

    /// Declare a new row
    pub fn add_row(&mut self, row: u32) -> Result<()> {
        self.rows.declare(row)
    }

    // === Cell Content ===

    /// Set a literal value
    pub fn set_value(&mut self, addr: CellAddress, value: CellInt) -> Result<()> {
        self.check_assignable(&addr)?;
        self.values.insert(addr, value);
        Ok(())
    }

    /// Set a formula
    pub fn set_formula(&mut self, addr: CellAddress, formula: Formula) -> Result<()> {
        self.check_assignable(&addr)?;
        self.formulas.insert(addr, formula);
        Ok(())
    }

    fn check_assignable(&self, addr: &CellAddress) -> Result<()> {
        if !self.columns.contains(addr.column()) {
            return Err(Error::UnknownColumn(addr.column().to_string()));
        }
        if !self.rows.contains(addr.row()) {
            return Err(Error::UnknownRow(addr.row()));
        }
        if self.values.contains(addr) || self.formulas.contains(addr) {
            return Err(Error::DuplicateCell(addr.to_string()));
        }
        Ok(())
    }

    /// Get the settled value of a cell
    pub fn value(&self, addr: &CellAddress) -> Option<CellInt> {
        self.values.get(addr)
    }

    /// Get the pending formula of a cell
    pub fn formula(&self, addr: &CellAddress) -> Option<&Formula> {
        self.formulas.get(addr)
    }

    // === Grid ===

    /// Column names in declaration order
    pub fn columns(&self) -> &[String] {
        self.columns.names()
    }

    /// Row numbers in declaration order
    pub fn rows(&self) -> &[u32] {
        self.rows.numbers()
    }

    /// Number of declared cells (columns x rows)
    pub fn cell_count(&self) -> usize {
        self.columns.len() * self.rows.len()
    }

    /// Iterate over every declared cell, row by row, columns in order
    pub fn addresses(&self) -> impl Iterator<Item = CellAddress> + '_ {
        self.rows.numbers().iter().flat_map(move |&row| {
            self.columns
                .names()
                .iter()
                .map(move |column| CellAddress::from_declared(column, row))
        })
    }

    // === Stores ===

    /// Settled values
    pub fn values(&self) -> &ValueStore {
        &self.values
    }

    /// Pending formulas
    pub fn formulas(&self) -> &FormulaStore {
        &self.formulas
    }

    /// Borrow both stores mutably, for resolution
    pub fn stores_mut(&mut self) -> (&mut ValueStore, &mut FormulaStore) {
        (&mut self.values, &mut self.formulas)
    }

    /// Check whether every formula has been resolved
    pub fn is_resolved(&self) -> bool {
        self.formulas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::cell::Operator;

    fn addr(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    #[test]
    fn test_new_table() {
        let table = Table::new(["A", "B"]).unwrap();
        assert_eq!(table.columns(), ["A", "B"]);
        assert!(table.rows().is_empty());
        assert!(table.is_resolved());
    }

    #[test]
    fn test_new_table_errors() {
        let no_columns: [&str; 0] = [];
        assert_eq!(Table::new(no_columns).unwrap_err(), Error::NoColumns);
        assert_eq!(
            Table::new(["A", "A"]).unwrap_err(),
            Error::DuplicateColumn("A".into())
        );
        assert_eq!(
            Table::new(["A", "1"]).unwrap_err(),
            Error::InvalidColumnName("1".into())
        );
    }

    #[test]
    fn test_set_cells() {
        let mut table = Table::new(["A", "B"]).unwrap();
        table.add_row(1).unwrap();

        table.set_value(addr("A1"), 5).unwrap();
        let formula = Formula::new(addr("A1"), Operator::Add, addr("A1"));
        table.set_formula(addr("B1"), formula.clone()).unwrap();

        assert_eq!(table.value(&addr("A1")), Some(5));
        assert_eq!(table.formula(&addr("B1")), Some(&formula));
        assert!(!table.is_resolved());
    }

    #[test]
    fn test_set_cell_errors() {
        let mut table = Table::new(["A"]).unwrap();
        table.add_row(1).unwrap();

        assert_eq!(
            table.set_value(addr("B1"), 1),
            Err(Error::UnknownColumn("B".into()))
        );
        assert_eq!(table.set_value(addr("A2"), 1), Err(Error::UnknownRow(2)));

        table.set_value(addr("A1"), 1).unwrap();
        let formula = Formula::new(addr("A1"), Operator::Add, addr("A1"));
        assert_eq!(
            table.set_formula(addr("A1"), formula),
            Err(Error::DuplicateCell("A1".into()))
        );
    }

    #[test]
    fn test_addresses_are_row_major() {
        let mut table = Table::new(["B", "A"]).unwrap();
        table.add_row(2).unwrap();
        table.add_row(1).unwrap();

        let cells: Vec<String> = table.addresses().map(|a| a.to_string()).collect();
        assert_eq!(cells, ["B2", "A2", "B1", "A1"]);
        assert_eq!(table.cell_count(), 4);
    }
}
