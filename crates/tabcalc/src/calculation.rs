//! Table calculation
//!
//! Resolves every formula of a [`Table`] into an integer, following
//! formula-to-formula references and rejecting circular ones.
//!
//! # Example
//!
//! ```rust
//! use tabcalc::prelude::*;
//!
//! let mut table = Table::new(["A"]).unwrap();
//! for row in 1..=3 {
//!     table.add_row(row).unwrap();
//! }
//! table.set_value(CellAddress::parse("A1").unwrap(), 2).unwrap();
//! table
//!     .set_formula(CellAddress::parse("A3").unwrap(), parse_formula("=A1+A2").unwrap())
//!     .unwrap();
//! table
//!     .set_formula(CellAddress::parse("A2").unwrap(), parse_formula("=A1+A1").unwrap())
//!     .unwrap();
//!
//! let stats = table.calculate().unwrap();
//! assert_eq!(stats.cells_calculated, 2);
//! assert_eq!(table.value(&CellAddress::parse("A3").unwrap()), Some(6));
//! ```

use log::warn;

use crate::{FormulaResult, Resolver, Strategy, Table};

/// Options for table calculation
#[derive(Debug, Clone, Default)]
pub struct CalculationOptions {
    /// Order in which formulas are resolved (default: worklist)
    pub strategy: Strategy,
}

/// Statistics from a calculation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationStats {
    /// Total number of formula cells before calculation
    pub formula_count: usize,
    /// Number of cells calculated
    pub cells_calculated: usize,
    /// Deepest chain of formulas waiting on formulas
    pub max_depth: usize,
}

/// Extension trait for Table to add calculation methods
pub trait TableCalculationExt {
    /// Calculate all formulas in the table with default options
    fn calculate(&mut self) -> FormulaResult<CalculationStats>;

    /// Calculate all formulas with custom options
    fn calculate_with_options(
        &mut self,
        options: &CalculationOptions,
    ) -> FormulaResult<CalculationStats>;
}

impl TableCalculationExt for Table {
    fn calculate(&mut self) -> FormulaResult<CalculationStats> {
        self.calculate_with_options(&CalculationOptions::default())
    }

    fn calculate_with_options(
        &mut self,
        options: &CalculationOptions,
    ) -> FormulaResult<CalculationStats> {
        let formula_count = self.formulas().len();
        let (values, formulas) = self.stores_mut();

        let resolved = Resolver::with_strategy(options.strategy).resolve(values, formulas);
        let resolved = match resolved {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!("Calculation stopped: {}", e);
                return Err(e);
            }
        };

        Ok(CalculationStats {
            formula_count,
            cells_calculated: resolved.resolved,
            max_depth: resolved.max_depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_formula, CellAddress, FormulaError};
    use pretty_assertions::assert_eq;

    fn addr(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    /// Columns A, B; rows 1 and 2
    fn two_by_two() -> Table {
        let mut table = Table::new(["A", "B"]).unwrap();
        table.add_row(1).unwrap();
        table.add_row(2).unwrap();
        table
    }

    #[test]
    fn test_calculate_simple() {
        let mut table = two_by_two();
        table.set_value(addr("A1"), 5).unwrap();
        table.set_value(addr("B1"), 10).unwrap();
        table
            .set_formula(addr("A2"), parse_formula("=A1+B1").unwrap())
            .unwrap();
        table.set_value(addr("B2"), 3).unwrap();

        let stats = table.calculate().unwrap();

        assert_eq!(
            stats,
            CalculationStats {
                formula_count: 1,
                cells_calculated: 1,
                max_depth: 0,
            }
        );
        assert_eq!(table.value(&addr("A2")), Some(15));
        assert!(table.is_resolved());
    }

    #[test]
    fn test_calculate_both_strategies() {
        for strategy in [Strategy::Worklist, Strategy::Topological] {
            let mut table = two_by_two();
            table.set_value(addr("A1"), 8).unwrap();
            table
                .set_formula(addr("B2"), parse_formula("=B1*A2").unwrap())
                .unwrap();
            table
                .set_formula(addr("B1"), parse_formula("=A1-A2").unwrap())
                .unwrap();
            table
                .set_formula(addr("A2"), parse_formula("=A1/A1").unwrap())
                .unwrap();

            let stats = table
                .calculate_with_options(&CalculationOptions { strategy })
                .unwrap();

            assert_eq!(stats.cells_calculated, 3);
            assert_eq!(stats.max_depth, 2);
            assert_eq!(table.value(&addr("B2")), Some(7));
        }
    }

    #[test]
    fn test_calculate_self_reference() {
        let mut table = Table::new(["A"]).unwrap();
        table.add_row(1).unwrap();
        table
            .set_formula(addr("A1"), parse_formula("=A1+A1").unwrap())
            .unwrap();

        let err = table.calculate().unwrap_err();

        assert!(matches!(err, FormulaError::CircularReference { .. }));
        assert_eq!(table.value(&addr("A1")), None);
    }
}
