//! # tabcalc-formula
//!
//! Formula parser and resolver for tabcalc.
//!
//! This crate provides:
//! - Formula parsing (`=A1+B2` → [`Formula`](tabcalc_core::Formula))
//! - Integer arithmetic for the four binary operators
//! - Dependency resolution that drains pending formulas into settled values,
//!   rejecting circular and dangling references
//!
//! ## Example
//!
//! ```rust
//! use tabcalc_core::{CellAddress, FormulaStore, ValueStore};
//! use tabcalc_formula::{parse_formula, Resolver};
//!
//! let mut values = ValueStore::new();
//! values.insert(CellAddress::parse("A1").unwrap(), 2);
//!
//! let mut formulas = FormulaStore::new();
//! formulas.insert(CellAddress::parse("A3").unwrap(), parse_formula("=A1+A2").unwrap());
//! formulas.insert(CellAddress::parse("A2").unwrap(), parse_formula("=A1+A1").unwrap());
//!
//! Resolver::new().resolve(&mut values, &mut formulas).unwrap();
//! assert_eq!(values.get(&CellAddress::parse("A3").unwrap()), Some(6));
//! ```

pub mod dependency;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod resolver;

pub use dependency::DependencyGraph;
pub use error::{ArithmeticError, FormulaError, FormulaResult};
pub use evaluator::{apply, apply_symbol};
pub use parser::parse_formula;
pub use resolver::{ResolveStats, Resolver, Strategy};
