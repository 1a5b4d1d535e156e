//! Arithmetic evaluator
//!
//! All four operators use checked `i64` arithmetic: a result that does not fit
//! fails with [`ArithmeticError::Overflow`] instead of wrapping. Division
//! truncates toward zero.

use tabcalc_core::{CellInt, Operator};

use crate::error::ArithmeticError;

/// Apply `op` to two settled values
///
/// # Example
/// ```rust
/// use tabcalc_core::Operator;
/// use tabcalc_formula::evaluator::apply;
///
/// assert_eq!(apply(Operator::Add, 5, 10), Ok(15));
/// assert_eq!(apply(Operator::Divide, -7, 2), Ok(-3));
/// assert!(apply(Operator::Divide, 1, 0).is_err());
/// ```
pub fn apply(op: Operator, left: CellInt, right: CellInt) -> Result<CellInt, ArithmeticError> {
    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Subtract => left.checked_sub(right),
        Operator::Multiply => left.checked_mul(right),
        Operator::Divide => {
            if right == 0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            left.checked_div(right)
        }
    };
    result.ok_or(ArithmeticError::Overflow)
}

/// Apply an operator given by its character
pub fn apply_symbol(
    symbol: char,
    left: CellInt,
    right: CellInt,
) -> Result<CellInt, ArithmeticError> {
    let op = Operator::from_char(symbol).ok_or(ArithmeticError::UnsupportedOperator(symbol))?;
    apply(op, left, right)
}
