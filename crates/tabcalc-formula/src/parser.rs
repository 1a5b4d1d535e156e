//! Formula parser
//!
//! Splits a formula token of the form `=<col><row><op><col><row>` into a
//! [`Formula`]. Field boundaries are found from character classes alone: the
//! first digit run is the left row, the first operator character after it is
//! the operator, and the digit run after the operator is the right row.

use tabcalc_core::{CellAddress, Formula, Operator};

use crate::error::{FormulaError, FormulaResult};

/// Parse a formula token into a [`Formula`]
///
/// # Example
/// ```rust
/// use tabcalc_core::Operator;
/// use tabcalc_formula::parse_formula;
///
/// let formula = parse_formula("=A1+Cell30").unwrap();
/// assert_eq!(formula.left.to_string(), "A1");
/// assert_eq!(formula.op, Operator::Add);
/// assert_eq!(formula.right.to_string(), "Cell30");
/// ```
pub fn parse_formula(token: &str) -> FormulaResult<Formula> {
    let malformed = || FormulaError::MalformedFormula(token.to_string());

    let body = token.strip_prefix('=').ok_or_else(malformed)?;

    // Left column: everything before the first digit
    let left_row_start = body.find(|c: char| c.is_ascii_digit()).ok_or_else(malformed)?;
    let (left_column, rest) = body.split_at(left_row_start);

    // Left row: up to the first operator character
    let op_pos = rest
        .find(|c: char| Operator::from_char(c).is_some())
        .ok_or_else(malformed)?;
    let (left_row, rest) = rest.split_at(op_pos);

    let mut chars = rest.chars();
    let op = chars
        .next()
        .and_then(Operator::from_char)
        .ok_or_else(malformed)?;
    let rest = chars.as_str();

    // Right column and row
    let right_row_start = rest.find(|c: char| c.is_ascii_digit()).ok_or_else(malformed)?;
    let (right_column, right_row) = rest.split_at(right_row_start);

    let left = operand(left_column, left_row).ok_or_else(malformed)?;
    let right = operand(right_column, right_row).ok_or_else(malformed)?;

    Ok(Formula::new(left, op, right))
}

/// Build an operand address from its column text and row digits
fn operand(column: &str, row: &str) -> Option<CellAddress> {
    if row.is_empty() || row.starts_with('0') || !row.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: u32 = row.parse().ok()?;
    CellAddress::new(column, row).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    #[test]
    fn test_parse_each_operator() {
        for (token, op) in [
            ("=A1+B2", Operator::Add),
            ("=A1-B2", Operator::Subtract),
            ("=A1*B2", Operator::Multiply),
            ("=A1/B2", Operator::Divide),
        ] {
            let formula = parse_formula(token).unwrap();
            assert_eq!(formula, Formula::new(addr("A1"), op, addr("B2")));
        }
    }

    #[test]
    fn test_parse_long_names_and_rows() {
        let formula = parse_formula("=Cell30/abc1024").unwrap();
        assert_eq!(formula.left, addr("Cell30"));
        assert_eq!(formula.op, Operator::Divide);
        assert_eq!(formula.right, addr("abc1024"));
    }

    #[test]
    fn test_parse_self_reference() {
        let formula = parse_formula("=A1+A1").unwrap();
        assert_eq!(formula.left, formula.right);
    }

    #[test]
    fn test_parse_malformed() {
        for token in [
            "A1+B2",     // no '='
            "=",         // empty
            "=A+B2",     // left row missing
            "=A1B2",     // no operator
            "=A1+B",     // right row missing
            "=1+B2",     // left column empty
            "=A1+2",     // right column empty
            "=A1+B2+C3", // second operator
            "=A1+B2C",   // trailing letters
            "=A01+B2",   // leading zero row
            "=A 1+B2",   // separator inside the left operand
        ] {
            assert_eq!(
                parse_formula(token),
                Err(FormulaError::MalformedFormula(token.to_string())),
                "token {token}"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        let formula = parse_formula("=Total7*rate2").unwrap();
        assert_eq!(formula.to_string(), "=Total7*rate2");
    }
}
