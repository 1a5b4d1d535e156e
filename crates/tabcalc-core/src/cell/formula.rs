//! Binary formula types

use super::CellAddress;
use std::fmt;

/// Arithmetic operator joining the two operands of a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map an operator character to its operator (`None` for anything else)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The operator's character
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A formula cell's content: `value(left) <op> value(right)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Formula {
    pub left: CellAddress,
    pub op: Operator,
    pub right: CellAddress,
}

impl Formula {
    /// Create a new formula
    pub fn new(left: CellAddress, op: Operator, right: CellAddress) -> Self {
        Self { left, op, right }
    }

    /// Both operand addresses, left first
    pub fn operands(&self) -> [&CellAddress; 2] {
        [&self.left, &self.right]
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "={}{}{}", self.left, self.op, self.right)
    }
}
