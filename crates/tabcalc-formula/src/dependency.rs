//! Dependency tracking for formula calculation

use ahash::{AHashMap, AHashSet};
use tabcalc_core::{CellAddress, FormulaStore};

use crate::error::{FormulaError, FormulaResult};

/// Dependency graph for formula cells
///
/// Only edges between formula cells are kept: an operand that is a literal
/// (or missing) never delays a calculation, so it needs no ordering.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Cell → formula cells it reads (precedents), left operand first
    precedents: AHashMap<CellAddress, Vec<CellAddress>>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph for every pending formula in `formulas`
    pub fn from_formulas(formulas: &FormulaStore) -> Self {
        let mut graph = Self::new();
        for (cell, formula) in formulas.iter() {
            for operand in formula.operands() {
                if formulas.contains(operand) {
                    graph.add_dependency(operand.clone(), cell.clone());
                }
            }
        }
        graph
    }

    /// Add a dependency: dependent depends on precedent
    pub fn add_dependency(&mut self, precedent: CellAddress, dependent: CellAddress) {
        let precedents = self.precedents.entry(dependent).or_default();
        if !precedents.contains(&precedent) {
            precedents.push(precedent);
        }
    }

    /// Get cells that the given cell depends on
    pub fn get_precedents(&self, cell: &CellAddress) -> &[CellAddress] {
        self.precedents.get(cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Order `roots` and everything they depend on so that every cell comes
    /// after its precedents
    ///
    /// Fails with [`FormulaError::CircularReference`] on the first back edge.
    /// The walk keeps its own stack, so chain length is not bounded by the
    /// call stack.
    pub fn calculation_order<I>(&self, roots: I) -> FormulaResult<Vec<CellAddress>>
    where
        I: IntoIterator<Item = CellAddress>,
    {
        let mut order = Vec::new();
        let mut finished: AHashSet<CellAddress> = AHashSet::new();
        let mut on_path: AHashSet<CellAddress> = AHashSet::new();

        for root in roots {
            if finished.contains(&root) {
                continue;
            }

            on_path.insert(root.clone());
            let mut stack: Vec<(CellAddress, usize)> = vec![(root, 0)];

            while let Some((cell, next)) = stack.last_mut() {
                let precedent = self.get_precedents(cell).get(*next).cloned();
                *next += 1;

                match precedent {
                    Some(precedent) => {
                        if finished.contains(&precedent) {
                            continue;
                        }
                        if on_path.contains(&precedent) {
                            return Err(cycle_error(&stack, precedent));
                        }
                        on_path.insert(precedent.clone());
                        stack.push((precedent, 0));
                    }
                    None => {
                        if let Some((cell, _)) = stack.pop() {
                            on_path.remove(&cell);
                            finished.insert(cell.clone());
                            order.push(cell);
                        }
                    }
                }
            }
        }

        Ok(order)
    }

    /// Detect circular references reachable from a cell
    #[cfg(test)]
    fn has_circular_reference(&self, cell: &CellAddress) -> bool {
        matches!(
            self.calculation_order(std::iter::once(cell.clone())),
            Err(FormulaError::CircularReference { .. })
        )
    }
}

/// Build the error for a back edge to `repeated` found while walking `stack`
fn cycle_error(stack: &[(CellAddress, usize)], repeated: CellAddress) -> FormulaError {
    let start = stack
        .iter()
        .position(|(cell, _)| *cell == repeated)
        .unwrap_or(0);
    let mut chain: Vec<CellAddress> = stack[start..].iter().map(|(cell, _)| cell.clone()).collect();
    chain.push(repeated.clone());

    FormulaError::CircularReference {
        cell: repeated,
        chain,
    }
}
