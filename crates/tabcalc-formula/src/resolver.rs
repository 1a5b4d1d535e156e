//! Formula resolution
//!
//! Drains a [`FormulaStore`] into a [`ValueStore`]. Two strategies are
//! available:
//!
//! - [`Strategy::Worklist`] chases unresolved operands on demand, keeping the
//!   chain being chased on an explicit pending stack and a guard set. A
//!   dependency that is already on the chain is a circular reference.
//! - [`Strategy::Topological`] builds a [`DependencyGraph`] first, orders all
//!   formulas so that every formula comes after the formulas it reads, and
//!   then computes them in that order.
//!
//! Both produce the same values for any acyclic set of formulas.

use ahash::{AHashMap, AHashSet};
use log::{debug, info, trace};
use tabcalc_core::{CellAddress, CellInt, Formula, FormulaStore, ValueStore};

use crate::dependency::DependencyGraph;
use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::apply;

/// How formulas are ordered for resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// On-demand dependency chasing with a pending stack
    #[default]
    Worklist,
    /// Full dependency graph, then topological order
    Topological,
}

/// Statistics from a resolution run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Number of formulas moved into the value store
    pub resolved: usize,
    /// Deepest dependency chain chased at once
    pub max_depth: usize,
}

/// Resolves every pending formula
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    strategy: Strategy,
}

impl Resolver {
    /// Create a resolver using the default [`Strategy::Worklist`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with the given strategy
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The strategy in use
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Resolve every formula, moving each result into `values`
    ///
    /// On success `formulas` is empty. On error resolution stops at once; the
    /// chain that failed leaves no value behind.
    pub fn resolve(
        &self,
        values: &mut ValueStore,
        formulas: &mut FormulaStore,
    ) -> FormulaResult<ResolveStats> {
        self.resolve_in_order(values, formulas, std::iter::empty())
    }

    /// Resolve every formula, starting chains from `order` first
    ///
    /// Addresses in `order` that hold no pending formula are skipped. Formulas
    /// not reached through `order` are resolved afterwards in store order.
    pub fn resolve_in_order<I>(
        &self,
        values: &mut ValueStore,
        formulas: &mut FormulaStore,
        order: I,
    ) -> FormulaResult<ResolveStats>
    where
        I: IntoIterator<Item = CellAddress>,
    {
        let pending_before = formulas.len();
        let stats = match self.strategy {
            Strategy::Worklist => {
                let mut chaser = Chaser::new(values, formulas);
                for root in order {
                    chaser.resolve_from(root)?;
                }
                while let Some(root) = chaser.formulas.first().map(|(addr, _)| addr.clone()) {
                    chaser.resolve_from(root)?;
                }
                chaser.stats
            }
            Strategy::Topological => resolve_topological(values, formulas, order)?,
        };

        info!(
            "Resolved {} of {} formulas (max chain depth {})",
            stats.resolved, pending_before, stats.max_depth
        );
        Ok(stats)
    }
}

/// Compute one formula whose operands are both settled
fn compute(values: &ValueStore, cell: &CellAddress, formula: &Formula) -> FormulaResult<CellInt> {
    let settled = |operand: &CellAddress| {
        values
            .get(operand)
            .ok_or_else(|| FormulaError::DanglingReference {
                cell: cell.clone(),
                operand: operand.clone(),
            })
    };
    let left = settled(&formula.left)?;
    let right = settled(&formula.right)?;

    apply(formula.op, left, right).map_err(|source| FormulaError::Arithmetic {
        cell: cell.clone(),
        source,
    })
}

/// Move a computed formula from the formula store to the value store
fn settle(
    values: &mut ValueStore,
    formulas: &mut FormulaStore,
    cell: CellAddress,
    value: CellInt,
) {
    formulas.remove(&cell);
    debug!("{} = {}", cell, value);
    let inserted = values.insert(cell, value);
    // A formula cell never has a literal, and each formula is computed once.
    debug_assert!(inserted, "formula cell already had a value");
}

/// State for [`Strategy::Worklist`]
struct Chaser<'a> {
    values: &'a mut ValueStore,
    formulas: &'a mut FormulaStore,
    /// Dependencies currently being chased, innermost last
    pending: Vec<CellAddress>,
    /// Members of `pending`
    guard: AHashSet<CellAddress>,
    stats: ResolveStats,
}

impl<'a> Chaser<'a> {
    fn new(values: &'a mut ValueStore, formulas: &'a mut FormulaStore) -> Self {
        Self {
            values,
            formulas,
            pending: Vec::new(),
            guard: AHashSet::new(),
            stats: ResolveStats::default(),
        }
    }

    /// Resolve `root` and everything it transitively waits on
    fn resolve_from(&mut self, root: CellAddress) -> FormulaResult<()> {
        if !self.formulas.contains(&root) {
            return Ok(());
        }
        debug_assert!(self.pending.is_empty() && self.guard.is_empty());

        loop {
            let current = self.pending.last().unwrap_or(&root).clone();
            let formula = match self.formulas.get(&current) {
                Some(formula) => formula,
                None => unreachable!("pending cell {current} is not a formula"),
            };

            // Left operand takes priority when both are unresolved
            let blocked_on = formula
                .operands()
                .into_iter()
                .find(|operand| self.formulas.contains(operand))
                .cloned();

            match blocked_on {
                None => {
                    let value = compute(self.values, &current, formula)?;
                    settle(self.values, self.formulas, current, value);
                    self.stats.resolved += 1;

                    match self.pending.pop() {
                        Some(done) => {
                            self.guard.remove(&done);
                        }
                        None => return Ok(()),
                    }
                }
                Some(dependency) => {
                    if !self.guard.insert(dependency.clone()) {
                        let mut chain = Vec::with_capacity(self.pending.len() + 2);
                        chain.push(root.clone());
                        chain.extend(self.pending.iter().cloned());
                        chain.push(dependency.clone());
                        self.pending.clear();
                        self.guard.clear();
                        return Err(FormulaError::CircularReference {
                            cell: dependency,
                            chain,
                        });
                    }
                    trace!("{} waits on {}", current, dependency);
                    self.pending.push(dependency);
                    self.stats.max_depth = self.stats.max_depth.max(self.pending.len());
                }
            }
        }
    }
}

/// [`Strategy::Topological`]
fn resolve_topological<I>(
    values: &mut ValueStore,
    formulas: &mut FormulaStore,
    order: I,
) -> FormulaResult<ResolveStats>
where
    I: IntoIterator<Item = CellAddress>,
{
    let graph = DependencyGraph::from_formulas(formulas);

    let roots: Vec<CellAddress> = order
        .into_iter()
        .filter(|addr| formulas.contains(addr))
        .chain(formulas.addresses().cloned())
        .collect();
    let calc_order = graph.calculation_order(roots)?;

    let mut stats = ResolveStats::default();
    {
        let mut depths: AHashMap<&CellAddress, usize> = AHashMap::new();
        for cell in &calc_order {
            let depth = graph
                .get_precedents(cell)
                .iter()
                .filter_map(|precedent| depths.get(precedent))
                .map(|depth| depth + 1)
                .max()
                .unwrap_or(0);
            stats.max_depth = stats.max_depth.max(depth);
            depths.insert(cell, depth);
        }
    }

    for cell in calc_order {
        let formula = match formulas.get(&cell) {
            Some(formula) => formula,
            None => continue,
        };
        let value = compute(values, &cell, formula)?;
        settle(values, formulas, cell, value);
        stats.resolved += 1;
    }
    Ok(stats)
}
