//! Cell storage implementation
//!
//! Two address-keyed stores back a table:
//! - [`ValueStore`] holds settled integers and only ever grows.
//! - [`FormulaStore`] holds pending formulas and only ever shrinks once
//!   resolution starts.
//!
//! Both iterate in insertion order so that resolution and diagnostics are
//! deterministic regardless of hashing.

use std::collections::BTreeMap;

use ahash::AHashMap;

use super::{CellAddress, Formula};
use crate::CellInt;

/// Resolved cell values
#[derive(Debug, Clone, Default)]
pub struct ValueStore {
    values: AHashMap<CellAddress, CellInt>,
    /// Insertion order of `values`
    order: Vec<CellAddress>,
}

impl ValueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value if the address has none yet
    ///
    /// Returns `false` (and keeps the existing value) when the address was
    /// already settled.
    pub fn insert(&mut self, addr: CellAddress, value: CellInt) -> bool {
        if self.values.contains_key(&addr) {
            return false;
        }
        self.order.push(addr.clone());
        self.values.insert(addr, value);
        true
    }

    /// Get the value at an address
    pub fn get(&self, addr: &CellAddress) -> Option<CellInt> {
        self.values.get(addr).copied()
    }

    /// Check whether an address has a value
    pub fn contains(&self, addr: &CellAddress) -> bool {
        self.values.contains_key(addr)
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (address, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&CellAddress, CellInt)> + '_ {
        self.order.iter().map(move |addr| (addr, self.values[addr]))
    }
}

/// Pending formula cells
///
/// Each entry remembers a sequence number assigned on insertion; the
/// sequence index gives ordered iteration and O(log n) removal.
#[derive(Debug, Clone, Default)]
pub struct FormulaStore {
    formulas: AHashMap<CellAddress, (u64, Formula)>,
    sequence: BTreeMap<u64, CellAddress>,
    next_seq: u64,
}

impl FormulaStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a formula if the address has none yet
    ///
    /// Returns `false` (and keeps the existing formula) when the address was
    /// already present.
    pub fn insert(&mut self, addr: CellAddress, formula: Formula) -> bool {
        if self.formulas.contains_key(&addr) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.sequence.insert(seq, addr.clone());
        self.formulas.insert(addr, (seq, formula));
        true
    }

    /// Remove the formula at an address, returning it
    pub fn remove(&mut self, addr: &CellAddress) -> Option<Formula> {
        let (seq, formula) = self.formulas.remove(addr)?;
        self.sequence.remove(&seq);
        Some(formula)
    }

    /// Get the formula at an address
    pub fn get(&self, addr: &CellAddress) -> Option<&Formula> {
        self.formulas.get(addr).map(|(_, formula)| formula)
    }

    /// Check whether an address holds a pending formula
    pub fn contains(&self, addr: &CellAddress) -> bool {
        self.formulas.contains_key(addr)
    }

    /// The earliest-inserted remaining entry
    pub fn first(&self) -> Option<(&CellAddress, &Formula)> {
        let (_, addr) = self.sequence.iter().next()?;
        self.formulas.get(addr).map(|(_, formula)| (addr, formula))
    }

    /// Number of pending formulas
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Addresses of the pending formulas in insertion order
    pub fn addresses(&self) -> impl Iterator<Item = &CellAddress> + '_ {
        self.sequence.values()
    }

    /// Iterate over (address, formula) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&CellAddress, &Formula)> + '_ {
        self.sequence
            .values()
            .map(move |addr| (addr, &self.formulas[addr].1))
    }
}
