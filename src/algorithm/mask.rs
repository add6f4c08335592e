//! Acceptance bitmap over the candidate grid

use bitvec::prelude::*;
use std::fmt;

/// Column-major acceptance bitmap for one scan
///
/// One bit per candidate, addressed by (column, row) in the scan's own
/// grid coordinates. Out-of-range addresses read as not accepted and are
/// ignored on write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    bits: BitVec,
    columns: usize,
    rows: usize,
}

impl CellMask {
    /// Create a mask with no accepted cells
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            bits: bitvec![0; columns * rows],
            columns,
            rows,
        }
    }

    /// Mark a cell as accepted
    pub fn set(&mut self, column: usize, row: usize) {
        if let Some(index) = self.index(column, row) {
            self.bits.set(index, true);
        }
    }

    /// Test whether a cell is accepted
    pub fn get(&self, column: usize, row: usize) -> bool {
        self.index(column, row)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Number of candidate columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of candidate rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Count accepted cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test whether no cell is accepted
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| column * self.rows + row)
    }
}

impl fmt::Display for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellMask({} accepted of {}x{})",
            self.count(),
            self.columns,
            self.rows
        )
    }
}
