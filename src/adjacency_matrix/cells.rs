use bitvec::vec::BitVec;

use crate::weighting::{Weight, Weighting};

/// Square, row-major cell storage for an adjacency matrix of fixed size.
///
/// Unweighted matrices keep one presence bit per cell; weighted matrices keep
/// an optional weight per cell, with `None` marking an absent arc.  Diagonal
/// cells start out present with weight `0.0`; they are carried along but
/// never describe an arc.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Cells {
    size: usize,
    store: Store,
}

#[derive(Clone, Debug, PartialEq)]
enum Store {
    Presence(BitVec),
    Weights(Vec<Option<Weight>>),
}

impl Cells {
    pub fn new(size: usize, weighting: Weighting) -> Self {
        let store = match weighting {
            Weighting::Unweighted => Store::Presence(BitVec::repeat(false, size * size)),
            Weighting::Weighted => Store::Weights(vec![None; size * size]),
        };
        let mut cells = Cells { size, store };
        for index in 0..size {
            cells.reset(index, index);
        }
        cells
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        let offset = self.offset(row, col);
        match &self.store {
            Store::Presence(bits) => bits[offset],
            Store::Weights(weights) => weights[offset].is_some(),
        }
    }

    /// Gets the weight in a cell.  Always `None` in an unweighted store.
    pub fn weight(&self, row: usize, col: usize) -> Option<Weight> {
        let offset = self.offset(row, col);
        match &self.store {
            Store::Presence(_) => None,
            Store::Weights(weights) => weights[offset],
        }
    }

    /// Marks a cell present.  `weight` is ignored by an unweighted store.
    pub fn set(&mut self, row: usize, col: usize, weight: Option<Weight>) {
        let offset = self.offset(row, col);
        match &mut self.store {
            Store::Presence(bits) => bits.set(offset, true),
            Store::Weights(weights) => {
                debug_assert!(weight.is_some());
                weights[offset] = weight;
            }
        }
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        let offset = self.offset(row, col);
        match &mut self.store {
            Store::Presence(bits) => bits.set(offset, false),
            Store::Weights(weights) => weights[offset] = None,
        }
    }

    /// Restores a cell to its state at construction.
    fn reset(&mut self, row: usize, col: usize) {
        if row != col {
            self.clear(row, col);
            return;
        }
        let offset = self.offset(row, col);
        match &mut self.store {
            Store::Presence(bits) => bits.set(offset, true),
            Store::Weights(weights) => weights[offset] = Some(0.0),
        }
    }

    fn copy(&mut self, (from_row, from_col): (usize, usize), (to_row, to_col): (usize, usize)) {
        let from = self.offset(from_row, from_col);
        let to = self.offset(to_row, to_col);
        match &mut self.store {
            Store::Presence(bits) => {
                let bit = bits[from];
                bits.set(to, bit);
            }
            Store::Weights(weights) => weights[to] = weights[from],
        }
    }

    /// Deletes row and column `index` from the occupied `len`-by-`len` block.
    /// Later columns shift left and later rows shift up, after which the
    /// vacated last row and column return to their construction state.
    pub fn remove_index(&mut self, index: usize, len: usize) {
        debug_assert!(index < len && len <= self.size);
        let last = len - 1;
        for row in 0..len {
            for col in index..last {
                self.copy((row, col + 1), (row, col));
            }
        }
        for row in index..last {
            for col in 0..last {
                self.copy((row + 1, col), (row, col));
            }
        }
        for other in 0..len {
            self.reset(last, other);
            self.reset(other, last);
        }
    }
}
