// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track occupancy matrix.
//!
//! A [`KeyMatrix`] has one slot per (row, column) track pair. Each slot holds the
//! key of the cell covering it, or nothing. The boundary solver reads one matrix
//! row to find every cell affected by resizing that row; columns are handled by
//! transposing first so the same code serves both axes.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{CellId, Layout};

/// A row-major `rows × cols` matrix of optional cell keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMatrix<K> {
    rows: usize,
    cols: usize,
    slots: Vec<Option<K>>,
}

impl<K: Clone> KeyMatrix<K> {
    /// Creates an `rows × cols` matrix with every slot empty.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows.checked_mul(cols).unwrap_or(0);
        if len == 0 {
            return Self {
                rows,
                cols,
                slots: Vec::new(),
            };
        }
        Self {
            rows,
            cols,
            slots: vec![None; len],
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the matrix has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the key at `(row, col)`, if the slot exists and is occupied.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&K> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.slots[row * self.cols + col].as_ref()
    }

    /// Returns the slots of one row, or an empty slice if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<K>] {
        if row >= self.rows || self.slots.is_empty() {
            return &[];
        }
        let start = row * self.cols;
        &self.slots[start..start + self.cols]
    }

    /// Iterates over the occupied keys of one row, left to right.
    pub fn keys_in_row(&self, row: usize) -> impl Iterator<Item = &K> {
        self.row(row).iter().flatten()
    }

    /// Writes `key` into every slot of the rectangle `rows × cols`.
    ///
    /// The rectangle is clamped to the matrix; out-of-range parts are ignored.
    pub fn fill(&mut self, rows: Range<usize>, cols: Range<usize>, key: &K) {
        let row_end = rows.end.min(self.rows);
        let col_end = cols.end.min(self.cols);
        for row in rows.start..row_end {
            let base = row * self.cols;
            for col in cols.start..col_end {
                self.slots[base + col] = Some(key.clone());
            }
        }
    }

    /// Returns the matrix with rows and columns swapped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self::new(self.cols, self.rows);
        if self.slots.is_empty() {
            return out;
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.slots[col * self.rows + row] = self.slots[row * self.cols + col].clone();
            }
        }
        out
    }
}

/// Builds the occupancy matrix for a layout over the given tracks.
///
/// Only the track counts matter. Cells are written in layout order, so an
/// overlapping later cell replaces an earlier one. Spans that run past the last
/// track are truncated.
#[must_use]
pub fn build_occupancy(rows: &[f64], cols: &[f64], layout: &Layout) -> KeyMatrix<CellId> {
    let mut matrix = KeyMatrix::new(rows.len(), cols.len());
    for cell in layout {
        matrix.fill(cell.row_range(), cell.col_range(), &cell.id);
    }
    matrix
}
