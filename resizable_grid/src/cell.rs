// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative cells and layouts.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// Stable identifier of a cell.
///
/// Ids are cheap to clone so they can be stored in every slot a cell occupies.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CellId(Arc<str>);

impl CellId {
    /// Creates an id from anything string-like.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CellId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CellId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for CellId {
    fn from(id: String) -> Self {
        Self(id.into())
    }
}

impl From<CellId> for String {
    fn from(id: CellId) -> Self {
        Self::from(&*id.0)
    }
}

/// A rectangular region of the grid, in track coordinates.
///
/// `x` and `y` are 1-based column and row numbers. The cell occupies columns
/// `x..x + w` and rows `y..y + h` (half-open). The optional `bx`/`by` give the
/// smallest width/height, in pixels, the cell may be resized to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Stable id, unique within a layout.
    #[serde(rename = "i")]
    pub id: CellId,
    /// First column (1-based).
    pub x: usize,
    /// First row (1-based).
    pub y: usize,
    /// Number of columns spanned.
    pub w: usize,
    /// Number of rows spanned.
    pub h: usize,
    /// Minimum inner width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bx: Option<f64>,
    /// Minimum inner height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<f64>,
}

impl GridCell {
    /// Creates a cell without minimum bounds.
    pub fn new(id: impl Into<CellId>, x: usize, y: usize, w: usize, h: usize) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
            bx: None,
            by: None,
        }
    }

    /// Sets the minimum inner width and height.
    #[must_use]
    pub fn with_bounds(mut self, bx: Option<f64>, by: Option<f64>) -> Self {
        self.bx = bx;
        self.by = by;
        self
    }

    /// Zero-based column range `[x - 1, x - 1 + w)`.
    #[must_use]
    pub fn col_range(&self) -> core::ops::Range<usize> {
        let start = self.x.saturating_sub(1);
        start..start.saturating_add(self.w)
    }

    /// Zero-based row range `[y - 1, y - 1 + h)`.
    #[must_use]
    pub fn row_range(&self) -> core::ops::Range<usize> {
        let start = self.y.saturating_sub(1);
        start..start.saturating_add(self.h)
    }
}

/// An ordered list of cells with unique ids.
///
/// Cells may overlap; where they do, later cells win in the
/// [`KeyMatrix`](crate::KeyMatrix).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    cells: Vec<GridCell>,
}

impl Layout {
    /// Creates a layout, rejecting duplicate ids.
    pub fn new(cells: Vec<GridCell>) -> Result<Self, LayoutError> {
        {
            let mut seen: HashSet<&str> = HashSet::with_capacity(cells.len());
            for cell in &cells {
                if !seen.insert(cell.id.as_str()) {
                    return Err(LayoutError::DuplicateId {
                        id: cell.id.clone(),
                    });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Creates an empty layout.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if there are no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Looks up a cell by id.
    pub fn get(&self, id: &str) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.id.as_str() == id)
    }

    /// The cells in declaration order.
    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Iterates over the cells in declaration order.
    pub fn iter(&self) -> core::slice::Iter<'_, GridCell> {
        self.cells.iter()
    }

    /// Consumes the layout, returning its cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<GridCell> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a GridCell;
    type IntoIter = core::slice::Iter<'a, GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
