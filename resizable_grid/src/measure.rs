// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel measurement of a layout.
//!
//! [`measure_cells`] turns track coordinates into absolute pixel rectangles:
//!
//! - `x` is the sum of the columns before the cell, `w` the sum of the columns it spans;
//!   `y` and `h` are the same over rows.
//! - Minimum bounds become absolute coordinates: `bx = x + cell.bx` (or `x` when unset),
//!   `by = y + cell.by`.
//! - A bound that exceeds the cell's current size by more than
//!   [`EngineConfig::bound_tolerance`] is clamped to the cell's far edge and reported
//!   as [`Diagnostic::BoundExceedsSize`]. It takes effect once the cell has grown enough.
//!
//! Measurement is a full recomputation and never fails.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::diagnostics::report;
use crate::{Axis, CellId, Diagnostic, EngineConfig, Layout, TrackSizes};

/// A cell's pixel geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredCell {
    /// The cell's id.
    pub id: CellId,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
    /// Smallest x coordinate the right edge may reach.
    pub bx: f64,
    /// Smallest y coordinate the bottom edge may reach.
    pub by: f64,
    /// First row (1-based), as declared.
    pub row: usize,
    /// First column (1-based), as declared.
    pub col: usize,
    /// Rows spanned, as declared.
    pub row_span: usize,
    /// Columns spanned, as declared.
    pub col_span: usize,
}

impl MeasuredCell {
    /// The cell's rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.w, self.y + self.h)
    }

    /// Coordinate of the far edge on `axis` (bottom for rows, right for columns).
    #[must_use]
    pub fn far_edge(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => self.y + self.h,
            Axis::Column => self.x + self.w,
        }
    }

    /// Absolute minimum-bound coordinate on `axis`.
    #[must_use]
    pub fn bound(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => self.by,
            Axis::Column => self.bx,
        }
    }

    /// How far the far edge on `axis` can move back before the cell drops below its
    /// minimum size. Never negative.
    #[must_use]
    pub fn max_contraction(&self, axis: Axis) -> f64 {
        (self.far_edge(axis) - self.bound(axis)).max(0.0)
    }
}

/// Measured cells in layout order, with lookup by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasuredCells {
    cells: Vec<MeasuredCell>,
    by_id: HashMap<CellId, usize>,
    diagnostics: Vec<Diagnostic>,
}

impl MeasuredCells {
    /// Looks up a cell by id.
    pub fn get(&self, id: &str) -> Option<&MeasuredCell> {
        self.by_id.get(id).map(|&i| &self.cells[i])
    }

    /// Number of measured cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if nothing was measured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the cells in layout order.
    pub fn iter(&self) -> core::slice::Iter<'_, MeasuredCell> {
        self.cells.iter()
    }

    /// The cells in layout order.
    #[must_use]
    pub fn as_slice(&self) -> &[MeasuredCell] {
        &self.cells
    }

    /// Bounds that were clamped during measurement, in development mode.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl<'a> IntoIterator for &'a MeasuredCells {
    type Item = &'a MeasuredCell;
    type IntoIter = core::slice::Iter<'a, MeasuredCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Measures every cell of `layout` against the given tracks.
#[must_use]
pub fn measure_cells(
    rows: &TrackSizes,
    cols: &TrackSizes,
    layout: &Layout,
    config: &EngineConfig,
) -> MeasuredCells {
    let mut cells = Vec::with_capacity(layout.len());
    let mut by_id = HashMap::with_capacity(layout.len());
    let mut diagnostics = Vec::new();

    for (index, cell) in layout.iter().enumerate() {
        let col_start = cell.x.saturating_sub(1);
        let row_start = cell.y.saturating_sub(1);
        let x = cols.offset_of(col_start);
        let y = rows.offset_of(row_start);
        let w = cols.span(col_start, cell.w);
        let h = rows.span(row_start, cell.h);

        let mut mc = MeasuredCell {
            id: cell.id.clone(),
            x,
            y,
            w,
            h,
            bx: x + cell.bx.unwrap_or(0.0),
            by: y + cell.by.unwrap_or(0.0),
            row: cell.y,
            col: cell.x,
            row_span: cell.h,
            col_span: cell.w,
        };

        if let Some(by) = cell.by.filter(|&by| by > h + config.bound_tolerance) {
            report(
                config,
                &mut diagnostics,
                Diagnostic::BoundExceedsSize {
                    index,
                    id: cell.id.clone(),
                    axis: Axis::Row,
                    requested: by,
                    current: h,
                },
            );
            mc.by = y + h;
        }
        if let Some(bx) = cell.bx.filter(|&bx| bx > w + config.bound_tolerance) {
            report(
                config,
                &mut diagnostics,
                Diagnostic::BoundExceedsSize {
                    index,
                    id: cell.id.clone(),
                    axis: Axis::Column,
                    requested: bx,
                    current: w,
                },
            );
            mc.bx = x + w;
        }

        by_id.insert(cell.id.clone(), cells.len());
        cells.push(mc);
    }

    MeasuredCells {
        cells,
        by_id,
        diagnostics,
    }
}

/// Convenience wrapper over [`measure_cells`] for plain slices.
#[must_use]
pub fn measure(rows: &[f64], cols: &[f64], layout: &Layout, config: &EngineConfig) -> MeasuredCells {
    measure_cells(&TrackSizes::new(rows), &TrackSizes::new(cols), layout, config)
}
