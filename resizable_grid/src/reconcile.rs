// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reconciliation of engine state with external inputs.
//!
//! The host owns the authoritative track sizes and layout; the engine keeps a
//! working copy that resize gestures modify. [`reconcile`] folds a new set of
//! external inputs into that working copy and reports what changed, so the host
//! can skip work when nothing did.
//!
//! Inputs are compared by value against the last external inputs seen, not
//! against the working copy. Re-submitting the same arrays after the user has
//! resized a track keeps the resized geometry.

use alloc::sync::Arc;

use crate::{
    Axis, CellId, EngineConfig, KeyMatrix, Layout, MeasuredCells, Separators, TrackSizes,
    build_occupancy, measure_cells, synthesize,
};

/// Which inputs differed in a [`reconcile`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    /// External row sizes differ from the last ones seen.
    pub rows_changed: bool,
    /// External column sizes differ from the last ones seen.
    pub cols_changed: bool,
    /// The layout differs from the current one.
    pub layout_changed: bool,
    /// The stored resize boundary was reset.
    pub bounds_changed: bool,
}

impl Changes {
    /// Returns `true` if anything changed.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.rows_changed || self.cols_changed || self.layout_changed || self.bounds_changed
    }

    /// Returns `true` if measured cells must be recomputed.
    ///
    /// A reset boundary alone does not move any cell.
    #[must_use]
    pub const fn needs_remeasure(&self) -> bool {
        self.rows_changed || self.cols_changed || self.layout_changed
    }
}

/// Working state of a grid: tracks, layout and everything derived from them.
///
/// Derived data is held behind [`Arc`]s, so cloning a state is cheap and a clone
/// keeps observing the geometry it was taken from.
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    pub(crate) rows: TrackSizes,
    pub(crate) cols: TrackSizes,
    external_rows: Arc<[f64]>,
    external_cols: Arc<[f64]>,
    pub(crate) layout: Arc<Layout>,
    key_matrix: Arc<KeyMatrix<CellId>>,
    pub(crate) measured: Arc<MeasuredCells>,
    pub(crate) separators: Arc<Separators>,
    pub(crate) bounds: f64,
    pub(crate) external_override_pending: bool,
}

impl GridState {
    /// Builds the state for a fresh set of inputs.
    #[must_use]
    pub fn new(rows: &[f64], cols: &[f64], layout: Layout, config: &EngineConfig) -> Self {
        let rows = TrackSizes::new(rows);
        let cols = TrackSizes::new(cols);
        let key_matrix = build_occupancy(rows.as_slice(), cols.as_slice(), &layout);
        let mut state = Self {
            external_rows: rows.shared(),
            external_cols: cols.shared(),
            rows,
            cols,
            layout: Arc::new(layout),
            key_matrix: Arc::new(key_matrix),
            measured: Arc::default(),
            separators: Arc::default(),
            bounds: 0.0,
            external_override_pending: false,
        };
        state.remeasure(config);
        state
    }

    /// Current row sizes.
    #[must_use]
    pub fn rows(&self) -> &TrackSizes {
        &self.rows
    }

    /// Current column sizes.
    #[must_use]
    pub fn cols(&self) -> &TrackSizes {
        &self.cols
    }

    /// Current tracks along `axis`.
    #[must_use]
    pub fn tracks(&self, axis: Axis) -> &TrackSizes {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.cols,
        }
    }

    /// The layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Track occupancy of the layout.
    #[must_use]
    pub fn key_matrix(&self) -> &KeyMatrix<CellId> {
        &self.key_matrix
    }

    /// Cell geometry for the current tracks.
    #[must_use]
    pub fn measured(&self) -> &MeasuredCells {
        &self.measured
    }

    /// Separators for the current geometry.
    #[must_use]
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// The boundary computed for the most recent resize.
    #[must_use]
    pub fn bounds(&self) -> f64 {
        self.bounds
    }

    /// `true` while a vetoed resize has left the geometry out of step with the
    /// external tracks.
    #[must_use]
    pub fn external_override_pending(&self) -> bool {
        self.external_override_pending
    }

    /// Replaces the tracks on `axis` and remeasures.
    pub(crate) fn set_tracks(&mut self, axis: Axis, tracks: TrackSizes, config: &EngineConfig) {
        match axis {
            Axis::Row => self.rows = tracks,
            Axis::Column => self.cols = tracks,
        }
        self.remeasure(config);
    }

    fn remeasure(&mut self, config: &EngineConfig) {
        let measured = measure_cells(&self.rows, &self.cols, &self.layout, config);
        self.separators = Arc::new(synthesize(&measured));
        self.measured = Arc::new(measured);
    }
}

/// Folds new external inputs into `prev`.
///
/// Tracks on a changed axis are reset to the new external sizes, discarding any
/// resizes made since. A changed track array also resets the stored boundary.
/// Whenever anything changed, cells are remeasured and a pending external
/// override is cleared. The key matrix is only rebuilt when the layout or a
/// track count changed.
///
/// When nothing changed, the returned state is a clone of `prev`.
#[must_use]
pub fn reconcile(
    prev: &GridState,
    next_rows: &[f64],
    next_cols: &[f64],
    next_layout: &Layout,
    config: &EngineConfig,
) -> (GridState, Changes) {
    let rows_changed = *prev.external_rows != *next_rows;
    let cols_changed = *prev.external_cols != *next_cols;
    let layout_changed = *prev.layout != *next_layout;
    let bounds_changed = (rows_changed || cols_changed) && prev.bounds != 0.0;
    let changes = Changes {
        rows_changed,
        cols_changed,
        layout_changed,
        bounds_changed,
    };
    if !changes.any() {
        return (prev.clone(), changes);
    }

    let mut next = prev.clone();
    if rows_changed {
        next.rows = TrackSizes::new(next_rows);
        next.external_rows = next.rows.shared();
    }
    if cols_changed {
        next.cols = TrackSizes::new(next_cols);
        next.external_cols = next.cols.shared();
    }
    if layout_changed {
        next.layout = Arc::new(next_layout.clone());
    }
    if bounds_changed {
        next.bounds = 0.0;
    }

    let counts_changed =
        next.rows.len() != prev.rows.len() || next.cols.len() != prev.cols.len();
    if layout_changed || counts_changed {
        next.key_matrix = Arc::new(build_occupancy(
            next.rows.as_slice(),
            next.cols.as_slice(),
            &next.layout,
        ));
    }
    if changes.needs_remeasure() {
        next.remeasure(config);
    }
    next.external_override_pending = false;

    (next, changes)
}
