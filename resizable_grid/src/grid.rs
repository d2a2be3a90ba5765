// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resizable grid controller.
//!
//! [`ResizableGrid`] owns a [`GridState`] and drives resizes through three
//! phases per gesture:
//!
//! 1. [`begin_resize`](ResizableGrid::begin_resize) solves the boundary for the
//!    grabbed separator and calls [`ResizeHandler::before_resize`].
//! 2. [`resize_by`](ResizableGrid::resize_by) offers each increment to
//!    [`ResizeHandler::resize`]. If the handler overrides it, the grid leaves its
//!    tracks alone and marks the geometry as pending an external update.
//!    Otherwise a new track array is produced and cells are remeasured.
//! 3. [`end_resize`](ResizableGrid::end_resize) calls
//!    [`ResizeHandler::after_resize`] with the final size.
//!
//! Hosts that deliver raw pointer events can use
//! [`pointer_down`](ResizableGrid::pointer_down),
//! [`pointer_move`](ResizableGrid::pointer_move) and
//! [`pointer_up`](ResizableGrid::pointer_up) instead, which clamp the drag to the
//! boundary before any increment reaches the handler.
//!
//! Only one resize is active at a time. Starting a new one replaces the previous.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Display;

use kurbo::{Point, Size};

use crate::{
    Axis, CellId, Child, Diagnostic, DragState, EngineConfig, Handle, KeyMatrix, Layout,
    LayoutError, MeasuredCells, PointerId, Segment, Separators, TrackSizes, boundary_for,
    extract_layout,
};
use crate::reconcile::{Changes, GridState, reconcile};

/// Reply of [`ResizeHandler::resize`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ResizeResponse {
    /// Let the grid apply the new size.
    #[default]
    Accept,
    /// The host handles the size itself and will push new tracks.
    Override,
}

/// Receives resize notifications.
///
/// Every method has a no-op default, so implementors only override the phases
/// they care about.
pub trait ResizeHandler {
    /// A resize of track `index` is starting. `size` is its current size and
    /// `boundary` the smallest offset its far edge may be dragged to.
    fn before_resize(&mut self, axis: Axis, index: usize, size: f64, boundary: f64) {
        let _ = (axis, index, size, boundary);
    }

    /// Track `index` is about to become `new_size`.
    fn resize(&mut self, axis: Axis, index: usize, new_size: f64) -> ResizeResponse {
        let _ = (axis, index, new_size);
        ResizeResponse::Accept
    }

    /// The resize of track `index` finished at `size`.
    fn after_resize(&mut self, axis: Axis, index: usize, size: f64) {
        let _ = (axis, index, size);
    }
}

/// A handler that accepts every resize.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoopHandler;

impl ResizeHandler for NoopHandler {}

impl<H: ResizeHandler + ?Sized> ResizeHandler for &mut H {
    fn before_resize(&mut self, axis: Axis, index: usize, size: f64, boundary: f64) {
        (**self).before_resize(axis, index, size, boundary);
    }

    fn resize(&mut self, axis: Axis, index: usize, new_size: f64) -> ResizeResponse {
        (**self).resize(axis, index, new_size)
    }

    fn after_resize(&mut self, axis: Axis, index: usize, size: f64) {
        (**self).after_resize(axis, index, size);
    }
}

/// Result of [`ResizableGrid::resize_by`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResizeOutcome {
    /// The track now has `size`.
    Applied {
        /// New size of the track.
        size: f64,
    },
    /// The handler took over; the grid is waiting for external tracks.
    Overridden,
    /// The track's far edge would cross the boundary, or the track does not exist.
    OutOfBounds,
    /// No resize of that track was started.
    NoActiveResize,
}

/// Identity of a separator: the axis it resizes and the track index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeparatorRef {
    /// Axis of the resized track.
    pub axis: Axis,
    /// Zero-based track index.
    pub index: usize,
}

/// Immutable view of a grid's geometry at one point in time.
///
/// Later resizes replace the grid's arrays instead of writing into them, so a
/// snapshot stays valid for as long as it is held.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSnapshot {
    /// Row sizes.
    pub rows: Arc<[f64]>,
    /// Column sizes.
    pub cols: Arc<[f64]>,
    /// Cell geometry.
    pub cells: Arc<MeasuredCells>,
    /// Separators.
    pub separators: Arc<Separators>,
}

/// A grid of spanning cells with resizable rows and columns.
#[derive(Debug)]
pub struct ResizableGrid<H = NoopHandler> {
    state: GridState,
    config: EngineConfig,
    handler: H,
    active: Option<SeparatorRef>,
    drags: DragState<SeparatorRef>,
    extraction_diagnostics: Vec<Diagnostic>,
}

impl<H: ResizeHandler> ResizableGrid<H> {
    /// Creates a grid over an already validated layout.
    pub fn new(rows: &[f64], cols: &[f64], layout: Layout, config: EngineConfig, handler: H) -> Self {
        Self {
            state: GridState::new(rows, cols, layout, &config),
            config,
            handler,
            active: None,
            drags: DragState::new(),
            extraction_diagnostics: Vec::new(),
        }
    }

    /// Creates a grid from host children carrying raw cell metadata.
    pub fn from_children<K: Display>(
        rows: &[f64],
        cols: &[f64],
        children: &[Child<K>],
        config: EngineConfig,
        handler: H,
    ) -> Result<Self, LayoutError> {
        let extraction = extract_layout(children, &config)?;
        let mut grid = Self::new(rows, cols, extraction.layout, config, handler);
        grid.extraction_diagnostics = extraction.diagnostics;
        Ok(grid)
    }

    /// The configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The full working state.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// The resize handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The resize handler, mutably.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Cell geometry for the current tracks.
    pub fn measured_cells(&self) -> &MeasuredCells {
        self.state.measured()
    }

    /// Separators for the current geometry.
    pub fn separators(&self) -> &Separators {
        self.state.separators()
    }

    /// Current row sizes.
    pub fn rows(&self) -> &TrackSizes {
        self.state.rows()
    }

    /// Current column sizes.
    pub fn cols(&self) -> &TrackSizes {
        self.state.cols()
    }

    /// The layout.
    pub fn layout(&self) -> &Layout {
        self.state.layout()
    }

    /// Track occupancy of the layout.
    pub fn key_matrix(&self) -> &KeyMatrix<CellId> {
        self.state.key_matrix()
    }

    /// The boundary of the most recent resize.
    pub fn bounds(&self) -> f64 {
        self.state.bounds()
    }

    /// See [`GridState::external_override_pending`].
    pub fn external_override_pending(&self) -> bool {
        self.state.external_override_pending()
    }

    /// The separator being resized, if any.
    pub fn active_resize(&self) -> Option<SeparatorRef> {
        self.active
    }

    /// Diagnostics from the last extraction followed by those from the last measurement.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.extraction_diagnostics
            .iter()
            .chain(self.state.measured().diagnostics())
    }

    /// Size of the area covered by all tracks.
    pub fn content_size(&self) -> Size {
        Size::new(self.state.cols().total(), self.state.rows().total())
    }

    /// A copy-on-write view of the current geometry.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: self.state.rows().shared(),
            cols: self.state.cols().shared(),
            cells: Arc::clone(&self.state.measured),
            separators: Arc::clone(&self.state.separators),
        }
    }

    /// Starts resizing track `index` on `axis`.
    ///
    /// `pointer_offset` is the separator's offset along `axis`. Returns the
    /// boundary, which is also kept as [`bounds`](Self::bounds).
    pub fn begin_resize(&mut self, axis: Axis, index: usize, pointer_offset: f64) -> f64 {
        let tracks = self.state.tracks(axis);
        let boundary = boundary_for(
            axis,
            index,
            pointer_offset,
            self.state.key_matrix(),
            tracks,
            self.state.measured(),
            &self.config,
        );
        let size = tracks.size_of(index);
        self.state.bounds = boundary;
        self.active = Some(SeparatorRef { axis, index });
        self.handler.before_resize(axis, index, size, boundary);
        boundary
    }

    /// Grows (or with a negative `delta`, shrinks) track `index` on `axis`.
    ///
    /// The handler sees the proposed size first. A size that would put the
    /// track's far edge below [`bounds`](Self::bounds) is refused.
    pub fn resize_by(&mut self, axis: Axis, index: usize, delta: f64) -> ResizeOutcome {
        if self.active != Some(SeparatorRef { axis, index }) {
            return ResizeOutcome::NoActiveResize;
        }
        let tracks = self.state.tracks(axis);
        if index >= tracks.len() {
            return ResizeOutcome::OutOfBounds;
        }

        let new_size = tracks.size_of(index) + delta;
        if self.handler.resize(axis, index, new_size) == ResizeResponse::Override {
            self.state.external_override_pending = true;
            return ResizeOutcome::Overridden;
        }

        let tracks = self.state.tracks(axis);
        if tracks.offset_of(index) + new_size < self.state.bounds {
            return ResizeOutcome::OutOfBounds;
        }

        let resized = tracks.with_size(index, new_size);
        let size = resized.size_of(index);
        self.state.set_tracks(axis, resized, &self.config);
        self.state.external_override_pending = false;
        ResizeOutcome::Applied { size }
    }

    /// Finishes the resize of track `index` on `axis`.
    ///
    /// Returns the final size, or `None` (without notifying the handler) when
    /// that track is not being resized.
    pub fn end_resize(&mut self, axis: Axis, index: usize) -> Option<f64> {
        if self.active != Some(SeparatorRef { axis, index }) {
            return None;
        }
        self.active = None;
        let size = self.state.tracks(axis).size_of(index);
        self.handler.after_resize(axis, index, size);
        Some(size)
    }

    /// Presses `segment` with the pointer at `pointer`.
    ///
    /// Begins a resize and returns the effective boundary: the larger of the
    /// solved boundary and the segment's own bound.
    pub fn pointer_down(
        &mut self,
        pointer_id: Option<PointerId>,
        axis: Axis,
        segment: &Segment,
        pointer: Point,
    ) -> f64 {
        let offset = segment.offset(axis);
        let boundary = self.begin_resize(axis, segment.index, offset);
        let bounds = boundary.max(segment.bounds);
        let target = SeparatorRef {
            axis,
            index: segment.index,
        };
        self.drags
            .on_down(pointer_id, Handle::new(target, axis, offset), pointer, bounds);
        bounds
    }

    /// Moves the pointer, resizing by however far the clamped separator moved.
    ///
    /// Returns `None` when the pointer is not dragging or the separator did not move.
    pub fn pointer_move(&mut self, pointer_id: Option<PointerId>, pointer: Point) -> Option<ResizeOutcome> {
        let step = self.drags.on_move(pointer_id, pointer)?;
        Some(self.resize_by(step.target.axis, step.target.index, step.delta))
    }

    /// Releases the pointer, finishing its resize.
    ///
    /// Returns the final track size. Releasing twice is a no-op.
    pub fn pointer_up(&mut self, pointer_id: Option<PointerId>) -> Option<f64> {
        let end = self.drags.on_up(pointer_id)?;
        self.end_resize(end.target.axis, end.target.index)
    }

    /// Abandons the pointer's drag. The resize stays at its current size and
    /// the handler is not told it finished.
    pub fn pointer_cancel(&mut self, pointer_id: Option<PointerId>) -> bool {
        let Some(target) = self.drags.get_drag(pointer_id).map(|drag| drag.handle.target) else {
            return false;
        };
        if self.active == Some(target) {
            self.active = None;
        }
        self.drags.cancel(pointer_id)
    }

    /// Applies new external tracks and layout.
    ///
    /// While a resize is active its boundary is solved again against the new
    /// geometry, so the gesture keeps honoring the cells' minimum bounds.
    pub fn update(&mut self, rows: &[f64], cols: &[f64], layout: &Layout) -> Changes {
        let (state, mut changes) = reconcile(&self.state, rows, cols, layout, &self.config);
        self.state = state;
        if let Some(SeparatorRef { axis, index }) = self.active {
            let tracks = self.state.tracks(axis);
            let bounds = boundary_for(
                axis,
                index,
                tracks.offset_of(index + 1),
                self.state.key_matrix(),
                tracks,
                self.state.measured(),
                &self.config,
            );
            if bounds != self.state.bounds {
                changes.bounds_changed = true;
            }
            self.state.bounds = bounds;
        }
        changes
    }

    /// Applies new external tracks and host children.
    ///
    /// On error the grid is left unchanged.
    pub fn update_children<K: Display>(
        &mut self,
        rows: &[f64],
        cols: &[f64],
        children: &[Child<K>],
    ) -> Result<Changes, LayoutError> {
        let extraction = extract_layout(children, &self.config)?;
        self.extraction_diagnostics = extraction.diagnostics;
        Ok(self.update(rows, cols, &extraction.layout))
    }
}
