// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resizable Grid: layout, separator, and resize-constraint engine for grids of
//! spanning cells.
//!
//! A grid is described by row and column track sizes plus a [`Layout`] of
//! rectangular cells in 1-based track coordinates. Cells may span several
//! tracks and may declare a minimum inner width (`bx`) or height (`by`). The
//! engine turns that description into pixel geometry and into draggable
//! separators, and works out how far each separator may move without shrinking
//! any cell below its minimum.
//!
//! The building blocks are pure functions:
//!
//! - [`extract_layout`]: validates raw per-child metadata into a [`Layout`].
//! - [`build_occupancy`]: records which cell covers each track pair in a [`KeyMatrix`].
//! - [`measure_cells`]: computes a [`MeasuredCell`] rectangle for every cell and
//!   resolves minimum bounds to absolute coordinates.
//! - [`synthesize`]: derives one separator per cell edge and fuses collinear,
//!   contiguous edges into single [`Segment`]s.
//! - [`boundary_for`]: the smallest offset a separator may be dragged to.
//! - [`reconcile`]: folds new external inputs into a [`GridState`] and reports
//!   what [`Changes`] they caused.
//!
//! [`ResizableGrid`] ties them together into a controller that hosts feed with
//! resize gestures, reporting each phase to a [`ResizeHandler`].
//!
//! The engine does not render anything. Hosts position their elements from
//! [`ResizableGrid::measured_cells`], draw handles for
//! [`ResizableGrid::separators`], and route pointer events back in.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use resizable_grid::{
//!     Axis, EngineConfig, GridCell, Layout, NoopHandler, ResizableGrid, ResizeOutcome,
//! };
//!
//! // Two cells side by side; `a` must stay at least 80px wide.
//! let layout = Layout::new(vec![
//!     GridCell::new("a", 1, 1, 1, 1).with_bounds(Some(80.0), None),
//!     GridCell::new("b", 2, 1, 1, 1),
//! ])
//! .unwrap();
//! let mut grid = ResizableGrid::new(
//!     &[100.0, 100.0],
//!     &[100.0, 100.0],
//!     layout,
//!     EngineConfig::default(),
//!     NoopHandler,
//! );
//!
//! let b = grid.measured_cells().get("b").unwrap();
//! assert_eq!((b.x, b.w), (100.0, 100.0));
//!
//! // Grab the separator between `a` and `b` and drag it 30px to the left.
//! let separator = grid.separators().col[0];
//! let bounds = grid.pointer_down(None, Axis::Column, &separator, Point::new(100.0, 50.0));
//! assert_eq!(bounds, 80.0);
//!
//! // `a` stops at its minimum width.
//! let outcome = grid.pointer_move(None, Point::new(70.0, 50.0));
//! assert_eq!(outcome, Some(ResizeOutcome::Applied { size: 80.0 }));
//! assert_eq!(grid.pointer_up(None), Some(80.0));
//! assert_eq!(grid.cols().as_slice(), &[80.0, 100.0]);
//! ```
//!
//! ## Diagnostics
//!
//! Recoverable problems are reported as [`Diagnostic`]s when
//! [`EngineConfig::mode`] is [`BuildMode::Development`]: they are logged with
//! [`log::warn!`] and collected for the caller. Malformed metadata is a
//! [`LayoutError`] in every mode.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod boundary;
mod cell;
mod config;
mod diagnostics;
mod error;
mod extract;
mod grid;
mod key_matrix;
mod measure;
mod reconcile;
mod separators;
mod tracks;

pub use boundary::boundary_for;
pub use cell::{CellId, GridCell, Layout};
pub use config::{BuildMode, DEFAULT_BOUND_TOLERANCE, DEFAULT_MIN_TRACK_SIZE, EngineConfig};
pub use diagnostics::Diagnostic;
pub use error::LayoutError;
pub use extract::{Child, Extraction, extract_layout, parse_cell, validate_layout};
pub use grid::{
    GridSnapshot, NoopHandler, ResizableGrid, ResizeHandler, ResizeOutcome, ResizeResponse,
    SeparatorRef,
};
pub use key_matrix::{KeyMatrix, build_occupancy};
pub use measure::{MeasuredCell, MeasuredCells, measure, measure_cells};
pub use reconcile::{Changes, GridState, reconcile};
pub use separators::{Segment, Separators, edge_segment, merge_segments, synthesize};
pub use tracks::{TrackSizes, track_sum};

pub use resizable_grid_drag::{Axis, Drag, DragEnd, DragState, DragStep, Handle, PointerId};
