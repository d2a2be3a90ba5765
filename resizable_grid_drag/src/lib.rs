// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resizable Grid Drag: a pointer drag state machine for separator handles.
//!
//! A separator in a resizable grid is a thin handle that can only travel along
//! one axis and must not be dragged past a solver-provided boundary. This crate
//! turns raw pointer positions into that constrained motion:
//!
//! - [`Axis`]: which way a handle travels ([`Axis::Row`] handles move along `y`,
//!   [`Axis::Column`] handles move along `x`).
//! - [`Handle`]: the target being dragged, its axis, and its current offset.
//! - [`DragState`]: tracks one active drag per pointer and reports each
//!   accepted increment as a [`DragStep`], clamped so the handle never goes
//!   below its boundary. Releasing the pointer yields a single [`DragEnd`];
//!   a second release for the same pointer is a no-op.
//!
//! The crate does not know about cells, tracks, or rendering. Hosts route
//! pointer events here and forward the resulting deltas to the layout engine.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use resizable_grid_drag::{Axis, DragState, Handle};
//!
//! let mut state: DragState<usize> = DragState::new();
//!
//! // Column separator 0 sits at x = 100 and may not go below x = 80.
//! let handle = Handle::new(0, Axis::Column, 100.0);
//! state.on_down(None, handle, Point::new(100.0, 50.0), 80.0);
//!
//! // Drag 30px to the left: the handle stops at the boundary.
//! let step = state.on_move(None, Point::new(70.0, 50.0)).unwrap();
//! assert_eq!(step.delta, -20.0);
//! assert!(step.clamped);
//!
//! let end = state.on_up(None).unwrap();
//! assert_eq!(end.total_delta, -20.0);
//! assert!(state.on_up(None).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod drag;

pub use axis::Axis;
pub use drag::{Drag, DragEnd, DragState, DragStep, Handle, PointerId};
