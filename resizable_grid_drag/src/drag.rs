// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state machine for axis-constrained handles.
//!
//! Each pointer owns at most one active [`Drag`]. A drag begins with
//! [`DragState::on_down`], which records where the handle was and where the
//! pointer grabbed it. Every [`DragState::on_move`] projects the pointer onto
//! the handle's axis, moves the handle by the same amount, and clamps the result
//! so it never goes below the drag's `bounds`. The difference between the new and
//! the previously accepted handle offset is reported as a [`DragStep`].
//!
//! ## Rules
//!
//! 1. **Clamped, not rejected**: a pointer past the boundary moves the handle
//!    exactly onto the boundary. Further motion past it yields no steps.
//! 2. **No empty steps**: a move that does not change the handle offset returns `None`.
//! 3. **Terminal release**: [`DragState::on_up`] removes the drag and returns a
//!    [`DragEnd`]; releasing again returns `None`.
//! 4. **Independent pointers**: drags are tracked per [`PointerId`]. Passing
//!    `None` selects the default pointer (id 1).

use alloc::collections::BTreeMap;
use core::num::NonZeroU64;

use kurbo::Point;

use crate::Axis;

/// Pointer identifier for tracking concurrent drags.
pub type PointerId = NonZeroU64;

const DEFAULT_POINTER: PointerId = NonZeroU64::MIN;

/// The thing being dragged: a target, the axis it moves on, and its current offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Handle<K> {
    /// Host-defined identity of the handle (for example a separator index).
    pub target: K,
    /// Axis along which the handle travels.
    pub axis: Axis,
    /// Handle offset along `axis` when the drag starts.
    pub offset: f64,
}

impl<K> Handle<K> {
    /// Creates a handle description.
    pub const fn new(target: K, axis: Axis, offset: f64) -> Self {
        Self {
            target,
            axis,
            offset,
        }
    }
}

/// State for an active drag.
#[derive(Clone, Debug)]
pub struct Drag<K> {
    /// The handle being dragged.
    pub handle: Handle<K>,
    /// Pointer coordinate along the axis at press time.
    pub pointer_origin: f64,
    /// Last accepted handle offset.
    pub position: f64,
    /// Minimum handle offset.
    pub bounds: f64,
}

impl<K> Drag<K> {
    /// Total distance the handle has moved since the drag began.
    #[must_use]
    pub fn total_delta(&self) -> f64 {
        self.position - self.handle.offset
    }
}

/// One accepted increment of a drag.
#[derive(Clone, Debug, PartialEq)]
pub struct DragStep<K> {
    /// The dragged target.
    pub target: K,
    /// Axis of motion.
    pub axis: Axis,
    /// Change in handle offset since the previous step.
    pub delta: f64,
    /// Handle offset after this step.
    pub position: f64,
    /// `true` when the pointer was past the boundary and the handle was held at it.
    pub clamped: bool,
}

/// Summary of a finished drag.
#[derive(Clone, Debug, PartialEq)]
pub struct DragEnd<K> {
    /// The dragged target.
    pub target: K,
    /// Axis of motion.
    pub axis: Axis,
    /// Final handle offset.
    pub position: f64,
    /// Handle offset change over the whole drag.
    pub total_delta: f64,
}

/// Drag tracking for any number of pointers.
#[derive(Clone, Debug)]
pub struct DragState<K> {
    drags: BTreeMap<PointerId, Drag<K>>,
}

impl<K: Clone> DragState<K> {
    /// Creates an empty drag state.
    pub fn new() -> Self {
        Self {
            drags: BTreeMap::new(),
        }
    }

    /// Begins dragging `handle` with the pointer at `pointer`.
    ///
    /// `bounds` is the minimum offset the handle may reach. A handle that already
    /// sits below its bounds stays where it is until the pointer moves it back
    /// above them. Any previous drag for the same pointer is replaced.
    pub fn on_down(
        &mut self,
        pointer_id: Option<PointerId>,
        handle: Handle<K>,
        pointer: Point,
        bounds: f64,
    ) {
        let pointer_id = pointer_id.unwrap_or(DEFAULT_POINTER);
        let pointer_origin = handle.axis.project(pointer);
        let position = handle.offset;
        self.drags.insert(
            pointer_id,
            Drag {
                handle,
                pointer_origin,
                position,
                bounds,
            },
        );
    }

    /// Replaces the boundary of the pointer's active drag.
    ///
    /// Returns `false` if the pointer has no active drag.
    pub fn set_bounds(&mut self, pointer_id: Option<PointerId>, bounds: f64) -> bool {
        let pointer_id = pointer_id.unwrap_or(DEFAULT_POINTER);
        match self.drags.get_mut(&pointer_id) {
            Some(drag) => {
                drag.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Processes a pointer move.
    ///
    /// Returns the accepted increment, or `None` when there is no active drag for
    /// the pointer or the handle offset did not change.
    pub fn on_move(&mut self, pointer_id: Option<PointerId>, pointer: Point) -> Option<DragStep<K>> {
        let pointer_id = pointer_id.unwrap_or(DEFAULT_POINTER);
        let drag = self.drags.get_mut(&pointer_id)?;

        let axis = drag.handle.axis;
        let wanted = drag.handle.offset + (axis.project(pointer) - drag.pointer_origin);
        let clamped = wanted < drag.bounds;
        let next = if clamped {
            // Never pull a handle that started below its bounds further down.
            drag.bounds.min(drag.position.max(wanted))
        } else {
            wanted
        };

        let delta = next - drag.position;
        if delta == 0.0 {
            return None;
        }
        drag.position = next;

        Some(DragStep {
            target: drag.handle.target.clone(),
            axis,
            delta,
            position: next,
            clamped,
        })
    }

    /// Ends the pointer's drag.
    ///
    /// Returns `None` if the pointer has no active drag, which makes repeated
    /// releases harmless.
    pub fn on_up(&mut self, pointer_id: Option<PointerId>) -> Option<DragEnd<K>> {
        let pointer_id = pointer_id.unwrap_or(DEFAULT_POINTER);
        let drag = self.drags.remove(&pointer_id)?;
        let total_delta = drag.total_delta();
        Some(DragEnd {
            target: drag.handle.target,
            axis: drag.handle.axis,
            position: drag.position,
            total_delta,
        })
    }

    /// Abandons the pointer's drag without producing a [`DragEnd`].
    ///
    /// Returns `true` if a drag was canceled.
    pub fn cancel(&mut self, pointer_id: Option<PointerId>) -> bool {
        let pointer_id = pointer_id.unwrap_or(DEFAULT_POINTER);
        self.drags.remove(&pointer_id).is_some()
    }

    /// Whether the pointer is currently dragging.
    pub fn is_dragging(&self, pointer_id: Option<PointerId>) -> bool {
        let pointer_id = pointer_id.unwrap_or(DEFAULT_POINTER);
        self.drags.contains_key(&pointer_id)
    }

    /// Returns the active drag for a pointer.
    pub fn get_drag(&self, pointer_id: Option<PointerId>) -> Option<&Drag<K>> {
        let pointer_id = pointer_id.unwrap_or(DEFAULT_POINTER);
        self.drags.get(&pointer_id)
    }

    /// Iterates over all active drags.
    pub fn drags(&self) -> impl Iterator<Item = &Drag<K>> {
        self.drags.values()
    }

    /// Drops every active drag.
    pub fn clear(&mut self) {
        self.drags.clear();
    }
}

impl<K: Clone> Default for DragState<K> {
    fn default() -> Self {
        Self::new()
    }
}
