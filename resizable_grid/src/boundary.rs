// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize boundary solver.
//!
//! When the user grabs the separator after track `target`, every cell that
//! occupies that track shrinks if the separator moves back. Each of them can
//! give up at most `far edge - minimum bound` pixels; the cell that can give up
//! the least decides how far the separator may go.
//!
//! ```text
//!              |
//!  +---+---+---+---+---+
//!  |   |a          |   |
//!  +---+---+---+---+---+
//!  |   |   |b >|   |   |
//!  +---+---+---+---+---+
//!  |   |   |c          |
//!  +---+---+---+---+---+
//!              |
//! ```
//!
//! Moving the column boundary at `>` resizes column 2, which `a`, `b`, and `c`
//! all occupy. The rows are inspected through the key matrix; columns reuse the
//! same walk over the transposed matrix.

use smallvec::SmallVec;

use crate::{Axis, CellId, EngineConfig, KeyMatrix, MeasuredCells, TrackSizes};

/// Returns the smallest offset the separator of track `target` may be dragged to.
///
/// `pointer_offset` is the separator's current offset along `axis`. The result is
/// `max(start of target + min_track_size, pointer_offset - tightest contraction)`.
/// With no cell on the track only the floor applies.
///
/// A cell's contraction is never negative: a bound that sits past the cell's far
/// edge, inside the measurement tolerance, pins the boundary at `pointer_offset`
/// instead of pushing it beyond the handle.
#[must_use]
pub fn boundary_for(
    axis: Axis,
    target: usize,
    pointer_offset: f64,
    matrix: &KeyMatrix<CellId>,
    tracks: &TrackSizes,
    cells: &MeasuredCells,
    config: &EngineConfig,
) -> f64 {
    let transposed;
    let matrix = match axis {
        Axis::Row => matrix,
        Axis::Column => {
            transposed = matrix.transpose();
            &transposed
        }
    };

    // Spanning cells show up once per occupied slot; visit each once.
    let mut seen: SmallVec<[&CellId; 8]> = SmallVec::new();
    let mut min_contraction: Option<f64> = None;
    for id in matrix.keys_in_row(target) {
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        let Some(cell) = cells.get(id.as_str()) else {
            continue;
        };
        let contraction = cell.max_contraction(axis);
        min_contraction = Some(min_contraction.map_or(contraction, |m| m.min(contraction)));
    }

    let floor = tracks.offset_of(target) + config.min_track_size;
    match min_contraction {
        Some(contraction) => floor.max(pointer_offset - contraction),
        None => floor,
    }
}
