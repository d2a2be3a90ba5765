// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Separator synthesis.
//!
//! Every measured cell contributes one candidate segment per axis: its bottom
//! edge for rows and its right edge for columns. Candidates are then sorted so
//! that segments lying on the same line end up next to each other, ordered along
//! that line, and contiguous runs are fused into a single separator.
//!
//! ```text
//!   +-----+-----+-----+         +-----+-----+-----+
//!   |  a  |  b  |  c  |         |  a  |  b  |  c  |
//!   +=====+=====+     |   -->   +===========+     |
//!   |  d  |  e  |     |         |  d  |  e  |     |
//! ```
//!
//! The bottom edges of `a` and `b` become one row separator of their combined
//! length. A fused separator takes the largest (least restrictive) bound of its
//! parts: it spans several cells and may move as far as its most permissive
//! member allows. The boundary solver still applies the tightest constraint
//! once a drag starts.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::{Line, Point};

use crate::{Axis, MeasuredCell};

// Pixel sums along different paths can differ in the last bits.
const EPSILON: f64 = 1e-6;

/// A candidate or merged separator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Zero-based index of the track this separator resizes.
    pub index: usize,
    /// Length along the line.
    pub size: f64,
    /// Left end (rows) or the line's x coordinate (columns).
    pub x: f64,
    /// The line's y coordinate (rows) or top end (columns).
    pub y: f64,
    /// Smallest coordinate, along the drag axis, this separator may be dragged to.
    pub bounds: f64,
}

impl Segment {
    /// Coordinate of the line along the drag axis: `y` for rows, `x` for columns.
    #[must_use]
    pub fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => self.y,
            Axis::Column => self.x,
        }
    }

    /// Start of the segment along the line.
    #[must_use]
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => self.x,
            Axis::Column => self.y,
        }
    }

    /// The segment as a line in grid coordinates.
    #[must_use]
    pub fn line(&self, axis: Axis) -> Line {
        let from = Point::new(self.x, self.y);
        let to = match axis {
            Axis::Row => Point::new(self.x + self.size, self.y),
            Axis::Column => Point::new(self.x, self.y + self.size),
        };
        Line::new(from, to)
    }
}

/// Merged separators for both axes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Separators {
    /// Horizontal lines that resize rows.
    pub row: Vec<Segment>,
    /// Vertical lines that resize columns.
    pub col: Vec<Segment>,
}

impl Separators {
    /// The separators that resize tracks on `axis`.
    #[must_use]
    pub fn for_axis(&self, axis: Axis) -> &[Segment] {
        match axis {
            Axis::Row => &self.row,
            Axis::Column => &self.col,
        }
    }
}

/// The candidate segment on the far edge of `cell` for `axis`.
///
/// Returns `None` when the cell ends before the first track and so has no
/// track to resize, or when its span does not fit in `usize`.
#[must_use]
pub fn edge_segment(cell: &MeasuredCell, axis: Axis) -> Option<Segment> {
    let segment = match axis {
        Axis::Row => Segment {
            index: cell.row.checked_add(cell.row_span)?.checked_sub(2)?,
            size: cell.w,
            x: cell.x,
            y: cell.y + cell.h,
            bounds: cell.by,
        },
        Axis::Column => Segment {
            index: cell.col.checked_add(cell.col_span)?.checked_sub(2)?,
            size: cell.h,
            x: cell.x + cell.w,
            y: cell.y,
            bounds: cell.bx,
        },
    };
    Some(segment)
}

/// Sorts candidate segments of one axis and fuses contiguous runs.
///
/// Segments are ordered by line coordinate, then by position along the line.
/// Consecutive segments on the same line where one ends exactly where the next
/// begins are fused: sizes add up and the larger bound wins. Segments on the
/// same line separated by a gap stay distinct.
#[must_use]
pub fn merge_segments(axis: Axis, mut segments: Vec<Segment>) -> Vec<Segment> {
    segments.sort_by(|a, b| order(axis, a, b));

    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        if let Some(last) = merged.last_mut() {
            if is_same_line(axis, last, &segment) && is_directly_adjacent(axis, last, &segment) {
                last.size += segment.size;
                last.bounds = last.bounds.max(segment.bounds);
                continue;
            }
        }
        merged.push(segment);
    }
    merged
}

/// Derives the merged row and column separators of a set of measured cells.
pub fn synthesize<'a>(cells: impl IntoIterator<Item = &'a MeasuredCell>) -> Separators {
    let mut row = Vec::new();
    let mut col = Vec::new();
    for cell in cells {
        row.extend(edge_segment(cell, Axis::Row));
        col.extend(edge_segment(cell, Axis::Column));
    }
    Separators {
        row: merge_segments(Axis::Row, row),
        col: merge_segments(Axis::Column, col),
    }
}

fn order(axis: Axis, a: &Segment, b: &Segment) -> Ordering {
    a.offset(axis)
        .total_cmp(&b.offset(axis))
        .then_with(|| a.start(axis).total_cmp(&b.start(axis)))
}

fn is_same_line(axis: Axis, a: &Segment, b: &Segment) -> bool {
    approx_eq(a.offset(axis), b.offset(axis))
}

fn is_directly_adjacent(axis: Axis, a: &Segment, b: &Segment) -> bool {
    approx_eq(a.start(axis) + a.size, b.start(axis))
}

fn approx_eq(a: f64, b: f64) -> bool {
    let d = a - b;
    (-EPSILON..=EPSILON).contains(&d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineConfig, GridCell, Layout, measure};
    use alloc::vec;

    fn row_segment(x: f64, y: f64, size: f64, bounds: f64) -> Segment {
        Segment {
            index: 0,
            size,
            x,
            y,
            bounds,
        }
    }

    #[test]
    fn adjacent_segments_merge() {
        let merged = merge_segments(
            Axis::Row,
            vec![
                row_segment(50.0, 100.0, 50.0, 120.0),
                row_segment(0.0, 100.0, 50.0, 140.0),
            ],
        );
        assert_eq!(merged, [row_segment(0.0, 100.0, 100.0, 140.0)]);
    }

    #[test]
    fn gaps_keep_segments_apart() {
        let merged = merge_segments(
            Axis::Row,
            vec![
                row_segment(0.0, 100.0, 50.0, 0.0),
                row_segment(60.0, 100.0, 50.0, 0.0),
            ],
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].x, 0.0);
        assert_eq!(merged[1].x, 60.0);
    }

    #[test]
    fn every_run_on_a_line_is_fused() {
        let merged = merge_segments(
            Axis::Row,
            vec![
                row_segment(0.0, 10.0, 10.0, 0.0),
                row_segment(10.0, 10.0, 10.0, 0.0),
                row_segment(40.0, 10.0, 10.0, 0.0),
                row_segment(50.0, 10.0, 10.0, 0.0),
                row_segment(0.0, 20.0, 5.0, 0.0),
            ],
        );
        let summary: Vec<_> = merged.iter().map(|s| (s.x, s.y, s.size)).collect();
        assert_eq!(
            summary,
            [(0.0, 10.0, 20.0), (40.0, 10.0, 20.0), (0.0, 20.0, 5.0)]
        );
    }

    #[test]
    fn grid_of_cells_produces_one_separator_per_line() {
        let layout = Layout::new(vec![
            GridCell::new("a", 1, 1, 1, 1),
            GridCell::new("b", 2, 1, 1, 1),
        ])
        .unwrap();
        let cells = measure(&[100.0, 100.0], &[100.0, 100.0], &layout, &EngineConfig::development());
        let separators = synthesize(&cells);

        // Column separators: after `a` (index 0) and after `b` (index 1).
        assert_eq!(separators.col.len(), 2);
        assert_eq!(separators.col[0].index, 0);
        assert_eq!(separators.col[0].size, 100.0);
        assert_eq!(separators.col[0].x, 100.0);

        // The bottom edges of `a` and `b` fuse into one row separator.
        assert_eq!(separators.row.len(), 1);
        assert_eq!(separators.row[0].index, 0);
        assert_eq!(separators.row[0].size, 200.0);
        assert_eq!(separators.for_axis(Axis::Row), separators.row.as_slice());
    }

    #[test]
    fn segment_indices_use_the_last_spanned_track() {
        let layout = Layout::new(vec![GridCell::new("a", 2, 1, 2, 3).with_bounds(Some(20.0), None)]).unwrap();
        let cells = measure(&[10.0; 3], &[10.0; 3], &layout, &EngineConfig::development());
        let cell = cells.get("a").unwrap();

        let col = edge_segment(cell, Axis::Column).unwrap();
        assert_eq!((col.index, col.x, col.y, col.size, col.bounds), (2, 30.0, 0.0, 30.0, 30.0));
        assert_eq!(col.line(Axis::Column), Line::new((30.0, 0.0), (30.0, 30.0)));

        let row = edge_segment(cell, Axis::Row).unwrap();
        assert_eq!((row.index, row.y, row.size), (2, 30.0, 20.0));
    }

    #[test]
    fn overflowing_spans_have_no_edge() {
        let layout = Layout::new(vec![GridCell::new("huge", 2, 2, usize::MAX, usize::MAX)]).unwrap();
        let cells = measure(&[10.0, 10.0], &[10.0, 10.0], &layout, &EngineConfig::production());
        let cell = cells.get("huge").unwrap();
        assert_eq!(edge_segment(cell, Axis::Row), None);
        assert_eq!(edge_segment(cell, Axis::Column), None);
        assert_eq!(synthesize(&cells), Separators::default());
    }

    #[test]
    fn zero_span_on_first_track_has_no_edge() {
        let layout = Layout::new(vec![GridCell::new("flat", 1, 1, 0, 0)]).unwrap();
        let cells = measure(&[10.0], &[10.0], &layout, &EngineConfig::development());
        let separators = synthesize(&cells);
        assert!(separators.row.is_empty());
        assert!(separators.col.is_empty());
    }
}
