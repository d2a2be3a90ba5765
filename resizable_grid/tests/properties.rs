// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the layout engine.

use proptest::prelude::*;
use resizable_grid::{
    Axis, CellId, EngineConfig, GridCell, KeyMatrix, Layout, TrackSizes, boundary_for,
    build_occupancy, measure, measure_cells, merge_segments, synthesize,
};

fn tracks() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0_u16..400, 1..8)
        .prop_map(|sizes| sizes.into_iter().map(f64::from).collect())
}

fn cell(rows: usize, cols: usize) -> impl Strategy<Value = GridCell> {
    (1..=cols, 1..=rows)
        .prop_flat_map(move |(x, y)| {
            (
                Just(x),
                Just(y),
                1..=cols - x + 1,
                1..=rows - y + 1,
                prop::option::of(0.0..600.0_f64),
                prop::option::of(0.0..600.0_f64),
            )
        })
        .prop_map(|(x, y, w, h, bx, by)| GridCell::new("", x, y, w, h).with_bounds(bx, by))
}

fn grid() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Layout)> {
    (tracks(), tracks())
        .prop_flat_map(|(rows, cols)| {
            let cells = prop::collection::vec(cell(rows.len(), cols.len()), 1..6);
            (Just(rows), Just(cols), cells)
        })
        .prop_map(|(rows, cols, cells)| {
            let cells = cells
                .into_iter()
                .enumerate()
                .map(|(i, mut cell)| {
                    cell.id = CellId::from(format!("c{i}"));
                    cell
                })
                .collect();
            (rows, cols, Layout::new(cells).unwrap())
        })
}

fn sum(sizes: &[f64]) -> f64 {
    sizes.iter().fold(0.0, |acc, size| acc + size)
}

proptest! {
    #[test]
    fn measurement_matches_track_sums((rows, cols, layout) in grid()) {
        let cells = measure(&rows, &cols, &layout, &EngineConfig::production());
        for cell in &layout {
            let mc = cells.get(cell.id.as_str()).unwrap();
            let (x0, y0) = (cell.x - 1, cell.y - 1);
            prop_assert_eq!(mc.x, sum(&cols[..x0]));
            prop_assert_eq!(mc.w, sum(&cols[x0..x0 + cell.w]));
            prop_assert_eq!(mc.y, sum(&rows[..y0]));
            prop_assert_eq!(mc.h, sum(&rows[y0..y0 + cell.h]));
        }
    }

    #[test]
    fn oversized_bounds_clamp_to_far_edge((rows, cols, layout) in grid()) {
        let cells = measure(&rows, &cols, &layout, &EngineConfig::production());
        for cell in &layout {
            let mc = cells.get(cell.id.as_str()).unwrap();
            if cell.by.is_some_and(|by| by > mc.h + 5.0) {
                prop_assert_eq!(mc.by, mc.y + mc.h);
            }
            if cell.bx.is_some_and(|bx| bx > mc.w + 5.0) {
                prop_assert_eq!(mc.bx, mc.x + mc.w);
            }
        }
    }

    #[test]
    fn boundary_is_monotone_in_the_minimum_bound(
        (rows, cols, layout) in grid(),
        low in 0.0..600.0_f64,
        extra in 0.0..600.0_f64,
    ) {
        let config = EngineConfig::production();
        let rows = TrackSizes::new(&rows);
        let cols = TrackSizes::new(&cols);
        let first = layout.cells()[0].clone();
        let target = first.x + first.w - 2;

        let solve = |bx: f64| {
            let mut cells = layout.clone().into_cells();
            cells[0].bx = Some(bx);
            let layout = Layout::new(cells).unwrap();
            let matrix = build_occupancy(rows.as_slice(), cols.as_slice(), &layout);
            let measured = measure_cells(&rows, &cols, &layout, &config);
            let edge = measured.get(first.id.as_str()).unwrap().far_edge(Axis::Column);
            boundary_for(Axis::Column, target, edge, &matrix, &cols, &measured, &config)
        };

        prop_assert!(solve(low) <= solve(low + extra));
    }

    #[test]
    fn synthesis_is_idempotent((rows, cols, layout) in grid()) {
        let cells = measure(&rows, &cols, &layout, &EngineConfig::production());
        let once = synthesize(&cells);
        let twice = synthesize(&cells);
        prop_assert_eq!(&once, &twice);

        prop_assert_eq!(merge_segments(Axis::Row, once.row.clone()), once.row);
        prop_assert_eq!(merge_segments(Axis::Column, once.col.clone()), once.col);
    }

    #[test]
    fn transpose_is_an_involution(
        rows in 0_usize..6,
        cols in 0_usize..6,
        fills in prop::collection::vec((0_usize..7, 0_usize..7, 0_usize..4, 0_usize..4, any::<u8>()), 0..8),
    ) {
        let mut matrix = KeyMatrix::new(rows, cols);
        for (r, c, h, w, key) in fills {
            matrix.fill(r..r + h, c..c + w, &key);
        }
        let transposed = matrix.transpose();
        prop_assert_eq!(transposed.rows(), cols);
        prop_assert_eq!(transposed.cols(), rows);
        prop_assert_eq!(transposed.transpose(), matrix);
    }
}
