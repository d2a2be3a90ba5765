// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios through the public API.

use kurbo::Point;
use resizable_grid::{
    Axis, Child, Diagnostic, EngineConfig, GridCell, Layout, LayoutError, NoopHandler,
    ResizableGrid, ResizeHandler, ResizeOutcome, ResizeResponse, Segment, TrackSizes,
    boundary_for, build_occupancy, measure, measure_cells, merge_segments, synthesize,
};
use serde_json::json;

fn side_by_side(a_bx: Option<f64>) -> Layout {
    Layout::new(vec![
        GridCell::new("a", 1, 1, 1, 1).with_bounds(a_bx, None),
        GridCell::new("b", 2, 1, 1, 1),
    ])
    .unwrap()
}

#[test]
fn two_cells_measure_and_share_one_column_separator() {
    let cells = measure(
        &[100.0, 100.0],
        &[100.0, 100.0],
        &side_by_side(None),
        &EngineConfig::default(),
    );
    let a = cells.get("a").unwrap();
    let b = cells.get("b").unwrap();
    assert_eq!((a.x, a.y, a.w, a.h), (0.0, 0.0, 100.0, 100.0));
    assert_eq!((b.x, b.y, b.w, b.h), (100.0, 0.0, 100.0, 100.0));

    let separators = synthesize(&cells);
    let first = separators.col[0];
    assert_eq!((first.index, first.size), (0, 100.0));
}

#[test]
fn minimum_width_holds_the_column_boundary() {
    let config = EngineConfig::default();
    let rows = TrackSizes::new(&[100.0, 100.0]);
    let cols = TrackSizes::new(&[100.0, 100.0]);
    let layout = side_by_side(Some(80.0));
    let matrix = build_occupancy(rows.as_slice(), cols.as_slice(), &layout);
    let cells = measure_cells(&rows, &cols, &layout, &config);

    let boundary = boundary_for(Axis::Column, 0, 100.0, &matrix, &cols, &cells, &config);
    assert!(boundary >= 10.0);
    assert_eq!(boundary, 80.0);

    // Dragging 30px left from 100 is held at 80.
    let mut grid = ResizableGrid::new(
        rows.as_slice(),
        cols.as_slice(),
        layout,
        config,
        NoopHandler,
    );
    let separator = grid.separators().col[0];
    grid.pointer_down(None, Axis::Column, &separator, Point::new(100.0, 10.0));
    grid.pointer_move(None, Point::new(70.0, 10.0));
    grid.pointer_up(None);
    assert_eq!(grid.cols().as_slice(), &[80.0, 100.0]);
}

#[test]
fn touching_row_segments_merge_and_gaps_do_not() {
    let segment = |x: f64| Segment {
        index: 0,
        size: 50.0,
        x,
        y: 100.0,
        bounds: 0.0,
    };

    let merged = merge_segments(Axis::Row, vec![segment(0.0), segment(50.0)]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].size, 100.0);

    let apart = merge_segments(Axis::Row, vec![segment(0.0), segment(75.0)]);
    assert_eq!(apart.len(), 2);
}

#[test]
fn spanning_cell_splits_the_row_line() {
    // +---+---+---+
    // | a | b |   |
    // +===+===+ c |
    // | d | e |   |
    // +---+---+---+
    let layout = Layout::new(vec![
        GridCell::new("a", 1, 1, 1, 1),
        GridCell::new("b", 2, 1, 1, 1),
        GridCell::new("c", 3, 1, 1, 2),
        GridCell::new("d", 1, 2, 1, 1),
        GridCell::new("e", 2, 2, 1, 1),
    ])
    .unwrap();
    let cells = measure(&[50.0, 50.0], &[100.0; 3], &layout, &EngineConfig::default());
    let separators = synthesize(&cells);

    let lines: Vec<_> = separators.row.iter().map(|s| (s.index, s.x, s.y, s.size)).collect();
    assert_eq!(lines, [(0, 0.0, 50.0, 200.0), (1, 0.0, 100.0, 300.0)]);
}

#[derive(Default)]
struct HostTracks {
    cols: Vec<f64>,
    overrides: usize,
    finished: Vec<(Axis, usize, f64)>,
}

impl ResizeHandler for HostTracks {
    fn resize(&mut self, axis: Axis, index: usize, new_size: f64) -> ResizeResponse {
        if axis == Axis::Column {
            self.cols[index] = new_size;
            self.overrides += 1;
            return ResizeResponse::Override;
        }
        ResizeResponse::Accept
    }

    fn after_resize(&mut self, axis: Axis, index: usize, size: f64) {
        self.finished.push((axis, index, size));
    }
}

#[test]
fn host_override_round_trip() {
    let mut host = HostTracks {
        cols: vec![100.0, 100.0],
        ..HostTracks::default()
    };
    let mut grid = ResizableGrid::new(
        &[100.0],
        &host.cols.clone(),
        side_by_side(None),
        EngineConfig::production(),
        &mut host,
    );

    grid.begin_resize(Axis::Column, 0, 100.0);
    assert_eq!(grid.resize_by(Axis::Column, 0, 25.0), ResizeOutcome::Overridden);
    assert!(grid.external_override_pending());
    assert_eq!(grid.cols().as_slice(), &[100.0, 100.0]);
    assert_eq!(grid.end_resize(Axis::Column, 0), Some(100.0));
    assert_eq!(grid.end_resize(Axis::Column, 0), None);

    let cols = grid.handler().cols.clone();
    let layout = grid.layout().clone();
    let changes = grid.update(&[100.0], &cols, &layout);
    assert!(changes.cols_changed);
    assert!(!grid.external_override_pending());
    assert_eq!(grid.measured_cells().get("b").unwrap().x, 125.0);

    drop(grid);
    assert_eq!(host.overrides, 1);
    assert_eq!(host.finished, [(Axis::Column, 0, 100.0)]);
}

#[test]
fn snapshot_is_isolated_from_resizes() {
    let mut grid = ResizableGrid::new(
        &[100.0, 100.0],
        &[100.0, 100.0],
        side_by_side(None),
        EngineConfig::production(),
        NoopHandler,
    );
    let snapshot = grid.snapshot();

    let separator = grid.separators().row[0];
    grid.pointer_down(None, Axis::Row, &separator, Point::new(50.0, 100.0));
    assert_eq!(
        grid.pointer_move(None, Point::new(50.0, 140.0)),
        Some(ResizeOutcome::Applied { size: 140.0 })
    );
    assert_eq!(grid.pointer_up(None), Some(140.0));

    assert_eq!(&*snapshot.rows, &[100.0, 100.0]);
    assert_eq!(snapshot.cells.get("a").unwrap().h, 100.0);
    assert_eq!(snapshot.separators.row[0].y, 100.0);
    assert_eq!(grid.measured_cells().get("a").unwrap().h, 140.0);
    assert_eq!(grid.content_size().height, 240.0);
}

#[test]
fn children_extraction_feeds_the_controller() {
    let children = vec![
        Child::new("chart", json!({ "x": 1, "y": 1, "w": 2, "h": 1, "by": 60 })),
        Child::new("table", json!({ "x": 1, "y": 2, "w": 1, "h": 1 })),
        Child::without_grid("tooltip"),
    ];
    let grid = ResizableGrid::from_children(
        &[100.0, 100.0],
        &[150.0, 150.0],
        &children,
        EngineConfig::development(),
        NoopHandler,
    )
    .unwrap();

    let chart = grid.measured_cells().get("chart").unwrap();
    assert_eq!((chart.w, chart.by), (300.0, 60.0));
    assert!(grid.measured_cells().get("tooltip").is_none());

    let diagnostics: Vec<_> = grid.diagnostics().collect();
    assert!(matches!(
        diagnostics.as_slice(),
        [Diagnostic::MissingCellMetadata { index: 2, .. }]
    ));

    let broken = vec![Child::new("chart", json!({ "x": 1, "y": null, "w": 2, "h": 1 }))];
    let err = ResizableGrid::from_children(
        &[100.0],
        &[100.0],
        &broken,
        EngineConfig::production(),
        NoopHandler,
    )
    .unwrap_err();
    assert_eq!(
        err,
        LayoutError::NotANumber {
            context: "ResizableGrid.children".into(),
            index: 0,
            field: "y",
        }
    );
}
