// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout extraction from host-provided child metadata.
//!
//! Hosts describe their children as a keyed list where each child may carry a
//! raw, untyped grid descriptor (for example `{"x": 1, "y": 1, "w": 2, "h": 1}`).
//! [`extract_layout`] validates those descriptors into a [`Layout`]:
//!
//! - children without a key are skipped;
//! - keyed children without metadata are dropped and reported as
//!   [`Diagnostic::MissingCellMetadata`];
//! - `x`, `y`, `w`, and `h` must be numbers or extraction fails;
//! - `bx` and `by` are read when they are numbers and treated as absent otherwise.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;

use serde_json::Value;

use crate::diagnostics::report;
use crate::{CellId, Diagnostic, EngineConfig, GridCell, Layout, LayoutError};

const CHILDREN_CONTEXT: &str = "ResizableGrid.children";

/// A host child: an optional stable key and optional raw grid metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Child<K> {
    /// Stable key; becomes the cell id.
    pub key: Option<K>,
    /// Raw grid descriptor.
    pub grid: Option<Value>,
}

impl<K> Child<K> {
    /// A keyed child with grid metadata.
    pub fn new(key: K, grid: Value) -> Self {
        Self {
            key: Some(key),
            grid: Some(grid),
        }
    }

    /// A keyed child that is not part of the grid.
    pub fn without_grid(key: K) -> Self {
        Self {
            key: Some(key),
            grid: None,
        }
    }
}

/// The result of [`extract_layout`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extraction {
    /// The validated layout.
    pub layout: Layout,
    /// Children that were dropped, in development mode.
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds a [`Layout`] from a list of host children.
///
/// Each cell's id is its child's key converted to a string.
pub fn extract_layout<K: Display>(
    children: &[Child<K>],
    config: &EngineConfig,
) -> Result<Extraction, LayoutError> {
    let mut cells = Vec::with_capacity(children.len());
    let mut diagnostics = Vec::new();

    for (index, child) in children.iter().enumerate() {
        let Some(key) = &child.key else {
            continue;
        };
        let key = key.to_string();
        match &child.grid {
            Some(grid) => {
                cells.push(parse_cell(grid, CellId::from(key), CHILDREN_CONTEXT, index)?);
            }
            None => report(
                config,
                &mut diagnostics,
                Diagnostic::MissingCellMetadata { index, key },
            ),
        }
    }

    Ok(Extraction {
        layout: Layout::new(cells)?,
        diagnostics,
    })
}

/// Checks that every descriptor has numeric `x`, `y`, `w`, and `h`.
///
/// Errors name the entry as `{context}[{index + index_offset}]`.
pub fn validate_layout(
    descriptors: &[Value],
    context: &str,
    index_offset: usize,
) -> Result<(), LayoutError> {
    for (i, descriptor) in descriptors.iter().enumerate() {
        let index = i + index_offset;
        for field in REQUIRED_FIELDS {
            track_coordinate(descriptor, field, context, index)?;
        }
    }
    Ok(())
}

/// Parses one raw descriptor into a [`GridCell`].
pub fn parse_cell(
    descriptor: &Value,
    id: CellId,
    context: &str,
    index: usize,
) -> Result<GridCell, LayoutError> {
    let [x, y, w, h] = [
        track_coordinate(descriptor, "x", context, index)?,
        track_coordinate(descriptor, "y", context, index)?,
        track_coordinate(descriptor, "w", context, index)?,
        track_coordinate(descriptor, "h", context, index)?,
    ];
    Ok(GridCell {
        id,
        x,
        y,
        w,
        h,
        bx: descriptor.get("bx").and_then(Value::as_f64),
        by: descriptor.get("by").and_then(Value::as_f64),
    })
}

const REQUIRED_FIELDS: [&str; 4] = ["x", "y", "w", "h"];

fn track_coordinate(
    descriptor: &Value,
    field: &'static str,
    context: &str,
    index: usize,
) -> Result<usize, LayoutError> {
    let Some(Value::Number(number)) = descriptor.get(field) else {
        return Err(LayoutError::NotANumber {
            context: String::from(context),
            index,
            field,
        });
    };
    if let Some(value) = number.as_u64() {
        if let Ok(value) = u32::try_from(value) {
            return Ok(value as usize);
        }
    }
    let value = number.as_f64().unwrap_or(f64::NAN);
    integral(value).ok_or_else(|| LayoutError::InvalidTrackCoordinate {
        context: String::from(context),
        index,
        field,
        value,
    })
}

/// Accepts floats such as `2.0` that carry an integral, in-range value.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the round trip below rejects any value the cast would change"
)]
fn integral(value: f64) -> Option<usize> {
    if !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return None;
    }
    let truncated = value as usize;
    (truncated as f64 == value).then_some(truncated)
}
