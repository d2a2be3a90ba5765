// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-fatal diagnostics.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{Axis, CellId, EngineConfig};

/// A recoverable problem noticed while extracting or measuring a layout.
///
/// Diagnostics never stop processing. In development mode they are logged
/// through the [`log`] facade and also collected for the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// A keyed child carried no grid metadata and was left out of the layout.
    MissingCellMetadata {
        /// Position of the child.
        index: usize,
        /// The child's key.
        key: String,
    },
    /// A minimum bound was larger than its cell and got clamped to the cell's far edge.
    BoundExceedsSize {
        /// Position of the cell in the layout.
        index: usize,
        /// The cell's id.
        id: CellId,
        /// `Row` for `by` (height), `Column` for `bx` (width).
        axis: Axis,
        /// The configured bound.
        requested: f64,
        /// The cell's measured size on that axis.
        current: f64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCellMetadata { index, key } => write!(
                f,
                "ResizableGrid: ResizableGrid.children[{index}] (key = {key}) has no \
                 layout cell associated with it and will not be rendered."
            ),
            Self::BoundExceedsSize {
                index,
                id,
                axis,
                requested,
                current,
            } => {
                let (field, dimension) = match axis {
                    Axis::Row => ("by", "height"),
                    Axis::Column => ("bx", "width"),
                };
                write!(
                    f,
                    "ResizableGrid: ResizableGrid.children[{index}].{field} (key = {id}) was set to \
                     a value higher than its current {dimension} ({requested} > {current}). This will \
                     only take effect once the cell's {dimension} has reached this value and should \
                     be avoided!"
                )
            }
        }
    }
}

/// Logs `diagnostic` and appends it to `sink` if the configuration asks for diagnostics.
pub(crate) fn report(config: &EngineConfig, sink: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    if !config.diagnostics_enabled() {
        return;
    }
    log::warn!("{diagnostic}");
    sink.push(diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn production_swallows_diagnostics() {
        let mut sink = Vec::new();
        let diagnostic = Diagnostic::MissingCellMetadata {
            index: 2,
            key: "side".into(),
        };
        report(&EngineConfig::production(), &mut sink, diagnostic.clone());
        assert!(sink.is_empty());

        report(&EngineConfig::development(), &mut sink, diagnostic.clone());
        assert_eq!(sink, [diagnostic]);
    }

    #[test]
    fn messages_name_the_field() {
        let message = Diagnostic::BoundExceedsSize {
            index: 1,
            id: CellId::from("b"),
            axis: Axis::Column,
            requested: 200.0,
            current: 100.0,
        }
        .to_string();
        assert!(message.contains("children[1].bx"));
        assert!(message.contains("width (200 > 100)"));
    }
}
