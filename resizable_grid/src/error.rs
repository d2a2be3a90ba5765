// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout validation errors.

use alloc::string::String;

use crate::CellId;

/// A layout that cannot be turned into grid cells.
///
/// These are configuration errors: they are reported at extraction time and
/// are not expected to be recovered from by the engine itself.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A required field (`x`, `y`, `w`, or `h`) is missing or not a number.
    #[error("ResizableGrid: {context}[{index}].{field} must be a number!")]
    NotANumber {
        /// Name of the sequence being validated.
        context: String,
        /// Position of the offending entry.
        index: usize,
        /// The offending field.
        field: &'static str,
    },
    /// A track coordinate is a number, but not a non-negative integer.
    #[error("ResizableGrid: {context}[{index}].{field} must be a non-negative integer, got {value}")]
    InvalidTrackCoordinate {
        /// Name of the sequence being validated.
        context: String,
        /// Position of the offending entry.
        index: usize,
        /// The offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Two cells share the same id.
    #[error("ResizableGrid: duplicate cell id `{id}`")]
    DuplicateId {
        /// The repeated id.
        id: CellId,
    },
}
