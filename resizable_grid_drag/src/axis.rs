// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize axes.

use kurbo::Point;

/// The kind of track a separator resizes.
///
/// A row separator is a horizontal line dragged vertically; a column separator
/// is a vertical line dragged horizontally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Resizes a row; the handle travels along `y`.
    Row,
    /// Resizes a column; the handle travels along `x`.
    Column,
}

impl Axis {
    /// Returns the coordinate of `point` along the drag direction.
    #[inline]
    #[must_use]
    pub const fn project(self, point: Point) -> f64 {
        match self {
            Self::Row => point.y,
            Self::Column => point.x,
        }
    }

    /// Returns the other axis.
    #[inline]
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}
