// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

/// Default slack, in pixels, before a minimum bound larger than its cell is clamped.
pub const DEFAULT_BOUND_TOLERANCE: f64 = 5.0;

/// Default smallest size, in pixels, a track can be dragged down to.
pub const DEFAULT_MIN_TRACK_SIZE: f64 = 10.0;

/// Deployment context of the engine.
///
/// Development builds report [`Diagnostic`](crate::Diagnostic)s for recoverable
/// problems; production builds stay silent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuildMode {
    /// Diagnostics are collected and logged.
    Development,
    /// Diagnostics are suppressed.
    Production,
}

impl Default for BuildMode {
    /// `Development` when debug assertions are enabled, `Production` otherwise.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

/// Configuration passed to the engine entry points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Whether diagnostics are reported.
    pub mode: BuildMode,
    /// How far a minimum bound may exceed its cell's current size before it is clamped.
    pub bound_tolerance: f64,
    /// Floor applied by the boundary solver so no track collapses completely.
    pub min_track_size: f64,
}

impl EngineConfig {
    /// Configuration with diagnostics enabled.
    #[must_use]
    pub fn development() -> Self {
        Self {
            mode: BuildMode::Development,
            ..Self::default()
        }
    }

    /// Configuration with diagnostics suppressed.
    #[must_use]
    pub fn production() -> Self {
        Self {
            mode: BuildMode::Production,
            ..Self::default()
        }
    }

    /// Returns `true` if diagnostics should be collected and logged.
    #[must_use]
    pub const fn diagnostics_enabled(&self) -> bool {
        matches!(self.mode, BuildMode::Development)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::default(),
            bound_tolerance: DEFAULT_BOUND_TOLERANCE,
            min_track_size: DEFAULT_MIN_TRACK_SIZE,
        }
    }
}
