// Copyright 2025 the Resizable Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track sizes with prefix sums.

use alloc::sync::Arc;
use alloc::vec::Vec;

/// Returns the sum of `sizes`, accumulated left to right.
#[must_use]
pub fn track_sum(sizes: &[f64]) -> f64 {
    sizes.iter().fold(0.0, |acc, size| acc + size)
}

/// An immutable sequence of track sizes with cached start offsets.
///
/// The sizes are shared behind an [`Arc`]; resizing a track produces a new
/// `TrackSizes` and leaves every existing one untouched, so geometry read from
/// an earlier value stays valid.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackSizes {
    sizes: Arc<[f64]>,
    // `starts[i]` is the sum of `sizes[..i]`; one entry longer than `sizes`.
    starts: Vec<f64>,
}

impl TrackSizes {
    /// Creates a track sequence. Negative sizes are clamped to `0.0`.
    #[must_use]
    pub fn new(sizes: &[f64]) -> Self {
        let sizes: Arc<[f64]> = sizes.iter().map(|&size| sanitize(size)).collect();
        Self::from_shared(sizes)
    }

    fn from_shared(sizes: Arc<[f64]>) -> Self {
        let mut starts = Vec::with_capacity(sizes.len() + 1);
        let mut pos = 0.0;
        starts.push(pos);
        for size in sizes.iter() {
            pos += size;
            starts.push(pos);
        }
        Self { sizes, starts }
    }

    /// Number of tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` if there are no tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The sizes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.sizes
    }

    /// A shared handle to the sizes.
    #[must_use]
    pub fn shared(&self) -> Arc<[f64]> {
        Arc::clone(&self.sizes)
    }

    /// Size of track `index`, or `0.0` past the end.
    #[must_use]
    pub fn size_of(&self, index: usize) -> f64 {
        self.sizes.get(index).copied().unwrap_or(0.0)
    }

    /// Sum of the first `count` tracks; `count` is clamped to `len()`.
    #[must_use]
    pub fn offset_of(&self, count: usize) -> f64 {
        self.starts[count.min(self.sizes.len())]
    }

    /// Sum of `len` tracks starting at `start`, both clamped to the sequence.
    ///
    /// The tracks are summed directly, not as a difference of offsets, so the
    /// result is exactly what adding up that slice gives.
    #[must_use]
    pub fn span(&self, start: usize, len: usize) -> f64 {
        let start = start.min(self.sizes.len());
        let end = start.saturating_add(len).min(self.sizes.len());
        track_sum(&self.sizes[start..end])
    }

    /// Sum of all tracks.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.offset_of(self.sizes.len())
    }

    /// Returns a new sequence with track `index` set to `size`.
    ///
    /// Out-of-range indices return an unchanged copy.
    #[must_use]
    pub fn with_size(&self, index: usize, size: f64) -> Self {
        if index >= self.sizes.len() {
            return self.clone();
        }
        let mut sizes: Vec<f64> = self.sizes.to_vec();
        sizes[index] = sanitize(size);
        Self::from_shared(sizes.into())
    }
}

impl Default for TrackSizes {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl From<&[f64]> for TrackSizes {
    fn from(sizes: &[f64]) -> Self {
        Self::new(sizes)
    }
}

fn sanitize(size: f64) -> f64 {
    // Sizes are expected to be finite. Catch NaNs (and infinities) in debug
    // builds so misuse does not go unnoticed.
    debug_assert!(size.is_finite(), "track sizes must be finite; got {size:?}");
    if size.is_sign_negative() { 0.0 } else { size }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_prefix_sums() {
        let tracks = TrackSizes::new(&[10.0, 20.0, 30.0]);
        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks.offset_of(0), 0.0);
        assert_eq!(tracks.offset_of(1), 10.0);
        assert_eq!(tracks.offset_of(2), 30.0);
        assert_eq!(tracks.total(), 60.0);
        // Clamped past the end.
        assert_eq!(tracks.offset_of(10), 60.0);
    }

    #[test]
    fn spans_clamp_to_the_sequence() {
        let tracks = TrackSizes::new(&[10.0, 20.0, 30.0]);
        assert_eq!(tracks.span(1, 2), 50.0);
        assert_eq!(tracks.span(2, 5), 30.0);
        assert_eq!(tracks.span(5, 1), 0.0);
        assert_eq!(tracks.span(0, 0), 0.0);
    }

    #[test]
    fn resizing_leaves_earlier_tracks_untouched() {
        let before = TrackSizes::new(&[100.0, 100.0]);
        let shared = before.shared();

        let after = before.with_size(1, 150.0);
        assert_eq!(after.as_slice(), &[100.0, 150.0]);
        assert_eq!(after.total(), 250.0);
        assert_eq!(before.as_slice(), &[100.0, 100.0]);
        assert_eq!(&*shared, &[100.0, 100.0]);

        assert_eq!(before.with_size(9, 1.0), before);
    }

    #[test]
    fn negative_sizes_are_clamped_to_zero() {
        let tracks = TrackSizes::new(&[-5.0, 10.0]);
        assert_eq!(tracks.size_of(0), 0.0);
        assert_eq!(tracks.with_size(1, -1.0).size_of(1), 0.0);
        assert_eq!(track_sum(&[1.5, 2.5]), 4.0);
    }
}
