//! # Radix spline: the finalized, immutable query structure
//!
//! Produced by [`crate::Builder::finalize`]. Holds the spline-point
//! sequence and the radix directory and exposes the query operations:
//! [`RadixSpline::estimated_position`] and [`RadixSpline::search_bound`].
//! Plain data, `Send + Sync` automatically, safe for concurrent reads from
//! any number of threads with no interior mutability.

use crate::key::Key;
use crate::spline_corridor::SplinePoint;

/// An immutable, read-only learned index over a sorted key array.
///
/// `RadixSpline` does not own or borrow the caller's key array (it only
/// ever hands back index ranges for the caller to binary-search within).
pub struct RadixSpline<K: Key> {
    min_key: K,
    max_key: K,
    num_keys: u32,
    max_error: u32,
    shift_bits: u32,
    spline_points: Vec<SplinePoint<K>>,
    table: Vec<u32>,
}

impl<K: Key> RadixSpline<K> {
    pub(crate) fn from_parts(
        min_key: K,
        max_key: K,
        num_keys: u32,
        max_error: u32,
        shift_bits: u32,
        spline_points: Vec<SplinePoint<K>>,
        table: Vec<u32>,
    ) -> Self {
        RadixSpline {
            min_key,
            max_key,
            num_keys,
            max_error,
            shift_bits,
            spline_points,
            table,
        }
    }

    /// Number of keys (including duplicates) the index was built over.
    pub fn num_keys(&self) -> u32 {
        self.num_keys
    }

    /// The half-open `[lo, hi)` range of spline-point indices whose shifted
    /// keys straddle `key`'s prefix bucket, per the radix directory. One
    /// extra spline point past the neighbor boundary is included because a
    /// spline segment can span more than one radix bucket.
    fn segment_range(&self, key: K) -> (usize, usize) {
        let diff = key.to_u64() - self.min_key.to_u64();
        let prefix = (diff >> self.shift_bits) as usize;
        let lo = self.table[prefix] as usize;
        let hi = (self.table[prefix + 1] as usize + 1).min(self.spline_points.len());
        (lo, hi)
    }

    /// Index of the first spline point whose key is `> key`, searched
    /// within the radix-narrowed `[lo, hi)` slice.
    fn spline_segment(&self, key: K) -> usize {
        let (lo, hi) = self.segment_range(key);
        let slice = &self.spline_points[lo..hi];
        lo + slice.partition_point(|p| p.key <= key)
    }

    /// Estimated position of `key` in the sorted key array, clamped to
    /// `[0, num_keys - 1]`.
    pub fn estimated_position(&self, key: K) -> u32 {
        if self.num_keys == 0 {
            return 0;
        }
        if key <= self.min_key {
            return 0;
        }
        if key >= self.max_key {
            return self.num_keys - 1;
        }

        if self.spline_points.len() < 2 {
            // A single distinct key: no segment to interpolate against, even
            // though min_key/max_key may still span a wider range.
            return self.spline_points[0].position.min(self.num_keys - 1);
        }
        let idx = self.spline_segment(key).clamp(1, self.spline_points.len() - 1);
        let lo = &self.spline_points[idx - 1];
        let hi = &self.spline_points[idx];

        interpolate(key, lo, hi).min(self.num_keys - 1)
    }

    /// Half-open `[begin, end)` range in the sorted key array guaranteed to
    /// contain `key` if it is present.
    pub fn search_bound(&self, key: K) -> (u32, u32) {
        if self.num_keys == 0 {
            return (0, 0);
        }
        let predicted = self.estimated_position(key);
        let begin = predicted.saturating_sub(self.max_error);
        let end = predicted
            .saturating_add(self.max_error)
            .saturating_add(1)
            .min(self.num_keys);
        (begin, end)
    }

    /// Exact in-memory footprint: header plus the two owned arrays.
    pub fn size_in_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.table.len() * std::mem::size_of::<u32>()
            + self.spline_points.len() * std::mem::size_of::<SplinePoint<K>>()
    }
}

/// Linear interpolation between two spline points, using widened 64/128-bit
/// intermediates so 64-bit keys never overflow, and rounding to the nearest
/// integer rather than truncating.
fn interpolate<K: Key>(key: K, lo: &SplinePoint<K>, hi: &SplinePoint<K>) -> u32 {
    let lo_key = lo.key.to_u64();
    let hi_key = hi.key.to_u64();
    if hi_key == lo_key {
        return lo.position;
    }

    let key_diff = (key.to_u64() - lo_key) as u128;
    let pos_diff = (hi.position - lo.position) as u128;
    let key_span = (hi_key - lo_key) as u128;

    let numerator = key_diff * pos_diff;
    let rounded = (numerator + key_span / 2) / key_span;
    lo.position + rounded as u32
}
