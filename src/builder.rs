//! # Builder
//!
//! Accepts keys one at a time, in non-decreasing order, and incrementally
//! builds the spline-point sequence (via [`crate::spline_corridor::Corridor`])
//! and the radix directory (via [`crate::radix::RadixTable`]) in a single
//! pass. `finalize` consumes the builder by value and returns an immutable
//! [`crate::RadixSpline`], and there is no way to call `add_key` again
//! afterwards, so the Open/Finalized state split in the specification is
//! enforced by the type system rather than by a runtime flag.

use crate::error::SplineError;
use crate::key::Key;
use crate::radix::RadixTable;
use crate::radix_spline::RadixSpline;
use crate::spline_corridor::{Corridor, SplinePoint};

/// Default radix directory width, in bits of the shifted key prefix.
pub const DEFAULT_NUM_RADIX_BITS: u32 = 18;
/// Default per-segment position-error bound.
pub const DEFAULT_MAX_ERROR: u32 = 32;

/// Builds a [`RadixSpline`] from a stream of non-decreasing keys.
pub struct Builder<K: Key> {
    min_key: K,
    max_key: K,
    max_error: u32,
    table: RadixTable,
    corridor: Corridor<K>,
    spline_points: Vec<SplinePoint<K>>,
    prev_key: Option<K>,
    next_position: u32,
}

impl<K: Key> Builder<K> {
    /// Creates a builder for keys known in advance to lie in
    /// `[min_key, max_key]`. `num_radix_bits` sizes the radix directory (see
    /// the crate-level docs); `max_error` bounds the position error of every
    /// spline segment.
    pub fn new(min_key: K, max_key: K, num_radix_bits: u32, max_error: u32) -> Self {
        assert!(min_key <= max_key, "min_key must not exceed max_key");
        let diff = max_key.to_u64() - min_key.to_u64();
        let table = RadixTable::new(diff, num_radix_bits, K::BITS);
        Builder {
            min_key,
            max_key,
            max_error,
            table,
            corridor: Corridor::new(max_error),
            spline_points: Vec::new(),
            prev_key: None,
            next_position: 0,
        }
    }

    /// Convenience constructor using the defaults named in the crate's
    /// configuration table: 18 radix bits, max error 32.
    pub fn default_for(min_key: K, max_key: K) -> Self {
        Builder::new(min_key, max_key, DEFAULT_NUM_RADIX_BITS, DEFAULT_MAX_ERROR)
    }

    /// Adds the next key in the sorted key array. Keys must be supplied in
    /// non-decreasing order and must lie within `[min_key, max_key]`.
    pub fn add_key(&mut self, key: K) -> Result<(), SplineError> {
        if key < self.min_key || key > self.max_key {
            return Err(SplineError::OutOfRange {
                key: key.to_u64(),
                min: self.min_key.to_u64(),
                max: self.max_key.to_u64(),
            });
        }
        if let Some(prev) = self.prev_key {
            if key < prev {
                return Err(SplineError::InvalidOrder {
                    key: key.to_u64(),
                    previous: prev.to_u64(),
                });
            }
        }

        let position = self.next_position;
        self.next_position += 1;

        if self.prev_key == Some(key) {
            // Duplicate: already covered by the spline point placed at this
            // key's first occurrence.
            return Ok(());
        }
        self.prev_key = Some(key);

        if let Some(point) = self.corridor.push(key, position) {
            self.emit(point);
        }
        Ok(())
    }

    fn emit(&mut self, point: SplinePoint<K>) {
        let prefix = self.table.prefix_of(point.key.to_u64() - self.min_key.to_u64());
        self.spline_points.push(point);
        let idx = (self.spline_points.len() - 1) as u32;
        self.table.advance(prefix, idx);
        log::trace!(
            "emitted spline point #{idx}: key={:?} position={}",
            point.key,
            point.position
        );
    }

    /// Closes the builder and returns the immutable query structure.
    pub fn finalize(mut self) -> RadixSpline<K> {
        if let Some(last) = self.corridor.finish() {
            if self.spline_points.last().map(|p| p.key) != Some(last.key) {
                let prefix = self.table.prefix_of(last.key.to_u64() - self.min_key.to_u64());
                self.spline_points.push(last);
                let idx = (self.spline_points.len() - 1) as u32;
                self.table.advance(prefix, idx);
            }
        }

        let num_keys = self.next_position;
        let shift_bits = self.table.shift_bits();
        let table = self.table.finish(self.spline_points.len() as u32);

        log::debug!(
            "finalized radix spline: {num_keys} keys, {} spline points, {} radix entries",
            self.spline_points.len(),
            table.len()
        );

        RadixSpline::from_parts(
            self.min_key,
            self.max_key,
            num_keys,
            self.max_error,
            shift_bits,
            self.spline_points,
            table,
        )
    }
}
