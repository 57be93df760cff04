//! # Greedy Spline Corridor
//!
//! Neumann, Thomas, and Sebastian Michel. "Smooth interpolating histograms
//! with error guarantees." British National Conference on Databases.
//! Springer, Berlin, Heidelberg, 2008.
//!
//! Consumes `(key, position)` pairs one at a time, in non-decreasing key
//! order, and decides when the running corridor of admissible slopes has
//! collapsed, at which point the previous input point must be promoted to a
//! spline point. The corridor itself is the cone of lines from the last
//! emitted spline point that keep every point seen since within `max_error`.
//!
//! Orientation is tested with an integer-friendly cross product (as in
//! `JulianKnodt-radix_spline_rs`) rather than by comparing slopes directly
//! (as the teacher's `common.rs::Line::get_direction` does): slope division
//! degenerates whenever two points share a key, which is exactly the
//! duplicate-key case this module has to handle cleanly.

use crate::key::Key;

/// A spline anchor: `(key, position)`, where `position` is the index of
/// `key`'s first occurrence in the sorted key array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SplinePoint<K: Key> {
    pub key: K,
    pub position: u32,
}

#[derive(Clone, Copy, Debug)]
struct Coord {
    x: u64,
    y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Clockwise,
    CounterClockwise,
    Linear,
}

/// Cross product of `(dx1, dy1)` and `(dx2, dy2)`, signed.
fn orient(dx1: f64, dy1: f64, dx2: f64, dy2: f64) -> Orientation {
    let cross = dy1 * dx2 - dy2 * dx1;
    if cross > f64::EPSILON {
        Orientation::Clockwise
    } else if cross < -f64::EPSILON {
        Orientation::CounterClockwise
    } else {
        Orientation::Linear
    }
}

/// Streaming state for the greedy corridor fit. Owned by [`crate::Builder`];
/// fed one distinct key at a time via [`Corridor::push`].
pub(crate) struct Corridor<K: Key> {
    max_error: f64,

    /// Geometry of the last emitted spline point (the corridor's base).
    base: Coord,
    /// The most recently absorbed distinct input point, both as geometry
    /// (for orientation tests) and exact key/position (for emission).
    prev: Option<(Coord, K, u32)>,

    upper_limit: Coord,
    lower_limit: Coord,
}

impl<K: Key> Corridor<K> {
    pub fn new(max_error: u32) -> Self {
        Corridor {
            max_error: max_error as f64,
            base: Coord { x: 0, y: 0.0 },
            prev: None,
            upper_limit: Coord { x: 0, y: 0.0 },
            lower_limit: Coord { x: 0, y: 0.0 },
        }
    }

    /// Feed the next distinct key (with its position in the key stream).
    /// Keys must arrive in strictly increasing order; the caller
    /// (`Builder::add_key`) is responsible for filtering out duplicates and
    /// enforcing the non-decreasing precondition before calling this.
    ///
    /// Returns `Some(point)` when a new spline point must be emitted before
    /// this key is absorbed into the corridor.
    pub fn push(&mut self, key: K, position: u32) -> Option<SplinePoint<K>> {
        let x = key.to_u64();
        let y = position as f64;

        let Some((prev_coord, prev_key, prev_position)) = self.prev else {
            // First distinct key: it is itself the first spline point.
            self.base = Coord { x, y };
            self.prev = Some((Coord { x, y }, key, position));
            return Some(SplinePoint { key, position });
        };

        let upper_y = y + self.max_error;
        let lower_y = (y - self.max_error).max(0.0);

        // Second distinct key only seeds the corridor bounds; the corridor
        // test below needs a base, a prior bound, and a fresh candidate.
        if prev_coord.x == self.base.x {
            self.upper_limit = Coord { x, y: upper_y };
            self.lower_limit = Coord { x, y: lower_y };
            self.prev = Some((Coord { x, y }, key, position));
            return None;
        }

        let base = self.base;
        let upper_dx = (self.upper_limit.x - base.x) as f64;
        let upper_dy = self.upper_limit.y - base.y;
        let lower_dx = (self.lower_limit.x - base.x) as f64;
        let lower_dy = self.lower_limit.y - base.y;
        let dx = (x - base.x) as f64;
        let dy = y - base.y;

        let outside_upper = orient(upper_dx, upper_dy, dx, dy) != Orientation::Clockwise;
        let outside_lower = orient(lower_dx, lower_dy, dx, dy) != Orientation::CounterClockwise;

        let emitted = if outside_upper || outside_lower {
            let promoted = SplinePoint {
                key: prev_key,
                position: prev_position,
            };
            log::trace!("corridor closed before key {:?}, emitting {:?}", key, promoted.key);
            self.base = prev_coord;
            self.upper_limit = Coord { x, y: upper_y };
            self.lower_limit = Coord { x, y: lower_y };
            Some(promoted)
        } else {
            let upper_dy_candidate = upper_y - base.y;
            if orient(upper_dx, upper_dy, dx, upper_dy_candidate) == Orientation::Clockwise {
                self.upper_limit = Coord { x, y: upper_y };
            }
            let lower_dy_candidate = lower_y - base.y;
            if orient(lower_dx, lower_dy, dx, lower_dy_candidate)
                == Orientation::CounterClockwise
            {
                self.lower_limit = Coord { x, y: lower_y };
            }
            None
        };

        self.prev = Some((Coord { x, y }, key, position));
        emitted
    }

    /// Flush the last-seen input key as a final spline point. Returns
    /// `None` if no key was ever pushed.
    pub fn finish(self) -> Option<SplinePoint<K>> {
        self.prev
            .map(|(_, key, position)| SplinePoint { key, position })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fit(data: &[u64], max_error: u32) -> Vec<SplinePoint<u64>> {
        let mut corridor = Corridor::new(max_error);
        let mut points = vec![];
        let mut prev = None;
        for (i, &key) in data.iter().enumerate() {
            if prev == Some(key) {
                continue;
            }
            prev = Some(key);
            if let Some(p) = corridor.push(key, i as u32) {
                points.push(p);
            }
        }
        if let Some(last) = corridor.finish() {
            if points.last().map(|p| p.key) != Some(last.key) {
                points.push(last);
            }
        }
        points
    }

    #[test]
    fn spline_points() {
        let data: Vec<u64> = vec![3, 4, 8, 10, 19, 20];
        let points = fit(&data, 1);
        let keys: Vec<u64> = points.iter().map(|p| p.key).collect();
        assert_eq!(keys.first(), Some(&3));
        assert_eq!(keys.last(), Some(&20));
        assert!(keys.len() <= data.len());
    }

    #[test]
    fn spline_repeated_points() {
        let data: Vec<u64> = vec![3, 4, 8, 8, 10, 10, 19, 20];
        let points = fit(&data, 1);
        // at most one spline point per distinct key
        let distinct: std::collections::HashSet<u64> = data.iter().copied().collect();
        assert!(points.len() <= distinct.len());
        assert_eq!(points.first().unwrap().key, 3);
        assert_eq!(points.last().unwrap().key, 20);
    }

    #[test]
    fn single_distinct_key_emits_one_point() {
        let data: Vec<u64> = vec![5, 5, 5, 5, 5];
        let points = fit(&data, 0);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0], SplinePoint { key: 5, position: 0 });
    }

    #[test]
    fn max_error_zero_is_one_point_per_distinct_key() {
        let data: Vec<u64> = vec![1, 2, 3, 4, 5];
        let points = fit(&data, 0);
        assert_eq!(points.len(), data.len());
    }
}
