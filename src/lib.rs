//! A compact, static, read-only learned index over sorted unsigned integer
//! keys: the *Radix Spline*.
//!
//! Build once with [`Builder`], query the finalized, immutable
//! [`RadixSpline`] from any number of threads. The index does not store
//! values and does not own the caller's key array: it only narrows a
//! `[begin, end)` range the caller then binary-searches.
//!
//! ```
//! use radix_spline::Builder;
//!
//! let keys: Vec<u64> = (0..1000).collect();
//! let mut builder = Builder::new(keys[0], *keys.last().unwrap(), 18, 32);
//! for &k in &keys {
//!     builder.add_key(k).unwrap();
//! }
//! let rs = builder.finalize();
//!
//! let (begin, end) = rs.search_bound(500);
//! assert!(keys[begin as usize..end as usize].contains(&500));
//! ```

mod builder;
mod error;
mod key;
mod radix;
mod radix_spline;
mod spline_corridor;

pub use builder::{Builder, DEFAULT_MAX_ERROR, DEFAULT_NUM_RADIX_BITS};
pub use error::SplineError;
pub use key::Key;
pub use radix_spline::RadixSpline;
