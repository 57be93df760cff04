//! Precondition violations raised while building a [`crate::Builder`].
//!
//! Both variants are local, programmatic failures: the crate never retries
//! and never falls back, it simply rejects the offending call.

/// Error returned by [`crate::Builder::add_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SplineError {
    /// `add_key` was called with a key outside `[min_key, max_key]`.
    #[error("key {key} is out of range [{min}, {max}]")]
    OutOfRange { key: u64, min: u64, max: u64 },

    /// `add_key` was called with a key less than the previously added key.
    #[error("key {key} is less than the previously added key {previous}")]
    InvalidOrder { key: u64, previous: u64 },
}
