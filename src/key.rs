//! The unsigned integer key types this crate can index.
//!
//! The algorithm only needs a small capability set from a key type: ordering,
//! a fixed bit width, and a way to widen it to `u64` for shift and
//! interpolation arithmetic. We expose that set as a sealed trait so callers
//! cannot implement it for their own types (the interpolation arithmetic in
//! [`crate::radix_spline`] assumes the widened value fits in 64 bits, which
//! only holds for the two integer widths named in the crate's scope).

mod private {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned integer key, 32 or 64 bits wide.
pub trait Key: Copy + Ord + std::fmt::Debug + private::Sealed {
    /// Bit width of the key type.
    const BITS: u32;

    /// Widen `self` to `u64`, the width used for all shift and
    /// interpolation arithmetic regardless of the source type.
    fn to_u64(self) -> u64;
}

impl Key for u32 {
    const BITS: u32 = 32;

    fn to_u64(self) -> u64 {
        self as u64
    }
}

impl Key for u64 {
    const BITS: u32 = 64;

    fn to_u64(self) -> u64 {
        self
    }
}

/// Number of low-order bits of a shifted key discarded when computing a
/// radix prefix, given the numeric span `diff = max_key - min_key`.
///
/// Adapted from the shift-bits computation in `ChenZhongPu-RadixSpline` and
/// `JulianKnodt-radix_spline_rs`: the radix directory is sized to the actual
/// numeric span of the keys, not to a fixed `2^num_radix_bits`, so a small
/// key range never allocates an oversized table.
pub(crate) fn shift_bits_for(diff: u64, num_radix_bits: u32, key_bits: u32) -> u32 {
    if diff == 0 {
        return 0;
    }
    let effective_radix_bits = num_radix_bits.min(key_bits);
    let diff_bits = 64 - diff.leading_zeros();
    diff_bits.saturating_sub(effective_radix_bits)
}
