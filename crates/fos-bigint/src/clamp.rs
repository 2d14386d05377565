//! Width clamping (`BigInt.asIntN` / `BigInt.asUintN`)
//!
//! Reduces a value modulo `2^width` and reads the result as an unsigned or
//! two's-complement signed `width`-bit integer. Written once over
//! [`TwosComplement`] so every integer encoding clamps the same way.

use crate::error::{BigIntError, MAX_BIT_LENGTH, check_width};

/// The primitive operations the clamp algorithm needs.
pub(crate) trait TwosComplement: Clone {
    fn zero() -> Self;

    fn is_zero(&self) -> bool;

    fn is_negative(&self) -> bool;

    /// Bit length of `|self|`
    fn magnitude_bits(&self) -> u64;

    /// `|self| mod 2^bits`
    fn low_magnitude_bits(&self, bits: u64) -> Self;

    /// `2^bits`
    fn pow2(bits: u64) -> Self;

    /// `self - other`
    fn minus(&self, other: &Self) -> Self;
}

/// `x mod 2^width`, in `[0, 2^width)`
pub(crate) fn as_uint_n<T: TwosComplement>(width: i64, x: &T) -> Result<T, BigIntError> {
    let width = check_width(width)?;
    if width == 0 {
        return Ok(T::zero());
    }
    if !x.is_negative() && x.magnitude_bits() <= width {
        return Ok(x.clone());
    }
    if width > MAX_BIT_LENGTH {
        return Err(BigIntError::ResultTooLarge);
    }
    Ok(wrap_unsigned(width, x))
}

/// `x mod 2^width`, in `[-2^(width-1), 2^(width-1))`
pub(crate) fn as_int_n<T: TwosComplement>(width: i64, x: &T) -> Result<T, BigIntError> {
    let width = check_width(width)?;
    if width == 0 {
        return Ok(T::zero());
    }
    if x.magnitude_bits() < width {
        return Ok(x.clone());
    }
    // |x| has at least `width` bits, so `width` is bounded by the size of x
    let unsigned = wrap_unsigned(width, x);
    if unsigned.magnitude_bits() == width {
        Ok(unsigned.minus(&T::pow2(width)))
    } else {
        Ok(unsigned)
    }
}

fn wrap_unsigned<T: TwosComplement>(width: u64, x: &T) -> T {
    let low = x.low_magnitude_bits(width);
    if x.is_negative() && !low.is_zero() {
        T::pow2(width).minus(&low)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl TwosComplement for i128 {
        fn zero() -> Self {
            0
        }
        fn is_zero(&self) -> bool {
            *self == 0
        }
        fn is_negative(&self) -> bool {
            *self < 0
        }
        fn magnitude_bits(&self) -> u64 {
            128 - u64::from(self.unsigned_abs().leading_zeros())
        }
        fn low_magnitude_bits(&self, bits: u64) -> Self {
            (self.unsigned_abs() & ((1u128 << bits) - 1)) as i128
        }
        fn pow2(bits: u64) -> Self {
            1i128 << bits
        }
        fn minus(&self, other: &Self) -> Self {
            self - other
        }
    }

    #[test]
    fn test_as_uint_n() {
        assert_eq!(as_uint_n(8, &-1i128), Ok(255));
        assert_eq!(as_uint_n(8, &256i128), Ok(0));
        assert_eq!(as_uint_n(8, &-256i128), Ok(0));
        assert_eq!(as_uint_n(8, &300i128), Ok(44));
        assert_eq!(as_uint_n(0, &-7i128), Ok(0));
        assert_eq!(as_uint_n(100, &5i128), Ok(5));
    }

    #[test]
    fn test_as_int_n() {
        assert_eq!(as_int_n(8, &-129i128), Ok(127));
        assert_eq!(as_int_n(8, &128i128), Ok(-128));
        assert_eq!(as_int_n(8, &-128i128), Ok(-128));
        assert_eq!(as_int_n(8, &255i128), Ok(-1));
        assert_eq!(as_int_n(1, &1i128), Ok(-1));
        assert_eq!(as_int_n(64, &-5i128), Ok(-5));
    }

    #[test]
    fn test_negative_width() {
        assert_eq!(as_int_n(-1, &1i128), Err(BigIntError::NegativeWidth(-1)));
        assert_eq!(as_uint_n(-1, &1i128), Err(BigIntError::NegativeWidth(-1)));
    }

    #[test]
    fn test_huge_width() {
        assert_eq!(as_int_n(i64::MAX, &-3i128), Ok(-3));
        assert_eq!(as_uint_n(i64::MAX, &3i128), Ok(3));
        assert_eq!(as_uint_n(i64::MAX, &-3i128), Err(BigIntError::ResultTooLarge));
    }
}
