//! Shared numeric rules
//!
//! Size limits, shift normalization and exact integer/float comparison,
//! applied identically by every integer encoding.

use std::cmp::Ordering;

use crate::error::{BigIntError, MAX_BIT_LENGTH};

/// A shift amount with its direction resolved.
///
/// Magnitudes that do not fit in `u64` saturate to `u64::MAX`; no real
/// operand is that wide, so the result is the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shift {
    Left(u64),
    Right(u64),
}

impl Shift {
    /// Shift for a `x << y` where `y` has the given sign and magnitude
    pub(crate) fn from_amount(negative: bool, magnitude: u64) -> Self {
        if negative {
            Shift::Right(magnitude)
        } else {
            Shift::Left(magnitude)
        }
    }

    pub(crate) fn reversed(self) -> Self {
        match self {
            Shift::Left(n) => Shift::Right(n),
            Shift::Right(n) => Shift::Left(n),
        }
    }
}

/// Check that `x << amount` fits, given the bit length of `x`
pub(crate) fn check_left_shift(bits: u64, amount: u64) -> Result<(), BigIntError> {
    if bits != 0 && bits.saturating_add(amount) > MAX_BIT_LENGTH {
        return Err(BigIntError::ResultTooLarge);
    }
    Ok(())
}

/// Check a result bit length
pub(crate) fn check_bit_length(bits: u64) -> Result<(), BigIntError> {
    if bits > MAX_BIT_LENGTH {
        Err(BigIntError::ResultTooLarge)
    } else {
        Ok(())
    }
}

/// Exponent accepted by `pow` once the trivial bases are handled.
///
/// `base_bits` is the bit length of `|base|` (at least 2 here) and
/// `base_top` its leading `min(64, base_bits)` bits; `exponent` is `None`
/// when it does not fit in `u64`. The result has about
/// `exponent * log2|base|` bits, and anything estimated at the limit or
/// past it is rejected before computing.
pub(crate) fn pow_exponent(base_bits: u64, base_top: u64, exponent: Option<u64>) -> Result<u32, BigIntError> {
    let exponent = exponent.ok_or(BigIntError::ResultTooLarge)?;
    let log2_base = base_bits.saturating_sub(64) as f64 + (base_top as f64).log2();
    if log2_base * exponent as f64 >= MAX_BIT_LENGTH as f64 {
        return Err(BigIntError::ResultTooLarge);
    }
    u32::try_from(exponent).map_err(|_| BigIntError::ResultTooLarge)
}

/// Compare an integer with a float by exact mathematical value.
///
/// `truncate` must convert an integral, finite float exactly.
pub(crate) fn cmp_with_f64<T: Ord>(x: &T, f: f64, truncate: impl FnOnce(f64) -> T) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f.is_infinite() {
        return Some(if f > 0.0 { Ordering::Less } else { Ordering::Greater });
    }
    let whole = f.trunc();
    match x.cmp(&truncate(whole)) {
        Ordering::Equal => (whole).partial_cmp(&f),
        ord => Some(ord),
    }
}

/// Decompose a finite float into `(negative, mantissa, exponent)` with
/// `|f| == mantissa * 2^exponent`.
pub(crate) fn decompose_f64(f: f64) -> (bool, u64, i64) {
    let bits = f.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    if biased == 0 {
        (negative, fraction, -1074)
    } else {
        (negative, fraction | (1u64 << 52), biased - 1075)
    }
}

/// Validate a float for `BigInt(number)`
pub(crate) fn check_integral(f: f64) -> Result<f64, BigIntError> {
    if f.is_finite() && f.trunc() == f {
        Ok(f)
    } else {
        Err(BigIntError::not_convertible(f))
    }
}
