//! Arbitrary-precision engine
//!
//! The software BigInt engine used when the host has no usable native
//! integer: a function-per-operator surface over [`num_bigint::BigInt`].
//!
//! The engine raises its own errors for what it cannot compute (division by
//! zero, negative or oversized exponents, oversized shifts). It does not see
//! radix or width validation: `to_string_radix` expects a radix in `2..=36`
//! and the clamp functions take an unsigned width, so callers check first.

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

use crate::clamp;
use crate::error::BigIntError;
use crate::literal;
use crate::numeric::{self, Shift};

pub use num_bigint::BigInt as EngineInt;

/// Parse integer literal text (`BigInt(string)` grammar)
pub fn parse(text: &str) -> Result<BigInt, BigIntError> {
    from_literal(literal::parse(text)?, text)
}

/// Parse plain decimal text only (`-` and digits)
pub fn parse_decimal(text: &str) -> Result<BigInt, BigIntError> {
    from_literal(literal::parse_decimal(text)?, text)
}

fn from_literal(lit: literal::Literal<'_>, text: &str) -> Result<BigInt, BigIntError> {
    let magnitude = BigUint::parse_bytes(lit.digits.as_bytes(), lit.radix)
        .ok_or_else(|| BigIntError::not_convertible(format!("{text:?}")))?;
    let sign = if lit.negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// From an integral, finite number
pub fn from_f64(n: f64) -> Result<BigInt, BigIntError> {
    let n = numeric::check_integral(n)?;
    BigInt::from_f64(n).ok_or_else(|| BigIntError::not_convertible(n))
}

fn from_f64_trunc(n: f64) -> BigInt {
    let (negative, mantissa, exponent) = numeric::decompose_f64(n.trunc());
    let magnitude = BigInt::from(mantissa);
    let magnitude = if exponent >= 0 {
        magnitude << exponent as u64
    } else {
        magnitude >> exponent.unsigned_abs()
    };
    if negative { -magnitude } else { magnitude }
}

/// Render in `radix`; the radix must already be in `2..=36`
pub fn to_string_radix(x: &BigInt, radix: u32) -> String {
    debug_assert!((2..=36).contains(&radix));
    x.to_str_radix(radix)
}

pub fn to_number(x: &BigInt) -> f64 {
    x.to_f64().unwrap_or(if x.is_negative() { f64::NEG_INFINITY } else { f64::INFINITY })
}

pub fn unary_minus(x: &BigInt) -> BigInt {
    -x
}

pub fn bitwise_not(x: &BigInt) -> BigInt {
    -x - BigInt::one()
}

pub fn exponentiate(x: &BigInt, y: &BigInt) -> Result<BigInt, BigIntError> {
    if y.is_negative() {
        return Err(BigIntError::NegativeExponent);
    }
    if y.is_zero() {
        return Ok(BigInt::one());
    }
    if x.bits() <= 1 {
        // 0, 1 and -1
        let odd = y.bit(0);
        return Ok(if x.is_negative() && !odd { x.abs() } else { x.clone() });
    }
    let bits = x.bits();
    let top = (x.magnitude() >> bits.saturating_sub(64)).to_u64().unwrap_or(u64::MAX);
    let exp = numeric::pow_exponent(bits, top, y.to_u64())?;
    let result = x.pow(exp);
    numeric::check_bit_length(result.bits())?;
    Ok(result)
}

pub fn multiply(x: &BigInt, y: &BigInt) -> BigInt {
    x * y
}

/// Truncating division; `None` for a zero divisor
pub fn divide(x: &BigInt, y: &BigInt) -> Option<BigInt> {
    if y.is_zero() { None } else { Some(x / y) }
}

/// Remainder with the sign of the dividend; `None` for a zero divisor
pub fn remainder(x: &BigInt, y: &BigInt) -> Option<BigInt> {
    if y.is_zero() { None } else { Some(x % y) }
}

pub fn add(x: &BigInt, y: &BigInt) -> BigInt {
    x + y
}

pub fn subtract(x: &BigInt, y: &BigInt) -> BigInt {
    x - y
}

fn shift_amount(y: &BigInt) -> Shift {
    Shift::from_amount(y.is_negative(), y.magnitude().to_u64().unwrap_or(u64::MAX))
}

fn shift(x: &BigInt, shift: Shift) -> Result<BigInt, BigIntError> {
    match shift {
        Shift::Left(n) => {
            numeric::check_left_shift(x.bits(), n)?;
            Ok(x << n)
        }
        Shift::Right(n) if n >= x.bits() => {
            Ok(if x.is_negative() { -BigInt::one() } else { BigInt::zero() })
        }
        // BigInt's `>>` rounds toward negative infinity
        Shift::Right(n) => Ok(x >> n),
    }
}

pub fn left_shift(x: &BigInt, y: &BigInt) -> Result<BigInt, BigIntError> {
    shift(x, shift_amount(y))
}

pub fn signed_right_shift(x: &BigInt, y: &BigInt) -> Result<BigInt, BigIntError> {
    shift(x, shift_amount(y).reversed())
}

/// Exact comparison with a number; `None` when `y` is NaN
pub fn compare_number(x: &BigInt, y: f64) -> Option<Ordering> {
    numeric::cmp_with_f64(x, y, from_f64_trunc)
}

pub fn bitwise_and(x: &BigInt, y: &BigInt) -> BigInt {
    x & y
}

pub fn bitwise_xor(x: &BigInt, y: &BigInt) -> BigInt {
    x ^ y
}

pub fn bitwise_or(x: &BigInt, y: &BigInt) -> BigInt {
    x | y
}

/// Signed clamp; fails only when the result cannot be represented
pub fn as_int_n(width: u64, x: &BigInt) -> Result<BigInt, BigIntError> {
    clamp::as_int_n(i64::try_from(width).unwrap_or(i64::MAX), x)
}

/// Unsigned clamp; fails only when the result cannot be represented
pub fn as_uint_n(width: u64, x: &BigInt) -> Result<BigInt, BigIntError> {
    clamp::as_uint_n(i64::try_from(width).unwrap_or(i64::MAX), x)
}

impl clamp::TwosComplement for BigInt {
    fn zero() -> Self {
        Zero::zero()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_negative(&self) -> bool {
        Signed::is_negative(self)
    }

    fn magnitude_bits(&self) -> u64 {
        self.bits()
    }

    fn low_magnitude_bits(&self, bits: u64) -> Self {
        let mask = (BigUint::one() << bits) - 1u32;
        BigInt::from(self.magnitude() & &mask)
    }

    fn pow2(bits: u64) -> Self {
        BigInt::one() << bits
    }

    fn minus(&self, other: &Self) -> Self {
        self - other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        parse(s).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(big("  -42 ").to_string(), "-42");
        assert_eq!(big("0x1F").to_string(), "31");
        assert_eq!(big("").to_string(), "0");
        assert!(parse("4.2").is_err());
    }

    #[test]
    fn test_division_semantics() {
        assert_eq!(divide(&big("-7"), &big("2")).unwrap().to_string(), "-3");
        assert_eq!(remainder(&big("-7"), &big("2")).unwrap().to_string(), "-1");
        assert_eq!(remainder(&big("7"), &big("-2")).unwrap().to_string(), "1");
        assert!(divide(&big("1"), &big("0")).is_none());
    }

    #[test]
    fn test_shift_rounding() {
        assert_eq!(signed_right_shift(&big("-5"), &big("1")).unwrap().to_string(), "-3");
        assert_eq!(left_shift(&big("-5"), &big("-1")).unwrap().to_string(), "-3");
        assert_eq!(signed_right_shift(&big("-5"), &big("1000")).unwrap().to_string(), "-1");
        assert_eq!(left_shift(&big("3"), &big("2000000000")), Err(BigIntError::ResultTooLarge));
    }

    #[test]
    fn test_exponentiate() {
        assert_eq!(exponentiate(&big("-3"), &big("3")).unwrap().to_string(), "-27");
        assert_eq!(exponentiate(&big("-1"), &big("4")).unwrap().to_string(), "1");
        assert_eq!(exponentiate(&big("0"), &big("0")).unwrap().to_string(), "1");
        assert_eq!(exponentiate(&big("2"), &big("-1")), Err(BigIntError::NegativeExponent));
    }

    #[test]
    fn test_bitwise_not() {
        assert_eq!(bitwise_not(&big("0")).to_string(), "-1");
        assert_eq!(bitwise_not(&big("-8")).to_string(), "7");
    }

    #[test]
    fn test_clamp() {
        assert_eq!(as_int_n(8, &big("-129")).unwrap().to_string(), "127");
        assert_eq!(as_uint_n(8, &big("-1")).unwrap().to_string(), "255");
        assert_eq!(as_uint_n(u64::MAX, &big("-1")), Err(BigIntError::ResultTooLarge));
    }

    #[test]
    fn test_compare_number() {
        assert_eq!(compare_number(&big("3"), 2.5), Some(Ordering::Greater));
        assert_eq!(compare_number(&big("-3"), -2.5), Some(Ordering::Less));
        assert_eq!(compare_number(&big("1"), f64::NAN), None);
    }
}
