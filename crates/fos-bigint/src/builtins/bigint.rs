//! BigInt Implementation
//!
//! Arbitrary precision integers for JavaScript. This is the runtime's
//! built-in `bigint` primitive: it raises its own RangeErrors exactly where
//! ECMAScript's `BigInt` does.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Not, Sub};
use std::str::FromStr;

use crate::clamp::{self, TwosComplement};
use crate::error::{BigIntError, check_radix};
use crate::literal;
use crate::numeric::{self, Shift};

/// JavaScript BigInt
///
/// Sign and magnitude. Zero has no limbs and is never negative, so derived
/// equality is numeric equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsBigInt {
    /// Magnitude in little-endian limbs, no trailing zero limbs
    limbs: Vec<u64>,
    /// Sign: true = negative
    negative: bool,
}

impl JsBigInt {
    /// Create zero
    pub fn zero() -> Self {
        Self::default()
    }

    fn from_parts(negative: bool, limbs: Vec<u64>) -> Self {
        let limbs = trim(limbs);
        let negative = negative && !limbs.is_empty();
        Self { limbs, negative }
    }

    /// Create from i64
    pub fn from_i64(n: i64) -> Self {
        Self::from_parts(n < 0, vec![n.unsigned_abs()])
    }

    /// Create from u64
    pub fn from_u64(n: u64) -> Self {
        Self::from_parts(false, vec![n])
    }

    /// Create from i128
    pub fn from_i128(n: i128) -> Self {
        let magnitude = n.unsigned_abs();
        Self::from_parts(n < 0, vec![magnitude as u64, (magnitude >> 64) as u64])
    }

    /// Create from an integral, finite number (`BigInt(1e21)`)
    pub fn from_f64(n: f64) -> Result<Self, BigIntError> {
        numeric::check_integral(n).map(Self::from_f64_trunc)
    }

    /// Exact value of `n.trunc()`; `n` must be finite
    fn from_f64_trunc(n: f64) -> Self {
        let (negative, mantissa, exponent) = numeric::decompose_f64(n.trunc());
        let limbs = if exponent >= 0 {
            shl_mag(&[mantissa], exponent as u64)
        } else {
            shr_mag(&[mantissa], exponent.unsigned_abs()).0
        };
        Self::from_parts(negative, limbs)
    }

    /// Parse from string
    ///
    /// Accepts what `BigInt(string)` accepts: decimal with optional sign,
    /// or `0x`/`0o`/`0b` literals, surrounded by optional whitespace.
    pub fn parse(s: &str) -> Result<Self, BigIntError> {
        let lit = literal::parse(s)?;
        Ok(Self::from_digits(lit.negative, lit.digits, lit.radix))
    }

    /// Build from digits already validated for `radix`
    fn from_digits(negative: bool, digits: &str, radix: u32) -> Self {
        let (_, chunk_len) = chunk_for_radix(radix);
        let mut limbs = Vec::new();
        let bytes = digits.as_bytes();
        let head = bytes.len() % chunk_len;
        let chunks = std::iter::once(&bytes[..head])
            .filter(|c| !c.is_empty())
            .chain(bytes[head..].chunks(chunk_len));

        for chunk in chunks {
            let mut value = 0u64;
            let mut base = 1u64;
            for &b in chunk {
                // Validated by the literal grammar
                let digit = (b as char).to_digit(radix).unwrap_or(0);
                value = value * u64::from(radix) + u64::from(digit);
                base *= u64::from(radix);
            }
            mul_small_add(&mut limbs, base, value);
        }

        Self::from_parts(negative, limbs)
    }

    /// Nearest number (`Number(x)`), ties to even
    pub fn to_f64(&self) -> f64 {
        let bits = self.bit_length();
        let magnitude = if bits <= 64 {
            self.limbs.first().copied().unwrap_or(0) as f64
        } else {
            let shift = bits - 64;
            let (top, lost) = shr_mag(&self.limbs, shift);
            // Sticky bit keeps the final rounding correct
            let top = top.first().copied().unwrap_or(0) | u64::from(lost);
            if shift > 1023 {
                f64::INFINITY
            } else {
                top as f64 * 2f64.powi(shift as i32)
            }
        };
        if self.negative { -magnitude } else { magnitude }
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Bit length of the magnitude
    pub fn bit_length(&self) -> u64 {
        bit_len(&self.limbs)
    }

    /// Negate
    pub fn negate(&self) -> Self {
        Self::from_parts(!self.negative, self.limbs.clone())
    }

    /// `x ** exponent`
    pub fn checked_pow(&self, exponent: &Self) -> Result<Self, BigIntError> {
        if exponent.negative {
            return Err(BigIntError::NegativeExponent);
        }
        let odd = exponent.limbs.first().is_some_and(|l| l & 1 == 1);
        if exponent.is_zero() {
            return Ok(Self::from_u64(1));
        }
        if self.bit_length() <= 1 {
            // 0, 1 and -1
            let negative = self.negative && odd;
            return Ok(Self::from_parts(negative, self.limbs.clone()));
        }

        let exponent = match exponent.limbs.as_slice() {
            [e] => Some(*e),
            _ => None,
        };
        let bits = self.bit_length();
        let top = shr_mag(&self.limbs, bits.saturating_sub(64)).0.first().copied().unwrap_or(0);
        let mut exp = numeric::pow_exponent(bits, top, exponent)?;
        let mut base = self.limbs.clone();
        let mut acc = vec![1u64];
        while exp > 0 {
            if exp & 1 == 1 {
                acc = mul_mag(&acc, &base);
            }
            exp >>= 1;
            if exp > 0 {
                base = mul_mag(&base, &base);
            }
        }
        numeric::check_bit_length(bit_len(&acc))?;
        Ok(Self::from_parts(self.negative && odd, acc))
    }

    /// Truncating division, `x / y`
    pub fn checked_div(&self, other: &Self) -> Result<Self, BigIntError> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// Remainder with the sign of the dividend, `x % y`
    pub fn checked_rem(&self, other: &Self) -> Result<Self, BigIntError> {
        self.div_rem(other).map(|(_, r)| r)
    }

    /// Division with remainder
    fn div_rem(&self, other: &Self) -> Result<(Self, Self), BigIntError> {
        if other.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let (q, r) = div_rem_mag(&self.limbs, &other.limbs);
        Ok((
            Self::from_parts(self.negative != other.negative, q),
            Self::from_parts(self.negative, r),
        ))
    }

    /// `x << y`; a negative `y` shifts right
    pub fn shl(&self, amount: &Self) -> Result<Self, BigIntError> {
        self.shift(amount.shift_amount())
    }

    /// `x >> y` (sign-propagating); a negative `y` shifts left
    pub fn shr(&self, amount: &Self) -> Result<Self, BigIntError> {
        self.shift(amount.shift_amount().reversed())
    }

    fn shift_amount(&self) -> Shift {
        let magnitude = match self.limbs.as_slice() {
            [] => 0,
            [n] => *n,
            _ => u64::MAX,
        };
        Shift::from_amount(self.negative, magnitude)
    }

    fn shift(&self, shift: Shift) -> Result<Self, BigIntError> {
        match shift {
            Shift::Left(n) => {
                numeric::check_left_shift(self.bit_length(), n)?;
                Ok(Self::from_parts(self.negative, shl_mag(&self.limbs, n)))
            }
            Shift::Right(n) => {
                let (mut limbs, lost) = shr_mag(&self.limbs, n);
                // Arithmetic shift rounds toward negative infinity
                if self.negative && lost {
                    limbs = add_mag(&limbs, &[1]);
                }
                Ok(Self::from_parts(self.negative, limbs))
            }
        }
    }

    /// `BigInt.asIntN(width, x)`
    pub fn as_int_n(&self, width: i64) -> Result<Self, BigIntError> {
        clamp::as_int_n(width, self)
    }

    /// `BigInt.asUintN(width, x)`
    pub fn as_uint_n(&self, width: i64) -> Result<Self, BigIntError> {
        clamp::as_uint_n(width, self)
    }

    /// Exact comparison with a number; `None` when `n` is NaN
    pub fn partial_cmp_f64(&self, n: f64) -> Option<Ordering> {
        numeric::cmp_with_f64(self, n, Self::from_f64_trunc)
    }

    /// Convert to string in the given radix (2..=36), lowercase digits
    pub fn to_string_radix(&self, radix: u32) -> Result<String, BigIntError> {
        let radix = check_radix(radix)?;
        if self.is_zero() {
            return Ok("0".to_string());
        }

        let (chunk_base, chunk_len) = chunk_for_radix(radix);
        let mut result = Vec::new();
        let mut temp = self.limbs.clone();

        while !temp.is_empty() {
            let (q, mut r) = div_rem_small(&temp, chunk_base);
            let mut written = 0;
            while r > 0 || (!q.is_empty() && written < chunk_len) {
                let digit = (r % u64::from(radix)) as u32;
                result.push(char::from_digit(digit, radix).unwrap_or('0'));
                r /= u64::from(radix);
                written += 1;
            }
            temp = q;
        }

        if self.negative {
            result.push('-');
        }

        Ok(result.into_iter().rev().collect())
    }

    /// Two's-complement limbs, sign-extended to `len`
    fn to_twos(&self, len: usize) -> Vec<u64> {
        let mut out = self.limbs.clone();
        out.resize(len, 0);
        if self.negative {
            negate_twos(&mut out);
        }
        out
    }

    fn from_twos(mut limbs: Vec<u64>) -> Self {
        let negative = limbs.last().is_some_and(|top| top >> 63 == 1);
        if negative {
            negate_twos(&mut limbs);
        }
        Self::from_parts(negative, limbs)
    }

    fn bitwise(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        let len = self.limbs.len().max(other.limbs.len()) + 1;
        let a = self.to_twos(len);
        let b = other.to_twos(len);
        Self::from_twos(a.iter().zip(&b).map(|(&x, &y)| op(x, y)).collect())
    }
}

/// Largest power of `radix` that fits in a limb, and its digit count
fn chunk_for_radix(radix: u32) -> (u64, usize) {
    let radix = u64::from(radix);
    let mut base = radix;
    let mut len = 1;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        len += 1;
    }
    (base, len)
}

fn trim(mut limbs: Vec<u64>) -> Vec<u64> {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
    limbs
}

fn bit_len(limbs: &[u64]) -> u64 {
    match limbs.last() {
        None => 0,
        Some(top) => (limbs.len() as u64 - 1) * 64 + u64::from(64 - top.leading_zeros()),
    }
}

fn cmp_mag(a: &[u64], b: &[u64]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn add_mag(a: &[u64], b: &[u64]) -> Vec<u64> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry = false;

    for (i, &x) in long.iter().enumerate() {
        let y = short.get(i).copied().unwrap_or(0);
        let (sum1, c1) = x.overflowing_add(y);
        let (sum2, c2) = sum1.overflowing_add(u64::from(carry));
        result.push(sum2);
        carry = c1 || c2;
    }

    if carry {
        result.push(1);
    }
    result
}

/// `a - b`, requires `a >= b`
fn sub_mag(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut result = Vec::with_capacity(a.len());
    let mut borrow = false;

    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).copied().unwrap_or(0);
        let (diff1, b1) = x.overflowing_sub(y);
        let (diff2, b2) = diff1.overflowing_sub(u64::from(borrow));
        result.push(diff2);
        borrow = b1 || b2;
    }

    trim(result)
}

/// Schoolbook multiplication
fn mul_mag(a: &[u64], b: &[u64]) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut result = vec![0u64; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &y) in b.iter().enumerate() {
            // u128 for full 64x64 -> 128 multiplication
            let product = u128::from(x) * u128::from(y) + u128::from(result[i + j]) + u128::from(carry);
            result[i + j] = product as u64;
            carry = (product >> 64) as u64;
        }
        result[i + b.len()] = carry;
    }

    trim(result)
}

/// `limbs = limbs * mul + add`
fn mul_small_add(limbs: &mut Vec<u64>, mul: u64, add: u64) {
    let mut carry = u128::from(add);
    for limb in limbs.iter_mut() {
        let product = u128::from(*limb) * u128::from(mul) + carry;
        *limb = product as u64;
        carry = product >> 64;
    }
    if carry != 0 {
        limbs.push(carry as u64);
    }
}

fn div_rem_small(a: &[u64], divisor: u64) -> (Vec<u64>, u64) {
    let mut quotient = vec![0u64; a.len()];
    let mut rem: u128 = 0;
    for i in (0..a.len()).rev() {
        let cur = (rem << 64) | u128::from(a[i]);
        quotient[i] = (cur / u128::from(divisor)) as u64;
        rem = cur % u128::from(divisor);
    }
    (trim(quotient), rem as u64)
}

/// Magnitude division, `b` non-empty
fn div_rem_mag(a: &[u64], b: &[u64]) -> (Vec<u64>, Vec<u64>) {
    if cmp_mag(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    if let [d] = b {
        let (q, r) = div_rem_small(a, *d);
        return (q, trim(vec![r]));
    }

    // Binary long division for multi-limb divisors
    let mut quotient = vec![0u64; a.len()];
    let mut remainder: Vec<u64> = Vec::new();

    for i in (0..bit_len(a)).rev() {
        remainder = shl_mag(&remainder, 1);
        let (limb, bit) = ((i / 64) as usize, i % 64);
        if (a[limb] >> bit) & 1 == 1 {
            match remainder.first_mut() {
                Some(low) => *low |= 1,
                None => remainder.push(1),
            }
        }
        if cmp_mag(&remainder, b) != Ordering::Less {
            remainder = sub_mag(&remainder, b);
            quotient[limb] |= 1u64 << bit;
        }
    }

    (trim(quotient), remainder)
}

fn shl_mag(a: &[u64], n: u64) -> Vec<u64> {
    if a.is_empty() {
        return Vec::new();
    }
    let limbs = (n / 64) as usize;
    let bits = (n % 64) as u32;
    let mut result = vec![0u64; limbs];
    if bits == 0 {
        result.extend_from_slice(a);
    } else {
        let mut carry = 0u64;
        for &x in a {
            result.push((x << bits) | carry);
            carry = x >> (64 - bits);
        }
        if carry != 0 {
            result.push(carry);
        }
    }
    result
}

/// `a >> n`, plus whether any one bits were shifted out
fn shr_mag(a: &[u64], n: u64) -> (Vec<u64>, bool) {
    let skip = n / 64;
    if skip >= a.len() as u64 {
        return (Vec::new(), !a.is_empty());
    }
    let skip = skip as usize;
    let bits = (n % 64) as u32;
    let mut lost = a[..skip].iter().any(|&x| x != 0);
    let src = &a[skip..];

    let result = if bits == 0 {
        src.to_vec()
    } else {
        lost |= src[0] & ((1u64 << bits) - 1) != 0;
        (0..src.len())
            .map(|i| {
                let hi = src.get(i + 1).copied().unwrap_or(0);
                (src[i] >> bits) | (hi << (64 - bits))
            })
            .collect()
    };
    (trim(result), lost)
}

/// In-place two's-complement negation
fn negate_twos(limbs: &mut [u64]) {
    let mut carry = true;
    for limb in limbs.iter_mut() {
        let (value, c) = (!*limb).overflowing_add(u64::from(carry));
        *limb = value;
        carry = c;
    }
}

impl TwosComplement for JsBigInt {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }

    fn is_negative(&self) -> bool {
        self.negative
    }

    fn magnitude_bits(&self) -> u64 {
        self.bit_length()
    }

    fn low_magnitude_bits(&self, bits: u64) -> Self {
        let keep = bits.div_ceil(64) as usize;
        let mut limbs: Vec<u64> = self.limbs.iter().copied().take(keep).collect();
        if bits % 64 != 0 && limbs.len() == keep {
            if let Some(top) = limbs.last_mut() {
                *top &= (1u64 << (bits % 64)) - 1;
            }
        }
        Self::from_parts(false, limbs)
    }

    fn pow2(bits: u64) -> Self {
        Self::from_parts(false, shl_mag(&[1], bits))
    }

    fn minus(&self, other: &Self) -> Self {
        self - other
    }
}

impl fmt::Display for JsBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_string_radix(10).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for JsBigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> Add<&'a JsBigInt> for &'a JsBigInt {
    type Output = JsBigInt;

    fn add(self, other: &JsBigInt) -> JsBigInt {
        // Same sign: add magnitudes; otherwise subtract the smaller
        if self.negative == other.negative {
            return JsBigInt::from_parts(self.negative, add_mag(&self.limbs, &other.limbs));
        }
        match cmp_mag(&self.limbs, &other.limbs) {
            Ordering::Less => JsBigInt::from_parts(other.negative, sub_mag(&other.limbs, &self.limbs)),
            _ => JsBigInt::from_parts(self.negative, sub_mag(&self.limbs, &other.limbs)),
        }
    }
}

impl<'a> Sub<&'a JsBigInt> for &'a JsBigInt {
    type Output = JsBigInt;

    fn sub(self, other: &JsBigInt) -> JsBigInt {
        self + &other.negate()
    }
}

impl<'a> Mul<&'a JsBigInt> for &'a JsBigInt {
    type Output = JsBigInt;

    fn mul(self, other: &JsBigInt) -> JsBigInt {
        JsBigInt::from_parts(self.negative != other.negative, mul_mag(&self.limbs, &other.limbs))
    }
}

impl<'a> BitAnd<&'a JsBigInt> for &'a JsBigInt {
    type Output = JsBigInt;

    fn bitand(self, other: &JsBigInt) -> JsBigInt {
        self.bitwise(other, |x, y| x & y)
    }
}

impl<'a> BitOr<&'a JsBigInt> for &'a JsBigInt {
    type Output = JsBigInt;

    fn bitor(self, other: &JsBigInt) -> JsBigInt {
        self.bitwise(other, |x, y| x | y)
    }
}

impl<'a> BitXor<&'a JsBigInt> for &'a JsBigInt {
    type Output = JsBigInt;

    fn bitxor(self, other: &JsBigInt) -> JsBigInt {
        self.bitwise(other, |x, y| x ^ y)
    }
}

impl Add for JsBigInt {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl Sub for JsBigInt {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl Mul for JsBigInt {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}

impl Neg for JsBigInt {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Not for &JsBigInt {
    type Output = JsBigInt;

    /// `~x == -x - 1`
    fn not(self) -> JsBigInt {
        &self.negate() - &JsBigInt::from_u64(1)
    }
}

impl PartialOrd for JsBigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JsBigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_mag(&self.limbs, &other.limbs),
            (true, true) => cmp_mag(&other.limbs, &self.limbs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> JsBigInt {
        JsBigInt::parse(s).unwrap()
    }

    #[test]
    fn test_bigint_parse() {
        let n = big("12345");
        assert_eq!(n.to_string(), "12345");

        let neg = big("-999");
        assert_eq!(neg.to_string(), "-999");

        assert_eq!(big("-0").to_string(), "0");
        assert_eq!(big("0xff").to_string(), "255");
        assert_eq!(big("0b1010").to_string(), "10");
        assert!(JsBigInt::parse("12345n").is_err());
    }

    #[test]
    fn test_bigint_ops() {
        let a = JsBigInt::from_i64(100);
        let b = JsBigInt::from_i64(50);

        assert_eq!(a.clone() + b.clone(), JsBigInt::from_i64(150));
        assert_eq!(a.clone() - b.clone(), JsBigInt::from_i64(50));
        assert_eq!(b.clone() - a.clone(), JsBigInt::from_i64(-50));
        assert_eq!(a * b, JsBigInt::from_i64(5000));
    }

    #[test]
    fn test_multi_limb_arithmetic() {
        let a = big("340282366920938463463374607431768211456"); // 2^128
        let b = big("18446744073709551615"); // 2^64 - 1
        assert_eq!((&a * &b).to_string(), "6277101735386680763495507056286727952638980837032266301440");
        assert_eq!(a.checked_div(&b).unwrap().to_string(), "18446744073709551617");
        assert_eq!(a.checked_rem(&b).unwrap().to_string(), "1");
        assert_eq!((&a - &JsBigInt::from_u64(1)).to_string(), "340282366920938463463374607431768211455");
    }

    #[test]
    fn test_long_division() {
        let a = big("123456789012345678901234567890123456789");
        let b = big("-98765432109876543210987");
        assert_eq!(a.checked_div(&b).unwrap().to_string(), "-1249999988609375");
        assert_eq!(a.checked_rem(&b).unwrap().to_string(), "14063317902772253664");
    }

    #[test]
    fn test_truncating_division() {
        let x = JsBigInt::from_i64(-7);
        let y = JsBigInt::from_i64(2);
        assert_eq!(x.checked_div(&y).unwrap().to_string(), "-3");
        assert_eq!(x.checked_rem(&y).unwrap().to_string(), "-1");
        assert_eq!(x.checked_div(&JsBigInt::zero()), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn test_pow() {
        let two = JsBigInt::from_i64(-2);
        assert_eq!(two.checked_pow(&JsBigInt::from_i64(65)).unwrap().to_string(), "-36893488147419103232");
        assert_eq!(two.checked_pow(&JsBigInt::zero()).unwrap().to_string(), "1");
        assert_eq!(two.checked_pow(&JsBigInt::from_i64(-1)), Err(BigIntError::NegativeExponent));
        let huge = big("100000000000000000000000");
        assert_eq!(JsBigInt::from_i64(-1).checked_pow(&huge).unwrap().to_string(), "1");
        assert_eq!(two.checked_pow(&huge), Err(BigIntError::ResultTooLarge));
    }

    #[test]
    fn test_shifts() {
        let x = JsBigInt::from_i64(-5);
        assert_eq!(x.shr(&JsBigInt::from_i64(1)).unwrap().to_string(), "-3");
        assert_eq!(x.shl(&JsBigInt::from_i64(-1)).unwrap().to_string(), "-3");
        assert_eq!(x.shl(&JsBigInt::from_i64(70)).unwrap().to_string(), "-5902958103587056517120");
        assert_eq!(x.shr(&big("99999999999999999999999")).unwrap().to_string(), "-1");
        assert_eq!(JsBigInt::from_i64(5).shr(&JsBigInt::from_i64(64)).unwrap().to_string(), "0");
        assert_eq!(x.shl(&big("99999999999999999999999")), Err(BigIntError::ResultTooLarge));
        assert_eq!(JsBigInt::zero().shl(&big("99999999999999999999999")).unwrap().to_string(), "0");
    }

    #[test]
    fn test_bitwise() {
        let a = JsBigInt::from_i64(-12);
        let b = JsBigInt::from_i64(10);
        assert_eq!(&a & &b, JsBigInt::from_i64(-12 & 10));
        assert_eq!(&a | &b, JsBigInt::from_i64(-12 | 10));
        assert_eq!(&a ^ &b, JsBigInt::from_i64(-12 ^ 10));
        assert_eq!(!&a, JsBigInt::from_i64(11));
        assert_eq!(!&JsBigInt::zero(), JsBigInt::from_i64(-1));
        let wide = big("-18446744073709551616"); // -2^64
        assert_eq!((&wide & &JsBigInt::from_i64(-1)).to_string(), "-18446744073709551616");
        assert_eq!((&wide | &JsBigInt::from_u64(u64::MAX)).to_string(), "-1");
    }

    #[test]
    fn test_radix_strings() {
        assert_eq!(JsBigInt::from_i64(255).to_string_radix(16).unwrap(), "ff");
        assert_eq!(JsBigInt::from_i64(-255).to_string_radix(2).unwrap(), "-11111111");
        assert_eq!(JsBigInt::from_i64(35).to_string_radix(36).unwrap(), "z");
        assert_eq!(big("18446744073709551616").to_string_radix(16).unwrap(), "10000000000000000");
        assert_eq!(big("10000000000000000000").to_string_radix(10).unwrap(), "10000000000000000000");
        assert_eq!(JsBigInt::zero().to_string_radix(7).unwrap(), "0");
        assert_eq!(JsBigInt::from_i64(1).to_string_radix(37), Err(BigIntError::InvalidRadix(37)));
    }

    #[test]
    fn test_clamping() {
        assert_eq!(JsBigInt::from_i64(-129).as_int_n(8).unwrap().to_string(), "127");
        assert_eq!(JsBigInt::from_i64(-1).as_uint_n(8).unwrap().to_string(), "255");
        assert_eq!(JsBigInt::from_i64(-1).as_uint_n(64).unwrap().to_string(), "18446744073709551615");
        assert_eq!(big("18446744073709551615").as_int_n(64).unwrap().to_string(), "-1");
        assert_eq!(JsBigInt::from_i64(1).as_int_n(-1), Err(BigIntError::NegativeWidth(-1)));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(JsBigInt::from_f64(1e21).unwrap().to_string(), "1000000000000000000000");
        assert_eq!(JsBigInt::from_f64(-0.0).unwrap().to_string(), "0");
        assert!(JsBigInt::from_f64(0.5).is_err());
        assert_eq!(big("9007199254740993").to_f64(), 9007199254740992.0);
        assert_eq!(big("-18446744073709551616").to_f64(), -18446744073709551616.0);
        assert_eq!(JsBigInt::from_i64(2).partial_cmp_f64(2.5), Some(Ordering::Less));
        assert_eq!(big("9007199254740993").partial_cmp_f64(9007199254740992.0), Some(Ordering::Greater));
    }
}
