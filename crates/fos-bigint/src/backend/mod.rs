//! BigInt Backends
//!
//! Abstract BigInt operation set, allowing pluggable integer encodings.
//! Every backend gives identical results and raises identical errors; they
//! differ only in speed and in which [`ExtendedInt`] encoding they produce.

mod bridged;
mod engine;
mod native;

pub use bridged::BridgedBackend;
pub use engine::EngineBackend;
pub use native::NativeBackend;

use std::any::Any;
use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::error::BigIntError;
use crate::value::{BackendKind, ExtendedInt, MinimalConstructor, Operand, Primitive};

/// Abstract BigInt interface.
///
/// Implementations:
/// - `NativeBackend`: the runtime's built-in `JsBigInt`
/// - `EngineBackend`: arbitrary-precision engine integers, no conversion
/// - `BridgedBackend`: an external minimal type, every operation bridged
///   through decimal text and the engine
pub trait BigIntLib: Send + Sync {
    /// Which encoding this backend produces
    fn kind(&self) -> BackendKind;

    /// `true` only for the native backend
    fn is_backend_native(&self) -> bool {
        self.kind() == BackendKind::Native
    }

    /// Is `value` an [`ExtendedInt`] of this backend's encoding?
    fn is_extended_integer(&self, value: &dyn Any) -> bool;

    /// `BigInt(value)`
    fn from_primitive(&self, value: Primitive<'_>) -> Result<ExtendedInt, BigIntError>;

    /// `x.toString(radix)`; the radix must be in `2..=36`
    fn to_string_radix(&self, x: &ExtendedInt, radix: u32) -> Result<String, BigIntError>;

    /// `x.toString()`
    fn to_string(&self, x: &ExtendedInt) -> Result<String, BigIntError> {
        self.to_string_radix(x, 10)
    }

    /// `Number(x)`; large magnitudes lose precision
    fn to_number(&self, x: &ExtendedInt) -> Result<f64, BigIntError>;

    /// `-x`
    fn negate(&self, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `~x`
    fn bitwise_complement(&self, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `x ** y`; `y` must be non-negative
    fn exponentiate(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `x * y`
    fn multiply(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `x / y`, truncated toward zero; `y` must be non-zero
    fn divide(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `x % y`, with the sign of `x`; `y` must be non-zero
    fn remainder(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `x + y`
    fn add(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `x - y`
    fn subtract(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `x << y`. Negative shifts are allowed and shift right.
    fn left_shift(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `x >> y`. Negative shifts are allowed and shift left.
    fn signed_right_shift(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// Exact ordering of two BigInts or numbers; `None` if either is NaN
    fn compare(&self, x: Operand<'_>, y: Operand<'_>) -> Result<Option<Ordering>, BigIntError>;

    /// `x & y`
    fn bitwise_and(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `x ^ y`
    fn bitwise_xor(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `x | y`
    fn bitwise_or(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `BigInt.asIntN(width, x)`; the width must be non-negative
    fn as_int_n(&self, width: i64, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `BigInt.asUintN(width, x)`; the width must be non-negative
    fn as_uint_n(&self, width: i64, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;

    /// `x < y`
    fn less_than(&self, x: Operand<'_>, y: Operand<'_>) -> Result<bool, BigIntError> {
        Ok(self.compare(x, y)? == Some(Ordering::Less))
    }

    /// `x <= y`
    fn less_than_or_equal(&self, x: Operand<'_>, y: Operand<'_>) -> Result<bool, BigIntError> {
        Ok(matches!(self.compare(x, y)?, Some(Ordering::Less | Ordering::Equal)))
    }

    /// `x > y`
    fn greater_than(&self, x: Operand<'_>, y: Operand<'_>) -> Result<bool, BigIntError> {
        Ok(self.compare(x, y)? == Some(Ordering::Greater))
    }

    /// `x >= y`
    fn greater_than_or_equal(&self, x: Operand<'_>, y: Operand<'_>) -> Result<bool, BigIntError> {
        Ok(matches!(self.compare(x, y)?, Some(Ordering::Greater | Ordering::Equal)))
    }

    /// `x == y`
    fn equal(&self, x: Operand<'_>, y: Operand<'_>) -> Result<bool, BigIntError> {
        Ok(self.compare(x, y)? == Some(Ordering::Equal))
    }

    /// `x != y`; true whenever either side is NaN
    fn not_equal(&self, x: Operand<'_>, y: Operand<'_>) -> Result<bool, BigIntError> {
        Ok(self.compare(x, y)? != Some(Ordering::Equal))
    }
}

/// Order two comparison operands, given how to read a BigInt of this
/// backend's encoding and how to compare that reading with a number.
pub(crate) fn compare_operands<'a, T, R>(
    x: Operand<'a>,
    y: Operand<'a>,
    read: impl Fn(&'a ExtendedInt) -> Result<R, BigIntError>,
    cmp_number: impl Fn(&T, f64) -> Option<Ordering>,
) -> Result<Option<Ordering>, BigIntError>
where
    T: Ord,
    R: Borrow<T>,
{
    Ok(match (x, y) {
        (Operand::BigInt(a), Operand::BigInt(b)) => Some(read(a)?.borrow().cmp(read(b)?.borrow())),
        (Operand::BigInt(a), Operand::Number(n)) => cmp_number(read(a)?.borrow(), n),
        (Operand::Number(n), Operand::BigInt(b)) => cmp_number(read(b)?.borrow(), n).map(Ordering::reverse),
        (Operand::Number(m), Operand::Number(n)) => m.partial_cmp(&n),
    })
}

/// The active backend, chosen once from the host's capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Native(NativeBackend),
    Engine(EngineBackend),
    Bridged(BridgedBackend),
}

impl Backend {
    pub fn native() -> Self {
        Backend::Native(NativeBackend)
    }

    pub fn engine() -> Self {
        Backend::Engine(EngineBackend)
    }

    pub fn bridged(constructor: MinimalConstructor) -> Self {
        Backend::Bridged(BridgedBackend::new(constructor))
    }

    fn lib(&self) -> &dyn BigIntLib {
        match self {
            Backend::Native(b) => b,
            Backend::Engine(b) => b,
            Backend::Bridged(b) => b,
        }
    }

    /// `BigInt(value)` for anything convertible to a [`Primitive`]
    pub fn bigint<'a>(&self, value: impl Into<Primitive<'a>>) -> Result<ExtendedInt, BigIntError> {
        self.from_primitive(value.into())
    }
}

macro_rules! forward {
    ($( fn $name:ident(&self $(, $arg:ident : $ty:ty)*) -> $ret:ty; )*) => {
        $(
            fn $name(&self $(, $arg: $ty)*) -> $ret {
                self.lib().$name($($arg),*)
            }
        )*
    };
}

impl BigIntLib for Backend {
    forward! {
        fn kind(&self) -> BackendKind;
        fn is_extended_integer(&self, value: &dyn Any) -> bool;
        fn from_primitive(&self, value: Primitive<'_>) -> Result<ExtendedInt, BigIntError>;
        fn to_string_radix(&self, x: &ExtendedInt, radix: u32) -> Result<String, BigIntError>;
        fn to_number(&self, x: &ExtendedInt) -> Result<f64, BigIntError>;
        fn negate(&self, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn bitwise_complement(&self, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn exponentiate(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn multiply(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn divide(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn remainder(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn add(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn subtract(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn left_shift(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn signed_right_shift(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn compare(&self, x: Operand<'_>, y: Operand<'_>) -> Result<Option<Ordering>, BigIntError>;
        fn bitwise_and(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn bitwise_xor(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn bitwise_or(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn as_int_n(&self, width: i64, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
        fn as_uint_n(&self, width: i64, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_backends() -> Vec<Backend> {
        vec![Backend::native(), Backend::engine()]
    }

    #[test]
    fn test_kind_and_native_flag() {
        assert!(Backend::native().is_backend_native());
        assert!(!Backend::engine().is_backend_native());
        assert_eq!(Backend::engine().kind(), BackendKind::Engine);
    }

    #[test]
    fn test_comparison_helpers() {
        for lib in all_backends() {
            let two = lib.bigint(2).unwrap();
            let three = lib.bigint(3).unwrap();
            assert!(lib.less_than((&two).into(), (&three).into()).unwrap());
            assert!(lib.less_than_or_equal((&two).into(), 2.0.into()).unwrap());
            assert!(lib.greater_than(2.5.into(), (&two).into()).unwrap());
            assert!(lib.greater_than_or_equal((&three).into(), 3.0.into()).unwrap());
            assert!(lib.equal((&three).into(), 3.0.into()).unwrap());
            assert!(lib.not_equal((&three).into(), f64::NAN.into()).unwrap());
            assert!(!lib.equal(f64::NAN.into(), f64::NAN.into()).unwrap());
            assert!(!lib.less_than((&two).into(), f64::NAN.into()).unwrap());
        }
    }

    #[test]
    fn test_foreign_encoding_rejected() {
        let native = Backend::native();
        let engine = Backend::engine();
        let x = engine.bigint(1).unwrap();
        let err = native.add(&x, &x).unwrap_err();
        assert_eq!(err, BigIntError::ForeignEncoding("native"));
        // Conversion through BigInt(x) is the supported route
        let y = native.bigint(&x).unwrap();
        assert_eq!(native.to_string(&y).unwrap(), "1");
    }
}
