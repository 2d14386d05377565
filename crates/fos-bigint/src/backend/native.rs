//! Native backend
//!
//! Every operation maps directly onto the built-in `JsBigInt` operator or
//! method. No extra validation happens here: the built-in raises the same
//! RangeErrors ECMAScript does, and the other backends match it.

use std::any::Any;
use std::cmp::Ordering;

use crate::backend::{BigIntLib, compare_operands};
use crate::builtins::JsBigInt;
use crate::error::BigIntError;
use crate::value::{BackendKind, ExtendedInt, Operand, Primitive};

/// Pass-through to the runtime's built-in BigInt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeBackend;

fn native(x: &ExtendedInt) -> Result<&JsBigInt, BigIntError> {
    match x {
        ExtendedInt::Native(v) => Ok(v),
        _ => Err(BigIntError::ForeignEncoding("native")),
    }
}

fn unary(x: &ExtendedInt, op: impl FnOnce(&JsBigInt) -> JsBigInt) -> Result<ExtendedInt, BigIntError> {
    Ok(ExtendedInt::Native(op(native(x)?)))
}

fn binary(
    x: &ExtendedInt,
    y: &ExtendedInt,
    op: impl FnOnce(&JsBigInt, &JsBigInt) -> Result<JsBigInt, BigIntError>,
) -> Result<ExtendedInt, BigIntError> {
    op(native(x)?, native(y)?).map(ExtendedInt::Native)
}

impl BigIntLib for NativeBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Native
    }

    fn is_extended_integer(&self, value: &dyn Any) -> bool {
        matches!(value.downcast_ref::<ExtendedInt>(), Some(ExtendedInt::Native(_)))
    }

    fn from_primitive(&self, value: Primitive<'_>) -> Result<ExtendedInt, BigIntError> {
        let v = match value {
            Primitive::Text(s) => JsBigInt::parse(s)?,
            Primitive::Number(n) => JsBigInt::from_f64(n)?,
            Primitive::Integer(n) => JsBigInt::from_i128(n),
            Primitive::Bool(b) => JsBigInt::from_u64(u64::from(b)),
            Primitive::BigInt(ExtendedInt::Native(v)) => v.clone(),
            Primitive::BigInt(other) => JsBigInt::parse(&other.to_string())?,
        };
        Ok(ExtendedInt::Native(v))
    }

    fn to_string_radix(&self, x: &ExtendedInt, radix: u32) -> Result<String, BigIntError> {
        native(x)?.to_string_radix(radix)
    }

    fn to_number(&self, x: &ExtendedInt) -> Result<f64, BigIntError> {
        Ok(native(x)?.to_f64())
    }

    fn negate(&self, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        unary(x, JsBigInt::negate)
    }

    fn bitwise_complement(&self, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        unary(x, |v| !v)
    }

    fn exponentiate(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, JsBigInt::checked_pow)
    }

    fn multiply(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, |a, b| Ok(a * b))
    }

    fn divide(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, JsBigInt::checked_div)
    }

    fn remainder(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, JsBigInt::checked_rem)
    }

    fn add(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, |a, b| Ok(a + b))
    }

    fn subtract(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, |a, b| Ok(a - b))
    }

    fn left_shift(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, JsBigInt::shl)
    }

    fn signed_right_shift(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, JsBigInt::shr)
    }

    fn compare(&self, x: Operand<'_>, y: Operand<'_>) -> Result<Option<Ordering>, BigIntError> {
        compare_operands(x, y, native, JsBigInt::partial_cmp_f64)
    }

    fn bitwise_and(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, |a, b| Ok(a & b))
    }

    fn bitwise_xor(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, |a, b| Ok(a ^ b))
    }

    fn bitwise_or(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, |a, b| Ok(a | b))
    }

    fn as_int_n(&self, width: i64, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        native(x)?.as_int_n(width).map(ExtendedInt::Native)
    }

    fn as_uint_n(&self, width: i64, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        native(x)?.as_uint_n(width).map(ExtendedInt::Native)
    }
}
