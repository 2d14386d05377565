//! Engine-backed backend
//!
//! Used when the host integer *is* the arbitrary-precision engine's type.
//! Values are handed to the engine as they are, with no text round trip.

use std::any::Any;
use std::cmp::Ordering;

use crate::backend::{BigIntLib, compare_operands};
use crate::engine::{self, EngineInt};
use crate::error::{BigIntError, check_radix, check_width};
use crate::value::{BackendKind, ExtendedInt, Operand, Primitive};

/// Direct calls into the arbitrary-precision engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineBackend;

fn engine_int(x: &ExtendedInt) -> Result<&EngineInt, BigIntError> {
    match x {
        ExtendedInt::Engine(v) => Ok(v),
        _ => Err(BigIntError::ForeignEncoding("engine")),
    }
}

fn binary(
    x: &ExtendedInt,
    y: &ExtendedInt,
    op: impl FnOnce(&EngineInt, &EngineInt) -> EngineInt,
) -> Result<ExtendedInt, BigIntError> {
    Ok(ExtendedInt::Engine(op(engine_int(x)?, engine_int(y)?)))
}

fn checked_binary(
    x: &ExtendedInt,
    y: &ExtendedInt,
    op: impl FnOnce(&EngineInt, &EngineInt) -> Result<EngineInt, BigIntError>,
) -> Result<ExtendedInt, BigIntError> {
    op(engine_int(x)?, engine_int(y)?).map(ExtendedInt::Engine)
}

/// `BigInt(value)` in the engine's own type
pub(crate) fn engine_from_primitive(value: Primitive<'_>) -> Result<EngineInt, BigIntError> {
    match value {
        Primitive::Text(s) => engine::parse(s),
        Primitive::Number(n) => engine::from_f64(n),
        Primitive::Integer(n) => Ok(EngineInt::from(n)),
        Primitive::Bool(b) => Ok(EngineInt::from(u8::from(b))),
        Primitive::BigInt(ExtendedInt::Engine(v)) => Ok(v.clone()),
        Primitive::BigInt(other) => engine::parse(&other.to_string()),
    }
}

impl BigIntLib for EngineBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Engine
    }

    fn is_extended_integer(&self, value: &dyn Any) -> bool {
        matches!(value.downcast_ref::<ExtendedInt>(), Some(ExtendedInt::Engine(_)))
    }

    fn from_primitive(&self, value: Primitive<'_>) -> Result<ExtendedInt, BigIntError> {
        engine_from_primitive(value).map(ExtendedInt::Engine)
    }

    fn to_string_radix(&self, x: &ExtendedInt, radix: u32) -> Result<String, BigIntError> {
        let x = engine_int(x)?;
        Ok(engine::to_string_radix(x, check_radix(radix)?))
    }

    fn to_number(&self, x: &ExtendedInt) -> Result<f64, BigIntError> {
        engine_int(x).map(engine::to_number)
    }

    fn negate(&self, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        engine_int(x).map(|v| ExtendedInt::Engine(engine::unary_minus(v)))
    }

    fn bitwise_complement(&self, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        engine_int(x).map(|v| ExtendedInt::Engine(engine::bitwise_not(v)))
    }

    fn exponentiate(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        checked_binary(x, y, engine::exponentiate)
    }

    fn multiply(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, engine::multiply)
    }

    fn divide(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        checked_binary(x, y, |a, b| engine::divide(a, b).ok_or(BigIntError::DivisionByZero))
    }

    fn remainder(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        checked_binary(x, y, |a, b| engine::remainder(a, b).ok_or(BigIntError::DivisionByZero))
    }

    fn add(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, engine::add)
    }

    fn subtract(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, engine::subtract)
    }

    fn left_shift(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        checked_binary(x, y, engine::left_shift)
    }

    fn signed_right_shift(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        checked_binary(x, y, engine::signed_right_shift)
    }

    fn compare(&self, x: Operand<'_>, y: Operand<'_>) -> Result<Option<Ordering>, BigIntError> {
        // Numbers go to the engine's mixed comparison untouched
        compare_operands(x, y, engine_int, engine::compare_number)
    }

    fn bitwise_and(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, engine::bitwise_and)
    }

    fn bitwise_xor(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, engine::bitwise_xor)
    }

    fn bitwise_or(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        binary(x, y, engine::bitwise_or)
    }

    fn as_int_n(&self, width: i64, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        let x = engine_int(x)?;
        engine::as_int_n(check_width(width)?, x).map(ExtendedInt::Engine)
    }

    fn as_uint_n(&self, width: i64, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        let x = engine_int(x)?;
        engine::as_uint_n(check_width(width)?, x).map(ExtendedInt::Engine)
    }
}
