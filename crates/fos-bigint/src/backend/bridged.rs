//! Bridged backend
//!
//! For hosts whose integer type can only be built from decimal text and
//! printed back. Each operation renders its operands to text, rebuilds
//! them as engine integers, computes with the engine, and constructs a new
//! host instance from the result's text: two full decimal conversions per
//! operation.
//!
//! The engine is never trusted with contract checks here. Radix, width and
//! zero divisors are validated before the engine is called, and after the
//! operands are decoded.

use std::any::Any;
use std::cmp::Ordering;

use num_traits::Zero;

use crate::backend::engine::engine_from_primitive;
use crate::backend::{BigIntLib, compare_operands};
use crate::engine::{self, EngineInt};
use crate::error::{BigIntError, check_radix, check_width};
use crate::value::{BackendKind, ExtendedInt, MinimalConstructor, Operand, Primitive};

/// Decimal-text bridge between a minimal host integer and the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgedBackend {
    constructor: MinimalConstructor,
}

impl BridgedBackend {
    pub fn new(constructor: MinimalConstructor) -> Self {
        Self { constructor }
    }

    pub fn constructor(&self) -> MinimalConstructor {
        self.constructor
    }

    /// Host instance -> decimal text -> engine integer
    fn decode(&self, x: &ExtendedInt) -> Result<EngineInt, BigIntError> {
        match x {
            ExtendedInt::Bridged(v) if self.constructor.is_instance(v.as_ref()) => {
                engine::parse_decimal(&v.to_string())
            }
            _ => Err(BigIntError::ForeignEncoding("bridged")),
        }
    }

    /// Engine integer -> decimal text -> host instance
    fn encode(&self, v: &EngineInt) -> Result<ExtendedInt, BigIntError> {
        self.constructor.construct(&v.to_string())
    }

    fn bridge_unary(
        &self,
        op: &'static str,
        x: &ExtendedInt,
        f: impl FnOnce(&EngineInt) -> Result<EngineInt, BigIntError>,
    ) -> Result<ExtendedInt, BigIntError> {
        tracing::trace!(op, constructor = self.constructor.name(), "bridging BigInt operation");
        let x = self.decode(x)?;
        self.encode(&f(&x)?)
    }

    fn bridge_binary(
        &self,
        op: &'static str,
        x: &ExtendedInt,
        y: &ExtendedInt,
        f: impl FnOnce(&EngineInt, &EngineInt) -> Result<EngineInt, BigIntError>,
    ) -> Result<ExtendedInt, BigIntError> {
        tracing::trace!(op, constructor = self.constructor.name(), "bridging BigInt operation");
        let x = self.decode(x)?;
        let y = self.decode(y)?;
        self.encode(&f(&x, &y)?)
    }
}

fn nonzero(divisor: &EngineInt) -> Result<&EngineInt, BigIntError> {
    if divisor.is_zero() {
        return Err(BigIntError::DivisionByZero);
    }
    Ok(divisor)
}

impl BigIntLib for BridgedBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Bridged
    }

    fn is_extended_integer(&self, value: &dyn Any) -> bool {
        match value.downcast_ref::<ExtendedInt>() {
            Some(ExtendedInt::Bridged(v)) => self.constructor.is_instance(v.as_ref()),
            _ => false,
        }
    }

    fn from_primitive(&self, value: Primitive<'_>) -> Result<ExtendedInt, BigIntError> {
        self.encode(&engine_from_primitive(value)?)
    }

    fn to_string_radix(&self, x: &ExtendedInt, radix: u32) -> Result<String, BigIntError> {
        let x = self.decode(x)?;
        Ok(engine::to_string_radix(&x, check_radix(radix)?))
    }

    fn to_number(&self, x: &ExtendedInt) -> Result<f64, BigIntError> {
        Ok(engine::to_number(&self.decode(x)?))
    }

    fn negate(&self, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_unary("negate", x, |v| Ok(engine::unary_minus(v)))
    }

    fn bitwise_complement(&self, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_unary("bitwise_complement", x, |v| Ok(engine::bitwise_not(v)))
    }

    fn exponentiate(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_binary("exponentiate", x, y, engine::exponentiate)
    }

    fn multiply(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_binary("multiply", x, y, |a, b| Ok(engine::multiply(a, b)))
    }

    fn divide(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_binary("divide", x, y, |a, b| {
            engine::divide(a, nonzero(b)?).ok_or(BigIntError::DivisionByZero)
        })
    }

    fn remainder(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_binary("remainder", x, y, |a, b| {
            engine::remainder(a, nonzero(b)?).ok_or(BigIntError::DivisionByZero)
        })
    }

    fn add(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_binary("add", x, y, |a, b| Ok(engine::add(a, b)))
    }

    fn subtract(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_binary("subtract", x, y, |a, b| Ok(engine::subtract(a, b)))
    }

    fn left_shift(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_binary("left_shift", x, y, engine::left_shift)
    }

    fn signed_right_shift(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_binary("signed_right_shift", x, y, engine::signed_right_shift)
    }

    fn compare(&self, x: Operand<'_>, y: Operand<'_>) -> Result<Option<Ordering>, BigIntError> {
        compare_operands(x, y, |v| self.decode(v), engine::compare_number)
    }

    fn bitwise_and(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_binary("bitwise_and", x, y, |a, b| Ok(engine::bitwise_and(a, b)))
    }

    fn bitwise_xor(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_binary("bitwise_xor", x, y, |a, b| Ok(engine::bitwise_xor(a, b)))
    }

    fn bitwise_or(&self, x: &ExtendedInt, y: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_binary("bitwise_or", x, y, |a, b| Ok(engine::bitwise_or(a, b)))
    }

    fn as_int_n(&self, width: i64, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_unary("as_int_n", x, |v| engine::as_int_n(check_width(width)?, v))
    }

    fn as_uint_n(&self, width: i64, x: &ExtendedInt) -> Result<ExtendedInt, BigIntError> {
        self.bridge_unary("as_uint_n", x, |v| engine::as_uint_n(check_width(width)?, v))
    }
}
