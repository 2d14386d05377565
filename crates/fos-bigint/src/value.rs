//! BigInt values
//!
//! One logical integer type with three encodings. A backend only ever
//! produces (and accepts) its own encoding; values from different backends
//! are compared through their decimal text.

use std::any::{Any, TypeId};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::builtins::JsBigInt;
use crate::engine::EngineInt;
use crate::error::BigIntError;

/// Which backend (and therefore which encoding) a value or backend uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// The runtime's built-in `JsBigInt`
    Native,
    /// Values are arbitrary-precision engine integers
    Engine,
    /// An external minimal integer type, bridged through decimal text
    Bridged,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackendKind::Native => "native",
            BackendKind::Engine => "engine",
            BackendKind::Bridged => "bridged",
        })
    }
}

/// An externally supplied integer type that can only be constructed from
/// decimal text and rendered back to it.
///
/// `Display` must produce base-10 text that parses back to the same value.
pub trait MinimalInteger: fmt::Display + fmt::Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
}

/// The constructor of a [`MinimalInteger`] type
#[derive(Clone, Copy)]
pub struct MinimalConstructor {
    name: &'static str,
    type_id: TypeId,
    construct: fn(&str) -> Result<Arc<dyn MinimalInteger>, BigIntError>,
}

fn construct_via_from_str<T>(decimal: &str) -> Result<Arc<dyn MinimalInteger>, BigIntError>
where
    T: MinimalInteger + FromStr,
    T::Err: fmt::Display,
{
    decimal
        .parse::<T>()
        .map(|value| Arc::new(value) as Arc<dyn MinimalInteger>)
        .map_err(BigIntError::not_convertible)
}

impl MinimalConstructor {
    /// Constructor for `T`, building instances with `FromStr`
    pub fn of<T>() -> Self
    where
        T: MinimalInteger + FromStr,
        T::Err: fmt::Display,
    {
        Self {
            name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            construct: construct_via_from_str::<T>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build an instance from decimal text
    pub fn construct(&self, decimal: &str) -> Result<ExtendedInt, BigIntError> {
        (self.construct)(decimal).map(ExtendedInt::Bridged)
    }

    /// `value instanceof Constructor`
    pub fn is_instance(&self, value: &dyn MinimalInteger) -> bool {
        value.as_any().type_id() == self.type_id
    }
}

impl PartialEq for MinimalConstructor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for MinimalConstructor {}

impl fmt::Debug for MinimalConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MinimalConstructor").field(&self.name).finish()
    }
}

/// An arbitrary precision integer in one of the three encodings
#[derive(Debug, Clone)]
pub enum ExtendedInt {
    Native(JsBigInt),
    Engine(EngineInt),
    Bridged(Arc<dyn MinimalInteger>),
}

impl ExtendedInt {
    pub fn kind(&self) -> BackendKind {
        match self {
            ExtendedInt::Native(_) => BackendKind::Native,
            ExtendedInt::Engine(_) => BackendKind::Engine,
            ExtendedInt::Bridged(_) => BackendKind::Bridged,
        }
    }
}

/// Base-10 text, the common currency between encodings
impl fmt::Display for ExtendedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendedInt::Native(v) => fmt::Display::fmt(v, f),
            ExtendedInt::Engine(v) => fmt::Display::fmt(v, f),
            ExtendedInt::Bridged(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Argument to `BigInt(x)`
#[derive(Debug, Clone, Copy)]
pub enum Primitive<'a> {
    Text(&'a str),
    Number(f64),
    Integer(i128),
    Bool(bool),
    BigInt(&'a ExtendedInt),
}

impl<'a> From<&'a str> for Primitive<'a> {
    fn from(s: &'a str) -> Self {
        Primitive::Text(s)
    }
}

impl<'a> From<&'a String> for Primitive<'a> {
    fn from(s: &'a String) -> Self {
        Primitive::Text(s)
    }
}

impl From<f64> for Primitive<'_> {
    fn from(n: f64) -> Self {
        Primitive::Number(n)
    }
}

impl From<bool> for Primitive<'_> {
    fn from(b: bool) -> Self {
        Primitive::Bool(b)
    }
}

impl<'a> From<&'a ExtendedInt> for Primitive<'a> {
    fn from(v: &'a ExtendedInt) -> Self {
        Primitive::BigInt(v)
    }
}

macro_rules! primitive_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Primitive<'_> {
                fn from(n: $t) -> Self {
                    Primitive::Integer(i128::from(n))
                }
            }
        )*
    };
}

primitive_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

/// One side of a comparison: a BigInt or a number
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    BigInt(&'a ExtendedInt),
    Number(f64),
}

impl<'a> From<&'a ExtendedInt> for Operand<'a> {
    fn from(v: &'a ExtendedInt) -> Self {
        Operand::BigInt(v)
    }
}

impl From<f64> for Operand<'_> {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Decimal(String);

    impl fmt::Display for Decimal {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl FromStr for Decimal {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Ok(Decimal(s.to_string()))
        }
    }

    impl MinimalInteger for Decimal {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug)]
    struct Other;

    impl fmt::Display for Other {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("0")
        }
    }

    impl MinimalInteger for Other {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_constructor_identity() {
        let ctor = MinimalConstructor::of::<Decimal>();
        let value = ctor.construct("-12").unwrap();
        assert_eq!(value.to_string(), "-12");
        assert_eq!(value.kind(), BackendKind::Bridged);

        match &value {
            ExtendedInt::Bridged(inner) => assert!(ctor.is_instance(inner.as_ref())),
            other => panic!("expected bridged value, got {other:?}"),
        }
        assert!(!ctor.is_instance(&Other));
        assert_eq!(ctor, MinimalConstructor::of::<Decimal>());
    }

    #[test]
    fn test_display_per_encoding() {
        assert_eq!(ExtendedInt::Native(JsBigInt::from_i64(-5)).to_string(), "-5");
        assert_eq!(ExtendedInt::Engine(EngineInt::from(42)).to_string(), "42");
    }

    #[test]
    fn test_primitive_conversions() {
        assert!(matches!(Primitive::from(7u64), Primitive::Integer(7)));
        assert!(matches!(Primitive::from(true), Primitive::Bool(true)));
        assert!(matches!(Primitive::from("1"), Primitive::Text("1")));
        assert!(matches!(Operand::from(1.5), Operand::Number(n) if n == 1.5));
    }
}
