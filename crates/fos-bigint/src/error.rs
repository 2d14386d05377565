//! BigInt errors
//!
//! Every backend raises the same variant for the same invalid input.

/// Largest bit length a BigInt result may have (2^30, the V8/JSBI limit).
pub const MAX_BIT_LENGTH: u64 = 1 << 30;

/// BigInt operation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    #[error("RangeError: toString() radix must be between 2 and 36, got {0}")]
    InvalidRadix(u32),

    #[error("RangeError: bit width must be non-negative, got {0}")]
    NegativeWidth(i64),

    #[error("RangeError: Division by zero")]
    DivisionByZero,

    #[error("RangeError: Exponent must be non-negative")]
    NegativeExponent,

    #[error("RangeError: Maximum BigInt size exceeded")]
    ResultTooLarge,

    #[error("Cannot convert {0} to a BigInt")]
    NotConvertible(String),

    #[error("TypeError: BigInt of a different encoding passed to the {0} backend")]
    ForeignEncoding(&'static str),
}

/// Error kind tag, for comparing errors across backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidRadix,
    NegativeWidth,
    DivisionByZero,
    NegativeExponent,
    ResultTooLarge,
    NotConvertible,
    ForeignEncoding,
}

impl BigIntError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRadix(_) => ErrorKind::InvalidRadix,
            Self::NegativeWidth(_) => ErrorKind::NegativeWidth,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::NegativeExponent => ErrorKind::NegativeExponent,
            Self::ResultTooLarge => ErrorKind::ResultTooLarge,
            Self::NotConvertible(_) => ErrorKind::NotConvertible,
            Self::ForeignEncoding(_) => ErrorKind::ForeignEncoding,
        }
    }

    /// Would a JavaScript host surface this as a `RangeError`?
    pub fn is_range_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidRadix
                | ErrorKind::NegativeWidth
                | ErrorKind::DivisionByZero
                | ErrorKind::NegativeExponent
                | ErrorKind::ResultTooLarge
        )
    }

    pub(crate) fn not_convertible(what: impl std::fmt::Display) -> Self {
        Self::NotConvertible(what.to_string())
    }
}

/// Validate a `toString` radix
pub(crate) fn check_radix(radix: u32) -> Result<u32, BigIntError> {
    if (2..=36).contains(&radix) {
        Ok(radix)
    } else {
        Err(BigIntError::InvalidRadix(radix))
    }
}

/// Validate an `asIntN`/`asUintN` width
pub(crate) fn check_width(width: i64) -> Result<u64, BigIntError> {
    u64::try_from(width).map_err(|_| BigIntError::NegativeWidth(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_bounds() {
        assert_eq!(check_radix(2), Ok(2));
        assert_eq!(check_radix(36), Ok(36));
        assert_eq!(check_radix(1), Err(BigIntError::InvalidRadix(1)));
        assert_eq!(check_radix(37), Err(BigIntError::InvalidRadix(37)));
    }

    #[test]
    fn test_width_bounds() {
        assert_eq!(check_width(0), Ok(0));
        assert_eq!(check_width(-1).unwrap_err().kind(), ErrorKind::NegativeWidth);
    }

    #[test]
    fn test_range_errors() {
        assert!(BigIntError::DivisionByZero.is_range_error());
        assert!(!BigIntError::NotConvertible("1.5".into()).is_range_error());
        assert!(!BigIntError::ForeignEncoding("native").is_range_error());
    }
}
