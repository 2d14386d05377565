//! Integer literal grammar
//!
//! Text accepted by `BigInt(string)`: optional surrounding whitespace, then
//! either a signed decimal literal or an unsigned `0x`/`0o`/`0b` literal.
//! Empty (or all-whitespace) text is zero.

use crate::error::BigIntError;

/// A validated literal, borrowed from the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Literal<'a> {
    pub negative: bool,
    pub radix: u32,
    /// Non-empty, every char a valid digit in `radix`
    pub digits: &'a str,
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Parse an integer literal
pub(crate) fn parse(text: &str) -> Result<Literal<'_>, BigIntError> {
    let s = text.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return Ok(Literal { negative: false, radix: 10, digits: "0" });
    }

    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .iter()
        .find_map(|&(prefix, radix)| s.strip_prefix(prefix).map(|rest| (radix, rest)));

    let (negative, radix, digits) = match prefixed {
        Some((radix, rest)) => (false, radix, rest),
        None => match s.as_bytes()[0] {
            b'-' => (true, 10, &s[1..]),
            b'+' => (false, 10, &s[1..]),
            _ => (false, 10, s),
        },
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(BigIntError::not_convertible(format!("{text:?}")));
    }

    Ok(Literal { negative, radix, digits })
}

/// Plain decimal text as an integer's `Display` prints it: an optional
/// `-` and at least one digit, nothing else.
pub(crate) fn parse_decimal(text: &str) -> Result<Literal<'_>, BigIntError> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BigIntError::not_convertible(format!("{text:?}")));
    }
    Ok(Literal { negative, radix: 10, digits })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse("  -42\n").unwrap(), Literal { negative: true, radix: 10, digits: "42" });
        assert_eq!(parse("+7").unwrap(), Literal { negative: false, radix: 10, digits: "7" });
        assert_eq!(parse("").unwrap().digits, "0");
        assert_eq!(parse(" \t ").unwrap().digits, "0");
    }

    #[test]
    fn test_prefixed() {
        assert_eq!(parse("0xFF").unwrap(), Literal { negative: false, radix: 16, digits: "FF" });
        assert_eq!(parse("0o17").unwrap().radix, 8);
        assert_eq!(parse("0B101").unwrap().radix, 2);
    }

    #[test]
    fn test_rejects() {
        for bad in ["-", "+", "12n", "1_000", "1.5", "1e3", "-0x10", "0x", "0b2", "abc", "--1"] {
            assert!(parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_decimal_only() {
        assert_eq!(parse_decimal("-120").unwrap(), Literal { negative: true, radix: 10, digits: "120" });
        assert_eq!(parse_decimal("0").unwrap().digits, "0");
        for bad in ["0x10", " 1", "+1", "", "-", "1e3", "0b1"] {
            assert!(parse_decimal(bad).is_err(), "{bad:?}");
        }
    }
}
