//! Display formatting for decoded calls.
//!
//! Integer arguments are normalised to decimal and large ones gain a short
//! magnitude hint: `1000000` and `0x0f4240` both become `1000000 [1e6]`.

use crate::rpc::types::{DecodedCall, RawArg};
use crate::utils::config::PLAIN_NUMBER_MAX_DIGITS;
use num_bigint::{BigInt, BigUint, Sign};

/// `name(arg, arg, ...)`
pub fn format_call(call: &DecodedCall) -> String {
    format!("{}({})", call.function_name, format_args_list(&call.raw_args))
}

/// Format one argument; nested lists render as tuples
pub fn format_arg(arg: &RawArg) -> String {
    match arg {
        RawArg::Scalar(value) => format_scalar(value),
        RawArg::List(items) => format!("({})", format_args_list(items)),
    }
}

/// Integers render in decimal; seven or more digits add `[<sign><digit>e<exponent>]`
///
/// Anything [`parse_integer`] rejects is returned unchanged.
pub fn format_scalar(value: &str) -> String {
    let Some(number) = parse_integer(value) else {
        return value.to_string();
    };

    let digits = number.magnitude().to_string();
    if digits.len() <= PLAIN_NUMBER_MAX_DIGITS {
        return number.to_string();
    }

    let exponent = digits.len() - 1;
    let sign = if number.sign() == Sign::Minus { "-" } else { "" };

    format!("{} [{}{}e{}]", number, sign, &digits[..1], exponent)
}

/// Parse an integer literal of arbitrary width
///
/// Accepts an optionally signed decimal literal, or an unsigned `0x`, `0o`
/// or `0b` literal. Surrounding whitespace is ignored and a blank value is
/// zero. Separators, exponents and fractions are rejected.
pub fn parse_integer(value: &str) -> Option<BigInt> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(BigInt::default());
    }

    let (sign, radix, digits) = match trimmed.get(..2) {
        Some("0x" | "0X") => (Sign::Plus, 16, &trimmed[2..]),
        Some("0o" | "0O") => (Sign::Plus, 8, &trimmed[2..]),
        Some("0b" | "0B") => (Sign::Plus, 2, &trimmed[2..]),
        _ => match trimmed.as_bytes()[0] {
            b'-' => (Sign::Minus, 10, &trimmed[1..]),
            b'+' => (Sign::Plus, 10, &trimmed[1..]),
            _ => (Sign::Plus, 10, trimmed),
        },
    };

    // parse_bytes tolerates `_`, so check the digits first
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix)?;
    Some(BigInt::from_biguint(sign, magnitude))
}

fn format_args_list(args: &[RawArg]) -> String {
    args.iter().map(format_arg).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_scalar_boundary() {
        assert_eq!(format_scalar("999999"), "999999");
        assert_eq!(format_scalar("1000000"), "1000000 [1e6]");
        assert_eq!(format_scalar("-2500000"), "-2500000 [-2e6]");
        assert_eq!(format_scalar("-999999"), "-999999");
    }

    #[test]
    fn test_format_scalar_wide_values() {
        let max_uint = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        assert_eq!(format_scalar(max_uint), format!("{} [1e77]", max_uint));
        assert_eq!(format_scalar("1000000000000000000"), "1000000000000000000 [1e18]");
    }

    #[test]
    fn test_format_scalar_normalises_decimal() {
        assert_eq!(format_scalar("0000123"), "123");
        assert_eq!(format_scalar("+42"), "42");
        assert_eq!(format_scalar("-0"), "0");
        assert_eq!(format_scalar(" 7 "), "7");
        assert_eq!(format_scalar(""), "0");
    }

    #[test]
    fn test_format_scalar_prefixed_literals() {
        assert_eq!(format_scalar("0x0F4240"), "1000000 [1e6]");
        assert_eq!(format_scalar("0xdEaD"), "57005");
        assert_eq!(format_scalar("0o17"), "15");
        assert_eq!(format_scalar("0B101"), "5");
        assert_eq!(
            format_scalar("0x39BF2eFF94201cfAA471932655404F63315147a4"),
            "329676010403927112353019490694504727644906538916 [3e47]"
        );
    }

    #[test]
    fn test_format_scalar_non_numeric() {
        for value in ["true", "-", "0x", "-0x10", "1_000", "1e6", "1.5", "0xzz", "abc"] {
            assert_eq!(format_scalar(value), value);
        }
    }

    #[test]
    fn test_parse_integer_sign() {
        assert_eq!(parse_integer("-2500000"), Some(BigInt::from(-2_500_000)));
        assert_eq!(parse_integer("0xff"), Some(BigInt::from(255)));
        assert_eq!(parse_integer("+-1"), None);
    }

    #[test]
    fn test_format_call_nested() {
        let call = DecodedCall {
            function_name: "deposit".to_string(),
            raw_args: vec![
                RawArg::Scalar("5000000".to_string()),
                RawArg::List(vec![
                    RawArg::Scalar("1".to_string()),
                    RawArg::List(vec![RawArg::Scalar("abc".to_string())]),
                ]),
            ],
        };
        assert_eq!(format_call(&call), "deposit(5000000 [5e6], (1, (abc)))");
    }

    #[test]
    fn test_format_call_no_args() {
        let call = DecodedCall {
            function_name: "pause".to_string(),
            raw_args: vec![],
        };
        assert_eq!(format_call(&call), "pause()");
    }
}
