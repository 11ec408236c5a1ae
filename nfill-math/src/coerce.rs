// nfill - nfill-math
// Module: Type Coercions
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The abstract conversions the numeric standard applies to arguments:
//! `ToNumber`, `ToInt32`, `ToUint32` and `Number::toString`.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(not(feature = "std"))]
use crate::traits::FloatExt;
use crate::value::Value;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// `WhiteSpace` and `LineTerminator` code points, including the BOM.
pub(crate) fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// `ToNumber` for any primitive value.
#[must_use]
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Boolean(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::String(s) => string_to_number(s),
    }
}

/// `StringToNumber`: the whole string (minus surrounding whitespace) must be
/// a numeric literal, otherwise the result is NaN. The empty string is `0`.
#[must_use]
pub fn string_to_number(s: &str) -> f64 {
    let literal = s.trim_matches(is_js_whitespace);
    if literal.is_empty() {
        return 0.0;
    }

    match literal {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|p| literal.strip_prefix(*p)) {
            return parse_radix_digits(digits, radix).unwrap_or(f64::NAN);
        }
    }

    if scan_decimal_literal(literal) == literal.len() {
        literal.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Length in bytes of the longest prefix of `s` that is a decimal literal:
/// optional sign, digits with an optional fraction, optional exponent.
/// Returns 0 when no digit is present.
pub(crate) fn scan_decimal_literal(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }

    let int_start = i;
    i = digits_from(i);
    let mut mantissa_digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let frac_end = digits_from(frac_start);
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits == 0 {
            return 0;
        }
        i = frac_end;
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }

    i
}

/// All of `digits` in `radix`, or `None` if empty or any digit is invalid.
fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// `ToUint32`: NaN and infinities become 0, everything else is truncated
/// and reduced modulo 2^32.
#[must_use]
pub fn to_uint32(x: f64) -> u32 {
    if !x.is_finite() {
        return 0;
    }
    let mut r = x.trunc() % TWO_POW_32;
    if r < 0.0 {
        r += TWO_POW_32;
    }
    r as u32
}

/// `ToInt32`: `ToUint32` reinterpreted as two's complement.
#[must_use]
pub fn to_int32(x: f64) -> i32 {
    to_uint32(x) as i32
}

/// `Number::toString` with radix 10.
#[must_use]
pub fn number_to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `{:e}` yields the shortest round-tripping digits, e.g. "1.2345e3".
    let scientific = format!("{x:e}");
    let scientific = scientific.trim_start_matches('-');
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific, "0"));
    let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let digits = String::from_utf8(digits).unwrap_or_default();
    let k = digits.len() as i32;
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if n - 1 >= 0 { '+' } else { '-' };
        if rest.is_empty() {
            format!("{first}e{sign}{}", (n - 1).abs())
        } else {
            format!("{first}.{rest}e{sign}{}", (n - 1).abs())
        }
    };

    if x < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// `ToString` for any primitive value.
#[must_use]
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => s.clone(),
    }
}
