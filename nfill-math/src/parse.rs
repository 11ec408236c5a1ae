// nfill - nfill-math
// Module: Global Parse Routines
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The global `parseFloat` and `parseInt` routines.
//!
//! Hosts expose these as global functions; `Number.parseFloat` and
//! `Number.parseInt` are the very same functions re-exported, so the
//! installer aliases whatever the host's globals are. The reference host in
//! `nfill-host` uses these implementations as its globals.

use crate::{
    coerce::{is_js_whitespace, scan_decimal_literal, to_display_string, to_int32, to_number},
    value::Value,
};

/// Longest numeric prefix of `input` after leading whitespace, or NaN.
#[must_use]
pub fn parse_float(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(is_js_whitespace);

    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    match scan_decimal_literal(trimmed) {
        0 => f64::NAN,
        end => trimmed[..end].parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Integer prefix of `input` in `radix`, or NaN.
///
/// A radix of 0 means 10, or 16 when the digits start with `0x`/`0X`.
/// Radixes outside `2..=36` yield NaN.
#[must_use]
pub fn parse_int(input: &str, radix: i32) -> f64 {
    let trimmed = input.trim_start_matches(is_js_whitespace);

    let (sign, mut digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    let mut radix = radix;
    let mut strip_prefix = true;
    if radix != 0 {
        if !(2..=36).contains(&radix) {
            return f64::NAN;
        }
        if radix != 16 {
            strip_prefix = false;
        }
    } else {
        radix = 10;
    }

    if strip_prefix {
        if let Some(rest) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            digits = rest;
            radix = 16;
        }
    }

    let radix = radix as u32;
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(digits.len(), |(i, _)| i);
    if end == 0 {
        return f64::NAN;
    }
    let digits = &digits[..end];

    let magnitude = if radix == 10 {
        digits.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        digits.chars().fold(0.0, |acc, c| {
            acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
        })
    };
    sign * magnitude
}

/// `parseFloat(string)` over host arguments.
#[must_use]
pub fn parse_float_routine(args: &[Value]) -> Value {
    let input = to_display_string(args.first().unwrap_or(&Value::Undefined));
    Value::Number(parse_float(&input))
}

/// `parseInt(string, radix)` over host arguments.
#[must_use]
pub fn parse_int_routine(args: &[Value]) -> Value {
    let input = to_display_string(args.first().unwrap_or(&Value::Undefined));
    let radix = to_int32(to_number(args.get(1).unwrap_or(&Value::Undefined)));
    Value::Number(parse_int(&input, radix))
}
