// nfill - nfill-math
// Module: Numeric Classification
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The `Number` predicates.
//!
//! Unlike the global `isNaN`/`isFinite`, these never coerce: anything that
//! is not of numeric type is simply `false`.

#[cfg(not(feature = "std"))]
use crate::traits::FloatExt;
use crate::{constants::TWO_POW_53, value::Value};

/// `true` iff `value` is a number and not equal to itself.
#[must_use]
#[allow(clippy::eq_op)]
pub fn is_nan(value: &Value) -> bool {
    match value {
        Value::Number(n) => n != n,
        _ => false,
    }
}

/// `true` iff `value` is a number other than NaN and `±∞`.
#[must_use]
#[allow(clippy::eq_op)]
pub fn is_finite(value: &Value) -> bool {
    match value {
        Value::Number(n) => n == n && *n != f64::INFINITY && *n != f64::NEG_INFINITY,
        _ => false,
    }
}

/// `true` iff `value` is a finite number with no fractional part.
#[must_use]
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            *n != f64::INFINITY && *n != f64::NEG_INFINITY && n.floor() == *n
        }
        _ => false,
    }
}

/// `true` iff `value` is an integer strictly between `-2^53` and `2^53`.
#[must_use]
pub fn is_safe_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => *n > -TWO_POW_53 && *n < TWO_POW_53 && n.floor() == *n,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SAFE_INTEGER;

    #[test]
    fn test_is_nan() {
        assert!(is_nan(&Value::from(f64::NAN)));
        assert!(!is_nan(&Value::from(1.0)));
        assert!(!is_nan(&Value::from("NaN")));
        assert!(!is_nan(&Value::Undefined));
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(&Value::from(0.0)));
        assert!(is_finite(&Value::from(-1e308)));
        assert!(!is_finite(&Value::from(f64::INFINITY)));
        assert!(!is_finite(&Value::from(f64::NEG_INFINITY)));
        assert!(!is_finite(&Value::from(f64::NAN)));
        assert!(!is_finite(&Value::from("5")));
        assert!(!is_finite(&Value::Null));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(&Value::from(4.0)));
        assert!(is_integer(&Value::from(-0.0)));
        assert!(is_integer(&Value::from(1e300)));
        assert!(!is_integer(&Value::from(4.5)));
        assert!(!is_integer(&Value::from(f64::INFINITY)));
        assert!(!is_integer(&Value::from(f64::NAN)));
        assert!(!is_integer(&Value::from("4")));
        assert!(!is_integer(&Value::Boolean(true)));
    }

    #[test]
    fn test_is_safe_integer() {
        assert!(is_safe_integer(&Value::from(MAX_SAFE_INTEGER)));
        assert!(is_safe_integer(&Value::from(-MAX_SAFE_INTEGER)));
        assert!(!is_safe_integer(&Value::from(TWO_POW_53)));
        assert!(!is_safe_integer(&Value::from(-TWO_POW_53)));
        assert!(!is_safe_integer(&Value::from(1.5)));
        assert!(!is_safe_integer(&Value::from(f64::NAN)));
        assert!(!is_safe_integer(&Value::from(f64::INFINITY)));
        assert!(!is_safe_integer(&Value::from("1")));
    }
}
