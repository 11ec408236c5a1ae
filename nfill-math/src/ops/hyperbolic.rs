// nfill - nfill-math
// Module: Hyperbolic Functions
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#[cfg(not(feature = "std"))]
use crate::traits::FloatExt;

/// Hyperbolic sine. `sinh(-0)` is `-0`.
#[must_use]
pub fn sinh(x: f64) -> f64 {
    if x == 0.0 {
        return x;
    }
    let exp = x.exp();
    exp / 2.0 - 0.5 / exp
}

/// Hyperbolic cosine.
#[must_use]
pub fn cosh(x: f64) -> f64 {
    let exp = x.exp();
    exp / 2.0 + 0.5 / exp
}

/// Hyperbolic tangent. `tanh(±0)` is `±0`.
///
/// The exponent argument is kept non-positive on both sides so large
/// magnitudes saturate to `±1` instead of overflowing to `∞/∞`.
#[must_use]
pub fn tanh(x: f64) -> f64 {
    if x == 0.0 {
        return x;
    }
    if x < 0.0 {
        let exp = (2.0 * x).exp();
        (exp - 1.0) / (exp + 1.0)
    } else {
        let exp = (-2.0 * x).exp();
        (1.0 - exp) / (1.0 + exp)
    }
}

/// Inverse hyperbolic sine. `asinh(-∞)` is `-∞`; the formula alone would
/// give `ln(∞ - ∞) = NaN`.
#[must_use]
pub fn asinh(x: f64) -> f64 {
    if x == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    (x + (x * x + 1.0).sqrt()).ln()
}

/// Inverse hyperbolic cosine. NaN below 1.
#[must_use]
pub fn acosh(x: f64) -> f64 {
    if x >= 1.0 {
        (x + (x * x - 1.0).sqrt()).ln()
    } else {
        f64::NAN
    }
}

/// Inverse hyperbolic tangent. NaN outside `[-1, 1]`; `±∞` at the
/// boundaries.
#[must_use]
pub fn atanh(x: f64) -> f64 {
    if x >= -1.0 && x <= 1.0 {
        ((1.0 + x) / (1.0 - x)).ln() / 2.0
    } else {
        f64::NAN
    }
}
