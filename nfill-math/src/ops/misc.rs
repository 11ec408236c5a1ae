// nfill - nfill-math
// Module: Sign, Cube Root and Euclidean Norm
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#[cfg(not(feature = "std"))]
use crate::traits::FloatExt;

/// Sign of `x`: `-1`, `1`, NaN for NaN, and `x` itself for either zero.
#[must_use]
pub fn sign(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        x
    }
}

/// Cube root. Negative arguments go through `-(-x)^(1/3)` since a
/// fractional power of a negative base is NaN.
#[must_use]
pub fn cbrt(x: f64) -> f64 {
    if x == 0.0 {
        x
    } else if x < 0.0 {
        -(-x).powf(1.0 / 3.0)
    } else {
        x.powf(1.0 / 3.0)
    }
}

/// Euclidean norm of all operands: the square root of the sum of squares.
///
/// Any number of operands is accepted; an empty slice yields `+0`.
#[must_use]
pub fn hypot(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |sum, v| sum + v * v).sqrt()
}
