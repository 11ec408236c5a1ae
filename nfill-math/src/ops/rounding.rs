// nfill - nfill-math
// Module: Rounding and 32-bit Operations
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#[cfg(not(feature = "std"))]
use crate::traits::FloatExt;
use crate::coerce::{to_int32, to_uint32};

/// Integral part of `x`, rounding toward zero. `trunc(±0)` is `±0`.
#[must_use]
pub fn trunc(x: f64) -> f64 {
    if x == 0.0 {
        x
    } else if x < 0.0 {
        x.ceil()
    } else {
        x.floor()
    }
}

/// Nearest single-precision value, widened back to double precision.
#[must_use]
pub fn fround(x: f64) -> f64 {
    f64::from(x as f32)
}

/// `fround` for hosts without 32-bit float storage: a pass-through.
#[must_use]
pub fn fround_identity(x: f64) -> f64 {
    x
}

/// Number of leading zero bits in `ToUint32(x)`; 32 when that is zero.
#[must_use]
pub fn clz32(x: f64) -> u32 {
    to_uint32(x).leading_zeros()
}

/// 32-bit signed multiply with wraparound.
#[must_use]
pub fn imul(x: f64, y: f64) -> i32 {
    to_int32(x).wrapping_mul(to_int32(y))
}
