// nfill - nfill-math
// Module: Numeric Constants
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The `Number` constants.

/// Difference between 1 and the next representable double.
#[allow(clippy::excessive_precision)]
pub const EPSILON: f64 = 2.220_446_049_250_313_080_847_263_336_181_6e-16;

/// Largest integer `n` such that `n` and `n + 1` are both exactly
/// representable: 2^53 - 1.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Negation of [`MAX_SAFE_INTEGER`].
pub const MIN_SAFE_INTEGER: f64 = -9_007_199_254_740_991.0;

/// 2^53, the first integer magnitude that is no longer safe.
pub(crate) const TWO_POW_53: f64 = 9_007_199_254_740_992.0;
