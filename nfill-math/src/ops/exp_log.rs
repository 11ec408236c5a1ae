// nfill - nfill-math
// Module: Exponentials and Logarithms
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use core::f64::consts::{LN_10, LN_2};

#[cfg(not(feature = "std"))]
use crate::traits::FloatExt;

/// `e^x - 1`. `expm1(-0)` is `-0`; `exp(-0) - 1` would be `+0`.
#[must_use]
pub fn expm1(x: f64) -> f64 {
    if x == 0.0 {
        return x;
    }
    x.exp() - 1.0
}

/// Base-10 logarithm via the natural logarithm.
#[must_use]
pub fn log10(x: f64) -> f64 {
    x.ln() / LN_10
}

/// Base-2 logarithm via the natural logarithm.
#[must_use]
pub fn log2(x: f64) -> f64 {
    x.ln() / LN_2
}

/// `ln(1 + x)`. `log1p(-0)` is `-0`; `ln(1 + -0)` would be `+0`.
#[must_use]
pub fn log1p(x: f64) -> f64 {
    if x == 0.0 {
        return x;
    }
    (1.0 + x).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_bits::FloatBits64;

    #[test]
    fn test_expm1() {
        assert!(FloatBits64::from_float(expm1(-0.0)).is_negative_zero());
        assert!(FloatBits64::from_float(expm1(0.0)).is_positive_zero());
        assert_eq!(expm1(f64::NEG_INFINITY), -1.0);
        assert_eq!(expm1(f64::INFINITY), f64::INFINITY);
        assert!((expm1(1.0) - 1.718_281_828_459_045).abs() < 1e-15);
        assert!(expm1(f64::NAN).is_nan());
    }

    #[test]
    fn test_log10_and_log2() {
        assert!((log10(1000.0) - 3.0).abs() < 1e-15);
        assert_eq!(log10(1.0), 0.0);
        assert!((log2(8.0) - 3.0).abs() < 1e-14);
        assert!((log2(1024.0) - 10.0).abs() < 1e-14);
        assert_eq!(log10(0.0), f64::NEG_INFINITY);
        assert_eq!(log2(f64::INFINITY), f64::INFINITY);
        assert!(log10(-1.0).is_nan());
        assert!(log2(f64::NAN).is_nan());
    }

    #[test]
    fn test_log1p() {
        assert!(FloatBits64::from_float(log1p(-0.0)).is_negative_zero());
        assert!(FloatBits64::from_float(log1p(0.0)).is_positive_zero());
        assert_eq!(log1p(-1.0), f64::NEG_INFINITY);
        assert!(log1p(-2.0).is_nan());
        assert!((log1p(1.0) - core::f64::consts::LN_2).abs() < 1e-15);
    }
}
