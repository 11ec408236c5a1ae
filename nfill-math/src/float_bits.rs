// nfill - nfill-math
// Module: Float Bit Patterns
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Wrapper type for f64 with bit-pattern equality and hashing.
//!
//! `==` on floats cannot tell `-0` from `+0` and never matches NaN. The
//! signed-zero contracts of the fallbacks are stated in bits, so they are
//! checked in bits.

use core::hash::{Hash, Hasher};

const F64_SIGN_MASK: u64 = 0x8000_0000_0000_0000;

/// Wrapper for f64 that implements Hash, `PartialEq`, and Eq based on bit
/// patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct FloatBits64(pub u64);

impl FloatBits64 {
    /// Canonical quiet `NaN` for f64.
    pub const NAN: Self = FloatBits64(0x7ff8_0000_0000_0000);

    /// Creates a new `FloatBits64` from an `f64` value.
    #[must_use]
    pub fn from_float(val: f64) -> Self {
        Self(val.to_bits())
    }

    /// Returns the `f64` value represented by this `FloatBits64`.
    #[must_use]
    pub const fn value(self) -> f64 {
        f64::from_bits(self.0)
    }

    /// Returns the underlying `u64` bits of this `FloatBits64`.
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// `true` only for the `-0.0` bit pattern.
    #[must_use]
    pub const fn is_negative_zero(self) -> bool {
        self.0 == F64_SIGN_MASK
    }

    /// `true` only for the `+0.0` bit pattern.
    #[must_use]
    pub const fn is_positive_zero(self) -> bool {
        self.0 == 0
    }
}

impl Hash for FloatBits64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// `SameValue` comparison: NaN equals NaN, `-0` differs from `+0`,
/// everything else compares numerically.
#[must_use]
pub fn same_value(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    a.to_bits() == b.to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_zero_patterns() {
        assert!(FloatBits64::from_float(-0.0).is_negative_zero());
        assert!(!FloatBits64::from_float(0.0).is_negative_zero());
        assert!(FloatBits64::from_float(0.0).is_positive_zero());
        assert_eq!(FloatBits64::from_float(-0.0).value().to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_canonical_nan() {
        assert!(FloatBits64::NAN.value().is_nan());
        assert_eq!(FloatBits64::from_float(FloatBits64::NAN.value()), FloatBits64::NAN);
        assert_ne!(FloatBits64::from_float(f64::INFINITY), FloatBits64::NAN);
    }

    #[test]
    fn test_same_value() {
        assert!(same_value(f64::NAN, f64::NAN));
        assert!(!same_value(0.0, -0.0));
        assert!(same_value(-0.0, -0.0));
        assert!(same_value(1.5, 1.5));
        assert!(!same_value(1.5, 2.5));
    }
}
