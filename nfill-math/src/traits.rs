// Copyright (c) 2025 The nfill Project Developers
// SPDX-License-Identifier: MIT
// Project: nfill
// Module: nfill-math::traits

//! `f64` math methods for `no_std` builds, backed by `libm`.
//!
//! With `std` the inherent methods are used and this module is not compiled.

pub(crate) trait FloatExt {
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn sqrt(self) -> Self;
    fn powf(self, n: Self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn trunc(self) -> Self;
}

impl FloatExt for f64 {
    fn exp(self) -> Self {
        libm::exp(self)
    }

    fn ln(self) -> Self {
        libm::log(self)
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn powf(self, n: Self) -> Self {
        libm::pow(self, n)
    }

    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    fn trunc(self) -> Self {
        libm::trunc(self)
    }
}
