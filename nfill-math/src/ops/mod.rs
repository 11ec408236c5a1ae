// nfill - nfill-math
// Module: Extended Math Operations
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fallback bodies for the extended `Math` functions.
//!
//! The closed-form formulas used here collapse `-0` to `+0` (or produce
//! NaN) at a few singular points. Each of those points is an explicit branch
//! that returns the argument unchanged; they must stay explicit.

mod exp_log;
mod hyperbolic;
mod misc;
mod rounding;

pub use exp_log::{expm1, log10, log1p, log2};
pub use hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use misc::{cbrt, hypot, sign};
pub use rounding::{clz32, fround, fround_identity, imul, trunc};
