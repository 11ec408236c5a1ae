// Copyright (c) 2025 The nfill Project Developers
// SPDX-License-Identifier: MIT
// Project: nfill
// Module: nfill-math

//! Conforming fallbacks for the ES2015 `Math` and `Number` extensions.
//!
//! Every function here reproduces the edge-case behaviour of the numeric
//! standard: signed zeros survive where the standard says they do, domain
//! violations come back as NaN, and the 32-bit operations coerce exactly like
//! `ToInt32`/`ToUint32`. Nothing in this crate touches a namespace; see
//! `nfill-host` for installation.
//!
//! ```
//! use nfill_math::{ops, FloatBits64};
//!
//! assert!(FloatBits64::from_float(ops::sinh(-0.0)).is_negative_zero());
//! assert_eq!(ops::hypot(&[3.0, 4.0]), 5.0);
//! assert_eq!(ops::imul(4_294_967_295.0, 5.0), -5);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![deny(clippy::todo, clippy::unimplemented)]
#![warn(clippy::pedantic)]
#![allow(clippy::float_arithmetic, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("nfill-math needs either the `std` or the `libm` feature for transcendental functions");

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// Modules
pub mod catalog;
pub mod classify;
pub mod coerce;
pub mod constants;
pub mod float_bits;
pub mod ops;
pub mod parse;
pub mod prelude;
#[cfg(not(feature = "std"))]
pub(crate) mod traits;
pub mod value;

pub use catalog::{Constant, Operation, OperationBody, OperationKind};
pub use float_bits::{same_value, FloatBits64};
pub use value::Value;
pub use nfill_error::Error as NfillMathError;
pub use nfill_error::Result as NfillMathResult;
