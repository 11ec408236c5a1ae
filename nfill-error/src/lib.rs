// nfill - nfill-error
// Module: Error Handling
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for nfill.
//!
//! Numeric domain violations never surface here: they propagate as NaN the
//! way IEEE 754 arithmetic does. The errors in this crate describe failures
//! of the namespace layer, i.e. writing to a read-only member, defining a
//! property on a host that cannot enforce descriptors, or calling a member
//! that is not a function.
//!
//! # Error Categories
//!
//! ## Namespace Errors (1000-1099)
//! - Member not found
//! - Duplicate member during host construction
//!
//! ## Property Errors (2000-2099)
//! - Write to a non-writable property
//! - Redefinition of a non-configurable property
//! - Descriptor definition unsupported by the host
//!
//! ## Type Errors (3000-3099)
//! - Member is not callable
//!
//! # Usage
//!
//! ```
//! use nfill_error::{codes, kinds, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Property,
//!     codes::PROPERTY_NOT_WRITABLE,
//!     "Cannot assign to read-only property",
//! );
//! assert!(error.is_property_error());
//!
//! let not_callable: Error = kinds::NotCallableError("MAX_SAFE_INTEGER").into();
//! assert_eq!(not_callable.code, codes::NOT_CALLABLE);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)] // Rule 2
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![warn(clippy::missing_panics_doc)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for nfill
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub mod prelude;

pub use errors::{Error, ErrorCategory, ErrorSource};
pub use kinds::{
    DescriptorUnsupportedError, DuplicateMemberError, MemberNotFoundError, NotCallableError,
    NotConfigurableError, NotWritableError,
};

/// A specialized `Result` type for nfill operations.
pub type Result<T> = core::result::Result<T, Error>;
