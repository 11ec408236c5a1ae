// nfill - nfill
// Module: Facade
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! nfill
//!
//! Brings a host environment's `Math` and `Number` namespaces up to the
//! ES2015 surface without disturbing anything the host already provides.
//!
//! ## Features
//!
//! - Conforming fallbacks for the extended `Math` functions, including the
//!   signed-zero and NaN edge cases
//! - `Number` predicates, parse aliases and constants
//! - An installer that only fills gaps and is safe to run repeatedly
//! - Read-only constants where the host supports property descriptors
//! - `no_std` compatibility through the `libm` feature
//!
//! ## Usage
//!
//! ```
//! use nfill::prelude::*;
//!
//! let mut host = Host::with_standard_globals(HostCapabilities::default()).unwrap();
//! let report = nfill::polyfill(&mut host).unwrap();
//! assert!(!report.is_noop());
//!
//! let r = host.call(NamespaceId::Math, "imul", &[4_294_967_295.0.into(), 5.into()]).unwrap();
//! assert_eq!(r, Value::Number(-5.0));
//!
//! // Constants are read-only
//! let number = host.namespace_mut(NamespaceId::Number);
//! assert!(number.assign("EPSILON", Value::Number(1.0), Provenance::Native).is_err());
//! assert_eq!(number.number("EPSILON"), Some(f64::EPSILON));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

pub use nfill_error as error;
pub use nfill_host as host;
pub use nfill_math as math;

pub use nfill_error::{Error, Result};
pub use nfill_host::{
    Host, HostBuilder, HostCapabilities, InstallOptions, InstallReport, Installer, NamespaceId,
};

pub mod prelude;

/// Installs every missing member into `host` with default options.
///
/// # Errors
///
/// See [`Installer::install`].
pub fn polyfill(host: &mut Host) -> Result<InstallReport> {
    nfill_host::install(host)
}

/// Builds a host with the standard globals and the given capabilities, then
/// installs every member into it.
///
/// # Errors
///
/// See [`Host::with_standard_globals`] and [`Installer::install`].
pub fn polyfilled_host(capabilities: HostCapabilities) -> Result<Host> {
    let mut host = Host::with_standard_globals(capabilities)?;
    polyfill(&mut host)?;
    Ok(host)
}
