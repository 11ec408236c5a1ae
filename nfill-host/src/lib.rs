// nfill - nfill-host
// Module: Host Namespaces
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)] // Rule 2

//! Host namespaces and the missing-member installer.
//!
//! A [`Host`] models the numeric environment being extended: a `Math`
//! namespace, a `Number` namespace and the globals. Each namespace is an
//! explicit map from name to [`Property`], and every property records
//! whether the host provided it or nfill attached it.
//!
//! The [`Installer`] walks the candidate catalog from `nfill-math` and
//! attaches a fallback only where the host has nothing under that name. It
//! never overwrites, and a second run is a no-op.
//!
//! ## Usage
//!
//! ```rust
//! use nfill_host::prelude::*;
//!
//! let native_sign = NativeFunction::new("sign", 1, |_| Value::Number(42.0));
//! let mut host = HostBuilder::new()
//!     .with_native(NamespaceId::Math, native_sign.clone())
//!     .build()
//!     .unwrap();
//!
//! let report = Installer::new().install(&mut host).unwrap();
//! assert_eq!(report.outcome(NamespaceId::Math, "sign"), Some(InstallOutcome::SkippedNative));
//! assert!(host.math().function("sign").unwrap().ptr_eq(&native_sign));
//! assert_eq!(host.call(NamespaceId::Math, "hypot", &[3.into(), 4.into()]).unwrap(), Value::Number(5.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::missing_panics_doc)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// Export modules
pub mod builder;
pub mod function;
pub mod host;
pub mod installer;
pub mod namespace;
pub mod prelude;
pub mod property;

// Reexport types for convenience
pub use builder::HostBuilder;
pub use function::NativeFunction;
pub use host::{Host, HostCapabilities, NamespaceId};
pub use installer::{
    install, AttachMethod, ConstantStrategy, InstallOptions, InstallOutcome, InstallRecord,
    InstallReport, Installer,
};
pub use namespace::Namespace;
pub use property::{Attributes, Member, Property, PropertyDescriptor, Provenance};
