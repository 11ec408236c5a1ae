// nfill - nfill-host
// Module: Prelude
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for nfill-host
//!
//! Re-exports the host types, the value type and the error types so that
//! both the modules of this crate and its users can import everything with
//! a single glob.

pub use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};
pub use core::fmt;

pub use nfill_error::prelude::*;
pub use nfill_math::{OperationKind, Value};

pub use crate::{
    builder::HostBuilder,
    function::NativeFunction,
    host::{Host, HostCapabilities, NamespaceId},
    installer::{
        install, AttachMethod, ConstantStrategy, InstallOptions, InstallOutcome, InstallRecord,
        InstallReport, Installer,
    },
    namespace::Namespace,
    property::{Attributes, Member, Property, PropertyDescriptor, Provenance},
};
