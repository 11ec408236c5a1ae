// nfill - nfill
// Module: Prelude
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Everything needed to build a host, install into it and inspect the
//! result.

pub use nfill_error::prelude::*;
pub use nfill_host::prelude::{
    AttachMethod, Attributes, ConstantStrategy, Host, HostBuilder, HostCapabilities,
    InstallOptions, InstallOutcome, InstallRecord, InstallReport, Installer, Member, Namespace,
    NamespaceId, NativeFunction, Property, PropertyDescriptor, Provenance,
};
pub use nfill_math::{ops, same_value, FloatBits64, OperationKind, Value};

pub use crate::{polyfill, polyfilled_host};
