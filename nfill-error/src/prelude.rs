// nfill - nfill-error
// Module: Error Prelude
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for nfill-error
//!
//! Re-exports the error types so dependent crates can pull them in with a
//! single glob import.

pub use crate::{
    codes,
    kinds::{
        self,
        DescriptorUnsupportedError,
        DuplicateMemberError,
        MemberNotFoundError,
        NotCallableError,
        NotConfigurableError,
        NotWritableError,
    },
    Error,
    ErrorCategory,
    ErrorSource,
    Result,
};
