// nfill - nfill-error
// Module: Error Kinds
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Specific error kinds. Each converts into [`crate::Error`] with a fixed
//! category and code; the payload is the static message.

use core::fmt::{self, Display};

/// A member lookup found nothing under the requested name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberNotFoundError(pub &'static str);
impl Display for MemberNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member not found: {}", self.0)
    }
}

/// A host was built with the same member registered twice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateMemberError(pub &'static str);
impl Display for DuplicateMemberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duplicate member: {}", self.0)
    }
}

/// Plain assignment hit a non-writable property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotWritableError(pub &'static str);
impl Display for NotWritableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property is not writable: {}", self.0)
    }
}

/// Descriptor definition hit a non-configurable property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotConfigurableError(pub &'static str);
impl Display for NotConfigurableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property is not configurable: {}", self.0)
    }
}

/// The host has no descriptor-based property definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorUnsupportedError;
impl Display for DescriptorUnsupportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property descriptors are not supported")
    }
}

/// A member was called but holds a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotCallableError(pub &'static str);
impl Display for NotCallableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member is not callable: {}", self.0)
    }
}
