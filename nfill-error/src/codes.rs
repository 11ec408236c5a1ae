// nfill - nfill-error
// Module: Error Codes
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for nfill

// Namespace error codes (1000-1099)
/// Member not found in a namespace
pub const MEMBER_NOT_FOUND: u16 = 1000;
/// Member registered twice while building a host
pub const DUPLICATE_MEMBER: u16 = 1001;

// Property error codes (2000-2099)
/// Assignment to a non-writable property
pub const PROPERTY_NOT_WRITABLE: u16 = 2000;
/// Redefinition of a non-configurable property
pub const PROPERTY_NOT_CONFIGURABLE: u16 = 2001;
/// The host cannot enforce property descriptors
pub const DESCRIPTOR_UNSUPPORTED: u16 = 2002;

// Type error codes (3000-3099)
/// Member exists but is not a function
pub const NOT_CALLABLE: u16 = 3000;
