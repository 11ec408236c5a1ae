// nfill - nfill-error
// Module: Error Types
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use core::fmt;

use crate::{codes, kinds};

/// `Error` categories for nfill operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Namespace lookup and construction errors
    Namespace = 1,
    /// Property attribute violations
    Property  = 2,
    /// Type errors (calling a member that is not a function)
    Type      = 3,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// nfill `Error` type
///
/// Categorised error with a numeric code and a static message. `Copy`, so it
/// can be returned from `no_std` code without allocation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// The host cannot enforce property descriptors
    pub const DESCRIPTOR_UNSUPPORTED: Self = Self::new(
        ErrorCategory::Property,
        codes::DESCRIPTOR_UNSUPPORTED,
        "Property descriptors are not supported by this host",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create a namespace error
    #[must_use]
    pub const fn namespace_error(code: u16, message: &'static str) -> Self {
        Self::new(ErrorCategory::Namespace, code, message)
    }

    /// Create a property error
    #[must_use]
    pub const fn property_error(code: u16, message: &'static str) -> Self {
        Self::new(ErrorCategory::Property, code, message)
    }

    /// Create a type error
    #[must_use]
    pub const fn type_error(code: u16, message: &'static str) -> Self {
        Self::new(ErrorCategory::Type, code, message)
    }

    /// Check if this is a namespace error
    #[must_use]
    pub fn is_namespace_error(&self) -> bool {
        self.category == ErrorCategory::Namespace
    }

    /// Check if this is a property error
    #[must_use]
    pub fn is_property_error(&self) -> bool {
        self.category == ErrorCategory::Property
    }

    /// Check if this is a type error
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        self.category == ErrorCategory::Type
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}][E{:04X}] {}", self.category, self.code, self.message)
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl From<kinds::MemberNotFoundError> for Error {
    fn from(e: kinds::MemberNotFoundError) -> Self {
        Self::namespace_error(codes::MEMBER_NOT_FOUND, e.0)
    }
}

impl From<kinds::DuplicateMemberError> for Error {
    fn from(e: kinds::DuplicateMemberError) -> Self {
        Self::namespace_error(codes::DUPLICATE_MEMBER, e.0)
    }
}

impl From<kinds::NotWritableError> for Error {
    fn from(e: kinds::NotWritableError) -> Self {
        Self::property_error(codes::PROPERTY_NOT_WRITABLE, e.0)
    }
}

impl From<kinds::NotConfigurableError> for Error {
    fn from(e: kinds::NotConfigurableError) -> Self {
        Self::property_error(codes::PROPERTY_NOT_CONFIGURABLE, e.0)
    }
}

impl From<kinds::DescriptorUnsupportedError> for Error {
    fn from(_: kinds::DescriptorUnsupportedError) -> Self {
        Self::DESCRIPTOR_UNSUPPORTED
    }
}

impl From<kinds::NotCallableError> for Error {
    fn from(e: kinds::NotCallableError) -> Self {
        Self::type_error(codes::NOT_CALLABLE, e.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
