// nfill - nfill-math
// Module: Dynamic Values
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Dynamically-typed host values.
//!
//! The classification predicates accept any value and must answer `false`
//! for non-numbers rather than coercing them, so arguments travel as
//! [`Value`] instead of `f64`.

use alloc::string::String;
use core::fmt;

/// A primitive value of the host environment
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value; also what a missing argument reads as
    #[default]
    Undefined,
    /// The null value
    Null,
    /// A boolean
    Boolean(bool),
    /// A double-precision number
    Number(f64),
    /// A string
    String(String),
}

impl Value {
    /// The host's `typeof` tag for this value
    #[must_use]
    pub const fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "object",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }

    /// The number inside, without coercion
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&crate::coerce::number_to_string(*n)),
            Self::String(s) => f.write_str(s),
        }
    }
}
