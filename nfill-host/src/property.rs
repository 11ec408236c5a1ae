// nfill - nfill-host
// Module: Properties
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Namespace members and their attributes.

use nfill_math::same_value;

use crate::prelude::*;

/// What a property holds
#[derive(Debug, Clone)]
pub enum Member {
    /// A callable member
    Function(NativeFunction),
    /// A plain value
    Value(Value),
}

impl Member {
    /// Whether the member can be called
    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// The function, if this member is one
    #[must_use]
    pub fn as_function(&self) -> Option<&NativeFunction> {
        match self {
            Self::Function(f) => Some(f),
            Self::Value(_) => None,
        }
    }

    /// The value, if this member is not a function
    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Function(_) => None,
            Self::Value(v) => Some(v),
        }
    }

    /// `SameValue` over members: functions by identity, numbers by bit
    /// pattern class, everything else by equality.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            (Self::Value(Value::Number(a)), Self::Value(Value::Number(b))) => same_value(*a, *b),
            (Self::Value(a), Self::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl From<NativeFunction> for Member {
    fn from(f: NativeFunction) -> Self {
        Self::Function(f)
    }
}

impl From<Value> for Member {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

/// Who put a property on the namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Provenance {
    /// Provided by the host before installation
    Native,
    /// Attached by the installer
    Fallback,
}

/// Property attribute flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    /// Plain assignment may replace the member
    pub writable: bool,
    /// The name shows up in key enumeration
    pub enumerable: bool,
    /// The property may be redefined or deleted
    pub configurable: bool,
}

impl Attributes {
    /// What plain assignment creates.
    pub const DATA: Self = Self { writable: true, enumerable: true, configurable: true };

    /// What a bare descriptor definition creates.
    pub const FROZEN: Self = Self { writable: false, enumerable: false, configurable: false };
}

/// A member together with its attributes and provenance
#[derive(Debug, Clone)]
pub struct Property {
    /// The member
    pub member: Member,
    /// Attribute flags
    pub attributes: Attributes,
    /// Who attached it
    pub provenance: Provenance,
}

/// Input to [`crate::Namespace::define_property`].
///
/// Attributes not set explicitly default to `false`.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// The member to define
    pub member: Member,
    /// Attribute flags
    pub attributes: Attributes,
}

impl PropertyDescriptor {
    /// A descriptor for `member` with every attribute false.
    pub fn new(member: impl Into<Member>) -> Self {
        Self { member: member.into(), attributes: Attributes::FROZEN }
    }

    /// Sets the writable flag.
    #[must_use]
    pub fn writable(mut self, writable: bool) -> Self {
        self.attributes.writable = writable;
        self
    }

    /// Sets the enumerable flag.
    #[must_use]
    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.attributes.enumerable = enumerable;
        self
    }

    /// Sets the configurable flag.
    #[must_use]
    pub fn configurable(mut self, configurable: bool) -> Self {
        self.attributes.configurable = configurable;
        self
    }
}
