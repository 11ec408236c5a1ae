// nfill - nfill-host
// Module: Native Functions
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Callable members of a host namespace.
//!
//! A [`NativeFunction`] is a shared handle: cloning it yields the same
//! function, and [`NativeFunction::ptr_eq`] tells whether two members are
//! the very same function. That identity is how callers observe that an
//! alias re-exports the global routine instead of copying it.

use nfill_math::{coerce::to_number, Operation, OperationBody};

use crate::prelude::*;

/// Signature of every host-callable body
pub trait HostFn: Fn(&[Value]) -> Value + Send + Sync {}

impl<F> HostFn for F where F: Fn(&[Value]) -> Value + Send + Sync {}

/// A named, shareable host function
#[derive(Clone)]
pub struct NativeFunction {
    name: String,
    length: u8,
    body: Arc<dyn HostFn>,
}

impl NativeFunction {
    /// Creates a function from a closure.
    pub fn new<F>(name: impl Into<String>, length: u8, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self { name: name.into(), length, body: Arc::new(body) }
    }

    /// Wraps a catalog operation, coercing numeric operands with `ToNumber`.
    ///
    /// Missing arguments read as `undefined`, so `sinh()` yields NaN.
    /// Returns `None` for aliases, which have no body of their own.
    #[must_use]
    pub fn from_operation(op: &Operation) -> Option<Self> {
        let function = match op.body {
            OperationBody::Unary(f) => {
                Self::new(op.name, op.arity, move |args| Value::Number(f(number_arg(args, 0))))
            }
            OperationBody::Binary(f) => Self::new(op.name, op.arity, move |args| {
                Value::Number(f(number_arg(args, 0), number_arg(args, 1)))
            }),
            OperationBody::Variadic(f) => Self::new(op.name, op.arity, move |args| {
                let operands: Vec<f64> = args.iter().map(to_number).collect();
                Value::Number(f(&operands))
            }),
            OperationBody::Predicate(p) => Self::new(op.name, op.arity, move |args| {
                Value::Boolean(p(args.first().unwrap_or(&Value::Undefined)))
            }),
            OperationBody::Routine(r) => Self::new(op.name, op.arity, r),
            OperationBody::Alias(_) => return None,
        };
        Some(function)
    }

    /// Invokes the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }

    /// The name the function was created under
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared argument count
    #[must_use]
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Whether both handles refer to the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

fn number_arg(args: &[Value], index: usize) -> f64 {
    args.get(index).map_or(f64::NAN, to_number)
}
