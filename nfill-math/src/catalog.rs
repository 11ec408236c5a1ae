// nfill - nfill-math
// Module: Operation Catalog
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Descriptors for every member the installer may add, grouped the way the
//! installer walks them.

use crate::{classify, constants, ops, parse, value::Value};

/// Which group an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperationKind {
    /// Extended real-arithmetic function on `Math`
    Arithmetic,
    /// Classification predicate or parse alias on `Number`
    Classification,
    /// Value constant on `Number`
    Constant,
    /// Global routine of the host itself
    Global,
}

/// The callable body behind an operation
#[derive(Debug, Clone, Copy)]
pub enum OperationBody {
    /// One numeric operand
    Unary(fn(f64) -> f64),
    /// Two numeric operands
    Binary(fn(f64, f64) -> f64),
    /// Any number of numeric operands
    Variadic(fn(&[f64]) -> f64),
    /// Predicate over a single uncoerced value
    Predicate(fn(&Value) -> bool),
    /// Routine taking raw host arguments
    Routine(fn(&[Value]) -> Value),
    /// Re-export of the host global with this name
    Alias(&'static str),
}

/// A named function the installer may attach
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// Member name
    pub name:  &'static str,
    /// Declared argument count
    pub arity: u8,
    /// Group
    pub kind:  OperationKind,
    /// Body
    pub body:  OperationBody,
}

impl Operation {
    const fn new(name: &'static str, arity: u8, kind: OperationKind, body: OperationBody) -> Self {
        Self { name, arity, kind, body }
    }
}

/// A named constant the installer may attach
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    /// Member name
    pub name:  &'static str,
    /// Value
    pub value: f64,
}

fn clz32_number(x: f64) -> f64 {
    f64::from(ops::clz32(x))
}

fn imul_number(x: f64, y: f64) -> f64 {
    f64::from(ops::imul(x, y))
}

/// The `Math` extensions. `fround` depends on whether the host can store a
/// 32-bit float; without that it degrades to a pass-through.
#[must_use]
pub fn arithmetic_operations(float32_storage: bool) -> [Operation; 17] {
    use OperationBody::{Binary, Unary, Variadic};
    use OperationKind::Arithmetic;

    let fround: fn(f64) -> f64 = if float32_storage { ops::fround } else { ops::fround_identity };

    [
        Operation::new("sinh", 1, Arithmetic, Unary(ops::sinh)),
        Operation::new("cosh", 1, Arithmetic, Unary(ops::cosh)),
        Operation::new("tanh", 1, Arithmetic, Unary(ops::tanh)),
        Operation::new("asinh", 1, Arithmetic, Unary(ops::asinh)),
        Operation::new("acosh", 1, Arithmetic, Unary(ops::acosh)),
        Operation::new("atanh", 1, Arithmetic, Unary(ops::atanh)),
        Operation::new("expm1", 1, Arithmetic, Unary(ops::expm1)),
        Operation::new("log10", 1, Arithmetic, Unary(ops::log10)),
        Operation::new("log2", 1, Arithmetic, Unary(ops::log2)),
        Operation::new("log1p", 1, Arithmetic, Unary(ops::log1p)),
        Operation::new("sign", 1, Arithmetic, Unary(ops::sign)),
        Operation::new("cbrt", 1, Arithmetic, Unary(ops::cbrt)),
        Operation::new("hypot", 2, Arithmetic, Variadic(ops::hypot)),
        Operation::new("trunc", 1, Arithmetic, Unary(ops::trunc)),
        Operation::new("fround", 1, Arithmetic, Unary(fround)),
        Operation::new("clz32", 1, Arithmetic, Unary(clz32_number)),
        Operation::new("imul", 2, Arithmetic, Binary(imul_number)),
    ]
}

/// The `Number` predicates and parse aliases.
pub const CLASSIFICATION_OPERATIONS: [Operation; 6] = {
    use OperationBody::{Alias, Predicate};
    use OperationKind::Classification;

    [
        Operation::new("isNaN", 1, Classification, Predicate(classify::is_nan)),
        Operation::new("isFinite", 1, Classification, Predicate(classify::is_finite)),
        Operation::new("isInteger", 1, Classification, Predicate(classify::is_integer)),
        Operation::new("isSafeInteger", 1, Classification, Predicate(classify::is_safe_integer)),
        Operation::new("parseFloat", 1, Classification, Alias("parseFloat")),
        Operation::new("parseInt", 2, Classification, Alias("parseInt")),
    ]
};

/// The `Number` constants.
pub const CONSTANTS: [Constant; 3] = [
    Constant { name: "EPSILON", value: constants::EPSILON },
    Constant { name: "MAX_SAFE_INTEGER", value: constants::MAX_SAFE_INTEGER },
    Constant { name: "MIN_SAFE_INTEGER", value: constants::MIN_SAFE_INTEGER },
];

/// Reference implementations of the host's global parse routines.
pub const GLOBAL_ROUTINES: [Operation; 2] = {
    use OperationBody::Routine;
    use OperationKind::Global;

    [
        Operation::new("parseFloat", 1, Global, Routine(parse::parse_float_routine)),
        Operation::new("parseInt", 2, Global, Routine(parse::parse_int_routine)),
    ]
};
