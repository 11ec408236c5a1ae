// nfill - nfill-math
// Module: Prelude
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Crate prelude for `nfill-math`

pub use alloc::{
    string::{String, ToString},
    vec::Vec,
};

pub use nfill_error::prelude::*;

#[doc(hidden)]
pub use crate as nfill_math;
pub use crate::{
    catalog::{Constant, Operation, OperationBody, OperationKind},
    classify,
    coerce,
    constants::{EPSILON, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER},
    float_bits::{same_value, FloatBits64},
    ops,
    parse,
    value::Value,
};
