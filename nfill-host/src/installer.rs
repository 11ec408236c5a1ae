// nfill - nfill-host
// Module: Installer
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Attaches missing members to a [`Host`].
//!
//! For every candidate in the catalog the installer checks the target
//! namespace first. A function counts as present when a callable member of
//! that name exists; a constant counts as present when anything of that name
//! exists. Present members are never touched, so running the installer
//! twice performs no writes the second time.
//!
//! Functions are attached by plain assignment. Constants are attached
//! read-only through descriptor definition when the host supports it. Whether
//! it does is probed once per namespace on a scratch namespace with the same
//! capabilities; a failed probe downgrades every constant of that namespace
//! to plain assignment.

use log::{debug, trace};
use nfill_math::{
    catalog::{self, CONSTANTS},
    Operation, OperationBody,
};

use crate::prelude::*;

/// How constants are attached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstantStrategy {
    /// Probe descriptor support and pick accordingly
    #[default]
    Probe,
    /// Always define read-only properties
    Strict,
    /// Always use plain assignment
    Plain,
}

/// The mechanism a member was attached with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttachMethod {
    /// Plain assignment; the property is writable
    Assign,
    /// Descriptor definition; the property is read-only
    Define,
}

/// Installer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstallOptions {
    /// Attach the `Math` functions
    pub arithmetic: bool,
    /// Attach the `Number` predicates and parse aliases
    pub classification: bool,
    /// Attach the `Number` constants
    pub constants: bool,
    /// Constant attachment strategy
    pub constant_strategy: ConstantStrategy,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            arithmetic: true,
            classification: true,
            constants: true,
            constant_strategy: ConstantStrategy::Probe,
        }
    }
}

impl InstallOptions {
    /// Enables or disables the `Math` functions.
    #[must_use]
    pub fn with_arithmetic(mut self, enabled: bool) -> Self {
        self.arithmetic = enabled;
        self
    }

    /// Enables or disables the `Number` predicates and parse aliases.
    #[must_use]
    pub fn with_classification(mut self, enabled: bool) -> Self {
        self.classification = enabled;
        self
    }

    /// Enables or disables the `Number` constants.
    #[must_use]
    pub fn with_constants(mut self, enabled: bool) -> Self {
        self.constants = enabled;
        self
    }

    /// Sets the constant strategy.
    #[must_use]
    pub fn with_constant_strategy(mut self, strategy: ConstantStrategy) -> Self {
        self.constant_strategy = strategy;
        self
    }
}

/// What happened to one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InstallOutcome {
    /// A fallback was attached
    Installed {
        /// How it was attached
        method: AttachMethod,
    },
    /// The host already had it
    SkippedNative,
    /// Nothing could be attached, e.g. an alias whose global is missing
    Unavailable,
}

/// One candidate's outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InstallRecord {
    /// Target namespace
    pub namespace: NamespaceId,
    /// Member name
    pub name: &'static str,
    /// Catalog group the candidate came from
    pub kind: OperationKind,
    /// Outcome
    pub outcome: InstallOutcome,
}

/// Result of one installer run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InstallReport {
    /// Outcomes in catalog order
    pub records: Vec<InstallRecord>,
    /// Method chosen for constants, if the constant group ran
    pub constant_method: Option<AttachMethod>,
}

impl InstallReport {
    /// The outcome for `namespace.name`
    #[must_use]
    pub fn outcome(&self, namespace: NamespaceId, name: &str) -> Option<InstallOutcome> {
        self.records
            .iter()
            .find(|r| r.namespace == namespace && r.name == name)
            .map(|r| r.outcome)
    }

    /// Records of attached fallbacks
    pub fn installed(&self) -> impl Iterator<Item = &InstallRecord> {
        self.records.iter().filter(|r| matches!(r.outcome, InstallOutcome::Installed { .. }))
    }

    /// Number of attached fallbacks
    #[must_use]
    pub fn installed_count(&self) -> usize {
        self.installed().count()
    }

    /// Number of members the host already had
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome == InstallOutcome::SkippedNative).count()
    }

    /// Number of candidates that could not be attached
    #[must_use]
    pub fn unavailable_count(&self) -> usize {
        self.records.iter().filter(|r| r.outcome == InstallOutcome::Unavailable).count()
    }

    /// Records of attached fallbacks in one catalog group
    pub fn installed_of_kind(&self, kind: OperationKind) -> impl Iterator<Item = &InstallRecord> {
        self.installed().filter(move |r| r.kind == kind)
    }

    /// Whether the run changed nothing
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.installed_count() == 0
    }

    fn push(
        &mut self,
        namespace: NamespaceId,
        name: &'static str,
        kind: OperationKind,
        outcome: InstallOutcome,
    ) {
        self.records.push(InstallRecord { namespace, name, kind, outcome });
    }
}

/// Attaches missing members to a host
#[derive(Debug, Clone, Copy, Default)]
pub struct Installer {
    options: InstallOptions,
}

impl Installer {
    /// An installer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An installer with the given options.
    #[must_use]
    pub fn with_options(options: InstallOptions) -> Self {
        Self { options }
    }

    /// The options in effect
    #[must_use]
    pub fn options(&self) -> InstallOptions {
        self.options
    }

    /// Runs the installer against `host`.
    ///
    /// # Errors
    ///
    /// Returns a property error if a non-callable, non-writable member
    /// blocks a function name, or if [`ConstantStrategy::Strict`] is forced
    /// on a host without descriptor support. A failed descriptor probe is
    /// not an error.
    pub fn install(&self, host: &mut Host) -> Result<InstallReport> {
        let mut report = InstallReport::default();

        if self.options.arithmetic {
            let float32 = host.capabilities().float32_storage;
            for op in catalog::arithmetic_operations(float32) {
                let outcome = attach_function(host, NamespaceId::Math, &op)?;
                report.push(NamespaceId::Math, op.name, op.kind, outcome);
            }
        }

        if self.options.classification {
            for op in &catalog::CLASSIFICATION_OPERATIONS {
                let outcome = attach_function(host, NamespaceId::Number, op)?;
                report.push(NamespaceId::Number, op.name, op.kind, outcome);
            }
        }

        if self.options.constants {
            // Decided once; every constant below uses the same method.
            let method = self.constant_method(host.namespace(NamespaceId::Number));
            debug!("Attaching Number constants with {method:?}");
            report.constant_method = Some(method);

            let target = host.namespace_mut(NamespaceId::Number);
            for constant in &CONSTANTS {
                let outcome = if target.contains(constant.name) {
                    trace!("Number.{} is native, skipping", constant.name);
                    InstallOutcome::SkippedNative
                } else {
                    let value = Value::Number(constant.value);
                    match method {
                        AttachMethod::Define => target.define_property(
                            constant.name,
                            PropertyDescriptor::new(value),
                            Provenance::Fallback,
                        )?,
                        AttachMethod::Assign => {
                            target.assign(constant.name, value, Provenance::Fallback)?;
                        }
                    }
                    debug!("Attached Number.{} ({method:?})", constant.name);
                    InstallOutcome::Installed { method }
                };
                report.push(NamespaceId::Number, constant.name, OperationKind::Constant, outcome);
            }
        }

        Ok(report)
    }

    fn constant_method(&self, target: &Namespace) -> AttachMethod {
        match self.options.constant_strategy {
            ConstantStrategy::Strict => AttachMethod::Define,
            ConstantStrategy::Plain => AttachMethod::Assign,
            ConstantStrategy::Probe => probe_descriptor_support(target),
        }
    }
}

/// Runs a default [`Installer`] against `host`.
///
/// # Errors
///
/// See [`Installer::install`].
pub fn install(host: &mut Host) -> Result<InstallReport> {
    Installer::new().install(host)
}

/// Tries a strict definition on a scratch namespace shaped like `target`.
fn probe_descriptor_support(target: &Namespace) -> AttachMethod {
    let mut scratch = Namespace::new(target.name(), target.supports_descriptors());
    match scratch.define_property("0", PropertyDescriptor::new(Value::Undefined), Provenance::Fallback) {
        Ok(()) => AttachMethod::Define,
        Err(e) => {
            debug!("{} probe failed ({e}), constants fall back to assignment", target.name());
            AttachMethod::Assign
        }
    }
}

fn attach_function(host: &mut Host, id: NamespaceId, op: &Operation) -> Result<InstallOutcome> {
    if host.namespace(id).is_callable(op.name) {
        trace!("{id}.{} is native, skipping", op.name);
        return Ok(InstallOutcome::SkippedNative);
    }

    let function = match op.body {
        OperationBody::Alias(global) => host.global().function(global).cloned(),
        _ => NativeFunction::from_operation(op),
    };
    let Some(function) = function else {
        debug!("{id}.{} has no source, leaving it absent", op.name);
        return Ok(InstallOutcome::Unavailable);
    };

    host.namespace_mut(id).assign(op.name, function, Provenance::Fallback)?;
    debug!("Attached {id}.{}", op.name);
    Ok(InstallOutcome::Installed { method: AttachMethod::Assign })
}
