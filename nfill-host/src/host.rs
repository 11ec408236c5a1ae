// nfill - nfill-host
// Module: Host Environment
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The numeric environment being extended.

use nfill_math::catalog::GLOBAL_ROUTINES;

use crate::prelude::*;

/// Identifies one of the host's namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamespaceId {
    /// The `Math` namespace
    Math,
    /// The `Number` namespace
    Number,
    /// The global object
    Global,
}

impl NamespaceId {
    /// The namespace's name in the host
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::Number => "Number",
            Self::Global => "global",
        }
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the host environment can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostCapabilities {
    /// Descriptor-based property definition is available
    pub property_descriptors: bool,
    /// Single-precision storage is available for `fround`
    pub float32_storage: bool,
}

impl HostCapabilities {
    /// A modern host.
    pub const FULL: Self = Self { property_descriptors: true, float32_storage: true };

    /// A host with neither descriptors nor float32 storage.
    pub const LEGACY: Self = Self { property_descriptors: false, float32_storage: false };
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self::FULL
    }
}

/// A host environment with its three namespaces
#[derive(Debug, Clone)]
pub struct Host {
    capabilities: HostCapabilities,
    math: Namespace,
    number: Namespace,
    global: Namespace,
}

impl Host {
    /// Creates a host with empty namespaces.
    #[must_use]
    pub fn new(capabilities: HostCapabilities) -> Self {
        let descriptors = capabilities.property_descriptors;
        Self {
            capabilities,
            math: Namespace::new(NamespaceId::Math.as_str(), descriptors),
            number: Namespace::new(NamespaceId::Number.as_str(), descriptors),
            global: Namespace::new(NamespaceId::Global.as_str(), descriptors),
        }
    }

    /// Creates a host whose globals carry `parseFloat` and `parseInt`.
    ///
    /// # Errors
    ///
    /// Returns a property error if a global parse routine cannot be
    /// assigned.
    pub fn with_standard_globals(capabilities: HostCapabilities) -> Result<Self> {
        let mut host = Self::new(capabilities);
        host.add_standard_globals()?;
        Ok(host)
    }

    /// Adds the global parse routines that are not already present.
    pub(crate) fn add_standard_globals(&mut self) -> Result<()> {
        for op in &GLOBAL_ROUTINES {
            if self.global.contains(op.name) {
                continue;
            }
            if let Some(f) = NativeFunction::from_operation(op) {
                self.global.assign(op.name, f, Provenance::Native)?;
            }
        }
        Ok(())
    }

    /// The host's capabilities
    #[must_use]
    pub fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    /// The namespace with the given id
    #[must_use]
    pub fn namespace(&self, id: NamespaceId) -> &Namespace {
        match id {
            NamespaceId::Math => &self.math,
            NamespaceId::Number => &self.number,
            NamespaceId::Global => &self.global,
        }
    }

    /// Mutable access to the namespace with the given id
    pub fn namespace_mut(&mut self, id: NamespaceId) -> &mut Namespace {
        match id {
            NamespaceId::Math => &mut self.math,
            NamespaceId::Number => &mut self.number,
            NamespaceId::Global => &mut self.global,
        }
    }

    /// The `Math` namespace
    #[must_use]
    pub fn math(&self) -> &Namespace {
        &self.math
    }

    /// The `Number` namespace
    #[must_use]
    pub fn number(&self) -> &Namespace {
        &self.number
    }

    /// The global object
    #[must_use]
    pub fn global(&self) -> &Namespace {
        &self.global
    }

    /// Who attached `name` in namespace `id`, if anything is there
    #[must_use]
    pub fn provenance(&self, id: NamespaceId, name: &str) -> Option<Provenance> {
        self.namespace(id).provenance(name)
    }

    /// Calls `id.name(args)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the member is missing or not callable.
    pub fn call(&self, id: NamespaceId, name: &str, args: &[Value]) -> Result<Value> {
        self.namespace(id).call(name, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_host_is_empty() {
        let host = Host::new(HostCapabilities::LEGACY);
        assert!(host.math().is_empty());
        assert!(host.number().is_empty());
        assert!(host.global().is_empty());
        assert!(!host.math().supports_descriptors());
        assert_eq!(host.capabilities(), HostCapabilities::LEGACY);
    }

    #[test]
    fn test_standard_globals() {
        let host = Host::with_standard_globals(HostCapabilities::default()).unwrap();
        assert!(host.global().is_callable("parseFloat"));
        assert!(host.global().is_callable("parseInt"));
        assert_eq!(host.provenance(NamespaceId::Global, "parseInt"), Some(Provenance::Native));
        assert_eq!(
            host.call(NamespaceId::Global, "parseFloat", &["  3.5e1xyz".into()]).unwrap(),
            Value::Number(35.0)
        );
        assert_eq!(host.provenance(NamespaceId::Math, "sinh"), None);
    }

    #[test]
    fn test_standard_globals_keep_present_names() {
        let mut host = Host::new(HostCapabilities::FULL);
        host.namespace_mut(NamespaceId::Global)
            .define_property("parseInt", PropertyDescriptor::new(Value::Null), Provenance::Native)
            .unwrap();

        host.add_standard_globals().unwrap();
        assert_eq!(host.global().get("parseInt").unwrap().as_value(), Some(&Value::Null));
        assert!(host.global().is_callable("parseFloat"));

        let before = host.global().function("parseFloat").unwrap().clone();
        host.add_standard_globals().unwrap();
        assert!(host.global().function("parseFloat").unwrap().ptr_eq(&before));
    }

    #[test]
    fn test_namespace_mut_routes_by_id() {
        let mut host = Host::new(HostCapabilities::FULL);
        host.namespace_mut(NamespaceId::Number)
            .assign("x", Value::Number(1.0), Provenance::Native)
            .unwrap();
        assert_eq!(host.number().number("x"), Some(1.0));
        assert!(!host.math().contains("x"));
        assert_eq!(NamespaceId::Number.to_string(), "Number");
    }
}
