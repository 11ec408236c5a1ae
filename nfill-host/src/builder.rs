// nfill - nfill-host
// Module: Host Builder
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Builder for [`Host`] environments.
//!
//! Members registered here are the host's own natives; the installer will
//! leave every one of them alone.
//!
//! ```
//! use nfill_host::prelude::*;
//!
//! let host = HostBuilder::new()
//!     .without_property_descriptors()
//!     .with_native_value(NamespaceId::Number, "EPSILON", 1.0)
//!     .build()
//!     .unwrap();
//!
//! assert!(!host.capabilities().property_descriptors);
//! assert_eq!(host.number().number("EPSILON"), Some(1.0));
//! ```

use crate::prelude::*;

/// Builder for a host environment
#[derive(Debug, Clone)]
pub struct HostBuilder {
    capabilities: HostCapabilities,
    standard_globals: bool,
    natives: Vec<(NamespaceId, String, Member)>,
}

impl Default for HostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBuilder {
    /// Starts from a full-featured host with the standard global routines.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capabilities: HostCapabilities::FULL,
            standard_globals: true,
            natives: Vec::new(),
        }
    }

    /// Replaces the capabilities wholesale.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: HostCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Simulates a host without descriptor-based property definition.
    #[must_use]
    pub fn without_property_descriptors(mut self) -> Self {
        self.capabilities.property_descriptors = false;
        self
    }

    /// Simulates a host without single-precision storage.
    #[must_use]
    pub fn without_float32_storage(mut self) -> Self {
        self.capabilities.float32_storage = false;
        self
    }

    /// Leaves the global `parseFloat` and `parseInt` out.
    #[must_use]
    pub fn without_standard_globals(mut self) -> Self {
        self.standard_globals = false;
        self
    }

    /// Registers a native function under its own name.
    #[must_use]
    pub fn with_native(mut self, namespace: NamespaceId, function: NativeFunction) -> Self {
        let name = function.name().to_string();
        self.natives.push((namespace, name, Member::Function(function)));
        self
    }

    /// Registers a native function built from a closure.
    #[must_use]
    pub fn with_native_function<F>(
        self,
        namespace: NamespaceId,
        name: &str,
        length: u8,
        body: F,
    ) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.with_native(namespace, NativeFunction::new(name, length, body))
    }

    /// Registers a native non-function member.
    #[must_use]
    pub fn with_native_value(
        mut self,
        namespace: NamespaceId,
        name: &str,
        value: impl Into<Value>,
    ) -> Self {
        self.natives.push((namespace, name.to_string(), Member::Value(value.into())));
        self
    }

    /// Builds the host.
    ///
    /// Natives registered here take precedence over the standard globals.
    ///
    /// # Errors
    ///
    /// Returns a namespace error if the same name was registered twice in
    /// one namespace, or a property error if a standard global cannot be
    /// assigned.
    pub fn build(self) -> Result<Host> {
        let mut host = Host::new(self.capabilities);

        for (namespace, name, member) in self.natives {
            let target = host.namespace_mut(namespace);
            if target.contains(&name) {
                return Err(DuplicateMemberError("Member registered twice").into());
            }
            target.assign(&name, member, Provenance::Native)?;
        }

        if self.standard_globals {
            host.add_standard_globals()?;
        }

        Ok(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder() {
        let host = HostBuilder::default().build().unwrap();
        assert_eq!(host.capabilities(), HostCapabilities::FULL);
        assert!(host.global().is_callable("parseFloat"));
        assert!(host.math().is_empty());
    }

    #[test]
    fn test_capability_toggles() {
        let host = HostBuilder::new()
            .without_float32_storage()
            .without_property_descriptors()
            .without_standard_globals()
            .build()
            .unwrap();
        assert_eq!(host.capabilities(), HostCapabilities::LEGACY);
        assert!(host.global().is_empty());
        assert!(!host.number().supports_descriptors());
    }

    #[test]
    fn test_natives_are_marked_native() {
        let host = HostBuilder::new()
            .with_native_function(NamespaceId::Math, "sign", 1, |_| Value::Number(9.0))
            .with_native_value(NamespaceId::Number, "EPSILON", 0.5)
            .build()
            .unwrap();
        assert_eq!(host.provenance(NamespaceId::Math, "sign"), Some(Provenance::Native));
        assert_eq!(host.call(NamespaceId::Math, "sign", &[]).unwrap(), Value::Number(9.0));
        assert_eq!(host.number().number("EPSILON"), Some(0.5));
    }

    #[test]
    fn test_custom_global_wins_over_standard() {
        let custom = NativeFunction::new("parseInt", 2, |_| Value::Number(-1.0));
        let host = HostBuilder::new()
            .with_native(NamespaceId::Global, custom.clone())
            .build()
            .unwrap();
        assert!(host.global().function("parseInt").unwrap().ptr_eq(&custom));
        assert!(host.global().is_callable("parseFloat"));
    }

    #[test]
    fn test_native_value_global_blocks_standard_routine() {
        let host = HostBuilder::new()
            .with_native_value(NamespaceId::Global, "parseFloat", 1.5)
            .build()
            .unwrap();
        assert!(!host.global().is_callable("parseFloat"));
        assert_eq!(host.global().number("parseFloat"), Some(1.5));
        assert!(host.global().is_callable("parseInt"));
    }

    #[test]
    fn test_duplicate_member_is_rejected() {
        let err = HostBuilder::new()
            .with_native_value(NamespaceId::Math, "x", 1.0)
            .with_native_value(NamespaceId::Math, "x", 2.0)
            .build()
            .unwrap_err();
        assert_eq!(err.code, codes::DUPLICATE_MEMBER);
        assert!(err.is_namespace_error());
    }
}
