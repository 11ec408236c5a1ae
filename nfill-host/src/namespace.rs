// nfill - nfill-host
// Module: Namespaces
//
// Copyright (c) 2025 The nfill Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! A named, mutable collection of properties.
//!
//! Two ways of adding a member exist, mirroring the host environment:
//!
//! - [`Namespace::assign`] is plain assignment. It creates an ordinary
//!   writable, enumerable, configurable property, or replaces the member of
//!   an existing writable one.
//! - [`Namespace::define_property`] is descriptor definition. It only works
//!   on hosts that support descriptors, and unset attributes default to
//!   `false`.

use crate::prelude::*;

/// A namespace such as `Math` or `Number`
#[derive(Debug, Clone)]
pub struct Namespace {
    name: &'static str,
    descriptors_supported: bool,
    properties: BTreeMap<String, Property>,
}

impl Namespace {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new(name: &'static str, descriptors_supported: bool) -> Self {
        Self { name, descriptors_supported, properties: BTreeMap::new() }
    }

    /// The namespace's own name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether [`Namespace::define_property`] is available
    #[must_use]
    pub fn supports_descriptors(&self) -> bool {
        self.descriptors_supported
    }

    /// Looks up a member.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Member> {
        self.properties.get(name).map(|p| &p.member)
    }

    /// Looks up a property with its attributes.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Whether anything is present under `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Whether a callable member is present under `name`
    #[must_use]
    pub fn is_callable(&self, name: &str) -> bool {
        self.get(name).is_some_and(Member::is_callable)
    }

    /// The function under `name`, if there is one
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&NativeFunction> {
        self.get(name).and_then(Member::as_function)
    }

    /// The number under `name`, if there is one
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Member::as_value).and_then(Value::as_number)
    }

    /// Who attached the member under `name`
    #[must_use]
    pub fn provenance(&self, name: &str) -> Option<Provenance> {
        self.properties.get(name).map(|p| p.provenance)
    }

    /// Plain assignment.
    ///
    /// # Errors
    ///
    /// Returns a property error if an existing property under `name` is not
    /// writable. The existing member is left untouched.
    pub fn assign(
        &mut self,
        name: &str,
        member: impl Into<Member>,
        provenance: Provenance,
    ) -> Result<()> {
        let member = member.into();
        match self.properties.get_mut(name) {
            Some(existing) if !existing.attributes.writable => {
                Err(NotWritableError("Cannot assign to read-only property").into())
            }
            Some(existing) => {
                existing.member = member;
                existing.provenance = provenance;
                Ok(())
            }
            None => {
                self.properties.insert(
                    name.to_string(),
                    Property { member, attributes: Attributes::DATA, provenance },
                );
                Ok(())
            }
        }
    }

    /// Descriptor-based definition.
    ///
    /// Redefining a non-configurable property succeeds only when the new
    /// descriptor is identical to the current one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DESCRIPTOR_UNSUPPORTED`] if the host has no
    /// descriptor support, or a property error if the existing property
    /// cannot be redefined.
    pub fn define_property(
        &mut self,
        name: &str,
        descriptor: PropertyDescriptor,
        provenance: Provenance,
    ) -> Result<()> {
        if !self.descriptors_supported {
            return Err(DescriptorUnsupportedError.into());
        }

        if let Some(existing) = self.properties.get(name) {
            if !existing.attributes.configurable {
                let unchanged = existing.attributes == descriptor.attributes
                    && existing.member.same_as(&descriptor.member);
                if unchanged {
                    return Ok(());
                }
                return Err(NotConfigurableError("Cannot redefine property").into());
            }
        }

        self.properties.insert(
            name.to_string(),
            Property { member: descriptor.member, attributes: descriptor.attributes, provenance },
        );
        Ok(())
    }

    /// Removes a property, returning whether one was present.
    ///
    /// # Errors
    ///
    /// Returns a property error if the property is not configurable.
    pub fn delete(&mut self, name: &str) -> Result<bool> {
        match self.properties.get(name) {
            Some(existing) if !existing.attributes.configurable => {
                Err(NotConfigurableError("Cannot delete property").into())
            }
            Some(_) => Ok(self.properties.remove(name).is_some()),
            None => Ok(false),
        }
    }

    /// Calls the function under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is present under `name` or the member is
    /// not callable.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        match self.get(name) {
            Some(Member::Function(f)) => Ok(f.call(args)),
            Some(Member::Value(_)) => Err(NotCallableError("Member holds a value").into()),
            None => Err(MemberNotFoundError("No member under that name").into()),
        }
    }

    /// Names of enumerable properties, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, p)| p.attributes.enumerable)
            .map(|(name, _)| name.as_str())
    }

    /// Names of all properties, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of properties
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the namespace has no properties
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_creates_ordinary_property() {
        let mut ns = Namespace::new("Math", true);
        ns.assign("answer", Value::Number(42.0), Provenance::Native).unwrap();

        let p = ns.property("answer").unwrap();
        assert_eq!(p.attributes, Attributes::DATA);
        assert_eq!(p.provenance, Provenance::Native);
        assert_eq!(ns.number("answer"), Some(42.0));
        assert_eq!(ns.keys().collect::<Vec<_>>(), vec!["answer"]);

        ns.assign("answer", Value::Number(7.0), Provenance::Fallback).unwrap();
        assert_eq!(ns.number("answer"), Some(7.0));
        assert_eq!(ns.provenance("answer"), Some(Provenance::Fallback));
    }

    #[test]
    fn test_assign_to_frozen_property_fails() {
        let mut ns = Namespace::new("Number", true);
        ns.define_property("EPSILON", PropertyDescriptor::new(Value::Number(1.0)), Provenance::Fallback)
            .unwrap();

        let err = ns.assign("EPSILON", Value::Number(2.0), Provenance::Native).unwrap_err();
        assert!(err.is_property_error());
        assert_eq!(err.code, codes::PROPERTY_NOT_WRITABLE);
        assert_eq!(ns.number("EPSILON"), Some(1.0));
    }

    #[test]
    fn test_frozen_property_is_hidden_from_keys() {
        let mut ns = Namespace::new("Number", true);
        ns.define_property("hidden", PropertyDescriptor::new(Value::Null), Provenance::Fallback)
            .unwrap();
        ns.assign("shown", Value::Null, Provenance::Native).unwrap();

        assert_eq!(ns.keys().collect::<Vec<_>>(), vec!["shown"]);
        assert_eq!(ns.names().collect::<Vec<_>>(), vec!["hidden", "shown"]);
        assert_eq!(ns.len(), 2);
    }

    #[test]
    fn test_define_without_descriptor_support() {
        let mut ns = Namespace::new("Number", false);
        let err = ns
            .define_property("x", PropertyDescriptor::new(Value::Null), Provenance::Fallback)
            .unwrap_err();
        assert_eq!(err, Error::DESCRIPTOR_UNSUPPORTED);
        assert!(ns.is_empty());
    }

    #[test]
    fn test_redefine_non_configurable() {
        let mut ns = Namespace::new("Number", true);
        let frozen = PropertyDescriptor::new(Value::Number(f64::NAN));
        ns.define_property("x", frozen.clone(), Provenance::Fallback).unwrap();

        // Identical redefinition is accepted
        ns.define_property("x", frozen, Provenance::Fallback).unwrap();

        let err = ns
            .define_property("x", PropertyDescriptor::new(Value::Number(1.0)), Provenance::Fallback)
            .unwrap_err();
        assert_eq!(err.code, codes::PROPERTY_NOT_CONFIGURABLE);
        assert!(ns.number("x").unwrap().is_nan());

        assert!(ns.delete("x").is_err());
    }

    #[test]
    fn test_delete_configurable() {
        let mut ns = Namespace::new("Math", true);
        ns.assign("x", Value::Null, Provenance::Native).unwrap();
        assert!(ns.delete("x").unwrap());
        assert!(!ns.delete("x").unwrap());
        assert!(!ns.contains("x"));
    }

    #[test]
    fn test_call() {
        let mut ns = Namespace::new("Math", true);
        ns.assign("twice", NativeFunction::new("twice", 1, |args| match args.first() {
            Some(Value::Number(n)) => Value::Number(n * 2.0),
            _ => Value::Number(f64::NAN),
        }), Provenance::Native)
            .unwrap();
        ns.assign("PI", Value::Number(3.0), Provenance::Native).unwrap();

        assert!(ns.is_callable("twice"));
        assert!(!ns.is_callable("PI"));
        assert_eq!(ns.call("twice", &[Value::Number(2.5)]).unwrap(), Value::Number(5.0));
        assert_eq!(ns.call("PI", &[]).unwrap_err().code, codes::NOT_CALLABLE);
        assert_eq!(ns.call("missing", &[]).unwrap_err().code, codes::MEMBER_NOT_FOUND);
    }
}
