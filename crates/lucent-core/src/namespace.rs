// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Externally visible module surfaces.
//!
//! A [`Namespace`] is the table a segment exposes to the host: bound types,
//! free functions, and nested namespaces mounted under fixed names. Entries
//! are reachable directly or through dotted-path [`Namespace::lookup`].

use crate::descriptor::{NativeFn, TypeDescriptor};
use crate::error::CoreError;
use crate::value::Value;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// One namespace member.
pub enum Entry {
    /// A bound type.
    Type(Arc<TypeDescriptor>),
    /// A bound free function.
    Function(NativeFn),
    /// A nested namespace.
    Module(Namespace),
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(descriptor) => write!(f, "Type({})", descriptor.name()),
            Self::Function(_) => write!(f, "Function"),
            Self::Module(namespace) => write!(f, "Module({})", namespace.name()),
        }
    }
}

/// A named table of host-visible members.
#[derive(Debug, Default)]
pub struct Namespace {
    name: String,
    doc: String,
    entries: BTreeMap<String, Entry>,
}

impl Namespace {
    /// Create an empty namespace with the given reported name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            entries: BTreeMap::new(),
        }
    }

    /// Reported qualified name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Override the reported name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Documentation line.
    #[must_use]
    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn set_doc(&mut self, doc: impl Into<String>) {
        self.doc = doc.into();
    }

    /// Bind a type under its exposed name.
    pub fn insert_type(&mut self, descriptor: Arc<TypeDescriptor>) -> Result<(), CoreError> {
        self.insert(descriptor.name().to_string(), Entry::Type(descriptor))
    }

    /// Bind a free function.
    pub fn insert_function(
        &mut self,
        name: impl Into<String>,
        function: NativeFn,
    ) -> Result<(), CoreError> {
        self.insert(name.into(), Entry::Function(function))
    }

    /// Mount a nested namespace under a fixed name, returning a handle for
    /// populating its members.
    pub fn insert_module(
        &mut self,
        name: impl Into<String>,
        module: Namespace,
    ) -> Result<&mut Namespace, CoreError> {
        let name = name.into();
        match self.entries.entry(name.clone()) {
            btree_map::Entry::Occupied(_) => Err(CoreError::DuplicateEntry(name)),
            btree_map::Entry::Vacant(slot) => match slot.insert(Entry::Module(module)) {
                Entry::Module(namespace) => Ok(namespace),
                _ => unreachable!("freshly inserted entry is a module"),
            },
        }
    }

    fn insert(&mut self, name: String, entry: Entry) -> Result<(), CoreError> {
        match self.entries.entry(name) {
            btree_map::Entry::Occupied(slot) => Err(CoreError::DuplicateEntry(slot.key().clone())),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Direct member lookup.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Dotted-path lookup, descending through nested namespaces
    /// (`"mueller.rotator"`).
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Entry> {
        match path.split_once('.') {
            None => self.entries.get(path),
            Some((head, rest)) => match self.entries.get(head)? {
                Entry::Module(namespace) => namespace.lookup(rest),
                _ => None,
            },
        }
    }

    /// Fetch a bound type by name.
    #[must_use]
    pub fn type_descriptor(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        match self.entries.get(name)? {
            Entry::Type(descriptor) => Some(descriptor.clone()),
            _ => None,
        }
    }

    /// Fetch a bound free function by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<NativeFn> {
        match self.entries.get(name)? {
            Entry::Function(function) => Some(function.clone()),
            _ => None,
        }
    }

    /// Fetch a nested namespace by mount name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&Namespace> {
        match self.entries.get(name)? {
            Entry::Module(namespace) => Some(namespace),
            _ => None,
        }
    }

    /// Call a bound free function by dotted path.
    pub fn call(&self, path: &str, arguments: &[Value]) -> Result<Value, CoreError> {
        match self.lookup(path) {
            Some(Entry::Function(function)) => function(arguments),
            _ => Err(CoreError::UnknownMember {
                type_name: "namespace",
                member: path.to_string(),
            }),
        }
    }

    /// Number of direct members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the namespace has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over direct members in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> + '_ {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn constant(value: i64) -> NativeFn {
        Arc::new(move |_| Ok(Value::Int(value)))
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let mut namespace = Namespace::new("pkg");
        namespace.insert_function("f", constant(1)).unwrap();
        assert!(matches!(
            namespace.insert_function("f", constant(2)),
            Err(CoreError::DuplicateEntry(name)) if name == "f"
        ));
    }

    #[test]
    fn dotted_lookup_descends_nested_namespaces() {
        let mut namespace = Namespace::new("pkg");
        let nested = namespace.insert_module("util", Namespace::new("pkg.util")).unwrap();
        nested.insert_function("answer", constant(42)).unwrap();

        assert!(namespace.lookup("util.answer").is_some());
        assert!(namespace.lookup("util.missing").is_none());
        assert!(namespace.lookup("answer").is_none());
        assert_eq!(namespace.call("util.answer", &[]).ok(), Some(Value::Int(42)));
    }

    #[test]
    fn name_can_be_overridden_and_restored() {
        let mut namespace = Namespace::new("pkg.variant");
        namespace.set_name("pkg");
        assert_eq!(namespace.name(), "pkg");
        namespace.set_name("pkg.variant");
        assert_eq!(namespace.name(), "pkg.variant");
    }
}
