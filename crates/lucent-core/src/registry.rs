// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! The process-wide caster registry.
//!
//! Each hierarchy segment contributes one caster: a pure function that maps
//! an opaque [`ObjectRef`] to the most specific exposed wrapper the segment
//! knows, or `None` when the instance belongs to another segment. The
//! registry is append-only; there is no removal path. A torn-down segment's
//! caster stays registered and simply stops matching, because its probes
//! hold weak descriptor references.

use crate::descriptor::BoundObject;
use crate::object::ObjectRef;
use parking_lot::RwLock;
use std::sync::Arc;

/// A segment caster: resolve an opaque object to its most specific exposed
/// wrapper. A miss is a valid outcome, never an error.
pub type CasterFn = Arc<dyn Fn(&ObjectRef) -> Option<BoundObject> + Send + Sync>;

/// One segment's registered caster.
#[derive(Clone)]
pub struct RegisteredCaster {
    segment: &'static str,
    caster: CasterFn,
}

impl RegisteredCaster {
    /// Package a segment's caster for registration.
    #[must_use]
    pub fn new(segment: &'static str, caster: CasterFn) -> Self {
        Self { segment, caster }
    }

    /// Name of the contributing segment.
    #[must_use]
    pub fn segment(&self) -> &'static str {
        self.segment
    }
}

/// Append-only ordered list of segment casters.
///
/// Append order across segments is irrelevant for correctness: each caster
/// only resolves its own segment's subtypes.
pub struct CasterRegistry {
    entries: RwLock<Vec<RegisteredCaster>>,
}

impl CasterRegistry {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Register a segment's caster. Must happen during the segment's own
    /// load, before any instance of its subtypes can be observed.
    pub fn append(&self, entry: RegisteredCaster) {
        log::debug!("[core] caster registered by segment '{}'", entry.segment());
        self.entries.write().push(entry);
    }

    /// Number of registered casters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if no caster has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Names of the contributing segments, in registration order.
    #[must_use]
    pub fn segments(&self) -> Vec<&'static str> {
        self.entries.read().iter().map(RegisteredCaster::segment).collect()
    }

    /// Resolve an opaque object against every registered caster, in
    /// registration order. Returns `None` when no segment matches.
    #[must_use]
    pub fn resolve(&self, object: &ObjectRef) -> Option<BoundObject> {
        let entries = self.entries.read();
        for entry in entries.iter() {
            if let Some(bound) = (entry.caster)(object) {
                return Some(bound);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{Class, OBJECT_CLASS};
    use crate::descriptor::TypeDescriptor;
    use crate::object::Object;
    use std::any::Any;

    static NODE_CLASS: Class = Class::new("Node", Some(&OBJECT_CLASS));

    struct Node;

    impl Object for Node {
        fn class(&self) -> &'static Class {
            &NODE_CLASS
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn resolution_walks_registration_order() {
        let registry = CasterRegistry::new();
        let descriptor = Arc::new(TypeDescriptor::builder(&NODE_CLASS).build());

        registry.append(RegisteredCaster::new("never", Arc::new(|_| None)));
        let matching = descriptor.clone();
        registry.append(RegisteredCaster::new(
            "nodes",
            Arc::new(move |object| {
                object
                    .class()
                    .derives_from(&NODE_CLASS)
                    .then(|| BoundObject::new(matching.clone(), object.clone()))
            }),
        ));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.segments(), vec!["never", "nodes"]);

        let object: ObjectRef = Arc::new(Node);
        let bound = registry.resolve(&object).expect("node resolves");
        assert_eq!(bound.type_name(), "Node");
    }

    #[test]
    fn miss_is_not_an_error() {
        let registry = CasterRegistry::new();
        registry.append(RegisteredCaster::new("never", Arc::new(|_| None)));
        let object: ObjectRef = Arc::new(Node);
        assert!(registry.resolve(&object).is_none());
    }
}
