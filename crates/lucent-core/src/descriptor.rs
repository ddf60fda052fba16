// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Host-visible type descriptors and bound object wrappers.
//!
//! A [`TypeDescriptor`] is the host environment's handle to one exposed
//! type: its class, bound constructor, methods, and properties. Descriptors
//! are shared (`Arc`) between the segment namespace that owns them and any
//! live [`BoundObject`] wrappers; a finalizer armed on a descriptor runs
//! when its last reference is released, which is how segment teardown is
//! driven deterministically.

use crate::class::Class;
use crate::error::CoreError;
use crate::object::ObjectRef;
use crate::value::Value;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Signature of a bound native function.
///
/// Bound methods receive their receiver as the leading argument.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value, CoreError> + Send + Sync>;

/// Read accessor for a bound property.
pub type PropertyFn = Arc<dyn Fn(&ObjectRef) -> Result<Value, CoreError> + Send + Sync>;

/// Callback run when a descriptor's last reference is released.
pub type Finalizer = Box<dyn FnOnce() + Send + Sync>;

/// One exposed type, as seen by the host environment.
pub struct TypeDescriptor {
    class: &'static Class,
    doc: &'static str,
    constructor: Option<NativeFn>,
    methods: BTreeMap<&'static str, NativeFn>,
    properties: BTreeMap<&'static str, PropertyFn>,
    finalizer: Mutex<Option<Finalizer>>,
}

impl TypeDescriptor {
    /// Start building a descriptor for `class`.
    #[must_use]
    pub fn builder(class: &'static Class) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(class)
    }

    /// Exposed type name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    /// Declared class of the exposed type.
    #[must_use]
    pub fn class(&self) -> &'static Class {
        self.class
    }

    /// One-line documentation string.
    #[must_use]
    pub fn doc(&self) -> &'static str {
        self.doc
    }

    /// Whether the type can be constructed from the host side.
    #[must_use]
    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Invoke the bound constructor.
    pub fn construct(&self, arguments: &[Value]) -> Result<Value, CoreError> {
        match &self.constructor {
            Some(constructor) => constructor(arguments),
            None => Err(CoreError::NotConstructible(self.name())),
        }
    }

    /// Look up a bound method.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&NativeFn> {
        self.methods.get(name)
    }

    /// Look up a bound property accessor.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyFn> {
        self.properties.get(name)
    }

    /// Names of all bound methods.
    pub fn method_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.keys().copied()
    }

    /// Names of all bound properties.
    pub fn property_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.keys().copied()
    }

    /// Arm a callback to run when the descriptor's last reference is
    /// released. The first arming wins; later calls are ignored.
    pub fn arm_finalizer(&self, finalizer: Finalizer) {
        let mut slot = self.finalizer.lock();
        if slot.is_some() {
            log::warn!(
                "[core] finalizer for '{}' already armed, ignoring",
                self.name()
            );
            return;
        }
        *slot = Some(finalizer);
    }

    /// Whether a finalizer is currently armed.
    #[must_use]
    pub fn finalizer_armed(&self) -> bool {
        self.finalizer.lock().is_some()
    }
}

impl Drop for TypeDescriptor {
    fn drop(&mut self) {
        if let Some(finalizer) = self.finalizer.get_mut().take() {
            log::debug!("[core] releasing type '{}'", self.name());
            finalizer();
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name())
            .field("constructor", &self.constructor.is_some())
            .field("methods", &self.methods.len())
            .field("properties", &self.properties.len())
            .finish()
    }
}

/// Fluent builder for [`TypeDescriptor`].
pub struct TypeDescriptorBuilder {
    class: &'static Class,
    doc: &'static str,
    constructor: Option<NativeFn>,
    methods: BTreeMap<&'static str, NativeFn>,
    properties: BTreeMap<&'static str, PropertyFn>,
}

impl TypeDescriptorBuilder {
    /// Create a builder for `class`.
    #[must_use]
    pub fn new(class: &'static Class) -> Self {
        Self {
            class,
            doc: "",
            constructor: None,
            methods: BTreeMap::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Set the documentation line.
    #[must_use]
    pub fn doc(mut self, doc: &'static str) -> Self {
        self.doc = doc;
        self
    }

    /// Bind the constructor.
    #[must_use]
    pub fn constructor(
        mut self,
        constructor: impl Fn(&[Value]) -> Result<Value, CoreError> + Send + Sync + 'static,
    ) -> Self {
        self.constructor = Some(Arc::new(constructor));
        self
    }

    /// Bind a method. The receiver arrives as the leading argument.
    #[must_use]
    pub fn method(
        mut self,
        name: &'static str,
        method: impl Fn(&[Value]) -> Result<Value, CoreError> + Send + Sync + 'static,
    ) -> Self {
        self.methods.insert(name, Arc::new(method));
        self
    }

    /// Bind a read-only property.
    #[must_use]
    pub fn property(
        mut self,
        name: &'static str,
        accessor: impl Fn(&ObjectRef) -> Result<Value, CoreError> + Send + Sync + 'static,
    ) -> Self {
        self.properties.insert(name, Arc::new(accessor));
        self
    }

    /// Finish the descriptor.
    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            class: self.class,
            doc: self.doc,
            constructor: self.constructor,
            methods: self.methods,
            properties: self.properties,
            finalizer: Mutex::new(None),
        }
    }
}

/// An object wrapper ready for the host: the instance plus its resolved
/// exposed type.
#[derive(Clone)]
pub struct BoundObject {
    descriptor: Arc<TypeDescriptor>,
    object: ObjectRef,
}

impl BoundObject {
    /// Wrap `object` through `descriptor`.
    #[must_use]
    pub fn new(descriptor: Arc<TypeDescriptor>, object: ObjectRef) -> Self {
        Self { descriptor, object }
    }

    /// Resolved exposed type.
    #[must_use]
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    /// The wrapped instance.
    #[must_use]
    pub fn object(&self) -> &ObjectRef {
        &self.object
    }

    /// Name of the resolved exposed type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.descriptor.name()
    }

    /// Invoke a bound method, passing the receiver as the leading argument.
    pub fn call(&self, name: &str, arguments: &[Value]) -> Result<Value, CoreError> {
        let method = self
            .descriptor
            .method(name)
            .ok_or_else(|| CoreError::UnknownMember {
                type_name: self.type_name(),
                member: name.to_string(),
            })?
            .clone();
        let mut full = Vec::with_capacity(arguments.len() + 1);
        full.push(Value::Object(self.clone()));
        full.extend_from_slice(arguments);
        method(&full)
    }

    /// Read a bound property.
    pub fn get(&self, name: &str) -> Result<Value, CoreError> {
        let accessor = self
            .descriptor
            .property(name)
            .ok_or_else(|| CoreError::UnknownMember {
                type_name: self.type_name(),
                member: name.to_string(),
            })?;
        accessor(&self.object)
    }
}

impl PartialEq for BoundObject {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.descriptor, &other.descriptor) && Arc::ptr_eq(&self.object, &other.object)
    }
}

impl fmt::Debug for BoundObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} object>", self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{Class, OBJECT_CLASS};
    use crate::object::Object;
    use crate::value::args;
    use std::any::Any;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static WIDGET_CLASS: Class = Class::new("Widget", Some(&OBJECT_CLASS));

    struct Widget {
        span: f64,
    }

    impl Object for Widget {
        fn class(&self) -> &'static Class {
            &WIDGET_CLASS
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn widget_descriptor() -> Arc<TypeDescriptor> {
        Arc::new(
            TypeDescriptor::builder(&WIDGET_CLASS)
                .doc("A widget.")
                .method("scaled_span", |values| {
                    let widget = args::receiver::<Widget>(values, "Widget")?;
                    let factor = args::float(values, 1)?;
                    Ok(Value::Float(widget.span * factor))
                })
                .property("span", |object| {
                    let widget = object
                        .as_any()
                        .downcast_ref::<Widget>()
                        .ok_or(CoreError::TypeMismatch {
                            expected: "Widget",
                            found: "object",
                        })?;
                    Ok(Value::Float(widget.span))
                })
                .build(),
        )
    }

    #[test]
    fn methods_and_properties_dispatch() {
        let descriptor = widget_descriptor();
        let bound = BoundObject::new(descriptor, Arc::new(Widget { span: 2.0 }));
        assert_eq!(bound.get("span").ok(), Some(Value::Float(2.0)));
        assert_eq!(
            bound.call("scaled_span", &[Value::Float(3.0)]).ok(),
            Some(Value::Float(6.0))
        );
        assert!(matches!(
            bound.call("missing", &[]),
            Err(CoreError::UnknownMember { .. })
        ));
    }

    #[test]
    fn construct_without_constructor_fails() {
        let descriptor = widget_descriptor();
        assert!(matches!(
            descriptor.construct(&[]),
            Err(CoreError::NotConstructible("Widget"))
        ));
    }

    #[test]
    fn finalizer_runs_on_last_release() {
        static FIRED: AtomicUsize = AtomicUsize::new(0);

        let descriptor = widget_descriptor();
        descriptor.arm_finalizer(Box::new(|| {
            FIRED.fetch_add(1, Ordering::SeqCst);
        }));
        // A second arming is ignored, not stacked.
        descriptor.arm_finalizer(Box::new(|| {
            FIRED.fetch_add(100, Ordering::SeqCst);
        }));

        let extra = descriptor.clone();
        drop(descriptor);
        assert_eq!(FIRED.load(Ordering::SeqCst), 0);
        drop(extra);
        assert_eq!(FIRED.load(Ordering::SeqCst), 1);
    }
}
