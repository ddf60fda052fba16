// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Segment assembly.
//!
//! [`load_module`] is the segment's entry point: it imports the live core
//! runtime (a structural dependency; the import failing aborts the load),
//! initializes the acceleration context, populates the host-visible
//! namespace, registers the segment's ordered caster with the shared
//! registry, and arms teardown on the segment's root type.
//!
//! While the namespace is being populated its reported name is overridden
//! with the plain documentation name; the variant-qualified name is
//! restored on every exit path, early error returns included.

use crate::accel;
use crate::bsdf;
use crate::caster::SegmentCaster;
use crate::endpoint;
use crate::error::Result;
use crate::film;
use crate::fresnel;
use crate::integrator;
use crate::lifecycle;
use crate::medium;
use crate::mueller;
use crate::records;
use crate::sampler;
use crate::scene;
use crate::shape;
use crate::texture;
use crate::variant::Variant;
use lucent_core::value::args;
use lucent_core::{
    color, BoundObject, CoreError, CoreRuntime, Namespace, Object, ObjectRef, TypeDescriptor,
    Value,
};
use std::sync::{Arc, Weak};

/// Name reported while documentation tooling walks the namespace.
pub const DOC_NAME: &str = "lucent.render";

/// Name under which the segment registers its caster.
pub const SEGMENT_NAME: &str = "render";

/// A loaded rendering segment.
///
/// Owns the host-visible namespace and a pin on the core runtime. Dropping
/// the module releases the namespace; when the last reference to the
/// `Scene` descriptor goes with it, segment teardown runs (see
/// [`crate::lifecycle`]).
pub struct RenderModule {
    namespace: Namespace,
    caster: Arc<SegmentCaster>,
    core: Arc<CoreRuntime>,
    variant: Variant,
}

impl RenderModule {
    /// The host-visible namespace.
    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The segment's ordered caster.
    #[must_use]
    pub fn caster(&self) -> &Arc<SegmentCaster> {
        &self.caster
    }

    /// The pinned core runtime.
    #[must_use]
    pub fn core(&self) -> &Arc<CoreRuntime> {
        &self.core
    }

    /// Variant this segment was loaded for.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Resolve an opaque object through the shared registry.
    #[must_use]
    pub fn resolve(&self, object: &ObjectRef) -> Option<BoundObject> {
        self.core.resolve(object)
    }
}

/// Load the rendering segment against the live core runtime.
pub fn load_module(variant: Variant) -> Result<RenderModule> {
    let core = CoreRuntime::instance()?;
    accel::static_init();

    let mut namespace = Namespace::new(DOC_NAME);
    namespace.set_doc("Rendering primitives and utilities.");

    let qualified = format!("{DOC_NAME}.{}", variant.name());
    let (scene_descriptor, exposed) = {
        let mut guard = NameGuard::new(&mut namespace, qualified);
        let mut binder = Binder::new(guard.namespace());
        let scene_descriptor = populate(&mut binder)?;
        (scene_descriptor, binder.finish())
    };

    let caster = SegmentCaster::new(&exposed);
    caster.register(&core);

    scene_descriptor.arm_finalizer(lifecycle::segment_teardown(core.clone()));
    drop(scene_descriptor);
    drop(exposed);

    log::info!(
        "[render] segment '{}' loaded: {} member(s), {} probe(s)",
        namespace.name(),
        namespace.len(),
        caster.probe_count()
    );

    Ok(RenderModule {
        namespace,
        caster,
        core,
        variant,
    })
}

fn populate(binder: &mut Binder<'_>) -> Result<Arc<TypeDescriptor>> {
    let scene_descriptor = scene::bind(binder)?;
    shape::bind(binder)?;
    medium::bind(binder)?;
    endpoint::bind(binder)?;
    records::bind(binder)?;
    bsdf::bind(binder)?;
    film::bind(binder)?;
    fresnel::bind(binder)?;
    integrator::bind(binder)?;
    mueller::bind(binder)?;
    sampler::bind(binder)?;
    texture::bind(binder)?;
    bind_srgb(binder)?;
    Ok(scene_descriptor)
}

fn bind_srgb(binder: &mut Binder<'_>) -> Result<()> {
    binder.bind_function("srgb_to_linear", |values| {
        args::expect(values, 1)?;
        Ok(Value::Float(color::srgb_to_linear(args::float(values, 0)?)))
    })?;
    binder.bind_function("linear_to_srgb", |values| {
        args::expect(values, 1)?;
        Ok(Value::Float(color::linear_to_srgb(args::float(values, 0)?)))
    })?;
    Ok(())
}

/// Populating helper handed to each primitive module's `bind`.
///
/// Inserts descriptors into the namespace and records which of them join
/// the caster probe set.
pub(crate) struct Binder<'a> {
    namespace: &'a mut Namespace,
    exposed: Vec<Arc<TypeDescriptor>>,
}

impl<'a> Binder<'a> {
    pub(crate) fn new(namespace: &'a mut Namespace) -> Self {
        Self {
            namespace,
            exposed: Vec::new(),
        }
    }

    /// Bind a type and include it in the caster probe set.
    pub(crate) fn expose(
        &mut self,
        descriptor: Arc<TypeDescriptor>,
    ) -> Result<Arc<TypeDescriptor>> {
        self.namespace.insert_type(descriptor.clone())?;
        self.exposed.push(descriptor.clone());
        Ok(descriptor)
    }

    /// Bind a type without a caster probe (sample records, auxiliary
    /// object types).
    pub(crate) fn bind_type(
        &mut self,
        descriptor: Arc<TypeDescriptor>,
    ) -> Result<Arc<TypeDescriptor>> {
        self.namespace.insert_type(descriptor.clone())?;
        Ok(descriptor)
    }

    /// Bind a free function at the namespace root.
    pub(crate) fn bind_function(
        &mut self,
        name: &'static str,
        function: impl Fn(&[Value]) -> std::result::Result<Value, CoreError> + Send + Sync + 'static,
    ) -> Result<()> {
        self.namespace
            .insert_function(name, Arc::new(function))?;
        Ok(())
    }

    /// Access the namespace, e.g. to mount a nested namespace.
    pub(crate) fn namespace(&mut self) -> &mut Namespace {
        self.namespace
    }

    fn finish(self) -> Vec<Arc<TypeDescriptor>> {
        self.exposed
    }
}

/// Wrap a freshly constructed object through its own descriptor.
///
/// Constructors capture a weak reference to the descriptor they live in;
/// by the time a constructor can run, the descriptor is necessarily alive.
pub(crate) fn wrap<T: Object>(
    descriptor: &Weak<TypeDescriptor>,
    object: T,
) -> std::result::Result<Value, CoreError> {
    let descriptor = descriptor
        .upgrade()
        .ok_or_else(|| CoreError::Runtime("constructing a released type".to_string()))?;
    Ok(Value::Object(BoundObject::new(descriptor, Arc::new(object))))
}

/// Restores a namespace's variant-qualified name when dropped.
struct NameGuard<'a> {
    namespace: &'a mut Namespace,
    restore_to: String,
}

impl<'a> NameGuard<'a> {
    fn new(namespace: &'a mut Namespace, restore_to: String) -> Self {
        Self {
            namespace,
            restore_to,
        }
    }

    fn namespace(&mut self) -> &mut Namespace {
        self.namespace
    }
}

impl Drop for NameGuard<'_> {
    fn drop(&mut self) {
        self.namespace.set_name(std::mem::take(&mut self.restore_to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    #[test]
    fn name_guard_restores_on_success_and_failure() {
        let mut namespace = Namespace::new(DOC_NAME);
        {
            let mut guard = NameGuard::new(&mut namespace, "lucent.render.scalar_rgb".to_string());
            assert_eq!(guard.namespace().name(), DOC_NAME);
        }
        assert_eq!(namespace.name(), "lucent.render.scalar_rgb");

        // A failing population path must leave the qualified name in place.
        let mut namespace = Namespace::new(DOC_NAME);
        let result: Result<()> = (|| {
            let mut guard = NameGuard::new(&mut namespace, "lucent.render.scalar_mono".to_string());
            let binder = Binder::new(guard.namespace());
            drop(binder);
            Err(RenderError::AccelNotReady)
        })();
        assert!(result.is_err());
        assert_eq!(namespace.name(), "lucent.render.scalar_mono");
    }
}
