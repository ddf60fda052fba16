// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Ordered downcast probes for the rendering segment.
//!
//! Given an opaque hierarchy-root handle, the caster returns the wrapper
//! for the most specific exposed type the instance actually is. Probe
//! precedence is derived from declared hierarchy depth (most derived
//! first, declaration order preserved within equal depth), so a shallow
//! interface can never shadow one of its own descendants.
//!
//! Probes hold weak descriptor references: registration with the shared
//! registry is permanent, but a torn-down segment must not be kept alive by
//! its own caster. After teardown the probes simply stop matching.

use lucent_core::{BoundObject, Class, CoreRuntime, ObjectRef, RegisteredCaster, TypeDescriptor};
use std::sync::{Arc, Weak};

use crate::module::SEGMENT_NAME;

struct Probe {
    class: &'static Class,
    descriptor: Weak<TypeDescriptor>,
}

/// The segment's ordered caster.
pub struct SegmentCaster {
    probes: Vec<Probe>,
}

impl SegmentCaster {
    /// Build the probe list from the segment's exposed descriptors,
    /// ordering by hierarchy depth, most derived first.
    #[must_use]
    pub(crate) fn new(exposed: &[Arc<TypeDescriptor>]) -> Arc<Self> {
        let mut probes: Vec<Probe> = exposed
            .iter()
            .map(|descriptor| Probe {
                class: descriptor.class(),
                descriptor: Arc::downgrade(descriptor),
            })
            .collect();
        // Stable: equal depths keep their declaration order.
        probes.sort_by(|a, b| b.class.depth().cmp(&a.class.depth()));
        Arc::new(Self { probes })
    }

    /// Resolve an opaque object to its most specific exposed wrapper.
    ///
    /// `None` when no probe matches, or when the matching type has been
    /// released. Both are valid outcomes, never a fault.
    #[must_use]
    pub fn resolve(&self, object: &ObjectRef) -> Option<BoundObject> {
        let class = object.class();
        for probe in &self.probes {
            if class.derives_from(probe.class) {
                return probe
                    .descriptor
                    .upgrade()
                    .map(|descriptor| BoundObject::new(descriptor, object.clone()));
            }
        }
        None
    }

    /// Probe classes in precedence order.
    #[must_use]
    pub fn probe_classes(&self) -> Vec<&'static Class> {
        self.probes.iter().map(|probe| probe.class).collect()
    }

    /// Number of probes.
    #[must_use]
    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }

    /// Append this caster to the shared registry.
    pub(crate) fn register(self: &Arc<Self>, runtime: &CoreRuntime) {
        let caster = Arc::clone(self);
        runtime.casters().append(RegisteredCaster::new(
            SEGMENT_NAME,
            Arc::new(move |object: &ObjectRef| caster.resolve(object)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{Emitter, ProjectiveCamera, Sensor};
    use crate::hierarchy::{
        EMITTER_CLASS, ENDPOINT_CLASS, PROJECTIVE_CAMERA_CLASS, SENSOR_CLASS,
    };
    use lucent_core::{Object, TypeDescriptor, OBJECT_CLASS};

    fn endpoint_family() -> Vec<Arc<TypeDescriptor>> {
        // Deliberately declared shallow-first; construction must reorder.
        [
            &ENDPOINT_CLASS,
            &SENSOR_CLASS,
            &EMITTER_CLASS,
            &PROJECTIVE_CAMERA_CLASS,
        ]
        .into_iter()
        .map(|class| Arc::new(TypeDescriptor::builder(class).build()))
        .collect()
    }

    #[test]
    fn probe_order_is_depth_monotonic() {
        let descriptors = endpoint_family();
        let caster = SegmentCaster::new(&descriptors);
        let classes = caster.probe_classes();

        for window in classes.windows(2) {
            assert!(
                window[0].depth() >= window[1].depth(),
                "probe '{}' (depth {}) precedes deeper probe '{}' (depth {})",
                window[0].name(),
                window[0].depth(),
                window[1].name(),
                window[1].depth()
            );
        }
        // No probe may precede any of its own descendants.
        for (index, &shallow) in classes.iter().enumerate() {
            for &deep in &classes[index + 1..] {
                assert!(
                    !shallow.derives_from(deep),
                    "'{}' probed before its ancestor '{}'",
                    shallow.name(),
                    deep.name()
                );
            }
        }
    }

    #[test]
    fn resolves_most_specific_type() {
        let descriptors = endpoint_family();
        let caster = SegmentCaster::new(&descriptors);

        let camera: ObjectRef = Arc::new(ProjectiveCamera::new("cam", 35.0));
        let sensor: ObjectRef = Arc::new(Sensor::new("plain"));
        let emitter: ObjectRef = Arc::new(Emitter::new("sun"));

        assert_eq!(
            caster.resolve(&camera).map(|b| b.type_name()),
            Some("ProjectiveCamera")
        );
        assert_eq!(caster.resolve(&sensor).map(|b| b.type_name()), Some("Sensor"));
        assert_eq!(
            caster.resolve(&emitter).map(|b| b.type_name()),
            Some("Emitter")
        );
    }

    #[test]
    fn unknown_instances_miss_without_error() {
        struct Opaque;

        impl Object for Opaque {
            fn class(&self) -> &'static Class {
                &OBJECT_CLASS
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        let descriptors = endpoint_family();
        let caster = SegmentCaster::new(&descriptors);
        let opaque: ObjectRef = Arc::new(Opaque);
        assert!(caster.resolve(&opaque).is_none());
    }

    #[test]
    fn released_types_stop_matching() {
        let descriptors = endpoint_family();
        let caster = SegmentCaster::new(&descriptors);
        drop(descriptors);

        let sensor: ObjectRef = Arc::new(Sensor::new("plain"));
        assert!(caster.resolve(&sensor).is_none());
    }
}
