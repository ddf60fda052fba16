// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! The scene container.
//!
//! A [`Scene`] owns the objects participating in a render and the kd-tree
//! built over its shapes. Construction requires the acceleration context;
//! loading the segment initializes it before anything can build a scene.

use crate::accel::{self, ShapeKdTree};
use crate::error::Result;
use crate::hierarchy::SCENE_CLASS;
use crate::module::{wrap, Binder};
use lucent_core::object::downcast;
use lucent_core::value::args;
use lucent_core::{Class, CoreError, Object, ObjectRef, TypeDescriptor, Value};
use std::any::Any;
use std::sync::{Arc, Weak};

/// Root container of renderable state.
pub struct Scene {
    shapes: Vec<ObjectRef>,
    sensors: Vec<ObjectRef>,
    emitters: Vec<ObjectRef>,
    kdtree: ShapeKdTree,
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = |objs: &[ObjectRef]| -> Vec<&'static str> {
            objs.iter().map(|o| o.class().name()).collect()
        };
        f.debug_struct("Scene")
            .field("shapes", &names(&self.shapes))
            .field("sensors", &names(&self.sensors))
            .field("emitters", &names(&self.emitters))
            .field("kdtree", &self.kdtree)
            .finish()
    }
}

impl Scene {
    /// Build a scene, partitioning `shapes` into a kd-tree.
    pub fn new(
        shapes: Vec<ObjectRef>,
        sensors: Vec<ObjectRef>,
        emitters: Vec<ObjectRef>,
    ) -> Result<Self> {
        let kdtree = accel::build_kdtree(&shapes)?;
        Ok(Self {
            shapes,
            sensors,
            emitters,
            kdtree,
        })
    }

    #[must_use]
    pub fn shapes(&self) -> &[ObjectRef] {
        &self.shapes
    }

    #[must_use]
    pub fn sensors(&self) -> &[ObjectRef] {
        &self.sensors
    }

    #[must_use]
    pub fn emitters(&self) -> &[ObjectRef] {
        &self.emitters
    }

    #[must_use]
    pub fn kdtree(&self) -> &ShapeKdTree {
        &self.kdtree
    }
}

impl Object for Scene {
    fn class(&self) -> &'static Class {
        &SCENE_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn collect_objects(
    values: &[Value],
    index: usize,
) -> std::result::Result<Vec<ObjectRef>, CoreError> {
    args::list(values, index)?
        .iter()
        .map(|value| {
            value
                .as_object()
                .map(|bound| bound.object().clone())
                .ok_or(CoreError::TypeMismatch {
                    expected: "object",
                    found: value.type_name(),
                })
        })
        .collect()
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<Arc<TypeDescriptor>> {
    let scene = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&SCENE_CLASS)
            .doc("Root container of renderable state.")
            .constructor(move |values| {
                args::expect(values, 3)?;
                let shapes = collect_objects(values, 0)?;
                let sensors = collect_objects(values, 1)?;
                let emitters = collect_objects(values, 2)?;
                let scene = Scene::new(shapes, sensors, emitters)
                    .map_err(|error| CoreError::Runtime(error.to_string()))?;
                wrap(&descriptor, scene)
            })
            .property("shape_count", |object| {
                Ok(Value::Int(downcast::<Scene>(object, "Scene")?.shapes.len() as i64))
            })
            .property("sensor_count", |object| {
                Ok(Value::Int(downcast::<Scene>(object, "Scene")?.sensors.len() as i64))
            })
            .property("emitter_count", |object| {
                Ok(Value::Int(
                    downcast::<Scene>(object, "Scene")?.emitters.len() as i64,
                ))
            })
            .build()
    });
    binder.expose(scene)
}
