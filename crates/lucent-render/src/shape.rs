// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Shapes: the geometry side of the hierarchy.

use crate::error::Result;
use crate::hierarchy::{MESH_CLASS, SHAPE_CLASS};
use crate::module::{wrap, Binder};
use lucent_core::object::downcast;
use lucent_core::value::args;
use lucent_core::{Class, Object, TypeDescriptor, Value};
use std::any::Any;
use std::sync::{Arc, Weak};

/// Triangle mesh with externally provided topology counts.
#[derive(Debug)]
pub struct Mesh {
    name: String,
    vertex_count: u64,
    face_count: u64,
}

impl Mesh {
    #[must_use]
    pub fn new(name: impl Into<String>, vertex_count: u64, face_count: u64) -> Self {
        Self {
            name: name.into(),
            vertex_count,
            face_count,
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> u64 {
        self.vertex_count
    }

    #[must_use]
    pub fn face_count(&self) -> u64 {
        self.face_count
    }
}

impl Object for Mesh {
    fn class(&self) -> &'static Class {
        &MESH_CLASS
    }

    fn id(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<()> {
    binder.expose(Arc::new(
        TypeDescriptor::builder(&SHAPE_CLASS)
            .doc("Geometric surface that can be intersected by rays.")
            .build(),
    ))?;

    let mesh = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&MESH_CLASS)
            .doc("Triangle mesh.")
            .constructor(move |values| {
                args::expect(values, 3)?;
                let name = args::string(values, 0)?;
                let vertex_count = args::int(values, 1)? as u64;
                let face_count = args::int(values, 2)? as u64;
                wrap(&descriptor, Mesh::new(name, vertex_count, face_count))
            })
            .property("vertex_count", |object| {
                Ok(Value::Int(downcast::<Mesh>(object, "Mesh")?.vertex_count as i64))
            })
            .property("face_count", |object| {
                Ok(Value::Int(downcast::<Mesh>(object, "Mesh")?.face_count as i64))
            })
            .build()
    });
    binder.expose(mesh)?;

    Ok(())
}
