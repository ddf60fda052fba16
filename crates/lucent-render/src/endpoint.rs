// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Endpoints of light transport paths: sensors and emitters.
//!
//! Every endpoint carries an identifier, a to-world transform, and at most
//! one attached shape and one attached medium. A second attachment of
//! either kind is rejected.

use crate::error::{RenderError, Result};
use crate::hierarchy::{EMITTER_CLASS, ENDPOINT_CLASS, PROJECTIVE_CAMERA_CLASS, SENSOR_CLASS};
use crate::math::{identity, Matrix4};
use crate::module::{wrap, Binder};
use lucent_core::object::downcast;
use lucent_core::value::args;
use lucent_core::{Class, Object, ObjectRef, TypeDescriptor, Value};
use std::any::Any;
use std::sync::{Arc, Weak};

/// State shared by every endpoint kind.
struct EndpointData {
    id: String,
    to_world: Matrix4,
    shape: Option<ObjectRef>,
    medium: Option<ObjectRef>,
}

impl std::fmt::Debug for EndpointData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointData")
            .field("id", &self.id)
            .field("to_world", &self.to_world)
            .field("shape", &self.shape.as_ref().map(|o| o.class().name()))
            .field("medium", &self.medium.as_ref().map(|o| o.class().name()))
            .finish()
    }
}

impl EndpointData {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            to_world: identity(),
            shape: None,
            medium: None,
        }
    }

    fn set_shape(&mut self, shape: ObjectRef) -> Result<()> {
        if self.shape.is_some() {
            return Err(RenderError::DuplicateAttachment("shape"));
        }
        self.shape = Some(shape);
        Ok(())
    }

    fn set_medium(&mut self, medium: ObjectRef) -> Result<()> {
        if self.medium.is_some() {
            return Err(RenderError::DuplicateAttachment("medium"));
        }
        self.medium = Some(medium);
        Ok(())
    }
}

macro_rules! endpoint_accessors {
    () => {
        #[must_use]
        pub fn to_world(&self) -> &Matrix4 {
            &self.data.to_world
        }

        pub fn set_to_world(&mut self, to_world: Matrix4) {
            self.data.to_world = to_world;
        }

        /// Attach the shape this endpoint is associated with. At most one.
        pub fn set_shape(&mut self, shape: ObjectRef) -> Result<()> {
            self.data.set_shape(shape)
        }

        /// Attach the surrounding medium. At most one.
        pub fn set_medium(&mut self, medium: ObjectRef) -> Result<()> {
            self.data.set_medium(medium)
        }

        #[must_use]
        pub fn shape(&self) -> Option<&ObjectRef> {
            self.data.shape.as_ref()
        }

        #[must_use]
        pub fn medium(&self) -> Option<&ObjectRef> {
            self.data.medium.as_ref()
        }
    };
}

/// A measurement device observing the scene.
#[derive(Debug)]
pub struct Sensor {
    data: EndpointData,
    shutter_open: f64,
    shutter_close: f64,
}

impl Sensor {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            data: EndpointData::new(id),
            shutter_open: 0.0,
            shutter_close: 0.0,
        }
    }

    pub fn set_shutter(&mut self, open: f64, close: f64) {
        self.shutter_open = open;
        self.shutter_close = close;
    }

    #[must_use]
    pub fn shutter_open(&self) -> f64 {
        self.shutter_open
    }

    #[must_use]
    pub fn shutter_close(&self) -> f64 {
        self.shutter_close
    }

    endpoint_accessors!();
}

impl Object for Sensor {
    fn class(&self) -> &'static Class {
        &SENSOR_CLASS
    }

    fn id(&self) -> &str {
        &self.data.id
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A sensor with a perspective or orthographic projection.
#[derive(Debug)]
pub struct ProjectiveCamera {
    data: EndpointData,
    x_fov: f64,
    near_clip: f64,
    far_clip: f64,
}

impl ProjectiveCamera {
    #[must_use]
    pub fn new(id: impl Into<String>, x_fov: f64) -> Self {
        Self {
            data: EndpointData::new(id),
            x_fov,
            near_clip: 1e-2,
            far_clip: 1e4,
        }
    }

    #[must_use]
    pub fn x_fov(&self) -> f64 {
        self.x_fov
    }

    pub fn set_clip(&mut self, near: f64, far: f64) {
        self.near_clip = near;
        self.far_clip = far;
    }

    #[must_use]
    pub fn near_clip(&self) -> f64 {
        self.near_clip
    }

    #[must_use]
    pub fn far_clip(&self) -> f64 {
        self.far_clip
    }

    endpoint_accessors!();
}

impl Object for ProjectiveCamera {
    fn class(&self) -> &'static Class {
        &PROJECTIVE_CAMERA_CLASS
    }

    fn id(&self) -> &str {
        &self.data.id
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A light source.
#[derive(Debug)]
pub struct Emitter {
    data: EndpointData,
    sampling_weight: f64,
}

impl Emitter {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            data: EndpointData::new(id),
            sampling_weight: 1.0,
        }
    }

    #[must_use]
    pub fn sampling_weight(&self) -> f64 {
        self.sampling_weight
    }

    pub fn set_sampling_weight(&mut self, weight: f64) {
        self.sampling_weight = weight;
    }

    endpoint_accessors!();
}

impl Object for Emitter {
    fn class(&self) -> &'static Class {
        &EMITTER_CLASS
    }

    fn id(&self) -> &str {
        &self.data.id
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<()> {
    binder.expose(Arc::new(
        TypeDescriptor::builder(&ENDPOINT_CLASS)
            .doc("Start or end point of a light transport path.")
            .build(),
    ))?;

    let sensor = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&SENSOR_CLASS)
            .doc("Measurement device observing the scene.")
            .constructor(move |values| {
                args::expect(values, 1)?;
                wrap(&descriptor, Sensor::new(args::string(values, 0)?))
            })
            .property("shutter_open", |object| {
                Ok(Value::Float(downcast::<Sensor>(object, "Sensor")?.shutter_open))
            })
            .property("shutter_close", |object| {
                Ok(Value::Float(
                    downcast::<Sensor>(object, "Sensor")?.shutter_close,
                ))
            })
            .build()
    });
    binder.expose(sensor)?;

    let camera = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&PROJECTIVE_CAMERA_CLASS)
            .doc("Sensor with a projective transformation.")
            .constructor(move |values| {
                args::expect(values, 2)?;
                let id = args::string(values, 0)?;
                let x_fov = args::float(values, 1)?;
                wrap(&descriptor, ProjectiveCamera::new(id, x_fov))
            })
            .property("x_fov", |object| {
                Ok(Value::Float(
                    downcast::<ProjectiveCamera>(object, "ProjectiveCamera")?.x_fov,
                ))
            })
            .property("near_clip", |object| {
                Ok(Value::Float(
                    downcast::<ProjectiveCamera>(object, "ProjectiveCamera")?.near_clip,
                ))
            })
            .property("far_clip", |object| {
                Ok(Value::Float(
                    downcast::<ProjectiveCamera>(object, "ProjectiveCamera")?.far_clip,
                ))
            })
            .build()
    });
    binder.expose(camera)?;

    let emitter = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&EMITTER_CLASS)
            .doc("Light source.")
            .constructor(move |values| {
                args::expect(values, 1)?;
                wrap(&descriptor, Emitter::new(args::string(values, 0)?))
            })
            .property("sampling_weight", |object| {
                Ok(Value::Float(
                    downcast::<Emitter>(object, "Emitter")?.sampling_weight,
                ))
            })
            .build()
    });
    binder.expose(emitter)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::Medium;
    use crate::shape::Mesh;

    #[test]
    fn second_attachment_is_rejected() {
        let mut sensor = Sensor::new("front");
        let mesh: ObjectRef = Arc::new(Mesh::new("quad", 4, 2));
        sensor.set_shape(mesh.clone()).expect("first shape");
        assert!(matches!(
            sensor.set_shape(mesh),
            Err(RenderError::DuplicateAttachment("shape"))
        ));

        let mut emitter = Emitter::new("sun");
        let medium: ObjectRef = Arc::new(Medium::new("fog", 0.8, 0.1));
        emitter.set_medium(medium.clone()).expect("first medium");
        assert!(matches!(
            emitter.set_medium(medium),
            Err(RenderError::DuplicateAttachment("medium"))
        ));
    }

    #[test]
    fn endpoints_report_their_ids() {
        let camera = ProjectiveCamera::new("cam0", 49.1);
        assert_eq!(camera.id(), "cam0");
        assert_eq!(camera.x_fov(), 49.1);
    }
}
