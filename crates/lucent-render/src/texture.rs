// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Textures and volumes.

use crate::error::Result;
use crate::hierarchy::{TEXTURE_CLASS, VOLUME_CLASS, VOLUME_GRID_CLASS};
use crate::module::{wrap, Binder};
use lucent_core::object::downcast;
use lucent_core::value::args;
use lucent_core::{Class, Object, TypeDescriptor, Value};
use std::any::Any;
use std::sync::{Arc, Weak};

/// Uniform color texture.
#[derive(Debug)]
pub struct Texture {
    id: String,
    color: [f64; 3],
}

impl Texture {
    #[must_use]
    pub fn new(id: impl Into<String>, color: [f64; 3]) -> Self {
        Self {
            id: id.into(),
            color,
        }
    }

    #[must_use]
    pub fn color(&self) -> [f64; 3] {
        self.color
    }

    /// Channel average, used for importance heuristics.
    #[must_use]
    pub fn mean(&self) -> f64 {
        (self.color[0] + self.color[1] + self.color[2]) / 3.0
    }
}

impl Object for Texture {
    fn class(&self) -> &'static Class {
        &TEXTURE_CLASS
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Spatially varying 3D field.
#[derive(Debug)]
pub struct Volume {
    resolution: [u32; 3],
    channel_count: u32,
}

impl Volume {
    #[must_use]
    pub fn new(resolution: [u32; 3], channel_count: u32) -> Self {
        Self {
            resolution,
            channel_count,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> [u32; 3] {
        self.resolution
    }

    #[must_use]
    pub fn channel_count(&self) -> u32 {
        self.channel_count
    }
}

impl Object for Volume {
    fn class(&self) -> &'static Class {
        &VOLUME_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Dense voxel grid backing a volume.
///
/// Bound in the namespace but not probed by the caster.
#[derive(Debug)]
pub struct VolumeGrid {
    resolution: [u32; 3],
    channel_count: u32,
    max_value: f64,
}

impl VolumeGrid {
    #[must_use]
    pub fn new(resolution: [u32; 3], channel_count: u32, max_value: f64) -> Self {
        Self {
            resolution,
            channel_count,
            max_value,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> [u32; 3] {
        self.resolution
    }

    #[must_use]
    pub fn channel_count(&self) -> u32 {
        self.channel_count
    }

    /// Majorant used by transmittance estimators.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }
}

impl Object for VolumeGrid {
    fn class(&self) -> &'static Class {
        &VOLUME_GRID_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<()> {
    let texture = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&TEXTURE_CLASS)
            .doc("Uniform color texture.")
            .constructor(move |values| {
                args::expect(values, 4)?;
                let id = args::string(values, 0)?;
                let color = [
                    args::float(values, 1)?,
                    args::float(values, 2)?,
                    args::float(values, 3)?,
                ];
                wrap(&descriptor, Texture::new(id, color))
            })
            .method("mean", |values| {
                args::expect(values, 1)?;
                Ok(Value::Float(args::receiver::<Texture>(values, "Texture")?.mean()))
            })
            .build()
    });
    binder.expose(texture)?;

    let volume = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&VOLUME_CLASS)
            .doc("Spatially varying 3D field.")
            .constructor(move |values| {
                args::expect(values, 4)?;
                let resolution = [
                    args::int(values, 0)? as u32,
                    args::int(values, 1)? as u32,
                    args::int(values, 2)? as u32,
                ];
                let channel_count = args::int(values, 3)? as u32;
                wrap(&descriptor, Volume::new(resolution, channel_count))
            })
            .property("channel_count", |object| {
                Ok(Value::Int(i64::from(
                    downcast::<Volume>(object, "Volume")?.channel_count,
                )))
            })
            .build()
    });
    binder.expose(volume)?;

    let grid = Arc::new(
        TypeDescriptor::builder(&VOLUME_GRID_CLASS)
            .doc("Dense voxel grid backing a volume.")
            .property("max_value", |object| {
                Ok(Value::Float(
                    downcast::<VolumeGrid>(object, "VolumeGrid")?.max_value,
                ))
            })
            .build(),
    );
    binder.bind_type(grid)?;

    Ok(())
}
