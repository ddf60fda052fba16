// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Films, reconstruction filters, and image blocks.

use crate::error::Result;
use crate::hierarchy::{FILM_CLASS, IMAGE_BLOCK_CLASS, RFILTER_CLASS};
use crate::module::{wrap, Binder};
use lucent_core::object::downcast;
use lucent_core::value::args;
use lucent_core::{Class, Object, ObjectRef, TypeDescriptor, Value};
use std::any::Any;
use std::sync::{Arc, Weak};

/// Image reconstruction filter with a finite support radius.
#[derive(Debug)]
pub struct ReconstructionFilter {
    radius: f64,
}

impl ReconstructionFilter {
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Object for ReconstructionFilter {
    fn class(&self) -> &'static Class {
        &RFILTER_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Render target holding the reconstructed image.
pub struct Film {
    width: u32,
    height: u32,
    rfilter: Option<ObjectRef>,
}

impl std::fmt::Debug for Film {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Film")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rfilter", &self.rfilter.as_ref().map(|o| o.class().name()))
            .finish()
    }
}

impl Film {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rfilter: None,
        }
    }

    pub fn set_rfilter(&mut self, rfilter: ObjectRef) {
        self.rfilter = Some(rfilter);
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rfilter(&self) -> Option<&ObjectRef> {
        self.rfilter.as_ref()
    }
}

impl Object for Film {
    fn class(&self) -> &'static Class {
        &FILM_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Tile of film pixels accumulated by one worker.
///
/// Bound in the namespace but not probed by the caster.
#[derive(Debug)]
pub struct ImageBlock {
    width: u32,
    height: u32,
    channel_count: u32,
    border_size: u32,
}

impl ImageBlock {
    #[must_use]
    pub fn new(width: u32, height: u32, channel_count: u32, border_size: u32) -> Self {
        Self {
            width,
            height,
            channel_count,
            border_size,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn channel_count(&self) -> u32 {
        self.channel_count
    }

    #[must_use]
    pub fn border_size(&self) -> u32 {
        self.border_size
    }
}

impl Object for ImageBlock {
    fn class(&self) -> &'static Class {
        &IMAGE_BLOCK_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<()> {
    let rfilter = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&RFILTER_CLASS)
            .doc("Image reconstruction filter.")
            .constructor(move |values| {
                args::expect(values, 1)?;
                wrap(&descriptor, ReconstructionFilter::new(args::float(values, 0)?))
            })
            .property("radius", |object| {
                Ok(Value::Float(
                    downcast::<ReconstructionFilter>(object, "ReconstructionFilter")?.radius,
                ))
            })
            .build()
    });
    binder.expose(rfilter)?;

    let film = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&FILM_CLASS)
            .doc("Render target holding the reconstructed image.")
            .constructor(move |values| {
                args::expect(values, 2)?;
                let width = args::int(values, 0)? as u32;
                let height = args::int(values, 1)? as u32;
                wrap(&descriptor, Film::new(width, height))
            })
            .property("width", |object| {
                Ok(Value::Int(i64::from(downcast::<Film>(object, "Film")?.width)))
            })
            .property("height", |object| {
                Ok(Value::Int(i64::from(downcast::<Film>(object, "Film")?.height)))
            })
            .build()
    });
    binder.expose(film)?;

    let block = Arc::new(
        TypeDescriptor::builder(&IMAGE_BLOCK_CLASS)
            .doc("Tile of film pixels accumulated by one worker.")
            .property("channel_count", |object| {
                Ok(Value::Int(i64::from(
                    downcast::<ImageBlock>(object, "ImageBlock")?.channel_count,
                )))
            })
            .build(),
    );
    binder.bind_type(block)?;

    Ok(())
}
