// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Participating media and phase functions.

use crate::error::Result;
use crate::hierarchy::{MEDIUM_CLASS, PHASE_FUNCTION_CLASS};
use crate::module::{wrap, Binder};
use lucent_core::object::downcast;
use lucent_core::value::args;
use lucent_core::{Class, Object, TypeDescriptor, Value};
use std::any::Any;
use std::sync::{Arc, Weak};

/// Phase function scatters isotropically.
pub const PHASE_FLAG_ISOTROPIC: u32 = 1 << 0;
/// Phase function depends on the angle between incident and outgoing
/// directions.
pub const PHASE_FLAG_ANISOTROPIC: u32 = 1 << 1;

/// Homogeneous participating medium.
#[derive(Debug)]
pub struct Medium {
    id: String,
    albedo: f64,
    sigma_t: f64,
}

impl Medium {
    #[must_use]
    pub fn new(id: impl Into<String>, albedo: f64, sigma_t: f64) -> Self {
        Self {
            id: id.into(),
            albedo,
            sigma_t,
        }
    }

    /// Single-scattering albedo.
    #[must_use]
    pub fn albedo(&self) -> f64 {
        self.albedo
    }

    /// Extinction coefficient.
    #[must_use]
    pub fn sigma_t(&self) -> f64 {
        self.sigma_t
    }
}

impl Object for Medium {
    fn class(&self) -> &'static Class {
        &MEDIUM_CLASS
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Directional scattering distribution of a medium.
#[derive(Debug)]
pub struct PhaseFunction {
    flags: u32,
}

impl PhaseFunction {
    #[must_use]
    pub fn new(flags: u32) -> Self {
        Self { flags }
    }

    #[must_use]
    pub fn flags(&self) -> u32 {
        self.flags
    }

    #[must_use]
    pub fn is_isotropic(&self) -> bool {
        self.flags & PHASE_FLAG_ISOTROPIC != 0
    }
}

impl Object for PhaseFunction {
    fn class(&self) -> &'static Class {
        &PHASE_FUNCTION_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<()> {
    let medium = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&MEDIUM_CLASS)
            .doc("Homogeneous participating medium.")
            .constructor(move |values| {
                args::expect(values, 3)?;
                let id = args::string(values, 0)?;
                let albedo = args::float(values, 1)?;
                let sigma_t = args::float(values, 2)?;
                wrap(&descriptor, Medium::new(id, albedo, sigma_t))
            })
            .property("albedo", |object| {
                Ok(Value::Float(downcast::<Medium>(object, "Medium")?.albedo))
            })
            .property("sigma_t", |object| {
                Ok(Value::Float(downcast::<Medium>(object, "Medium")?.sigma_t))
            })
            .build()
    });
    binder.expose(medium)?;

    let phase = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&PHASE_FUNCTION_CLASS)
            .doc("Directional scattering distribution of a medium.")
            .constructor(move |values| {
                args::expect(values, 1)?;
                let flags = args::int(values, 0)? as u32;
                wrap(&descriptor, PhaseFunction::new(flags))
            })
            .property("flags", |object| {
                Ok(Value::Int(i64::from(
                    downcast::<PhaseFunction>(object, "PhaseFunction")?.flags,
                )))
            })
            .build()
    });
    binder.expose(phase)?;

    Ok(())
}
