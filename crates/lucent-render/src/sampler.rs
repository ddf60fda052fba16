// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Sample generators.

use crate::error::Result;
use crate::hierarchy::SAMPLER_CLASS;
use crate::module::{wrap, Binder};
use lucent_core::object::downcast;
use lucent_core::value::args;
use lucent_core::{Class, Object, TypeDescriptor, Value};
use std::any::Any;
use std::sync::{Arc, Weak};

/// Pseudorandom sample generator configuration.
#[derive(Debug)]
pub struct Sampler {
    sample_count: u32,
    seed: u64,
}

impl Sampler {
    #[must_use]
    pub fn new(sample_count: u32, seed: u64) -> Self {
        Self { sample_count, seed }
    }

    /// Samples generated per pixel.
    #[must_use]
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Object for Sampler {
    fn class(&self) -> &'static Class {
        &SAMPLER_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<()> {
    let sampler = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&SAMPLER_CLASS)
            .doc("Pseudorandom sample generator.")
            .constructor(move |values| {
                args::expect(values, 2)?;
                let sample_count = args::int(values, 0)? as u32;
                let seed = args::int(values, 1)? as u64;
                wrap(&descriptor, Sampler::new(sample_count, seed))
            })
            .property("sample_count", |object| {
                Ok(Value::Int(i64::from(
                    downcast::<Sampler>(object, "Sampler")?.sample_count,
                )))
            })
            .build()
    });
    binder.expose(sampler)?;
    Ok(())
}
