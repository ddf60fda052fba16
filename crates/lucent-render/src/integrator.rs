// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Integrator configuration types.
//!
//! The integration algorithms themselves live elsewhere; these types carry
//! the configuration the host can introspect, and their class ancestry is
//! what the caster probes. `MonteCarloIntegrator` descends from
//! `SamplingIntegrator`, `AdjointIntegrator` directly from `Integrator`.

use crate::error::Result;
use crate::hierarchy::{
    ADJOINT_INTEGRATOR_CLASS, INTEGRATOR_CLASS, MONTE_CARLO_INTEGRATOR_CLASS,
    SAMPLING_INTEGRATOR_CLASS,
};
use crate::module::{wrap, Binder};
use lucent_core::object::downcast;
use lucent_core::value::args;
use lucent_core::{Class, Object, TypeDescriptor, Value};
use std::any::Any;
use std::sync::{Arc, Weak};

/// Forward integrator distributing samples over sensor pixels.
#[derive(Debug)]
pub struct SamplingIntegrator {
    samples_per_pass: u32,
}

impl SamplingIntegrator {
    #[must_use]
    pub fn new(samples_per_pass: u32) -> Self {
        Self { samples_per_pass }
    }

    #[must_use]
    pub fn samples_per_pass(&self) -> u32 {
        self.samples_per_pass
    }
}

impl Object for SamplingIntegrator {
    fn class(&self) -> &'static Class {
        &SAMPLING_INTEGRATOR_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Sampling integrator with stochastic path termination.
#[derive(Debug)]
pub struct MonteCarloIntegrator {
    max_depth: i32,
    rr_depth: u32,
}

impl MonteCarloIntegrator {
    /// `max_depth` of -1 means unbounded path length.
    #[must_use]
    pub fn new(max_depth: i32, rr_depth: u32) -> Self {
        Self {
            max_depth,
            rr_depth,
        }
    }

    #[must_use]
    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    /// Path depth at which Russian roulette starts.
    #[must_use]
    pub fn rr_depth(&self) -> u32 {
        self.rr_depth
    }
}

impl Object for MonteCarloIntegrator {
    fn class(&self) -> &'static Class {
        &MONTE_CARLO_INTEGRATOR_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Integrator tracing paths from the emitters toward the sensor.
#[derive(Debug)]
pub struct AdjointIntegrator {
    samples_per_pass: u32,
}

impl AdjointIntegrator {
    #[must_use]
    pub fn new(samples_per_pass: u32) -> Self {
        Self { samples_per_pass }
    }

    #[must_use]
    pub fn samples_per_pass(&self) -> u32 {
        self.samples_per_pass
    }
}

impl Object for AdjointIntegrator {
    fn class(&self) -> &'static Class {
        &ADJOINT_INTEGRATOR_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<()> {
    binder.expose(Arc::new(
        TypeDescriptor::builder(&INTEGRATOR_CLASS)
            .doc("Rendering algorithm interface.")
            .build(),
    ))?;

    let sampling = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&SAMPLING_INTEGRATOR_CLASS)
            .doc("Forward integrator distributing samples over pixels.")
            .constructor(move |values| {
                args::expect(values, 1)?;
                let samples_per_pass = args::int(values, 0)? as u32;
                wrap(&descriptor, SamplingIntegrator::new(samples_per_pass))
            })
            .property("samples_per_pass", |object| {
                Ok(Value::Int(i64::from(
                    downcast::<SamplingIntegrator>(object, "SamplingIntegrator")?
                        .samples_per_pass,
                )))
            })
            .build()
    });
    binder.expose(sampling)?;

    let monte_carlo = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&MONTE_CARLO_INTEGRATOR_CLASS)
            .doc("Sampling integrator with stochastic path termination.")
            .constructor(move |values| {
                args::expect(values, 2)?;
                let max_depth = args::int(values, 0)? as i32;
                let rr_depth = args::int(values, 1)? as u32;
                wrap(&descriptor, MonteCarloIntegrator::new(max_depth, rr_depth))
            })
            .property("max_depth", |object| {
                Ok(Value::Int(i64::from(
                    downcast::<MonteCarloIntegrator>(object, "MonteCarloIntegrator")?.max_depth,
                )))
            })
            .property("rr_depth", |object| {
                Ok(Value::Int(i64::from(
                    downcast::<MonteCarloIntegrator>(object, "MonteCarloIntegrator")?.rr_depth,
                )))
            })
            .build()
    });
    binder.expose(monte_carlo)?;

    let adjoint = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&ADJOINT_INTEGRATOR_CLASS)
            .doc("Integrator tracing paths from the emitters.")
            .constructor(move |values| {
                args::expect(values, 1)?;
                let samples_per_pass = args::int(values, 0)? as u32;
                wrap(&descriptor, AdjointIntegrator::new(samples_per_pass))
            })
            .property("samples_per_pass", |object| {
                Ok(Value::Int(i64::from(
                    downcast::<AdjointIntegrator>(object, "AdjointIntegrator")?.samples_per_pass,
                )))
            })
            .build()
    });
    binder.expose(adjoint)?;

    Ok(())
}
