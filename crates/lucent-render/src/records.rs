// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Sample records exchanged with integrators.
//!
//! Records are bound in the namespace so hosts can introspect them, but
//! they live outside the scene-object hierarchy and are never probed by
//! the caster.

use crate::error::Result;
use crate::hierarchy::{
    BSDF_SAMPLE_CLASS, DIRECTION_SAMPLE_CLASS, POSITION_SAMPLE_CLASS, SURFACE_INTERACTION_CLASS,
};
use crate::module::Binder;
use lucent_core::object::downcast;
use lucent_core::{Class, Object, TypeDescriptor, Value};
use std::any::Any;
use std::sync::Arc;

/// Position sampled on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSample {
    /// Sampled position.
    pub p: [f64; 3],
    /// Surface normal at the position.
    pub n: [f64; 3],
    /// Surface parameterization coordinates.
    pub uv: [f64; 2],
    /// Associated time value.
    pub time: f64,
    /// Density of the sample.
    pub pdf: f64,
    /// Set when the sample was drawn from a Dirac delta distribution.
    pub delta: bool,
}

impl Object for PositionSample {
    fn class(&self) -> &'static Class {
        &POSITION_SAMPLE_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Position sample augmented with a direction toward it.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionSample {
    pub position: PositionSample,
    /// Unit direction from the reference point to the sample.
    pub d: [f64; 3],
    /// Distance from the reference point.
    pub dist: f64,
}

impl Object for DirectionSample {
    fn class(&self) -> &'static Class {
        &DIRECTION_SAMPLE_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Ray-surface intersection.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceInteraction {
    /// Intersection position.
    pub p: [f64; 3],
    /// Distance along the ray.
    pub t: f64,
    /// Surface parameterization coordinates.
    pub uv: [f64; 2],
    /// Incident direction in local coordinates.
    pub wi: [f64; 3],
}

impl SurfaceInteraction {
    /// Whether the interaction records a hit.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.t.is_finite()
    }
}

impl Object for SurfaceInteraction {
    fn class(&self) -> &'static Class {
        &SURFACE_INTERACTION_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Outcome of sampling a BSDF lobe.
#[derive(Debug, Clone, PartialEq)]
pub struct BsdfSample {
    /// Sampled outgoing direction.
    pub wo: [f64; 3],
    /// Density of the sample.
    pub pdf: f64,
    /// Relative index of refraction along the sampled direction.
    pub eta: f64,
    /// Flags of the sampled lobe.
    pub sampled_flags: u32,
}

impl Object for BsdfSample {
    fn class(&self) -> &'static Class {
        &BSDF_SAMPLE_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<()> {
    binder.bind_type(Arc::new(
        TypeDescriptor::builder(&POSITION_SAMPLE_CLASS)
            .doc("Position sampled on a surface.")
            .property("pdf", |object| {
                Ok(Value::Float(
                    downcast::<PositionSample>(object, "PositionSample")?.pdf,
                ))
            })
            .build(),
    ))?;

    binder.bind_type(Arc::new(
        TypeDescriptor::builder(&DIRECTION_SAMPLE_CLASS)
            .doc("Position sample with a direction toward it.")
            .property("dist", |object| {
                Ok(Value::Float(
                    downcast::<DirectionSample>(object, "DirectionSample")?.dist,
                ))
            })
            .build(),
    ))?;

    binder.bind_type(Arc::new(
        TypeDescriptor::builder(&SURFACE_INTERACTION_CLASS)
            .doc("Ray-surface intersection.")
            .property("t", |object| {
                Ok(Value::Float(
                    downcast::<SurfaceInteraction>(object, "SurfaceInteraction")?.t,
                ))
            })
            .build(),
    ))?;

    binder.bind_type(Arc::new(
        TypeDescriptor::builder(&BSDF_SAMPLE_CLASS)
            .doc("Outcome of sampling a BSDF lobe.")
            .property("pdf", |object| {
                Ok(Value::Float(downcast::<BsdfSample>(object, "BSDFSample")?.pdf))
            })
            .build(),
    ))?;

    Ok(())
}
