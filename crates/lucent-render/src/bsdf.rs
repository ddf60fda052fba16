// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Surface scattering models.

use crate::error::Result;
use crate::hierarchy::{BSDF_CLASS, MICROFACET_CLASS};
use crate::module::{wrap, Binder};
use lucent_core::object::downcast;
use lucent_core::value::args;
use lucent_core::{Class, Object, TypeDescriptor, Value};
use std::any::Any;
use std::sync::{Arc, Weak};

/// Diffuse reflection lobe.
pub const BSDF_FLAG_DIFFUSE: u32 = 1 << 0;
/// Ideal specular (delta) lobe.
pub const BSDF_FLAG_DELTA: u32 = 1 << 1;
/// Rough (glossy) lobe.
pub const BSDF_FLAG_GLOSSY: u32 = 1 << 2;
/// Transmission through the surface.
pub const BSDF_FLAG_TRANSMISSION: u32 = 1 << 3;

/// Bidirectional scattering distribution function.
#[derive(Debug)]
pub struct Bsdf {
    id: String,
    flags: u32,
}

impl Bsdf {
    #[must_use]
    pub fn new(id: impl Into<String>, flags: u32) -> Self {
        Self {
            id: id.into(),
            flags,
        }
    }

    #[must_use]
    pub fn flags(&self) -> u32 {
        self.flags
    }

    /// Whether any lobe needs stochastic sampling.
    #[must_use]
    pub fn needs_sampling(&self) -> bool {
        self.flags & (BSDF_FLAG_DIFFUSE | BSDF_FLAG_GLOSSY) != 0
    }
}

impl Object for Bsdf {
    fn class(&self) -> &'static Class {
        &BSDF_CLASS
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Microfacet normal distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicrofacetType {
    Beckmann,
    Ggx,
}

/// Microfacet distribution with anisotropic roughness.
///
/// Bound in the namespace but not probed by the caster; it is a utility
/// type, not a scene object.
#[derive(Debug)]
pub struct MicrofacetDistribution {
    distribution: MicrofacetType,
    alpha_u: f64,
    alpha_v: f64,
}

impl MicrofacetDistribution {
    #[must_use]
    pub fn new(distribution: MicrofacetType, alpha_u: f64, alpha_v: f64) -> Self {
        Self {
            distribution,
            alpha_u,
            alpha_v,
        }
    }

    #[must_use]
    pub fn distribution(&self) -> MicrofacetType {
        self.distribution
    }

    #[must_use]
    pub fn alpha_u(&self) -> f64 {
        self.alpha_u
    }

    #[must_use]
    pub fn alpha_v(&self) -> f64 {
        self.alpha_v
    }

    #[must_use]
    pub fn is_isotropic(&self) -> bool {
        self.alpha_u == self.alpha_v
    }
}

impl Object for MicrofacetDistribution {
    fn class(&self) -> &'static Class {
        &MICROFACET_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<()> {
    let bsdf = Arc::new_cyclic(|descriptor: &Weak<TypeDescriptor>| {
        let descriptor = descriptor.clone();
        TypeDescriptor::builder(&BSDF_CLASS)
            .doc("Bidirectional scattering distribution function.")
            .constructor(move |values| {
                args::expect(values, 2)?;
                let id = args::string(values, 0)?;
                let flags = args::int(values, 1)? as u32;
                wrap(&descriptor, Bsdf::new(id, flags))
            })
            .property("flags", |object| {
                Ok(Value::Int(i64::from(downcast::<Bsdf>(object, "BSDF")?.flags)))
            })
            .method("needs_sampling", |values| {
                args::expect(values, 1)?;
                Ok(Value::Bool(
                    args::receiver::<Bsdf>(values, "BSDF")?.needs_sampling(),
                ))
            })
            .build()
    });
    binder.expose(bsdf)?;

    let microfacet = Arc::new(
        TypeDescriptor::builder(&MICROFACET_CLASS)
            .doc("Microfacet normal distribution.")
            .property("alpha_u", |object| {
                Ok(Value::Float(
                    downcast::<MicrofacetDistribution>(object, "MicrofacetDistribution")?.alpha_u,
                ))
            })
            .property("alpha_v", |object| {
                Ok(Value::Float(
                    downcast::<MicrofacetDistribution>(object, "MicrofacetDistribution")?.alpha_v,
                ))
            })
            .build(),
    );
    binder.bind_type(microfacet)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lobe_flags_drive_sampling() {
        assert!(Bsdf::new("diffuse", BSDF_FLAG_DIFFUSE).needs_sampling());
        assert!(!Bsdf::new("mirror", BSDF_FLAG_DELTA).needs_sampling());
    }

    #[test]
    fn isotropy_compares_roughness_axes() {
        let iso = MicrofacetDistribution::new(MicrofacetType::Ggx, 0.1, 0.1);
        let aniso = MicrofacetDistribution::new(MicrofacetType::Beckmann, 0.1, 0.4);
        assert!(iso.is_isotropic());
        assert!(!aniso.is_isotropic());
    }
}
