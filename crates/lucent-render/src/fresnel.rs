// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Fresnel reflectance helpers, bound flat in the segment namespace.

use crate::error::Result;
use crate::module::Binder;
use lucent_core::value::args;
use lucent_core::Value;

/// Unpolarized Fresnel reflectance at a dielectric boundary.
///
/// `cos_theta_i` is the cosine of the incident angle; `eta` the relative
/// index of refraction (transmitted over incident side). Total internal
/// reflection yields 1.
#[must_use]
pub fn fresnel_dielectric(cos_theta_i: f64, eta: f64) -> f64 {
    let cos_theta_i = cos_theta_i.clamp(-1.0, 1.0);
    // Flip the interface when the ray arrives from the transmitted side.
    let (cos_theta_i, eta) = if cos_theta_i >= 0.0 {
        (cos_theta_i, eta)
    } else {
        (-cos_theta_i, 1.0 / eta)
    };

    let sin_theta_t_sq = (1.0 - cos_theta_i * cos_theta_i) / (eta * eta);
    if sin_theta_t_sq >= 1.0 {
        return 1.0;
    }
    let cos_theta_t = (1.0 - sin_theta_t_sq).sqrt();

    let r_parallel = (eta * cos_theta_i - cos_theta_t) / (eta * cos_theta_i + cos_theta_t);
    let r_perpendicular = (cos_theta_i - eta * cos_theta_t) / (cos_theta_i + eta * cos_theta_t);
    0.5 * (r_parallel * r_parallel + r_perpendicular * r_perpendicular)
}

/// Schlick's approximation of Fresnel reflectance given the reflectance at
/// normal incidence `r0`.
#[must_use]
pub fn fresnel_schlick(cos_theta: f64, r0: f64) -> f64 {
    let weight = (1.0 - cos_theta.clamp(0.0, 1.0)).powi(5);
    r0 + (1.0 - r0) * weight
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<()> {
    binder.bind_function("fresnel_dielectric", |values| {
        args::expect(values, 2)?;
        let cos_theta_i = args::float(values, 0)?;
        let eta = args::float(values, 1)?;
        Ok(Value::Float(fresnel_dielectric(cos_theta_i, eta)))
    })?;
    binder.bind_function("fresnel_schlick", |values| {
        args::expect(values, 2)?;
        let cos_theta = args::float(values, 0)?;
        let r0 = args::float(values, 1)?;
        Ok(Value::Float(fresnel_schlick(cos_theta, r0)))
    })?;
    Ok(())
}
