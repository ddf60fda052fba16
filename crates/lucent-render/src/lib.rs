// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! # Lucent Render - the rendering-primitive hierarchy segment
//!
//! This crate defines the scene-object hierarchy the Lucent renderer
//! exposes to its host environment, and everything required to load it as a
//! segment of the shared core runtime:
//!
//! - the declared [`hierarchy`] of rendering primitives,
//! - the segment's ordered [`caster`], with probe precedence derived from
//!   hierarchy depth,
//! - the [`module`] composition layer that assembles the host-visible
//!   namespace (types, utility functions, and the nested `mueller`
//!   namespace),
//! - the [`lifecycle`] coordination that pins the core runtime while the
//!   segment is loaded and tears down global state exactly once when the
//!   segment's root type is released.
//!
//! ## Hierarchy
//!
//! ```text
//! Object
//! +- Scene                      +- BSDF
//! +- Shape -- Mesh              +- Film
//! +- Texture                    +- Integrator
//! +- Volume                     |  +- SamplingIntegrator
//! +- ReconstructionFilter       |  |  +- MonteCarloIntegrator
//! +- Endpoint                   |  +- AdjointIntegrator
//! |  +- Sensor                  +- Sampler
//! |  |  +- ProjectiveCamera     +- PhaseFunction
//! |  +- Emitter                 +- Medium
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use lucent_core::{CoreRuntime, ObjectRef};
//! use lucent_render::{load_module, Mesh, Variant};
//! use std::sync::Arc;
//!
//! fn main() -> lucent_render::Result<()> {
//!     let core = CoreRuntime::init()?;
//!     let module = load_module(Variant::ScalarRgb)?;
//!
//!     let mesh: ObjectRef = Arc::new(Mesh::new("bunny", 34_817, 69_630));
//!     let bound = core.resolve(&mesh).expect("mesh is an exposed type");
//!     assert_eq!(bound.type_name(), "Mesh");
//!
//!     drop(module); // releases the segment and runs global teardown
//!     Ok(())
//! }
//! ```

pub mod accel;
pub mod bsdf;
pub mod caster;
pub mod endpoint;
pub mod error;
pub mod film;
pub mod fresnel;
pub mod hierarchy;
pub mod integrator;
pub mod lifecycle;
pub mod math;
pub mod medium;
pub mod module;
pub mod mueller;
pub mod records;
pub mod sampler;
pub mod scene;
pub mod shape;
pub mod texture;
pub mod variant;

pub use accel::ShapeKdTree;
pub use bsdf::{Bsdf, MicrofacetDistribution, MicrofacetType};
pub use caster::SegmentCaster;
pub use endpoint::{Emitter, ProjectiveCamera, Sensor};
pub use error::{RenderError, Result};
pub use film::{Film, ImageBlock, ReconstructionFilter};
pub use integrator::{AdjointIntegrator, MonteCarloIntegrator, SamplingIntegrator};
pub use medium::{Medium, PhaseFunction};
pub use module::{load_module, RenderModule, DOC_NAME, SEGMENT_NAME};
pub use records::{BsdfSample, DirectionSample, PositionSample, SurfaceInteraction};
pub use sampler::Sampler;
pub use scene::Scene;
pub use shape::Mesh;
pub use texture::{Texture, Volume, VolumeGrid};
pub use variant::Variant;

#[cfg(test)]
mod tests;

#[cfg(test)]
pub(crate) mod test_support;
