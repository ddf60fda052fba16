// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Declared classes of the rendering hierarchy.
//!
//! Castable classes descend from [`OBJECT_CLASS`]; the caster derives its
//! probe precedence from their depth. Sample records live in separate
//! parentless trees; they are bound in the namespace but never probed.

use lucent_core::{Class, OBJECT_CLASS};

// --------------------------------------------------------------------------
// Castable scene-object classes
// --------------------------------------------------------------------------

pub static SCENE_CLASS: Class = Class::new("Scene", Some(&OBJECT_CLASS));

pub static SHAPE_CLASS: Class = Class::new("Shape", Some(&OBJECT_CLASS));
pub static MESH_CLASS: Class = Class::new("Mesh", Some(&SHAPE_CLASS));

pub static TEXTURE_CLASS: Class = Class::new("Texture", Some(&OBJECT_CLASS));
pub static VOLUME_CLASS: Class = Class::new("Volume", Some(&OBJECT_CLASS));
pub static RFILTER_CLASS: Class = Class::new("ReconstructionFilter", Some(&OBJECT_CLASS));

pub static ENDPOINT_CLASS: Class = Class::new("Endpoint", Some(&OBJECT_CLASS));
pub static SENSOR_CLASS: Class = Class::new("Sensor", Some(&ENDPOINT_CLASS));
pub static PROJECTIVE_CAMERA_CLASS: Class = Class::new("ProjectiveCamera", Some(&SENSOR_CLASS));
pub static EMITTER_CLASS: Class = Class::new("Emitter", Some(&ENDPOINT_CLASS));

pub static BSDF_CLASS: Class = Class::new("BSDF", Some(&OBJECT_CLASS));
pub static FILM_CLASS: Class = Class::new("Film", Some(&OBJECT_CLASS));

pub static INTEGRATOR_CLASS: Class = Class::new("Integrator", Some(&OBJECT_CLASS));
pub static SAMPLING_INTEGRATOR_CLASS: Class =
    Class::new("SamplingIntegrator", Some(&INTEGRATOR_CLASS));
pub static MONTE_CARLO_INTEGRATOR_CLASS: Class =
    Class::new("MonteCarloIntegrator", Some(&SAMPLING_INTEGRATOR_CLASS));
pub static ADJOINT_INTEGRATOR_CLASS: Class =
    Class::new("AdjointIntegrator", Some(&INTEGRATOR_CLASS));

pub static SAMPLER_CLASS: Class = Class::new("Sampler", Some(&OBJECT_CLASS));
pub static PHASE_FUNCTION_CLASS: Class = Class::new("PhaseFunction", Some(&OBJECT_CLASS));
pub static MEDIUM_CLASS: Class = Class::new("Medium", Some(&OBJECT_CLASS));

// --------------------------------------------------------------------------
// Bound but not probed: auxiliary object types and sample records
// --------------------------------------------------------------------------

pub static SHAPE_KDTREE_CLASS: Class = Class::new("ShapeKDTree", Some(&OBJECT_CLASS));
pub static VOLUME_GRID_CLASS: Class = Class::new("VolumeGrid", Some(&OBJECT_CLASS));
pub static IMAGE_BLOCK_CLASS: Class = Class::new("ImageBlock", Some(&OBJECT_CLASS));
pub static MICROFACET_CLASS: Class = Class::new("MicrofacetDistribution", None);

pub static POSITION_SAMPLE_CLASS: Class = Class::new("PositionSample", None);
pub static DIRECTION_SAMPLE_CLASS: Class =
    Class::new("DirectionSample", Some(&POSITION_SAMPLE_CLASS));
pub static SURFACE_INTERACTION_CLASS: Class = Class::new("SurfaceInteraction", None);
pub static BSDF_SAMPLE_CLASS: Class = Class::new("BSDFSample", None);
