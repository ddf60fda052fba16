// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Segment assembly tests.
//!
//! These exercise the loaded segment against a live core runtime. The
//! runtime slot, the color tables, and the acceleration context are
//! process-global, so every test here holds the shared lock and releases
//! everything it loaded before returning.

use crate::endpoint::{Emitter, ProjectiveCamera};
use crate::integrator::{AdjointIntegrator, MonteCarloIntegrator};
use crate::shape::Mesh;
use crate::test_support::GLOBAL_STATE;
use crate::{accel, load_module, Variant};
use lucent_core::{color, Class, CoreRuntime, Object, ObjectRef, Value, OBJECT_CLASS};
use std::sync::Arc;

struct Opaque;

impl Object for Opaque {
    fn class(&self) -> &'static Class {
        &OBJECT_CLASS
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[test]
fn load_builds_qualified_namespace() {
    let _guard = GLOBAL_STATE.lock();
    let core = CoreRuntime::init().expect("core install");
    let module = load_module(Variant::ScalarSpectral).expect("segment load");

    let namespace = module.namespace();
    assert_eq!(namespace.name(), "lucent.render.scalar_spectral");

    // Castable types, auxiliary types, and utilities are all reachable.
    for name in [
        "Scene",
        "Shape",
        "Mesh",
        "Endpoint",
        "Sensor",
        "ProjectiveCamera",
        "Emitter",
        "BSDF",
        "Film",
        "Integrator",
        "SamplingIntegrator",
        "MonteCarloIntegrator",
        "AdjointIntegrator",
        "Sampler",
        "PhaseFunction",
        "Medium",
        "Texture",
        "Volume",
        "ReconstructionFilter",
        "VolumeGrid",
        "ImageBlock",
        "MicrofacetDistribution",
        "PositionSample",
        "DirectionSample",
        "SurfaceInteraction",
        "BSDFSample",
    ] {
        assert!(
            namespace.type_descriptor(name).is_some(),
            "missing bound type '{name}'"
        );
    }

    // The nested namespace is mounted and reachable by dotted path.
    assert!(namespace.module("mueller").is_some());
    assert!(namespace.lookup("mueller.rotator").is_some());
    let rotated = namespace
        .call("mueller.depolarizer", &[Value::Float(0.5)])
        .expect("mueller call");
    assert!(matches!(rotated, Value::List(_)));

    // Flat utility functions.
    assert_eq!(
        namespace.call("srgb_to_linear", &[Value::Float(0.0)]).ok(),
        Some(Value::Float(0.0))
    );
    assert!(namespace.function("fresnel_dielectric").is_some());

    // The caster covers exactly the probe set, not the auxiliary types.
    assert_eq!(module.caster().probe_count(), 19);
    assert_eq!(core.casters().segments(), vec!["render"]);

    drop(module);
    drop(core);
}

#[test]
fn resolution_prefers_most_specific_type() {
    let _guard = GLOBAL_STATE.lock();
    let core = CoreRuntime::init().expect("core install");
    let module = load_module(Variant::ScalarRgb).expect("segment load");

    // Two sibling concretes under Endpoint resolve to themselves, never to
    // the shared interface.
    let camera: ObjectRef = Arc::new(ProjectiveCamera::new("cam", 35.0));
    let emitter: ObjectRef = Arc::new(Emitter::new("sun"));
    assert_eq!(
        core.resolve(&camera).map(|b| b.type_name()),
        Some("ProjectiveCamera")
    );
    assert_eq!(core.resolve(&emitter).map(|b| b.type_name()), Some("Emitter"));

    // Same under Integrator, across different depths.
    let monte_carlo: ObjectRef = Arc::new(MonteCarloIntegrator::new(-1, 5));
    let adjoint: ObjectRef = Arc::new(AdjointIntegrator::new(4));
    assert_eq!(
        core.resolve(&monte_carlo).map(|b| b.type_name()),
        Some("MonteCarloIntegrator")
    );
    assert_eq!(
        core.resolve(&adjoint).map(|b| b.type_name()),
        Some("AdjointIntegrator")
    );

    // A leaf resolves through the full registry exactly like through the
    // segment caster.
    let mesh: ObjectRef = Arc::new(Mesh::new("bunny", 34_817, 69_630));
    let bound = core.resolve(&mesh).expect("mesh resolves");
    assert_eq!(bound.type_name(), "Mesh");
    assert_eq!(bound.get("vertex_count").ok(), Some(Value::Int(34_817)));

    // A plain hierarchy-root instance is a miss, and the base fallback
    // still produces a usable wrapper.
    let opaque: ObjectRef = Arc::new(Opaque);
    assert!(core.resolve(&opaque).is_none());
    assert_eq!(core.resolve_or_base(&opaque).type_name(), "Object");

    drop(module);
    drop(core);
}

#[test]
fn constructors_build_wrapped_instances() {
    let _guard = GLOBAL_STATE.lock();
    let core = CoreRuntime::init().expect("core install");
    let module = load_module(Variant::ScalarRgb).expect("segment load");

    let mesh_type = module
        .namespace()
        .type_descriptor("Mesh")
        .expect("mesh type");
    let mesh = mesh_type
        .construct(&[Value::from("quad"), Value::Int(4), Value::Int(2)])
        .expect("mesh constructor");
    let mesh = mesh.as_object().expect("constructor yields object");
    assert_eq!(mesh.type_name(), "Mesh");
    assert_eq!(mesh.get("face_count").ok(), Some(Value::Int(2)));

    // Abstract interfaces stay non-constructible.
    let shape_type = module
        .namespace()
        .type_descriptor("Shape")
        .expect("shape type");
    assert!(shape_type.construct(&[]).is_err());

    // Scene construction goes through the live acceleration context.
    let scene_type = module
        .namespace()
        .type_descriptor("Scene")
        .expect("scene type");
    let scene = scene_type
        .construct(&[
            Value::List(vec![Value::Object(mesh.clone())]),
            Value::List(vec![]),
            Value::List(vec![]),
        ])
        .expect("scene constructor");
    assert_eq!(
        scene.as_object().and_then(|s| s.get("shape_count").ok()),
        Some(Value::Int(1))
    );

    drop(scene);
    drop(module);
    drop(core);
}

#[test]
fn teardown_runs_once_after_last_root_reference() {
    let _guard = GLOBAL_STATE.lock();
    let color_generation = color::status().generation;
    let accel_generation = accel::status().generation;

    let core = CoreRuntime::init().expect("core install");
    assert_eq!(color::status().generation, color_generation + 1);

    let module = load_module(Variant::ScalarRgb).expect("segment load");
    assert_eq!(accel::status().generation, accel_generation + 1);
    assert!(color::status().initialized);
    assert!(accel::status().initialized);

    // Keep one wrapper of the segment root type alive past the module.
    let scene_type = module
        .namespace()
        .type_descriptor("Scene")
        .expect("scene type");
    let scene = scene_type
        .construct(&[
            Value::List(vec![]),
            Value::List(vec![]),
            Value::List(vec![]),
        ])
        .expect("scene constructor");
    drop(scene_type);

    drop(module);
    // The wrapper still references the root type: teardown is deferred.
    assert!(color::status().initialized);
    assert!(accel::status().initialized);

    drop(scene);
    // Last reference released: both shutdowns ran, each exactly once.
    assert!(!color::status().initialized);
    assert!(!accel::status().initialized);
    assert_eq!(color::status().generation, color_generation + 1);
    assert_eq!(accel::status().generation, accel_generation + 1);

    drop(core);
    assert!(CoreRuntime::instance().is_err());
}

#[test]
fn repeated_cycles_leave_no_reference_drift() {
    let _guard = GLOBAL_STATE.lock();

    for cycle in 0..3 {
        let core = CoreRuntime::init().expect("core reinstall");
        let module = load_module(Variant::ScalarRgb).expect("segment reload");

        let mesh: ObjectRef = Arc::new(Mesh::new("probe", 3, 1));
        assert_eq!(
            module.resolve(&mesh).map(|b| b.type_name()),
            Some("Mesh"),
            "cycle {cycle}"
        );

        drop(module);
        drop(core);

        // Everything released: the slot is empty and global state is shut
        // down, so the next cycle starts clean.
        assert!(CoreRuntime::instance().is_err(), "cycle {cycle}");
        assert!(!color::status().initialized, "cycle {cycle}");
        assert!(!accel::status().initialized, "cycle {cycle}");
    }
}
