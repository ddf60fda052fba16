// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Caster Resolution Benchmark
//!
//! Measures the cost of resolving opaque hierarchy handles through the
//! shared registry:
//! - a deep match (`ProjectiveCamera`, depth 3, first probe bucket)
//! - a mid-depth match (`Mesh`)
//! - a miss (plain hierarchy-root instance, every probe consulted)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lucent_core::{Class, CoreRuntime, Object, ObjectRef, OBJECT_CLASS};
use lucent_render::{load_module, Mesh, ProjectiveCamera, Variant};
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

fn bench_resolution(c: &mut Criterion) {
    let core = CoreRuntime::init().expect("core install");
    let module = load_module(Variant::ScalarRgb).expect("segment load");

    let camera: ObjectRef = Arc::new(ProjectiveCamera::new("cam", 35.0));
    let mesh: ObjectRef = Arc::new(Mesh::new("bunny", 34_817, 69_630));
    let opaque: ObjectRef = Arc::new(Opaque);

    c.bench_function("resolve_deep_match", |b| {
        b.iter(|| core.resolve(black_box(&camera)))
    });
    c.bench_function("resolve_leaf_match", |b| {
        b.iter(|| core.resolve(black_box(&mesh)))
    });
    c.bench_function("resolve_miss", |b| {
        b.iter(|| core.resolve(black_box(&opaque)))
    });

    drop(module);
    drop(core);
}

criterion_group!(benches, bench_resolution);
criterion_main!(benches);
