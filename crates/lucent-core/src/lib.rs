// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! # Lucent Core - object model and host bridge
//!
//! Foundational crate of the Lucent renderer's host bridge. It owns the
//! pieces every hierarchy segment builds on:
//!
//! - the scene-object hierarchy root ([`Object`], [`Class`]) and the runtime
//!   is-a metadata used to recover the most specific exposed type of an
//!   opaque handle,
//! - host-visible [`TypeDescriptor`]s, [`Value`]s, and [`Namespace`]s,
//! - the process-wide [`CasterRegistry`], owned by the [`CoreRuntime`]
//!   service and appended to by every segment at load time,
//! - global color-management state ([`color`]).
//!
//! ## Architecture
//!
//! ```text
//! +--------------------------------------------------------------+
//! |                     Host environment                         |
//! |        Namespace -> TypeDescriptor -> Value/BoundObject      |
//! +--------------------------------------------------------------+
//! |                       CoreRuntime                            |
//! |   CasterRegistry (append-only) | root Object descriptor      |
//! +--------------------------------------------------------------+
//! |                    Hierarchy segments                        |
//! |   declare Class trees, bind types, register their caster     |
//! +--------------------------------------------------------------+
//! ```
//!
//! Segments import the live runtime with [`CoreRuntime::instance`]; the call
//! fails if no runtime is loaded, since the dependency is structural. An
//! opaque [`ObjectRef`] is resolved to its most specific exposed subtype by
//! [`CoreRuntime::resolve`], which consults every registered caster in
//! registration order.

pub mod class;
pub mod color;
pub mod descriptor;
pub mod error;
pub mod namespace;
pub mod object;
pub mod registry;
pub mod runtime;
pub mod value;

pub use class::{Class, OBJECT_CLASS};
pub use descriptor::{
    BoundObject, Finalizer, NativeFn, PropertyFn, TypeDescriptor, TypeDescriptorBuilder,
};
pub use error::CoreError;
pub use namespace::{Entry, Namespace};
pub use object::{Object, ObjectRef};
pub use registry::{CasterFn, CasterRegistry, RegisteredCaster};
pub use runtime::CoreRuntime;
pub use value::Value;
