// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! The core runtime service.
//!
//! One [`CoreRuntime`] per process anchors the shared state every hierarchy
//! segment depends on: the caster registry and the root `Object` descriptor.
//! The loader that calls [`CoreRuntime::init`] owns the returned `Arc`; a
//! process-wide slot holds only a weak reference, so the runtime unloads
//! when the loader and every pinning segment have released their handles,
//! and can then be installed again.
//!
//! Segments import the live runtime with [`CoreRuntime::instance`] during
//! their own load. The import fails with [`CoreError::CoreNotLoaded`] when
//! no runtime is live; the dependency is structural, and segment load must
//! abort.

use crate::class::OBJECT_CLASS;
use crate::color;
use crate::descriptor::{BoundObject, TypeDescriptor};
use crate::error::CoreError;
use crate::object::ObjectRef;
use crate::registry::CasterRegistry;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};

static ACTIVE: RwLock<Option<Weak<CoreRuntime>>> = RwLock::new(None);

/// Process-wide anchor for the caster registry and root type.
pub struct CoreRuntime {
    casters: CasterRegistry,
    object_type: Arc<TypeDescriptor>,
}

impl CoreRuntime {
    /// Create the runtime and install it in the process-wide slot.
    ///
    /// Color-management state is initialized as part of loading. Fails with
    /// [`CoreError::AlreadyLoaded`] while a previous runtime is still live.
    pub fn init() -> Result<Arc<Self>, CoreError> {
        let mut slot = ACTIVE.write();
        if slot.as_ref().and_then(Weak::upgrade).is_some() {
            return Err(CoreError::AlreadyLoaded);
        }

        color::static_init();

        let runtime = Arc::new(Self {
            casters: CasterRegistry::new(),
            object_type: Arc::new(
                TypeDescriptor::builder(&OBJECT_CLASS)
                    .doc("Root of the scene-object hierarchy.")
                    .build(),
            ),
        });
        *slot = Some(Arc::downgrade(&runtime));
        log::info!("[core] runtime loaded");
        Ok(runtime)
    }

    /// Import the live runtime.
    ///
    /// Callers with a structural dependency must propagate the error and
    /// abort their own load.
    pub fn instance() -> Result<Arc<Self>, CoreError> {
        ACTIVE
            .read()
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(CoreError::CoreNotLoaded)
    }

    /// The shared caster registry.
    #[must_use]
    pub fn casters(&self) -> &CasterRegistry {
        &self.casters
    }

    /// Descriptor of the hierarchy root, for callers that fall back to the
    /// base interface after a resolution miss.
    #[must_use]
    pub fn object_type(&self) -> &Arc<TypeDescriptor> {
        &self.object_type
    }

    /// Resolve an opaque object to its most specific exposed wrapper.
    /// `None` means no registered segment recognizes the instance.
    #[must_use]
    pub fn resolve(&self, object: &ObjectRef) -> Option<BoundObject> {
        self.casters.resolve(object)
    }

    /// Resolve, falling back to the root `Object` interface on a miss.
    #[must_use]
    pub fn resolve_or_base(&self, object: &ObjectRef) -> BoundObject {
        self.resolve(object)
            .unwrap_or_else(|| BoundObject::new(self.object_type.clone(), object.clone()))
    }
}

impl Drop for CoreRuntime {
    fn drop(&mut self) {
        log::info!("[core] runtime unloaded");
    }
}
