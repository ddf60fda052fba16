// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Load-order enforcement.
//!
//! This binary never installs the core runtime, so it observes the exact
//! state of a process that loads the rendering segment out of order. Kept
//! as a single test: a second test could install the runtime and mask the
//! condition.

use lucent_core::{CoreError, CoreRuntime};
use lucent_render::{load_module, RenderError, Scene, Variant};

#[test]
fn segment_load_without_core_is_fatal() {
    // The import itself fails deterministically.
    assert!(matches!(
        CoreRuntime::instance(),
        Err(CoreError::CoreNotLoaded)
    ));

    // Segment load propagates the failure instead of producing an empty
    // registry.
    let result = load_module(Variant::ScalarRgb);
    assert!(matches!(
        result,
        Err(RenderError::Core(CoreError::CoreNotLoaded))
    ));

    // Nothing was initialized along the failed path.
    assert!(!lucent_core::color::status().initialized);

    // Without a loaded segment there is no acceleration context either.
    assert!(matches!(
        Scene::new(vec![], vec![], vec![]),
        Err(RenderError::AccelNotReady)
    ));
}
