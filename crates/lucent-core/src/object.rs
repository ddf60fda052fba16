// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! The hierarchy root trait and its shared handle.

use crate::class::Class;
use crate::error::CoreError;
use std::any::Any;
use std::sync::Arc;

/// Root trait of every object exposed to the host environment.
///
/// `class()` reports the most specific declared class of the concrete type.
/// Once a caster has resolved an instance, `as_any()` grants typed access to
/// the concrete struct for bound methods and properties.
pub trait Object: Any + Send + Sync {
    /// Most specific class of this instance.
    fn class(&self) -> &'static Class;

    /// Identifier carried by the object, empty when it has none.
    fn id(&self) -> &str {
        ""
    }

    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to an object of unknown concrete type.
///
/// This is the opaque base-typed handle that casters receive.
pub type ObjectRef = Arc<dyn Object>;

/// Typed access to an opaque handle.
///
/// Used by bound property accessors; the error reports the handle's actual
/// class for diagnostics.
pub fn downcast<'a, T: Any>(
    object: &'a ObjectRef,
    expected: &'static str,
) -> Result<&'a T, CoreError> {
    object
        .as_any()
        .downcast_ref::<T>()
        .ok_or(CoreError::TypeMismatch {
            expected,
            found: object.class().name(),
        })
}
