// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Serialization of unit tests that touch process-global state.

use parking_lot::Mutex;

/// Held for the duration of any test that reads or mutates the
/// acceleration context or the installed core runtime.
pub(crate) static GLOBAL_STATE: Mutex<()> = Mutex::new(());
