// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Cross-segment lifetime coordination.
//!
//! The segment must not outlive teardown obligations, and the core runtime
//! must not unload while the segment still references it. Both are handled
//! with plain ownership:
//!
//! - the loaded module and the teardown guard each hold an
//!   `Arc<CoreRuntime>`; every pin is released exactly once when its owner
//!   drops,
//! - a [`Teardown`] guard armed on the `Scene` descriptor runs its stages
//!   in declaration order when the descriptor's last reference is released:
//!   color-management shutdown strictly before acceleration shutdown.
//!
//! `Drop` runs once, so the sequence cannot repeat; if the process exits
//! without releasing the descriptor, teardown never runs and the operating
//! system reclaims everything, which is acceptable.

use crate::accel;
use lucent_core::{color, CoreRuntime, Finalizer};
use std::sync::Arc;

/// One teardown step.
pub(crate) struct TeardownStage {
    pub(crate) name: &'static str,
    pub(crate) run: Box<dyn FnOnce() + Send + Sync>,
}

/// Ordered teardown stages run exactly once when the guard drops.
///
/// The guard's core pin is released after the stages have run.
pub(crate) struct Teardown {
    stages: Vec<TeardownStage>,
    _core: Option<Arc<CoreRuntime>>,
}

impl Teardown {
    pub(crate) fn new(stages: Vec<TeardownStage>, core: Option<Arc<CoreRuntime>>) -> Self {
        Self {
            stages,
            _core: core,
        }
    }

    /// The production sequence: color management first, then the
    /// acceleration context, then the core pin.
    pub(crate) fn for_segment(core: Arc<CoreRuntime>) -> Self {
        Self::new(
            vec![
                TeardownStage {
                    name: "color-management",
                    run: Box::new(color::static_shutdown),
                },
                TeardownStage {
                    name: "acceleration",
                    run: Box::new(accel::static_shutdown),
                },
            ],
            Some(core),
        )
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        for stage in self.stages.drain(..) {
            log::debug!("[render] teardown stage '{}'", stage.name);
            (stage.run)();
        }
        // The core pin in `_core` drops after this body completes.
    }
}

/// Finalizer armed on the segment's root type descriptor.
pub(crate) fn segment_teardown(core: Arc<CoreRuntime>) -> Finalizer {
    let teardown = Teardown::for_segment(core);
    Box::new(move || drop(teardown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn recording_stage(
        name: &'static str,
        record: &Arc<Mutex<Vec<&'static str>>>,
    ) -> TeardownStage {
        let record = Arc::clone(record);
        TeardownStage {
            name,
            run: Box::new(move || record.lock().push(name)),
        }
    }

    #[test]
    fn stages_run_in_declaration_order_exactly_once() {
        let record = Arc::new(Mutex::new(Vec::new()));
        let guard = Teardown::new(
            vec![
                recording_stage("color-management", &record),
                recording_stage("acceleration", &record),
            ],
            None,
        );

        assert!(record.lock().is_empty());
        drop(guard);

        let calls = record.lock();
        assert_eq!(*calls, vec!["color-management", "acceleration"]);
        assert_eq!(calls.iter().filter(|&&n| n == "color-management").count(), 1);
        assert_eq!(calls.iter().filter(|&&n| n == "acceleration").count(), 1);
    }

    #[test]
    fn finalizer_defers_stages_until_invoked() {
        let record = Arc::new(Mutex::new(Vec::new()));
        let guard = Teardown::new(vec![recording_stage("only", &record)], None);
        let finalizer: Finalizer = Box::new(move || drop(guard));

        assert!(record.lock().is_empty());
        finalizer();
        assert_eq!(*record.lock(), vec!["only"]);
    }
}
