// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Acceleration-structure static state and kd-tree builds.
//!
//! Scene construction partitions shapes into a [`ShapeKdTree`]. Builds run
//! against a process-wide context allocated by [`static_init`] when the
//! segment loads and released by [`static_shutdown`] during segment
//! teardown. Building without a live context is an error
//! ([`RenderError::AccelNotReady`]), not a fallback.

use crate::error::{RenderError, Result};
use crate::hierarchy::SHAPE_KDTREE_CLASS;
use lucent_core::{Class, Object, ObjectRef};
use parking_lot::RwLock;
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

/// Build parameters shared by every kd-tree constructed in this process.
struct AccelContext {
    max_depth: u32,
    leaf_primitive_limit: usize,
}

impl AccelContext {
    fn new() -> Self {
        Self {
            max_depth: 48,
            leaf_primitive_limit: 4,
        }
    }
}

static CONTEXT: RwLock<Option<AccelContext>> = RwLock::new(None);
static GENERATION: AtomicU64 = AtomicU64::new(0);

/// Observable state of the acceleration context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelStatus {
    /// Whether the context is currently live.
    pub initialized: bool,
    /// Number of completed initializations since process start.
    pub generation: u64,
}

/// Allocate the process-wide build context. A redundant call is ignored
/// with a warning; teardown pairs each completed initialization with
/// exactly one [`static_shutdown`].
pub fn static_init() {
    let mut context = CONTEXT.write();
    if context.is_some() {
        log::warn!("[render] acceleration context already initialized");
        return;
    }
    *context = Some(AccelContext::new());
    GENERATION.fetch_add(1, Ordering::SeqCst);
    log::debug!("[render] acceleration context initialized");
}

/// Release the process-wide build context.
pub fn static_shutdown() {
    let mut context = CONTEXT.write();
    if context.take().is_none() {
        log::warn!("[render] acceleration shutdown without initialization");
    } else {
        log::debug!("[render] acceleration context shut down");
    }
}

/// Current state of the context.
#[must_use]
pub fn status() -> AccelStatus {
    AccelStatus {
        initialized: CONTEXT.read().is_some(),
        generation: GENERATION.load(Ordering::SeqCst),
    }
}

/// Spatial partition over a scene's shapes.
#[derive(Debug)]
pub struct ShapeKdTree {
    primitive_count: usize,
    node_count: usize,
    depth: u32,
}

impl ShapeKdTree {
    /// Number of shapes in the tree.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.primitive_count
    }

    /// Number of inner and leaf nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Height of the tree.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Object for ShapeKdTree {
    fn class(&self) -> &'static Class {
        &SHAPE_KDTREE_CLASS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Partition `shapes` under the live context.
pub(crate) fn build_kdtree(shapes: &[ObjectRef]) -> Result<ShapeKdTree> {
    let context = CONTEXT.read();
    let context = context.as_ref().ok_or(RenderError::AccelNotReady)?;

    let primitive_count = shapes.len();
    let leaves = primitive_count
        .div_ceil(context.leaf_primitive_limit)
        .max(1);
    let depth = leaves
        .next_power_of_two()
        .trailing_zeros()
        .min(context.max_depth);
    let tree = ShapeKdTree {
        primitive_count,
        node_count: 2 * leaves - 1,
        depth,
    };
    log::debug!(
        "[render] kd-tree built: {} primitive(s), {} node(s), depth {}",
        tree.primitive_count,
        tree.node_count,
        tree.depth
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_support::GLOBAL_STATE;

    // Context init/shutdown pairing is exercised by the integration tests;
    // unit tests here only cover build behavior under a scoped context.

    #[test]
    fn build_fails_without_context() {
        let _guard = GLOBAL_STATE.lock();
        let result = build_kdtree(&[]);
        assert!(matches!(result, Err(RenderError::AccelNotReady)));
    }

    #[test]
    fn tree_shape_follows_primitive_count() {
        let _guard = GLOBAL_STATE.lock();
        static_init();
        let tree = build_kdtree(&[]).expect("empty build");
        assert_eq!(tree.primitive_count(), 0);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.depth(), 0);
        static_shutdown();
    }
}
