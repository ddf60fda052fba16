// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Render segment error types.

use lucent_core::CoreError;
use thiserror::Error;

/// Errors raised while loading or using the rendering segment.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Failure in the core bridge, including the fatal
    /// [`CoreError::CoreNotLoaded`] when the segment is loaded before the
    /// core runtime.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Scene construction was attempted before the acceleration context was
    /// initialized.
    #[error("acceleration structures are not initialized")]
    AccelNotReady,

    /// A second shape or medium was attached to an endpoint.
    #[error("an endpoint can only be attached to a single {0}")]
    DuplicateAttachment(&'static str),
}

/// Convenience alias used throughout the segment.
pub type Result<T> = std::result::Result<T, RenderError>;
