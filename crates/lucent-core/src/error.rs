// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Core error types.

use thiserror::Error;

/// Errors raised by the host bridge and registry service.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The core runtime has not been loaded. Segments with a structural
    /// dependency on it must treat this as fatal to their own load.
    #[error("core runtime is not loaded")]
    CoreNotLoaded,

    /// A live core runtime already exists.
    #[error("core runtime is already loaded")]
    AlreadyLoaded,

    /// The type exposes no bound constructor.
    #[error("type '{0}' has no bound constructor")]
    NotConstructible(&'static str),

    /// Lookup of a bound method or property failed.
    #[error("'{type_name}' has no member '{member}'")]
    UnknownMember {
        type_name: &'static str,
        member: String,
    },

    /// A namespace entry with this name already exists.
    #[error("duplicate namespace entry '{0}'")]
    DuplicateEntry(String),

    /// A bound function was called with the wrong number of arguments.
    #[error("expected {expected} argument(s), found {found}")]
    Arity { expected: usize, found: usize },

    /// A bound function was called with an argument of the wrong type.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Failure propagated out of a bound native function.
    #[error("{0}")]
    Runtime(String),
}
