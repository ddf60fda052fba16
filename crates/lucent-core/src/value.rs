// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Bridge values exchanged with the dynamically-typed host.

use crate::descriptor::BoundObject;

/// A dynamically-typed bridge value.
///
/// Deliberately slim: the host environment's own object model is out of
/// scope, so this covers only what bound constructors, methods, and utility
/// functions need to exchange.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    /// A scene object together with its resolved exposed type.
    Object(BoundObject),
}

impl Value {
    /// Name of the value's type, for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    /// Check if the value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as bool.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as float. Integers promote.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Try to get as string slice.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as bound object.
    #[must_use]
    pub fn as_object(&self) -> Option<&BoundObject> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

/// Argument extraction helpers for bound native functions.
///
/// Bound methods receive their receiver as the leading argument; use
/// [`args::receiver`] to recover the concrete type behind it.
pub mod args {
    use super::Value;
    use crate::descriptor::BoundObject;
    use crate::error::CoreError;
    use std::any::Any;

    /// Reject calls with the wrong argument count.
    pub fn expect(values: &[Value], expected: usize) -> Result<(), CoreError> {
        if values.len() == expected {
            Ok(())
        } else {
            Err(CoreError::Arity {
                expected,
                found: values.len(),
            })
        }
    }

    fn get(values: &[Value], index: usize) -> Result<&Value, CoreError> {
        values.get(index).ok_or(CoreError::Arity {
            expected: index + 1,
            found: values.len(),
        })
    }

    /// Fetch a float argument. Integers promote.
    pub fn float(values: &[Value], index: usize) -> Result<f64, CoreError> {
        let value = get(values, index)?;
        value.as_float().ok_or(CoreError::TypeMismatch {
            expected: "float",
            found: value.type_name(),
        })
    }

    /// Fetch an integer argument.
    pub fn int(values: &[Value], index: usize) -> Result<i64, CoreError> {
        let value = get(values, index)?;
        value.as_int().ok_or(CoreError::TypeMismatch {
            expected: "int",
            found: value.type_name(),
        })
    }

    /// Fetch a string argument.
    pub fn string(values: &[Value], index: usize) -> Result<&str, CoreError> {
        let value = get(values, index)?;
        value.as_str().ok_or(CoreError::TypeMismatch {
            expected: "str",
            found: value.type_name(),
        })
    }

    /// Fetch a list argument.
    pub fn list(values: &[Value], index: usize) -> Result<&[Value], CoreError> {
        let value = get(values, index)?;
        value.as_list().ok_or(CoreError::TypeMismatch {
            expected: "list",
            found: value.type_name(),
        })
    }

    /// Fetch a bound object argument.
    pub fn object(values: &[Value], index: usize) -> Result<&BoundObject, CoreError> {
        let value = get(values, index)?;
        value.as_object().ok_or(CoreError::TypeMismatch {
            expected: "object",
            found: value.type_name(),
        })
    }

    /// Recover a method receiver's concrete type from the leading argument.
    pub fn receiver<'a, T: Any>(
        values: &'a [Value],
        expected: &'static str,
    ) -> Result<&'a T, CoreError> {
        let bound = object(values, 0)?;
        bound
            .object()
            .as_any()
            .downcast_ref::<T>()
            .ok_or(CoreError::TypeMismatch {
                expected,
                found: bound.type_name(),
            })
    }
}
