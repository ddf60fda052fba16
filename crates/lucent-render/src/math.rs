// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Small fixed-size matrix helpers shared by transforms and the Mueller
//! routines.

use lucent_core::{CoreError, Value};

/// Row-major 4x4 matrix.
pub type Matrix4 = [[f64; 4]; 4];

/// The identity matrix.
#[must_use]
pub fn identity() -> Matrix4 {
    let mut matrix = [[0.0; 4]; 4];
    for (row, entries) in matrix.iter_mut().enumerate() {
        entries[row] = 1.0;
    }
    matrix
}

/// Matrix product `a * b`.
#[must_use]
pub fn matmul(a: &Matrix4, b: &Matrix4) -> Matrix4 {
    let mut out = [[0.0; 4]; 4];
    for row in 0..4 {
        for col in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[row][k] * b[k][col];
            }
            out[row][col] = sum;
        }
    }
    out
}

/// Bridge representation: a list of four row lists.
#[must_use]
pub fn matrix_to_value(matrix: &Matrix4) -> Value {
    Value::List(
        matrix
            .iter()
            .map(|row| Value::List(row.iter().map(|&entry| Value::Float(entry)).collect()))
            .collect(),
    )
}

/// Parse a bridge value back into a matrix.
pub fn value_to_matrix(value: &Value) -> Result<Matrix4, CoreError> {
    let rows = value.as_list().ok_or(CoreError::TypeMismatch {
        expected: "4x4 matrix",
        found: value.type_name(),
    })?;
    if rows.len() != 4 {
        return Err(CoreError::TypeMismatch {
            expected: "4x4 matrix",
            found: "list",
        });
    }
    let mut matrix = [[0.0; 4]; 4];
    for (row, entry) in rows.iter().enumerate() {
        let columns = entry.as_list().ok_or(CoreError::TypeMismatch {
            expected: "matrix row",
            found: entry.type_name(),
        })?;
        if columns.len() != 4 {
            return Err(CoreError::TypeMismatch {
                expected: "matrix row",
                found: "list",
            });
        }
        for (col, column) in columns.iter().enumerate() {
            matrix[row][col] = column.as_float().ok_or(CoreError::TypeMismatch {
                expected: "float",
                found: column.type_name(),
            })?;
        }
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_multiplicative_unit() {
        let m: Matrix4 = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ];
        assert_eq!(matmul(&m, &identity()), m);
        assert_eq!(matmul(&identity(), &m), m);
    }

    #[test]
    fn value_round_trip() {
        let m: Matrix4 = [
            [0.5, 0.0, 0.0, 0.0],
            [0.0, 0.5, 0.0, 0.0],
            [0.0, 0.0, 0.3, -0.1],
            [0.0, 0.0, 0.1, 0.3],
        ];
        let value = matrix_to_value(&m);
        assert_eq!(value_to_matrix(&value).ok(), Some(m));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(value_to_matrix(&Value::Int(1)).is_err());
        assert!(value_to_matrix(&Value::List(vec![Value::Int(1)])).is_err());
    }
}
