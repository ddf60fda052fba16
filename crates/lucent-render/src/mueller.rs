// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Routines to manipulate Mueller matrices for polarized rendering.
//!
//! Mounted as the nested `mueller` namespace; every routine is also
//! callable directly from Rust.

use crate::error::Result;
use crate::math::{matmul, matrix_to_value, value_to_matrix, Matrix4};
use crate::module::{Binder, DOC_NAME};
use lucent_core::value::args;
use lucent_core::Namespace;
use std::sync::Arc;

/// Ideal depolarizer: passes `value` of the incident intensity, strips all
/// polarization.
#[must_use]
pub fn depolarizer(value: f64) -> Matrix4 {
    let mut matrix = [[0.0; 4]; 4];
    matrix[0][0] = value;
    matrix
}

/// Neutral absorber attenuating every Stokes component by `value`.
#[must_use]
pub fn absorber(value: f64) -> Matrix4 {
    let mut matrix = [[0.0; 4]; 4];
    for (row, entries) in matrix.iter_mut().enumerate() {
        entries[row] = value;
    }
    matrix
}

/// Ideal linear polarizer aligned with the horizontal axis.
#[must_use]
pub fn linear_polarizer(value: f64) -> Matrix4 {
    let half = 0.5 * value;
    let mut matrix = [[0.0; 4]; 4];
    matrix[0][0] = half;
    matrix[0][1] = half;
    matrix[1][0] = half;
    matrix[1][1] = half;
    matrix
}

/// Linear retarder with fast axis horizontal and the given phase
/// difference (radians).
#[must_use]
pub fn linear_retarder(phase: f64) -> Matrix4 {
    let (sin, cos) = phase.sin_cos();
    let mut matrix = [[0.0; 4]; 4];
    matrix[0][0] = 1.0;
    matrix[1][1] = 1.0;
    matrix[2][2] = cos;
    matrix[2][3] = -sin;
    matrix[3][2] = sin;
    matrix[3][3] = cos;
    matrix
}

/// Rotation of the Stokes reference frame by `theta` (radians).
#[must_use]
pub fn rotator(theta: f64) -> Matrix4 {
    let (sin, cos) = (2.0 * theta).sin_cos();
    let mut matrix = [[0.0; 4]; 4];
    matrix[0][0] = 1.0;
    matrix[1][1] = cos;
    matrix[1][2] = sin;
    matrix[2][1] = -sin;
    matrix[2][2] = cos;
    matrix[3][3] = 1.0;
    matrix
}

/// Apply an optical element described by `matrix` in a frame rotated by
/// `theta` (radians).
#[must_use]
pub fn rotated_element(theta: f64, matrix: &Matrix4) -> Matrix4 {
    matmul(&rotator(-theta), &matmul(matrix, &rotator(theta)))
}

pub(crate) fn bind(binder: &mut Binder<'_>) -> Result<()> {
    let mut nested = Namespace::new(format!("{DOC_NAME}.mueller"));
    nested.set_doc("Routines to manipulate Mueller matrices for polarized rendering.");

    // Mount under the fixed name first, then populate the members.
    let nested = binder.namespace().insert_module("mueller", nested)?;

    let unary: [(&str, fn(f64) -> Matrix4); 5] = [
        ("depolarizer", depolarizer),
        ("absorber", absorber),
        ("linear_polarizer", linear_polarizer),
        ("linear_retarder", linear_retarder),
        ("rotator", rotator),
    ];
    for (name, routine) in unary {
        nested.insert_function(
            name,
            Arc::new(move |values| {
                args::expect(values, 1)?;
                Ok(matrix_to_value(&routine(args::float(values, 0)?)))
            }),
        )?;
    }

    nested.insert_function(
        "rotated_element",
        Arc::new(|values| {
            args::expect(values, 2)?;
            let theta = args::float(values, 0)?;
            let matrix = value_to_matrix(&values[1])?;
            Ok(matrix_to_value(&rotated_element(theta, &matrix)))
        }),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::identity;

    fn approx(a: &Matrix4, b: &Matrix4) -> bool {
        a.iter()
            .flatten()
            .zip(b.iter().flatten())
            .all(|(x, y)| (x - y).abs() < 1e-12)
    }

    #[test]
    fn absorber_scales_identity() {
        let mut expected = identity();
        for row in 0..4 {
            expected[row][row] = 0.25;
        }
        assert!(approx(&absorber(0.25), &expected));
    }

    #[test]
    fn crossed_polarizers_extinguish() {
        // Horizontal polarizer followed by one rotated 90 degrees.
        let crossed = matmul(
            &rotated_element(std::f64::consts::FRAC_PI_2, &linear_polarizer(1.0)),
            &linear_polarizer(1.0),
        );
        let unpolarized = [1.0, 0.0, 0.0, 0.0];
        let transmitted: Vec<f64> = (0..4)
            .map(|row| {
                (0..4)
                    .map(|col| crossed[row][col] * unpolarized[col])
                    .sum()
            })
            .collect();
        assert!(transmitted[0].abs() < 1e-12);
    }

    #[test]
    fn rotation_by_zero_is_identity() {
        assert!(approx(&rotator(0.0), &identity()));
        let element = linear_retarder(0.7);
        assert!(approx(&rotated_element(0.0, &element), &element));
    }
}
