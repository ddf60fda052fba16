// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 lucent developers

//! Global color-management state.
//!
//! Process-wide sRGB transfer-function tables used when converting host
//! colors to linear radiometric values. The tables are built once per load
//! by [`static_init`] (invoked when the core runtime loads) and released by
//! [`static_shutdown`], which the rendering segment's teardown drives.
//! Conversions stay correct without the tables; the table path only avoids
//! recomputing the transfer function for quantized inputs.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

struct ColorTables {
    srgb_to_linear_u8: [f32; 256],
}

impl ColorTables {
    fn build() -> Self {
        let mut srgb_to_linear_u8 = [0.0f32; 256];
        for (quantized, slot) in srgb_to_linear_u8.iter_mut().enumerate() {
            *slot = srgb_to_linear(quantized as f64 / 255.0) as f32;
        }
        Self { srgb_to_linear_u8 }
    }
}

static TABLES: RwLock<Option<ColorTables>> = RwLock::new(None);
static GENERATION: AtomicU64 = AtomicU64::new(0);

/// Observable state of the color-management tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStatus {
    /// Whether the tables are currently live.
    pub initialized: bool,
    /// Number of completed initializations since process start.
    pub generation: u64,
}

/// Build the process-wide tables. A redundant call is ignored with a
/// warning; teardown pairs each completed initialization with exactly one
/// [`static_shutdown`].
pub fn static_init() {
    let mut tables = TABLES.write();
    if tables.is_some() {
        log::warn!("[core] color management already initialized");
        return;
    }
    *tables = Some(ColorTables::build());
    GENERATION.fetch_add(1, Ordering::SeqCst);
    log::debug!("[core] color management initialized");
}

/// Release the process-wide tables.
pub fn static_shutdown() {
    let mut tables = TABLES.write();
    if tables.take().is_none() {
        log::warn!("[core] color management shutdown without initialization");
    } else {
        log::debug!("[core] color management shut down");
    }
}

/// Current state of the tables.
#[must_use]
pub fn status() -> ColorStatus {
    ColorStatus {
        initialized: TABLES.read().is_some(),
        generation: GENERATION.load(Ordering::SeqCst),
    }
}

/// sRGB electro-optical transfer function: gamma-encoded to linear.
#[must_use]
pub fn srgb_to_linear(value: f64) -> f64 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse transfer function: linear to gamma-encoded sRGB.
#[must_use]
pub fn linear_to_srgb(value: f64) -> f64 {
    if value <= 0.003_130_8 {
        value * 12.92
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

/// Table-backed conversion for quantized sRGB inputs. Falls back to the
/// analytic transfer function when the tables are not live.
#[must_use]
pub fn srgb_u8_to_linear(value: u8) -> f32 {
    let tables = TABLES.read();
    match tables.as_ref() {
        Some(tables) => tables.srgb_to_linear_u8[value as usize],
        None => srgb_to_linear(f64::from(value) / 255.0) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_function_round_trips() {
        for value in [0.0, 0.02, 0.18, 0.5, 1.0] {
            let linear = srgb_to_linear(value);
            assert!((linear_to_srgb(linear) - value).abs() < 1e-9);
        }
    }

    #[test]
    fn transfer_function_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-9);
        // Linear segment below the knee.
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-12);
    }

    #[test]
    fn quantized_conversion_matches_analytic_path() {
        // Works with or without live tables; both paths agree either way.
        for value in [0u8, 1, 64, 128, 255] {
            let expected = srgb_to_linear(f64::from(value) / 255.0) as f32;
            assert!((srgb_u8_to_linear(value) - expected).abs() < 1e-6);
        }
    }
}
