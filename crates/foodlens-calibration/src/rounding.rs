// ABOUTME: One-decimal rounding helpers for grams, macros, and energy
// ABOUTME: floor1 carries a small guard so already-rounded values stay put
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Added before flooring so `x.y` stored as `x.y - ε` does not drop a tenth
const FLOOR_GUARD: f64 = 1e-6;

/// Round half away from zero to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round down to one decimal place
#[must_use]
pub fn floor1(value: f64) -> f64 {
    (value * 10.0 + FLOOR_GUARD).floor() / 10.0
}
