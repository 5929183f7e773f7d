// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, a default pipeline, and float/component assertions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `foodlens`

use foodlens::{CalibrationPipeline, MealComponent, MealEstimate};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Pipeline with default tunables and test logging installed
pub fn pipeline() -> CalibrationPipeline {
    init_test_logging();
    CalibrationPipeline::default()
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Component by display name
pub fn component<'a>(meal: &'a MealEstimate, name: &str) -> &'a MealComponent {
    meal.components
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("no component named {name}"))
}
