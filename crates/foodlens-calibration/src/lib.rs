// ABOUTME: FoodLens calibration engine turning vision observations into nutrition records
// ABOUTME: Reference tables, keyword classifier, component calibrator, totals aggregator, pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FoodLens` Calibration
//!
//! Deterministic, table-driven correction of meal estimates. Nothing in this
//! crate performs I/O or can fail on bad input; malformed values are repaired
//! in place and logged at `debug`/`warn`.
//!
//! ## Modules
//!
//! - **tables**: Per-100g profiles and the plausibility tables
//! - **classifier**: Keyword classifier from names and tags to categories
//! - **calibrator**: Per-component reconciliation against the tables
//! - **aggregator**: Meal totals with the energy ceiling
//! - **pipeline**: `run` / `rerun` entry points
//! - **config**: Tunables with environment overrides

/// Meal totals aggregation
pub mod aggregator;
/// Component calibration pass
pub mod calibrator;
/// Keyword-based category classifier
pub mod classifier;
/// Calibration tunables
pub mod config;
/// Observation and edit entry points
pub mod pipeline;
/// One-decimal rounding helpers
pub mod rounding;
/// Static reference tables
pub mod tables;

pub use aggregator::aggregate;
pub use calibrator::{capacity_limit, enforce_protein_cap, ComponentCalibrator};
pub use classifier::classify;
pub use config::{CalibrationConfig, ConfigError};
pub use pipeline::CalibrationPipeline;
