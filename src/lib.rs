// ABOUTME: Main library entry point for the FoodLens meal calibration engine
// ABOUTME: Re-exports the data model and pipeline, adds logging and the vision boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FoodLens`
//!
//! Turns a loosely-structured description of a meal photo into calibrated
//! calories and macros. A vision collaborator reports what it sees (components,
//! gram guesses, vessel size); this crate corrects those guesses against
//! embedded reference tables and returns a bounded, internally consistent
//! nutrition record.
//!
//! ## Architecture
//!
//! - **`foodlens-core`**: data model, lenient parsing, `AppError`
//! - **`foodlens-calibration`**: tables, classifier, calibrator, aggregator, pipeline
//! - **logging**: `tracing-subscriber` setup
//! - **vision**: collaborator trait, reply parsing, demo placeholder, analysis service
//!
//! ## Example Usage
//!
//! ```rust
//! use foodlens::{CalibrationPipeline, ComponentEdit};
//! use serde_json::json;
//!
//! let pipeline = CalibrationPipeline::default();
//! let meal = pipeline.run_value(json!({
//!     "vessel": "plate",
//!     "components": [{"name": "Куриная грудка", "est_grams": 500}]
//! }));
//! assert!((meal.components[0].est_grams - 200.0).abs() < 1e-9);
//!
//! let edited = pipeline.rerun(meal, &[ComponentEdit::grams(0, 150.0)]);
//! assert!((edited.totals.portion_grams - 150.0).abs() < 1e-9);
//! ```

/// Structured logging configuration
pub mod logging;

/// Vision collaborator boundary
pub mod vision;

pub use foodlens_calibration::{
    aggregate, classify, CalibrationConfig, CalibrationPipeline, ComponentCalibrator, ConfigError,
};
pub use foodlens_core::errors::{AppError, AppResult, ErrorCode};
pub use foodlens_core::models::{
    ComponentEdit, CookedState, CookingMethod, FillLevel, FoodCategory, MealComponent,
    MealEstimate, MealTotals, RawObservation, ServingContext, SizeClass, Vessel,
};
pub use vision::{
    parse_vision_reply, placeholder_observation, MealAnalysisService, VisionAnalyzer,
    VisionBoundaryConfig, VisionError,
};

