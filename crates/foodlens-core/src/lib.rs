// ABOUTME: Core types and constants for the FoodLens meal calibration engine
// ABOUTME: Foundation crate with the meal data model, lenient parsing, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FoodLens` Core
//!
//! Foundation crate providing the shared data model for meal calibration.
//! It changes infrequently, so the engine and boundary crates can be rebuilt
//! without touching it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy factors, observation defaults, service names
//! - **models**: Meal components, meal estimates, raw observations, manual edits

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Meal data model and lenient field parsing
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
