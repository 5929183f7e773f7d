// ABOUTME: Meal data model for FoodLens calibration
// ABOUTME: Re-exports components, meal estimates, observations, and serving enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Data flows one way: a [`RawObservation`] from the vision collaborator becomes
//! a [`MealEstimate`] whose components have been classified and calibrated.
//! Manual corrections arrive as [`ComponentEdit`]s against a stored estimate.
//!
//! Every input-facing field is deserialized through [`lenient`], so malformed
//! upstream values degrade to neutral defaults instead of failing.

mod food;
mod meal;
mod observation;
mod serving;

/// Lenient serde field deserializers
pub mod lenient;

pub use food::{CookedState, CookingMethod, FoodCategory};
pub use meal::{components, ComponentEdit, MealComponent, MealEstimate, MealTotals};
pub use observation::RawObservation;
pub use serving::{FillLevel, ServingContext, SizeClass, Vessel};
