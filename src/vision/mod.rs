// ABOUTME: Boundary with the vision collaborator that describes a meal photo as JSON
// ABOUTME: Analyzer trait, boundary errors, reply salvage, demo placeholder, analysis service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Vision Boundary
//!
//! Everything that can go wrong with the vision collaborator (outages, quota,
//! unparseable replies, photos of a whole banquet) is handled here, before
//! anything reaches the calibration pipeline. The pipeline only ever sees a
//! [`RawObservation`](foodlens_core::models::RawObservation).

mod error;
mod placeholder;
mod reply;
mod service;

pub use error::VisionError;
pub use placeholder::{placeholder_observation, PLACEHOLDER_NOTES};
pub use reply::parse_vision_reply;
pub use service::{MealAnalysisService, VisionBoundaryConfig};

use async_trait::async_trait;
use serde_json::Value;

/// A service that turns a meal photo into a structured observation
#[async_trait]
pub trait VisionAnalyzer: Send + Sync {
    /// Describe the meal in `image` as a JSON object
    ///
    /// Implementations that receive free text from a model should run it
    /// through [`parse_vision_reply`].
    ///
    /// # Errors
    ///
    /// Returns a [`VisionError`] when the collaborator fails or refuses.
    async fn describe_meal(&self, image: &[u8]) -> Result<Value, VisionError>;
}
