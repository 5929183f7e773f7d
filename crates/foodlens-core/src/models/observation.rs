// ABOUTME: Raw structured observation as returned by the vision collaborator
// ABOUTME: Never fails to parse; missing meal-level fields resolve to fixed defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient;
use super::meal::{components, MealComponent};
use super::serving::{FillLevel, ServingContext, SizeClass, Vessel};
use crate::constants::observation_defaults;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Loosely-structured meal description from the vision collaborator
///
/// Every field is optional. Use [`RawObservation::from_value`] to build one
/// from arbitrary JSON without any chance of failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RawObservation {
    /// Short dish name
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub dish_name: Option<String>,
    /// Vessel type
    #[serde(default, deserialize_with = "lenient::optional")]
    pub vessel: Option<Vessel>,
    /// Vessel size class
    #[serde(default, deserialize_with = "lenient::optional")]
    pub size_class: Option<SizeClass>,
    /// Fill level
    #[serde(default, deserialize_with = "lenient::optional")]
    pub fill_level: Option<FillLevel>,
    /// Self-reported confidence
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub confidence: Option<f64>,
    /// Free-text notes
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub notes: Option<String>,
    /// Observed components
    #[serde(default, deserialize_with = "components")]
    pub components: Vec<MealComponent>,
}

impl RawObservation {
    /// Interpret arbitrary JSON as an observation
    ///
    /// Anything that is not a JSON object yields an empty observation.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            warn!("Vision observation is not a JSON object, using an empty observation");
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_else(|e| {
            warn!(error = %e, "Vision observation could not be read, using an empty observation");
            Self::default()
        })
    }

    /// Dish name, or the default when none was reported
    #[must_use]
    pub fn resolved_dish_name(&self) -> String {
        self.dish_name
            .clone()
            .unwrap_or_else(|| observation_defaults::DISH_NAME.to_owned())
    }

    /// Notes, or the default when none were reported
    #[must_use]
    pub fn resolved_notes(&self) -> String {
        self.notes
            .clone()
            .unwrap_or_else(|| observation_defaults::NOTES.to_owned())
    }

    /// Confidence clamped into [0, 1], defaulting when absent
    #[must_use]
    pub fn resolved_confidence(&self) -> f64 {
        self.confidence
            .unwrap_or(observation_defaults::CONFIDENCE)
            .clamp(0.0, 1.0)
    }

    /// Serving context with plate / medium / medium defaults
    #[must_use]
    pub fn resolved_serving(&self) -> ServingContext {
        ServingContext::new(
            self.vessel.unwrap_or_default(),
            self.size_class.unwrap_or_default(),
            self.fill_level.unwrap_or_default(),
        )
    }
}
