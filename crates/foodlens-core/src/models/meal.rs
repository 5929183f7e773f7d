// ABOUTME: Meal data model shared by ingestion, calibration, and manual edits
// ABOUTME: MealComponent, MealTotals, MealEstimate, and ComponentEdit definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::food::{CookedState, CookingMethod, FoodCategory};
use super::lenient;
use super::serving::{FillLevel, ServingContext, SizeClass, Vessel};
use crate::errors::AppResult;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// One food item within a meal
///
/// Input fields (`name` through `est_grams`) come from the vision collaborator
/// or a manual edit. `category` and every nutrition field are derived and are
/// recomputed on each calibration pass; values supplied upstream are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MealComponent {
    /// Display name, also fed to the classifier
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    /// Free-text hints fed to the classifier
    #[serde(default, deserialize_with = "lenient::tags")]
    pub tags: Vec<String>,
    /// Canonical category, always derived
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub category: FoodCategory,
    /// Raw or cooked appearance
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub cooked_state: CookedState,
    /// Cooking method, if any
    #[serde(default, deserialize_with = "lenient::optional")]
    pub method: Option<CookingMethod>,
    /// Number of discrete pieces
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub count: Option<u32>,
    /// Reported weight per piece (not authoritative)
    #[serde(default, deserialize_with = "lenient::optional_positive")]
    pub unit_weight_g: Option<f64>,
    /// Visual share of the plate
    #[serde(default, deserialize_with = "lenient::optional_fraction")]
    pub area_fraction: Option<f64>,
    /// Working weight estimate in grams
    #[serde(default, deserialize_with = "lenient::grams")]
    pub est_grams: f64,
    /// Energy density of the resolved per-100g profile
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub per100_kcal_used: f64,
    /// Component energy, derived from its macros
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub calories_kcal: f64,
    /// Protein in grams
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub proteins_g: f64,
    /// Fat in grams
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub fats_g: f64,
    /// Carbohydrate in grams
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub carbs_g: f64,
}

impl MealComponent {
    /// Create a component with a name and an initial gram estimate
    pub fn new(name: impl Into<String>, est_grams: f64) -> Self {
        Self {
            name: name.into(),
            est_grams: est_grams.max(0.0),
            ..Self::default()
        }
    }

    /// Set classifier tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set piece count
    #[must_use]
    pub const fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set cooking method
    #[must_use]
    pub const fn with_method(mut self, method: CookingMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Set cooked state
    #[must_use]
    pub const fn with_cooked_state(mut self, cooked_state: CookedState) -> Self {
        self.cooked_state = cooked_state;
        self
    }

    /// Set the visual plate share; non-finite values clear it
    #[must_use]
    pub fn with_area_fraction(mut self, area_fraction: f64) -> Self {
        self.area_fraction = if area_fraction.is_finite() {
            Some(area_fraction.clamp(0.0, 1.0))
        } else {
            None
        };
        self
    }

    /// Piece count, treating an absent count as zero
    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.count.unwrap_or(0)
    }
}

/// Meal-level sums over all components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MealTotals {
    /// Total grams
    pub portion_grams: f64,
    /// Total energy, capped at the meal ceiling
    pub calories_kcal: f64,
    /// Total protein in grams
    pub proteins_g: f64,
    /// Total fat in grams
    pub fats_g: f64,
    /// Total carbohydrate in grams
    pub carbs_g: f64,
}

/// Calibrated nutrition record for one meal
///
/// Totals are always fully recomputed from the components; they are never
/// patched incrementally, so repeated edits cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEstimate {
    /// Short dish name
    #[serde(default, deserialize_with = "lenient::text")]
    pub dish_name: String,
    /// Vessel type
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub vessel: Vessel,
    /// Vessel size class
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub size_class: SizeClass,
    /// Fill level
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub fill_level: FillLevel,
    /// Collaborator confidence in [0, 1]
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub confidence: f64,
    /// Free-text notes
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: String,
    /// Components in insertion order
    #[serde(default, deserialize_with = "components")]
    pub components: Vec<MealComponent>,
    /// Sums over components
    #[serde(flatten)]
    pub totals: MealTotals,
}

impl MealEstimate {
    /// Vessel, size and fill level of this meal
    #[must_use]
    pub const fn serving(&self) -> ServingContext {
        ServingContext::new(self.vessel, self.size_class, self.fill_level)
    }

    /// Decode a stored record
    ///
    /// Component fields are parsed leniently, exactly like fresh vision output.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text is not a JSON object.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode for storage
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Manual correction for one component, addressed by index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentEdit {
    /// Index into `MealEstimate::components`
    pub index: usize,
    /// Replacement gram estimate
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub est_grams: Option<f64>,
    /// Replacement piece count
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub count: Option<u32>,
}

impl ComponentEdit {
    /// Edit that replaces the gram estimate
    #[must_use]
    pub const fn grams(index: usize, est_grams: f64) -> Self {
        Self {
            index,
            est_grams: Some(est_grams),
            count: None,
        }
    }

    /// Edit that replaces the piece count
    #[must_use]
    pub const fn count(index: usize, count: u32) -> Self {
        Self {
            index,
            est_grams: None,
            count: Some(count),
        }
    }

    /// Replacement grams, if usable
    ///
    /// Non-finite and negative values are ignored, matching how malformed
    /// ingestion values are treated.
    #[must_use]
    pub fn valid_grams(&self) -> Option<f64> {
        self.est_grams.filter(|g| g.is_finite() && *g >= 0.0)
    }
}

/// Component list; non-object entries are skipped
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn components<'de, D>(deserializer: D) -> Result<Vec<MealComponent>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                warn!(component.index = index, "Skipping non-object component entry");
                return None;
            }
            serde_json::from_value(item)
                .map_err(|e| warn!(component.index = index, error = %e, "Skipping malformed component"))
                .ok()
        })
        .collect())
}
