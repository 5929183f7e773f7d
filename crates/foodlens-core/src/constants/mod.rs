// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy conversion factors, observation defaults, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Atwater energy factors used to derive calories from macronutrients
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARB: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;

    /// Energy of a macro split, in kcal
    #[must_use]
    pub fn kcal_from_macros(protein_g: f64, fat_g: f64, carb_g: f64) -> f64 {
        KCAL_PER_G_PROTEIN * protein_g + KCAL_PER_G_CARB * carb_g + KCAL_PER_G_FAT * fat_g
    }
}

/// Values substituted when the vision collaborator omits a meal-level field
pub mod observation_defaults {
    /// Dish name used when none is reported
    pub const DISH_NAME: &str = "Dish";
    /// Notes used when none are reported
    pub const NOTES: &str = "Rough estimate.";
    /// Confidence used when none (or a non-numeric value) is reported
    pub const CONFIDENCE: f64 = 0.7;
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Root service name
    pub const FOODLENS: &str = "foodlens";
    /// Vision collaborator name used in error messages
    pub const VISION_SERVICE: &str = "vision";
}
