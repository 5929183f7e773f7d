// ABOUTME: Compiled-in reference tables for meal calibration
// ABOUTME: Per-100g profiles, piece weights, vessel capacities, gram ranges, protein caps, fat deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference tables
//!
//! All values are static and read-only. Category-keyed tables are exhaustive
//! matches over [`FoodCategory`]; the vessel table is a lazily built map whose
//! missing combinations fall back to [`DEFAULT_VESSEL_CAPACITY_G`].
//!
//! Nutrition values are medians for ready-to-eat (cooked) food.

use foodlens_core::constants::energy::kcal_from_macros;
use foodlens_core::models::{CookingMethod, FillLevel, FoodCategory, SizeClass, Vessel};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Capacity used for vessel/size combinations without a table entry
pub const DEFAULT_VESSEL_CAPACITY_G: f64 = 600.0;

/// Nutrition per 100 g of food
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionProfile {
    /// Energy in kcal; on table entries this is the label value
    pub kcal: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Carbohydrate in grams
    pub carb_g: f64,
}

impl NutritionProfile {
    const fn new(kcal: f64, protein_g: f64, fat_g: f64, carb_g: f64) -> Self {
        Self {
            kcal,
            protein_g,
            fat_g,
            carb_g,
        }
    }

    /// Energy implied by the macros (4/4/9)
    #[must_use]
    pub fn derived_kcal(&self) -> f64 {
        kcal_from_macros(self.protein_g, self.fat_g, self.carb_g)
    }

    /// Shift fat by `delta_g` (floored at zero) and re-derive kcal from macros
    ///
    /// The label kcal is discarded even for a zero delta, so the returned
    /// profile is always self-consistent.
    #[must_use]
    pub fn with_fat_delta(self, delta_g: f64) -> Self {
        let fat_g = (self.fat_g + delta_g).max(0.0);
        let adjusted = Self { fat_g, ..self };
        Self {
            kcal: adjusted.derived_kcal(),
            ..adjusted
        }
    }
}

/// Inclusive plausibility band for a component's grams
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GramRange {
    /// Lower bound in grams
    pub min_g: f64,
    /// Upper bound in grams
    pub max_g: f64,
}

impl GramRange {
    const fn new(min_g: f64, max_g: f64) -> Self {
        Self { min_g, max_g }
    }
}

/// Cooked-basis nutrition per 100 g
#[must_use]
pub const fn per100(category: FoodCategory) -> NutritionProfile {
    match category {
        FoodCategory::Pasta => NutritionProfile::new(150.0, 5.0, 1.0, 30.0),
        FoodCategory::Rice => NutritionProfile::new(135.0, 2.5, 0.3, 29.0),
        FoodCategory::Buckwheat => NutritionProfile::new(115.0, 4.0, 1.0, 24.0),
        FoodCategory::Potato => NutritionProfile::new(87.0, 2.0, 0.1, 20.0),
        FoodCategory::Bread => NutritionProfile::new(250.0, 9.0, 2.6, 49.0),
        FoodCategory::Sausages => NutritionProfile::new(300.0, 12.0, 27.0, 2.0),
        FoodCategory::ChickenBreast => NutritionProfile::new(165.0, 31.0, 3.6, 0.0),
        FoodCategory::ChickenDrumstick => NutritionProfile::new(220.0, 27.0, 12.0, 0.0),
        FoodCategory::ChickenThigh => NutritionProfile::new(225.0, 26.0, 13.0, 0.0),
        FoodCategory::Salmon => NutritionProfile::new(210.0, 20.0, 14.0, 0.0),
        FoodCategory::FishLean => NutritionProfile::new(160.0, 26.0, 5.0, 0.0),
        FoodCategory::BeefSteak => NutritionProfile::new(250.0, 26.0, 15.0, 0.0),
        FoodCategory::Pork => NutritionProfile::new(280.0, 24.0, 20.0, 0.0),
        FoodCategory::Sushi => NutritionProfile::new(150.0, 5.8, 1.8, 28.0),
        FoodCategory::Cheese => NutritionProfile::new(340.0, 25.0, 26.0, 1.3),
        FoodCategory::Dumplings => NutritionProfile::new(260.0, 10.0, 8.0, 38.0),
        FoodCategory::Vegetables => NutritionProfile::new(25.0, 1.2, 0.2, 4.5),
        FoodCategory::Fruits => NutritionProfile::new(50.0, 0.6, 0.3, 12.0),
        FoodCategory::Unknown => NutritionProfile::new(180.0, 7.0, 7.0, 23.0),
    }
}

/// Typical edible grams of one discrete piece
///
/// Only consulted when a component reports a piece count.
#[must_use]
pub const fn typical_piece_grams(category: FoodCategory) -> Option<f64> {
    match category {
        FoodCategory::ChickenDrumstick | FoodCategory::Sausages => Some(80.0),
        FoodCategory::ChickenThigh => Some(120.0),
        FoodCategory::Sushi => Some(35.0),
        FoodCategory::Dumplings => Some(12.0),
        _ => None,
    }
}

static VESSEL_CAPACITY_G: LazyLock<HashMap<(Vessel, SizeClass), f64>> = LazyLock::new(|| {
    HashMap::from([
        ((Vessel::Plate, SizeClass::Small), 450.0),
        ((Vessel::Plate, SizeClass::Medium), 650.0),
        ((Vessel::Plate, SizeClass::Large), 850.0),
        ((Vessel::Bowl, SizeClass::Small), 350.0),
        ((Vessel::Bowl, SizeClass::Medium), 500.0),
        ((Vessel::Bowl, SizeClass::Large), 700.0),
    ])
});

/// Baseline capacity in grams for average-density food
#[must_use]
pub fn vessel_capacity_g(vessel: Vessel, size_class: SizeClass) -> f64 {
    VESSEL_CAPACITY_G
        .get(&(vessel, size_class))
        .copied()
        .unwrap_or(DEFAULT_VESSEL_CAPACITY_G)
}

/// Multiplier applied to vessel capacity
#[must_use]
pub const fn fill_multiplier(fill_level: FillLevel) -> f64 {
    match fill_level {
        FillLevel::Low => 0.7,
        FillLevel::Medium | FillLevel::Other => 1.0,
        FillLevel::High => 1.15,
    }
}

/// Plausible grams for one component of this category
#[must_use]
pub const fn gram_range(category: FoodCategory) -> GramRange {
    match category {
        FoodCategory::Pasta | FoodCategory::Buckwheat => GramRange::new(80.0, 300.0),
        FoodCategory::Rice => GramRange::new(80.0, 350.0),
        FoodCategory::Potato => GramRange::new(80.0, 400.0),
        FoodCategory::Bread => GramRange::new(20.0, 150.0),
        FoodCategory::Sausages => GramRange::new(60.0, 600.0),
        FoodCategory::ChickenBreast => GramRange::new(60.0, 200.0),
        FoodCategory::ChickenDrumstick => GramRange::new(60.0, 400.0),
        FoodCategory::ChickenThigh => GramRange::new(80.0, 280.0),
        FoodCategory::Salmon | FoodCategory::FishLean => GramRange::new(80.0, 220.0),
        FoodCategory::BeefSteak => GramRange::new(100.0, 300.0),
        FoodCategory::Pork => GramRange::new(80.0, 300.0),
        FoodCategory::Sushi => GramRange::new(70.0, 500.0),
        FoodCategory::Cheese => GramRange::new(10.0, 120.0),
        FoodCategory::Dumplings => GramRange::new(120.0, 350.0),
        FoodCategory::Vegetables | FoodCategory::Fruits => GramRange::new(30.0, 250.0),
        FoodCategory::Unknown => GramRange::new(40.0, 800.0),
    }
}

/// Maximum grams of protein per 100 g, for categories that have one
#[must_use]
pub const fn protein_density_cap(category: FoodCategory) -> Option<f64> {
    match category {
        FoodCategory::ChickenBreast => Some(33.0),
        FoodCategory::FishLean | FoodCategory::BeefSteak => Some(30.0),
        FoodCategory::Salmon => Some(26.0),
        FoodCategory::Sausages => Some(16.0),
        FoodCategory::Dumplings => Some(14.0),
        FoodCategory::Pasta => Some(13.0),
        FoodCategory::Rice => Some(7.0),
        _ => None,
    }
}

/// Additive fat per 100 g for a cooking method; no method means no change
#[must_use]
pub const fn method_fat_delta(method: Option<CookingMethod>) -> f64 {
    match method {
        Some(CookingMethod::Fried) => 4.0,
        Some(CookingMethod::DeepFried) => 8.0,
        Some(CookingMethod::Grill) => 1.0,
        Some(CookingMethod::Baked) => 0.5,
        Some(CookingMethod::Boiled) => -1.0,
        Some(CookingMethod::Steamed) => -1.5,
        None => 0.0,
    }
}
