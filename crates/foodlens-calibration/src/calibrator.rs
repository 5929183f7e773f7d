// ABOUTME: Component calibrator reconciling gram estimates with reference tables
// ABOUTME: Capacity scaling, piece-count correction, range clamping, macros, protein caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Component Calibrator
//!
//! Turns raw gram guesses into plausible, internally consistent nutrition
//! values. A calibration pass runs, in order:
//!
//! 1. capacity normalization over the whole meal,
//! 2. classification of every component,
//! 3. per-component reconciliation (piece count, range clamp, macros,
//!    protein cap).
//!
//! The pass is pure: the same components and serving context always produce
//! the same output, and every derived field is overwritten, so stale values
//! from a previous pass never leak through.

use crate::classifier::classify;
use crate::config::CalibrationConfig;
use crate::rounding::{floor1, round1};
use crate::tables::{
    fill_multiplier, gram_range, method_fat_delta, per100, protein_density_cap,
    typical_piece_grams, vessel_capacity_g, NutritionProfile,
};
use foodlens_core::constants::energy::kcal_from_macros;
use foodlens_core::models::{
    CookedState, CookingMethod, FoodCategory, MealComponent, ServingContext,
};
use tracing::{debug, warn};

/// Capacity in grams of a vessel at the given fill level, rounded to 0.1 g
#[must_use]
pub fn capacity_limit(serving: ServingContext) -> f64 {
    let vessel_g = vessel_capacity_g(serving.vessel, serving.size_class);
    round1(vessel_g * fill_multiplier(serving.fill_level))
}

/// Per-100g profile used for a component
///
/// Only cooked-basis values are tabulated, so the cooking method is the only
/// input that shifts the profile. The returned kcal is always derived from the
/// macros.
#[must_use]
pub fn resolve_profile(category: FoodCategory, method: Option<CookingMethod>) -> NutritionProfile {
    per100(category).with_fat_delta(method_fat_delta(method))
}

/// Clip protein to `cap_per_100g × grams / 100` and re-derive calories
///
/// Returns `true` when the cap was applied.
pub fn enforce_protein_cap(component: &mut MealComponent, cap_per_100g: f64) -> bool {
    let ceiling = cap_per_100g * component.est_grams / 100.0;
    if component.proteins_g <= ceiling {
        return false;
    }
    debug!(
        component.name = %component.name,
        proteins_g = component.proteins_g,
        ceiling,
        "Protein above density cap, clipping"
    );
    component.proteins_g = floor1(ceiling);
    component.calories_kcal = component_kcal(component);
    true
}

fn component_kcal(component: &MealComponent) -> f64 {
    round1(kcal_from_macros(
        component.proteins_g,
        component.fats_g,
        component.carbs_g,
    ))
}

/// Applies the reference tables to a meal's components
#[derive(Debug, Clone, Copy)]
pub struct ComponentCalibrator<'a> {
    config: &'a CalibrationConfig,
}

impl<'a> ComponentCalibrator<'a> {
    /// Create a calibrator using the given tunables
    #[must_use]
    pub const fn new(config: &'a CalibrationConfig) -> Self {
        Self { config }
    }

    /// Run a full calibration pass
    #[must_use]
    pub fn calibrate(
        &self,
        mut components: Vec<MealComponent>,
        serving: ServingContext,
    ) -> Vec<MealComponent> {
        sanitize_grams(&mut components);
        self.normalize_capacity(&mut components, capacity_limit(serving));

        for component in &mut components {
            component.category = classify(&component.name, &component.tags);
        }
        for component in &mut components {
            self.reconcile(component);
        }
        components
    }

    /// Scale every component down proportionally when the meal exceeds capacity
    ///
    /// Scaled grams are rounded down to 0.1 g so the new total never exceeds
    /// `capacity_g`. Returns the scale factor when scaling happened.
    pub fn normalize_capacity(
        &self,
        components: &mut [MealComponent],
        capacity_g: f64,
    ) -> Option<f64> {
        let total_g: f64 = components.iter().map(|c| c.est_grams).sum();
        if total_g <= capacity_g + self.config.capacity_tolerance_g {
            return None;
        }

        let scale = capacity_g / total_g;
        for component in components.iter_mut() {
            component.est_grams = floor1(component.est_grams * scale);
        }
        debug!(total_g, capacity_g, scale, "Meal exceeds vessel capacity, scaling down");
        Some(scale)
    }

    /// Bring one classified component into its plausible band and derive its nutrition
    pub fn reconcile(&self, component: &mut MealComponent) {
        if component.category.is_starch() {
            component.cooked_state = CookedState::Cooked;
        }

        self.apply_piece_count(component);
        self.clamp_to_range(component);

        let profile = resolve_profile(component.category, component.method);
        apply_profile(component, &profile);

        if let Some(cap) = protein_density_cap(component.category) {
            enforce_protein_cap(component, cap);
        }
    }

    fn apply_piece_count(&self, component: &mut MealComponent) {
        let count = component.piece_count();
        if count == 0 {
            return;
        }
        let Some(piece_g) = typical_piece_grams(component.category) else {
            return;
        };

        let by_count_g = f64::from(count) * piece_g;
        if component.est_grams < self.config.piece_count_trigger_ratio * by_count_g {
            debug!(
                component.name = %component.name,
                count,
                est_grams = component.est_grams,
                by_count_g,
                "Estimate far below piece count, using count weight"
            );
            component.est_grams = component.est_grams.max(by_count_g);
        }
    }

    fn clamp_to_range(&self, component: &mut MealComponent) {
        let range = gram_range(component.category);
        let min_g = if component.piece_count() > 0 {
            range.min_g * self.config.counted_min_factor
        } else {
            range.min_g
        };
        component.est_grams = round1(component.est_grams.clamp(min_g, range.max_g));
    }
}

/// Non-finite or negative grams become 0, as on ingestion
fn sanitize_grams(components: &mut [MealComponent]) {
    for (index, component) in components.iter_mut().enumerate() {
        if component.est_grams.is_finite() && component.est_grams >= 0.0 {
            continue;
        }
        warn!(
            component.index = index,
            component.name = %component.name,
            est_grams = component.est_grams,
            "Unusable gram estimate, treating as 0"
        );
        component.est_grams = 0.0;
    }
}

fn apply_profile(component: &mut MealComponent, profile: &NutritionProfile) {
    let factor = component.est_grams / 100.0;
    component.per100_kcal_used = round1(profile.kcal);
    component.proteins_g = round1(profile.protein_g * factor);
    component.fats_g = round1(profile.fat_g * factor);
    component.carbs_g = round1(profile.carb_g * factor);
    component.calories_kcal = component_kcal(component);
}
