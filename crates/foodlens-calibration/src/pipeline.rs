// ABOUTME: Calibration pipeline entry points for fresh observations and manual edits
// ABOUTME: Both paths share one calibrate-then-aggregate routine so results never diverge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calibration Pipeline
//!
//! [`CalibrationPipeline::run`] turns a [`RawObservation`] into a
//! [`MealEstimate`]. [`CalibrationPipeline::rerun`] applies manual
//! [`ComponentEdit`]s to a stored estimate and recalibrates it through the same
//! routine, so an edited meal is indistinguishable from a fresh observation
//! with the edited values. Neither path can fail.

use crate::aggregator::aggregate;
use crate::calibrator::ComponentCalibrator;
use crate::config::CalibrationConfig;
use foodlens_core::models::{
    ComponentEdit, MealComponent, MealEstimate, MealTotals, RawObservation,
};
use rayon::prelude::*;
use serde_json::Value;
use std::mem;
use tracing::{debug, info, warn};

/// Observation-to-estimate pipeline bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct CalibrationPipeline {
    config: CalibrationConfig,
}

impl CalibrationPipeline {
    /// Create a pipeline with explicit tunables
    #[must_use]
    pub const fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }

    /// Create a pipeline from the process-wide configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(CalibrationConfig::global().clone())
    }

    /// Tunables in use
    #[must_use]
    pub const fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Calibrate a fresh observation
    #[must_use]
    pub fn run(&self, observation: RawObservation) -> MealEstimate {
        let serving = observation.resolved_serving();
        let meal = MealEstimate {
            dish_name: observation.resolved_dish_name(),
            vessel: serving.vessel,
            size_class: serving.size_class,
            fill_level: serving.fill_level,
            confidence: observation.resolved_confidence(),
            notes: observation.resolved_notes(),
            components: observation.components,
            totals: MealTotals::default(),
        };
        let meal = self.recalibrate(meal);
        info!(
            dish_name = %meal.dish_name,
            components = meal.components.len(),
            calories_kcal = meal.totals.calories_kcal,
            "Meal calibrated"
        );
        meal
    }

    /// Calibrate arbitrary vision JSON
    #[must_use]
    pub fn run_value(&self, value: Value) -> MealEstimate {
        self.run(RawObservation::from_value(value))
    }

    /// Apply manual edits to a stored estimate and recalibrate it
    ///
    /// Edits are applied in order; an edit whose index is out of range is
    /// skipped. Derived fields of every component are recomputed, not only
    /// those of the edited ones.
    #[must_use]
    pub fn rerun(&self, mut meal: MealEstimate, edits: &[ComponentEdit]) -> MealEstimate {
        for edit in edits {
            apply_edit(&mut meal.components, edit);
        }
        let meal = self.recalibrate(meal);
        info!(
            dish_name = %meal.dish_name,
            edits = edits.len(),
            calories_kcal = meal.totals.calories_kcal,
            "Meal recalibrated after manual edit"
        );
        meal
    }

    /// Recalibrate a stored estimate as-is
    #[must_use]
    pub fn recalibrate(&self, mut meal: MealEstimate) -> MealEstimate {
        let calibrator = ComponentCalibrator::new(&self.config);
        let components = mem::take(&mut meal.components);
        meal.components = calibrator.calibrate(components, meal.serving());
        meal.totals = aggregate(&meal.components, self.config.meal_kcal_ceiling);
        meal
    }

    /// Calibrate many observations in parallel, preserving input order
    #[must_use]
    pub fn run_batch(&self, observations: Vec<RawObservation>) -> Vec<MealEstimate> {
        observations
            .into_par_iter()
            .map(|observation| self.run(observation))
            .collect()
    }
}

fn apply_edit(components: &mut [MealComponent], edit: &ComponentEdit) {
    let Some(component) = components.get_mut(edit.index) else {
        warn!(
            index = edit.index,
            components = components.len(),
            "Ignoring edit for missing component"
        );
        return;
    };
    if let Some(grams) = edit.valid_grams() {
        component.est_grams = grams;
    } else if edit.est_grams.is_some() {
        warn!(index = edit.index, "Ignoring non-finite or negative gram edit");
    }
    if let Some(count) = edit.count {
        component.count = Some(count);
    }
    debug!(
        index = edit.index,
        component.name = %component.name,
        est_grams = component.est_grams,
        count = ?component.count,
        "Applied manual edit"
    );
}
