// ABOUTME: Totals aggregator summing calibrated components into meal totals
// ABOUTME: Applies the meal energy ceiling to calories only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::rounding::round1;
use foodlens_core::models::{MealComponent, MealTotals};
use tracing::debug;

/// Sum components into meal totals
///
/// Each total is rounded to 0.1. Calories are then capped at `kcal_ceiling`;
/// grams and macros are never capped, so a capped meal reports fewer calories
/// than its macros imply.
#[must_use]
pub fn aggregate(components: &[MealComponent], kcal_ceiling: f64) -> MealTotals {
    let sums = components.iter().fold(MealTotals::default(), |acc, c| MealTotals {
        portion_grams: acc.portion_grams + c.est_grams,
        calories_kcal: acc.calories_kcal + c.calories_kcal,
        proteins_g: acc.proteins_g + c.proteins_g,
        fats_g: acc.fats_g + c.fats_g,
        carbs_g: acc.carbs_g + c.carbs_g,
    });

    let calories_kcal = round1(sums.calories_kcal);
    if calories_kcal > kcal_ceiling {
        debug!(calories_kcal, kcal_ceiling, "Meal energy above ceiling, capping");
    }

    MealTotals {
        portion_grams: round1(sums.portion_grams),
        calories_kcal: calories_kcal.min(kcal_ceiling),
        proteins_g: round1(sums.proteins_g),
        fats_g: round1(sums.fats_g),
        carbs_g: round1(sums.carbs_g),
    }
}
