// ABOUTME: Integration tests for manual component edits on stored meal estimates
// ABOUTME: Edits go through the same calibration path as fresh observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, component, pipeline};
use foodlens::{CalibrationConfig, CalibrationPipeline, ComponentEdit, MealEstimate};
use serde_json::json;

fn lunch(pipeline: &CalibrationPipeline) -> MealEstimate {
    pipeline.run_value(json!({
        "dish_name": "Lunch",
        "vessel": "plate",
        "size_class": "large",
        "components": [
            {"name": "Картофель", "est_grams": 200, "method": "baked"},
            {"name": "Куриное бедро", "count": 1, "est_grams": 130, "method": "fried"},
            {"name": "Салат", "est_grams": 90}
        ]
    }))
}

#[test]
fn test_gram_edit_is_clamped_like_ingestion() {
    let pipeline = pipeline();
    let edited = pipeline.rerun(lunch(&pipeline), &[ComponentEdit::grams(2, 1000.0)]);
    assert_close(component(&edited, "Салат").est_grams, 250.0, 1e-9);
}

#[test]
fn test_multiple_edits_apply_in_order() {
    let pipeline = pipeline();
    let edits = [
        ComponentEdit::grams(0, 300.0),
        ComponentEdit::grams(0, 150.0),
        ComponentEdit::count(1, 2),
    ];
    let edited = pipeline.rerun(lunch(&pipeline), &edits);
    assert_close(component(&edited, "Картофель").est_grams, 150.0, 1e-9);
    // 130 g is below 0.6 × 2 × 120 g, so two thighs weigh 240 g
    assert_close(component(&edited, "Куриное бедро").est_grams, 240.0, 1e-9);
}

#[test]
fn test_edit_with_grams_and_count_together() {
    let pipeline = pipeline();
    let edit = ComponentEdit {
        index: 1,
        est_grams: Some(100.0),
        count: Some(3),
    };
    let edited = pipeline.rerun(lunch(&pipeline), &[edit]);
    // 100 g < 0.6 × 360 g → 360 g, then the 280 g thigh maximum
    assert_close(component(&edited, "Куриное бедро").est_grams, 280.0, 1e-9);
}

#[test]
fn test_totals_are_recomputed_not_patched() {
    let pipeline = pipeline();
    let mut meal = lunch(&pipeline);
    meal.totals.calories_kcal = 0.0;
    meal.totals.portion_grams = 1.0;

    let edited = pipeline.rerun(meal, &[]);
    let grams: f64 = edited.components.iter().map(|c| c.est_grams).sum();
    let kcal: f64 = edited.components.iter().map(|c| c.calories_kcal).sum();
    assert_close(edited.totals.portion_grams, grams, 0.05);
    assert_close(edited.totals.calories_kcal, kcal, 0.05);
}

#[test]
fn test_edits_respect_configured_ceiling() {
    let pipeline = CalibrationPipeline::new(CalibrationConfig {
        meal_kcal_ceiling: 500.0,
        ..CalibrationConfig::default()
    });
    let meal = lunch(&pipeline);
    assert!(meal.totals.calories_kcal <= 500.0);

    let edited = pipeline.rerun(meal, &[ComponentEdit::grams(0, 400.0)]);
    assert_close(edited.totals.calories_kcal, 500.0, 1e-9);
}

#[test]
fn test_edits_from_json_payload() {
    let pipeline = pipeline();
    let edits: Vec<ComponentEdit> = serde_json::from_value(json!([
        {"index": 0, "est_grams": "180"},
        {"index": 9, "count": 2},
        {"index": 2, "est_grams": -5}
    ]))
    .unwrap();
    let meal = lunch(&pipeline);
    let salad_before = component(&meal, "Салат").est_grams;

    let edited = pipeline.rerun(meal, &edits);
    assert_close(component(&edited, "Картофель").est_grams, 180.0, 1e-9);
    assert_close(component(&edited, "Салат").est_grams, salad_before, 1e-9);
}

#[test]
fn test_corrupted_stored_grams_stay_local() {
    let pipeline = pipeline();
    let mut meal = lunch(&pipeline);
    meal.components[0].est_grams = f64::NAN;

    let edited = pipeline.rerun(meal, &[ComponentEdit::count(1, 1)]);
    // NaN is treated as 0 and then clamped to the potato minimum
    assert_close(component(&edited, "Картофель").est_grams, 80.0, 1e-9);
    assert_close(component(&edited, "Куриное бедро").est_grams, 130.0, 1e-9);
    assert_close(component(&edited, "Салат").est_grams, 90.0, 1e-9);
    assert_close(edited.totals.portion_grams, 300.0, 1e-9);
    assert!(edited.totals.calories_kcal.is_finite());
    assert!(edited.totals.calories_kcal < 1200.0);

    let stored = edited.to_json().unwrap();
    assert_eq!(MealEstimate::from_json(&stored).unwrap(), edited);
}
