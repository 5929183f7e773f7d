// ABOUTME: Synthetic meal observation generator for property-style calibration tests
// ABOUTME: Produces reproducible, deliberately messy observations from a ChaCha seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use foodlens::{
    CookedState, CookingMethod, FillLevel, MealComponent, RawObservation, SizeClass, Vessel,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Component names with classifier tags, one or more per category plus unknowns
const FOODS: &[(&str, &[&str])] = &[
    ("Penne", &["pasta"]),
    ("Рис отварной", &[]),
    ("Гречка", &["buckwheat"]),
    ("Картофельное пюре", &[]),
    ("Хлеб", &[]),
    ("Сосиски", &[]),
    ("Куриная грудка", &["chicken", "breast"]),
    ("Куриные голени", &["chicken"]),
    ("Chicken thigh", &[]),
    ("Лосось", &["fish"]),
    ("Треска", &["fish"]),
    ("Beef steak", &[]),
    ("Свинина", &[]),
    ("Суши", &[]),
    ("Сыр", &[]),
    ("Пельмени", &[]),
    ("Огурец", &["vegetable"]),
    ("Яблоко", &[]),
    ("Mystery stew", &[]),
    ("Борщ", &[]),
];

const VESSELS: [Vessel; 3] = [Vessel::Plate, Vessel::Bowl, Vessel::Other];
const SIZES: [SizeClass; 4] = [
    SizeClass::Small,
    SizeClass::Medium,
    SizeClass::Large,
    SizeClass::Other,
];
const FILLS: [FillLevel; 4] = [
    FillLevel::Low,
    FillLevel::Medium,
    FillLevel::High,
    FillLevel::Other,
];
const METHODS: [CookingMethod; 6] = [
    CookingMethod::Fried,
    CookingMethod::DeepFried,
    CookingMethod::Grill,
    CookingMethod::Baked,
    CookingMethod::Boiled,
    CookingMethod::Steamed,
];

/// Builder for reproducible synthetic meal observations
#[derive(Debug, Clone)]
pub struct SyntheticMealBuilder {
    rng: ChaCha8Rng,
}

impl SyntheticMealBuilder {
    /// Create new builder with deterministic seed for reproducibility
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate `meals` observations
    pub fn corpus(&mut self, meals: usize) -> Vec<RawObservation> {
        (0..meals).map(|_| self.observation()).collect()
    }

    /// Generate one observation with 0 to 6 components
    pub fn observation(&mut self) -> RawObservation {
        let components = (0..self.rng.gen_range(0..=6))
            .map(|_| self.component())
            .collect();
        RawObservation {
            dish_name: Some(format!("synthetic_{}", self.rng.gen::<u32>())),
            vessel: Some(*VESSELS.choose(&mut self.rng).unwrap()),
            size_class: Some(*SIZES.choose(&mut self.rng).unwrap()),
            fill_level: Some(*FILLS.choose(&mut self.rng).unwrap()),
            confidence: Some(self.rng.gen_range(0.0..1.0)),
            notes: None,
            components,
        }
    }

    /// Generate one component with a wide, often implausible gram guess
    pub fn component(&mut self) -> MealComponent {
        let (name, tags) = FOODS.choose(&mut self.rng).unwrap();
        let grams = if self.rng.gen_bool(0.1) {
            0.0
        } else {
            (self.rng.gen_range(1.0..1200.0_f64) * 10.0).round() / 10.0
        };

        let mut component = MealComponent::new(*name, grams).with_tags(tags.iter().copied());
        if self.rng.gen_bool(0.35) {
            component = component.with_count(self.rng.gen_range(0..=12));
        }
        if self.rng.gen_bool(0.6) {
            component = component.with_method(*METHODS.choose(&mut self.rng).unwrap());
        }
        if self.rng.gen_bool(0.2) {
            component = component.with_cooked_state(CookedState::Raw);
        }
        component
    }
}
