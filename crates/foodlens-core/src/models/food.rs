// ABOUTME: Food-level enums describing what a meal component is and how it was prepared
// ABOUTME: FoodCategory, CookedState, and CookingMethod definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical food category a component is resolved to
///
/// Categories are always derived from a component's name and tags; a value
/// supplied by the caller is overwritten on every calibration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Cooked pasta
    Pasta,
    /// Cooked rice
    Rice,
    /// Cooked buckwheat
    Buckwheat,
    /// Boiled or baked potato
    Potato,
    /// Bread, buns, baguette
    Bread,
    /// Sausages, frankfurters and other processed meat
    Sausages,
    /// Chicken breast
    ChickenBreast,
    /// Chicken drumstick, edible part
    ChickenDrumstick,
    /// Chicken thigh
    ChickenThigh,
    /// Salmon
    Salmon,
    /// White or other lean fish
    FishLean,
    /// Beef steak
    BeefSteak,
    /// Pork
    Pork,
    /// Sushi and rolls
    Sushi,
    /// Cheese
    Cheese,
    /// Dumplings (pelmeni, vareniki, manti)
    Dumplings,
    /// Vegetables and salads
    Vegetables,
    /// Fruits and berries
    Fruits,
    /// Anything no keyword rule matched
    #[default]
    #[serde(other)]
    Unknown,
}

impl FoodCategory {
    /// Every category, in declaration order
    pub const ALL: [Self; 19] = [
        Self::Pasta,
        Self::Rice,
        Self::Buckwheat,
        Self::Potato,
        Self::Bread,
        Self::Sausages,
        Self::ChickenBreast,
        Self::ChickenDrumstick,
        Self::ChickenThigh,
        Self::Salmon,
        Self::FishLean,
        Self::BeefSteak,
        Self::Pork,
        Self::Sushi,
        Self::Cheese,
        Self::Dumplings,
        Self::Vegetables,
        Self::Fruits,
        Self::Unknown,
    ];

    /// Stable snake-case key for this category
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pasta => "pasta",
            Self::Rice => "rice",
            Self::Buckwheat => "buckwheat",
            Self::Potato => "potato",
            Self::Bread => "bread",
            Self::Sausages => "sausages",
            Self::ChickenBreast => "chicken_breast",
            Self::ChickenDrumstick => "chicken_drumstick",
            Self::ChickenThigh => "chicken_thigh",
            Self::Salmon => "salmon",
            Self::FishLean => "fish_lean",
            Self::BeefSteak => "beef_steak",
            Self::Pork => "pork",
            Self::Sushi => "sushi",
            Self::Cheese => "cheese",
            Self::Dumplings => "dumplings",
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Unknown => "unknown",
        }
    }

    /// Starches are always valued on their ready-to-eat (cooked) profile
    #[must_use]
    pub const fn is_starch(&self) -> bool {
        matches!(
            self,
            Self::Pasta | Self::Rice | Self::Buckwheat | Self::Potato | Self::Dumplings
        )
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a component looks raw or cooked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CookedState {
    /// Raw, uncooked appearance
    Raw,
    /// Cooked, ready-to-eat appearance
    #[default]
    Cooked,
}

/// Cooking method reported for a component
///
/// Each method carries a fat delta per 100 g, see the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingMethod {
    /// Pan fried
    #[serde(alias = "fry", alias = "pan_fried")]
    Fried,
    /// Deep fried
    #[serde(alias = "deep-fried", alias = "deepfried")]
    DeepFried,
    /// Grilled
    #[serde(alias = "grilled")]
    Grill,
    /// Oven baked
    Baked,
    /// Boiled
    Boiled,
    /// Steamed
    Steamed,
}
