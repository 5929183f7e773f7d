// ABOUTME: Serving context enums describing the vessel a meal was photographed in
// ABOUTME: Vessel, SizeClass, and FillLevel with catch-all variants for unknown values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Vessel the food is served in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Vessel {
    /// Flat plate
    #[default]
    Plate,
    /// Bowl
    Bowl,
    /// Any other vessel; uses the default capacity
    #[serde(other)]
    Other,
}

/// Apparent size of the vessel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    /// Small vessel
    Small,
    /// Medium vessel
    #[default]
    Medium,
    /// Large vessel
    Large,
    /// Unrecognised size; uses the default capacity
    #[serde(other)]
    Other,
}

/// How full the vessel looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FillLevel {
    /// Sparsely filled
    Low,
    /// Normally filled
    #[default]
    Medium,
    /// Heaped
    High,
    /// Unrecognised fill level; multiplier 1.0
    #[serde(other)]
    Other,
}

/// Vessel, size and fill level taken together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ServingContext {
    /// Vessel type
    pub vessel: Vessel,
    /// Vessel size class
    pub size_class: SizeClass,
    /// Fill level
    pub fill_level: FillLevel,
}

impl ServingContext {
    /// Build a serving context
    #[must_use]
    pub const fn new(vessel: Vessel, size_class: SizeClass, fill_level: FillLevel) -> Self {
        Self {
            vessel,
            size_class,
            fill_level,
        }
    }
}
