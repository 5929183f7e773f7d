// ABOUTME: Calibration tunables with defaults, environment overrides, and validation
// ABOUTME: Exposes a lazily loaded global so callers share one validated configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calibration configuration
//!
//! The reference tables are compiled in. Only the scalar tunables that shape
//! how the tables are applied live here, each overridable through a
//! `FOODLENS_*` environment variable.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static CALIBRATION_CONFIG: OnceLock<CalibrationConfig> = OnceLock::new();

/// Environment variable names for each tunable
pub mod env_vars {
    /// Overrides [`super::CalibrationConfig::piece_count_trigger_ratio`]
    pub const PIECE_COUNT_TRIGGER_RATIO: &str = "FOODLENS_PIECE_COUNT_TRIGGER_RATIO";
    /// Overrides [`super::CalibrationConfig::counted_min_factor`]
    pub const COUNTED_MIN_FACTOR: &str = "FOODLENS_COUNTED_MIN_FACTOR";
    /// Overrides [`super::CalibrationConfig::meal_kcal_ceiling`]
    pub const MEAL_KCAL_CEILING: &str = "FOODLENS_MEAL_KCAL_CEILING";
    /// Overrides [`super::CalibrationConfig::capacity_tolerance_g`]
    pub const CAPACITY_TOLERANCE_G: &str = "FOODLENS_CAPACITY_TOLERANCE_G";
}

/// Scalar tunables for the calibration pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// A counted component is raised to `count × piece` only when its estimate
    /// is below this share of that product
    pub piece_count_trigger_ratio: f64,
    /// Scales the lower gram bound when a piece count is present
    pub counted_min_factor: f64,
    /// Upper bound for meal energy in kcal
    pub meal_kcal_ceiling: f64,
    /// Grams a meal may exceed vessel capacity before it is scaled down
    pub capacity_tolerance_g: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            piece_count_trigger_ratio: 0.6,
            counted_min_factor: 0.5,
            meal_kcal_ceiling: 1200.0,
            capacity_tolerance_g: 0.5,
        }
    }
}

impl CalibrationConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to defaults (with a warning) when the environment holds
    /// invalid overrides.
    pub fn global() -> &'static Self {
        CALIBRATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load calibration config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tunable against its allowed range
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.piece_count_trigger_ratio > 0.0 && self.piece_count_trigger_ratio <= 1.0) {
            return Err(ConfigError::InvalidRange(
                "piece_count_trigger_ratio must be in (0, 1]",
            ));
        }
        if !(self.counted_min_factor > 0.0 && self.counted_min_factor <= 1.0) {
            return Err(ConfigError::InvalidRange(
                "counted_min_factor must be in (0, 1]",
            ));
        }
        if !(self.meal_kcal_ceiling.is_finite() && self.meal_kcal_ceiling > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "meal_kcal_ceiling must be positive",
            ));
        }
        if !(self.capacity_tolerance_g.is_finite() && self.capacity_tolerance_g >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "capacity_tolerance_g must be non-negative",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_vars::PIECE_COUNT_TRIGGER_RATIO,
            &mut self.piece_count_trigger_ratio,
        )?;
        Self::apply_env_var(env_vars::COUNTED_MIN_FACTOR, &mut self.counted_min_factor)?;
        Self::apply_env_var(env_vars::MEAL_KCAL_CEILING, &mut self.meal_kcal_ceiling)?;
        Self::apply_env_var(
            env_vars::CAPACITY_TOLERANCE_G,
            &mut self.capacity_tolerance_g,
        )?;
        Ok(self)
    }
}
