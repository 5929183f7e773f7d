// ABOUTME: Meal analysis service wiring a vision analyzer to the calibration pipeline
// ABOUTME: Handles demo mode, quota fallback, request timeouts, and manual edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{placeholder_observation, VisionAnalyzer, VisionError};
use foodlens_calibration::{CalibrationPipeline, ConfigError};
use foodlens_core::errors::AppResult;
use foodlens_core::models::{ComponentEdit, MealEstimate};
use serde_json::Value;
use std::env;
use std::time::Duration;
use tokio::time;
use tracing::{info, warn};

/// Environment variable names for the vision boundary
pub mod env_vars {
    /// Skip the collaborator and always use the placeholder
    pub const DEMO_MODE: &str = "FOODLENS_DEMO_MODE";
    /// Use the placeholder when the collaborator reports quota exhaustion
    pub const FALLBACK_ON_QUOTA: &str = "FOODLENS_FALLBACK_ON_QUOTA";
    /// Seconds to wait for the collaborator
    pub const VISION_TIMEOUT_SECS: &str = "FOODLENS_VISION_TIMEOUT_SECS";
}

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Behaviour of the vision boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisionBoundaryConfig {
    /// Never call the collaborator
    pub demo_mode: bool,
    /// Substitute the placeholder on quota errors
    pub fallback_on_quota: bool,
    /// Upper bound on one collaborator call
    pub request_timeout: Duration,
}

impl Default for VisionBoundaryConfig {
    fn default() -> Self {
        Self {
            demo_mode: false,
            fallback_on_quota: true,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl VisionBoundaryConfig {
    /// Load from environment variables, defaulting any that are unset
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unrecognised value
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let timeout_secs = match env::var(env_vars::VISION_TIMEOUT_SECS) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Parse(format!("Invalid {}", env_vars::VISION_TIMEOUT_SECS))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "vision timeout must be at least one second",
            ));
        }

        Ok(Self {
            demo_mode: env_flag(env_vars::DEMO_MODE, defaults.demo_mode)?,
            fallback_on_quota: env_flag(env_vars::FALLBACK_ON_QUOTA, defaults.fallback_on_quota)?,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn env_flag(name: &str, default: bool) -> Result<bool, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Parse(format!("Invalid {name}"))),
    }
}

/// Photo-to-estimate service
pub struct MealAnalysisService<A> {
    analyzer: A,
    pipeline: CalibrationPipeline,
    config: VisionBoundaryConfig,
}

impl<A: VisionAnalyzer> MealAnalysisService<A> {
    /// Create a service
    pub const fn new(
        analyzer: A,
        pipeline: CalibrationPipeline,
        config: VisionBoundaryConfig,
    ) -> Self {
        Self {
            analyzer,
            pipeline,
            config,
        }
    }

    /// Vision analyzer used by this service
    pub const fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Calibration pipeline used by this service
    pub const fn pipeline(&self) -> &CalibrationPipeline {
        &self.pipeline
    }

    /// Analyze a meal photo
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the collaborator fails and no
    /// fallback applies, or an invalid-input error when the photo shows too
    /// many dishes.
    pub async fn analyze(&self, image: &[u8]) -> AppResult<MealEstimate> {
        if self.config.demo_mode {
            info!(image_bytes = image.len(), "Demo mode, using placeholder observation");
            return Ok(self.pipeline.run(placeholder_observation(image)));
        }

        match self.describe_with_timeout(image).await {
            Ok(value) => Ok(self.pipeline.run_value(value)),
            Err(VisionError::QuotaExceeded) if self.config.fallback_on_quota => {
                warn!("Vision quota exceeded, falling back to placeholder observation");
                Ok(self.pipeline.run(placeholder_observation(image)))
            }
            Err(e) => {
                warn!(error = %e, "Vision analysis failed");
                Err(e.into())
            }
        }
    }

    /// Apply manual edits to a stored estimate
    #[must_use]
    pub fn apply_edits(&self, meal: MealEstimate, edits: &[ComponentEdit]) -> MealEstimate {
        self.pipeline.rerun(meal, edits)
    }

    async fn describe_with_timeout(&self, image: &[u8]) -> Result<Value, VisionError> {
        time::timeout(self.config.request_timeout, self.analyzer.describe_meal(image))
            .await
            .map_err(|_| {
                VisionError::Unavailable(format!(
                    "no reply within {}s",
                    self.config.request_timeout.as_secs_f64()
                ))
            })?
    }
}
