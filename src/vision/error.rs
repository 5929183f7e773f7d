// ABOUTME: Error type for failures of the vision collaborator
// ABOUTME: Maps each failure onto the matching external-service AppError code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use foodlens_core::constants::service_names::VISION_SERVICE;
use foodlens_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Vision collaborator failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisionError {
    /// Service could not be reached or timed out
    #[error("vision service unavailable: {0}")]
    Unavailable(String),

    /// Request rejected for quota or billing reasons
    #[error("vision service quota exceeded")]
    QuotaExceeded,

    /// The photo shows more than one meal
    #[error("too many dishes: {0}")]
    TooManyDishes(String),

    /// Reply did not contain a JSON object
    #[error("unparseable vision reply: {0}")]
    UnparseableReply(String),
}

impl From<VisionError> for AppError {
    fn from(error: VisionError) -> Self {
        let code = match &error {
            VisionError::Unavailable(_) => ErrorCode::ExternalServiceUnavailable,
            VisionError::QuotaExceeded => ErrorCode::ExternalRateLimited,
            VisionError::TooManyDishes(_) => ErrorCode::InvalidInput,
            VisionError::UnparseableReply(_) => ErrorCode::ExternalServiceError,
        };
        Self::new(code, format!("{VISION_SERVICE}: {error}")).with_source(error)
    }
}
