// ABOUTME: Integration tests for the vision boundary and meal analysis service
// ABOUTME: Scripted analyzers cover replies, quota fallback, refusals, timeouts, and demo mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::{assert_close, component, pipeline};
use foodlens::vision::PLACEHOLDER_NOTES;
use foodlens::{
    parse_vision_reply, ComponentEdit, ErrorCode, MealAnalysisService, VisionAnalyzer,
    VisionBoundaryConfig, VisionError,
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time;

const PHOTO: &[u8] = b"\xff\xd8\xff\xe0 fake jpeg bytes";

/// Analyzer that replies with fixed model text
struct ScriptedAnalyzer {
    reply: &'static str,
    calls: AtomicUsize,
}

impl ScriptedAnalyzer {
    const fn new(reply: &'static str) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl VisionAnalyzer for ScriptedAnalyzer {
    async fn describe_meal(&self, _image: &[u8]) -> Result<Value, VisionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        parse_vision_reply(self.reply)
    }
}

/// Analyzer that always fails with the given error
struct FailingAnalyzer(VisionError);

#[async_trait]
impl VisionAnalyzer for FailingAnalyzer {
    async fn describe_meal(&self, _image: &[u8]) -> Result<Value, VisionError> {
        Err(self.0.clone())
    }
}

/// Analyzer that never answers in time
struct SlowAnalyzer;

#[async_trait]
impl VisionAnalyzer for SlowAnalyzer {
    async fn describe_meal(&self, _image: &[u8]) -> Result<Value, VisionError> {
        time::sleep(Duration::from_secs(30)).await;
        Ok(Value::Null)
    }
}

fn service<A: VisionAnalyzer>(analyzer: A, config: VisionBoundaryConfig) -> MealAnalysisService<A> {
    MealAnalysisService::new(analyzer, pipeline(), config)
}

const STEAK_REPLY: &str = r#"Sure! Here is the analysis:
```json
{"dish_name": "Steak and fries", "vessel": "plate", "size_class": "medium",
 "confidence": "0.9",
 "components": [
   {"name": "Beef steak", "est_grams": 400, "method": "grill"},
   {"name": "Картофель фри", "est_grams": 150, "method": "deep_fried"}
 ]}
```"#;

// ============================================================================
// Successful analysis
// ============================================================================

#[tokio::test]
async fn test_wrapped_reply_is_salvaged_and_calibrated() {
    let service = service(
        ScriptedAnalyzer::new(STEAK_REPLY),
        VisionBoundaryConfig::default(),
    );
    let meal = service.analyze(PHOTO).await.unwrap();

    assert_eq!(meal.dish_name, "Steak and fries");
    assert_close(meal.confidence, 0.9, 1e-9);
    assert_close(component(&meal, "Beef steak").est_grams, 300.0, 1e-9);
    assert_close(component(&meal, "Картофель фри").est_grams, 150.0, 1e-9);
    assert_close(meal.totals.portion_grams, 450.0, 1e-9);
}

#[tokio::test]
async fn test_edits_through_service_match_pipeline() {
    let service = service(
        ScriptedAnalyzer::new(STEAK_REPLY),
        VisionBoundaryConfig::default(),
    );
    let meal = service.analyze(PHOTO).await.unwrap();
    let edits = [ComponentEdit::grams(0, 200.0)];

    let via_service = service.apply_edits(meal.clone(), &edits);
    let via_pipeline = service.pipeline().rerun(meal, &edits);
    assert_eq!(via_service, via_pipeline);
    assert_close(via_service.components[0].est_grams, 200.0, 1e-9);
}

// ============================================================================
// Failures and fallbacks
// ============================================================================

#[tokio::test]
async fn test_quota_error_falls_back_to_placeholder() {
    let service = service(
        FailingAnalyzer(VisionError::QuotaExceeded),
        VisionBoundaryConfig::default(),
    );
    let meal = service.analyze(PHOTO).await.unwrap();

    assert_eq!(meal.notes, PLACEHOLDER_NOTES);
    assert_eq!(meal.components.len(), 4);
    assert!((0.65..=0.85).contains(&meal.confidence));
}

#[tokio::test]
async fn test_quota_error_without_fallback_is_rate_limited() {
    let config = VisionBoundaryConfig {
        fallback_on_quota: false,
        ..VisionBoundaryConfig::default()
    };
    let service = service(FailingAnalyzer(VisionError::QuotaExceeded), config);

    let err = service.analyze(PHOTO).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalRateLimited);
}

#[tokio::test]
async fn test_too_many_dishes_is_invalid_input() {
    let service = service(
        ScriptedAnalyzer::new(r#"{"error": "too_many_dishes"}"#),
        VisionBoundaryConfig::default(),
    );
    let err = service.analyze(PHOTO).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("single plate"));
}

#[tokio::test]
async fn test_unparseable_reply_is_external_error() {
    let service = service(
        ScriptedAnalyzer::new("I cannot see any food in this picture."),
        VisionBoundaryConfig::default(),
    );
    let err = service.analyze(PHOTO).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_outage_is_not_masked_by_fallback() {
    let service = service(
        FailingAnalyzer(VisionError::Unavailable("connection refused".into())),
        VisionBoundaryConfig::default(),
    );
    let err = service.analyze(PHOTO).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_slow_analyzer_times_out() {
    let config = VisionBoundaryConfig {
        request_timeout: Duration::from_millis(50),
        ..VisionBoundaryConfig::default()
    };
    let service = service(SlowAnalyzer, config);

    let err = service.analyze(PHOTO).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

// ============================================================================
// Demo mode
// ============================================================================

#[tokio::test]
async fn test_demo_mode_skips_analyzer() {
    let live = service(
        ScriptedAnalyzer::new(STEAK_REPLY),
        VisionBoundaryConfig::default(),
    );
    let demo = service(
        ScriptedAnalyzer::new(STEAK_REPLY),
        VisionBoundaryConfig {
            demo_mode: true,
            ..VisionBoundaryConfig::default()
        },
    );

    live.analyze(PHOTO).await.unwrap();
    let meal = demo.analyze(PHOTO).await.unwrap();

    assert_eq!(meal.notes, PLACEHOLDER_NOTES);
    assert_eq!(service_calls(&live), 1);
    assert_eq!(service_calls(&demo), 0);
}

#[tokio::test]
async fn test_demo_meal_is_calibrated_and_deterministic() {
    let config = VisionBoundaryConfig {
        demo_mode: true,
        ..VisionBoundaryConfig::default()
    };
    let service = service(ScriptedAnalyzer::new(STEAK_REPLY), config);

    let first = service.analyze(PHOTO).await.unwrap();
    let second = service.analyze(PHOTO).await.unwrap();
    assert_eq!(first, second);

    assert_close(component(&first, "Паста").calories_kcal, 252.0, 1e-9);
    assert_close(component(&first, "Куриная грудка").proteins_g, 34.1, 1e-9);
    assert_close(component(&first, "Куриная грудка").calories_kcal, 176.9, 1e-9);
    assert_close(first.totals.portion_grams, 410.0, 1e-9);
    assert_close(first.totals.proteins_g, 44.5, 1e-9);
    assert_close(first.totals.calories_kcal, 457.9, 1e-9);
}

fn service_calls(service: &MealAnalysisService<ScriptedAnalyzer>) -> usize {
    service.analyzer().calls.load(Ordering::SeqCst)
}
