// ABOUTME: Parsing of free-text vision model replies into JSON observations
// ABOUTME: Salvages an embedded object and recognises the too-many-dishes refusal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::VisionError;
use serde_json::Value;
use tracing::debug;

const TOO_MANY_DISHES: &str = "too_many_dishes";
const DEFAULT_TOO_MANY_DISHES_MESSAGE: &str =
    "Too many different dishes in the photo. Upload a photo of a single plate.";
const PREVIEW_CHARS: usize = 80;

/// Parse a model reply into a JSON object
///
/// Models sometimes wrap the object in prose or code fences; when the whole
/// text is not an object, the span from the first `{` to the last `}` is tried.
///
/// # Errors
///
/// - [`VisionError::TooManyDishes`] when the reply is the model's refusal for
///   photos of a shared table
/// - [`VisionError::UnparseableReply`] when no object can be recovered, or the
///   reply carries any other `error` value
pub fn parse_vision_reply(text: &str) -> Result<Value, VisionError> {
    let value = parse_object(text.trim())
        .or_else(|| salvage_object(text))
        .ok_or_else(|| VisionError::UnparseableReply(preview(text)))?;

    match value.get("error") {
        None | Some(Value::Null) => Ok(value),
        Some(Value::String(kind)) if kind == TOO_MANY_DISHES => {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(DEFAULT_TOO_MANY_DISHES_MESSAGE);
            Err(VisionError::TooManyDishes(message.to_owned()))
        }
        Some(other) => Err(VisionError::UnparseableReply(format!(
            "model reported error {other}"
        ))),
    }
}

fn parse_object(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(Value::is_object)
}

fn salvage_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    let salvaged = parse_object(&text[start..=end]);
    if salvaged.is_some() {
        debug!(start, end, "Salvaged JSON object from vision reply");
    }
    salvaged
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
