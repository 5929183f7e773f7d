// ABOUTME: Lenient serde field deserializers for loosely-structured vision output
// ABOUTME: Malformed or missing values become neutral defaults instead of parse errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Lenient field parsing
//!
//! The vision collaborator returns JSON whose numeric fields are sometimes
//! strings, `null`, or plain garbage. Every helper here first buffers the field
//! as a [`serde_json::Value`] and then extracts what it can, so a bad field can
//! never fail the surrounding struct. Use them with
//! `#[serde(default, deserialize_with = "...")]`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Extract a finite number from a JSON number or numeric string
#[must_use]
pub fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Extract a non-negative piece count; fractional counts are truncated
#[must_use]
pub fn count_from_value(value: &Value) -> Option<u32> {
    number_from_value(value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.trunc().min(f64::from(u32::MAX)) as u32)
}

/// Free text; numbers are stringified, anything else becomes empty
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Optional free text; blank strings count as absent
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        _ => None,
    })
}

/// Tag list; a bare string is a single tag, non-string entries are dropped
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

/// Gram weight; absent or malformed is 0, negatives floor at 0
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn grams<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value).map_or(0.0, |g| g.max(0.0)))
}

/// Derived number; absent or malformed is 0
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value).unwrap_or(0.0))
}

/// Optional number
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

/// Optional strictly positive number (per-piece weights)
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn optional_positive<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value).filter(|n| *n > 0.0))
}

/// Optional fraction, clamped into [0, 1]
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn optional_fraction<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value).map(|n| n.clamp(0.0, 1.0)))
}

/// Optional piece count
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

/// Any deserializable value; falls back to `T::default()` when it does not fit
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Any deserializable value; `None` when null or when it does not fit
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a value at all.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => Ok(serde_json::from_value(value).ok()),
    }
}
