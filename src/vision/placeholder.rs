// ABOUTME: Deterministic demo observation used when the vision collaborator is bypassed
// ABOUTME: Confidence is drawn from a ChaCha stream seeded by the SHA-256 of the image bytes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use foodlens_core::models::{
    CookedState, CookingMethod, FillLevel, MealComponent, RawObservation, SizeClass, Vessel,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Notes attached to every placeholder observation
pub const PLACEHOLDER_NOTES: &str = "DEMO: estimate without the vision service.";

const PLACEHOLDER_DISH: &str = "Паста с курицей и овощами";
const MIN_CONFIDENCE: f64 = 0.65;
const MAX_CONFIDENCE: f64 = 0.85;

/// Fixed demo meal: pasta, chicken breast, cucumber, cherry tomatoes in a medium bowl
///
/// The same seed bytes always yield the same observation.
#[must_use]
pub fn placeholder_observation(seed_bytes: &[u8]) -> RawObservation {
    RawObservation {
        dish_name: Some(PLACEHOLDER_DISH.to_owned()),
        vessel: Some(Vessel::Bowl),
        size_class: Some(SizeClass::Medium),
        fill_level: Some(FillLevel::Medium),
        confidence: Some(seeded_confidence(seed_bytes)),
        notes: Some(PLACEHOLDER_NOTES.to_owned()),
        components: vec![
            MealComponent::new("Паста", 180.0)
                .with_tags(["pasta"])
                .with_method(CookingMethod::Boiled)
                .with_area_fraction(0.42),
            MealComponent::new("Куриная грудка", 110.0)
                .with_tags(["chicken", "breast"])
                .with_method(CookingMethod::Baked)
                .with_area_fraction(0.18),
            MealComponent::new("Огурец", 60.0)
                .with_tags(["vegetable"])
                .with_cooked_state(CookedState::Raw)
                .with_area_fraction(0.2),
            MealComponent {
                unit_weight_g: Some(15.0),
                ..MealComponent::new("Помидоры черри", 60.0)
                    .with_tags(["vegetable", "tomato"])
                    .with_cooked_state(CookedState::Raw)
                    .with_count(4)
                    .with_area_fraction(0.12)
            },
        ],
    }
}

fn seeded_confidence(seed_bytes: &[u8]) -> f64 {
    let digest = Sha256::digest(seed_bytes);
    let seed = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));
    let confidence: f64 = rng.gen_range(MIN_CONFIDENCE..=MAX_CONFIDENCE);
    (confidence * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_observation() {
        assert_eq!(
            placeholder_observation(b"photo-1"),
            placeholder_observation(b"photo-1")
        );
    }

    #[test]
    fn test_confidence_stays_in_band() {
        for seed in 0u32..200 {
            let confidence = seeded_confidence(&seed.to_le_bytes());
            assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&confidence));
            assert!(((confidence * 100.0).round() - confidence * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fixed_components() {
        let observation = placeholder_observation(&[]);
        let names: Vec<&str> = observation
            .components
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Паста", "Куриная грудка", "Огурец", "Помидоры черри"]);
        assert_eq!(observation.components[3].count, Some(4));
        assert_eq!(observation.vessel, Some(Vessel::Bowl));
    }
}
