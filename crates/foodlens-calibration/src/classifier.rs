// ABOUTME: Keyword classifier mapping component names and tags to food categories
// ABOUTME: Ordered rule list, first match wins, Unknown when nothing matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Category classifier
//!
//! Matching is a case-insensitive substring search over the component name
//! joined with its tags. Keywords are stems, so Russian inflections
//! ("грудка", "грудки", "грудкой") all hit the same rule.
//!
//! Rule order is significant: starches precede meats so that
//! "rice with chicken breast" is scored as rice, and sausages precede the
//! chicken rules so that "chicken sausage" is not scored as a breast.

use foodlens_core::models::FoodCategory;

struct KeywordRule {
    category: FoodCategory,
    keywords: &'static [&'static str],
}

impl KeywordRule {
    fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|keyword| haystack.contains(keyword))
    }
}

const RULES: &[KeywordRule] = &[
    KeywordRule {
        category: FoodCategory::Pasta,
        keywords: &["penne", "pasta", "spaghetti", "fusilli", "макарон", "паста", "спагетти"],
    },
    KeywordRule {
        category: FoodCategory::Rice,
        keywords: &["rice", "рис"],
    },
    KeywordRule {
        category: FoodCategory::Buckwheat,
        keywords: &["buckwheat", "греч"],
    },
    KeywordRule {
        category: FoodCategory::Potato,
        keywords: &["potato", "картоф", "картошк"],
    },
    KeywordRule {
        category: FoodCategory::Bread,
        keywords: &["bread", "bun", "baguette", "хлеб", "батон", "булк"],
    },
    KeywordRule {
        category: FoodCategory::Sausages,
        keywords: &[
            "sausage",
            "wurst",
            "hot dog",
            "frankfurter",
            "сосиск",
            "колбас",
            "сардель",
        ],
    },
    KeywordRule {
        category: FoodCategory::ChickenBreast,
        keywords: &["breast", "грудк"],
    },
    KeywordRule {
        category: FoodCategory::ChickenDrumstick,
        keywords: &["drumstick", "голен", "ножк"],
    },
    KeywordRule {
        category: FoodCategory::ChickenThigh,
        keywords: &["thigh", "бедро", "бедрыш"],
    },
    KeywordRule {
        category: FoodCategory::Salmon,
        keywords: &["salmon", "лосос", "семг"],
    },
    KeywordRule {
        category: FoodCategory::FishLean,
        keywords: &["fish", "рыб"],
    },
    KeywordRule {
        category: FoodCategory::BeefSteak,
        keywords: &["steak", "beef", "стейк", "бифштекс", "говядин"],
    },
    KeywordRule {
        category: FoodCategory::Pork,
        keywords: &["pork", "свини"],
    },
    KeywordRule {
        category: FoodCategory::Sushi,
        keywords: &["sushi", "суши", "ролл"],
    },
    KeywordRule {
        category: FoodCategory::Cheese,
        keywords: &["cheese", "сыр"],
    },
    KeywordRule {
        category: FoodCategory::Dumplings,
        keywords: &["dumpling", "пельм", "вареник", "манты"],
    },
    KeywordRule {
        category: FoodCategory::Vegetables,
        keywords: &[
            "vegetable",
            "cucumber",
            "tomato",
            "salad",
            "carrot",
            "broccoli",
            "огур",
            "помид",
            "томат",
            "овощ",
            "салат",
            "морков",
            "брокколи",
        ],
    },
    KeywordRule {
        category: FoodCategory::Fruits,
        keywords: &["fruit", "apple", "banana", "berr", "фрукт", "яблок", "банан", "ягод"],
    },
];

/// Assign a category from a component name and its tags
#[must_use]
pub fn classify(name: &str, tags: &[String]) -> FoodCategory {
    let haystack = search_text(name, tags);
    RULES
        .iter()
        .find(|rule| rule.matches(&haystack))
        .map_or(FoodCategory::Unknown, |rule| rule.category)
}

fn search_text(name: &str, tags: &[String]) -> String {
    let mut text = name.to_lowercase();
    for tag in tags {
        text.push(' ');
        text.push_str(&tag.to_lowercase());
    }
    text
}
