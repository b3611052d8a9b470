use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Shopping-list grouping tag, a closed set so match arms stay exhaustive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Meat,
    Dairy,
    Produce,
    Frozen,
    Pantry,
}

const MEAT_KEYWORDS: &[&str] = &["steak", "chicken", "beef", "pork", "fish", "meat"];
const DAIRY_KEYWORDS: &[&str] = &["milk", "cheese", "egg", "yogurt", "butter"];
const PRODUCE_KEYWORDS: &[&str] = &["parsley", "garlic", "lemon", "onion", "vegetables", "basil"];
const FROZEN_KEYWORDS: &[&str] = &["frozen"];

/// Maps free-text ingredient lines to a category.
///
/// Case-insensitive substring matching, first category to match wins.
/// Meat is checked first, so an ingredient touching several keyword sets
/// ("butter chicken sauce") lands in meat. This is a coarse heuristic,
/// not an ingredient ontology; anything unmatched is pantry.
pub fn classify(ingredient: &str) -> Category {
    let normalized = ingredient.trim().to_lowercase();

    if contains_any(&normalized, MEAT_KEYWORDS) {
        return Category::Meat;
    }
    if contains_any(&normalized, DAIRY_KEYWORDS) {
        return Category::Dairy;
    }
    if contains_any(&normalized, PRODUCE_KEYWORDS) {
        return Category::Produce;
    }
    if contains_any(&normalized, FROZEN_KEYWORDS) {
        return Category::Frozen;
    }

    Category::Pantry
}

fn contains_any(ingredient: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| ingredient.contains(keyword))
}
