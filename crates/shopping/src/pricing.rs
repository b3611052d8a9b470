use rand::Rng;

/// Keyword to unit-price table, checked in order with first match winning.
/// "sauce" sits before "pasta" so a jarred pasta sauce prices as a sauce.
const PRICE_TABLE: &[(&str, f64)] = &[
    ("steak", 15.99),
    ("chicken", 8.99),
    ("cheese", 4.99),
    ("rice", 3.49),
    ("sauce", 2.49),
    ("pasta", 1.99),
    ("oil", 3.99),
];

/// Bounds for the random fallback when nothing in the table matches.
const FALLBACK_MIN: f64 = 1.0;
const FALLBACK_MAX: f64 = 6.0;

/// Estimates a unit price for an ingredient line.
///
/// Case-insensitive substring match against the fixed table; unmatched
/// ingredients get a uniformly random price in [1.0, 6.0), so callers
/// must not expect reproducible values for those.
pub fn estimate_price(ingredient: &str) -> f64 {
    let normalized = ingredient.trim().to_lowercase();

    for (keyword, price) in PRICE_TABLE {
        if normalized.contains(keyword) {
            return *price;
        }
    }

    rand::rng().random_range(FALLBACK_MIN..FALLBACK_MAX)
}
