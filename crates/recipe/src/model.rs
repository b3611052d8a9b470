use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A finalized recipe record.
///
/// Records are immutable once stored; an edit replaces the whole record
/// under the same id, and only explicit deletion removes one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Short glyph shown next to the name, e.g. "🍝".
    pub icon: String,
    pub prep_time_min: u32,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Where the record came from: a catalog name or "Family Recipe"
    /// for manual entries.
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub rating: Option<f32>,
    pub created_at: String,
}

impl Recipe {
    /// Case-insensitive match against name, tags and ingredients, used by
    /// the built-in search tier.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
            || self
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spaghetti() -> Recipe {
        Recipe {
            id: "r-1".into(),
            name: "Simple Spaghetti Bolognese".into(),
            icon: "🍝".into(),
            prep_time_min: 45,
            servings: 4,
            ingredients: vec!["1 lb ground beef".into(), "1 lb spaghetti".into()],
            instructions: vec!["Brown beef".into(), "Simmer sauce".into()],
            tags: ["dinner", "italian"].iter().map(|s| s.to_string()).collect(),
            source: "AllRecipes".into(),
            rating: Some(4.5),
            created_at: mealweek_shared::now_rfc3339(),
        }
    }

    #[test]
    fn matches_query_on_name_tag_and_ingredient() {
        let recipe = spaghetti();
        assert!(recipe.matches_query("bolognese"));
        assert!(recipe.matches_query("ITALIAN"));
        assert!(recipe.matches_query("ground beef"));
        assert!(!recipe.matches_query("tofu"));
    }

    #[test]
    fn recipe_round_trips_through_json() {
        let recipe = spaghetti();
        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, recipe.id);
        assert_eq!(back.ingredients, recipe.ingredients);
        assert_eq!(back.tags, recipe.tags);
    }
}
