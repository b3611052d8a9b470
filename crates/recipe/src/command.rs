use std::collections::BTreeSet;

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::RecipeResult;
use crate::model::Recipe;

pub const MANUAL_SOURCE: &str = "Family Recipe";
const DEFAULT_ICON: &str = "🍽️";

/// Manual recipe entry, validated before it becomes a [`Recipe`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecipe {
    #[validate(length(min = 1, message = "recipe name is required"))]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[validate(range(min = 1, message = "prep time must be positive"))]
    pub prep_time_min: u32,
    #[validate(range(min = 1, message = "servings must be positive"))]
    pub servings: u32,
    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateRecipe {
    /// Validates the command and materializes a record with a fresh id.
    ///
    /// Ingredient, instruction and tag lines are trimmed and blank lines
    /// dropped before validation, so a form full of empty lines still
    /// fails the non-empty check.
    pub fn into_recipe(mut self) -> RecipeResult<Recipe> {
        self.name = self.name.trim().to_string();
        self.ingredients = normalize_lines(self.ingredients);
        self.instructions = normalize_lines(self.instructions);
        self.tags = normalize_lines(self.tags);
        self.validate()?;

        Ok(Recipe {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            icon: self
                .icon
                .filter(|i| !i.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ICON.to_string()),
            prep_time_min: self.prep_time_min,
            servings: self.servings,
            ingredients: self.ingredients,
            instructions: self.instructions,
            tags: self.tags.into_iter().collect::<BTreeSet<_>>(),
            source: MANUAL_SOURCE.to_string(),
            rating: None,
            created_at: mealweek_shared::now_rfc3339(),
        })
    }
}

fn normalize_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> CreateRecipe {
        CreateRecipe {
            name: "Quick Chicken Stir Fry".into(),
            icon: None,
            prep_time_min: 20,
            servings: 4,
            ingredients: vec!["1 lb chicken breast".into(), "  ".into()],
            instructions: vec!["Heat oil".into(), "Add chicken".into()],
            tags: vec!["dinner".into(), "quick".into(), "dinner".into()],
        }
    }

    #[test]
    fn into_recipe_assigns_id_and_defaults() {
        let recipe = command().into_recipe().unwrap();
        assert!(!recipe.id.is_empty());
        assert_eq!(recipe.icon, "🍽️");
        assert_eq!(recipe.source, MANUAL_SOURCE);
        assert_eq!(recipe.ingredients, vec!["1 lb chicken breast"]);
        // duplicate tags collapse
        assert_eq!(recipe.tags.len(), 2);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut cmd = command();
        cmd.name = "   ".into();
        assert!(cmd.into_recipe().is_err());
    }

    #[test]
    fn blank_ingredients_are_rejected() {
        let mut cmd = command();
        cmd.ingredients = vec!["".into(), "  ".into()];
        assert!(cmd.into_recipe().is_err());
    }

    #[test]
    fn zero_servings_is_rejected() {
        let mut cmd = command();
        cmd.servings = 0;
        assert!(cmd.into_recipe().is_err());
    }
}
