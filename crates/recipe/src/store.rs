use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, RecipeResult};
use crate::model::Recipe;

/// Ordered collection of recipes, the source of truth for all planning.
///
/// Insertion order is preserved; lookups are by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Replaces the record with the same id. Edits never mutate in place.
    pub fn replace(&mut self, recipe: Recipe) -> RecipeResult<()> {
        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(slot) => {
                *slot = recipe;
                Ok(())
            }
            None => Err(RecipeError::NotFound(recipe.id)),
        }
    }

    pub fn remove(&mut self, id: &str) -> RecipeResult<Recipe> {
        match self.recipes.iter().position(|r| r.id == id) {
            Some(index) => Ok(self.recipes.remove(index)),
            None => Err(RecipeError::NotFound(id.to_string())),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
