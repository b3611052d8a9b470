use async_trait::async_trait;

use crate::error::RecipeResult;
use crate::model::Recipe;

/// A recipe lookup capability.
///
/// Implementations are in-memory catalogs standing in for external recipe
/// APIs; the search layer only sees this trait, so a real remote source
/// could be swapped in without touching callers.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Human-readable provenance label, stamped on returned records.
    fn name(&self) -> &'static str;

    async fn search(&self, query: &str) -> RecipeResult<Vec<Recipe>>;
}
