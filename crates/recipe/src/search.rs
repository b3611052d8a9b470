use std::time::Duration;

use crate::catalog::{BuiltinCatalog, CommunityCatalog, PremiumCatalog};
use crate::model::Recipe;
use crate::source::RecipeSource;

/// Queries shorter than this return nothing.
pub const MIN_QUERY_LEN: usize = 2;
/// Result sets are capped at the top handful of hits.
pub const MAX_SEARCH_RESULTS: usize = 6;

/// Artificial pacing delay before results come back, mirroring the feel of
/// a remote lookup.
const SEARCH_DELAY: Duration = Duration::from_millis(250);

/// Tries recipe sources in order of preference and returns the first
/// non-empty result set. A failing source is logged and skipped.
pub struct SearchService {
    sources: Vec<Box<dyn RecipeSource>>,
}

impl Default for SearchService {
    fn default() -> Self {
        Self {
            sources: vec![
                Box::new(PremiumCatalog),
                Box::new(CommunityCatalog),
                Box::new(BuiltinCatalog),
            ],
        }
    }
}

impl SearchService {
    pub fn new(sources: Vec<Box<dyn RecipeSource>>) -> Self {
        Self { sources }
    }

    pub async fn search(&self, query: &str) -> Vec<Recipe> {
        let query = query.trim();
        if query.len() < MIN_QUERY_LEN {
            return Vec::new();
        }

        tokio::time::sleep(SEARCH_DELAY).await;

        for source in &self.sources {
            match source.search(query).await {
                Ok(results) if !results.is_empty() => {
                    tracing::debug!(
                        source = source.name(),
                        count = results.len(),
                        "search hit"
                    );
                    return results.into_iter().take(MAX_SEARCH_RESULTS).collect();
                }
                Ok(_) => continue,
                Err(err) => {
                    tracing::warn!(source = source.name(), err = %err, "search source failed, trying next");
                    continue;
                }
            }
        }

        Vec::new()
    }
}
