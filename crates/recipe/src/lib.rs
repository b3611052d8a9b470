mod catalog;
mod command;
mod error;
mod model;
mod search;
mod source;
mod store;

pub use catalog::{BuiltinCatalog, CommunityCatalog, PremiumCatalog};
pub use command::CreateRecipe;
pub use error::{RecipeError, RecipeResult};
pub use model::Recipe;
pub use search::{SearchService, MAX_SEARCH_RESULTS, MIN_QUERY_LEN};
pub use source::RecipeSource;
pub use store::RecipeStore;
