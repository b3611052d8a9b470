use serde::{Deserialize, Serialize};

use mealweek_mealplan::WeekPlan;
use mealweek_recipe::{BuiltinCatalog, RecipeStore};
use mealweek_shared::Weekday;

/// The whole persisted state, one JSON document on disk. The derivation
/// crates never see this type; they get snapshots of the store and plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppDocument {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub recipes: RecipeStore,
    #[serde(default)]
    pub plans: WeekPlan,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

impl AppDocument {
    /// Fresh document for a first run, seeded with the built-in recipes.
    pub fn seeded() -> Self {
        let mut document = Self::default();
        for recipe in BuiltinCatalog::default_recipes() {
            document.recipes.insert(recipe);
        }
        document
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub family_name: String,
    pub family_size: u32,
    #[serde(default)]
    pub preferred_store: Option<String>,
    #[serde(default)]
    pub dietary: Option<String>,
    pub created_at: String,
}

/// A meal reminder entry: "defrost the chicken on wednesday evening".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub day: Weekday,
    pub time: String,
    pub message: String,
}
