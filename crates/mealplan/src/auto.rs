use rand::Rng;
use strum::VariantArray;

use mealweek_recipe::RecipeStore;
use mealweek_shared::Weekday;

use crate::plan::{Assignment, WeekAssignments};

/// Fills all seven days with randomly picked recipes from the store.
///
/// The candidate pool shrinks with each pick only while more than two
/// candidates remain, so small stores still fill a full week through
/// repetition while larger stores get variety. An empty store yields an
/// empty week.
pub fn auto_assign_week(store: &RecipeStore) -> WeekAssignments {
    let mut assignments = WeekAssignments::new();
    if store.is_empty() {
        tracing::debug!("auto-assign skipped, recipe store is empty");
        return assignments;
    }

    let mut pool: Vec<&str> = store.iter().map(|r| r.id.as_str()).collect();
    let mut rng = rand::rng();

    for day in Weekday::VARIANTS {
        let index = rng.random_range(0..pool.len());
        let recipe_id = pool[index];
        assignments.insert(*day, Assignment::new(recipe_id));

        if pool.len() > 2 {
            pool.swap_remove(index);
        }
    }

    assignments
}
