use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use mealweek_mealplan::WeekAssignments;
use mealweek_recipe::RecipeStore;

use crate::categorization::{classify, Category};
use crate::pricing::estimate_price;

/// One shopping-list line: an ingredient string and its estimated price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
}

/// Categorized, priced list derived from one week of assignments.
///
/// Derived data only; the surrounding app may cache it but nothing here
/// is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    by_category: BTreeMap<Category, Vec<LineItem>>,
}

impl ShoppingList {
    /// Items in one category, in first-seen order.
    pub fn items(&self, category: Category) -> &[LineItem] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, &[LineItem])> {
        self.by_category
            .iter()
            .map(|(category, items)| (*category, items.as_slice()))
    }

    pub fn total_items(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.by_category
            .values()
            .flatten()
            .map(|item| item.price)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.values().all(Vec::is_empty)
    }

    fn push(&mut self, category: Category, item: LineItem) {
        self.by_category.entry(category).or_default().push(item);
    }
}

/// Derives the week's shopping list from its assignments and the recipe
/// store.
///
/// Days are visited monday..sunday; an assignment whose recipe is missing
/// from the store is skipped silently, since deleting a planned recipe is
/// an expected lifecycle event. Each distinct ingredient string (exact
/// match across the whole derivation) contributes exactly one line item,
/// so two assignments of the same recipe never double-count.
pub fn derive_shopping_list(assignments: &WeekAssignments, store: &RecipeStore) -> ShoppingList {
    let mut list = ShoppingList::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for (day, assignment) in assignments {
        let Some(recipe) = store.get(&assignment.recipe_id) else {
            tracing::debug!(
                day = %day,
                recipe_id = %assignment.recipe_id,
                "skipping dangling recipe reference"
            );
            continue;
        };

        for ingredient in &recipe.ingredients {
            if !seen.insert(ingredient.as_str()) {
                continue;
            }
            list.push(
                classify(ingredient),
                LineItem {
                    name: ingredient.clone(),
                    price: estimate_price(ingredient),
                },
            );
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealweek_mealplan::Assignment;
    use mealweek_recipe::Recipe;
    use mealweek_shared::Weekday;

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.into(),
            name: format!("Recipe {id}"),
            icon: "🍽️".into(),
            prep_time_min: 30,
            servings: 4,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: vec!["Cook".into()],
            tags: Default::default(),
            source: "Family Recipe".into(),
            rating: None,
            created_at: mealweek_shared::now_rfc3339(),
        }
    }

    #[test]
    fn worked_example_beef_and_pasta_sauce() {
        let mut store = RecipeStore::new();
        store.insert(recipe("1", &["1 lb ground beef", "1 jar pasta sauce"]));

        let mut assignments = WeekAssignments::new();
        assignments.insert(Weekday::Monday, Assignment::new("1"));

        let list = derive_shopping_list(&assignments, &store);

        let meat = list.items(Category::Meat);
        assert_eq!(meat.len(), 1);
        assert_eq!(meat[0].name, "1 lb ground beef");
        assert!(meat[0].price >= 0.0);

        let pantry = list.items(Category::Pantry);
        assert_eq!(pantry.len(), 1);
        assert_eq!(pantry[0].name, "1 jar pasta sauce");
        assert_eq!(pantry[0].price, 2.49);

        assert_eq!(list.total_items(), 2);
    }

    #[test]
    fn identical_ingredient_strings_count_once() {
        let mut store = RecipeStore::new();
        store.insert(recipe("1", &["2 cloves garlic, minced"]));
        store.insert(recipe("2", &["2 cloves garlic, minced"]));

        let mut assignments = WeekAssignments::new();
        assignments.insert(Weekday::Monday, Assignment::new("1"));
        assignments.insert(Weekday::Tuesday, Assignment::new("2"));

        let list = derive_shopping_list(&assignments, &store);
        let produce = list.items(Category::Produce);
        assert_eq!(produce.len(), 1);
        assert_eq!(produce[0].name, "2 cloves garlic, minced");
        assert_eq!(list.total_items(), 1);
    }

    #[test]
    fn same_recipe_twice_counts_once() {
        let mut store = RecipeStore::new();
        store.insert(recipe("1", &["1 lb chicken breast", "jasmine rice"]));

        let mut assignments = WeekAssignments::new();
        assignments.insert(Weekday::Monday, Assignment::new("1"));
        assignments.insert(Weekday::Thursday, Assignment::new("1"));

        let list = derive_shopping_list(&assignments, &store);
        assert_eq!(list.total_items(), 2);
    }

    #[test]
    fn dangling_references_contribute_nothing() {
        let mut store = RecipeStore::new();
        store.insert(recipe("kept", &["2 tbsp olive oil"]));

        let mut assignments = WeekAssignments::new();
        assignments.insert(Weekday::Monday, Assignment::new("kept"));
        assignments.insert(Weekday::Tuesday, Assignment::new("deleted"));

        let list = derive_shopping_list(&assignments, &store);
        assert_eq!(list.total_items(), 1);
        assert_eq!(list.items(Category::Pantry)[0].name, "2 tbsp olive oil");
    }

    #[test]
    fn items_keep_first_seen_order() {
        let mut store = RecipeStore::new();
        store.insert(recipe("1", &["2 tbsp soy sauce", "kosher salt"]));
        store.insert(recipe("2", &["1 cup flour", "kosher salt"]));

        let mut assignments = WeekAssignments::new();
        assignments.insert(Weekday::Monday, Assignment::new("1"));
        assignments.insert(Weekday::Friday, Assignment::new("2"));

        let list = derive_shopping_list(&assignments, &store);
        let names: Vec<&str> = list
            .items(Category::Pantry)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["2 tbsp soy sauce", "kosher salt", "1 cup flour"]);
    }

    #[test]
    fn derivation_is_idempotent_on_contents() {
        let mut store = RecipeStore::new();
        store.insert(recipe("1", &["1 lb chicken breast", "1 ripe mango, diced"]));

        let mut assignments = WeekAssignments::new();
        assignments.insert(Weekday::Wednesday, Assignment::new("1"));

        let first = derive_shopping_list(&assignments, &store);
        let second = derive_shopping_list(&assignments, &store);

        assert_eq!(first.total_items(), second.total_items());
        for category in <Category as strum::VariantArray>::VARIANTS {
            let names = |list: &ShoppingList| {
                list.items(*category)
                    .iter()
                    .map(|i| i.name.clone())
                    .collect::<Vec<_>>()
            };
            // contents match; prices of unmatched ingredients may not
            assert_eq!(names(&first), names(&second));
        }
    }

    #[test]
    fn total_cost_sums_each_distinct_item_once() {
        let mut store = RecipeStore::new();
        store.insert(recipe("1", &["1 lb chicken breast", "jasmine rice"]));

        let mut assignments = WeekAssignments::new();
        assignments.insert(Weekday::Monday, Assignment::new("1"));
        assignments.insert(Weekday::Sunday, Assignment::new("1"));

        let list = derive_shopping_list(&assignments, &store);
        assert!((list.total_cost() - (8.99 + 3.49)).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_assignments_derive_an_empty_list() {
        let list = derive_shopping_list(&WeekAssignments::new(), &RecipeStore::new());
        assert!(list.is_empty());
        assert_eq!(list.total_items(), 0);
    }
}
