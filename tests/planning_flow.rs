//! End-to-end flow: seed a document, plan a week, derive the shopping list.

use temp_dir::TempDir;

use mealweek::document::AppDocument;
use mealweek::store::DocumentStore;
use mealweek_mealplan::{auto_assign_week, parse_date, week_key, Assignment};
use mealweek_recipe::{CreateRecipe, Recipe};
use mealweek_shared::Weekday;
use mealweek_shopping::{derive_shopping_list, Category};

fn manual_recipe(name: &str, ingredients: &[&str]) -> Recipe {
    CreateRecipe {
        name: name.into(),
        icon: None,
        prep_time_min: 30,
        servings: 4,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: vec!["Cook".into()],
        tags: vec![],
    }
    .into_recipe()
    .unwrap()
}

#[test]
fn plan_persist_and_derive() {
    let dir = TempDir::new().unwrap();
    let store = DocumentStore::new(dir.path().join("mealweek.json"));

    let mut document = AppDocument::default();
    let bolognese = manual_recipe(
        "Spaghetti Bolognese",
        &["1 lb ground beef", "1 jar pasta sauce", "1 lb spaghetti pasta"],
    );
    let stir_fry = manual_recipe(
        "Chicken Stir Fry",
        &["1 lb chicken breast", "2 cloves garlic, minced", "1 jar pasta sauce"],
    );
    let bolognese_id = bolognese.id.clone();
    let stir_fry_id = stir_fry.id.clone();
    document.recipes.insert(bolognese);
    document.recipes.insert(stir_fry);

    let week = week_key(parse_date("2025-03-12").unwrap());
    assert_eq!(week, "2025-03-10");
    document
        .plans
        .assign(week.clone(), Weekday::Monday, Assignment::new(&bolognese_id));
    document
        .plans
        .assign(week.clone(), Weekday::Thursday, Assignment::new(&stir_fry_id));
    store.save(&document).unwrap();

    // reload from disk and derive against the snapshot
    let loaded = store.load().unwrap();
    let assignments = loaded.plans.assignments_for(&week);
    let list = derive_shopping_list(&assignments, &loaded.recipes);

    // five distinct ingredients; the shared pasta sauce counts once
    assert_eq!(list.total_items(), 5);

    let meat: Vec<&str> = list
        .items(Category::Meat)
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(meat, vec!["1 lb ground beef", "1 lb chicken breast"]);

    let pantry: Vec<&str> = list
        .items(Category::Pantry)
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(pantry, vec!["1 jar pasta sauce", "1 lb spaghetti pasta"]);

    assert_eq!(list.items(Category::Produce).len(), 1);
}

#[test]
fn deleting_a_planned_recipe_degrades_silently() {
    let mut document = AppDocument::default();
    let recipe = manual_recipe("Kept", &["2 tbsp olive oil"]);
    let kept_id = recipe.id.clone();
    document.recipes.insert(recipe);

    let doomed = manual_recipe("Doomed", &["1 lb chicken breast"]);
    let doomed_id = doomed.id.clone();
    document.recipes.insert(doomed);

    let week = "2025-03-10";
    document
        .plans
        .assign(week, Weekday::Monday, Assignment::new(&kept_id));
    document
        .plans
        .assign(week, Weekday::Tuesday, Assignment::new(&doomed_id));

    document.recipes.remove(&doomed_id).unwrap();

    let list = derive_shopping_list(&document.plans.assignments_for(week), &document.recipes);
    assert_eq!(list.total_items(), 1);
    assert!(list.items(Category::Meat).is_empty());
}

#[test]
fn auto_plan_then_derive_covers_the_week() {
    let mut document = AppDocument::seeded();
    for i in 0..4 {
        document.recipes.insert(manual_recipe(
            &format!("Extra {i}"),
            &["1 cup rice", "2 tbsp soy sauce"],
        ));
    }

    let week = "2025-03-10";
    let assignments = auto_assign_week(&document.recipes);
    assert_eq!(assignments.len(), 7);
    document.plans.set_week(week, assignments);

    let list = derive_shopping_list(&document.plans.assignments_for(week), &document.recipes);
    assert!(!list.is_empty());
    for (_, items) in list.categories() {
        let names: std::collections::HashSet<&str> =
            items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names.len(), items.len(), "duplicate line items in one category");
    }
}
