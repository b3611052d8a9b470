use temp_dir::TempDir;

use mealweek::document::{AppDocument, Reminder, UserProfile};
use mealweek::store::DocumentStore;
use mealweek_mealplan::Assignment;
use mealweek_shared::Weekday;

#[test]
fn missing_file_loads_as_empty_document() {
    let dir = TempDir::new().unwrap();
    let store = DocumentStore::new(dir.path().join("mealweek.json"));

    assert!(!store.exists());
    let document = store.load().unwrap();
    assert!(document.profile.is_none());
    assert!(document.recipes.is_empty());
    assert_eq!(document.plans.weeks().count(), 0);
    assert!(document.reminders.is_empty());
}

#[test]
fn document_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let store = DocumentStore::new(dir.path().join("mealweek.json"));

    let mut document = AppDocument::seeded();
    document.profile = Some(UserProfile {
        family_name: "The Larsens".into(),
        family_size: 4,
        preferred_store: Some("Kroger".into()),
        dietary: None,
        created_at: mealweek_shared::now_rfc3339(),
    });

    let recipe_id = document.recipes.iter().next().unwrap().id.clone();
    document
        .plans
        .assign("2025-01-20", Weekday::Wednesday, Assignment::new(&recipe_id));
    document.reminders.push(Reminder {
        day: Weekday::Tuesday,
        time: "18:00".into(),
        message: "Defrost the chicken".into(),
    });

    store.save(&document).unwrap();
    assert!(store.exists());

    let loaded = store.load().unwrap();
    assert_eq!(loaded.profile.unwrap().family_name, "The Larsens");
    assert_eq!(loaded.recipes.len(), document.recipes.len());
    assert_eq!(
        loaded.plans.assignments_for("2025-01-20")[&Weekday::Wednesday].recipe_id,
        recipe_id
    );
    assert_eq!(loaded.reminders.len(), 1);
}

#[test]
fn save_twice_replaces_the_document() {
    let dir = TempDir::new().unwrap();
    let store = DocumentStore::new(dir.path().join("mealweek.json"));

    store.save(&AppDocument::seeded()).unwrap();
    store.save(&AppDocument::default()).unwrap();

    let loaded = store.load().unwrap();
    assert!(loaded.recipes.is_empty());
}

#[test]
fn seeded_document_contains_the_builtin_recipes() {
    let document = AppDocument::seeded();
    assert!(!document.recipes.is_empty());
    assert!(document
        .recipes
        .iter()
        .any(|r| r.name == "Quick Chicken Stir Fry"));
}
