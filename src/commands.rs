use anyhow::{bail, Result};
use strum::VariantArray;

use mealweek_mealplan::{auto_assign_week, parse_date, week_key, week_key_today, Assignment};
use mealweek_recipe::{CreateRecipe, SearchService};
use mealweek_shared::Weekday;
use mealweek_shopping::derive_shopping_list;

use crate::document::{AppDocument, Reminder, UserProfile};
use crate::store::DocumentStore;

/// Loads the document, seeding built-in recipes on a first run.
pub fn load_or_seed(store: &DocumentStore) -> Result<AppDocument> {
    if store.exists() {
        store.load()
    } else {
        tracing::info!(path = %store.path().display(), "no document yet, starting fresh");
        Ok(AppDocument::seeded())
    }
}

/// `--date` resolves through the week key; omitted means today.
fn resolve_week_key(date: Option<&str>) -> Result<String> {
    match date {
        Some(date) => Ok(week_key(parse_date(date)?)),
        None => Ok(week_key_today()),
    }
}

pub fn profile_set(
    store: &DocumentStore,
    family_name: String,
    family_size: u32,
    preferred_store: Option<String>,
    dietary: Option<String>,
) -> Result<()> {
    if family_name.trim().is_empty() {
        bail!("family name is required");
    }
    if family_size == 0 {
        bail!("family size must be positive");
    }

    let mut document = load_or_seed(store)?;
    document.profile = Some(UserProfile {
        family_name: family_name.trim().to_string(),
        family_size,
        preferred_store,
        dietary,
        created_at: mealweek_shared::now_rfc3339(),
    });
    store.save(&document)?;

    println!("Welcome, {}! Your meal planner is ready.", family_name.trim());
    Ok(())
}

pub fn profile_show(store: &DocumentStore) -> Result<()> {
    let document = load_or_seed(store)?;
    match document.profile {
        Some(profile) => {
            println!("Family:  {}", profile.family_name);
            println!("Size:    {}", profile.family_size);
            if let Some(preferred) = profile.preferred_store {
                println!("Store:   {preferred}");
            }
            if let Some(dietary) = profile.dietary {
                println!("Dietary: {dietary}");
            }
        }
        None => println!("No profile yet. Set one with `mealweek profile set`."),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn recipe_add(
    store: &DocumentStore,
    name: String,
    icon: Option<String>,
    prep_time_min: u32,
    servings: u32,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    tags: Vec<String>,
) -> Result<()> {
    let command = CreateRecipe {
        name,
        icon,
        prep_time_min,
        servings,
        ingredients,
        instructions,
        tags,
    };
    let recipe = command.into_recipe()?;

    let mut document = load_or_seed(store)?;
    let name = recipe.name.clone();
    let id = recipe.id.clone();
    document.recipes.insert(recipe);
    store.save(&document)?;

    println!("Added \"{name}\" ({id})");
    Ok(())
}

pub fn recipe_list(store: &DocumentStore) -> Result<()> {
    let document = load_or_seed(store)?;
    if document.recipes.is_empty() {
        println!("No recipes yet. Add one with `mealweek recipe add` or search the catalogs.");
        return Ok(());
    }

    for recipe in document.recipes.iter() {
        println!(
            "{} {}  [{}]  {} min, serves {}  ({})",
            recipe.icon, recipe.name, recipe.id, recipe.prep_time_min, recipe.servings,
            recipe.source
        );
    }
    Ok(())
}

pub fn recipe_remove(store: &DocumentStore, id: &str) -> Result<()> {
    let mut document = load_or_seed(store)?;
    let removed = document.recipes.remove(id)?;
    store.save(&document)?;

    println!("Removed \"{}\"", removed.name);
    Ok(())
}

pub async fn recipe_search(store: &DocumentStore, query: &str, add: Option<usize>) -> Result<()> {
    let service = SearchService::default();
    let results = service.search(query).await;

    if results.is_empty() {
        println!("No recipes found for \"{query}\". Try a different term or add one manually.");
        return Ok(());
    }

    for (index, recipe) in results.iter().enumerate() {
        let rating = recipe
            .rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".into());
        println!(
            "{}. {} {}  {} min, serves {}  rating {}  ({})",
            index + 1,
            recipe.icon,
            recipe.name,
            recipe.prep_time_min,
            recipe.servings,
            rating,
            recipe.source
        );
    }

    if let Some(pick) = add {
        let Some(recipe) = results.get(pick.saturating_sub(1)) else {
            bail!("no search result #{pick}");
        };
        let mut document = load_or_seed(store)?;
        let name = recipe.name.clone();
        document.recipes.insert(recipe.clone());
        store.save(&document)?;
        println!("Added \"{name}\" to your collection.");
    }

    Ok(())
}

pub fn plan_show(store: &DocumentStore, date: Option<&str>) -> Result<()> {
    let document = load_or_seed(store)?;
    let week = resolve_week_key(date)?;
    let assignments = document.plans.assignments_for(&week);

    println!("Week of {week}");
    for day in Weekday::VARIANTS {
        match assignments.get(day) {
            Some(assignment) => match document.recipes.get(&assignment.recipe_id) {
                Some(recipe) => println!("  {day:<10} {} {}", recipe.icon, recipe.name),
                None => println!("  {day:<10} (recipe no longer in collection)"),
            },
            None => println!("  {day:<10} -"),
        }
    }
    Ok(())
}

pub fn plan_set(
    store: &DocumentStore,
    date: Option<&str>,
    day: Weekday,
    recipe_id: &str,
) -> Result<()> {
    let mut document = load_or_seed(store)?;
    let Some(recipe) = document.recipes.get(recipe_id) else {
        bail!("recipe not found: {recipe_id}");
    };
    let name = recipe.name.clone();

    let week = resolve_week_key(date)?;
    document
        .plans
        .assign(week.clone(), day, Assignment::new(recipe_id));
    store.save(&document)?;

    println!("Planned \"{name}\" for {day}, week of {week}");
    Ok(())
}

pub fn plan_clear(store: &DocumentStore, date: Option<&str>, day: Weekday) -> Result<()> {
    let mut document = load_or_seed(store)?;
    let week = resolve_week_key(date)?;

    match document.plans.clear(&week, day) {
        Some(_) => {
            store.save(&document)?;
            println!("Cleared {day}, week of {week}");
        }
        None => println!("Nothing planned for {day}, week of {week}"),
    }
    Ok(())
}

pub fn plan_auto(store: &DocumentStore, date: Option<&str>) -> Result<()> {
    let mut document = load_or_seed(store)?;
    if document.recipes.is_empty() {
        bail!("cannot auto-plan an empty recipe collection");
    }

    let week = resolve_week_key(date)?;
    let assignments = auto_assign_week(&document.recipes);
    document.plans.set_week(week.clone(), assignments);
    store.save(&document)?;

    println!("Auto-planned the week of {week}:");
    plan_show(store, Some(&week))
}

pub fn shopping(store: &DocumentStore, date: Option<&str>) -> Result<()> {
    let document = load_or_seed(store)?;
    let week = resolve_week_key(date)?;
    let assignments = document.plans.assignments_for(&week);
    let list = derive_shopping_list(&assignments, &document.recipes);

    if list.is_empty() {
        println!("Nothing to buy for the week of {week}. Plan some meals first.");
        return Ok(());
    }

    println!("Shopping list for the week of {week}");
    for (category, items) in list.categories() {
        if items.is_empty() {
            continue;
        }
        println!("{category}:");
        for item in items {
            println!("  {:<50} ${:>6.2}", item.name, item.price);
        }
    }
    println!(
        "{} items, estimated total ${:.2}",
        list.total_items(),
        list.total_cost()
    );
    Ok(())
}

pub fn reminder_add(store: &DocumentStore, day: Weekday, time: String, message: String) -> Result<()> {
    if message.trim().is_empty() {
        bail!("reminder message is required");
    }

    let mut document = load_or_seed(store)?;
    document.reminders.push(Reminder {
        day,
        time,
        message: message.trim().to_string(),
    });
    store.save(&document)?;

    println!("Reminder saved.");
    Ok(())
}

pub fn reminder_list(store: &DocumentStore) -> Result<()> {
    let document = load_or_seed(store)?;
    if document.reminders.is_empty() {
        println!("No reminders.");
        return Ok(());
    }

    for reminder in &document.reminders {
        println!("{:<10} {:<8} {}", reminder.day, reminder.time, reminder.message);
    }
    Ok(())
}
