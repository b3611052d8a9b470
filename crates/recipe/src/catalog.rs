use std::collections::BTreeSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RecipeResult;
use crate::model::Recipe;
use crate::source::RecipeSource;

fn catalog_recipe(
    name: &str,
    icon: &str,
    prep_time_min: u32,
    servings: u32,
    source: &str,
    rating: f32,
    tags: &[&str],
    ingredients: &[&str],
    instructions: &[&str],
) -> Recipe {
    Recipe {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        prep_time_min,
        servings,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        source: source.to_string(),
        rating: Some(rating),
        created_at: mealweek_shared::now_rfc3339(),
    }
}

/// Curated catalog keyed by topic, standing in for premium recipe APIs.
///
/// A query hits a topic when either string contains the other, mirroring
/// how loose the original lookup was; individual entries also match on
/// name and tags.
#[derive(Debug, Default)]
pub struct PremiumCatalog;

impl PremiumCatalog {
    fn entries() -> Vec<(&'static str, Recipe)> {
        vec![
            (
                "chicken",
                catalog_recipe(
                    "Perfect Roast Chicken",
                    "🍗",
                    90,
                    4,
                    "Serious Eats",
                    4.8,
                    &["dinner", "family", "protein", "roasted"],
                    &[
                        "1 whole chicken (3-4 lbs)",
                        "2 tbsp olive oil",
                        "1 tbsp kosher salt",
                        "1 tsp black pepper",
                        "2 tsp fresh thyme",
                        "4 garlic cloves, minced",
                        "1 lemon, halved",
                        "2 carrots, chopped",
                        "2 celery stalks, chopped",
                    ],
                    &[
                        "Preheat oven to 425°F",
                        "Pat chicken completely dry",
                        "Rub seasoning all over chicken",
                        "Stuff lemon halves into cavity",
                        "Roast 60-75 minutes until 165°F internal",
                        "Rest 10 minutes before carving",
                    ],
                ),
            ),
            (
                "chicken",
                catalog_recipe(
                    "Chicken Parmesan",
                    "🍗",
                    45,
                    4,
                    "Food Network",
                    4.7,
                    &["dinner", "italian", "crispy", "cheese"],
                    &[
                        "4 chicken breasts, pounded thin",
                        "2 cups Italian breadcrumbs",
                        "1 cup grated Parmesan cheese",
                        "2 eggs, beaten",
                        "2 cups marinara sauce",
                        "8 oz fresh mozzarella, sliced",
                        "1/4 cup fresh basil",
                        "Olive oil for frying",
                    ],
                    &[
                        "Set up breading station",
                        "Coat each breast: flour, egg, breadcrumbs",
                        "Fry 3-4 minutes per side until golden",
                        "Top with sauce and mozzarella",
                        "Bake at 425°F for 15 minutes",
                    ],
                ),
            ),
            (
                "pasta",
                catalog_recipe(
                    "Authentic Carbonara",
                    "🍝",
                    20,
                    4,
                    "Bon Appétit",
                    4.9,
                    &["dinner", "italian", "quick", "eggs"],
                    &[
                        "1 lb spaghetti",
                        "6 oz guanciale, diced",
                        "4 large egg yolks",
                        "1 cup Pecorino Romano, grated",
                        "Freshly cracked black pepper",
                        "Kosher salt",
                    ],
                    &[
                        "Cook pasta until al dente",
                        "Render guanciale until crispy",
                        "Whisk eggs, cheese and pepper",
                        "Toss pasta off heat with egg mixture",
                        "Loosen with pasta water until creamy",
                    ],
                ),
            ),
            (
                "thai",
                catalog_recipe(
                    "Thai Green Curry",
                    "🍛",
                    35,
                    4,
                    "Serious Eats",
                    4.8,
                    &["dinner", "thai", "curry", "coconut"],
                    &[
                        "2-3 tbsp green curry paste",
                        "1 can (14oz) coconut milk",
                        "1 lb chicken thigh, cut in pieces",
                        "2 tbsp fish sauce",
                        "1 tbsp palm sugar",
                        "1 red bell pepper, sliced",
                        "1/4 cup Thai basil leaves",
                        "Jasmine rice for serving",
                    ],
                    &[
                        "Fry curry paste in coconut cream",
                        "Add chicken, cook until nearly done",
                        "Add remaining coconut milk, simmer",
                        "Season with fish sauce and sugar",
                        "Stir in basil, serve over rice",
                    ],
                ),
            ),
            (
                "beef",
                catalog_recipe(
                    "Classic Beef Stroganoff",
                    "🥩",
                    40,
                    6,
                    "Food Network",
                    4.6,
                    &["dinner", "comfort", "beef", "creamy"],
                    &[
                        "2 lbs beef sirloin, cut in strips",
                        "1 lb egg noodles",
                        "1 large onion, sliced",
                        "1 lb mushrooms, sliced",
                        "3 cloves garlic, minced",
                        "2 cups beef broth",
                        "1 cup sour cream",
                        "3 tbsp butter",
                        "Fresh parsley for garnish",
                    ],
                    &[
                        "Cook noodles per package directions",
                        "Sear beef in batches, set aside",
                        "Sauté onions and mushrooms",
                        "Build sauce with flour and broth",
                        "Return beef, finish with sour cream",
                        "Serve over noodles with parsley",
                    ],
                ),
            ),
            (
                "fish",
                catalog_recipe(
                    "Fish Tacos with Mango Salsa",
                    "🌮",
                    25,
                    4,
                    "Bon Appétit",
                    4.7,
                    &["dinner", "mexican", "fresh", "healthy"],
                    &[
                        "1.5 lbs white fish (mahi-mahi or cod)",
                        "8 corn tortillas",
                        "1 ripe mango, diced",
                        "1/2 red onion, finely diced",
                        "1/4 cup cilantro, chopped",
                        "2 limes, juiced",
                        "2 cups cabbage, shredded",
                        "1 tsp chili powder",
                    ],
                    &[
                        "Mix mango, onion and cilantro for salsa",
                        "Season and sear fish 3-4 minutes per side",
                        "Warm tortillas in dry skillet",
                        "Fill with fish, cabbage and salsa",
                    ],
                ),
            ),
        ]
    }
}

#[async_trait]
impl RecipeSource for PremiumCatalog {
    fn name(&self) -> &'static str {
        "premium"
    }

    async fn search(&self, query: &str) -> RecipeResult<Vec<Recipe>> {
        let query = query.to_lowercase();
        let mut results: Vec<Recipe> = Vec::new();

        for (topic, recipe) in Self::entries() {
            let topic_hit = topic.contains(&query) || query.contains(topic);
            let recipe_hit = recipe.name.to_lowercase().contains(&query)
                || recipe.tags.iter().any(|t| t.contains(&query));

            if (topic_hit || recipe_hit) && !results.iter().any(|r| r.name == recipe.name) {
                results.push(recipe);
            }
        }

        Ok(results)
    }
}

/// Community-sourced fallback catalog, the second search tier.
#[derive(Debug, Default)]
pub struct CommunityCatalog;

impl CommunityCatalog {
    fn entries() -> Vec<Recipe> {
        vec![catalog_recipe(
            "Simple Spaghetti Bolognese",
            "🍝",
            45,
            4,
            "AllRecipes",
            4.5,
            &["dinner", "italian", "meat sauce", "comfort"],
            &[
                "1 lb ground beef",
                "1 onion, diced",
                "2 cloves garlic, minced",
                "1 can (28oz) crushed tomatoes",
                "2 tbsp tomato paste",
                "1 tsp dried basil",
                "1 tsp dried oregano",
                "1 lb spaghetti",
                "Parmesan cheese for serving",
            ],
            &[
                "Brown ground beef in large pot",
                "Add onion and garlic, cook until soft",
                "Add tomatoes, paste and herbs",
                "Simmer 30 minutes",
                "Serve sauce over spaghetti with Parmesan",
            ],
        )]
    }
}

#[async_trait]
impl RecipeSource for CommunityCatalog {
    fn name(&self) -> &'static str {
        "community"
    }

    async fn search(&self, query: &str) -> RecipeResult<Vec<Recipe>> {
        let query = query.to_lowercase();
        Ok(Self::entries()
            .into_iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&query)
                    || r.tags.iter().any(|t| t.contains(&query))
            })
            .collect())
    }
}

/// Built-in defaults, the final search tier and the seed for a brand new
/// recipe store.
#[derive(Debug, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn default_recipes() -> Vec<Recipe> {
        vec![catalog_recipe(
            "Quick Chicken Stir Fry",
            "🍗",
            20,
            4,
            "Family Recipe",
            4.3,
            &["dinner", "quick", "asian", "vegetables"],
            &[
                "1 lb chicken breast, sliced thin",
                "2 cups mixed vegetables",
                "3 tbsp soy sauce",
                "2 tbsp vegetable oil",
                "2 cloves garlic, minced",
                "1 tbsp fresh ginger, minced",
                "Rice for serving",
            ],
            &[
                "Heat oil in wok",
                "Cook chicken until almost done",
                "Add garlic and ginger",
                "Add vegetables, stir-fry 3-4 minutes",
                "Thicken sauce and serve over rice",
            ],
        )]
    }
}

#[async_trait]
impl RecipeSource for BuiltinCatalog {
    fn name(&self) -> &'static str {
        "builtin"
    }

    async fn search(&self, query: &str) -> RecipeResult<Vec<Recipe>> {
        Ok(Self::default_recipes()
            .into_iter()
            .filter(|r| r.matches_query(query))
            .collect())
    }
}
