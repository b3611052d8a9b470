use anyhow::Result;
use clap::{Parser, Subcommand};

use mealweek::commands;
use mealweek::config::Config;
use mealweek::observability::init_observability;
use mealweek::store::DocumentStore;
use mealweek_shared::Weekday;

/// mealweek - family meal planning
#[derive(Parser)]
#[command(name = "mealweek")]
#[command(about = "Plan a week of family meals and derive the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the family profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Manage the recipe collection
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Plan meals for a week
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Derive the shopping list for a week
    Shopping {
        /// Any date inside the week (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Manage meal reminders
    Reminder {
        #[command(subcommand)]
        command: ReminderCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Create or replace the family profile
    Set {
        #[arg(long)]
        family_name: String,
        #[arg(long, default_value_t = 4)]
        family_size: u32,
        #[arg(long)]
        preferred_store: Option<String>,
        #[arg(long)]
        dietary: Option<String>,
    },
    /// Show the family profile
    Show,
}

#[derive(Subcommand)]
enum RecipeCommands {
    /// Add a recipe manually
    Add {
        #[arg(long)]
        name: String,
        /// Short glyph shown next to the name
        #[arg(long)]
        icon: Option<String>,
        #[arg(long, default_value_t = 30)]
        prep_time_min: u32,
        #[arg(long, default_value_t = 4)]
        servings: u32,
        /// Repeat for each ingredient line
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<String>,
        /// Repeat for each instruction step
        #[arg(long = "step")]
        instructions: Vec<String>,
        /// Repeat for each tag
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List stored recipes
    List,
    /// Delete a recipe by id
    Remove { id: String },
    /// Search the recipe catalogs
    Search {
        query: String,
        /// Add result number N to the collection
        #[arg(long)]
        add: Option<usize>,
    },
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Show the week's plan
    Show {
        #[arg(long)]
        date: Option<String>,
    },
    /// Assign a recipe to a day
    Set {
        day: Weekday,
        recipe_id: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// Clear a day's assignment
    Clear {
        day: Weekday,
        #[arg(long)]
        date: Option<String>,
    },
    /// Fill the week with random picks from the collection
    Auto {
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
enum ReminderCommands {
    /// Add a reminder
    Add {
        day: Weekday,
        /// Time-of-day label, e.g. "18:00" or "evening"
        time: String,
        message: String,
    },
    /// List reminders
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    init_observability(&config.observability.log_level)?;

    let store = DocumentStore::new(&config.storage.path);

    match cli.command {
        Commands::Profile { command } => match command {
            ProfileCommands::Set {
                family_name,
                family_size,
                preferred_store,
                dietary,
            } => commands::profile_set(&store, family_name, family_size, preferred_store, dietary),
            ProfileCommands::Show => commands::profile_show(&store),
        },
        Commands::Recipe { command } => match command {
            RecipeCommands::Add {
                name,
                icon,
                prep_time_min,
                servings,
                ingredients,
                instructions,
                tags,
            } => commands::recipe_add(
                &store,
                name,
                icon,
                prep_time_min,
                servings,
                ingredients,
                instructions,
                tags,
            ),
            RecipeCommands::List => commands::recipe_list(&store),
            RecipeCommands::Remove { id } => commands::recipe_remove(&store, &id),
            RecipeCommands::Search { query, add } => {
                commands::recipe_search(&store, &query, add).await
            }
        },
        Commands::Plan { command } => match command {
            PlanCommands::Show { date } => commands::plan_show(&store, date.as_deref()),
            PlanCommands::Set {
                day,
                recipe_id,
                date,
            } => commands::plan_set(&store, date.as_deref(), day, &recipe_id),
            PlanCommands::Clear { day, date } => {
                commands::plan_clear(&store, date.as_deref(), day)
            }
            PlanCommands::Auto { date } => commands::plan_auto(&store, date.as_deref()),
        },
        Commands::Shopping { date } => commands::shopping(&store, date.as_deref()),
        Commands::Reminder { command } => match command {
            ReminderCommands::Add { day, time, message } => {
                commands::reminder_add(&store, day, time, message)
            }
            ReminderCommands::List => commands::reminder_list(&store),
        },
    }
}
