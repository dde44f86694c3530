//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mealpick_core::{Category, MealConfig, MealType, UserPreferences};

/// Default number of ingredient chips suggested.
pub const DEFAULT_SUGGESTION_COUNT: usize = 6;

/// Recommend and search home-style dishes.
///
/// Mealpick composes breakfast, lunch and dinner menus from a local recipe
/// catalog, steering picks toward liked ingredients and away from disliked
/// ones.
#[derive(Parser, Debug)]
#[command(name = "mealpick")]
#[command(author, version, about)]
pub struct Cli {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Load recipes from a JSON catalog instead of the built-in one
    #[arg(long, value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Skip the pause before results are shown
    #[arg(long, global = true)]
    pub no_pacing: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend a full meal (早餐/午餐/晚餐)
    Recommend(RecommendArgs),
    /// Pick one replacement dish from a category
    Replace(ReplaceArgs),
    /// Find dishes by name or ingredient, typos tolerated
    Search(SearchArgs),
    /// Suggest ingredients to like or avoid
    Ingredients(IngredientsArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print effective engine settings and where they came from
    Show,
}

/// Preference flags shared by `recommend` and `replace`.
#[derive(Args, Debug, Clone, Default)]
pub struct PreferenceArgs {
    /// Ingredient to favor (repeatable)
    #[arg(long = "like", value_name = "INGREDIENT")]
    pub likes: Vec<String>,

    /// Ingredient to avoid entirely (repeatable)
    #[arg(long = "dislike", value_name = "INGREDIENT")]
    pub dislikes: Vec<String>,

    /// Dish name to skip when alternatives exist (repeatable)
    #[arg(long = "exclude", value_name = "DISH")]
    pub exclude: Vec<String>,

    /// Seed for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print dishes as JSON
    #[arg(long)]
    pub json: bool,
}

impl PreferenceArgs {
    #[must_use]
    pub fn preferences(&self) -> UserPreferences {
        UserPreferences::new(self.likes.clone(), self.dislikes.clone())
    }
}

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Meal type: breakfast, lunch, dinner (or 早餐, 午餐, 晚餐)
    pub meal: MealType,

    /// Number of meat dishes for lunch or dinner (0-10)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub meat: u8,

    /// Number of vegetable dishes for lunch or dinner (0-10)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub veg: u8,

    /// Number of soups for lunch or dinner (0-10)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub soup: u8,

    /// Generate several menus in a row, avoiding recently shown dishes (1-10)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub rounds: u8,

    #[command(flatten)]
    pub prefs: PreferenceArgs,
}

impl RecommendArgs {
    #[must_use]
    pub fn meal_config(&self) -> MealConfig {
        MealConfig::new(
            usize::from(self.meat),
            usize::from(self.veg),
            usize::from(self.soup),
        )
    }
}

#[derive(Args, Debug, Clone)]
pub struct ReplaceArgs {
    /// Category to pick from: breakfast, meat, veg, soup
    pub category: Category,

    #[command(flatten)]
    pub prefs: PreferenceArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search terms; every term must match a dish name or ingredient
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Show at most this many results
    #[arg(short = 'n', long, conflicts_with = "suggest")]
    pub limit: Option<usize>,

    /// Show only the first few matches, as quick suggestions
    #[arg(long)]
    pub suggest: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct IngredientsArgs {
    /// Number of ingredients to suggest
    #[arg(short = 'n', long, default_value_t = DEFAULT_SUGGESTION_COUNT)]
    pub count: usize,

    /// Ingredient already chosen, left out of suggestions (repeatable)
    #[arg(long = "exclude", value_name = "INGREDIENT")]
    pub exclude: Vec<String>,

    /// Seed for reproducible suggestions
    #[arg(long)]
    pub seed: Option<u64>,
}
