//! Ingredients command handler: random preference suggestions.

use anyhow::Result;
use mealpick_core::suggest_ingredients;

use super::seeded_rng;
use crate::cli::IngredientsArgs;

pub fn run_ingredients_command(args: &IngredientsArgs) -> Result<()> {
    let mut rng = seeded_rng(args.seed);
    let suggestions = suggest_ingredients(args.count, &args.exclude, &mut rng);
    for item in suggestions {
        println!("{item}");
    }
    Ok(())
}
