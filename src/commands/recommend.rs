//! Recommend and replace command handlers.

use anyhow::{Context, Result};
use mealpick_core::{GeneratedDish, Recommender, SeenDishes};
use tracing::debug;

use super::seeded_rng;
use crate::cli::{RecommendArgs, ReplaceArgs};
use crate::output;

pub async fn run_recommend_command(recommender: &Recommender, args: &RecommendArgs) -> Result<()> {
    let preferences = args.prefs.preferences();
    let meal_config = args.meal_config();
    let mut rng = seeded_rng(args.prefs.seed);
    let mut seen = SeenDishes::default();
    let mut menus: Vec<Vec<GeneratedDish>> = Vec::with_capacity(usize::from(args.rounds));

    for round in 1..=args.rounds {
        let excluded = seen.exclusions_with(&args.prefs.exclude);
        let dishes = recommender
            .generate_recipe(
                args.meal,
                &preferences,
                Some(&meal_config),
                &excluded,
                &mut rng,
            )
            .await
            .with_context(|| format!("Failed to recommend {} (round {round})", args.meal))?;
        seen.record(dishes.iter().map(|dish| dish.recipe.dish_name.clone()));
        debug!(round, remembered = seen.len(), "round complete");
        menus.push(dishes);
    }

    if args.prefs.json {
        return match menus.as_slice() {
            [only] => output::print_json(only),
            all => output::print_json(all),
        };
    }

    let width = output::terminal_width();
    for (round_index, dishes) in menus.iter().enumerate() {
        if menus.len() > 1 {
            println!("== {} #{} ==", args.meal, round_index + 1);
        } else {
            println!("== {} ==", args.meal);
        }
        for (dish_index, dish) in dishes.iter().enumerate() {
            for line in output::dish_block_lines(dish_index + 1, dish, width) {
                println!("{line}");
            }
        }
        println!();
    }
    Ok(())
}

pub async fn run_replace_command(recommender: &Recommender, args: &ReplaceArgs) -> Result<()> {
    let preferences = args.prefs.preferences();
    let mut rng = seeded_rng(args.prefs.seed);
    let dish = recommender
        .generate_single_side_dish(args.category, &preferences, &args.prefs.exclude, &mut rng)
        .await
        .with_context(|| format!("Failed to pick a replacement {} dish", args.category))?;

    if args.prefs.json {
        return output::print_json(&dish);
    }
    for line in output::dish_block_lines(1, &dish, output::terminal_width()) {
        println!("{line}");
    }
    Ok(())
}
