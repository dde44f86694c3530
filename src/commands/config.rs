//! Config command handlers: show effective configuration.

use anyhow::Result;
use mealpick_core::Recommender;

use crate::CatalogSource;
use crate::app_config::LoadedConfig;

pub fn run_config_show_command(
    loaded_config: &LoadedConfig,
    recommender: &Recommender,
    catalog_source: &CatalogSource,
) -> Result<()> {
    let resolved_path = loaded_config.path.as_ref().map_or_else(
        || "<unresolved>".to_string(),
        |path| path.display().to_string(),
    );
    println!("config_path = {resolved_path}");
    println!(
        "config_file = {}",
        if loaded_config.loaded_from_file {
            "loaded"
        } else {
            "not found (using defaults)"
        }
    );

    let weights = recommender.weights();
    println!("like_bonus = {}", weights.like_bonus);
    println!("search_bonus = {}", weights.search_bonus);
    println!("novelty_jitter = {}", weights.novelty_jitter);
    println!("high_score_threshold = {}", weights.high_score_threshold);
    println!("pool_fraction = {}", weights.pool_fraction);
    println!(
        "scoring_regime = {}",
        if weights.overlaps() {
            "overlap"
        } else {
            "disjoint"
        }
    );

    let pacing = recommender.pacing();
    println!("meal_pacing_ms = {}", pacing.meal.as_millis());
    println!("single_pacing_ms = {}", pacing.single.as_millis());
    println!("catalog = {catalog_source}");
    println!("catalog_dishes = {}", recommender.catalog().len());

    Ok(())
}
