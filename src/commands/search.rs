//! Search command handler: fuzzy lookup over the loaded catalog.

use anyhow::Result;
use mealpick_core::{Catalog, SUGGESTION_LIMIT, SearchIndex};

use crate::cli::SearchArgs;
use crate::output;

pub fn run_search_command(catalog: &Catalog, args: &SearchArgs) -> Result<()> {
    let query = args.query.join(" ");
    let index = SearchIndex::new(catalog);
    let limit = args
        .limit
        .or_else(|| args.suggest.then_some(SUGGESTION_LIMIT));
    let results = match limit {
        Some(limit) => index.search_limited(&query, limit),
        None => index.search(&query),
    };

    if args.json {
        return output::print_json(&results);
    }

    if results.is_empty() {
        println!("No dishes match \"{query}\".");
        return Ok(());
    }

    let width = output::terminal_width();
    for recipe in &results {
        println!("{}", output::search_row(recipe, width));
    }
    Ok(())
}
