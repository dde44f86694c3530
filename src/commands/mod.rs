//! CLI command handlers.

use rand::SeedableRng;
use rand::rngs::StdRng;

mod config;
mod ingredients;
mod recommend;
mod search;

pub use config::run_config_show_command;
pub use ingredients::run_ingredients_command;
pub use recommend::{run_recommend_command, run_replace_command};
pub use search::run_search_command;

/// Deterministic RNG when a seed is given, OS-seeded otherwise.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
