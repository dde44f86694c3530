//! Preference-weighted scoring with randomized novelty.
//!
//! A recipe's score is built in a fixed order:
//!
//! 1. **Veto** - any dislike found in the dish name or an ingredient returns
//!    [`f64::NEG_INFINITY`] immediately. Nothing later can undo it.
//! 2. **Search bonus** - `+search_bonus` when a search term is in the name.
//! 3. **Like bonus** - `+like_bonus` per liked term found; matches stack.
//! 4. **Novelty jitter** - uniform random value in `[0, novelty_jitter)`.
//!
//! # Score Bands
//!
//! With the default weights (like 40, jitter 50):
//!
//! ```text
//! neutral dish:   [ 0, 50)
//! one like:       [40, 90)
//! overlap zone:   [40, 50)
//! ```
//!
//! A lucky neutral dish can therefore occasionally beat an unlucky liked
//! one. [`ScoringWeights::disjoint`] (like 250) removes the overlap.

use rand::Rng;
use tracing::trace;

use crate::catalog::Recipe;
use crate::preferences::UserPreferences;

/// Default per-like bonus.
pub const DEFAULT_LIKE_BONUS: f64 = 40.0;

/// Default bonus for a search term found in the dish name.
pub const DEFAULT_SEARCH_BONUS: f64 = 100.0;

/// Default exclusive upper bound of the novelty jitter.
pub const DEFAULT_NOVELTY_JITTER: f64 = 50.0;

/// Default score above which a candidate counts as a high scorer.
pub const DEFAULT_HIGH_SCORE_THRESHOLD: f64 = 45.0;

/// Default share of ranked candidates kept when widening the pool.
pub const DEFAULT_POOL_FRACTION: f64 = 0.6;

/// Like bonus of the disjoint regime.
pub const DISJOINT_LIKE_BONUS: f64 = 250.0;

/// Tunable constants for scoring and pool selection.
///
/// # Default Values
///
/// - `like_bonus`: 40
/// - `search_bonus`: 100
/// - `novelty_jitter`: 50
/// - `high_score_threshold`: 45
/// - `pool_fraction`: 0.6
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Added once per liked term present in the recipe.
    pub like_bonus: f64,
    /// Added when the dish name contains the search term.
    pub search_bonus: f64,
    /// Exclusive upper bound of the uniform novelty term.
    pub novelty_jitter: f64,
    /// Candidates scoring strictly above this form the preferred pool.
    pub high_score_threshold: f64,
    /// Fraction of ranked candidates used when high scorers are too few.
    pub pool_fraction: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            like_bonus: DEFAULT_LIKE_BONUS,
            search_bonus: DEFAULT_SEARCH_BONUS,
            novelty_jitter: DEFAULT_NOVELTY_JITTER,
            high_score_threshold: DEFAULT_HIGH_SCORE_THRESHOLD,
            pool_fraction: DEFAULT_POOL_FRACTION,
        }
    }
}

impl ScoringWeights {
    /// Weights where one like always outranks a neutral dish.
    #[must_use]
    pub fn disjoint() -> Self {
        Self {
            like_bonus: DISJOINT_LIKE_BONUS,
            ..Self::default()
        }
    }

    /// Returns true if a neutral dish can outscore a dish with one like.
    #[must_use]
    pub fn overlaps(&self) -> bool {
        self.like_bonus < self.novelty_jitter
    }
}

/// Scores one recipe. Returns [`f64::NEG_INFINITY`] for vetoed recipes.
///
/// Empty like/dislike entries are ignored.
#[allow(clippy::cast_precision_loss)]
pub fn score<R: Rng + ?Sized>(
    recipe: &Recipe,
    preferences: &UserPreferences,
    search_term: Option<&str>,
    weights: &ScoringWeights,
    rng: &mut R,
) -> f64 {
    if let Some(dislike) = preferences.dislikes.iter().find(|d| recipe.mentions(d)) {
        trace!(dish = %recipe.dish_name, dislike = %dislike, "vetoed");
        return f64::NEG_INFINITY;
    }

    let mut total = 0.0;

    if let Some(term) = search_term
        && !term.is_empty()
        && recipe.dish_name.contains(term)
    {
        total += weights.search_bonus;
    }

    let like_hits = preferences
        .likes
        .iter()
        .filter(|like| recipe.mentions(like))
        .count();
    total += weights.like_bonus * like_hits as f64;

    if weights.novelty_jitter > 0.0 {
        total += rng.gen_range(0.0..weights.novelty_jitter);
    }

    total
}
