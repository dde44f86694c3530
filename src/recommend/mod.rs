//! Meal recommendation: scoring, sampling, and per-category orchestration.
//!
//! [`Recommender`] is the caller-facing entry point. It samples each meal
//! category independently with [`sample`] and never substitutes across
//! categories: a lunch asking for two meat dishes gets at most two meat
//! dishes, whatever the preferences say about soups.
//!
//! # Example
//!
//! ```
//! use mealpick_core::{Catalog, MealConfig, MealType, Recommender, UserPreferences};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let recommender = Recommender::new(Catalog::builtin().unwrap());
//! let prefs = UserPreferences::new(vec!["土豆".into()], vec!["香菜".into()]);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let dishes = recommender
//!     .recommend_meal(MealType::Lunch, &prefs, Some(&MealConfig::new(2, 1, 1)), &[], &mut rng)
//!     .unwrap();
//! assert_eq!(dishes.len(), 4);
//! ```

mod error;
mod sampler;
mod scoring;

use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

pub use error::RecommendError;
pub use sampler::sample;
pub use scoring::{
    DEFAULT_HIGH_SCORE_THRESHOLD, DEFAULT_LIKE_BONUS, DEFAULT_NOVELTY_JITTER,
    DEFAULT_POOL_FRACTION, DEFAULT_SEARCH_BONUS, DISJOINT_LIKE_BONUS, ScoringWeights, score,
};

use crate::catalog::{Catalog, Category, Recipe};
use crate::preferences::{MealConfig, MealType, UserPreferences};

/// Default pause before returning a full meal.
pub const DEFAULT_MEAL_PACING: Duration = Duration::from_millis(600);

/// Default pause before returning a single replacement dish.
pub const DEFAULT_SINGLE_PACING: Duration = Duration::from_millis(400);

/// Artificial delay applied by the async entry points.
///
/// Pure presentation pacing; results do not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Delay before [`Recommender::generate_recipe`] returns.
    pub meal: Duration,
    /// Delay before [`Recommender::generate_single_side_dish`] returns.
    pub single: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            meal: DEFAULT_MEAL_PACING,
            single: DEFAULT_SINGLE_PACING,
        }
    }
}

impl Pacing {
    /// No delay at all.
    #[must_use]
    pub fn none() -> Self {
        Self {
            meal: Duration::ZERO,
            single: Duration::ZERO,
        }
    }
}

/// A recommended recipe decorated with a display image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDish {
    /// Recipe fields, flattened into the same JSON object.
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Image search URL derived from the dish name.
    pub image_url: String,
}

impl GeneratedDish {
    /// Decorates a recipe with its derived image URL.
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            image_url: image_url(&recipe.dish_name),
            recipe: recipe.clone(),
        }
    }
}

/// Deterministic image search URL for a dish name.
#[must_use]
pub fn image_url(dish_name: &str) -> String {
    let query = format!("{dish_name} 高清美食摄影");
    format!(
        "https://tse2.mm.bing.net/th?q={}&w=800&h=600&c=7&rs=1&p=0",
        urlencoding::encode(&query)
    )
}

/// Recommends dishes from a catalog.
///
/// Holds only immutable state; randomness is supplied per call.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    weights: ScoringWeights,
    pacing: Pacing,
}

impl Recommender {
    /// Creates a recommender with default weights and pacing.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            weights: ScoringWeights::default(),
            pacing: Pacing::default(),
        }
    }

    /// Replaces the scoring weights.
    #[must_use]
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replaces the pacing delays of the async entry points.
    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Catalog recommendations are drawn from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Active scoring weights.
    #[must_use]
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Active pacing delays.
    #[must_use]
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Recommends a full meal.
    ///
    /// Breakfast yields one breakfast dish. Lunch and dinner sample meat,
    /// veg and soup independently (default one of each when `config` is
    /// `None`) and concatenate them in that order.
    ///
    /// # Errors
    /// Returns [`RecommendError::EmptyCategory`] if breakfast has no recipes,
    /// or [`RecommendError::NoRecommendations`] if nothing was produced.
    #[instrument(skip(self, preferences, excluded, rng), fields(excluded = excluded.len()))]
    pub fn recommend_meal<R: Rng + ?Sized>(
        &self,
        meal_type: MealType,
        preferences: &UserPreferences,
        config: Option<&MealConfig>,
        excluded: &[String],
        rng: &mut R,
    ) -> Result<Vec<&Recipe>, RecommendError> {
        let dishes = match meal_type {
            MealType::Breakfast => {
                vec![self.recommend_single(Category::Breakfast, preferences, excluded, rng)?]
            }
            MealType::Lunch | MealType::Dinner => {
                let config = config.copied().unwrap_or_default();
                let mut dishes = Vec::new();
                for (category, count) in config.counts() {
                    if count == 0 {
                        continue;
                    }
                    let recipes = self.catalog.recipes(category);
                    if recipes.is_empty() {
                        warn!(%category, count, "requested category has no recipes");
                        continue;
                    }
                    let picked =
                        sample(recipes, preferences, count, excluded, &self.weights, rng);
                    debug!(%category, requested = count, picked = picked.len(), "category sampled");
                    dishes.extend(picked);
                }
                dishes
            }
        };

        if dishes.is_empty() {
            return Err(RecommendError::NoRecommendations { meal_type });
        }
        Ok(dishes)
    }

    /// Recommends one dish from `category`, e.g. to replace a displayed slot.
    ///
    /// # Errors
    /// Returns [`RecommendError::EmptyCategory`] if the category has no recipes.
    #[instrument(skip(self, preferences, excluded, rng), fields(excluded = excluded.len()))]
    pub fn recommend_single<R: Rng + ?Sized>(
        &self,
        category: Category,
        preferences: &UserPreferences,
        excluded: &[String],
        rng: &mut R,
    ) -> Result<&Recipe, RecommendError> {
        sample(
            self.catalog.recipes(category),
            preferences,
            1,
            excluded,
            &self.weights,
            rng,
        )
        .into_iter()
        .next()
        .ok_or(RecommendError::EmptyCategory { category })
    }

    /// Paced meal recommendation returning display-ready dishes.
    ///
    /// # Errors
    /// Same as [`Recommender::recommend_meal`].
    pub async fn generate_recipe<R: Rng + ?Sized>(
        &self,
        meal_type: MealType,
        preferences: &UserPreferences,
        config: Option<&MealConfig>,
        excluded: &[String],
        rng: &mut R,
    ) -> Result<Vec<GeneratedDish>, RecommendError> {
        pause(self.pacing.meal).await;
        let dishes = self.recommend_meal(meal_type, preferences, config, excluded, rng)?;
        info!(%meal_type, dishes = dishes.len(), "meal recommended");
        Ok(dishes.into_iter().map(GeneratedDish::from_recipe).collect())
    }

    /// Paced single-dish replacement returning a display-ready dish.
    ///
    /// # Errors
    /// Same as [`Recommender::recommend_single`].
    pub async fn generate_single_side_dish<R: Rng + ?Sized>(
        &self,
        category: Category,
        preferences: &UserPreferences,
        excluded: &[String],
        rng: &mut R,
    ) -> Result<GeneratedDish, RecommendError> {
        pause(self.pacing.single).await;
        let dish = self.recommend_single(category, preferences, excluded, rng)?;
        info!(%category, dish = %dish.dish_name, "replacement dish picked");
        Ok(GeneratedDish::from_recipe(dish))
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
