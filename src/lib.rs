//! Mealpick Core Library
//!
//! This library recommends dishes from a fixed local recipe catalog based on
//! taste preferences, meal composition, and recently shown dishes, and
//! provides typo-tolerant search over the same catalog.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`catalog`] - Recipe records, categories, and catalog loading/validation
//! - [`matcher`] - Fuzzy string matching with single-typo tolerance
//! - [`preferences`] - Likes/dislikes, meal types, and meal composition
//! - [`recommend`] - Scoring, candidate sampling, and meal orchestration
//! - [`search`] - Multi-term fuzzy search over the whole catalog
//! - [`history`] - Bounded buffer of recently shown dish names

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod history;
pub mod matcher;
pub mod preferences;
pub mod recommend;
pub mod search;

// Re-export commonly used types
pub use catalog::{COMMON_INGREDIENTS, Catalog, CatalogError, Category, Recipe, suggest_ingredients};
pub use history::{DEFAULT_SEEN_CAPACITY, SeenDishes};
pub use matcher::{edit_distance, is_fuzzy_match};
pub use preferences::{MealConfig, MealType, ParseLabelError, UserPreferences};
pub use recommend::{
    GeneratedDish, Pacing, RecommendError, Recommender, ScoringWeights, sample, score,
};
pub use search::{SUGGESTION_LIMIT, SearchIndex, tokenize_query};
