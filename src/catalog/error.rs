//! Error types for catalog loading and validation.

use std::path::PathBuf;

use thiserror::Error;

use super::Category;

/// Errors that can occur while building or loading a recipe catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two recipes share a dish name; names are the identity key across the engine
    #[error(
        "duplicate dish name '{dish_name}' in {first} and {second}\n  Suggestion: Rename one of the dishes so every name is unique"
    )]
    DuplicateDishName {
        /// The repeated name
        dish_name: String,
        /// Category of the first occurrence
        first: Category,
        /// Category of the repeated occurrence
        second: Category,
    },

    /// A recipe has an empty or whitespace-only name
    #[error("recipe #{index} in {category} has an empty dish name\n  Suggestion: Give every recipe a non-blank dishName")]
    EmptyDishName {
        /// Category containing the bad entry
        category: Category,
        /// Zero-based position within the category
        index: usize,
    },

    /// Catalog file could not be read
    #[error("cannot read catalog file '{path}': {source}")]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed
    #[error("invalid catalog JSON: {source}\n  Suggestion: Expect an object with breakfast, meat, veg and soup arrays")]
    Json {
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Creates a `DuplicateDishName` error.
    #[must_use]
    pub fn duplicate(dish_name: &str, first: Category, second: Category) -> Self {
        Self::DuplicateDishName {
            dish_name: dish_name.to_string(),
            first,
            second,
        }
    }

    /// Creates an `Io` error for a catalog path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}
