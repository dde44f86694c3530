//! Recipe catalog: immutable recipe records grouped by meal category.
//!
//! A [`Catalog`] holds four independent category lists (breakfast, meat,
//! vegetable, soup). The dish name is the identity key everywhere in the
//! engine, so every constructor validates that names are non-blank and
//! unique across all categories.
//!
//! # Example
//!
//! ```
//! use mealpick_core::catalog::{Catalog, Category};
//!
//! let catalog = Catalog::builtin().unwrap();
//! assert!(!catalog.recipes(Category::Soup).is_empty());
//! ```

mod data;
mod error;
mod ingredients;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub use error::CatalogError;
pub use ingredients::{COMMON_INGREDIENTS, suggest_ingredients};

use crate::preferences::ParseLabelError;

/// A single catalog entry.
///
/// Serialized with camelCase keys (`dishName`) so JSON catalogs share the
/// shape of the built-in data tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Display name; unique across the catalog.
    pub dish_name: String,
    /// One-line description.
    #[serde(default)]
    pub description: String,
    /// Free-text ingredient lines, possibly with quantities (`鸡蛋 3个`).
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Ordered cooking steps.
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    /// Creates a recipe from borrowed parts.
    #[must_use]
    pub fn new(dish_name: &str, description: &str, ingredients: &[&str], steps: &[&str]) -> Self {
        Self {
            dish_name: dish_name.to_string(),
            description: description.to_string(),
            ingredients: ingredients.iter().map(|s| (*s).to_string()).collect(),
            steps: steps.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Returns true if `needle` occurs in the dish name or any ingredient line.
    ///
    /// Case-sensitive; empty needles never match.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return false;
        }
        self.dish_name.contains(needle) || self.ingredients.iter().any(|i| i.contains(needle))
    }
}

/// Meal category. Each category is sampled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Breakfast dishes (早餐).
    Breakfast,
    /// Meat dishes (荤菜).
    Meat,
    /// Vegetable dishes (素菜).
    Veg,
    /// Soups (汤).
    Soup,
}

impl Category {
    /// All categories in catalog order.
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Meat, Self::Veg, Self::Soup];

    /// Returns the stable string label for display output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Meat => "meat",
            Self::Veg => "veg",
            Self::Soup => "soup",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "早餐" => Ok(Self::Breakfast),
            "meat" | "荤菜" => Ok(Self::Meat),
            "veg" | "vegetable" | "素菜" => Ok(Self::Veg),
            "soup" | "汤" | "汤品" => Ok(Self::Soup),
            _ => Err(ParseLabelError::category(s)),
        }
    }
}

/// JSON shape of a catalog file.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    breakfast: Vec<Recipe>,
    #[serde(default)]
    meat: Vec<Recipe>,
    #[serde(default)]
    veg: Vec<Recipe>,
    #[serde(default)]
    soup: Vec<Recipe>,
}

/// Validated, read-only recipe catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    breakfast: Vec<Recipe>,
    meat: Vec<Recipe>,
    veg: Vec<Recipe>,
    soup: Vec<Recipe>,
}

impl Catalog {
    /// Builds a catalog, validating that dish names are non-blank and unique.
    ///
    /// # Errors
    /// Returns [`CatalogError::EmptyDishName`] or [`CatalogError::DuplicateDishName`].
    pub fn new(
        breakfast: Vec<Recipe>,
        meat: Vec<Recipe>,
        veg: Vec<Recipe>,
        soup: Vec<Recipe>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            breakfast,
            meat,
            veg,
            soup,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads the compiled-in catalog.
    ///
    /// # Errors
    /// Returns an error if the built-in tables violate name uniqueness.
    #[instrument]
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::new(
            data::recipes(Category::Breakfast),
            data::recipes(Category::Meat),
            data::recipes(Category::Veg),
            data::recipes(Category::Soup),
        )?;
        debug!(recipes = catalog.len(), "built-in catalog loaded");
        Ok(catalog)
    }

    /// Parses a JSON catalog (`{"breakfast": [...], "meat": [...], ...}`).
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or names are not unique.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.breakfast, file.meat, file.veg, file.soup)
    }

    /// Loads a JSON catalog from disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or fails validation.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let catalog = Self::from_json_str(&raw)?;
        debug!(recipes = catalog.len(), "catalog file loaded");
        Ok(catalog)
    }

    /// Returns the recipes of one category in catalog order.
    #[must_use]
    pub fn recipes(&self, category: Category) -> &[Recipe] {
        match category {
            Category::Breakfast => &self.breakfast,
            Category::Meat => &self.meat,
            Category::Veg => &self.veg,
            Category::Soup => &self.soup,
        }
    }

    /// Iterates every recipe: breakfast, meat, veg, then soup.
    pub fn all(&self) -> impl Iterator<Item = &Recipe> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.recipes(category).iter())
    }

    /// Finds a recipe by its dish name.
    #[must_use]
    pub fn find(&self, dish_name: &str) -> Option<&Recipe> {
        self.all().find(|r| r.dish_name == dish_name)
    }

    /// Total number of recipes across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        Category::ALL
            .into_iter()
            .map(|c| self.recipes(c).len())
            .sum()
    }

    /// Returns true if no category has any recipe.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen: HashMap<&str, Category> = HashMap::new();
        for category in Category::ALL {
            for (index, recipe) in self.recipes(category).iter().enumerate() {
                let name = recipe.dish_name.as_str();
                if name.trim().is_empty() {
                    return Err(CatalogError::EmptyDishName { category, index });
                }
                if let Some(first) = seen.insert(name, category) {
                    return Err(CatalogError::duplicate(name, first, category));
                }
            }
        }
        Ok(())
    }
}
