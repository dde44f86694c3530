//! Caller-supplied inputs: taste preferences, meal type, and meal composition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Category;

/// Default number of dishes per lunch/dinner category when no config is given.
pub const DEFAULT_DISHES_PER_CATEGORY: usize = 1;

/// Error returned when a meal type or category label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'\n  Suggestion: Use one of: {expected}")]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl ParseLabelError {
    /// Error for an unrecognized meal type label.
    #[must_use]
    pub fn meal_type(value: &str) -> Self {
        Self {
            kind: "meal type",
            value: value.to_string(),
            expected: "breakfast, lunch, dinner (早餐, 午餐, 晚餐)",
        }
    }

    /// Error for an unrecognized category label.
    #[must_use]
    pub fn category(value: &str) -> Self {
        Self {
            kind: "category",
            value: value.to_string(),
            expected: "breakfast, meat, veg, soup (早餐, 荤菜, 素菜, 汤)",
        }
    }
}

/// User taste preferences.
///
/// Both lists keep insertion order for display. An item present in both
/// lists is tolerated; the dislike veto always wins during scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Ingredients that raise a dish's score.
    #[serde(default)]
    pub likes: Vec<String>,
    /// Ingredients that veto a dish.
    #[serde(default)]
    pub dislikes: Vec<String>,
}

impl UserPreferences {
    /// Creates preferences from like and dislike lists.
    #[must_use]
    pub fn new(likes: Vec<String>, dislikes: Vec<String>) -> Self {
        Self { likes, dislikes }
    }

    /// Toggles `item` in likes. Adding a like removes the same item from dislikes.
    pub fn toggle_like(&mut self, item: &str) {
        if remove_item(&mut self.likes, item) {
            return;
        }
        remove_item(&mut self.dislikes, item);
        self.likes.push(item.to_string());
    }

    /// Toggles `item` in dislikes. Adding a dislike removes the same item from likes.
    pub fn toggle_dislike(&mut self, item: &str) {
        if remove_item(&mut self.dislikes, item) {
            return;
        }
        remove_item(&mut self.likes, item);
        self.dislikes.push(item.to_string());
    }

    /// Returns true when neither list has entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.likes.is_empty() && self.dislikes.is_empty()
    }
}

fn remove_item(list: &mut Vec<String>, item: &str) -> bool {
    let before = list.len();
    list.retain(|existing| existing != item);
    list.len() != before
}

/// How many dishes of each category a lunch or dinner should contain.
///
/// A count of 0 skips the category. No upper bound is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealConfig {
    /// Meat dishes requested.
    pub meat_count: usize,
    /// Vegetable dishes requested.
    pub veg_count: usize,
    /// Soups requested.
    pub soup_count: usize,
}

impl Default for MealConfig {
    fn default() -> Self {
        Self {
            meat_count: DEFAULT_DISHES_PER_CATEGORY,
            veg_count: DEFAULT_DISHES_PER_CATEGORY,
            soup_count: DEFAULT_DISHES_PER_CATEGORY,
        }
    }
}

impl MealConfig {
    /// Creates a config from per-category counts.
    #[must_use]
    pub fn new(meat_count: usize, veg_count: usize, soup_count: usize) -> Self {
        Self {
            meat_count,
            veg_count,
            soup_count,
        }
    }

    /// Per-category counts in meat, veg, soup order.
    #[must_use]
    pub fn counts(&self) -> [(Category, usize); 3] {
        [
            (Category::Meat, self.meat_count),
            (Category::Veg, self.veg_count),
            (Category::Soup, self.soup_count),
        ]
    }

    /// Total dishes requested, saturating at `usize::MAX`.
    #[must_use]
    pub fn total(&self) -> usize {
        self.meat_count
            .saturating_add(self.veg_count)
            .saturating_add(self.soup_count)
    }
}

/// Which meal to recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// One breakfast dish.
    Breakfast,
    /// Meat, veg and soup per [`MealConfig`].
    Lunch,
    /// Same composition rules as lunch.
    Dinner,
}

impl MealType {
    /// Returns the stable string label for display output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    /// Maps a displayed dish slot back to the category used to replace it.
    ///
    /// Lunch and dinner results are laid out meat, then veg, then soup, so
    /// slot `index` falls into the first band whose cumulative count exceeds it.
    #[must_use]
    pub fn slot_category(self, index: usize, config: &MealConfig) -> Category {
        match self {
            Self::Breakfast => Category::Breakfast,
            Self::Lunch | Self::Dinner => {
                if index < config.meat_count {
                    Category::Meat
                } else if index < config.meat_count.saturating_add(config.veg_count) {
                    Category::Veg
                } else {
                    Category::Soup
                }
            }
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "早餐" => Ok(Self::Breakfast),
            "lunch" | "午餐" => Ok(Self::Lunch),
            "dinner" | "晚餐" => Ok(Self::Dinner),
            _ => Err(ParseLabelError::meal_type(s)),
        }
    }
}
