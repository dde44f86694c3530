//! Multi-term fuzzy search over the whole catalog.
//!
//! A query is split into whitespace-separated tokens. A recipe matches when
//! **every** token fuzzy-matches its dish name or at least one ingredient
//! line (see [`is_fuzzy_match`]). Results keep catalog order and ignore
//! preferences and exclusions.

use tracing::{debug, instrument};

use crate::catalog::{Catalog, Recipe};
use crate::matcher::is_fuzzy_match;

/// Number of results shown as quick suggestions.
pub const SUGGESTION_LIMIT: usize = 6;

/// Lowercases and splits a query on whitespace, dropping empty tokens.
#[must_use]
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Search view over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct SearchIndex<'a> {
    catalog: &'a Catalog,
}

impl<'a> SearchIndex<'a> {
    /// Creates a search view borrowing `catalog`.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Returns every recipe matching all query tokens, in catalog order.
    ///
    /// A blank query returns nothing.
    #[instrument(skip(self))]
    pub fn search(&self, query: &str) -> Vec<&'a Recipe> {
        let tokens = tokenize_query(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let matches: Vec<&Recipe> = self
            .catalog
            .all()
            .filter(|recipe| tokens.iter().all(|token| recipe_matches(recipe, token)))
            .collect();
        debug!(tokens = tokens.len(), matches = matches.len(), "search complete");
        matches
    }

    /// Like [`SearchIndex::search`] but keeps only the first `limit` matches.
    #[must_use]
    pub fn search_limited(&self, query: &str, limit: usize) -> Vec<&'a Recipe> {
        let mut matches = self.search(query);
        matches.truncate(limit);
        matches
    }
}

fn recipe_matches(recipe: &Recipe, token: &str) -> bool {
    is_fuzzy_match(&recipe.dish_name, token)
        || recipe.ingredients.iter().any(|i| is_fuzzy_match(i, token))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Recipe::new("番茄鸡蛋面", "", &["挂面 100克", "番茄 1个", "鸡蛋 1个"], &[])],
            vec![Recipe::new("Kung Pao Chicken", "", &["Chicken 300g", "Peanuts 50g"], &[])],
            vec![
                Recipe::new("西红柿炒蛋", "", &["西红柿", "鸡蛋 3个"], &[]),
                Recipe::new("酸辣土豆丝", "", &["土豆 2个", "干辣椒 3个"], &[]),
            ],
            vec![Recipe::new("番茄鸡蛋汤", "", &["番茄 2个", "鸡蛋 2个"], &[])],
        )
        .unwrap()
    }

    fn names(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.dish_name.clone()).collect()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_runs() {
        assert_eq!(tokenize_query("  Beef\t 土豆\n"), vec!["beef", "土豆"]);
        assert!(tokenize_query("   ").is_empty());
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let catalog = catalog();
        let index = SearchIndex::new(&catalog);
        assert!(index.search("").is_empty());
        assert!(index.search("  \t ").is_empty());
    }

    #[test]
    fn test_tokens_are_and_combined() {
        let catalog = catalog();
        let index = SearchIndex::new(&catalog);
        assert_eq!(names(&index.search("鸡蛋 番茄")), vec!["番茄鸡蛋面", "番茄鸡蛋汤"]);
        assert_eq!(names(&index.search("鸡蛋")).len(), 3);
    }

    #[test]
    fn test_typo_matches_short_ingredient() {
        let catalog = catalog();
        let index = SearchIndex::new(&catalog);
        assert_eq!(names(&index.search("西红士")), vec!["西红柿炒蛋"]);
    }

    #[test]
    fn test_case_insensitive_latin_search() {
        let catalog = catalog();
        let index = SearchIndex::new(&catalog);
        assert_eq!(names(&index.search("PEANUTS")), vec!["Kung Pao Chicken"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = catalog();
        let index = SearchIndex::new(&catalog);
        assert!(index.search("榴莲").is_empty());
    }

    #[test]
    fn test_search_limited_truncates_in_catalog_order() {
        let catalog = catalog();
        let index = SearchIndex::new(&catalog);
        assert_eq!(names(&index.search_limited("鸡蛋", 2)), vec!["番茄鸡蛋面", "西红柿炒蛋"]);
    }
}
