//! Integration tests for catalog search.
//!
//! These tests query the built-in catalog and verify AND semantics across
//! terms, typo tolerance, and stable ordering.

use mealpick_core::{Catalog, Recipe, SearchIndex, is_fuzzy_match, tokenize_query};

fn names(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.dish_name.clone()).collect()
}

/// Test that two terms match only dishes containing both.
#[test]
fn test_egg_and_tomato_finds_exactly_two_dishes() {
    let catalog = Catalog::builtin().unwrap();
    let index = SearchIndex::new(&catalog);
    assert_eq!(
        names(&index.search("鸡蛋 番茄")),
        vec!["番茄鸡蛋面", "番茄鸡蛋汤"]
    );
}

/// Test that term order does not change the result.
#[test]
fn test_term_order_is_irrelevant() {
    let catalog = Catalog::builtin().unwrap();
    let index = SearchIndex::new(&catalog);
    assert_eq!(index.search("鸡蛋 番茄"), index.search("番茄   鸡蛋"));
}

/// Test that blank queries return nothing.
#[test]
fn test_blank_query_is_empty() {
    let catalog = Catalog::builtin().unwrap();
    let index = SearchIndex::new(&catalog);
    assert!(index.search("").is_empty());
    assert!(index.search("   ").is_empty());
}

/// Test that repeated searches return identical results.
#[test]
fn test_search_is_idempotent() {
    let catalog = Catalog::builtin().unwrap();
    let index = SearchIndex::new(&catalog);
    for query in ["土豆", "排骨", "鸡蛋 番茄", "西红士"] {
        assert_eq!(index.search(query), index.search(query), "query {query}");
    }
}

/// Test that a one-character typo finds the dish through a short ingredient.
#[test]
fn test_typo_query_finds_tomato_egg_stir_fry() {
    let catalog = Catalog::builtin().unwrap();
    let index = SearchIndex::new(&catalog);
    assert_eq!(names(&index.search("西红士")), vec!["西红柿炒蛋"]);
}

/// Test that every hit matches every token on its name or an ingredient.
#[test]
fn test_every_result_matches_every_token() {
    let catalog = Catalog::builtin().unwrap();
    let index = SearchIndex::new(&catalog);
    for query in ["土豆", "排骨 玉米", "豆腐", "牛肉 土豆"] {
        let results = index.search(query);
        assert!(!results.is_empty(), "query {query} found nothing");
        for recipe in results {
            for token in tokenize_query(query) {
                assert!(
                    is_fuzzy_match(&recipe.dish_name, &token)
                        || recipe.ingredients.iter().any(|i| is_fuzzy_match(i, &token)),
                    "{} does not match {token}",
                    recipe.dish_name
                );
            }
        }
    }
}

/// Test that results follow catalog order: breakfast, meat, veg, soup.
#[test]
fn test_results_keep_catalog_order() {
    let catalog = Catalog::builtin().unwrap();
    let index = SearchIndex::new(&catalog);
    let results = index.search("排骨");
    let positions: Vec<usize> = results
        .iter()
        .map(|hit| {
            catalog
                .all()
                .position(|r| r.dish_name == hit.dish_name)
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}
