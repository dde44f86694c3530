//! Integration tests for the recommendation engine.
//!
//! These tests run the scorer, sampler and orchestrator against the built-in
//! catalog and check the invariants that must hold for every random draw.

use std::collections::HashSet;
use std::time::Duration;

use mealpick_core::{
    Catalog, Category, MealConfig, MealType, Pacing, Recommender, ScoringWeights,
    UserPreferences, sample, score,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn builtin() -> Catalog {
    Catalog::builtin().unwrap()
}

fn prefs(likes: &[&str], dislikes: &[&str]) -> UserPreferences {
    UserPreferences::new(
        likes.iter().map(|s| (*s).to_string()).collect(),
        dislikes.iter().map(|s| (*s).to_string()).collect(),
    )
}

/// Test that a disliked ingredient never appears in any sampled dish.
#[test]
fn test_disliked_ingredient_never_sampled() {
    let catalog = builtin();
    let preferences = prefs(&[], &["土豆"]);
    let weights = ScoringWeights::default();
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        for category in Category::ALL {
            let picked = sample(
                catalog.recipes(category),
                &preferences,
                5,
                &[],
                &weights,
                &mut rng,
            );
            assert!(
                picked.iter().all(|recipe| !recipe.mentions("土豆")),
                "seed {seed} picked a potato dish from {category}"
            );
        }
    }
}

/// Test that the sampler returns distinct dishes and never more than requested.
#[test]
fn test_sample_count_and_uniqueness() {
    let catalog = builtin();
    let meat = catalog.recipes(Category::Meat);
    let weights = ScoringWeights::default();
    let mut rng = StdRng::seed_from_u64(3);
    for count in 0..=meat.len() + 2 {
        let picked = sample(meat, &UserPreferences::default(), count, &[], &weights, &mut rng);
        assert_eq!(picked.len(), count.min(meat.len()));
        let names: HashSet<&str> = picked.iter().map(|r| r.dish_name.as_str()).collect();
        assert_eq!(names.len(), picked.len());
    }
}

/// Test that exclusions are honored while enough fresh dishes remain.
#[test]
fn test_exclusions_respected_when_fresh_dishes_suffice() {
    let catalog = builtin();
    let veg = catalog.recipes(Category::Veg);
    let keep: Vec<&str> = veg.iter().take(2).map(|r| r.dish_name.as_str()).collect();
    let excluded: Vec<String> = veg.iter().skip(2).map(|r| r.dish_name.clone()).collect();
    let weights = ScoringWeights::default();

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = sample(veg, &UserPreferences::default(), 2, &excluded, &weights, &mut rng);
        let mut names: Vec<&str> = picked.iter().map(|r| r.dish_name.as_str()).collect();
        names.sort_unstable();
        let mut expected = keep.clone();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }
}

/// Test that excluding a whole category still yields dishes via top-up.
#[test]
fn test_fully_excluded_category_is_topped_up() {
    let catalog = builtin();
    let soup = catalog.recipes(Category::Soup);
    let excluded: Vec<String> = soup.iter().map(|r| r.dish_name.clone()).collect();
    let mut rng = StdRng::seed_from_u64(8);
    let picked = sample(
        soup,
        &UserPreferences::default(),
        2,
        &excluded,
        &ScoringWeights::default(),
        &mut rng,
    );
    assert_eq!(picked.len(), 2);
}

/// Test that liked ingredients raise the chance of being picked.
#[test]
#[allow(clippy::cast_precision_loss)]
fn test_likes_bias_selection() {
    let catalog = builtin();
    let veg = catalog.recipes(Category::Veg);
    let liked: HashSet<&str> = veg
        .iter()
        .filter(|r| r.mentions("土豆"))
        .map(|r| r.dish_name.as_str())
        .collect();
    assert!(!liked.is_empty() && liked.len() < veg.len());

    let preferences = prefs(&["土豆"], &[]);
    let weights = ScoringWeights::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let trials = 1000;
    let hits = (0..trials)
        .filter(|_| {
            let picked = sample(veg, &preferences, 1, &[], &weights, &mut rng);
            liked.contains(picked[0].dish_name.as_str())
        })
        .count();

    let observed = hits as f64 / f64::from(trials);
    let baseline = liked.len() as f64 / veg.len() as f64;
    assert!(
        observed > baseline + 0.15,
        "observed {observed:.2} vs uniform {baseline:.2}"
    );
}

/// Test that in the disjoint regime a liked dish always outscores an unliked one.
#[test]
fn test_disjoint_regime_orders_by_likes() {
    let catalog = builtin();
    let liked = catalog.find("酸辣土豆丝").unwrap();
    let plain = catalog.find("凉拌黄瓜").unwrap();
    let preferences = prefs(&["土豆"], &[]);
    let weights = ScoringWeights::disjoint();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let liked_score = score(liked, &preferences, None, &weights, &mut rng);
        let plain_score = score(plain, &preferences, None, &weights, &mut rng);
        assert!(liked_score > plain_score);
    }
}

/// Test that a dislike vetoes even when a search term and likes match.
#[test]
fn test_veto_beats_search_and_likes() {
    let catalog = builtin();
    let recipe = catalog.find("土豆炖牛肉").unwrap();
    let preferences = prefs(&["牛肉", "土豆"], &["胡萝卜"]);
    let mut rng = StdRng::seed_from_u64(5);
    let value = score(
        recipe,
        &preferences,
        Some("牛肉"),
        &ScoringWeights::default(),
        &mut rng,
    );
    assert_eq!(value, f64::NEG_INFINITY);
}

/// Test that lunch dishes come back grouped meat, veg, soup in slot order.
#[test]
fn test_meal_layout_matches_slot_mapping() {
    let catalog = builtin();
    let recommender = Recommender::new(catalog.clone());
    let config = MealConfig::new(2, 2, 1);
    let mut rng = StdRng::seed_from_u64(77);
    let dishes = recommender
        .recommend_meal(
            MealType::Lunch,
            &UserPreferences::default(),
            Some(&config),
            &[],
            &mut rng,
        )
        .unwrap();
    assert_eq!(dishes.len(), config.total());

    for (slot, dish) in dishes.iter().enumerate() {
        let category = MealType::Lunch.slot_category(slot, &config);
        assert!(
            catalog
                .recipes(category)
                .iter()
                .any(|r| r.dish_name == dish.dish_name),
            "slot {slot} ({}) is not a {category} dish",
            dish.dish_name
        );
    }
}

/// Test that breakfast ignores the meal configuration.
#[test]
fn test_breakfast_is_single_dish() {
    let recommender = Recommender::new(builtin());
    let mut rng = StdRng::seed_from_u64(9);
    let dishes = recommender
        .recommend_meal(
            MealType::Breakfast,
            &UserPreferences::default(),
            Some(&MealConfig::new(3, 3, 3)),
            &[],
            &mut rng,
        )
        .unwrap();
    assert_eq!(dishes.len(), 1);
    assert!(
        recommender
            .catalog()
            .recipes(Category::Breakfast)
            .contains(dishes[0])
    );
}

/// Test that the paced meal call waits before returning decorated dishes.
#[tokio::test(start_paused = true)]
async fn test_generate_recipe_applies_meal_pacing() {
    let recommender = Recommender::new(builtin()).with_pacing(Pacing {
        meal: Duration::from_millis(600),
        single: Duration::from_millis(400),
    });
    let mut rng = StdRng::seed_from_u64(12);
    let started = tokio::time::Instant::now();
    let dishes = recommender
        .generate_recipe(
            MealType::Dinner,
            &UserPreferences::default(),
            None,
            &[],
            &mut rng,
        )
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(600));
    assert_eq!(dishes.len(), 3);
    for dish in &dishes {
        assert!(dish.image_url.contains("&w=800&h=600"));
    }
}

/// Test that a replacement honors the exclusion of the dish being replaced.
#[tokio::test(start_paused = true)]
async fn test_generate_single_side_dish_skips_current_dish() {
    let recommender = Recommender::new(builtin()).with_pacing(Pacing::none());
    let current = vec!["红烧肉".to_string()];
    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let dish = recommender
            .generate_single_side_dish(
                Category::Meat,
                &UserPreferences::default(),
                &current,
                &mut rng,
            )
            .await
            .unwrap();
        assert_ne!(dish.recipe.dish_name, "红烧肉");
    }
}
