//! Exclusion-aware candidate sampling.
//!
//! [`sample`] draws `count` recipes from one category in two stages: rank
//! by score, then shuffle within a band of comparably good candidates. This
//! keeps variety between calls while respecting vetoes and preferences.
//!
//! # Algorithm
//!
//! 1. Split the catalog into fresh (not excluded) and stale (excluded) recipes.
//! 2. If fresh recipes are too few, top up with randomly chosen stale ones.
//! 3. Score every candidate and drop vetoed ones.
//! 4. If survivors are too few, shuffle the unscored candidates and take
//!    `count`; quantity wins over preference.
//! 5. Otherwise rank survivors and build a pool: high scorers if there are
//!    enough of them, else the top `max(count, ceil(pool_fraction * n))`.
//! 6. Shuffle the pool and take `count`.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, warn};

use super::scoring::{ScoringWeights, score};
use crate::catalog::Recipe;
use crate::preferences::UserPreferences;

/// Samples `count` recipes from `catalog`.
///
/// Returns exactly `min(count, catalog.len())` recipes. Excluded names are
/// avoided while enough fresh recipes exist; disliked recipes are avoided
/// while enough non-vetoed candidates exist. Output order is random.
#[instrument(
    skip(catalog, preferences, excluded, weights, rng),
    fields(catalog = catalog.len(), excluded = excluded.len())
)]
pub fn sample<'a, R: Rng + ?Sized>(
    catalog: &'a [Recipe],
    preferences: &UserPreferences,
    count: usize,
    excluded: &[String],
    weights: &ScoringWeights,
    rng: &mut R,
) -> Vec<&'a Recipe> {
    if count == 0 || catalog.is_empty() {
        return Vec::new();
    }

    let excluded: HashSet<&str> = excluded.iter().map(String::as_str).collect();
    let (mut candidates, mut stale): (Vec<&Recipe>, Vec<&Recipe>) = catalog
        .iter()
        .partition(|r| !excluded.contains(r.dish_name.as_str()));

    if candidates.len() < count {
        let missing = count - candidates.len();
        debug!(
            fresh = candidates.len(),
            stale = stale.len(),
            missing,
            "fresh pool exhausted, reusing excluded dishes"
        );
        stale.shuffle(rng);
        candidates.extend(stale.into_iter().take(missing));
    }

    let mut scored: Vec<(&Recipe, f64)> = candidates
        .iter()
        .map(|&r| (r, score(r, preferences, None, weights, rng)))
        .filter(|(_, s)| *s > f64::NEG_INFINITY)
        .collect();

    if scored.len() < count {
        warn!(
            survivors = scored.len(),
            count, "too few dishes pass dislikes, ignoring preferences"
        );
        candidates.shuffle(rng);
        candidates.truncate(count);
        return candidates;
    }

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let high_scorers = scored
        .iter()
        .take_while(|(_, s)| *s > weights.high_score_threshold)
        .count();
    let pool_size = if high_scorers >= count {
        high_scorers
    } else {
        pool_size(count, scored.len(), weights.pool_fraction)
    };
    debug!(
        scored = scored.len(),
        high_scorers, pool_size, "selection pool built"
    );

    let mut pool: Vec<&Recipe> = scored.into_iter().take(pool_size).map(|(r, _)| r).collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

/// Widened pool size: `max(count, ceil(fraction * total))`, capped at `total`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn pool_size(count: usize, total: usize, fraction: f64) -> usize {
    let widened = (fraction.clamp(0.0, 1.0) * total as f64).ceil() as usize;
    count.max(widened).min(total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn dish(name: &str, ingredients: &[&str]) -> Recipe {
        Recipe::new(name, "", ingredients, &[])
    }

    fn menu() -> Vec<Recipe> {
        vec![
            dish("红烧肉", &["五花肉 500克", "冰糖 30克"]),
            dish("宫保鸡丁", &["鸡胸肉 300克", "花生米 50克", "干辣椒 10个"]),
            dish("青椒肉丝", &["猪里脊 200克", "青椒 3个"]),
            dish("糖醋排骨", &["排骨 500克", "白糖 3勺"]),
            dish("土豆炖牛肉", &["牛腩 500克", "土豆 2个"]),
            dish("可乐鸡翅", &["鸡翅中 10个", "可乐 1罐"]),
            dish("清蒸鲈鱼", &["鲈鱼 1条", "姜丝 适量"]),
            dish("小炒黄牛肉", &["黄牛肉 300克", "小米辣 5个"]),
        ]
    }

    fn names(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.dish_name.clone()).collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_zero_count_returns_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let dishes = menu();
        let picked = sample(&dishes, &UserPreferences::default(), 0, &[], &ScoringWeights::default(), &mut rng);
        assert!(picked.is_empty());
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = sample(&[], &UserPreferences::default(), 3, &[], &ScoringWeights::default(), &mut rng);
        assert!(picked.is_empty());
    }

    #[test]
    fn test_count_invariant_for_every_size() {
        let catalog = menu();
        let weights = ScoringWeights::default();
        let mut rng = StdRng::seed_from_u64(2);
        for count in 1..=catalog.len() + 3 {
            for _ in 0..20 {
                let picked = sample(&catalog, &UserPreferences::default(), count, &[], &weights, &mut rng);
                assert_eq!(picked.len(), count.min(catalog.len()));
                let unique: HashSet<_> = names(&picked).into_iter().collect();
                assert_eq!(unique.len(), picked.len(), "no dish picked twice");
            }
        }
    }

    #[test]
    fn test_excluded_names_avoided_while_fresh_remain() {
        let catalog = menu();
        let excluded = strings(&["红烧肉", "宫保鸡丁", "青椒肉丝"]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let picked = sample(&catalog, &UserPreferences::default(), 5, &excluded, &ScoringWeights::default(), &mut rng);
            assert_eq!(picked.len(), 5);
            assert!(picked.iter().all(|r| !excluded.contains(&r.dish_name)));
        }
    }

    #[test]
    fn test_stale_top_up_when_fresh_exhausted() {
        let catalog = menu();
        let excluded: Vec<String> = catalog.iter().skip(2).map(|r| r.dish_name.clone()).collect();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let picked = sample(&catalog, &UserPreferences::default(), 4, &excluded, &ScoringWeights::default(), &mut rng);
            let picked_names = names(&picked);
            assert_eq!(picked.len(), 4);
            assert!(picked_names.contains(&"红烧肉".to_string()));
            assert!(picked_names.contains(&"宫保鸡丁".to_string()));
        }
    }

    #[test]
    fn test_vetoed_dish_never_picked_when_alternatives_exist() {
        let catalog = menu();
        let prefs = UserPreferences::new(vec![], strings(&["牛"]));
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let picked = sample(&catalog, &prefs, 3, &[], &ScoringWeights::default(), &mut rng);
            assert!(picked.iter().all(|r| !r.mentions("牛")));
        }
    }

    #[test]
    fn test_all_vetoed_falls_back_to_shuffle() {
        let catalog = menu();
        let prefs = UserPreferences::new(vec![], strings(&["克", "个", "条", "罐"]));
        let mut rng = StdRng::seed_from_u64(6);
        let picked = sample(&catalog, &prefs, 2, &[], &ScoringWeights::default(), &mut rng);
        assert_eq!(picked.len(), 2, "liveness beats preference purity");
    }

    #[test]
    fn test_liked_dishes_dominate_with_disjoint_weights() {
        let catalog = menu();
        let prefs = UserPreferences::new(strings(&["牛"]), vec![]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let picked = sample(&catalog, &prefs, 2, &[], &ScoringWeights::disjoint(), &mut rng);
            assert!(
                picked.iter().all(|r| r.mentions("牛")),
                "both beef dishes should win: {:?}",
                names(&picked)
            );
        }
    }

    #[test]
    fn test_selection_varies_across_calls() {
        let catalog = menu();
        let mut rng = StdRng::seed_from_u64(8);
        let seen: HashSet<String> = (0..100)
            .flat_map(|_| names(&sample(&catalog, &UserPreferences::default(), 1, &[], &ScoringWeights::default(), &mut rng)))
            .collect();
        assert!(seen.len() > 1, "sampling should not always return the top scorer");
    }

    #[test]
    fn test_same_seed_same_result() {
        let catalog = menu();
        let prefs = UserPreferences::new(strings(&["鸡"]), vec![]);
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            names(&sample(&catalog, &prefs, 3, &[], &ScoringWeights::default(), &mut rng))
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_pool_size_widening() {
        assert_eq!(pool_size(1, 10, 0.6), 6);
        assert_eq!(pool_size(1, 9, 0.6), 6, "ceil(5.4) is 6");
        assert_eq!(pool_size(8, 10, 0.6), 8);
        assert_eq!(pool_size(3, 2, 0.6), 2);
        assert_eq!(pool_size(1, 10, 2.0), 10);
    }
}
