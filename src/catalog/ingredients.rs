//! Common-ingredient vocabulary used to seed preference suggestions.

use rand::Rng;
use rand::seq::SliceRandom;

/// Ingredients offered as like/dislike suggestion chips.
pub const COMMON_INGREDIENTS: &[&str] = &[
    "鸡蛋", "番茄", "土豆", "牛肉", "猪肉", "鸡肉", "排骨", "虾", "鱼", "豆腐", "青椒", "茄子",
    "白菜", "包菜", "西兰花", "黄瓜", "胡萝卜", "香菇", "木耳", "玉米", "南瓜", "冬瓜", "海带",
    "芹菜", "韭菜", "洋葱", "香菜", "葱", "姜", "蒜", "辣椒", "花椒", "醋", "糖",
];

/// Picks up to `count` random suggestions that are not in `exclude`.
///
/// Callers pass the user's current likes and dislikes as `exclude` so chips
/// never offer something already chosen.
pub fn suggest_ingredients<R: Rng + ?Sized>(
    count: usize,
    exclude: &[String],
    rng: &mut R,
) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = COMMON_INGREDIENTS
        .iter()
        .copied()
        .filter(|item| !exclude.iter().any(|e| e == item))
        .collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_common_ingredients_are_unique() {
        let unique: HashSet<_> = COMMON_INGREDIENTS.iter().collect();
        assert_eq!(unique.len(), COMMON_INGREDIENTS.len());
    }

    #[test]
    fn test_suggest_respects_count_and_exclusions() {
        let mut rng = StdRng::seed_from_u64(7);
        let exclude = vec!["鸡蛋".to_string(), "香菜".to_string()];
        for _ in 0..50 {
            let picks = suggest_ingredients(6, &exclude, &mut rng);
            assert_eq!(picks.len(), 6);
            assert!(!picks.contains(&"鸡蛋"));
            assert!(!picks.contains(&"香菜"));
            let unique: HashSet<_> = picks.iter().collect();
            assert_eq!(unique.len(), 6, "suggestions should not repeat");
        }
    }

    #[test]
    fn test_suggest_caps_at_pool_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let picks = suggest_ingredients(1000, &[], &mut rng);
        assert_eq!(picks.len(), COMMON_INGREDIENTS.len());
    }
}
