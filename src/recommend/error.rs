//! Error types for recommendation requests.

use thiserror::Error;

use crate::catalog::Category;
use crate::preferences::MealType;

/// Errors surfaced to callers when no dish can be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// The requested category has no recipes at all
    #[error("no {category} dishes in the catalog\n  Suggestion: Add recipes to this category or pick another one")]
    EmptyCategory {
        /// Category that was sampled
        category: Category,
    },

    /// A meal request produced no dishes
    #[error("no dishes could be recommended for {meal_type}\n  Suggestion: Request at least one dish or try again")]
    NoRecommendations {
        /// Meal that was requested
        meal_type: MealType,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_category_message() {
        let err = RecommendError::EmptyCategory {
            category: Category::Soup,
        };
        let msg = err.to_string();
        assert!(msg.contains("soup"));
        assert!(msg.contains("Suggestion"));
    }

    #[test]
    fn test_no_recommendations_message() {
        let err = RecommendError::NoRecommendations {
            meal_type: MealType::Dinner,
        };
        assert!(err.to_string().contains("dinner"));
    }
}
