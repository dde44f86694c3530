//! Fuzzy string matching with single-typo tolerance.
//!
//! Matching is two-stage:
//! 1. Case-folded substring containment (the fast, common path).
//! 2. For queries of at least [`MIN_FUZZY_QUERY_CHARS`] characters, the
//!    whole-string edit distance between target and query must be at most
//!    [`MAX_EDIT_DISTANCE`].
//!
//! The distance compares the entire target with the entire query; there is
//! no sliding window. A short query therefore only fuzzy-matches a target of
//! similar length, e.g. the ingredient `西红柿` for the typo `西红士`, but not
//! the longer dish name `西红柿炒蛋`.

/// Queries shorter than this never fuzzy-match (single characters are too noisy).
pub const MIN_FUZZY_QUERY_CHARS: usize = 2;

/// Maximum edit distance still considered a match.
pub const MAX_EDIT_DISTANCE: usize = 1;

/// Returns true if `query` matches `target` exactly, as a substring, or within one edit.
#[must_use]
pub fn is_fuzzy_match(target: &str, query: &str) -> bool {
    let target = target.to_lowercase();
    let query = query.to_lowercase();

    if target.contains(&query) {
        return true;
    }

    if query.chars().count() >= MIN_FUZZY_QUERY_CHARS {
        return edit_distance(&target, &query) <= MAX_EDIT_DISTANCE;
    }

    false
}

/// Levenshtein distance over Unicode scalar values.
///
/// Insertions, deletions and substitutions each cost 1.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}
