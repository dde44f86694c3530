//! Bounded buffer of recently shown dish names.
//!
//! Callers record every dish they show and pass [`SeenDishes::exclusions_with`]
//! as the exclusion list of the next request. The buffer only keeps the most
//! recent names so small categories never run completely dry.

use std::collections::{HashSet, VecDeque};

use tracing::trace;

/// Default number of names remembered.
pub const DEFAULT_SEEN_CAPACITY: usize = 12;

/// Most recent dish names, oldest first.
#[derive(Debug, Clone)]
pub struct SeenDishes {
    names: VecDeque<String>,
    capacity: usize,
}

impl Default for SeenDishes {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SEEN_CAPACITY)
    }
}

impl SeenDishes {
    /// Creates an empty buffer remembering at most `capacity` names.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends names in order, dropping the oldest beyond capacity.
    pub fn record<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.names.push_back(name.into());
        }
        while self.names.len() > self.capacity {
            if let Some(dropped) = self.names.pop_front() {
                trace!(dish = %dropped, "forgotten");
            }
        }
    }

    /// Recorded names followed by `extra`, deduplicated, first occurrence kept.
    #[must_use]
    pub fn exclusions_with(&self, extra: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        self.names
            .iter()
            .chain(extra)
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect()
    }

    /// Remembered names, oldest first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of remembered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Forgets every name.
    pub fn clear(&mut self) {
        self.names.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_most_recent() {
        let mut seen = SeenDishes::with_capacity(3);
        seen.record(["a", "b"]);
        seen.record(["c", "d"]);
        assert_eq!(seen.names().collect::<Vec<_>>(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_default_capacity_is_twelve() {
        let mut seen = SeenDishes::default();
        seen.record((0..20).map(|i| format!("dish-{i}")));
        assert_eq!(seen.len(), DEFAULT_SEEN_CAPACITY);
        assert_eq!(seen.names().next(), Some("dish-8"));
    }

    #[test]
    fn test_exclusions_with_merges_and_dedupes() {
        let mut seen = SeenDishes::default();
        seen.record(["红烧肉", "紫菜蛋花汤", "红烧肉"]);
        let merged = seen.exclusions_with(&["紫菜蛋花汤".to_string(), "地三鲜".to_string()]);
        assert_eq!(merged, vec!["红烧肉", "紫菜蛋花汤", "地三鲜"]);
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut seen = SeenDishes::default();
        seen.record(["a"]);
        seen.clear();
        assert!(seen.is_empty());
        assert!(seen.exclusions_with(&[]).is_empty());
    }
}
