//! Ranker for consolidated filmographies.
//!
//! Orders consolidated records by total film count, descending. The sort is
//! stable, so actors with equal totals keep the first-seen order established
//! during normalization.

use movie_aggregator_shared::{ActorFilmography, RankedList};

/// Rank consolidated entries by `total_films`, descending.
///
/// # Arguments
///
/// * `entries` - Consolidated records in first-seen order
pub fn rank(mut entries: Vec<ActorFilmography>) -> RankedList {
    // sort_by is stable: equal totals retain their first-seen order.
    entries.sort_by(|a, b| b.total_films.cmp(&a.total_films));
    RankedList::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, total: u64) -> ActorFilmography {
        ActorFilmography {
            actor_name: name.to_string(),
            total_films: total,
            films: Vec::new(),
        }
    }

    #[test]
    fn test_rank_orders_by_total_descending() {
        let ranked = rank(vec![entry("A", 1), entry("B", 5), entry("C", 3)]);

        let names: Vec<&str> = ranked.iter().map(|e| e.actor_name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        // "A" was first seen before "B"; equal totals must not reorder them.
        let ranked = rank(vec![entry("A", 5), entry("Z", 9), entry("B", 5)]);

        let names: Vec<&str> = ranked.iter().map(|e| e.actor_name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A", "B"]);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let input = vec![entry("A", 2), entry("B", 2), entry("C", 2), entry("D", 7)];

        let first = rank(input.clone());
        let second = rank(input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rank_empty_input() {
        let ranked = rank(Vec::new());
        assert!(ranked.is_empty());
    }
}
