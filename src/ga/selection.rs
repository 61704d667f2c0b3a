//! Survivor selection.
//!
//! Truncation selection: the top half of the population by score (rounded
//! up) survives, provided its score is strictly positive. Shortfalls below
//! half (rounded down) are refilled with uniform draws (with replacement)
//! from the feasible set.

use crate::model::Restaurant;
use rand::Rng;

/// Number of members kept by [`truncate`] for a population of `population_size`.
///
/// Rounds up, so odd populations keep their upper half including the middle
/// member. The refill target stays at `population_size / 2`.
pub(crate) fn survivor_count(population_size: usize) -> usize {
    population_size.div_ceil(2)
}

/// Keeps up to `keep` of the highest-scoring members with a positive score.
///
/// Survivors come out in ascending score order; equal scores keep their
/// population order.
///
/// # Panics
/// Panics if `population` and `scores` differ in length.
pub(crate) fn truncate(
    population: &[Restaurant],
    scores: &[f64],
    keep: usize,
) -> Vec<Restaurant> {
    assert_eq!(
        population.len(),
        scores.len(),
        "every population member needs a score"
    );

    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| {
        scores[a]
            .partial_cmp(&scores[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let start = order.len().saturating_sub(keep);
    order[start..]
        .iter()
        .filter(|&&i| scores[i] > 0.0)
        .map(|&i| population[i].clone())
        .collect()
}

/// Tops `survivors` up to `target` with uniform draws from `feasible`.
///
/// Does nothing if `feasible` is empty.
pub(crate) fn refill<R: Rng>(
    survivors: &mut Vec<Restaurant>,
    feasible: &[&Restaurant],
    target: usize,
    rng: &mut R,
) {
    if feasible.is_empty() {
        return;
    }
    while survivors.len() < target {
        let pick = feasible[rng.random_range(0..feasible.len())];
        survivors.push(pick.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn named(names: &[&str]) -> Vec<Restaurant> {
        names
            .iter()
            .map(|n| Restaurant::new(*n, ["Cafe"]).with_external_id(*n))
            .collect()
    }

    fn names(rs: &[Restaurant]) -> Vec<&str> {
        rs.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_truncate_keeps_top_ascending() {
        let pop = named(&["a", "b", "c", "d"]);
        let kept = truncate(&pop, &[3.0, 1.0, 4.0, 2.0], 2);
        assert_eq!(names(&kept), vec!["a", "c"]);
    }

    #[test]
    fn test_truncate_drops_non_positive() {
        let pop = named(&["a", "b", "c", "d"]);
        let kept = truncate(&pop, &[0.0, -1.0, 5.0, 0.0], 3);
        assert_eq!(names(&kept), vec!["c"]);
    }

    #[test]
    fn test_truncate_ties_keep_order() {
        let pop = named(&["a", "b", "c"]);
        let kept = truncate(&pop, &[2.0, 2.0, 2.0], 2);
        assert_eq!(names(&kept), vec!["b", "c"]);
    }

    #[test]
    fn test_survivor_count_rounds_up() {
        assert_eq!(survivor_count(1), 1);
        assert_eq!(survivor_count(3), 2);
        assert_eq!(survivor_count(20), 10);

        let pop = named(&["a", "b", "c"]);
        let kept = truncate(&pop, &[1.0, 2.0, 3.0], survivor_count(3));
        assert_eq!(names(&kept), vec!["b", "c"]);
    }

    #[test]
    fn test_truncate_keep_zero_and_oversized() {
        let pop = named(&["a", "b"]);
        assert!(truncate(&pop, &[1.0, 2.0], 0).is_empty());
        assert_eq!(truncate(&pop, &[1.0, 2.0], 10).len(), 2);
    }

    #[test]
    #[should_panic(expected = "every population member needs a score")]
    fn test_truncate_length_mismatch_panics() {
        let pop = named(&["a", "b"]);
        truncate(&pop, &[1.0], 1);
    }

    #[test]
    fn test_refill_reaches_target_from_feasible() {
        let pool = named(&["x", "y"]);
        let feasible: Vec<&Restaurant> = pool.iter().collect();
        let mut rng = StdRng::seed_from_u64(42);

        let mut survivors = named(&["a"]);
        refill(&mut survivors, &feasible, 5, &mut rng);

        assert_eq!(survivors.len(), 5);
        assert_eq!(survivors[0].name, "a");
        assert!(survivors[1..].iter().all(|r| r.name == "x" || r.name == "y"));
    }

    #[test]
    fn test_refill_noop_when_full_or_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut survivors = named(&["a", "b"]);
        refill(&mut survivors, &[], 5, &mut rng);
        assert_eq!(survivors.len(), 2);

        let pool = named(&["x"]);
        let feasible: Vec<&Restaurant> = pool.iter().collect();
        refill(&mut survivors, &feasible, 1, &mut rng);
        assert_eq!(survivors.len(), 2);
    }
}
