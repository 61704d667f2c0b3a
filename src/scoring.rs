//! Multi-criteria restaurant score.
//!
//! The score is an unweighted sum of five terms. Higher is better, which is
//! the opposite of the minimization convention used by most optimizers; the
//! search strategies in this crate all maximize it directly.
//!
//! | Term | Formula | Range |
//! |---|---|---|
//! | cost | `max(0, (max_budget - cost) / max_budget)` | 0..=1 |
//! | time | `max(0, (max_time - travel_time) / max_time)` | 0..=1 |
//! | distance | `max(0, (40 - km) / 40)` | 0..=1 |
//! | rating | raw rating, unscaled | usually 0..=5 |
//! | reviews | `min(1, review_count / 5)` | 0..=1 |

use crate::geo::distance_with;
use crate::model::{Restaurant, SelectionConstraints};

/// Distance at which the distance term reaches zero.
pub const DISTANCE_HORIZON_KM: f64 = 40.0;

/// Review count at which the reviews term saturates.
pub const REVIEW_SATURATION: f64 = 5.0;

/// The individual terms of a restaurant's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Reward for staying under budget.
    pub cost: f64,
    /// Reward for arriving quickly.
    pub time: f64,
    /// Reward for proximity to the diner.
    pub distance: f64,
    /// Raw rating.
    pub rating: f64,
    /// Reward for having a handful of reviews.
    pub reviews: f64,
}

impl ScoreBreakdown {
    /// Computes every term for `restaurant` under `constraints`.
    ///
    /// Requires `max_budget > 0` and `max_time_minutes > 0`; see
    /// [`SelectionConstraints::validate`].
    pub fn compute(restaurant: &Restaurant, constraints: &SelectionConstraints) -> Self {
        debug_assert!(constraints.max_budget > 0.0 && constraints.max_time_minutes > 0.0);

        let cost = ((constraints.max_budget - f64::from(restaurant.cost)) / constraints.max_budget)
            .max(0.0);
        let time = ((constraints.max_time_minutes - f64::from(restaurant.travel_time_minutes))
            / constraints.max_time_minutes)
            .max(0.0);

        let km = distance_with(
            constraints.distance_formula,
            constraints.latitude,
            constraints.longitude,
            restaurant.latitude,
            restaurant.longitude,
        );
        let distance = ((DISTANCE_HORIZON_KM - km) / DISTANCE_HORIZON_KM).max(0.0);

        let reviews = (f64::from(restaurant.review_count) / REVIEW_SATURATION).min(1.0);

        Self {
            cost,
            time,
            distance,
            rating: restaurant.rating,
            reviews,
        }
    }

    /// Sum of all terms.
    pub fn total(&self) -> f64 {
        self.cost + self.time + self.distance + self.rating + self.reviews
    }
}

/// Scores a restaurant under the given constraints.
///
/// Callers must have validated `constraints` (positive budget and time);
/// the public search functions do this before scoring anything.
///
/// # Examples
///
/// ```
/// use dine_select::model::{Restaurant, SelectionConstraints};
/// use dine_select::scoring::score;
///
/// let c = SelectionConstraints::new("Cafe", 100.0, 30.0, 0.0, 0.0);
/// let r = Restaurant::new("Corner", ["Cafe"])
///     .with_cost(50)
///     .with_travel_time(15)
///     .with_rating(4.0)
///     .with_reviews(10);
/// // 0.5 cost + 0.5 time + 1.0 distance + 4.0 rating + 1.0 reviews
/// assert!((score(&r, &c) - 7.0).abs() < 1e-12);
/// ```
pub fn score(restaurant: &Restaurant, constraints: &SelectionConstraints) -> f64 {
    ScoreBreakdown::compute(restaurant, constraints).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::DistanceFormula;
    use proptest::prelude::*;

    fn base() -> Restaurant {
        Restaurant::new("Base", ["Italian"])
            .with_cost(100)
            .with_reviews(10)
            .with_rating(4.5)
            .with_location(39.90, 32.85)
            .with_travel_time(20)
    }

    fn constraints() -> SelectionConstraints {
        SelectionConstraints::new("Italian", 200.0, 30.0, 39.888, 32.827)
    }

    #[test]
    fn test_breakdown_terms() {
        let b = ScoreBreakdown::compute(&base(), &constraints());
        assert!((b.cost - 0.5).abs() < 1e-12);
        assert!((b.time - 1.0 / 3.0).abs() < 1e-12);
        // ~2.37 km away
        assert!((b.distance - (40.0 - 2.372894) / 40.0).abs() < 1e-6);
        assert_eq!(b.rating, 4.5);
        assert_eq!(b.reviews, 1.0);
        assert!((b.total() - score(&base(), &constraints())).abs() < 1e-15);
    }

    #[test]
    fn test_over_budget_and_time_clamp_to_zero() {
        let r = base().with_cost(300).with_travel_time(50);
        let b = ScoreBreakdown::compute(&r, &constraints());
        assert_eq!(b.cost, 0.0);
        assert_eq!(b.time, 0.0);
    }

    #[test]
    fn test_far_away_distance_zero() {
        let r = base().with_location(41.0082, 28.9784);
        let b = ScoreBreakdown::compute(&r, &constraints());
        assert_eq!(b.distance, 0.0);
    }

    #[test]
    fn test_reviews_saturate() {
        let c = constraints();
        let reviews = |n| ScoreBreakdown::compute(&base().with_reviews(n), &c).reviews;
        assert_eq!(reviews(0), 0.0);
        assert!((reviews(2) - 0.4).abs() < 1e-12);
        assert_eq!(reviews(5), 1.0);
        assert_eq!(reviews(5000), 1.0);
    }

    #[test]
    fn test_rating_unscaled() {
        let c = constraints();
        let low = score(&base().with_rating(1.0), &c);
        let high = score(&base().with_rating(5.0), &c);
        assert!((high - low - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_legacy_formula_changes_distance_term() {
        let legacy = constraints().with_distance_formula(DistanceFormula::Legacy);
        let b = ScoreBreakdown::compute(&base(), &legacy);
        // legacy formula puts the fixture ~600 km away
        assert_eq!(b.distance, 0.0);
    }

    proptest! {
        #[test]
        fn prop_cost_score_monotone(cost in 0u32..400, step in 1u32..50) {
            let c = constraints();
            let a = ScoreBreakdown::compute(&base().with_cost(cost), &c).cost;
            let b = ScoreBreakdown::compute(&base().with_cost(cost + step), &c).cost;
            prop_assert!(a >= 0.0 && b >= 0.0);
            if f64::from(cost) < c.max_budget {
                prop_assert!(b < a);
            } else {
                prop_assert_eq!(a, 0.0);
                prop_assert_eq!(b, 0.0);
            }
        }

        #[test]
        fn prop_terms_non_negative(
            cost in 0u32..10_000,
            time in 0u32..500,
            reviews in 0u32..10_000,
            lat in -90.0f64..90.0,
            lon in -180.0f64..180.0,
        ) {
            let r = base()
                .with_cost(cost)
                .with_travel_time(time)
                .with_reviews(reviews)
                .with_location(lat, lon);
            let b = ScoreBreakdown::compute(&r, &constraints());
            prop_assert!(b.cost >= 0.0 && b.cost <= 1.0);
            prop_assert!(b.time >= 0.0 && b.time <= 1.0);
            prop_assert!(b.distance >= 0.0 && b.distance <= 1.0);
            prop_assert!(b.reviews >= 0.0 && b.reviews <= 1.0);
        }
    }
}
