//! Core record types.

use crate::error::{Result, SelectError};
use crate::geo::DistanceFormula;

/// A restaurant as consumed by the selection engine.
///
/// Every field is always populated. Listings with missing data are rejected
/// at the catalog boundary (see [`catalog`](crate::catalog)) before they
/// reach scoring or search.
///
/// # Examples
///
/// ```
/// use dine_select::model::Restaurant;
///
/// let r = Restaurant::new("Trattoria", ["Italian", "Pizza"])
///     .with_cost(120)
///     .with_rating(4.4)
///     .with_travel_time(15);
/// assert!(r.serves("Pizza"));
/// assert!(!r.serves("Sushi"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Restaurant {
    /// Display name.
    pub name: String,

    /// Cuisine tags. Matching is by membership; order and duplicates are
    /// irrelevant.
    pub cuisines: Vec<String>,

    /// Estimated meal cost in minor currency units.
    pub cost: u32,

    /// Number of reviews.
    pub review_count: u32,

    /// Average rating, typically 0.0 to 5.0.
    pub rating: f64,

    /// Latitude in degrees.
    pub latitude: f64,

    /// Longitude in degrees.
    pub longitude: f64,

    /// Precomputed travel time from the reference location, in minutes.
    pub travel_time_minutes: u32,

    /// Opaque identifier for the detail-enrichment service.
    ///
    /// Empty for synthetic candidates produced by crossover.
    pub external_id: String,
}

impl Restaurant {
    /// Creates a restaurant with the given name and cuisines; every numeric
    /// field starts at zero and `external_id` is empty.
    pub fn new<I, S>(name: impl Into<String>, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            cuisines: cuisines.into_iter().map(Into::into).collect(),
            cost: 0,
            review_count: 0,
            rating: 0.0,
            latitude: 0.0,
            longitude: 0.0,
            travel_time_minutes: 0,
            external_id: String::new(),
        }
    }

    /// Sets the cost.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Sets the review count.
    pub fn with_reviews(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }

    /// Sets the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the coordinates in degrees.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Sets the travel time in minutes.
    pub fn with_travel_time(mut self, minutes: u32) -> Self {
        self.travel_time_minutes = minutes;
        self
    }

    /// Sets the external identifier.
    pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = id.into();
        self
    }

    /// Returns `true` if `cuisine` appears among this restaurant's tags.
    pub fn serves(&self, cuisine: &str) -> bool {
        self.cuisines.iter().any(|c| c == cuisine)
    }

    /// Returns `true` if this record was bred by the genetic optimizer
    /// rather than loaded from a catalog.
    pub fn is_synthetic(&self) -> bool {
        self.external_id.is_empty()
    }
}

/// Per-query selection constraints.
///
/// The engine never mutates a constraints value; relaxation in the genetic
/// optimizer produces a new one via [`relaxed`](Self::relaxed).
///
/// # Examples
///
/// ```
/// use dine_select::model::SelectionConstraints;
///
/// let c = SelectionConstraints::new("Italian", 200.0, 30.0, 39.888, 32.827);
/// assert!(c.validate().is_ok());
///
/// let wider = c.relaxed(50.0, 10.0);
/// assert_eq!(wider.max_budget, 250.0);
/// assert_eq!(wider.max_time_minutes, 40.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SelectionConstraints {
    /// Requested cuisine tag.
    pub cuisine: String,

    /// Budget ceiling. Must be positive.
    pub max_budget: f64,

    /// Travel time ceiling in minutes. Must be positive.
    pub max_time_minutes: f64,

    /// Diner latitude in degrees.
    pub latitude: f64,

    /// Diner longitude in degrees.
    pub longitude: f64,

    /// Great-circle formula used by the distance sub-score.
    #[cfg_attr(feature = "serde", serde(default))]
    pub distance_formula: DistanceFormula,
}

impl SelectionConstraints {
    /// Creates constraints using the default [`DistanceFormula::Haversine`].
    pub fn new(
        cuisine: impl Into<String>,
        max_budget: f64,
        max_time_minutes: f64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            cuisine: cuisine.into(),
            max_budget,
            max_time_minutes,
            latitude,
            longitude,
            distance_formula: DistanceFormula::default(),
        }
    }

    /// Sets the distance formula.
    pub fn with_distance_formula(mut self, formula: DistanceFormula) -> Self {
        self.distance_formula = formula;
        self
    }

    /// Checks the scoring preconditions.
    ///
    /// Budget and time ceilings are divisors in the score, so both must be
    /// positive and finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_budget.is_finite() && self.max_budget > 0.0) {
            return Err(SelectError::InvalidBudget(self.max_budget));
        }
        if !(self.max_time_minutes.is_finite() && self.max_time_minutes > 0.0) {
            return Err(SelectError::InvalidTime(self.max_time_minutes));
        }
        Ok(())
    }

    /// Returns a copy with budget and time ceilings widened by the given steps.
    pub fn relaxed(&self, budget_step: f64, time_step: f64) -> Self {
        Self {
            max_budget: self.max_budget + budget_step,
            max_time_minutes: self.max_time_minutes + time_step,
            ..self.clone()
        }
    }

    /// Returns `true` if `cost` and `travel_time` fit under both ceilings.
    pub fn within_limits(&self, cost: u32, travel_time: u32) -> bool {
        f64::from(cost) <= self.max_budget && f64::from(travel_time) <= self.max_time_minutes
    }

    /// Returns `true` if the restaurant serves the cuisine and fits under
    /// both ceilings.
    pub fn admits(&self, restaurant: &Restaurant) -> bool {
        restaurant.serves(&self.cuisine)
            && self.within_limits(restaurant.cost, restaurant.travel_time_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serves_is_membership() {
        let r = Restaurant::new("Dual", ["Turkish", "Kebab", "Turkish"]);
        assert!(r.serves("Kebab"));
        assert!(r.serves("Turkish"));
        assert!(!r.serves("turkish"));
        assert!(!r.serves(""));
    }

    #[test]
    fn test_synthetic_marker() {
        let real = Restaurant::new("Real", ["Cafe"]).with_external_id("298656");
        let bred = Restaurant::new("Bred", ["Cafe"]);
        assert!(!real.is_synthetic());
        assert!(bred.is_synthetic());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let ok = SelectionConstraints::new("Cafe", 100.0, 20.0, 0.0, 0.0);
        assert!(ok.validate().is_ok());

        let c = SelectionConstraints::new("Cafe", 0.0, 20.0, 0.0, 0.0);
        assert_eq!(c.validate(), Err(SelectError::InvalidBudget(0.0)));

        let c = SelectionConstraints::new("Cafe", 100.0, -5.0, 0.0, 0.0);
        assert_eq!(c.validate(), Err(SelectError::InvalidTime(-5.0)));

        let c = SelectionConstraints::new("Cafe", f64::NAN, 20.0, 0.0, 0.0);
        assert!(matches!(c.validate(), Err(SelectError::InvalidBudget(_))));

        let c = SelectionConstraints::new("Cafe", 100.0, f64::INFINITY, 0.0, 0.0);
        assert!(matches!(c.validate(), Err(SelectError::InvalidTime(_))));
    }

    #[test]
    fn test_relaxed_keeps_other_fields() {
        let c = SelectionConstraints::new("Cafe", 100.0, 20.0, 39.9, 32.8)
            .with_distance_formula(DistanceFormula::Legacy);
        let r = c.relaxed(50.0, 10.0);
        assert_eq!(r.cuisine, "Cafe");
        assert_eq!(r.max_budget, 150.0);
        assert_eq!(r.max_time_minutes, 30.0);
        assert_eq!(r.latitude, 39.9);
        assert_eq!(r.distance_formula, DistanceFormula::Legacy);
        // input untouched
        assert_eq!(c.max_budget, 100.0);
    }

    #[test]
    fn test_admits_boundaries_inclusive() {
        let c = SelectionConstraints::new("Cafe", 100.0, 20.0, 0.0, 0.0);
        let exact = Restaurant::new("Exact", ["Cafe"])
            .with_cost(100)
            .with_travel_time(20);
        let over_cost = exact.clone().with_cost(101);
        let over_time = exact.clone().with_travel_time(21);
        let wrong = Restaurant {
            cuisines: vec!["Bar".into()],
            ..exact.clone()
        };

        assert!(c.admits(&exact));
        assert!(!c.admits(&over_cost));
        assert!(!c.admits(&over_time));
        assert!(!c.admits(&wrong));
    }
}
