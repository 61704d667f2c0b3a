//! One-call recommendation combining both search strategies.

use crate::error::Result;
use crate::ga::{GeneticConfig, GeneticSearch};
use crate::greedy::greedy_search;
use crate::model::{Restaurant, SelectionConstraints};

/// Greedy and genetic picks for the same query.
///
/// With the `serde` feature this serializes as
/// `{"topRestaurantsGreedy": [...], "bestRestaurantGenetic": {...}}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Recommendation {
    /// The greedy pick, or empty if nothing serves the cuisine.
    pub top_restaurants_greedy: Vec<Restaurant>,

    /// The genetic pick, possibly under relaxed constraints.
    pub best_restaurant_genetic: Restaurant,
}

/// Runs the greedy scan and the genetic search over the same catalog.
///
/// # Errors
///
/// Propagates constraint and configuration errors, and the genetic search's
/// [`NoCuisineMatch`](crate::error::SelectError::NoCuisineMatch) /
/// [`RelaxationExhausted`](crate::error::SelectError::RelaxationExhausted).
///
/// # Examples
///
/// ```
/// use dine_select::ga::GeneticConfig;
/// use dine_select::model::{Restaurant, SelectionConstraints};
/// use dine_select::recommend::recommend;
///
/// let catalog = vec![
///     Restaurant::new("Diner", ["American"]).with_cost(150).with_travel_time(25).with_external_id("9"),
/// ];
/// let c = SelectionConstraints::new("American", 200.0, 60.0, 39.888470, 32.827494);
/// let rec = recommend(&catalog, &c, &GeneticConfig::default().with_seed(1)).unwrap();
/// assert_eq!(rec.top_restaurants_greedy[0].name, "Diner");
/// assert_eq!(rec.best_restaurant_genetic.name, "Diner");
/// ```
pub fn recommend(
    restaurants: &[Restaurant],
    constraints: &SelectionConstraints,
    config: &GeneticConfig,
) -> Result<Recommendation> {
    let greedy = greedy_search(restaurants, constraints)?;
    let genetic = GeneticSearch::run(restaurants, constraints, config)?;

    if genetic.relaxations > 0 {
        tracing::debug!(
            relaxations = genetic.relaxations,
            max_budget = genetic.constraints.max_budget,
            max_time = genetic.constraints.max_time_minutes,
            "genetic pick needed relaxed constraints"
        );
    }

    Ok(Recommendation {
        top_restaurants_greedy: greedy.into_iter().cloned().collect(),
        best_restaurant_genetic: genetic.best,
    })
}
