//! Top-N ranking by score.
//!
//! Every restaurant is scored once, then ordered by descending score with a
//! stable sort so equal scores keep their input order. No cuisine filtering
//! happens here; pass a pre-filtered slice (see
//! [`catalog::filter_by_cuisine`](crate::catalog::filter_by_cuisine)) if
//! needed.

use crate::error::Result;
use crate::model::{Restaurant, SelectionConstraints};
use crate::scoring::score;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ranks all restaurants, best first.
///
/// Returns `(index, score)` pairs where `index` points into `restaurants`.
///
/// # Errors
///
/// Fails if `constraints` does not validate.
pub fn rank_scored(
    restaurants: &[Restaurant],
    constraints: &SelectionConstraints,
) -> Result<Vec<(usize, f64)>> {
    constraints.validate()?;

    #[cfg(feature = "parallel")]
    let scores: Vec<f64> = restaurants
        .par_iter()
        .map(|r| score(r, constraints))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let scores: Vec<f64> = restaurants.iter().map(|r| score(r, constraints)).collect();

    let mut ranked: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
    // stable: ties keep input order
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    tracing::trace!(count = ranked.len(), "ranked restaurants");
    Ok(ranked)
}

/// Returns the `n` highest-scoring restaurants in descending score order.
///
/// The result has `min(n, restaurants.len())` entries.
///
/// # Examples
///
/// ```
/// use dine_select::model::{Restaurant, SelectionConstraints};
/// use dine_select::ranking::top_n;
///
/// let catalog = vec![
///     Restaurant::new("Okay", ["Cafe"]).with_rating(3.0),
///     Restaurant::new("Great", ["Cafe"]).with_rating(4.9),
///     Restaurant::new("Good", ["Cafe"]).with_rating(4.1),
/// ];
/// let c = SelectionConstraints::new("Cafe", 100.0, 30.0, 0.0, 0.0);
///
/// let names: Vec<_> = top_n(&catalog, 2, &c)
///     .unwrap()
///     .into_iter()
///     .map(|r| r.name.as_str())
///     .collect();
/// assert_eq!(names, ["Great", "Good"]);
/// ```
pub fn top_n<'a>(
    restaurants: &'a [Restaurant],
    n: usize,
    constraints: &SelectionConstraints,
) -> Result<Vec<&'a Restaurant>> {
    Ok(rank_scored(restaurants, constraints)?
        .into_iter()
        .take(n)
        .map(|(i, _)| &restaurants[i])
        .collect())
}
