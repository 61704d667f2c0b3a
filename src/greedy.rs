//! Greedy single-pass selection.

use crate::error::Result;
use crate::model::{Restaurant, SelectionConstraints};
use crate::scoring::score;

/// Returns the highest-scoring restaurant that serves the requested cuisine.
///
/// Budget and time ceilings only shape the score here; they do not filter.
/// Ties go to the first record encountered. Returns `Ok(None)` when no
/// record serves the cuisine.
///
/// # Errors
///
/// [`SelectError::InvalidBudget`](crate::error::SelectError::InvalidBudget) or
/// [`SelectError::InvalidTime`](crate::error::SelectError::InvalidTime) if the
/// constraints fail validation.
///
/// # Examples
///
/// ```
/// use dine_select::greedy::greedy_search;
/// use dine_select::model::{Restaurant, SelectionConstraints};
///
/// let catalog = vec![
///     Restaurant::new("Slow", ["Thai"]).with_travel_time(40),
///     Restaurant::new("Fast", ["Thai"]).with_travel_time(5),
///     Restaurant::new("Elsewhere", ["Greek"]),
/// ];
/// let c = SelectionConstraints::new("Thai", 100.0, 45.0, 0.0, 0.0);
///
/// let best = greedy_search(&catalog, &c).unwrap();
/// assert_eq!(best.map(|r| r.name.as_str()), Some("Fast"));
/// ```
pub fn greedy_search<'a>(
    restaurants: &'a [Restaurant],
    constraints: &SelectionConstraints,
) -> Result<Option<&'a Restaurant>> {
    constraints.validate()?;

    let mut best: Option<(&Restaurant, f64)> = None;
    for restaurant in restaurants.iter().filter(|r| r.serves(&constraints.cuisine)) {
        let s = score(restaurant, constraints);
        match best {
            Some((_, best_score)) if s <= best_score => {}
            _ => best = Some((restaurant, s)),
        }
    }

    if let Some((r, s)) = best {
        tracing::trace!(name = %r.name, score = s, "greedy pick");
    }
    Ok(best.map(|(r, _)| r))
}
