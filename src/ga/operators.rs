//! Crossover and mutation on restaurant records.
//!
//! Children are synthetic: they carry blended attributes of two real
//! restaurants and an empty `external_id`, so they can never be mistaken for
//! a catalog entry.

use super::config::GeneticConfig;
use crate::model::Restaurant;
use rand::Rng;

/// Blends two parents into one child.
///
/// - `name` and `cuisines` come from `parent1`.
/// - `cost`, `review_count`, `travel_time_minutes`: floor of the mean.
/// - `rating`, `latitude`, `longitude`: arithmetic mean.
///
/// # Examples
///
/// ```
/// use dine_select::ga::operators::crossover;
/// use dine_select::model::Restaurant;
///
/// let a = Restaurant::new("A", ["Cafe"]).with_cost(101).with_rating(4.0);
/// let b = Restaurant::new("B", ["Bar"]).with_cost(50).with_rating(3.0);
/// let child = crossover(&a, &b);
/// assert_eq!(child.name, "A");
/// assert_eq!(child.cost, 75);
/// assert_eq!(child.rating, 3.5);
/// assert!(child.is_synthetic());
/// ```
pub fn crossover(parent1: &Restaurant, parent2: &Restaurant) -> Restaurant {
    Restaurant {
        name: parent1.name.clone(),
        cuisines: parent1.cuisines.clone(),
        cost: floor_mean(parent1.cost, parent2.cost),
        review_count: floor_mean(parent1.review_count, parent2.review_count),
        rating: (parent1.rating + parent2.rating) / 2.0,
        latitude: (parent1.latitude + parent2.latitude) / 2.0,
        longitude: (parent1.longitude + parent2.longitude) / 2.0,
        travel_time_minutes: floor_mean(parent1.travel_time_minutes, parent2.travel_time_minutes),
        external_id: String::new(),
    }
}

/// With probability `config.mutation_rate`, perturbs cost and travel time.
///
/// Cost moves by a uniform integer in `[-cost_delta, cost_delta]` and is
/// floored at `cost_floor`; travel time likewise with `time_delta` /
/// `time_floor`. Returns `true` if the child was mutated.
pub fn mutate<R: Rng>(child: &mut Restaurant, config: &GeneticConfig, rng: &mut R) -> bool {
    if rng.random_range(0.0..1.0) >= config.mutation_rate {
        return false;
    }
    child.cost = perturb(child.cost, config.cost_delta, config.cost_floor, rng);
    child.travel_time_minutes = perturb(
        child.travel_time_minutes,
        config.time_delta,
        config.time_floor,
        rng,
    );
    true
}

fn floor_mean(a: u32, b: u32) -> u32 {
    ((u64::from(a) + u64::from(b)) / 2) as u32
}

fn perturb<R: Rng>(value: u32, delta: u32, floor: u32, rng: &mut R) -> u32 {
    let delta = i64::from(delta);
    let shifted = i64::from(value) + rng.random_range(-delta..=delta);
    shifted.clamp(i64::from(floor), i64::from(u32::MAX)) as u32
}
