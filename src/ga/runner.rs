//! Genetic search execution.
//!
//! [`GeneticSearch`] runs the full pipeline:
//! feasibility filter → relaxation → sampling → evolve → pick.

use super::config::GeneticConfig;
use super::{operators, selection};
use crate::error::{Result, SelectError};
use crate::model::{Restaurant, SelectionConstraints};
use crate::scoring::score;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a genetic search.
#[derive(Debug, Clone)]
pub struct GeneticOutcome {
    /// Best restaurant from the feasible catalog subset. Always a real
    /// catalog entry, never a bred candidate.
    pub best: Restaurant,

    /// Score of `best` under the final constraints.
    pub best_score: f64,

    /// Constraints after relaxation (equal to the input if none was needed).
    pub constraints: SelectionConstraints,

    /// Number of relaxation steps applied.
    pub relaxations: usize,

    /// Size of the feasible set the search ran over.
    pub feasible_count: usize,

    /// Population size after clamping to the feasible set.
    pub population_size: usize,

    /// Generations executed.
    pub generations: usize,

    /// Generations that ran out of offspring attempts before filling the quota.
    pub offspring_shortfalls: usize,

    /// Best evolved score per generation (generations with an empty
    /// population are skipped).
    pub score_history: Vec<f64>,
}

/// Executes the genetic restaurant search.
///
/// # Usage
///
/// ```
/// use dine_select::ga::{GeneticConfig, GeneticSearch};
/// use dine_select::model::{Restaurant, SelectionConstraints};
///
/// let catalog = vec![
///     Restaurant::new("A", ["Italian"]).with_cost(100).with_travel_time(20).with_external_id("1"),
///     Restaurant::new("B", ["Italian"]).with_cost(300).with_travel_time(50).with_external_id("2"),
/// ];
/// let constraints = SelectionConstraints::new("Italian", 200.0, 30.0, 39.888, 32.827);
/// let config = GeneticConfig::default().with_seed(42);
///
/// let outcome = GeneticSearch::run(&catalog, &constraints, &config).unwrap();
/// assert_eq!(outcome.best.name, "A");
/// ```
pub struct GeneticSearch;

impl GeneticSearch {
    /// Runs the search with an RNG seeded from `config.seed`.
    pub fn run(
        restaurants: &[Restaurant],
        constraints: &SelectionConstraints,
        config: &GeneticConfig,
    ) -> Result<GeneticOutcome> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(restaurants, constraints, config, &mut rng)
    }

    /// Runs the search drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// - [`SelectError::InvalidConfig`] if `config` fails validation.
    /// - [`SelectError::InvalidBudget`] / [`SelectError::InvalidTime`] for bad constraints.
    /// - [`SelectError::NoCuisineMatch`] if nothing serves the cuisine.
    /// - [`SelectError::RelaxationExhausted`] if `max_relaxations` steps were not enough.
    pub fn run_with_rng<R: Rng>(
        restaurants: &[Restaurant],
        constraints: &SelectionConstraints,
        config: &GeneticConfig,
        rng: &mut R,
    ) -> Result<GeneticOutcome> {
        config.validate().map_err(SelectError::InvalidConfig)?;
        constraints.validate()?;

        if !restaurants.iter().any(|r| r.serves(&constraints.cuisine)) {
            return Err(SelectError::NoCuisineMatch {
                cuisine: constraints.cuisine.clone(),
            });
        }

        // 1-2. Feasible set, widening the ceilings until something fits
        let (feasible, active, relaxations) = relax(restaurants, constraints, config)?;

        // 3. Initial population
        let population_size = config.population_size.min(feasible.len());
        let mut population: Vec<Restaurant> =
            rand::seq::index::sample(rng, feasible.len(), population_size)
                .into_iter()
                .map(|i| feasible[i].clone())
                .collect();

        tracing::debug!(
            feasible = feasible.len(),
            population_size,
            relaxations,
            "genetic search initialized"
        );

        let keep = selection::survivor_count(population_size);
        let refill_target = population_size / 2;
        let mut score_history = Vec::with_capacity(config.generations);
        let mut offspring_shortfalls = 0usize;

        // 4. Evolutionary loop
        for gen in 0..config.generations {
            let scores: Vec<f64> = population.iter().map(|r| score(r, &active)).collect();
            if let Some(best) = scores.iter().copied().reduce(f64::max) {
                score_history.push(best);
            }

            let mut next_gen = selection::truncate(&population, &scores, keep);
            selection::refill(&mut next_gen, &feasible, refill_target, rng);

            let (children, exhausted) = breed(&next_gen, population_size, &active, config, rng);
            if exhausted {
                offspring_shortfalls += 1;
                tracing::warn!(
                    generation = gen + 1,
                    accepted = children.len(),
                    wanted = population_size,
                    "offspring attempts exhausted"
                );
            }

            next_gen.extend(children);
            population = next_gen;

            tracing::trace!(
                generation = gen + 1,
                population = population.len(),
                best = score_history.last().copied(),
                "generation complete"
            );
        }

        // 5. Pick from the real feasible set, not the evolved population
        let mut best = feasible[0];
        let mut best_score = score(best, &active);
        for &candidate in &feasible[1..] {
            let s = score(candidate, &active);
            if s > best_score {
                best = candidate;
                best_score = s;
            }
        }

        tracing::debug!(name = %best.name, score = best_score, "genetic search finished");

        Ok(GeneticOutcome {
            best: best.clone(),
            best_score,
            constraints: active,
            relaxations,
            feasible_count: feasible.len(),
            population_size,
            generations: config.generations,
            offspring_shortfalls,
            score_history,
        })
    }
}

/// Filters the catalog, relaxing budget and time until at least one entry fits.
fn relax<'a>(
    restaurants: &'a [Restaurant],
    constraints: &SelectionConstraints,
    config: &GeneticConfig,
) -> Result<(Vec<&'a Restaurant>, SelectionConstraints, usize)> {
    let mut active = constraints.clone();
    let mut attempts = 0usize;

    loop {
        let feasible: Vec<&Restaurant> = restaurants.iter().filter(|r| active.admits(r)).collect();
        if !feasible.is_empty() {
            return Ok((feasible, active, attempts));
        }
        if attempts >= config.max_relaxations {
            return Err(SelectError::RelaxationExhausted { attempts });
        }

        active = active.relaxed(config.budget_step, config.time_step);
        attempts += 1;
        tracing::debug!(
            attempt = attempts,
            max_budget = active.max_budget,
            max_time = active.max_time_minutes,
            "no feasible restaurant, relaxing constraints"
        );
    }
}

/// Produces up to `quota` children that fit the active constraints.
///
/// Returns the children and whether the attempt budget ran out first.
/// With fewer than two parents no children are produced.
fn breed<R: Rng>(
    parents: &[Restaurant],
    quota: usize,
    active: &SelectionConstraints,
    config: &GeneticConfig,
    rng: &mut R,
) -> (Vec<Restaurant>, bool) {
    let mut children = Vec::with_capacity(quota);
    if parents.len() < 2 {
        return (children, false);
    }

    let mut attempts = 0usize;
    while children.len() < quota {
        if attempts >= config.max_offspring_attempts {
            return (children, true);
        }
        attempts += 1;

        let pair = rand::seq::index::sample(rng, parents.len(), 2);
        let mut child = operators::crossover(&parents[pair.index(0)], &parents[pair.index(1)]);
        operators::mutate(&mut child, config, rng);

        if active.within_limits(child.cost, child.travel_time_minutes) {
            children.push(child);
        }
    }
    (children, false)
}

// ============================================================================
// Tests
// ============================================================================
