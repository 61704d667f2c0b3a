//! Genetic search configuration.
//!
//! [`GeneticConfig`] holds every tunable of the relaxation and evolution
//! loops. Defaults reproduce the legacy optimizer's constants.

/// Configuration for [`GeneticSearch`](super::GeneticSearch).
///
/// # Defaults
///
/// ```
/// use dine_select::ga::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.budget_step, 50.0);
/// assert_eq!(config.time_step, 10.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use dine_select::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(40)
///     .with_generations(100)
///     .with_mutation_rate(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GeneticConfig {
    /// Requested population size. Clamped to the feasible set size at run time.
    pub population_size: usize,

    /// Number of generations to evolve.
    pub generations: usize,

    /// Probability that a child is mutated (0.0–1.0).
    pub mutation_rate: f64,

    /// Amount added to the budget ceiling per relaxation step.
    pub budget_step: f64,

    /// Minutes added to the time ceiling per relaxation step.
    pub time_step: f64,

    /// Mutation perturbs cost by a uniform integer in `[-cost_delta, cost_delta]`.
    pub cost_delta: u32,

    /// Lower bound on a mutated cost.
    pub cost_floor: u32,

    /// Mutation perturbs travel time by a uniform integer in `[-time_delta, time_delta]`.
    pub time_delta: u32,

    /// Lower bound on a mutated travel time.
    pub time_floor: u32,

    /// Maximum number of relaxation steps before giving up.
    ///
    /// Set to 0 to forbid relaxation entirely.
    pub max_relaxations: usize,

    /// Maximum crossover draws per generation while filling the offspring
    /// quota. When exhausted the generation proceeds with the children it has.
    pub max_offspring_attempts: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. Ignored by
    /// [`GeneticSearch::run_with_rng`](super::GeneticSearch::run_with_rng).
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 50,
            mutation_rate: 0.2,
            budget_step: 50.0,
            time_step: 10.0,
            cost_delta: 50,
            cost_floor: 50,
            time_delta: 20,
            time_floor: 10,
            max_relaxations: 10_000,
            max_offspring_attempts: 10_000,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the budget and time relaxation steps.
    pub fn with_relaxation_steps(mut self, budget_step: f64, time_step: f64) -> Self {
        self.budget_step = budget_step;
        self.time_step = time_step;
        self
    }

    /// Sets the relaxation cap.
    pub fn with_max_relaxations(mut self, n: usize) -> Self {
        self.max_relaxations = n;
        self
    }

    /// Sets the per-generation offspring attempt cap.
    pub fn with_max_offspring_attempts(mut self, n: usize) -> Self {
        self.max_offspring_attempts = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        if !(self.budget_step.is_finite() && self.budget_step > 0.0) {
            return Err("budget_step must be positive".into());
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err("time_step must be positive".into());
        }
        if self.max_offspring_attempts == 0 {
            return Err("max_offspring_attempts must be at least 1".into());
        }
        Ok(())
    }
}
