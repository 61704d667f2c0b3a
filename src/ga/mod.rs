//! Genetic restaurant search.
//!
//! Evolves a population of restaurants drawn from the feasible set (cuisine
//! match, under budget, under the time ceiling). When the feasible set is
//! empty the budget and time ceilings are widened step by step until it is
//! not.
//!
//! Each generation keeps the better-scoring half (rounded up), then breeds
//! synthetic candidates by averaging two survivors and occasionally
//! perturbing cost and travel time. The returned restaurant is the
//! best-scoring member of the feasible set under the final ceilings; bred
//! candidates only exist inside the loop and never escape it.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: population, generations, relaxation and mutation knobs
//! - [`GeneticSearch`]: executes the search
//! - [`GeneticOutcome`]: selected restaurant plus run statistics
//!
//! # Submodules
//!
//! - [`operators`]: crossover and mutation on restaurant records
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms" (truncation selection)

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GeneticConfig;
pub use runner::{GeneticOutcome, GeneticSearch};
