//! Restaurant selection engine.
//!
//! Picks the "best" restaurant for a diner from an in-memory catalog, given a
//! cuisine, a budget ceiling, a travel-time ceiling, and the diner's
//! location:
//!
//! - **Scoring** ([`scoring`]): unweighted sum of cost, time, distance,
//!   rating and review-count terms. Higher is better.
//! - **Greedy** ([`greedy`]): single pass over cuisine matches, keeps the
//!   first maximum.
//! - **Genetic** ([`ga`]): relaxes budget/time until something is feasible,
//!   evolves a population of candidates, returns the best real restaurant
//!   under the final ceilings.
//! - **Ranking** ([`ranking`]): stable top-N by score.
//! - **Distance** ([`geo`]): haversine, with the legacy scorer's formula
//!   available for parity checks.
//!
//! # Architecture
//!
//! The engine is synchronous and performs no I/O. Catalog acquisition and
//! detail enrichment live outside this crate; [`catalog`] only normalizes
//! already-fetched data into [`model::Restaurant`] records. All randomness
//! comes from an injectable [`rand::Rng`], so seeded runs are reproducible.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on the record and result types.
//! - `parallel`: rayon-backed scoring in [`ranking`].

pub mod catalog;
pub mod error;
pub mod ga;
pub mod geo;
pub mod greedy;
pub mod model;
pub mod ranking;
pub mod recommend;
pub mod scoring;

pub use error::{Result, SelectError};
pub use ga::{GeneticConfig, GeneticOutcome, GeneticSearch};
pub use greedy::greedy_search;
pub use model::{Restaurant, SelectionConstraints};
pub use ranking::top_n;
pub use recommend::{recommend, Recommendation};
pub use scoring::score;
