//! Error types for restaurant selection.

use thiserror::Error;

/// Errors raised by the selection engine and the catalog boundary helpers.
///
/// An absent greedy result is not an error: [`greedy_search`](crate::greedy::greedy_search)
/// returns `Ok(None)` in that case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    /// `max_budget` is zero, negative, or not finite.
    #[error("max budget must be a positive finite number, got {0}")]
    InvalidBudget(f64),

    /// `max_time_minutes` is zero, negative, or not finite.
    #[error("max time must be a positive finite number of minutes, got {0}")]
    InvalidTime(f64),

    /// Genetic search configuration rejected by [`GeneticConfig::validate`](crate::ga::GeneticConfig::validate).
    #[error("invalid genetic search configuration: {0}")]
    InvalidConfig(String),

    /// No restaurant in the catalog serves the requested cuisine, so no amount
    /// of constraint relaxation can produce a feasible set.
    #[error("no restaurant serves cuisine {cuisine:?}")]
    NoCuisineMatch {
        /// The cuisine that was requested.
        cuisine: String,
    },

    /// Budget/time relaxation hit its iteration cap without finding a
    /// feasible restaurant.
    #[error("constraint relaxation exhausted after {attempts} attempts")]
    RelaxationExhausted {
        /// Number of relaxation steps performed.
        attempts: usize,
    },

    /// A catalog listing lacks a required field.
    #[error("listing is missing required field `{0}`")]
    MissingField(&'static str),

    /// A catalog field could not be parsed.
    #[error("malformed value {value:?} for field `{field}`")]
    MalformedField {
        /// Field name.
        field: &'static str,
        /// Raw value as received.
        value: String,
    },
}

/// Result type alias for selection operations.
pub type Result<T> = std::result::Result<T, SelectError>;
