//! Restaurant records and per-query constraints.
//!
//! - [`Restaurant`]: a normalized catalog entry. Synthetic candidates bred by
//!   the genetic optimizer use the same type with an empty `external_id`.
//! - [`SelectionConstraints`]: what the diner asked for (cuisine, budget,
//!   time ceiling, current location).

mod types;

pub use types::{Restaurant, SelectionConstraints};
