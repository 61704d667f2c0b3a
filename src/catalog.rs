//! Catalog boundary helpers.
//!
//! The selection engine only ever sees fully populated [`Restaurant`]
//! records. The functions here turn upstream listings and flat catalog rows
//! into such records, rejecting anything incomplete. None of them touch the
//! filesystem or the network; fetching and storing the catalog is the
//! caller's business.

use crate::error::{Result, SelectError};
use crate::model::Restaurant;
use rand::Rng;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Separator between cuisine tags in a flat catalog row.
pub const CUISINE_SEPARATOR: char = '/';

/// Number of columns in a flat catalog row.
pub const ROW_COLUMNS: usize = 9;

/// A restaurant listing as returned by an upstream search service.
///
/// Every field is optional because upstream data is frequently incomplete.
/// Convert with [`Listing::into_restaurant`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub name: Option<String>,
    pub cuisines: Option<Vec<String>>,
    /// Price level symbol such as `"$$"` or `"$$ - $$$"`.
    pub price_level: Option<String>,
    pub review_count: Option<u32>,
    pub rating: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Travel time to the reference location in seconds.
    pub travel_time_seconds: Option<u32>,
    pub external_id: Option<String>,
}

impl Listing {
    /// Converts the listing into a [`Restaurant`].
    ///
    /// Cost is estimated from the price level with [`estimate_cost`], which
    /// is why an RNG is needed. A missing review count is treated as zero;
    /// every other field is required.
    ///
    /// # Errors
    ///
    /// [`SelectError::MissingField`] naming the first absent field.
    pub fn into_restaurant<R: Rng>(self, rng: &mut R) -> Result<Restaurant> {
        let name = self.name.ok_or(SelectError::MissingField("name"))?;
        let cuisines = self.cuisines.ok_or(SelectError::MissingField("cuisines"))?;
        let price_level = self
            .price_level
            .ok_or(SelectError::MissingField("price_level"))?;
        let rating = self.rating.ok_or(SelectError::MissingField("rating"))?;
        let latitude = self.latitude.ok_or(SelectError::MissingField("latitude"))?;
        let longitude = self.longitude.ok_or(SelectError::MissingField("longitude"))?;
        let travel = self
            .travel_time_seconds
            .ok_or(SelectError::MissingField("travel_time_seconds"))?;
        let external_id = self
            .external_id
            .filter(|id| !id.is_empty())
            .ok_or(SelectError::MissingField("external_id"))?;

        Ok(Restaurant {
            name,
            cuisines,
            cost: estimate_cost(&price_level, rng),
            review_count: self.review_count.unwrap_or(0),
            rating,
            latitude,
            longitude,
            travel_time_minutes: travel / 60,
            external_id,
        })
    }
}

/// Maps a price level symbol to a numeric level in `1.0..=5.0`.
///
/// - `"$"` through `"$$$$$"` map to 1 through 5.
/// - A range such as `"$$ - $$$"` maps to the mean of its first two parts;
///   any further parts are ignored.
/// - A blank level is drawn uniformly from `[1, 5]`.
/// - Anything else is treated as the most expensive level, 5.
///
/// Spaces are ignored.
pub fn price_level<R: Rng>(raw: &str, rng: &mut R) -> f64 {
    let level: String = raw.chars().filter(|c| *c != ' ').collect();
    match level.as_str() {
        "" => rng.random_range(1.0..=5.0),
        "$" => 1.0,
        "$$" => 2.0,
        "$$$" => 3.0,
        "$$$$" => 4.0,
        "$$$$$" => 5.0,
        other if other.contains('-') => {
            let mut parts = other.split('-');
            let lo = parts.next().unwrap_or_default();
            let hi = parts.next().unwrap_or_default();
            (price_level(lo, rng) + price_level(hi, rng)) / 2.0
        }
        _ => 5.0,
    }
}

/// Estimates a meal cost from a price level symbol.
///
/// `price_level * U[0.8, 1.2] * 100`, truncated toward zero.
///
/// # Examples
///
/// ```
/// use dine_select::catalog::estimate_cost;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let cost = estimate_cost("$$", &mut rng);
/// assert!((160..=240).contains(&cost));
/// ```
pub fn estimate_cost<R: Rng>(raw_level: &str, rng: &mut R) -> u32 {
    let level = price_level(raw_level, rng);
    let jitter: f64 = rng.random_range(0.8..=1.2);
    (level * jitter * 100.0) as u32
}

/// Parses one flat catalog row.
///
/// Columns: name, `/`-separated cuisines, cost, review count, rating,
/// latitude, longitude, travel time in seconds, external id. Travel time is
/// converted to whole minutes. Empty cuisine tags (from a trailing
/// separator) are dropped.
///
/// # Errors
///
/// [`SelectError::MalformedField`] if the column count is wrong or a numeric
/// column does not parse.
/// [`SelectError::MissingField`] if the external id column is blank.
///
/// # Examples
///
/// ```
/// use dine_select::catalog::parse_row;
///
/// let row = ["Kebapci", "Turkish/Grill/", "250", "41", "4.5", "39.93", "32.85", "930", "d123"];
/// let r = parse_row(&row).unwrap();
/// assert_eq!(r.cuisines, ["Turkish", "Grill"]);
/// assert_eq!(r.travel_time_minutes, 15);
/// ```
pub fn parse_row(fields: &[&str]) -> Result<Restaurant> {
    if fields.len() != ROW_COLUMNS {
        return Err(SelectError::MalformedField {
            field: "row",
            value: fields.join(","),
        });
    }

    if fields[8].trim().is_empty() {
        return Err(SelectError::MissingField("external_id"));
    }

    let travel_seconds: u32 = parse_field("travel_time_seconds", fields[7])?;
    Ok(Restaurant {
        name: fields[0].to_string(),
        cuisines: fields[1]
            .split(CUISINE_SEPARATOR)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect(),
        cost: parse_field("cost", fields[2])?,
        review_count: parse_field("review_count", fields[3])?,
        rating: parse_field("rating", fields[4])?,
        latitude: parse_field("latitude", fields[5])?,
        longitude: parse_field("longitude", fields[6])?,
        travel_time_minutes: travel_seconds / 60,
        external_id: fields[8].to_string(),
    })
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| SelectError::MalformedField {
        field,
        value: raw.to_string(),
    })
}

/// Distinct non-empty cuisine tags across the catalog, sorted.
pub fn unique_cuisines(restaurants: &[Restaurant]) -> BTreeSet<&str> {
    restaurants
        .iter()
        .flat_map(|r| r.cuisines.iter())
        .map(String::as_str)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Clones the restaurants that serve `cuisine`, preserving order.
pub fn filter_by_cuisine(restaurants: &[Restaurant], cuisine: &str) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|r| r.serves(cuisine))
        .cloned()
        .collect()
}
