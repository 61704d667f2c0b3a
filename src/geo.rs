//! Great-circle distance on a spherical earth.

/// Mean earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Which longitude delta the haversine formula uses.
///
/// The legacy catalog scorer computed the longitude delta as
/// `lat2 - lon1` instead of `lon2 - lon1`. [`Legacy`](Self::Legacy)
/// reproduces that value exactly so rankings can be compared against the
/// old system; it is not symmetric in its arguments and is not a distance in
/// the geometric sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceFormula {
    /// Standard haversine: `dlon = lon2 - lon1`.
    #[default]
    Haversine,

    /// Legacy scorer: `dlon = lat2 - lon1`.
    Legacy,
}

/// Haversine distance in kilometres between two points given in degrees.
///
/// # Examples
///
/// ```
/// use dine_select::geo::distance;
///
/// // Ankara to Istanbul
/// let km = distance(39.9334, 32.8597, 41.0082, 28.9784);
/// assert!((km - 349.36).abs() < 0.1);
/// ```
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    distance_with(DistanceFormula::Haversine, lat1, lon1, lat2, lon2)
}

/// Distance in kilometres using the given formula.
pub fn distance_with(formula: DistanceFormula, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = match formula {
        DistanceFormula::Haversine => (lon2 - lon1).to_radians(),
        DistanceFormula::Legacy => (lat2 - lon1).to_radians(),
    };

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push `a` a hair outside [0, 1]
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
