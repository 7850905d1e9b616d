//! Latitude and longitude generators, in degrees.

use crate::numbers::double_range;
use fabricate_core::Generator;

/// Latitudes in `[-90, 90]`.
pub fn latitudes() -> Generator<f64> {
    double_range(-90.0, 90.0)
}

/// Longitudes in `[-180, 180]`.
pub fn longitudes() -> Generator<f64> {
    double_range(-180.0, 180.0)
}
