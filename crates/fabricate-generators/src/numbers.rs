//! Numeric generators over bounded ranges.
//!
//! Integer ranges are half-open (`[lower, upper)`), floating point ranges
//! are closed (`[lower, upper]`). Draws never overflow, including at the
//! extremes of each type:
//!
//! - a range entirely below zero is mirrored into positive space, a
//!   magnitude is drawn in the unsigned type of the same width and negated
//! - a range straddling zero flips a coin between the negative side and the
//!   non-negative side, so both signs are always reachable
//! - a non-negative range is sampled directly

use crate::collections::from_list;
use fabricate_core::checks::check_that;
use fabricate_core::{Generator, GeneratorError};
use rand::Rng;

// ============================================================================
// Integers
// ============================================================================

/// Integers in `[inclusive_lower, exclusive_upper)`.
pub fn integers(
    inclusive_lower: i32,
    exclusive_upper: i32,
) -> Result<Generator<i32>, GeneratorError> {
    check_that(
        inclusive_lower < exclusive_upper,
        "Lower Bound must be < Upper Bound",
    )?;
    Ok(int_range(inclusive_lower, exclusive_upper))
}

/// Any `i32` except `i32::MAX`.
pub fn any_integers() -> Generator<i32> {
    int_range(i32::MIN, i32::MAX)
}

/// Integers in `[1, i32::MAX)`.
pub fn positive_integers() -> Generator<i32> {
    int_range(1, i32::MAX)
}

/// Integers in `[1, 1000)`.
pub fn small_positive_integers() -> Generator<i32> {
    int_range(1, 1000)
}

/// Integers in `[-(i32::MAX - 1), -1]`.
pub fn negative_integers() -> Generator<i32> {
    positive_integers().map(|value| -value)
}

/// Integers picked uniformly from `values`.
pub fn integers_from_fixed_list(values: Vec<i32>) -> Result<Generator<i32>, GeneratorError> {
    from_list(values)
}

/// Unchecked constructor for ranges known to be valid.
pub(crate) fn int_range(lower: i32, upper: i32) -> Generator<i32> {
    Generator::new(move || draw_i32(&mut rand::thread_rng(), lower, upper))
}

/// Draw from `[lower, upper)`; requires `lower < upper`.
pub(crate) fn draw_i32<R: Rng + ?Sized>(rng: &mut R, lower: i32, upper: i32) -> i32 {
    if upper <= 0 {
        // Mirror into (-upper, -lower] and flip back.
        let magnitude = rng.gen_range(upper.unsigned_abs() + 1..=lower.unsigned_abs());
        0i32.wrapping_sub_unsigned(magnitude)
    } else if lower < 0 {
        if rng.gen_bool(0.5) {
            let magnitude = rng.gen_range(0..=lower.unsigned_abs());
            0i32.wrapping_sub_unsigned(magnitude)
        } else {
            rng.gen_range(0..upper)
        }
    } else {
        rng.gen_range(lower..upper)
    }
}

// ============================================================================
// Longs
// ============================================================================

/// Longs in `[inclusive_lower, exclusive_upper)`.
pub fn longs(inclusive_lower: i64, exclusive_upper: i64) -> Result<Generator<i64>, GeneratorError> {
    check_that(
        inclusive_lower < exclusive_upper,
        "Lower Bound must be < Upper Bound",
    )?;
    Ok(long_range(inclusive_lower, exclusive_upper))
}

/// Any `i64` except `i64::MAX`.
pub fn any_longs() -> Generator<i64> {
    long_range(i64::MIN, i64::MAX)
}

/// Longs in `[1, i64::MAX)`.
pub fn positive_longs() -> Generator<i64> {
    long_range(1, i64::MAX)
}

/// Longs in `[1, 10000)`.
pub fn small_positive_longs() -> Generator<i64> {
    long_range(1, 10_000)
}

pub(crate) fn long_range(lower: i64, upper: i64) -> Generator<i64> {
    Generator::new(move || draw_i64(&mut rand::thread_rng(), lower, upper))
}

/// Draw from `[lower, upper)`; requires `lower < upper`.
pub(crate) fn draw_i64<R: Rng + ?Sized>(rng: &mut R, lower: i64, upper: i64) -> i64 {
    if upper <= 0 {
        let magnitude = rng.gen_range(upper.unsigned_abs() + 1..=lower.unsigned_abs());
        0i64.wrapping_sub_unsigned(magnitude)
    } else if lower < 0 {
        if rng.gen_bool(0.5) {
            let magnitude = rng.gen_range(0..=lower.unsigned_abs());
            0i64.wrapping_sub_unsigned(magnitude)
        } else {
            rng.gen_range(0..upper)
        }
    } else {
        rng.gen_range(lower..upper)
    }
}

// ============================================================================
// Doubles and floats
// ============================================================================

/// Doubles in `[inclusive_lower, inclusive_upper]`.
pub fn doubles(
    inclusive_lower: f64,
    inclusive_upper: f64,
) -> Result<Generator<f64>, GeneratorError> {
    check_that(
        inclusive_lower.is_finite() && inclusive_upper.is_finite(),
        "Bounds must be finite",
    )?;
    check_that(
        inclusive_lower <= inclusive_upper,
        "Upper Bound must be greater than Lower Bound",
    )?;
    Ok(double_range(inclusive_lower, inclusive_upper))
}

/// Doubles across the whole finite range.
pub fn any_doubles() -> Generator<f64> {
    double_range(-f64::MAX, f64::MAX)
}

/// Doubles in `[0.1, f64::MAX]`.
pub fn positive_doubles() -> Generator<f64> {
    double_range(0.1, f64::MAX)
}

/// Doubles in `[0.1, 1000]`.
pub fn small_positive_doubles() -> Generator<f64> {
    double_range(0.1, 1000.0)
}

/// Doubles picked uniformly from `values`.
pub fn doubles_from_fixed_list(values: Vec<f64>) -> Result<Generator<f64>, GeneratorError> {
    from_list(values)
}

pub(crate) fn double_range(lower: f64, upper: f64) -> Generator<f64> {
    Generator::new(move || draw_f64(&mut rand::thread_rng(), lower, upper))
}

/// Draw from `[lower, upper]`; requires finite `lower <= upper`.
pub(crate) fn draw_f64<R: Rng + ?Sized>(rng: &mut R, lower: f64, upper: f64) -> f64 {
    if upper < 0.0 {
        -uniform_f64(rng, -upper, -lower)
    } else if lower < 0.0 {
        if rng.gen_bool(0.5) {
            -uniform_f64(rng, 0.0, -lower)
        } else {
            uniform_f64(rng, 0.0, upper)
        }
    } else {
        uniform_f64(rng, lower, upper)
    }
}

// `gen_range` rejects spans wider than f64::MAX, which `[0, f64::MAX]` is
// after its internal scaling, so sample the unit interval and scale.
fn uniform_f64<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    let unit: f64 = rng.gen();
    (low + (high - low) * unit).min(high)
}

/// Floats in `[inclusive_lower, inclusive_upper]`.
pub fn floats(
    inclusive_lower: f32,
    inclusive_upper: f32,
) -> Result<Generator<f32>, GeneratorError> {
    check_that(
        inclusive_lower.is_finite() && inclusive_upper.is_finite(),
        "Bounds must be finite",
    )?;
    check_that(
        inclusive_lower <= inclusive_upper,
        "Upper Bound must be greater than Lower Bound",
    )?;
    Ok(float_range(inclusive_lower, inclusive_upper))
}

/// Floats in `[0.1, f32::MAX]`.
pub fn positive_floats() -> Generator<f32> {
    float_range(0.1, f32::MAX)
}

pub(crate) fn float_range(lower: f32, upper: f32) -> Generator<f32> {
    Generator::new(move || draw_f32(&mut rand::thread_rng(), lower, upper))
}

pub(crate) fn draw_f32<R: Rng + ?Sized>(rng: &mut R, lower: f32, upper: f32) -> f32 {
    if upper < 0.0 {
        -uniform_f32(rng, -upper, -lower)
    } else if lower < 0.0 {
        if rng.gen_bool(0.5) {
            -uniform_f32(rng, 0.0, -lower)
        } else {
            uniform_f32(rng, 0.0, upper)
        }
    } else {
        uniform_f32(rng, lower, upper)
    }
}

fn uniform_f32<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    let unit: f32 = rng.gen();
    (low + (high - low) * unit).min(high)
}
