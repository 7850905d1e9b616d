//! Instant generators and helpers over `DateTime<Utc>`.

use crate::numbers::{draw_i32, long_range};
use chrono::{DateTime, Duration, Utc};
use fabricate_core::checks::check_that;
use fabricate_core::{Generator, GeneratorError};
use rand::Rng;

// ============================================================================
// Generators
// ============================================================================

/// The current UTC time at the moment of each draw.
pub fn present_instants() -> Generator<DateTime<Utc>> {
    Generator::new(Utc::now)
}

/// Instants up to roughly 1000 days before the moment of each draw.
pub fn past_instants() -> Generator<DateTime<Utc>> {
    Generator::new(|| offset_before(&mut rand::thread_rng(), Utc::now()))
}

/// Instants up to roughly 30 years after the moment of each draw.
///
/// "Now" is recomputed for every draw so values stay in the future.
pub fn future_instants() -> Generator<DateTime<Utc>> {
    Generator::new(|| offset_after(&mut rand::thread_rng(), Utc::now()))
}

/// Instants strictly before `instant`.
///
/// Draws saturate at `DateTime::<Utc>::MIN_UTC`, so `before(MIN_UTC)` only
/// ever yields `MIN_UTC` itself.
pub fn before(instant: DateTime<Utc>) -> Generator<DateTime<Utc>> {
    Generator::new(move || offset_before(&mut rand::thread_rng(), instant))
}

/// Instants strictly after `instant`.
///
/// Draws saturate at `DateTime::<Utc>::MAX_UTC`, so `after(MAX_UTC)` only
/// ever yields `MAX_UTC` itself.
pub fn after(instant: DateTime<Utc>) -> Generator<DateTime<Utc>> {
    Generator::new(move || offset_after(&mut rand::thread_rng(), instant))
}

/// Past, future or present instants with equal odds.
pub fn anytime() -> Generator<DateTime<Utc>> {
    let past = past_instants();
    let future = future_instants();
    let present = present_instants();

    Generator::new(move || match rand::thread_rng().gen_range(0..3) {
        0 => past.get(),
        1 => future.get(),
        _ => present.get(),
    })
}

/// Instants in `[start, end)` with millisecond resolution.
pub fn times_between(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Generator<DateTime<Utc>>, GeneratorError> {
    check_that(start < end, "startTime must be before endTime")?;

    let start_ms = start.timestamp_millis();
    let end_ms = end.timestamp_millis();
    // Sub-millisecond ranges collapse to the start.
    if start_ms >= end_ms {
        return Ok(Generator::constant(start));
    }

    let timestamps = long_range(start_ms, end_ms);
    Ok(Generator::new(move || {
        DateTime::from_timestamp_millis(timestamps.get())
            .unwrap_or(start)
            .max(start)
    }))
}

/// Subtract a random offset of at least one day from `instant`.
fn offset_before<R: Rng + ?Sized>(rng: &mut R, instant: DateTime<Utc>) -> DateTime<Utc> {
    let offset = random_offset(rng, 1, 1000);
    instant
        .checked_sub_signed(offset)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Add a random offset of at least one day to `instant`.
fn offset_after<R: Rng + ?Sized>(rng: &mut R, instant: DateTime<Utc>) -> DateTime<Utc> {
    let offset = random_offset(rng, 1, 11_000);
    instant
        .checked_add_signed(offset)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn random_offset<R: Rng + ?Sized>(rng: &mut R, min_days: i32, max_days: i32) -> Duration {
    Duration::days(draw_i32(rng, min_days, max_days).into())
        + Duration::hours(draw_i32(rng, 0, 100).into())
        + Duration::minutes(draw_i32(rng, 0, 60).into())
        + Duration::seconds(draw_i32(rng, 0, 60).into())
        + Duration::milliseconds(draw_i32(rng, 0, 1000).into())
}

// ============================================================================
// Helpers
// ============================================================================

// Relative helpers saturate at MIN_UTC / MAX_UTC instead of overflowing.

/// The instant `days` days before now.
pub fn days_ago(days: i64) -> DateTime<Utc> {
    shift_back(Duration::try_days(days), days)
}

/// The instant `days` days after now.
pub fn days_ahead(days: i64) -> DateTime<Utc> {
    shift_ahead(Duration::try_days(days), days)
}

/// The instant `hours` hours before now.
pub fn hours_ago(hours: i64) -> DateTime<Utc> {
    shift_back(Duration::try_hours(hours), hours)
}

/// The instant `hours` hours after now.
pub fn hours_ahead(hours: i64) -> DateTime<Utc> {
    shift_ahead(Duration::try_hours(hours), hours)
}

/// The instant `minutes` minutes before now.
pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    shift_back(Duration::try_minutes(minutes), minutes)
}

/// The instant `minutes` minutes after now.
pub fn minutes_ahead(minutes: i64) -> DateTime<Utc> {
    shift_ahead(Duration::try_minutes(minutes), minutes)
}

fn shift_back(offset: Option<Duration>, amount: i64) -> DateTime<Utc> {
    offset
        .and_then(|offset| Utc::now().checked_sub_signed(offset))
        .unwrap_or(if amount >= 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

fn shift_ahead(offset: Option<Duration>, amount: i64) -> DateTime<Utc> {
    offset
        .and_then(|offset| Utc::now().checked_add_signed(offset))
        .unwrap_or(if amount >= 0 {
            DateTime::<Utc>::MAX_UTC
        } else {
            DateTime::<Utc>::MIN_UTC
        })
}

/// Whether `instant` is within `margin_millis` of the current time.
pub fn is_now(instant: DateTime<Utc>, margin_millis: u32) -> bool {
    let delta = (instant - Utc::now()).num_milliseconds().abs();
    delta <= i64::from(margin_millis)
}
