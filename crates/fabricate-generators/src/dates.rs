//! Calendar date generators over `NaiveDate`.

use crate::numbers::int_range;
use crate::times;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use fabricate_core::checks::check_that;
use fabricate_core::{Generator, GeneratorError};

/// Today's date (UTC) at the moment of each draw.
pub fn present_dates() -> Generator<NaiveDate> {
    Generator::new(|| Utc::now().date_naive())
}

/// Dates strictly before today.
pub fn past_dates() -> Generator<NaiveDate> {
    to_dates(times::past_instants())
}

/// Dates strictly after today.
pub fn future_dates() -> Generator<NaiveDate> {
    to_dates(times::future_instants())
}

/// Dates strictly before `date`, saturating at the earliest representable date.
pub fn dates_before(date: NaiveDate) -> Generator<NaiveDate> {
    to_dates(times::before(midnight(date)))
}

/// Dates strictly after `date`, saturating at the latest representable date.
pub fn dates_after(date: NaiveDate) -> Generator<NaiveDate> {
    to_dates(times::after(midnight(date)))
}

/// Past, future or present dates.
pub fn any_dates() -> Generator<NaiveDate> {
    to_dates(times::anytime())
}

/// The UTC calendar date of every instant drawn from `generator`.
pub fn to_dates(generator: Generator<DateTime<Utc>>) -> Generator<NaiveDate> {
    generator.map(|instant| instant.date_naive())
}

/// Dates in `[start, end)`.
pub fn dates_between(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Generator<NaiveDate>, GeneratorError> {
    check_that(start < end, "endDate must be after startDate")?;

    let days = int_range(start.num_days_from_ce(), end.num_days_from_ce());
    Ok(Generator::new(move || {
        NaiveDate::from_num_days_from_ce_opt(days.get()).unwrap_or(start)
    }))
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
