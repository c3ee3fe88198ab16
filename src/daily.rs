//! Daily puzzle schedule.
//!
//! Maps calendar dates to generator seeds. Day zero is 2022-01-24, the
//! first Quordle; every later date seeds the generator with its whole-day
//! distance from that epoch, so the quartet for a date is a pure function
//! of the date.

use chrono::{Duration, NaiveDate};

use crate::draw::{DrawError, QuartetDrawer};

/// Returns the epoch date of puzzle #0 (2022-01-24).
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 24).expect("epoch is a valid calendar date")
}

/// Number of whole days between the epoch and `date`; negative before it.
pub fn seed_for_date(date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch()).num_days()
}

/// Shifts `today` by `offset` whole days.
///
/// A shift that would leave the calendar's representable range falls back
/// to the unshifted date, mirroring how the web engine ignores a shift it
/// cannot apply.
pub fn offset_date(today: NaiveDate, offset: i64) -> NaiveDate {
    Duration::try_days(offset)
        .and_then(|days| today.checked_add_signed(days))
        .unwrap_or(today)
}

/// Parses the optional day-offset argument.
///
/// Absent or non-integer arguments mean "no shift", never an error; that
/// is the policy the web engine applies to its query argument.
pub fn parse_offset(arg: Option<&str>) -> i64 {
    arg.and_then(|raw| raw.trim().parse().ok()).unwrap_or(0)
}

/// Derives the quartet for `date`: seed a fresh generator with the day
/// number and draw.
///
/// The day number is truncated to 32 bits on its way into the generator,
/// the same two's-complement wrap the web engine's `>>> 0` performs, so
/// pre-epoch dates draw from the high end of the seed space instead of
/// failing.
pub fn quartet_for_date(
    date: NaiveDate,
    drawer: &QuartetDrawer,
) -> Result<[String; 4], DrawError> {
    drawer.draw_for_seed(seed_for_date(date) as u32)
}
