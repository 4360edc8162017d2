//! Time-of-day model.
//!
//! # Design
//!
//! A time of day is a second-of-day: an integer in `[0, SECONDS_PER_DAY)`
//! counting seconds since local midnight.  The day is cyclic, so any integer
//! maps back into the domain by modular reduction:
//!
//!   wrapped = ((raw % 86400) + 86400) % 86400
//!
//! Rust's `%` keeps the sign of the dividend, so a single remainder would
//! leave negative inputs outside the domain.
//!
//! Weekdays are indexed 0 (Monday) through 6 (Sunday).

use std::fmt;

use crate::DayOutOfRange;

/// Seconds in one day; the exclusive upper bound of a second-of-day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Number of weekdays every profile and schedule covers.
pub const DAYS_PER_WEEK: usize = 7;

/// Map any integer second count onto the cyclic `[0, 86400)` domain.
#[inline]
pub fn wrap_second_of_day(raw: i64) -> u32 {
    let day = SECONDS_PER_DAY as i64;
    (((raw % day) + day) % day) as u32
}

/// Render a second-of-day as `HH:MM:SS`.
///
/// Values at or beyond one day are wrapped first.
pub fn format_hms(second_of_day: u32) -> String {
    let s = second_of_day % SECONDS_PER_DAY;
    format!("{:02}:{:02}:{:02}", s / 3_600, (s % 3_600) / 60, s % 60)
}

// ── Weekday ───────────────────────────────────────────────────────────────────

/// A day of the week, indexed 0 (Monday) through 6 (Sunday).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in index order.
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in `[0, 6]`, usable as an array index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl TryFrom<i64> for Weekday {
    type Error = DayOutOfRange;

    fn try_from(day: i64) -> Result<Weekday, DayOutOfRange> {
        usize::try_from(day)
            .ok()
            .and_then(|i| Weekday::ALL.get(i).copied())
            .ok_or(DayOutOfRange(day))
    }
}

impl TryFrom<usize> for Weekday {
    type Error = DayOutOfRange;

    fn try_from(day: usize) -> Result<Weekday, DayOutOfRange> {
        Weekday::ALL
            .get(day)
            .copied()
            .ok_or(DayOutOfRange(i64::try_from(day).unwrap_or(i64::MAX)))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
