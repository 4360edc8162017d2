//! `ScheduleProfile` — the statistical description of a resident's week.
//!
//! A profile stores one [`NormalParams`] per event kind per weekday, 28 pairs
//! in total.  The shape is fixed; values change only through validated
//! setters, and deserialization (`serde` feature) goes through the validating
//! constructor, so every profile in existence satisfies:
//!
//! - `0 <= mean <= 86400`
//! - `std_dev >= 0` and finite
//!
//! Day arguments are plain indices (0 = Monday … 6 = Sunday) and fail with
//! [`ScheduleError::OutOfRange`] outside that range.

use std::fmt;

use hw_core::{DAYS_PER_WEEK, Weekday};

use crate::event::{check_mean, check_std_dev};
use crate::{EventKind, NormalParams, ScheduleResult};

/// Seven values, one per weekday, Monday first.
pub type WeekSeries = [f64; DAYS_PER_WEEK];

/// Generates the per-kind `<kind>_mean` / `<kind>_std` getters and setters.
macro_rules! kind_accessors {
    ($kind:expr, $label:literal, $mean:ident, $std:ident, $set_mean:ident, $set_std:ident) => {
        #[doc = concat!("Mean ", $label, " time on `day`, in seconds of day.")]
        pub fn $mean(&self, day: usize) -> ScheduleResult<f64> {
            self.mean($kind, day)
        }

        #[doc = concat!("Standard deviation of the ", $label, " time on `day`.")]
        pub fn $std(&self, day: usize) -> ScheduleResult<f64> {
            self.std_dev($kind, day)
        }

        #[doc = concat!("Overwrite the mean ", $label, " time on `day`.")]
        pub fn $set_mean(&mut self, day: usize, value: f64) -> ScheduleResult<()> {
            self.set_mean($kind, day, value)
        }

        #[doc = concat!("Overwrite the ", $label, " standard deviation on `day`.")]
        pub fn $set_std(&mut self, day: usize, value: f64) -> ScheduleResult<()> {
            self.set_std_dev($kind, day, value)
        }
    };
}

/// Per-weekday mean/std pairs for the four daily events.
///
/// Deserialization goes through [`ScheduleProfile::new`], so a serialized
/// profile with an invalid pair fails to load.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProfile"))]
pub struct ScheduleProfile {
    /// Indexed `[kind.index()][day.index()]`.
    params: [[NormalParams; DAYS_PER_WEEK]; EventKind::COUNT],
}

impl ScheduleProfile {
    /// Build a profile from eight week series, validating all 56 values.
    ///
    /// Days are checked in order; within a day every mean is checked before
    /// any deviation, so the first offending value decides the error.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        wake_mean:        WeekSeries,
        wake_std:         WeekSeries,
        work_mean:        WeekSeries,
        work_std:         WeekSeries,
        return_home_mean: WeekSeries,
        return_home_std:  WeekSeries,
        sleep_mean:       WeekSeries,
        sleep_std:        WeekSeries,
    ) -> ScheduleResult<Self> {
        let means = [wake_mean, work_mean, return_home_mean, sleep_mean];
        let stds = [wake_std, work_std, return_home_std, sleep_std];

        let mut params = [[NormalParams::ZERO; DAYS_PER_WEEK]; EventKind::COUNT];
        for day in Weekday::ALL {
            let d = day.index();
            for kind in EventKind::ALL {
                check_mean(kind, day, means[kind.index()][d])?;
            }
            for kind in EventKind::ALL {
                check_std_dev(kind, day, stds[kind.index()][d])?;
            }
            for kind in EventKind::ALL {
                let k = kind.index();
                params[k][d] = NormalParams::new(means[k][d], stds[k][d]);
            }
        }

        Ok(ScheduleProfile { params })
    }

    /// A profile that repeats the same four pairs on every weekday.
    ///
    /// `per_kind` is in [`EventKind::ALL`] order.
    pub fn uniform(per_kind: [NormalParams; EventKind::COUNT]) -> ScheduleResult<Self> {
        let [wake, work, ret, sleep] = per_kind;
        Self::new(
            [wake.mean; DAYS_PER_WEEK],
            [wake.std_dev; DAYS_PER_WEEK],
            [work.mean; DAYS_PER_WEEK],
            [work.std_dev; DAYS_PER_WEEK],
            [ret.mean; DAYS_PER_WEEK],
            [ret.std_dev; DAYS_PER_WEEK],
            [sleep.mean; DAYS_PER_WEEK],
            [sleep.std_dev; DAYS_PER_WEEK],
        )
    }

    // ── Kind-generic access ───────────────────────────────────────────────

    /// The stored pair for `kind` on `day`.  Infallible: `Weekday` is always
    /// in range.
    #[inline]
    pub fn params(&self, kind: EventKind, day: Weekday) -> NormalParams {
        self.params[kind.index()][day.index()]
    }

    pub fn mean(&self, kind: EventKind, day: usize) -> ScheduleResult<f64> {
        let day = Weekday::try_from(day)?;
        Ok(self.params(kind, day).mean)
    }

    pub fn std_dev(&self, kind: EventKind, day: usize) -> ScheduleResult<f64> {
        let day = Weekday::try_from(day)?;
        Ok(self.params(kind, day).std_dev)
    }

    pub fn set_mean(&mut self, kind: EventKind, day: usize, value: f64) -> ScheduleResult<()> {
        let day = Weekday::try_from(day)?;
        self.params[kind.index()][day.index()].mean = check_mean(kind, day, value)?;
        Ok(())
    }

    pub fn set_std_dev(&mut self, kind: EventKind, day: usize, value: f64) -> ScheduleResult<()> {
        let day = Weekday::try_from(day)?;
        self.params[kind.index()][day.index()].std_dev = check_std_dev(kind, day, value)?;
        Ok(())
    }

    // ── Per-kind access ───────────────────────────────────────────────────

    kind_accessors!(EventKind::Wake, "wake", wake_mean, wake_std, set_wake_mean, set_wake_std);
    kind_accessors!(EventKind::Work, "work", work_mean, work_std, set_work_mean, set_work_std);
    kind_accessors!(
        EventKind::ReturnHome,
        "return-home",
        return_home_mean,
        return_home_std,
        set_return_home_mean,
        set_return_home_std
    );
    kind_accessors!(EventKind::Sleep, "sleep", sleep_mean, sleep_std, set_sleep_mean, set_sleep_std);
}

/// Unvalidated wire form of a profile.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawProfile {
    params: [[NormalParams; DAYS_PER_WEEK]; EventKind::COUNT],
}

#[cfg(feature = "serde")]
impl TryFrom<RawProfile> for ScheduleProfile {
    type Error = crate::ScheduleError;

    fn try_from(raw: RawProfile) -> ScheduleResult<Self> {
        let means = raw.params.map(|week| week.map(|p| p.mean));
        let stds = raw.params.map(|week| week.map(|p| p.std_dev));
        let [wake_mean, work_mean, return_home_mean, sleep_mean] = means;
        let [wake_std, work_std, return_home_std, sleep_std] = stds;
        ScheduleProfile::new(
            wake_mean,
            wake_std,
            work_mean,
            work_std,
            return_home_mean,
            return_home_std,
            sleep_mean,
            sleep_std,
        )
    }
}

impl fmt::Display for ScheduleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================ WEEKLY PROFILE =================")?;
        for day in Weekday::ALL {
            writeln!(f, "{day}:")?;
            for kind in EventKind::ALL {
                let p = self.params(kind, day);
                writeln!(
                    f,
                    "  {:<12} -> mean: {:>9.2} s | std: {:>9.2} s",
                    kind.label(),
                    p.mean,
                    p.std_dev
                )?;
            }
            writeln!(f, "-------------------------------------------------")?;
        }
        Ok(())
    }
}
