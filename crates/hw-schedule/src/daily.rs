//! `DailySchedule` — one concrete week sampled from a `ScheduleProfile`.
//!
//! # Construction
//!
//! Construction draws a single seed from a [`SeedSource`], starts a private
//! [`ScheduleRng`] from it, and samples all 28 values in one pass (days
//! outer, event kinds inner).  Each value is:
//!
//! ```text
//! raw   = sample as i64                  // truncation toward zero
//! value = ((raw % 86400) + 86400) % 86400
//! ```
//!
//! The order is always sample → truncate → wrap.  Fractional seconds are
//! dropped, never rounded.
//!
//! After construction the schedule is immutable and holds no shared state,
//! so reads need no synchronisation.

use std::fmt;

use hw_core::{
    DAYS_PER_WEEK, EntropySeedSource, ScheduleRng, SeedSource, Weekday, format_hms,
    wrap_second_of_day,
};

use crate::{EventKind, NormalParams, ScheduleProfile, ScheduleResult};

/// Sampled seconds-of-day for every event kind on every weekday.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailySchedule {
    /// Seed of the private stream, kept so a schedule can be regenerated.
    seed:  u64,
    /// Indexed `[kind.index()][day.index()]`; every value is `< 86400`.
    times: [[u32; DAYS_PER_WEEK]; EventKind::COUNT],
}

impl DailySchedule {
    /// Sample a schedule, seeding from the process-wide entropy source.
    pub fn new(profile: &ScheduleProfile) -> Self {
        Self::from_profile(profile, EntropySeedSource::global())
    }

    /// Sample a schedule, drawing exactly one seed from `seeds`.
    pub fn from_profile<S: SeedSource + ?Sized>(profile: &ScheduleProfile, seeds: &S) -> Self {
        Self::from_seed(profile, seeds.next_seed())
    }

    /// Sample a schedule from an explicit seed.
    ///
    /// The same profile and seed always yield the same schedule.
    pub fn from_seed(profile: &ScheduleProfile, seed: u64) -> Self {
        let mut rng = ScheduleRng::new(seed);
        let mut times = [[0u32; DAYS_PER_WEEK]; EventKind::COUNT];

        for day in Weekday::ALL {
            for kind in EventKind::ALL {
                times[kind.index()][day.index()] =
                    sample_second_of_day(&mut rng, profile.params(kind, day));
            }
        }

        tracing::trace!(seed, "sampled daily schedule");
        DailySchedule { seed, times }
    }

    /// The seed the private stream was started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Sampled second-of-day for `kind` on `day`.
    #[inline]
    pub fn at(&self, kind: EventKind, day: Weekday) -> u32 {
        self.times[kind.index()][day.index()]
    }

    /// Like [`DailySchedule::at`] but with a raw day index.
    pub fn time(&self, kind: EventKind, day: usize) -> ScheduleResult<u32> {
        let day = Weekday::try_from(day)?;
        Ok(self.at(kind, day))
    }

    pub fn wake_time(&self, day: usize) -> ScheduleResult<u32> {
        self.time(EventKind::Wake, day)
    }

    pub fn work_time(&self, day: usize) -> ScheduleResult<u32> {
        self.time(EventKind::Work, day)
    }

    pub fn return_home_time(&self, day: usize) -> ScheduleResult<u32> {
        self.time(EventKind::ReturnHome, day)
    }

    pub fn sleep_time(&self, day: usize) -> ScheduleResult<u32> {
        self.time(EventKind::Sleep, day)
    }

    /// The four sampled values for `day`, in [`EventKind::ALL`] order.
    pub fn day(&self, day: Weekday) -> [u32; EventKind::COUNT] {
        EventKind::ALL.map(|kind| self.at(kind, day))
    }
}

impl fmt::Display for DailySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in Weekday::ALL {
            writeln!(f, "{day}:")?;
            for kind in EventKind::ALL {
                let secs = self.at(kind, day);
                let label = format!("{}:", kind.label());
                writeln!(f, "  {label:<12} {secs:>5} s ({})", format_hms(secs))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Draw, truncate toward zero, wrap into `[0, 86400)`.
fn sample_second_of_day(rng: &mut ScheduleRng, params: NormalParams) -> u32 {
    let raw = rng.normal(params.mean, params.std_dev) as i64;
    wrap_second_of_day(raw)
}

// ── Batches ───────────────────────────────────────────────────────────────────

/// Sample `count` schedules from one profile, one seed draw each.
///
/// With the `parallel` feature the schedules are built on the Rayon pool;
/// seeds are then drawn in whatever order the workers reach the source, so
/// the batch is reproducible as a set but not necessarily in order.
pub fn generate_schedules<S: SeedSource + ?Sized>(
    profile: &ScheduleProfile,
    count: usize,
    seeds: &S,
) -> Vec<DailySchedule> {
    #[cfg(not(feature = "parallel"))]
    let schedules: Vec<DailySchedule> = (0..count)
        .map(|_| DailySchedule::from_profile(profile, seeds))
        .collect();

    #[cfg(feature = "parallel")]
    let schedules: Vec<DailySchedule> = {
        use rayon::prelude::*;

        (0..count)
            .into_par_iter()
            .map(|_| DailySchedule::from_profile(profile, seeds))
            .collect()
    };

    tracing::debug!(count, "generated schedule batch");
    schedules
}
