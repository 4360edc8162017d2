//! Event kinds and the per-day distribution parameters attached to them.

use std::fmt;
use std::str::FromStr;

use hw_core::{SECONDS_PER_DAY, Weekday};

use crate::ScheduleError;

// ── EventKind ─────────────────────────────────────────────────────────────────

/// One of the four daily events a resident's routine is made of.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Getting up.
    Wake,
    /// Leaving home for work.
    Work,
    /// Coming back home.
    ReturnHome,
    /// Going to bed.
    Sleep,
}

impl EventKind {
    pub const COUNT: usize = 4;

    /// All kinds in storage order.
    pub const ALL: [EventKind; Self::COUNT] =
        [EventKind::Wake, EventKind::Work, EventKind::ReturnHome, EventKind::Sleep];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Identifier used in CSV files (`wake`, `work`, `return_home`, `sleep`).
    pub fn key(self) -> &'static str {
        match self {
            EventKind::Wake => "wake",
            EventKind::Work => "work",
            EventKind::ReturnHome => "return_home",
            EventKind::Sleep => "sleep",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Wake => "Wake",
            EventKind::Work => "Work",
            EventKind::ReturnHome => "Return home",
            EventKind::Sleep => "Sleep",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventKind {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<EventKind, ScheduleError> {
        match s.trim() {
            "wake" => Ok(EventKind::Wake),
            "work" => Ok(EventKind::Work),
            "return_home" => Ok(EventKind::ReturnHome),
            "sleep" => Ok(EventKind::Sleep),
            other => Err(ScheduleError::Parse(format!(
                "invalid event kind {other:?}: expected \"wake\", \"work\", \"return_home\", or \"sleep\""
            ))),
        }
    }
}

// ── NormalParams ──────────────────────────────────────────────────────────────

/// Mean and standard deviation of a normally distributed second-of-day.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalParams {
    pub mean:    f64,
    pub std_dev: f64,
}

impl NormalParams {
    pub const ZERO: NormalParams = NormalParams { mean: 0.0, std_dev: 0.0 };

    pub fn new(mean: f64, std_dev: f64) -> Self {
        NormalParams { mean, std_dev }
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// A mean must lie in `[0, 86400]`.  NaN is rejected.
pub(crate) fn check_mean(kind: EventKind, day: Weekday, value: f64) -> Result<f64, ScheduleError> {
    if (0.0..=SECONDS_PER_DAY as f64).contains(&value) {
        Ok(value)
    } else {
        Err(ScheduleError::MeanOutOfRange { kind, day, value })
    }
}

/// A deviation must be finite and `>= 0`.
pub(crate) fn check_std_dev(kind: EventKind, day: Weekday, value: f64) -> Result<f64, ScheduleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ScheduleError::InvalidStdDev { kind, day, value })
    }
}
