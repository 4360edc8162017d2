//! CSV profile loader.
//!
//! # CSV format
//!
//! One row per (day, event kind) pair.
//!
//! ```csv
//! day,kind,mean,std_dev
//! 0,wake,25200,1800
//! 0,work,28800,900
//! 0,return_home,64800,1800
//! 0,sleep,82800,1800
//! ```
//!
//! | Column    | Meaning                                                   |
//! |-----------|-----------------------------------------------------------|
//! | `day`     | Weekday index, 0 = Monday … 6 = Sunday                    |
//! | `kind`    | `wake`, `work`, `return_home`, or `sleep`                 |
//! | `mean`    | Mean second-of-day, `[0, 86400]`                          |
//! | `std_dev` | Standard deviation in seconds, `>= 0`                     |
//!
//! Pairs absent from the file stay at zero.  When a pair appears twice the
//! later row wins.  Values go through the profile's validated setters, so a
//! bad value fails with the same error a direct call would.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use hw_core::Weekday;

use crate::{EventKind, ScheduleError, ScheduleProfile};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ProfileRecord {
    day:     i64,
    kind:    String,
    mean:    f64,
    std_dev: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a `ScheduleProfile` from a CSV file.
pub fn load_profile_csv(path: &Path) -> Result<ScheduleProfile, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_profile_reader(file)
}

/// Like [`load_profile_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for profiles embedded in
/// the application binary.
pub fn load_profile_reader<R: Read>(reader: R) -> Result<ScheduleProfile, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut profile = ScheduleProfile::default();
    let mut rows = 0usize;

    for result in csv_reader.deserialize::<ProfileRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let day = Weekday::try_from(row.day)?;
        let kind: EventKind = row.kind.parse()?;

        profile.set_mean(kind, day.index(), row.mean)?;
        profile.set_std_dev(kind, day.index(), row.std_dev)?;
        rows += 1;
    }

    tracing::debug!(rows, "loaded schedule profile");
    Ok(profile)
}
