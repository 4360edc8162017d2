//! CSV export of sampled schedules.
//!
//! One row per (resident, weekday):
//!
//! ```csv
//! resident,day,wake,work,return_home,sleep
//! 0,0,25013,28790,64311,83102
//! ```
//!
//! `resident` is the schedule's position in the exported slice; `day` is the
//! weekday index.  Times are seconds of day.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use hw_core::Weekday;

use crate::{DailySchedule, ScheduleResult};

const HEADER: [&str; 6] = ["resident", "day", "wake", "work", "return_home", "sleep"];

/// Write `schedules` to a new CSV file at `path`.
pub fn write_schedules_csv(path: &Path, schedules: &[DailySchedule]) -> ScheduleResult<()> {
    let file = std::fs::File::create(path)?;
    write_schedules_writer(file, schedules)
}

/// Like [`write_schedules_csv`] but accepts any `Write` sink.
pub fn write_schedules_writer<W: Write>(sink: W, schedules: &[DailySchedule]) -> ScheduleResult<()> {
    let mut writer = Writer::from_writer(sink);
    writer.write_record(HEADER)?;

    for (resident, schedule) in schedules.iter().enumerate() {
        for day in Weekday::ALL {
            let [wake, work, return_home, sleep] = schedule.day(day);
            writer.write_record(&[
                resident.to_string(),
                day.index().to_string(),
                wake.to_string(),
                work.to_string(),
                return_home.to_string(),
                sleep.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    tracing::debug!(residents = schedules.len(), "exported schedules");
    Ok(())
}
