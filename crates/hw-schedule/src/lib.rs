//! `hw-schedule` — weekly resident profiles and sampled daily schedules.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`event`]     | `EventKind`, `NormalParams`                               |
//! | [`profile`]   | `ScheduleProfile` (validated mean/std per kind and day)   |
//! | [`daily`]     | `DailySchedule`, `generate_schedules`                     |
//! | [`loader`]    | `load_profile_csv`, `load_profile_reader`                 |
//! | [`writer`]    | `write_schedules_csv`, `write_schedules_writer`           |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Sampling model (summary)
//!
//! For every event kind `k` and weekday `d` the profile holds a normal
//! distribution `N(mean, std_dev)` in seconds of day.  A schedule draws once
//! from each of the 28 distributions with its own private RNG:
//!
//! ```text
//! raw   = trunc(sample(N(mean[k][d], std_dev[k][d])))   // toward zero
//! value = ((raw % 86400) + 86400) % 86400
//! ```
//!
//! Days are independent of each other; a late bedtime does not shift the
//! next morning's wake time.

pub mod daily;
pub mod error;
pub mod event;
pub mod loader;
pub mod profile;
pub mod writer;


pub use daily::{DailySchedule, generate_schedules};
pub use error::{ScheduleError, ScheduleResult};
pub use event::{EventKind, NormalParams};
pub use loader::{load_profile_csv, load_profile_reader};
pub use profile::ScheduleProfile;
pub use writer::{write_schedules_csv, write_schedules_writer};
