//! `hw-core` — foundational types for the household water-usage twin.
//!
//! This crate is a dependency of every other `hw-*` crate.  It intentionally
//! has no `hw-*` dependencies and minimal external ones (`rand`, `thiserror`
//! and `tracing`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`time`]        | `SECONDS_PER_DAY`, `Weekday`, cyclic wrap, `format_hms` |
//! | [`rng`]         | `ScheduleRng` (per-instance), `SeedSource` and impls  |
//! | [`config`]      | `ScheduleConfig`                                      |
//! | [`error`]       | `HwError`, `HwResult`, `DayOutOfRange`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ScheduleConfig;
pub use error::{DayOutOfRange, HwError, HwResult};
pub use rng::{EntropySeedSource, FixedSeedSource, ScheduleRng, SeedSource};
pub use time::{DAYS_PER_WEEK, SECONDS_PER_DAY, Weekday, format_hms, wrap_second_of_day};
