//! Run configuration for schedule generation.

use std::path::PathBuf;

use crate::rng::{EntropySeedSource, FixedSeedSource, SeedSource};
use crate::{HwError, HwResult};

/// Top-level schedule-generation configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the generator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScheduleConfig {
    /// How many residents (one schedule each) to generate.
    pub resident_count: usize,

    /// Base seed for reproducible runs.  `None` seeds from OS entropy, so
    /// every run differs.
    pub seed: Option<u64>,

    /// CSV file with `day,kind,mean,std_dev` rows.  `None` uses the built-in
    /// profile of the application.
    pub profile_csv: Option<PathBuf>,

    /// Where to write the sampled schedules.  `None` skips the export.
    pub output_csv: Option<PathBuf>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            resident_count: 1,
            seed: None,
            profile_csv: None,
            output_csv: None,
        }
    }
}

impl ScheduleConfig {
    /// Reject configurations that cannot produce any schedule.
    pub fn validate(&self) -> HwResult<()> {
        if self.resident_count == 0 {
            return Err(HwError::Config("resident_count must be at least 1".into()));
        }
        Ok(())
    }

    /// Build the seed source this run should draw from.
    ///
    /// Without a fixed seed every run shares the process-wide
    /// [`EntropySeedSource::global`] instance.
    pub fn make_seed_source(&self) -> Box<dyn SeedSource> {
        match self.seed {
            Some(seed) => Box::new(FixedSeedSource::new(seed)),
            None => Box::new(EntropySeedSource::global()),
        }
    }
}
