//! weekly — sample a week of resident routines for a small household.
//!
//! Usage: `weekly [config.json]`
//!
//! Without a config file the run generates schedules for 4 residents from
//! the built-in profile below, seeded from OS entropy.  A config file may
//! override any `ScheduleConfig` field:
//!
//! ```json
//! { "resident_count": 400, "seed": 42, "output_csv": "schedules.csv" }
//! ```
//!
//! `profile_csv` may point at a CSV profile or at a `.json` dump of a
//! `ScheduleProfile`; both are validated on load.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use hw_core::{ScheduleConfig, Weekday, format_hms};
use hw_schedule::{
    EventKind, ScheduleProfile, generate_schedules, load_profile_csv, load_profile_reader,
    write_schedules_csv,
};

// ── Built-in profile ──────────────────────────────────────────────────────────

const DEFAULT_RESIDENTS: usize = 4;

// Weekdays: up 06:30, out 07:30, back 18:00, bed 23:00.
// Weekend: up 09:00, no commute (mean at home time, wide spread), bed 00:30.
const PROFILE_CSV: &str = "\
day,kind,mean,std_dev\n\
0,wake,23400,1200\n0,work,27000,600\n0,return_home,64800,1800\n0,sleep,82800,1800\n\
1,wake,23400,1200\n1,work,27000,600\n1,return_home,64800,1800\n1,sleep,82800,1800\n\
2,wake,23400,1200\n2,work,27000,600\n2,return_home,64800,1800\n2,sleep,82800,1800\n\
3,wake,23400,1200\n3,work,27000,600\n3,return_home,64800,1800\n3,sleep,82800,1800\n\
4,wake,23400,1200\n4,work,27000,600\n4,return_home,64800,1800\n4,sleep,84600,2700\n\
5,wake,32400,3600\n5,work,39600,7200\n5,return_home,54000,7200\n5,sleep,1800,3600\n\
6,wake,32400,3600\n6,work,39600,7200\n6,return_home,54000,7200\n6,sleep,84600,2700\n\
";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => ScheduleConfig { resident_count: DEFAULT_RESIDENTS, ..ScheduleConfig::default() },
    };
    config.validate()?;

    let profile: ScheduleProfile = match &config.profile_csv {
        Some(path) => load_profile(path)?,
        None => load_profile_reader(Cursor::new(PROFILE_CSV))?,
    };
    println!("{profile}");

    let seeds = config.make_seed_source();
    let t0 = Instant::now();
    let schedules = generate_schedules(&profile, config.resident_count, &seeds);
    info!(
        residents = schedules.len(),
        seed = ?config.seed,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "sampled schedules"
    );

    if let Some(first) = schedules.first() {
        println!("Resident 0 (seed {:#018x}):\n{first}", first.seed());
    }

    // Household summary: earliest wake-up and latest return per day.
    for day in Weekday::ALL {
        let earliest_wake = schedules.iter().map(|s| s.at(EventKind::Wake, day)).min();
        let latest_return = schedules.iter().map(|s| s.at(EventKind::ReturnHome, day)).max();
        if let (Some(wake), Some(ret)) = (earliest_wake, latest_return) {
            println!(
                "{:<10} first up {}  last home {}",
                day.name(),
                format_hms(wake),
                format_hms(ret)
            );
        }
    }

    if let Some(path) = &config.output_csv {
        write_schedules_csv(path, &schedules)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote schedules");
    }

    Ok(())
}

/// A `.json` profile is a serialized `ScheduleProfile`; anything else is CSV.
fn load_profile(path: &Path) -> Result<ScheduleProfile> {
    let context = || format!("loading profile {}", path.display());
    if path.extension().is_some_and(|ext| ext == "json") {
        let text = std::fs::read_to_string(path).with_context(context)?;
        serde_json::from_str(&text).with_context(context)
    } else {
        load_profile_csv(path).with_context(context)
    }
}

fn load_config(path: &Path) -> Result<ScheduleConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: ScheduleConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
