use hw_core::{DayOutOfRange, Weekday};
use thiserror::Error;

use crate::EventKind;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    OutOfRange(#[from] DayOutOfRange),

    #[error("{kind} mean on {day} must lie in [0, 86400] seconds, got {value}")]
    MeanOutOfRange { kind: EventKind, day: Weekday, value: f64 },

    #[error("{kind} standard deviation on {day} must be finite and non-negative, got {value}")]
    InvalidStdDev { kind: EventKind, day: Weekday, value: f64 },

    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
