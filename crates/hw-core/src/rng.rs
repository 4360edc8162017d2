//! Per-schedule RNG streams and the seed sources that bootstrap them.
//!
//! # Seeding strategy
//!
//! Randomness is two-level:
//!
//! 1. One [`SeedSource`] is shared by every schedule construction.  It is
//!    touched exactly once per construction, to draw a single `u64`.
//! 2. That `u64` seeds a private [`ScheduleRng`] owned by the schedule.  All
//!    sampling for the schedule goes through the private stream.
//!
//! Two seed sources ship with the crate:
//!
//! - [`EntropySeedSource`] — a `StdRng` seeded from OS entropy behind a
//!   `Mutex`.  [`EntropySeedSource::global`] is the lazily-initialised
//!   process-wide instance.
//! - [`FixedSeedSource`] — a lock-free counter mixed with a base seed:
//!
//!   seed_n = base_seed XOR ((n + 1) * MIXING_CONSTANT)
//!
//!   The mixing constant is the 64-bit fractional part of the golden ratio,
//!   which spreads consecutive draws uniformly across the seed space.  Runs
//!   with the same base seed reproduce the same schedules in the same order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use rand::rngs::{SmallRng, StdRng};
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── SeedSource ────────────────────────────────────────────────────────────────

/// The shared origin of per-schedule seeds.
///
/// Implementations must be safe to call from several threads at once; the
/// draw is the only point where schedule constructions contend.
pub trait SeedSource: Send + Sync {
    /// Draw one seed for a new private stream.
    fn next_seed(&self) -> u64;
}

impl<S: SeedSource + ?Sized> SeedSource for &S {
    #[inline]
    fn next_seed(&self) -> u64 {
        (**self).next_seed()
    }
}

impl<S: SeedSource + ?Sized> SeedSource for Box<S> {
    #[inline]
    fn next_seed(&self) -> u64 {
        (**self).next_seed()
    }
}

// ── EntropySeedSource ─────────────────────────────────────────────────────────

/// Non-deterministic seed source backed by an OS-entropy-seeded `StdRng`.
pub struct EntropySeedSource {
    rng:   Mutex<StdRng>,
    drawn: AtomicU64,
}

static GLOBAL_SEEDS: OnceLock<EntropySeedSource> = OnceLock::new();

impl EntropySeedSource {
    pub fn new() -> Self {
        EntropySeedSource {
            rng:   Mutex::new(StdRng::from_entropy()),
            drawn: AtomicU64::new(0),
        }
    }

    /// The process-wide instance, seeded from OS entropy on first use.
    pub fn global() -> &'static EntropySeedSource {
        GLOBAL_SEEDS.get_or_init(|| {
            tracing::debug!("initialising process-wide entropy seed source");
            EntropySeedSource::new()
        })
    }

    /// Number of seeds handed out so far.
    pub fn drawn(&self) -> u64 {
        self.drawn.load(Ordering::Relaxed)
    }
}

impl Default for EntropySeedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedSource for EntropySeedSource {
    fn next_seed(&self) -> u64 {
        // The generator state is valid even after a panic under the lock.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.drawn.fetch_add(1, Ordering::Relaxed);
        rng.r#gen::<u64>()
    }
}

// ── FixedSeedSource ───────────────────────────────────────────────────────────

/// Deterministic, lock-free seed source for tests and reproducible runs.
pub struct FixedSeedSource {
    base_seed: u64,
    drawn:     AtomicU64,
}

impl FixedSeedSource {
    pub fn new(base_seed: u64) -> Self {
        FixedSeedSource { base_seed, drawn: AtomicU64::new(0) }
    }

    /// Number of seeds handed out so far.
    pub fn drawn(&self) -> u64 {
        self.drawn.load(Ordering::Relaxed)
    }
}

impl SeedSource for FixedSeedSource {
    fn next_seed(&self) -> u64 {
        let n = self.drawn.fetch_add(1, Ordering::Relaxed);
        self.base_seed ^ n.wrapping_add(1).wrapping_mul(MIXING_CONSTANT)
    }
}

// ── ScheduleRng ───────────────────────────────────────────────────────────────

/// Private RNG stream owned by a single schedule.
///
/// Not `Clone`: two schedules never share a stream.
pub struct ScheduleRng(SmallRng);

impl ScheduleRng {
    /// Start a stream from a seed drawn from a [`SeedSource`].
    pub fn new(seed: u64) -> Self {
        ScheduleRng(SmallRng::seed_from_u64(seed))
    }

    /// One draw from `Normal(mean, std_dev)`.
    ///
    /// Computed as `mean + std_dev * z` with `z ~ StandardNormal`, which is
    /// infallible for any finite, non-negative `std_dev`.  With `std_dev == 0`
    /// the result is exactly `mean`.
    #[inline]
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.0.sample(StandardNormal);
        mean + std_dev * z
    }
}
