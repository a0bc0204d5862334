//! Bounded multi-day run with per-day callbacks.
//!
//! [`run_days`] wraps [`Ecosystem::simulate_day`] and adds the control
//! plane around it: a fixed day budget, a callback after every day, and
//! extinction warnings when a tier's total population drops to zero or
//! below. The run is synchronous and always terminates.

use std::path::PathBuf;

use ecosim_species::SpeciesKind;
use tracing::{info, warn};

use crate::ecosystem::Ecosystem;
use crate::error::PersistError;
use crate::storage::Storage;
use crate::tick::DaySummary;

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A callback failed to persist a snapshot.
    #[error("snapshot error on day {day}: {source}")]
    Snapshot {
        /// The day after which the snapshot was attempted.
        day: u64,
        /// The underlying persistence error.
        source: PersistError,
    },
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Number of days simulated.
    pub days_run: u64,
    /// Summary of the last day, if any day ran.
    pub final_summary: Option<DaySummary>,
}

/// Callback invoked after each simulated day.
pub trait DayCallback {
    /// Called with the 1-based day number, its summary, and the ecosystem
    /// state after the day.
    fn on_day(
        &mut self,
        day: u64,
        summary: &DaySummary,
        ecosystem: &Ecosystem,
    ) -> Result<(), RunnerError>;
}

/// A no-op day callback for testing.
pub struct NoOpCallback;

impl DayCallback for NoOpCallback {
    fn on_day(
        &mut self,
        _day: u64,
        _summary: &DaySummary,
        _ecosystem: &Ecosystem,
    ) -> Result<(), RunnerError> {
        Ok(())
    }
}

/// Writes a snapshot every `interval_days` days.
pub struct SnapshotCallback<'a> {
    storage: &'a mut dyn Storage,
    name: PathBuf,
    interval_days: u64,
    written: u64,
}

impl<'a> SnapshotCallback<'a> {
    /// Snapshot to `name` in `storage` every `interval_days` days. An
    /// interval of zero never snapshots.
    pub fn new(
        storage: &'a mut dyn Storage,
        name: impl Into<PathBuf>,
        interval_days: u64,
    ) -> Self {
        Self {
            storage,
            name: name.into(),
            interval_days,
            written: 0,
        }
    }

    /// Number of snapshots written so far.
    pub const fn snapshots_written(&self) -> u64 {
        self.written
    }
}

impl DayCallback for SnapshotCallback<'_> {
    fn on_day(
        &mut self,
        day: u64,
        _summary: &DaySummary,
        ecosystem: &Ecosystem,
    ) -> Result<(), RunnerError> {
        if self.interval_days == 0 || day.checked_rem(self.interval_days) != Some(0) {
            return Ok(());
        }
        ecosystem
            .save_to(&mut *self.storage, &self.name)
            .map_err(|source| RunnerError::Snapshot { day, source })?;
        self.written = self.written.saturating_add(1);
        Ok(())
    }
}

/// Simulate `days` days, calling `callback` after each one.
///
/// # Errors
///
/// Returns [`RunnerError`] if the callback fails. Days already simulated
/// stay applied to the ecosystem.
pub fn run_days(
    ecosystem: &mut Ecosystem,
    days: u64,
    callback: &mut dyn DayCallback,
) -> Result<RunResult, RunnerError> {
    let mut final_summary = None;
    let mut extinct = [false; 3];

    info!(days, species = ecosystem.species_count(), "Run starting");

    for day in 1..=days {
        let summary = ecosystem.simulate_day();

        for (kind, seen) in SpeciesKind::ALL.into_iter().zip(extinct.iter_mut()) {
            let has_members = ecosystem.tier_len(kind) > 0;
            if has_members && !*seen && ecosystem.tier_population(kind) <= 0.0 {
                warn!(day, tier = %kind, "Tier population reached zero");
                *seen = true;
            }
        }

        callback.on_day(day, &summary, ecosystem)?;
        final_summary = Some(summary);
    }

    Ok(RunResult {
        days_run: days,
        final_summary,
    })
}

/// Log the end of a run.
pub fn log_run_end(result: &RunResult) {
    info!(
        days_run = result.days_run,
        plants = result.final_summary.map(|s| s.plant_population),
        herbivores = result.final_summary.map(|s| s.herbivore_population),
        carnivores = result.final_summary.map(|s| s.carnivore_population),
        "Run ended"
    );
}
