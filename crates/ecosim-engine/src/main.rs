//! Engine binary for the Ecosim model.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `ecosim-config.yaml` (or `ECOSIM_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Seed a fresh ecosystem from the configured species
//! 4. Append a saved document if `simulation.resume_from` is set
//! 5. Run the configured number of days, snapshotting periodically
//! 6. Save the final state and log the result

mod error;

use std::path::PathBuf;

use ecosim_core::runner::{self, SnapshotCallback};
use ecosim_core::{FileStorage, SimulationConfig};
use ecosim_species::SpeciesKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "ecosim-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if configuration, loading, the run, or the final save
/// fails.
fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let (config, config_found) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        world_name = config.world.name,
        days = config.simulation.days,
        snapshot_interval_days = config.simulation.snapshot_interval_days,
        config_found,
        "Configuration loaded"
    );

    // 3. Seed the ecosystem.
    let mut ecosystem = config.seed_ecosystem();
    info!(
        seeds = config.species.len(),
        admitted = ecosystem.species_count(),
        "Ecosystem seeded"
    );

    // 4. Resume from a saved document.
    if let Some(path) = &config.simulation.resume_from {
        ecosystem.load(path)?;
    }

    for kind in SpeciesKind::ALL {
        info!(
            tier = %kind,
            species = ecosystem.tier_len(kind),
            population = ecosystem.tier_population(kind),
            "Initial tier"
        );
    }

    // 5. Run.
    let mut storage = FileStorage::default();
    let snapshot_path = config.simulation.snapshot_path.clone();
    let result = {
        let mut callback = SnapshotCallback::new(
            &mut storage,
            snapshot_path.clone(),
            config.simulation.snapshot_interval_days,
        );
        runner::run_days(&mut ecosystem, config.simulation.days, &mut callback)?
    };

    // 6. Save and log.
    ecosystem.save_to(&mut storage, &snapshot_path)?;
    runner::log_run_end(&result);
    info!(
        snapshot = %snapshot_path.display(),
        "ecosim-engine shutdown complete"
    );

    Ok(())
}

/// Load configuration from `ECOSIM_CONFIG` or `ecosim-config.yaml`.
///
/// Falls back to defaults when the file does not exist. The flag reports
/// whether a file was read.
fn load_config() -> Result<(SimulationConfig, bool), EngineError> {
    let config_path = std::env::var("ECOSIM_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if config_path.exists() {
        Ok((SimulationConfig::from_file(&config_path)?, true))
    } else {
        Ok((SimulationConfig::parse("")?, false))
    }
}
