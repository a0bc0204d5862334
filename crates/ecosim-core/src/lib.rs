//! Ecosystem state, daily step, persistence, and run loop for the Ecosim model.
//!
//! The ecosystem holds three ordered collections (plants, herbivores,
//! carnivores) and advances them one day at a time in trophic order. The
//! model is single-threaded and deterministic.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `ecosim-config.yaml` into
//!   strongly-typed structs.
//! - [`ecosystem`] -- [`Ecosystem`] collections and species admission.
//! - [`error`] -- [`PersistError`] for save and load failures.
//! - [`persist`] -- JSON document schema, save, and additive load.
//! - [`runner`] -- Bounded multi-day runs with per-day callbacks.
//! - [`storage`] -- Byte-level named storage ([`FileStorage`],
//!   [`MemoryStorage`]).
//! - [`tick`] -- The daily step and its [`DaySummary`].
//!
//! [`Ecosystem`]: ecosystem::Ecosystem
//! [`PersistError`]: error::PersistError
//! [`FileStorage`]: storage::FileStorage
//! [`MemoryStorage`]: storage::MemoryStorage
//! [`DaySummary`]: tick::DaySummary

pub mod config;
pub mod ecosystem;
pub mod error;
pub mod persist;
pub mod runner;
pub mod storage;
pub mod tick;

// Re-export primary types at crate root.
pub use config::{ConfigError, SimulationConfig};
pub use ecosystem::Ecosystem;
pub use error::PersistError;
pub use persist::EcosystemDocument;
pub use runner::{DayCallback, NoOpCallback, RunResult, RunnerError, SnapshotCallback, run_days};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use tick::{DaySummary, STARVATION_SURVIVAL};
