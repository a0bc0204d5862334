//! Error types for the engine binary.
//!
//! [`EngineError`] wraps every failure mode during startup and the run so
//! that `main` can propagate with `?`.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ecosim_core::ConfigError,
    },

    /// Loading the resume document or writing the final state failed.
    #[error("persistence error: {source}")]
    Persist {
        /// The underlying persistence error.
        #[from]
        source: ecosim_core::PersistError,
    },

    /// The run failed part-way.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: ecosim_core::RunnerError,
    },
}
