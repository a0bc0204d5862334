//! Error types for the `ecosim-core` crate.
//!
//! Persistence failures are reported through [`PersistError`]. The daily
//! step itself has no failure modes.

/// Errors that can occur while saving or loading an ecosystem.
///
/// Neither direction is partial-write safe: a failure part-way through a
/// write can leave a truncated document behind.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Reading or writing the named resource failed.
    #[error("storage error for {name}: {source}")]
    Io {
        /// The resource being read or written.
        name: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A species holds a NaN or infinite value, which the document format
    /// cannot represent. Nothing is written.
    #[error("non-finite {field} for species {name}")]
    NonFinite {
        /// The species carrying the value.
        name: String,
        /// The saved field name holding it.
        field: &'static str,
    },

    /// The document could not be encoded, or is malformed or missing a
    /// required key or field.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
