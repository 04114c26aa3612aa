//! Core error types for tlc-util crate

use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading source files
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be opened or read
    #[error("Failed to read source file {path}: {source}")]
    Io {
        /// Path of the file being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A reader failed while the source was being buffered
    #[error("Failed to read source stream {name}: {source}")]
    Stream {
        /// Display name given to the stream
        name: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for source loading
pub type SourceResult<T> = std::result::Result<T, SourceError>;
