//! Error types for profile loading.
//!
//! Parsing itself never fails: malformed lines are absorbed by the
//! classifier. Only I/O-level problems are reported, and the underlying OS
//! error text is carried verbatim on the source chain.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for load operations.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to open or read a source file.
    #[error("failed to read '{}': {source}", path.display())]
    FileRead {
        /// Path to the source file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The directory portion of a load could not be enumerated.
    ///
    /// Distinct from "directory valid but zero files matched", which is a
    /// successful load of zero files.
    #[error("invalid directory '{}': {source}", path.display())]
    Directory {
        /// Path to the directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A glob pattern could not be compiled into a matcher.
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A path had no final segment to interpret as a filename or pattern.
    #[error("path '{}' has no filename component", path.display())]
    MissingFileName {
        /// The offending path
        path: PathBuf,
    },
}
