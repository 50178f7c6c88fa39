//! Error types for glitchbend.
//!
//! All fallible operations return structured errors rather than panicking.
//! Validation errors are detected before any file I/O; I/O errors carry the
//! path that failed so the user sees exactly which file broke the run.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Validation: bad parameters, caught before any file is touched
/// - ReadInput: an input file could not be opened or read
/// - WriteOutput: an output file could not be written
///
/// I/O failures are fatal to the whole batch; there is no per-file retry or
/// skip, and outputs already written before the failure remain on disk.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid batch parameters (no files, zero size, unknown mode, ...)
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An input file could not be read
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Parameter validation errors.
///
/// All of these are detected up front; a batch that fails validation
/// performs no I/O at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The batch request contained no input files
    #[error("no input files selected")]
    NoInputFiles,

    /// Iterations must be at least 1
    #[error("iterations must be at least 1")]
    ZeroIterations,

    /// Glitch size must be at least 1 byte
    #[error("glitch size must be at least 1 byte")]
    ZeroSize,

    /// The mode name did not match any known operator
    #[error("unknown glitch mode: {0:?}")]
    UnknownMode(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
