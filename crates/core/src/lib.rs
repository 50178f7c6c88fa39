//! glitchbend-core: batch file-mutation ("databending") engine
//!
//! This library produces corrupted copies of files by applying randomized
//! byte-level transformations, the classic databending technique for
//! producing visual and audio artifacts from media files.
//!
//! # Architecture
//!
//! - `engine`: the glitch transform, a pure function over a byte buffer
//! - `batch`: file-to-file driver iterating input files × iterations
//! - `error`: structured error types
//! - `stats`: run counters and timing
//!
//! # Design Principles
//!
//! - **Format-agnostic**: input is an opaque byte sequence; the optional
//!   header-skip flag is the only concession to file structure
//! - **Pure engine**: the transform never touches the filesystem and takes
//!   its random source as a parameter, so tests can drive it deterministically
//! - **No hidden state**: a batch is described entirely by one request value
//! - **Fail fast**: parameters are validated before any file is touched, and
//!   the first I/O failure stops the run

pub mod batch;
pub mod engine;
pub mod error;
pub mod stats;

// Re-export commonly used types
pub use batch::{run_batch, BatchRequest, BatchResult};
pub use engine::{transform, GlitchSpec, Mode, HEADER_LEN};
pub use error::{Error, Result, ValidationError};
pub use stats::BatchStats;
