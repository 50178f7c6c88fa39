//! Batch driver: file-to-file glitch generation.
//!
//! Iterates input files × iteration numbers, calls the engine once per pair,
//! and writes each result to a derived output path. Processing is strictly
//! sequential; each file is read once and every iteration starts from the
//! pristine bytes, so iterations are independent rather than chained.
//!
//! # Output naming
//!
//! `{stem}_glitched_{mode}_{iteration}{.ext}`, joined with the output
//! directory (current directory when none is given). Collisions silently
//! overwrite; there is no overwrite check.
//!
//! # Failure policy
//!
//! Validation happens before any I/O and aborts the whole batch. A read or
//! write failure is fatal to the run: no retries, no skipping, and outputs
//! already written stay on disk.

use crate::engine::{transform, GlitchSpec};
use crate::error::{Error, Result, ValidationError};
use crate::stats::BatchStats;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything needed to run one batch, constructed once from user input.
///
/// No process-wide state: the request carries the file selection, output
/// directory, and parameters for the whole run.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    /// Input files, processed in order
    pub input_files: Vec<PathBuf>,

    /// Output directory (None = current directory)
    pub output_dir: Option<PathBuf>,

    /// Glitch parameters shared by every (file, iteration) pair
    pub spec: GlitchSpec,

    /// Independent outputs per input file (>= 1)
    pub iterations: u32,

    /// Seed for the run's random source
    pub seed: u64,
}

impl BatchRequest {
    /// Check the request before touching any file.
    fn validate(&self) -> Result<()> {
        if self.input_files.is_empty() {
            return Err(ValidationError::NoInputFiles.into());
        }
        if self.iterations == 0 {
            return Err(ValidationError::ZeroIterations.into());
        }
        self.spec.validate()?;
        Ok(())
    }
}

/// The outcome of a successful batch run.
#[derive(Debug)]
pub struct BatchResult {
    /// Output paths in file-major, iteration-minor order;
    /// length = input files × iterations
    pub outputs: Vec<PathBuf>,

    /// Counters and timing for the run
    pub stats: BatchStats,
}

/// Run a batch: for each input file, for each iteration, glitch a pristine
/// copy of the file and write it out.
///
/// # Errors
/// - [`Error::Validation`] before any I/O if the request is malformed
/// - [`Error::ReadInput`] / [`Error::WriteOutput`] on the first I/O failure,
///   aborting the rest of the run
pub fn run_batch(request: &BatchRequest) -> Result<BatchResult> {
    request.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let mut stats = BatchStats::new();
    let mut outputs = Vec::with_capacity(request.input_files.len() * request.iterations as usize);

    for input in &request.input_files {
        let original = fs::read(input).map_err(|source| Error::ReadInput {
            path: input.clone(),
            source,
        })?;
        stats.files_read += 1;
        stats.input_bytes += original.len() as u64;

        for iteration in 1..=request.iterations {
            let mutated = transform(&original, &request.spec, &mut rng);
            let out_path = output_path(input, request, iteration);

            fs::write(&out_path, &mutated).map_err(|source| Error::WriteOutput {
                path: out_path.clone(),
                source,
            })?;
            stats.outputs_written += 1;
            stats.output_bytes += mutated.len() as u64;
            outputs.push(out_path);
        }
    }

    stats.finish();
    Ok(BatchResult { outputs, stats })
}

/// Derive the output path for one (file, iteration) pair.
fn output_path(input: &Path, request: &BatchRequest, iteration: u32) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{stem}_glitched_{}_{iteration}", request.spec.mode);
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }

    match &request.output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
