//! The glitch transform: randomized byte-level corruption of a buffer.
//!
//! This module is the core of glitchbend. It is format-agnostic: input is an
//! opaque byte sequence, and each of the eight operators mutates it at a
//! uniformly random position. The transform is a pure function of the input
//! bytes, the parameters, and the random generator, so tests can drive it
//! with a fixed-seed RNG and production code can seed it however it likes.
//!
//! # Attempts vs. mutations
//!
//! The engine performs exactly `count` *attempts*. An attempt on a buffer too
//! small to hold a glitch of the requested size in the mutable region is a
//! silent no-op; this is the documented edge-case policy, not an error.
//! Length-changing operators (insert, remove, move) affect the bounds seen by
//! subsequent attempts within the same call.
//!
//! # Header protection
//!
//! With `skip_header` set, the first [`HEADER_LEN`] bytes are never touched
//! by any operator, keeping a format's magic bytes and leading structure
//! intact so the glitched file still opens in its native viewer.

use crate::error::ValidationError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of leading bytes protected from mutation when `skip_header` is set.
pub const HEADER_LEN: usize = 100;

/// The mutation operator applied on each attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Overwrite the window with uniform random bytes
    Change,
    /// Insert random bytes at the position, growing the buffer
    Insert,
    /// Tile the captured window over itself
    Repeat,
    /// Overwrite the window with zero bytes
    Zero,
    /// Delete the window, shrinking the buffer
    Remove,
    /// Substitute one random byte value for another within the window
    Replace,
    /// Reverse the byte order of the window
    Reverse,
    /// Delete the window and re-insert it at a new random position
    Move,
}

impl Mode {
    /// All modes, in the order the CLI help lists them.
    pub const ALL: [Mode; 8] = [
        Mode::Change,
        Mode::Insert,
        Mode::Repeat,
        Mode::Zero,
        Mode::Remove,
        Mode::Replace,
        Mode::Reverse,
        Mode::Move,
    ];

    /// Lower-case name, as used in CLI arguments and output filenames.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Change => "change",
            Mode::Insert => "insert",
            Mode::Repeat => "repeat",
            Mode::Zero => "zero",
            Mode::Remove => "remove",
            Mode::Replace => "replace",
            Mode::Reverse => "reverse",
            Mode::Move => "move",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "change" => Ok(Mode::Change),
            "insert" => Ok(Mode::Insert),
            "repeat" => Ok(Mode::Repeat),
            "zero" => Ok(Mode::Zero),
            "remove" => Ok(Mode::Remove),
            "replace" => Ok(Mode::Replace),
            "reverse" => Ok(Mode::Reverse),
            "move" => Ok(Mode::Move),
            other => Err(ValidationError::UnknownMode(other.to_string())),
        }
    }
}

/// Immutable parameters for one batch run.
///
/// Constructed once from user input and shared by every (file, iteration)
/// pair in the batch.
#[derive(Debug, Clone, Copy)]
pub struct GlitchSpec {
    /// Which operator to apply
    pub mode: Mode,

    /// Number of attempts per transform call
    pub count: u32,

    /// Window size in bytes per attempt (>= 1)
    pub size: usize,

    /// Protect the first [`HEADER_LEN`] bytes from mutation
    pub skip_header: bool,
}

impl GlitchSpec {
    /// Check parameter invariants that the type system doesn't enforce.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.size == 0 {
            return Err(ValidationError::ZeroSize);
        }
        Ok(())
    }

    /// First mutable byte position for this spec.
    fn start(&self) -> usize {
        if self.skip_header {
            HEADER_LEN
        } else {
            0
        }
    }
}

/// Apply `spec.count` glitch attempts to a copy of `data`.
///
/// The caller's bytes are never mutated; the returned vector is an
/// independent working copy. Infallible: attempts that don't fit the
/// current buffer are skipped, never retried.
///
/// # Arguments
/// - `data`: pristine input bytes
/// - `spec`: operator and attempt parameters
/// - `rng`: random source; pass a seeded generator for reproducible output
pub fn transform<R: Rng>(data: &[u8], spec: &GlitchSpec, rng: &mut R) -> Vec<u8> {
    let mut data = data.to_vec();
    let start = spec.start();

    for _ in 0..spec.count {
        // The mutable region [start, len) must fit a full window, with at
        // least one byte to spare so the position range is non-degenerate.
        if data.len() <= spec.size + start {
            continue;
        }

        let pos = rng.gen_range(start..=data.len() - spec.size - 1);
        apply_at(&mut data, spec, pos, start, rng);
    }

    data
}

/// Apply one attempt of `spec.mode` at `pos` on the current buffer.
fn apply_at<R: Rng>(data: &mut Vec<u8>, spec: &GlitchSpec, pos: usize, start: usize, rng: &mut R) {
    let size = spec.size;
    let chunk: Vec<u8> = data[pos..pos + size].to_vec();

    match spec.mode {
        Mode::Change => {
            for byte in &mut data[pos..pos + size] {
                *byte = rng.gen();
            }
        }

        Mode::Zero => {
            data[pos..pos + size].fill(0);
        }

        Mode::Insert => {
            let fresh: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
            data.splice(pos..pos, fresh);
        }

        Mode::Remove => {
            data.drain(pos..pos + size);
        }

        Mode::Repeat => {
            let tiled = tile_chunk(&chunk, size);
            data[pos..pos + size].copy_from_slice(&tiled);
        }

        Mode::Replace => {
            let from: u8 = rng.gen();
            let to: u8 = rng.gen();
            for byte in &mut data[pos..pos + size] {
                if *byte == from {
                    *byte = to;
                }
            }
        }

        Mode::Reverse => {
            data[pos..pos + size].reverse();
        }

        Mode::Move => {
            data.drain(pos..pos + size);
            // After the drain the buffer is still longer than `start`, so
            // the insertion range is valid. Inserting at len() appends.
            let new_pos = rng.gen_range(start..=data.len());
            data.splice(new_pos..new_pos, chunk);
        }
    }
}

/// Tile `chunk` to exactly `size` bytes (repeat and truncate).
fn tile_chunk(chunk: &[u8], size: usize) -> Vec<u8> {
    chunk.iter().copied().cycle().take(size).collect()
}
