//! Run statistics for a batch of glitch operations.
//!
//! Collected single-threaded by the batch driver with explicit updates at
//! each step, then printed as a summary after the run. Not thread-safe;
//! there is no concurrent access anywhere in the system.

use std::time::{Duration, Instant};

/// Counters and timing for one batch run.
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// When the batch started
    pub start_time: Instant,

    /// When the batch ended (set on completion)
    pub end_time: Option<Instant>,

    /// Input files read
    pub files_read: u64,

    /// Total bytes read from input files
    pub input_bytes: u64,

    /// Output files written
    pub outputs_written: u64,

    /// Total bytes written to output files
    pub output_bytes: u64,
}

impl BatchStats {
    /// Create new stats with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            files_read: 0,
            input_bytes: 0,
            outputs_written: 0,
            output_bytes: 0,
        }
    }

    /// Mark the batch as finished.
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Elapsed time (to now if the batch hasn't finished).
    pub fn elapsed(&self) -> Duration {
        self.end_time.unwrap_or_else(Instant::now) - self.start_time
    }

    /// Print a human-readable summary.
    pub fn print_summary(&self) {
        println!("=== Batch Summary ===");
        println!("Files read:      {} ({} bytes)", self.files_read, self.input_bytes);
        println!("Outputs written: {} ({} bytes)", self.outputs_written, self.output_bytes);
        println!("Elapsed:         {:.2?}", self.elapsed());
    }
}

impl Default for BatchStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_freezes_elapsed() {
        let mut stats = BatchStats::new();
        stats.finish();
        let a = stats.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        let b = stats.elapsed();
        assert_eq!(a, b);
    }

    #[test]
    fn test_counters_start_at_zero() {
        let stats = BatchStats::default();
        assert_eq!(stats.files_read, 0);
        assert_eq!(stats.input_bytes, 0);
        assert_eq!(stats.outputs_written, 0);
        assert_eq!(stats.output_bytes, 0);
        assert!(stats.end_time.is_none());
    }
}
