//! Configuration for the glitchbend CLI.
//!
//! Handles parsing command-line arguments into a batch request. Numeric
//! fields are validated here, before any file is touched; a field that
//! doesn't parse aborts the run with a single human-readable message.
//!
//! # Defaults
//!
//! Mode `change`, 3 iterations, 20 glitches of 10 bytes each, header kept.
//! The seed defaults to the current time and is printed so any run can be
//! reproduced.

use glitchbend_core::{BatchRequest, GlitchSpec, Mode};
use std::path::PathBuf;

/// Complete configuration for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// The batch to run
    pub request: BatchRequest,

    /// Whether to print the resolved configuration before running
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// Positional arguments are input files; everything else is flags.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_files: Vec<PathBuf> = Vec::new();
        let mut output_dir: Option<PathBuf> = None;
        let mut mode = Mode::Change;
        let mut iterations: u32 = 3;
        let mut count: u32 = 20;
        let mut size: usize = 10;
        let mut skip_header = false;
        let mut seed: Option<u64> = None;
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a directory".to_string());
                    }
                    output_dir = Some(PathBuf::from(&args[i]));
                }
                "--mode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--mode requires a name".to_string());
                    }
                    mode = args[i].parse().map_err(|e| format!("{e}"))?;
                }
                "--iterations" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--iterations requires a number".to_string());
                    }
                    iterations = args[i].parse().map_err(|_| "invalid iterations")?;
                }
                "--count" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--count requires a number".to_string());
                    }
                    count = args[i].parse().map_err(|_| "invalid count")?;
                }
                "--size" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--size requires a number".to_string());
                    }
                    size = args[i].parse().map_err(|_| "invalid size")?;
                }
                "--skip-header" => {
                    skip_header = true;
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                flag if flag.starts_with("--") => {
                    return Err(format!("unknown argument: {flag}"));
                }
                path => {
                    input_files.push(PathBuf::from(path));
                }
            }
            i += 1;
        }

        // Explicit seed or time-based (printed later, so runs are reproducible)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            request: BatchRequest {
                input_files,
                output_dir,
                spec: GlitchSpec {
                    mode,
                    count,
                    size,
                    skip_header,
                },
                iterations,
                seed,
            },
            print_config,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        let req = &self.request;
        println!("=== Configuration ===");
        println!("Input files: {}", req.input_files.len());
        for path in &req.input_files {
            println!("  {}", path.display());
        }
        println!(
            "Output dir:  {}",
            req.output_dir
                .as_ref()
                .map_or_else(|| ".".to_string(), |p| p.display().to_string())
        );
        println!();
        println!("Mode:        {}", req.spec.mode);
        println!("Iterations:  {}", req.iterations);
        println!("Count:       {} glitches per iteration", req.spec.count);
        println!("Size:        {} bytes per glitch", req.spec.size);
        println!("Skip header: {}", req.spec.skip_header);
        println!("Seed:        {}", req.seed);
        println!();
    }
}

pub fn print_help() {
    println!("glitchbend: produce corrupted copies of files (databending)");
    println!();
    println!("USAGE:");
    println!("    glitchbend [OPTIONS] <FILE>...");
    println!();
    println!("OPTIONS:");
    println!("    --out <DIR>          Output directory (default: current directory)");
    println!("    --mode <NAME>        Glitch operator (default: change)");
    println!("                         one of: change, insert, repeat, zero,");
    println!("                                 remove, replace, reverse, move");
    println!("    --iterations <N>     Independent outputs per file (default: 3)");
    println!("    --count <N>          Glitches per iteration (default: 20)");
    println!("    --size <N>           Bytes per glitch (default: 10)");
    println!("    --skip-header        Protect the first 100 bytes");
    println!("    --seed <N>           Random seed for reproducible runs");
    println!("    --print-config       Print resolved configuration");
    println!("    --help, -h           Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    glitchbend photo.jpg                       # 3 glitched copies");
    println!("    glitchbend --mode zero --size 64 clip.wav  # zero out 64-byte runs");
    println!("    glitchbend --skip-header --out ./bent *.png");
    println!();
}
