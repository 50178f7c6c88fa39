//! glitchbend CLI: thin adapter over the core batch driver.
//!
//! Collects parameters and file paths from the command line, runs the batch,
//! and prints the generated output paths plus a summary. Usage errors exit
//! with code 2, runtime failures with code 1.

mod config;

use config::Config;
use glitchbend_core::run_batch;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("try: glitchbend --help");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    match run_batch(&config.request) {
        Ok(result) => {
            println!("{} file(s) generated:", result.outputs.len());
            for path in &result.outputs {
                println!("  {}", path.display());
            }
            println!();
            result.stats.print_summary();
            println!("Seed: {} (pass --seed {} to reproduce)", config.request.seed, config.request.seed);
        }
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
