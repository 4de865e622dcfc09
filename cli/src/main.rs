//! Reference command-line demonstration
//!
//! Prints alternating random integers and unit floats, mirroring the
//! generator's classic demo loop. Useful for eyeballing output and for
//! diffing sequences between builds.

use anyhow::Result;
use clap::Parser;
use twister_core_rs::{MersenneTwister, SeedSource, SystemClockSeed, DEFAULT_STATE_SIZE};

#[derive(Parser)]
#[command(name = "twister")]
#[command(about = "Deterministic Mersenne Twister demonstration")]
struct Cli {
    /// Seed for the generator; defaults to the current timestamp
    #[arg(long)]
    seed: Option<u64>,

    /// Number of int/float pairs to print
    #[arg(long, default_value_t = 50)]
    count: usize,

    /// State array size
    #[arg(long, default_value_t = DEFAULT_STATE_SIZE)]
    size: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| SystemClockSeed.seed());
    let mut rng = MersenneTwister::new(seed, cli.size)?;

    for _ in 0..cli.count {
        println!("Random int: {}", rng.bounded_int(0, u32::MAX as i64));
        println!("Random float: {}", rng.unit_float());
    }

    Ok(())
}
