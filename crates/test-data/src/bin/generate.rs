//! Generates synthetic sensor packages and prints them or their summaries.
//!
//! Run with:
//! ```
//! GENERATE_COUNT=20 GENERATE_SEED=12345 cargo run -p test-data --bin generate
//! ```
//!
//! `GENERATE_FORMAT=json` prints the raw packages instead of summaries.

use std::io;

use rand::{SeedableRng, rngs::StdRng};
use test_data::prelude::*;

fn main() -> anyhow::Result<()> {
    workouts::init_logging("info");

    let config = GenerateConfig::from_env()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let packages = PackageGenerator::new().generate_batch(&config, &mut rng)?;
    tracing::info!("Generated {} sensor packages", packages.len());

    let stdout = io::stdout();
    let written = write_packages(&packages, config.format, &mut stdout.lock())?;
    tracing::info!("Wrote {} lines", written);

    Ok(())
}
