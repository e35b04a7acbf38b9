use std::io;

use workouts::{init_logging, reference_packages, run};

fn main() -> anyhow::Result<()> {
    init_logging("warn");

    let packages = reference_packages();
    tracing::info!("Processing {} sensor packages", packages.len());

    let stdout = io::stdout();
    let written = run(&packages, &mut stdout.lock())?;

    tracing::info!("Wrote {} training summaries", written);
    Ok(())
}
