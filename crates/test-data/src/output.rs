//! Writing generated packages in the configured format.

use std::io::Write;

use workouts::SensorPackage;

use crate::{GenerateError, config::OutputFormat};

/// Writes one line per package: the raw package as JSON, or its calculated summary.
///
/// Returns the number of lines written.
pub fn write_packages<W: Write>(
    packages: &[SensorPackage],
    format: OutputFormat,
    out: &mut W,
) -> Result<usize, GenerateError> {
    match format {
        OutputFormat::Json => {
            for package in packages {
                serde_json::to_writer(&mut *out, package)?;
                writeln!(out)?;
            }
            out.flush()?;
            Ok(packages.len())
        }
        OutputFormat::Summary => Ok(workouts::run(packages, out)?),
    }
}
