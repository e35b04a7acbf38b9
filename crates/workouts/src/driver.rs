use std::io::Write;

use tracing::{info, warn};

use crate::{
    dispatch::{SensorPackage, read_package},
    errors::WorkoutError,
    models::Training,
};

/// Writes one summary line per package, in order.
///
/// Stops at the first failing package; lines already written stay written.
/// Returns the number of lines written.
pub fn run<W: Write>(packages: &[SensorPackage], out: &mut W) -> Result<usize, WorkoutError> {
    for (index, package) in packages.iter().enumerate() {
        let result = read_package(&package.code, &package.data)
            .map(|workout| workout.show_training_info())
            .and_then(|info| {
                writeln!(out, "{}", info.message())?;
                Ok(info)
            });

        match result {
            Ok(info) => {
                info!(
                    index,
                    training_type = %info.training_type,
                    distance = info.distance,
                    calories = info.calories,
                    "training processed"
                );
            }
            Err(e) => {
                if e.is_bad_input() {
                    warn!(index, code = %package.code, "rejected sensor package: {e}");
                } else {
                    warn!(index, "failed to write summary: {e}");
                }
                return Err(e);
            }
        }
    }

    out.flush()?;
    Ok(packages.len())
}
