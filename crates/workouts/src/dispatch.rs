//! Mapping of raw sensor packages onto trainings.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    errors::WorkoutError,
    models::{ActivityType, Running, SportsWalking, Swimming, TrainingBase, Workout},
};

/// One raw reading from the sensors: an activity code and its positional parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub code: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }
}

/// Builds the training described by `code` from its positional parameters.
///
/// Parameter order is `action, duration, weight` followed by `height` for `WLK`
/// or `pool_length, pool_count` for `SWM`.
///
/// Ranges are not validated with two exceptions. `action` and `pool_count`
/// are counts and must be whole, non-negative numbers below 2^64, otherwise
/// [`WorkoutError::InvalidCount`] is returned; negative or fractional counts
/// are rejected instead of being carried through the formulas. A zero
/// `duration` or `height` is a divisor and fails with
/// [`WorkoutError::DivisionByZero`] instead of producing `inf` or `NaN`.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let activity_type: ActivityType = code.parse()?;

    if data.len() != activity_type.arity() {
        return Err(WorkoutError::ArityMismatch {
            code: code.to_string(),
            expected: activity_type.arity(),
            actual: data.len(),
        });
    }

    debug!(code, ?data, "dispatching sensor package");

    let base = TrainingBase::new(as_count("action", data[0])?, data[1], data[2])?;

    let workout = match activity_type {
        ActivityType::Running => Workout::Running(Running::new(base)),
        ActivityType::SportsWalking => Workout::SportsWalking(SportsWalking::new(base, data[3])?),
        ActivityType::Swimming => Workout::Swimming(Swimming::new(
            base,
            data[3],
            as_count("pool_count", data[4])?,
        )),
    };

    Ok(workout)
}

fn as_count(field: &'static str, value: f64) -> Result<u64, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(WorkoutError::InvalidCount { field, value })
    }
}
