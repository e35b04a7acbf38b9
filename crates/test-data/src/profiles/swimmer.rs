//! Swimmer athletic profile.

use workouts::ActivityType;

use super::AthleteProfile;

/// Athletic profile for pool swimming.
///
/// Based on a recreational swimmer doing ~1 km/h in a 25 m pool
/// (40 lengths and ~720 strokes per hour).
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Strokes per hour.
    stroke_rate: f64,
    /// Pool length in metres.
    pool_length: f64,
    /// Pool lengths completed per hour.
    lengths_per_hour: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            stroke_rate: 720.0,
            pool_length: 25.0,
            lengths_per_hour: 40.0,
            variance: 0.1,
        }
    }
}

impl SwimmerProfile {
    /// Creates a club swimmer training in a 50 m pool (~2.5 km/h).
    pub fn club_50m() -> Self {
        Self {
            stroke_rate: 1500.0,
            pool_length: 50.0,
            lengths_per_hour: 50.0,
            variance: 0.06,
        }
    }

    pub fn pool_length(&self) -> f64 {
        self.pool_length
    }

    pub fn lengths_per_hour(&self) -> f64 {
        self.lengths_per_hour
    }
}

impl AthleteProfile for SwimmerProfile {
    fn activity_type(&self) -> ActivityType {
        ActivityType::Swimming
    }

    fn actions_per_hour(&self) -> f64 {
        self.stroke_rate
    }

    fn duration_range(&self) -> (f64, f64) {
        (0.5, 1.5)
    }

    fn weight_range(&self) -> (f64, f64) {
        (50.0, 100.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
