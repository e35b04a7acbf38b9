//! Sports walker athletic profile.

use workouts::ActivityType;

use super::AthleteProfile;

/// Step length the calculator assumes for walking, in metres.
const STEP_M: f64 = 0.65;

/// Athletic profile for sports walking.
///
/// Based on typical brisk walking: ~6 km/h, sessions of 30 minutes to 3 hours.
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Body height range in centimetres.
    height_range: (f64, f64),
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            base_speed: 6.0,
            height_range: (155.0, 195.0),
            variance: 0.12,
        }
    }
}

impl WalkerProfile {
    /// Creates a walker profile with specified base speed in km/h.
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh,
            ..Default::default()
        }
    }

    /// Creates a race walker profile (~12 km/h).
    pub fn race_walker() -> Self {
        Self::with_speed(12.0)
    }

    /// Body height range in centimetres, `(min, max)`.
    pub fn height_range(&self) -> (f64, f64) {
        self.height_range
    }
}

impl AthleteProfile for WalkerProfile {
    fn activity_type(&self) -> ActivityType {
        ActivityType::SportsWalking
    }

    fn actions_per_hour(&self) -> f64 {
        self.base_speed * 1000.0 / STEP_M
    }

    fn duration_range(&self) -> (f64, f64) {
        (0.5, 3.0)
    }

    fn weight_range(&self) -> (f64, f64) {
        (50.0, 110.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
