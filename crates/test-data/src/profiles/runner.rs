//! Runner athletic profile.

use workouts::ActivityType;

use super::AthleteProfile;

/// Step length the calculator assumes for running, in metres.
const STEP_M: f64 = 0.65;

/// Athletic profile for running activities.
///
/// Based on typical recreational to competitive runner performance:
/// - Base pace: ~6:00/km (10 km/h)
/// - Sessions between 20 minutes and 2 hours
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            base_speed: 10.0, // 6:00/km
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a new runner profile with specified base pace.
    ///
    /// # Arguments
    /// * `pace_min_per_km` - Base pace in minutes per kilometer (e.g., 5.0 for 5:00/km)
    pub fn with_pace(pace_min_per_km: f64) -> Self {
        Self {
            base_speed: 60.0 / pace_min_per_km,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~3:30/km base pace).
    pub fn elite() -> Self {
        Self::with_pace(3.5)
    }

    /// Creates a recreational runner profile (~7:00/km base pace).
    pub fn recreational() -> Self {
        Self::with_pace(7.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn activity_type(&self) -> ActivityType {
        ActivityType::Running
    }

    fn actions_per_hour(&self) -> f64 {
        self.base_speed * 1000.0 / STEP_M
    }

    fn duration_range(&self) -> (f64, f64) {
        (0.33, 2.0)
    }

    fn weight_range(&self) -> (f64, f64) {
        (50.0, 95.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = RunnerProfile::default();
        // 10 km/h over 0.65 m steps
        assert!((profile.actions_per_hour() - 15384.6).abs() < 0.1);
    }

    #[test]
    fn test_elite_is_faster() {
        let base = RunnerProfile::default().actions_per_hour();
        assert!(RunnerProfile::elite().actions_per_hour() > base);
        assert!(RunnerProfile::recreational().actions_per_hour() < base);
    }
}
