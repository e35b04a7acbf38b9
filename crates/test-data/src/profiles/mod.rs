//! Athletic profiles.
//!
//! Profiles define realistic cadences, session lengths and body measurements
//! for each activity type. They are used by the package generator to produce
//! plausible sensor readings.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use workouts::ActivityType;

/// Trait for athletic profiles.
///
/// Implementations should provide:
/// - Cadence (actions per hour) at the athlete's usual effort
/// - Session length and body weight ranges
/// - Day-to-day variance
pub trait AthleteProfile: Send + Sync {
    /// Activity the profile produces packages for.
    fn activity_type(&self) -> ActivityType;

    /// Steps or strokes per hour at usual effort.
    fn actions_per_hour(&self) -> f64;

    /// Session length range in hours, `(min, max)`. Both bounds are positive.
    fn duration_range(&self) -> (f64, f64);

    /// Body weight range in kilograms, `(min, max)`.
    fn weight_range(&self) -> (f64, f64);

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    let std_dev = profile.variance();
    if std_dev <= 0.0 {
        return 1.0;
    }
    match Normal::new(1.0, std_dev) {
        Ok(normal) => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.7, 1.4)
        }
        Err(_) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_variance_is_clamped() {
        let mut rng = StdRng::seed_from_u64(7);
        let profile = RunnerProfile::default();
        for _ in 0..1000 {
            let factor = sample_variance(&profile, &mut rng);
            assert!((0.7..=1.4).contains(&factor));
        }
    }

    #[test]
    fn test_profiles_match_activity_types() {
        assert_eq!(RunnerProfile::default().activity_type(), ActivityType::Running);
        assert_eq!(WalkerProfile::default().activity_type(), ActivityType::SportsWalking);
        assert_eq!(SwimmerProfile::default().activity_type(), ActivityType::Swimming);
    }
}
