//! Sensor package generation from athletic profiles.

use rand::{Rng, distributions::WeightedIndex, prelude::Distribution};
use tracing::debug;

use workouts::{ActivityType, SensorPackage};

use crate::{
    GenerateError,
    config::{ActivityMix, GenerateConfig},
    profiles::{AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance},
};

/// Shortest session the generator emits, in hours.
const MIN_DURATION_H: f64 = 0.25;

/// Generates sensor packages that the calculator accepts.
///
/// Counts are whole numbers and every divisor is strictly positive.
#[derive(Debug, Clone, Default)]
pub struct PackageGenerator {
    runner: RunnerProfile,
    walker: WalkerProfile,
    swimmer: SwimmerProfile,
}

impl PackageGenerator {
    /// Creates a generator with default profiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with custom profiles.
    pub fn with_profiles(
        runner: RunnerProfile,
        walker: WalkerProfile,
        swimmer: SwimmerProfile,
    ) -> Self {
        Self {
            runner,
            walker,
            swimmer,
        }
    }

    /// Generates one package of the given activity type.
    pub fn generate(&self, activity_type: ActivityType, rng: &mut impl Rng) -> SensorPackage {
        let data = match activity_type {
            ActivityType::Running => self.common(&self.runner, rng).to_vec(),
            ActivityType::SportsWalking => {
                let [action, duration, weight] = self.common(&self.walker, rng);
                let (min, max) = self.walker.height_range();
                let height = round_to(rng.gen_range(min..max), 1.0);
                vec![action, duration, weight, height]
            }
            ActivityType::Swimming => {
                let [action, duration, weight] = self.common(&self.swimmer, rng);
                let factor = sample_variance(&self.swimmer, rng);
                let lengths = (self.swimmer.lengths_per_hour() * duration * factor).round();
                vec![action, duration, weight, self.swimmer.pool_length(), lengths]
            }
        };

        debug!(code = activity_type.code(), ?data, "generated sensor package");
        SensorPackage::new(activity_type.code(), data)
    }

    /// Generates `config.package_count` packages with types drawn from `config.mix`.
    pub fn generate_batch(
        &self,
        config: &GenerateConfig,
        rng: &mut impl Rng,
    ) -> Result<Vec<SensorPackage>, GenerateError> {
        let types = ActivityType::ALL;
        let index = WeightedIndex::new(mix_weights(&config.mix, &types))?;

        let packages = (0..config.package_count)
            .map(|_| {
                let activity_type = types[index.sample(rng)];
                self.generate(activity_type, rng)
            })
            .collect();

        Ok(packages)
    }

    /// `[action, duration, weight]` drawn from the profile.
    fn common(&self, profile: &dyn AthleteProfile, rng: &mut impl Rng) -> [f64; 3] {
        let (min_d, max_d) = profile.duration_range();
        let duration = round_to(rng.gen_range(min_d..max_d), 0.01).max(MIN_DURATION_H);

        let (min_w, max_w) = profile.weight_range();
        let weight = round_to(rng.gen_range(min_w..max_w), 0.1);

        let factor = sample_variance(profile, rng);
        let action = (profile.actions_per_hour() * duration * factor).round();

        [action, duration, weight]
    }
}

fn mix_weights(mix: &ActivityMix, types: &[ActivityType]) -> Vec<f64> {
    types
        .iter()
        .map(|t| match t {
            ActivityType::Swimming => mix.swimming,
            ActivityType::Running => mix.running,
            ActivityType::SportsWalking => mix.walking,
        })
        .collect()
}

fn round_to(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use workouts::read_package;

    #[test]
    fn test_generated_packages_dispatch() {
        let generator = PackageGenerator::new();
        let mut rng = StdRng::seed_from_u64(12345);
        for activity_type in ActivityType::ALL {
            for _ in 0..200 {
                let pkg = generator.generate(activity_type, &mut rng);
                assert_eq!(pkg.code, activity_type.code());
                assert_eq!(pkg.data.len(), activity_type.arity());
                assert!(pkg.data.iter().all(|v| *v >= 0.0));
                assert!(read_package(&pkg.code, &pkg.data).is_ok(), "{pkg:?}");
            }
        }
    }

    #[test]
    fn test_batch_is_reproducible() {
        let generator = PackageGenerator::new();
        let config = GenerateConfig {
            package_count: 25,
            ..Default::default()
        };

        let a = generator
            .generate_batch(&config, &mut StdRng::seed_from_u64(1))
            .unwrap();
        let b = generator
            .generate_batch(&config, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(a.len(), 25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mix_excludes_zero_weights() {
        let generator = PackageGenerator::new();
        let config = GenerateConfig {
            package_count: 50,
            mix: ActivityMix::running_only(),
            ..Default::default()
        };
        let packages = generator
            .generate_batch(&config, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert!(packages.iter().all(|p| p.code == "RUN"));
    }

    #[test]
    fn test_empty_mix_is_rejected() {
        let config = GenerateConfig {
            mix: ActivityMix {
                swimming: 0.0,
                running: 0.0,
                walking: 0.0,
            },
            ..Default::default()
        };
        let result =
            PackageGenerator::new().generate_batch(&config, &mut StdRng::seed_from_u64(3));
        assert!(matches!(result, Err(GenerateError::InvalidMix(_))));
    }

    #[test]
    fn test_counts_are_whole() {
        let generator = PackageGenerator::with_profiles(
            RunnerProfile::elite(),
            WalkerProfile::race_walker(),
            SwimmerProfile::club_50m(),
        );
        let mut rng = StdRng::seed_from_u64(77);
        let swim = generator.generate(ActivityType::Swimming, &mut rng);
        assert_eq!(swim.data[0].fract(), 0.0);
        assert_eq!(swim.data[4].fract(), 0.0);
        assert_eq!(swim.data[3], 50.0);
    }
}
