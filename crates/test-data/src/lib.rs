//! Test data generation for the workouts calculator.
//!
//! This crate provides tools for generating realistic sensor packages for
//! runners, sports walkers and swimmers, to exercise the calculator beyond
//! its reference batch.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::{SeedableRng, rngs::StdRng};
//! use test_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//! let config = GenerateConfig { package_count: 20, ..Default::default() };
//! let packages = PackageGenerator::new().generate_batch(&config, &mut rng)?;
//! write_packages(&packages, config.format, &mut std::io::stdout())?;
//! ```

pub mod config;
pub mod generators;
pub mod output;
pub mod profiles;

use thiserror::Error;

// Re-export core types from workouts crate
pub use workouts::{ActivityType, SensorPackage};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid activity mix: {0}")]
    InvalidMix(#[from] rand::distributions::WeightedError),

    #[error("Unknown output format: {0}")]
    InvalidFormat(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workout error: {0}")]
    Workout(#[from] workouts::WorkoutError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ActivityMix, GenerateConfig, OutputFormat};
    pub use crate::generators::PackageGenerator;
    pub use crate::output::write_packages;
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
    };
    pub use crate::{ActivityType, GenerateError, SensorPackage};
}
