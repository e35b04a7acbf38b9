//! Configuration types for sensor package generation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GenerateError;

/// Relative weights for picking an activity type per generated package.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityMix {
    pub swimming: f64,
    pub running: f64,
    pub walking: f64,
}

impl Default for ActivityMix {
    fn default() -> Self {
        Self {
            swimming: 1.0,
            running: 1.0,
            walking: 1.0,
        }
    }
}

impl ActivityMix {
    /// A mix producing only runs.
    pub fn running_only() -> Self {
        Self {
            swimming: 0.0,
            running: 1.0,
            walking: 0.0,
        }
    }
}

/// How the `generate` binary writes its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON sensor package per line.
    Json,
    /// One calculated training summary per line.
    #[default]
    Summary,
}

impl FromStr for OutputFormat {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "summary" => Ok(Self::Summary),
            _ => Err(GenerateError::InvalidFormat(s.to_string())),
        }
    }
}

/// Configuration for generation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Number of packages to generate.
    pub package_count: usize,

    /// Activity type weights.
    pub mix: ActivityMix,

    /// Seed for reproducible output; random when absent.
    pub seed: Option<u64>,

    pub format: OutputFormat,
}

impl GenerateConfig {
    /// Defaults overridden by `GENERATE_COUNT`, `GENERATE_SEED` and `GENERATE_FORMAT`.
    pub fn from_env() -> Result<Self, GenerateError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `GENERATE_*` keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GenerateError> {
        let mut config = Self::default();
        if let Some(count) = lookup("GENERATE_COUNT") {
            config.package_count = count.parse().map_err(|_| GenerateError::InvalidSetting {
                key: "GENERATE_COUNT",
                value: count,
            })?;
        }
        if let Some(seed) = lookup("GENERATE_SEED") {
            let parsed = seed.parse().map_err(|_| GenerateError::InvalidSetting {
                key: "GENERATE_SEED",
                value: seed,
            })?;
            config.seed = Some(parsed);
        }
        if let Some(format) = lookup("GENERATE_FORMAT") {
            config.format = format.parse()?;
        }
        Ok(config)
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            package_count: 10,
            mix: ActivityMix::default(),
            seed: None,
            format: OutputFormat::default(),
        }
    }
}
