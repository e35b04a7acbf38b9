//! Entity generators for test data.
//!
//! - [`PackageGenerator`]: Generate sensor packages from athletic profiles

pub mod package;

pub use package::PackageGenerator;
