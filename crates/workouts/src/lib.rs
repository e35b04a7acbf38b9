pub mod dispatch;
pub mod driver;
pub mod errors;
pub mod info;
pub mod models;

pub use dispatch::{SensorPackage, read_package};
pub use driver::run;
pub use errors::WorkoutError;
pub use info::InfoMessage;
pub use models::{ActivityType, Running, SportsWalking, Swimming, Training, TrainingBase, Workout};

/// The reference batch: one swim, one run and one walk.
pub fn reference_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Installs the stderr log subscriber shared by the binaries, filtered by `RUST_LOG`.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
