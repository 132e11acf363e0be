//! Process-wide tracing setup shared by binaries.

pub mod tracing;

pub use crate::tracing::LogConfig;

/// Install the JSON subscriber with the default configuration.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    tracing::init(LogConfig::default());
}
