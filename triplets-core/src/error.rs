//! Error types for the counting core.

use thiserror::Error;
use triplets_types::ConfigError;

/// Errors raised while setting up a counting run.
///
/// Counting itself cannot fail: short or letterless input produces an empty
/// result. Everything here is detected before any text is touched.
#[derive(Error, Debug)]
pub enum CountError {
    /// The configuration was rejected by validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The worker pool could not be started.
    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for counting operations
pub type Result<T> = std::result::Result<T, CountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = CountError::from(ConfigError::ZeroPartitions);
        assert_eq!(
            err.to_string(),
            "invalid configuration: partition count must be at least 1"
        );
    }
}
