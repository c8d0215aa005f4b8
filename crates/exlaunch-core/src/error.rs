//! Error types for exlaunch tooling

use thiserror::Error;

/// Result type for exlaunch operations
pub type Result<T> = std::result::Result<T, ExlaunchError>;

/// Exlaunch error types
#[derive(Debug, Error)]
pub enum ExlaunchError {
    /// Required environment variable missing or empty
    #[error("{0} is empty!")]
    MissingEnv(String),

    /// Could not reach or talk to the console
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Response did not match the expected layout
    #[error("Protocol error: {0}")]
    ProtocolError(String),

    /// Filesystem failure while staging resources
    #[error("Deploy error: {0}")]
    DeployError(String),
}
