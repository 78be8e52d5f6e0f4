//! Error types for the ball simulation.
//!
//! The physics itself has no recoverable failures; everything here comes
//! from building a scenario (bad parameters, unreadable or malformed YAML).

/// Errors returned while configuring or populating a simulation
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl SimError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SimError::InvalidConfiguration(msg.into())
    }
}
