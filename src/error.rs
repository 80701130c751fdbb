//! Error types for decoding and activating networks.

use crate::genome::NodeId;
use thiserror::Error;

/// Result alias for network operations
pub type Result<T> = std::result::Result<T, NetworkError>;

/// A genome or configuration that cannot be turned into a network.
///
/// Raised while decoding; no partial network is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("node {node} has no activation function selector")]
    MissingActivation { node: NodeId },

    #[error("node {node}: unknown activation function `{name}`")]
    UnknownActivation { node: NodeId, name: String },

    #[error("genome has {found} nodes, need at least {required} sensor and output nodes")]
    TooFewNodes { required: usize, found: usize },

    #[error("sensor and output counts must be positive (sensors: {sensors}, outputs: {outputs})")]
    EmptyPartition { sensors: usize, outputs: usize },
}

/// Errors surfaced by [`Network`](crate::Network) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Input length differs from the configured sensor count.
    /// Checked before any node state is touched.
    #[error("invalid number of sensor inputs: expected {expected}, got {found}")]
    InvalidInput { expected: usize, found: usize },
}

/// Errors from loading or saving a [`Config`](crate::Config)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_converts() {
        let err: NetworkError = ConfigurationError::MissingActivation { node: 3 }.into();
        assert!(matches!(
            err,
            NetworkError::Configuration(ConfigurationError::MissingActivation { node: 3 })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = NetworkError::InvalidInput { expected: 2, found: 3 };
        assert_eq!(
            err.to_string(),
            "invalid number of sensor inputs: expected 2, got 3"
        );

        let err = ConfigurationError::UnknownActivation {
            node: 7,
            name: "softsign".to_string(),
        };
        assert_eq!(err.to_string(), "node 7: unknown activation function `softsign`");
    }
}
