//! # Phenotype
//!
//! Decodes NEAT-style genomes into runnable networks and evaluates them.
//!
//! ## Features
//!
//! - **Tolerant decoding**: dangling or disabled connections are skipped, never fatal
//! - **Recurrent by ordering**: one pass per call, state carried across calls
//! - **Pluggable activations**: built-in catalog plus custom `fn(f64) -> f64`
//! - **Parallel**: independent networks evaluated across cores via Rayon
//! - **Configurable**: YAML configuration files
//!
//! ## Quick Start
//!
//! ```rust
//! use phenotype::{ConnectionGene, Genome, Network, NetworkConfig, NodeGene};
//!
//! // Two sensors (0, 1) feeding one output (2)
//! let genome = Genome::new(
//!     vec![
//!         NodeGene::new(0, "identity"),
//!         NodeGene::new(1, "identity"),
//!         NodeGene::new(2, "identity"),
//!     ],
//!     vec![ConnectionGene::new(0, 2, 1.0), ConnectionGene::new(1, 2, 2.0)],
//! );
//!
//! let mut network = Network::from_genome(&genome, &NetworkConfig::new(2, 1)).unwrap();
//! assert_eq!(network.activate(&[1.0, 3.0]).unwrap(), vec![7.0]);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use phenotype::Config;
//!
//! let config = Config::from_yaml("network:\n  sensor_count: 4\n  output_count: 2\n").unwrap();
//! assert_eq!(config.network.sensor_count, 4);
//! ```

pub mod config;
pub mod error;
pub mod genome;
pub mod logging;
pub mod neural;

// Re-export main types
pub use config::{Config, NetworkConfig};
pub use error::{ConfigError, ConfigurationError, NetworkError, Result};
pub use genome::{ConnectionGene, Genome, NodeGene, NodeId};
pub use neural::{ActivationRegistry, Network, Node};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
