//! Genome-side descriptors consumed by the decoder.
//!
//! Genomes are built and mutated elsewhere; this module only defines the
//! shape the decoder reads. Neither node nor connection order is assumed.

use serde::{Deserialize, Serialize};

/// Node identity, unique within a genome
pub type NodeId = usize;

/// A node descriptor: identity plus activation function selector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeGene {
    pub id: NodeId,
    /// Name resolved through an [`ActivationRegistry`](crate::neural::ActivationRegistry)
    pub activation: String,
}

impl NodeGene {
    pub fn new(id: NodeId, activation: impl Into<String>) -> Self {
        Self {
            id,
            activation: activation.into(),
        }
    }
}

/// A weighted edge from `source` to `target`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionGene {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
    /// Disabled connections stay in the genome but are never wired
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ConnectionGene {
    /// Create an enabled connection
    pub fn new(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
            enabled: true,
        }
    }

    /// Create a disabled connection
    pub fn disabled(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            enabled: false,
            ..Self::new(source, target, weight)
        }
    }
}

/// Flat, ID-addressed description of a network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    pub nodes: Vec<NodeGene>,
    #[serde(default)]
    pub connections: Vec<ConnectionGene>,
}

impl Genome {
    pub fn new(nodes: Vec<NodeGene>, connections: Vec<ConnectionGene>) -> Self {
        Self { nodes, connections }
    }

    /// Number of enabled connections
    pub fn enabled_connections(&self) -> usize {
        self.connections.iter().filter(|c| c.enabled).count()
    }

    /// Check whether node genes are already in ascending id order
    pub fn is_sorted(&self) -> bool {
        self.nodes.windows(2).all(|w| w[0].id <= w[1].id)
    }
}
