//! Network structure: genome decoding and the activation pass.

use super::activation::ActivationRegistry;
use super::node::Node;
use crate::config::NetworkConfig;
use crate::error::{ConfigurationError, NetworkError, Result};
use crate::genome::{Genome, NodeGene, NodeId};
use std::borrow::Cow;

/// A decoded, runnable phenotype.
///
/// Nodes are stored in ascending id order and partitioned by position:
/// `[0, S)` sensors, `[S, S+O)` outputs, `[S+O, len)` hidden.
///
/// Evaluation is a single synchronous pass in that fixed order. There is no
/// cycle detection and no settling: a node reading from one that has not
/// been updated yet in the current pass sees its value from the previous
/// call (or zero). That carried-over state is how recurrent connections
/// behave, so successive calls on the same network are not independent.
#[derive(Clone, Debug)]
pub struct Network {
    nodes: Vec<Node>,
    sensor_count: usize,
    output_count: usize,
    dropped_connections: usize,
}

impl Network {
    /// Decode a genome using the built-in activation catalog
    pub fn from_genome(genome: &Genome, config: &NetworkConfig) -> Result<Self> {
        Self::decode(genome, config, &ActivationRegistry::default())
    }

    /// Decode a genome into a wired network.
    ///
    /// Enabled connections whose source or target id is not present among
    /// the nodes are skipped without error; genomes may carry stale ids after
    /// structural mutation. Their number is kept in
    /// [`Network::dropped_connections`].
    pub fn decode(
        genome: &Genome,
        config: &NetworkConfig,
        registry: &ActivationRegistry,
    ) -> Result<Self> {
        if config.sensor_count == 0 || config.output_count == 0 {
            return Err(ConfigurationError::EmptyPartition {
                sensors: config.sensor_count,
                outputs: config.output_count,
            }
            .into());
        }
        if genome.nodes.len() < config.hidden_start() {
            return Err(ConfigurationError::TooFewNodes {
                required: config.hidden_start(),
                found: genome.nodes.len(),
            }
            .into());
        }

        let genes: Cow<'_, [NodeGene]> = if genome.is_sorted() {
            Cow::Borrowed(&genome.nodes)
        } else {
            let mut sorted = genome.nodes.clone();
            sorted.sort_by_key(|n| n.id);
            Cow::Owned(sorted)
        };

        let mut nodes = genes
            .iter()
            .map(|gene| Node::new(gene, registry))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut dropped_connections = 0;
        for conn in genome.connections.iter().filter(|c| c.enabled) {
            match (position_of(&nodes, conn.target), position_of(&nodes, conn.source)) {
                (Some(target), Some(source)) => nodes[target].connect(source, conn.weight),
                _ => {
                    dropped_connections += 1;
                    log::debug!(
                        "Dropping connection {} -> {}: endpoint not in genome",
                        conn.source,
                        conn.target
                    );
                }
            }
        }

        let network = Self {
            nodes,
            sensor_count: config.sensor_count,
            output_count: config.output_count,
            dropped_connections,
        };
        log::trace!(
            "Decoded network: nodes={}, connections={}, dropped={}",
            network.len(),
            network.connection_count(),
            dropped_connections
        );

        Ok(network)
    }

    /// Run one evaluation pass and return the output signals.
    ///
    /// Sensors take `inputs` unchanged, hidden nodes are evaluated in
    /// ascending id order, then output nodes. Fails without touching any
    /// node if `inputs.len()` differs from the sensor count.
    pub fn activate(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        if inputs.len() != self.sensor_count {
            return Err(NetworkError::InvalidInput {
                expected: self.sensor_count,
                found: inputs.len(),
            });
        }

        for (node, &input) in self.nodes[..self.sensor_count].iter_mut().zip(inputs) {
            node.set_signal(input);
        }

        let hidden_start = self.hidden_start();
        for i in hidden_start..self.nodes.len() {
            Node::output(i, &mut self.nodes);
        }

        let nodes = &mut self.nodes;
        Ok((self.sensor_count..hidden_start)
            .map(|i| Node::output(i, nodes))
            .collect())
    }

    /// Zero every signal, as right after decoding
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }

    #[inline]
    fn hidden_start(&self) -> usize {
        self.sensor_count + self.output_count
    }

    pub fn sensor_count(&self) -> usize {
        self.sensor_count
    }

    pub fn output_count(&self) -> usize {
        self.output_count
    }

    pub fn hidden_count(&self) -> usize {
        self.nodes.len() - self.hidden_start()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in evaluation-partition order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn sensors(&self) -> &[Node] {
        &self.nodes[..self.sensor_count]
    }

    pub fn output_nodes(&self) -> &[Node] {
        &self.nodes[self.sensor_count..self.hidden_start()]
    }

    pub fn hidden(&self) -> &[Node] {
        &self.nodes[self.hidden_start()..]
    }

    /// Find a node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        position_of(&self.nodes, id).map(|i| &self.nodes[i])
    }

    /// Current signal of every node
    pub fn signals(&self) -> Vec<f64> {
        self.nodes.iter().map(Node::signal).collect()
    }

    /// Current output signals, without evaluating
    pub fn outputs(&self) -> Vec<f64> {
        self.output_nodes().iter().map(Node::signal).collect()
    }

    /// Number of wired edges
    pub fn connection_count(&self) -> usize {
        self.nodes.iter().map(|n| n.inbound().len()).sum()
    }

    /// Enabled connections skipped during decoding because an endpoint was missing
    pub fn dropped_connections(&self) -> usize {
        self.dropped_connections
    }
}

/// Binary search over nodes sorted by id; duplicates resolve to the first
fn position_of(nodes: &[Node], id: NodeId) -> Option<usize> {
    let i = nodes.partition_point(|n| n.id() < id);
    (i < nodes.len() && nodes[i].id() == id).then_some(i)
}
