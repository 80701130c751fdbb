//! Phenotype node: one unit of computation inside a [`Network`](super::Network).

use super::activation::{ActivationFn, ActivationRegistry};
use crate::error::ConfigurationError;
use crate::genome::{NodeGene, NodeId};

/// A decoded node.
///
/// Inbound edges are indices into the owning network's node vector, with
/// `weights[k]` belonging to `inbound[k]`.
#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    inbound: Vec<usize>,
    weights: Vec<f64>,
    signal: f64,
    activation: ActivationFn,
}

impl Node {
    /// Decode a node gene, binding its activation function
    pub fn new(gene: &NodeGene, registry: &ActivationRegistry) -> Result<Self, ConfigurationError> {
        if gene.activation.is_empty() {
            return Err(ConfigurationError::MissingActivation { node: gene.id });
        }
        let activation = registry.resolve(&gene.activation).ok_or_else(|| {
            ConfigurationError::UnknownActivation {
                node: gene.id,
                name: gene.activation.clone(),
            }
        })?;

        Ok(Self::with_activation(gene.id, activation))
    }

    /// Create an unconnected node with an already resolved activation
    pub fn with_activation(id: NodeId, activation: ActivationFn) -> Self {
        Self {
            id,
            inbound: Vec::new(),
            weights: Vec::new(),
            signal: 0.0,
            activation,
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Most recently computed or injected signal
    #[inline]
    pub fn signal(&self) -> f64 {
        self.signal
    }

    /// Positions of source nodes in the owning network
    pub fn inbound(&self) -> &[usize] {
        &self.inbound
    }

    /// Weights aligned with [`Node::inbound`]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn activation(&self) -> ActivationFn {
        self.activation
    }

    /// Weight of the edge from the node at `source`, if wired
    pub fn weight_from(&self, source: usize) -> Option<f64> {
        self.inbound
            .iter()
            .position(|&s| s == source)
            .map(|k| self.weights[k])
    }

    /// Wire an edge from `source`. A second edge from the same source
    /// replaces the weight instead of adding another entry.
    pub(crate) fn connect(&mut self, source: usize, weight: f64) {
        match self.inbound.iter().position(|&s| s == source) {
            Some(k) => self.weights[k] = weight,
            None => {
                self.inbound.push(source);
                self.weights.push(weight);
            }
        }
    }

    #[inline]
    pub(crate) fn set_signal(&mut self, signal: f64) {
        self.signal = signal;
    }

    /// Weighted sum of the current signals of all inbound nodes
    #[inline]
    pub fn input_sum(&self, nodes: &[Node]) -> f64 {
        self.inbound
            .iter()
            .zip(&self.weights)
            .map(|(&source, &weight)| nodes[source].signal * weight)
            .sum()
    }

    /// Compute, store and return the output of the node at `index`.
    ///
    /// Reads whatever signal each inbound node currently holds; a node not
    /// yet updated in this pass contributes its previous value. The sum is
    /// taken before the write, so a self-loop sees the old signal.
    #[inline]
    pub fn output(index: usize, nodes: &mut [Node]) -> f64 {
        let sum = {
            let view: &[Node] = nodes;
            view[index].input_sum(view)
        };
        let node = &mut nodes[index];
        node.signal = node.activation.apply(sum);
        node.signal
    }

    /// Zero the stored signal
    pub fn reset(&mut self) {
        self.signal = 0.0;
    }
}
