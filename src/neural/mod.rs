//! Phenotype networks decoded from genomes.
//!
//! - Node arena with index-based inbound edges
//! - Single-pass activation with carried-over recurrent state
//! - Pluggable activation functions
//! - Parallel evaluation of independent networks

pub mod activation;
pub mod batch;
mod network;
mod node;

pub use activation::{ActivationFn, ActivationRegistry};
pub use network::Network;
pub use node::Node;
