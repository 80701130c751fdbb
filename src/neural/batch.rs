//! Parallel activation of independent networks.
//!
//! Each network owns all of its state, so distinct networks can be
//! evaluated on separate threads. Results come back in input order.

use super::network::Network;
use crate::error::{NetworkError, Result};
use rayon::prelude::*;

/// Activate every network with the same inputs
pub fn activate_all(networks: &mut [Network], inputs: &[f64]) -> Vec<Result<Vec<f64>>> {
    networks
        .par_iter_mut()
        .map(|net| net.activate(inputs))
        .collect()
}

/// Activate `networks[i]` with `inputs[i]`.
///
/// A network without a matching input vector gets an `InvalidInput` error
/// with `found: 0`.
pub fn activate_each(networks: &mut [Network], inputs: &[Vec<f64>]) -> Vec<Result<Vec<f64>>> {
    networks
        .par_iter_mut()
        .enumerate()
        .map(|(i, net)| match inputs.get(i) {
            Some(input) => net.activate(input),
            None => Err(NetworkError::InvalidInput {
                expected: net.sensor_count(),
                found: 0,
            }),
        })
        .collect()
}
