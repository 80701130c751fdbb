//! Integration tests for decoding and activation

use phenotype::neural::batch;
use phenotype::{
    ConfigurationError, ConnectionGene, Genome, Network, NetworkConfig, NetworkError, NodeGene,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

fn identity_genome(ids: &[usize], connections: Vec<ConnectionGene>) -> Genome {
    Genome::new(
        ids.iter().map(|&id| NodeGene::new(id, "identity")).collect(),
        connections,
    )
}

/// Random genome with `n_sensors + n_outputs + n_hidden` nodes, shuffled,
/// including some disabled and dangling connections
fn random_genome(rng: &mut ChaCha8Rng, n_sensors: usize, n_outputs: usize, n_hidden: usize) -> Genome {
    let activations = ["identity", "sigmoid", "tanh", "relu"];
    let n = n_sensors + n_outputs + n_hidden;

    let mut nodes: Vec<NodeGene> = (0..n)
        .map(|id| NodeGene::new(id, *activations.choose(rng).unwrap()))
        .collect();
    nodes.shuffle(rng);

    let connections = (0..n * 3)
        .map(|_| {
            // Occasionally point past the last id
            let source = rng.gen_range(0..n + 2);
            let target = rng.gen_range(n_sensors..n + 2);
            let weight = rng.gen_range(-2.0..2.0);
            if rng.gen::<f32>() < 0.2 {
                ConnectionGene::disabled(source, target, weight)
            } else {
                ConnectionGene::new(source, target, weight)
            }
        })
        .collect();

    Genome::new(nodes, connections)
}

fn wiring(net: &Network) -> Vec<(usize, Vec<usize>, Vec<f64>)> {
    net.nodes()
        .iter()
        .map(|n| (n.id(), n.inbound().to_vec(), n.weights().to_vec()))
        .collect()
}

#[test]
fn test_feed_forward_example() {
    phenotype::logging::init_test();

    let genome = identity_genome(
        &[0, 1, 2],
        vec![ConnectionGene::new(0, 2, 1.0), ConnectionGene::new(1, 2, 2.0)],
    );
    let mut net = Network::from_genome(&genome, &NetworkConfig::new(2, 1)).unwrap();

    assert_eq!(net.hidden_count(), 0);
    assert_eq!(net.activate(&[1.0, 3.0]).unwrap(), vec![7.0]);
}

#[test]
fn test_recurrent_stale_read() {
    // X = 0 (sensor), Y = 1 (output), H = 2 (hidden)
    let genome = identity_genome(
        &[0, 1, 2],
        vec![ConnectionGene::new(1, 2, 1.0), ConnectionGene::new(0, 1, 1.0)],
    );
    let mut net = Network::from_genome(&genome, &NetworkConfig::new(1, 1)).unwrap();

    assert_eq!(net.activate(&[5.0]).unwrap(), vec![5.0]);
    assert_eq!(net.node(2).unwrap().signal(), 0.0);

    assert_eq!(net.activate(&[9.0]).unwrap(), vec![9.0]);
    assert_eq!(net.node(2).unwrap().signal(), 5.0);
}

#[test]
fn test_recurrent_state_feeds_back_into_outputs() {
    // Y reads X and H; H reads Y. Output depends on the previous call.
    let genome = identity_genome(
        &[0, 1, 2],
        vec![
            ConnectionGene::new(0, 1, 1.0),
            ConnectionGene::new(2, 1, 1.0),
            ConnectionGene::new(1, 2, 1.0),
        ],
    );
    let mut net = Network::from_genome(&genome, &NetworkConfig::new(1, 1)).unwrap();

    assert_eq!(net.activate(&[1.0]).unwrap(), vec![1.0]);
    assert_eq!(net.activate(&[1.0]).unwrap(), vec![2.0]);
    assert_eq!(net.activate(&[1.0]).unwrap(), vec![3.0]);

    net.reset();
    assert_eq!(net.activate(&[1.0]).unwrap(), vec![1.0]);
}

#[test]
fn test_decode_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let config = NetworkConfig::new(3, 2);

    for _ in 0..20 {
        let genome = random_genome(&mut rng, 3, 2, 6);
        let mut a = Network::from_genome(&genome, &config).unwrap();
        let mut b = Network::from_genome(&genome, &config).unwrap();

        assert_eq!(wiring(&a), wiring(&b));
        assert_eq!(a.dropped_connections(), b.dropped_connections());

        let inputs = [0.3, -1.2, 2.0];
        assert_eq!(a.activate(&inputs).unwrap(), b.activate(&inputs).unwrap());
    }
}

#[test]
fn test_nodes_sorted_and_partitioned() {
    let mut rng = ChaCha8Rng::seed_from_u64(777);
    let genome = random_genome(&mut rng, 4, 3, 10);
    let net = Network::from_genome(&genome, &NetworkConfig::new(4, 3)).unwrap();

    let ids: Vec<_> = net.nodes().iter().map(|n| n.id()).collect();
    assert_eq!(ids, (0..17).collect::<Vec<_>>());
    assert_eq!(net.sensors().len(), 4);
    assert_eq!(net.output_nodes().len(), 3);
    assert_eq!(net.hidden_count(), 10);
}

#[test]
fn test_dangling_reference_does_not_affect_other_wiring() {
    let base = vec![ConnectionGene::new(0, 2, 1.0), ConnectionGene::new(1, 2, 2.0)];
    let clean = identity_genome(&[0, 1, 2], base.clone());

    let mut noisy_connections = vec![ConnectionGene::new(5, 2, 9.0)];
    noisy_connections.extend(base);
    noisy_connections.push(ConnectionGene::new(1, 6, 9.0));
    let noisy = identity_genome(&[0, 1, 2], noisy_connections);

    let config = NetworkConfig::new(2, 1);
    let a = Network::from_genome(&clean, &config).unwrap();
    let b = Network::from_genome(&noisy, &config).unwrap();

    assert_eq!(wiring(&a), wiring(&b));
    assert_eq!(b.dropped_connections(), 2);
}

#[test]
fn test_disabled_connections_never_wired() {
    let mut rng = ChaCha8Rng::seed_from_u64(4242);
    let config = NetworkConfig::new(2, 2);

    for _ in 0..20 {
        let genome = random_genome(&mut rng, 2, 2, 5);
        let net = Network::from_genome(&genome, &config).unwrap();

        for conn in genome.connections.iter().filter(|c| !c.enabled) {
            let shadowed = genome
                .connections
                .iter()
                .any(|c| c.enabled && c.source == conn.source && c.target == conn.target);
            if shadowed {
                continue;
            }
            if let (Some(target), Some(_)) = (net.node(conn.target), net.node(conn.source)) {
                let source_pos = net.nodes().iter().position(|n| n.id() == conn.source).unwrap();
                assert!(!target.inbound().contains(&source_pos));
            }
        }
    }
}

#[test]
fn test_sensor_bypass_and_input_validation() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let genome = random_genome(&mut rng, 3, 1, 4);
    let mut net = Network::from_genome(&genome, &NetworkConfig::new(3, 1)).unwrap();

    let inputs = [4.5, -7.25, 1e6];
    net.activate(&inputs).unwrap();
    let signals: Vec<_> = net.sensors().iter().map(|n| n.signal()).collect();
    assert_eq!(signals, inputs);

    let before = net.signals();
    for bad in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0, 4.0][..]] {
        assert!(matches!(
            net.activate(bad),
            Err(NetworkError::InvalidInput { expected: 3, .. })
        ));
        assert_eq!(net.signals(), before);
    }
}

#[test]
fn test_missing_activation_returns_no_network() {
    let mut genome = identity_genome(&[0, 1, 2], Vec::new());
    genome.nodes[2].activation.clear();

    let result = Network::from_genome(&genome, &NetworkConfig::new(2, 1));
    assert_eq!(
        result.unwrap_err(),
        NetworkError::Configuration(ConfigurationError::MissingActivation { node: 2 })
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let config = NetworkConfig::new(3, 2);
    let genomes: Vec<_> = (0..32).map(|_| random_genome(&mut rng, 3, 2, 8)).collect();

    let mut sequential: Vec<_> = genomes
        .iter()
        .map(|g| Network::from_genome(g, &config).unwrap())
        .collect();
    let mut parallel = sequential.clone();

    let inputs = [0.5, -0.5, 1.0];
    for _ in 0..3 {
        let expected: Vec<_> = sequential
            .iter_mut()
            .map(|net| net.activate(&inputs).unwrap())
            .collect();
        let actual: Vec<_> = batch::activate_all(&mut parallel, &inputs)
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(expected, actual);
    }
}
