//! Property-based tests over arbitrary topologies.

use keyed_digraph::prelude::*;
use proptest::prelude::*;

proptest! {
    /// With identity extraction, looking a payload up by itself finds it.
    #[test]
    fn identity_lookup_is_reflexive(ids in prop::collection::hash_set(0u32..1_000, 1..40)) {
        let mut builder = Digraph::<u32, u32>::builder();
        builder.nodes(ids.iter().copied());
        let graph = builder.build();

        prop_assert_eq!(graph.node_count(), ids.len());
        for id in &ids {
            prop_assert_eq!(graph.find_node_by_id(id), Some(id));
        }
        // ids outside the generated range always miss, without failing
        prop_assert_eq!(graph.find_node_by_id(&2_000), None);
        prop_assert_eq!(graph.find_incoming_edges_by_node(&2_000).count(), 0);
    }

    /// Every inserted edge resolves to its endpoints and shows up in both
    /// incidence projections.
    #[test]
    fn incidence_matches_inserted_topology(
        endpoints in prop::collection::vec((0u32..25, 0u32..25), 1..50)
    ) {
        let mut builder = Digraph::builder_with(|n: &u32| *n, |e: &(u32, u32, u32)| e.0);
        for (i, (source, target)) in endpoints.iter().enumerate() {
            builder.edge((i as u32, *source, *target), *source, *target);
        }
        let graph = builder.build();

        prop_assert_eq!(graph.edge_count(), endpoints.len());
        for (i, (source, target)) in endpoints.iter().enumerate() {
            let edge = (i as u32, *source, *target);
            prop_assert_eq!(graph.find_source_node_by_edge(&edge), Some(source));
            prop_assert_eq!(graph.find_target_node_by_edge(&edge), Some(target));
            prop_assert!(graph.find_outgoing_edges_by_node(source).any(|e| e == &edge));
            prop_assert!(graph.find_incoming_edges_by_node(target).any(|e| e == &edge));
        }
        prop_assert!(graph.validate_invariants().is_ok());
    }

    /// Incidence projections list each node's edges exactly, no more.
    #[test]
    fn incidence_lists_are_exact(
        endpoints in prop::collection::vec((0u32..12, 0u32..12), 1..40)
    ) {
        let mut builder = Digraph::builder_with(|n: &u32| *n, |e: &(u32, u32, u32)| e.0);
        for (i, (source, target)) in endpoints.iter().enumerate() {
            builder.edge((i as u32, *source, *target), *source, *target);
        }
        let graph = builder.build();

        for node in 0u32..12 {
            let expected_out = endpoints.iter().filter(|(s, _)| *s == node).count();
            let expected_in = endpoints.iter().filter(|(_, t)| *t == node).count();
            prop_assert_eq!(graph.find_outgoing_edges_by_node(&node).count(), expected_out);
            prop_assert_eq!(graph.find_incoming_edges_by_node(&node).count(), expected_in);
        }
    }
}
