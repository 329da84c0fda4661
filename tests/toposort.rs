mod common;

use std::collections::{BTreeSet, HashMap};

use graphwalk::algo::{indegrees, topological_sort};
use graphwalk::graph::{Graph, Indexing};
use petgraph::algo::is_cyclic_directed;
use proptest::prelude::*;

use common::{edge_list, one_based_dag, one_based_edges, petgraph_of};

fn positions(order: &[usize]) -> HashMap<usize, usize> {
    order.iter().enumerate().map(|(i, &v)| (v, i)).collect()
}

#[test]
fn kahn_emits_sources_in_id_order_then_fifo() {
    // 1 -> 3, 2 -> 3, 3 -> 4, 2 -> 5
    let g = Graph::directed(&edge_list(
        5,
        Indexing::OneBased,
        &[(1, 3), (2, 3), (3, 4), (2, 5)],
    ))
    .unwrap();
    assert_eq!(indegrees(&g), vec![0, 0, 0, 2, 1, 1]);

    let topo = topological_sort(&g);
    assert_eq!(topo.order, vec![1, 2, 3, 5, 4]);
    assert!(topo.is_complete());
}

#[test]
fn cycle_members_and_their_descendants_are_omitted() {
    // 1 -> 2 -> 3 -> 2, 3 -> 4
    let g = Graph::directed(&edge_list(
        4,
        Indexing::OneBased,
        &[(1, 2), (2, 3), (3, 2), (3, 4)],
    ))
    .unwrap();
    let topo = topological_sort(&g);
    assert_eq!(topo.order, vec![1]);
    assert_eq!(topo.omitted, vec![2, 3, 4]);
    assert!(!topo.is_complete());
}

#[test]
fn self_loop_is_a_cycle() {
    let g = Graph::directed(&edge_list(2, Indexing::OneBased, &[(1, 1)])).unwrap();
    let topo = topological_sort(&g);
    assert_eq!(topo.order, vec![2]);
    assert_eq!(topo.omitted, vec![1]);
}

#[test]
fn single_vertex_is_its_own_order() {
    let g = Graph::directed(&edge_list(1, Indexing::OneBased, &[])).unwrap();
    assert_eq!(topological_sort(&g).order, vec![1]);
}

proptest! {
    #[test]
    fn every_edge_points_forward_in_the_order((n, edges) in one_based_dag(30)) {
        let g = Graph::directed(&edge_list(n, Indexing::OneBased, &edges)).unwrap();
        let topo = topological_sort(&g);

        prop_assert!(topo.is_complete());
        prop_assert_eq!(topo.order.len(), n);
        let pos = positions(&topo.order);
        for (u, v) in edges {
            prop_assert!(pos[&u] < pos[&v], "edge {}->{} out of order", u, v);
        }
    }

    #[test]
    fn output_is_complete_exactly_when_graph_is_acyclic((n, edges) in one_based_edges(15)) {
        let edges: Vec<(usize, usize)> = edges.into_iter().filter(|(u, v)| u != v).collect();
        let g = Graph::directed(&edge_list(n, Indexing::OneBased, &edges)).unwrap();
        let topo = topological_sort(&g);

        let weighted: Vec<(usize, usize, i64)> = edges.iter().map(|&(u, v)| (u, v, 0)).collect();
        let oracle = petgraph_of(n, 1, &weighted);
        prop_assert_eq!(topo.is_complete(), !is_cyclic_directed(&oracle));

        // Emitted and omitted vertices partition the vertex set.
        let emitted: BTreeSet<usize> = topo.order.iter().copied().collect();
        let omitted: BTreeSet<usize> = topo.omitted.iter().copied().collect();
        prop_assert!(emitted.is_disjoint(&omitted));
        prop_assert_eq!(emitted.len() + omitted.len(), n);
    }
}
