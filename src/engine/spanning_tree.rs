use std::collections::{BTreeMap, HashSet};

use super::disjoint_set::DisjointSet;
use super::graph::{GraphSnapshot, NodeId, Weight, WeightedEdge};
use super::heap::MinHeap;
use super::report::{HighlightEdge, SpanningTreeReport, Trace};

fn mst_summary(
    trace: &mut Trace,
    mst_edges: &[WeightedEdge],
    total_weight: u64,
    disconnected_warning: Option<String>,
) {
    trace.blank();
    trace.line("--- Minimum Spanning Tree Complete ---");
    trace.line(format!("Total edges in MST: {}", mst_edges.len()));
    trace.line(format!("Total weight: {total_weight}"));

    if let Some(warning) = disconnected_warning {
        trace.blank();
        trace.line(warning);
    }

    trace.blank();
    trace.line("MST Edges:");
    for edge in mst_edges {
        trace.line(format!(
            "  {} ↔ {} (weight: {})",
            edge.source, edge.target, edge.weight
        ));
    }
}

fn highlights(mst_edges: &[WeightedEdge]) -> Vec<HighlightEdge> {
    mst_edges
        .iter()
        .map(|edge| HighlightEdge {
            source: edge.source,
            target: edge.target,
        })
        .collect()
}

/// Prim's algorithm, growing a spanning tree outward from `start`. Uses the
/// lazy-deletion heap keyed by the cheapest known connecting edge weight. A
/// disconnected graph yields a partial tree plus a warning, not an error.
pub(super) fn prim(snapshot: &GraphSnapshot, start: NodeId) -> SpanningTreeReport {
    let mut keys: BTreeMap<NodeId, Option<Weight>> = BTreeMap::new();
    let mut parents: BTreeMap<NodeId, Option<NodeId>> = BTreeMap::new();
    for &node in snapshot.nodes() {
        keys.insert(node, (node == start).then_some(0));
        parents.insert(node, None);
    }

    let mut in_tree: HashSet<NodeId> = HashSet::new();
    let mut heap = MinHeap::new();
    heap.push(start, 0);

    let mut mst_edges: Vec<WeightedEdge> = Vec::new();
    let mut total_weight = 0u64;

    let mut trace = Trace::new();
    trace.line(format!("Starting Prim's algorithm from node {start}"));
    trace.line("Building Minimum Spanning Tree...");

    while let Some((current, _)) = heap.pop() {
        if !in_tree.insert(current) {
            continue;
        }

        if let Some(parent) = parents[&current] {
            // key of a non-start tree node is the weight of its tree edge
            let weight = keys[&current].unwrap_or(0);
            mst_edges.push(WeightedEdge::new(parent, current, weight));
            total_weight += u64::from(weight);
            trace.line(format!(
                "Added edge: {parent} → {current} (weight: {weight})"
            ));
        }

        for &(neighbor, weight) in snapshot.neighbors(current) {
            if in_tree.contains(&neighbor) {
                continue;
            }

            if keys[&neighbor].map_or(true, |key| weight < key) {
                keys.insert(neighbor, Some(weight));
                parents.insert(neighbor, Some(current));
                heap.push(neighbor, u64::from(weight));
                trace.line(format!(
                    "  Updated key of node {neighbor}: {weight} (via node {current})"
                ));
            }
        }
    }

    let disconnected = in_tree.len() < snapshot.nodes().len();
    let warning = disconnected.then(|| {
        format!(
            "Warning: Graph is disconnected. MST includes {} of {} nodes.",
            in_tree.len(),
            snapshot.nodes().len()
        )
    });
    mst_summary(&mut trace, &mst_edges, total_weight, warning);

    let highlight_edges = highlights(&mst_edges);
    SpanningTreeReport {
        edges: mst_edges,
        total_weight,
        disconnected,
        trace: trace.finish(),
        highlight_edges,
    }
}

/// Kruskal's algorithm: edges in ascending weight order (stable, so ties keep
/// insertion order), cycle test via union-find over dense node indices, early
/// stop once |V|-1 edges are selected. The only algorithm that needs no
/// source node.
pub(super) fn kruskal(snapshot: &GraphSnapshot) -> SpanningTreeReport {
    let node_count = snapshot.nodes().len();

    let mut edges: Vec<WeightedEdge> = snapshot.edges().to_vec();
    edges.sort_by_key(|edge| edge.weight);

    let mut trace = Trace::new();
    trace.line("Starting Kruskal's algorithm");
    trace.line(format!("Total edges: {}", edges.len()));
    trace.line("Sorted edges by weight:");
    for edge in &edges {
        trace.line(format!(
            "  {} ↔ {} (weight: {})",
            edge.source, edge.target, edge.weight
        ));
    }

    let mut disjoint = DisjointSet::new(node_count);
    let mut mst_edges: Vec<WeightedEdge> = Vec::new();
    let mut total_weight = 0u64;

    trace.blank();
    trace.line("Building MST by adding edges...");

    for edge in &edges {
        // ids were validated at snapshot construction
        let (u, v) = match (snapshot.index_of(edge.source), snapshot.index_of(edge.target)) {
            (Some(u), Some(v)) => (u, v),
            _ => continue,
        };

        if disjoint.union(u, v) {
            mst_edges.push(*edge);
            total_weight += u64::from(edge.weight);
            trace.line(format!(
                "✓ Added edge: {} ↔ {} (weight: {})",
                edge.source, edge.target, edge.weight
            ));
        } else {
            trace.line(format!(
                "✗ Skipped edge: {} ↔ {} (would create cycle)",
                edge.source, edge.target
            ));
        }

        if mst_edges.len() == node_count - 1 {
            trace.blank();
            trace.line(format!(
                "MST complete ({} edges for {} nodes)",
                node_count - 1,
                node_count
            ));
            break;
        }
    }

    let disconnected = mst_edges.len() < node_count - 1;
    let warning = disconnected.then(|| {
        format!(
            "Warning: Graph is disconnected. MST has {} edges (expected {}).",
            mst_edges.len(),
            node_count - 1
        )
    });
    mst_summary(&mut trace, &mst_edges, total_weight, warning);

    let highlight_edges = highlights(&mst_edges);
    SpanningTreeReport {
        edges: mst_edges,
        total_weight,
        disconnected,
        trace: trace.finish(),
        highlight_edges,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn snapshot(nodes: &[NodeId], edges: &[(NodeId, NodeId, Weight)]) -> GraphSnapshot {
        GraphSnapshot::new(
            nodes.to_vec(),
            edges
                .iter()
                .map(|&(u, v, w)| WeightedEdge::new(u, v, w))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn kruskal_skips_cycle_edge() {
        // the two cheap edges complete the tree, so the early stop kicks in
        // before (1,2,5) is ever considered
        let graph = snapshot(&[1, 2, 3], &[(1, 2, 5), (1, 3, 3), (2, 3, 2)]);
        let report = kruskal(&graph);

        assert_eq!(
            report.edges,
            vec![WeightedEdge::new(2, 3, 2), WeightedEdge::new(1, 3, 3)]
        );
        assert_eq!(report.total_weight, 5);
        assert!(!report.disconnected);
        assert!(!report.trace.contains("✗ Skipped edge"));
    }

    #[test]
    fn kruskal_logs_rejection_of_cycle_closing_edge() {
        // (1,3,2) is examined while the tree is still incomplete and must be
        // rejected before (3,4,5) finishes it
        let graph = snapshot(&[1, 2, 3, 4], &[(1, 2, 1), (2, 3, 1), (1, 3, 2), (3, 4, 5)]);
        let report = kruskal(&graph);

        assert_eq!(
            report.edges,
            vec![
                WeightedEdge::new(1, 2, 1),
                WeightedEdge::new(2, 3, 1),
                WeightedEdge::new(3, 4, 5),
            ]
        );
        assert_eq!(report.total_weight, 7);
        assert!(!report.disconnected);
        assert!(report
            .trace
            .contains("✗ Skipped edge: 1 ↔ 3 (would create cycle)"));
    }

    #[test]
    fn kruskal_stops_early_once_tree_is_complete() {
        let graph = snapshot(
            &[1, 2, 3, 4],
            &[(1, 2, 1), (2, 3, 1), (3, 4, 1), (1, 4, 9), (2, 4, 9)],
        );
        let report = kruskal(&graph);

        assert_eq!(report.edges.len(), 3);
        assert!(report.trace.contains("MST complete (3 edges for 4 nodes)"));
        // the expensive edges were never considered
        assert!(!report.trace.contains("1 ↔ 4 (would create cycle)"));
    }

    #[test]
    fn kruskal_tie_break_keeps_insertion_order() {
        let graph = snapshot(&[1, 2, 3], &[(2, 3, 2), (1, 2, 2)]);
        let report = kruskal(&graph);

        assert_eq!(
            report.edges,
            vec![WeightedEdge::new(2, 3, 2), WeightedEdge::new(1, 2, 2)]
        );
    }

    #[test]
    fn prim_disconnected_graph_flags_partial_tree() {
        // spec scenario: components {1,2} and {3}
        let graph = snapshot(&[1, 2, 3], &[(1, 2, 1)]);
        let report = prim(&graph, 1);

        assert_eq!(report.edges, vec![WeightedEdge::new(1, 2, 1)]);
        assert_eq!(report.total_weight, 1);
        assert!(report.disconnected);
        assert!(report
            .trace
            .contains("Warning: Graph is disconnected. MST includes 2 of 3 nodes."));
    }

    #[test]
    fn kruskal_disconnected_graph_flags_partial_tree() {
        let graph = snapshot(&[1, 2, 3], &[(1, 2, 1)]);
        let report = kruskal(&graph);

        assert!(report.disconnected);
        assert!(report
            .trace
            .contains("Warning: Graph is disconnected. MST has 1 edges (expected 2)."));
    }

    #[test]
    fn prim_and_kruskal_agree_on_total_weight() {
        let graph = snapshot(
            &[1, 2, 3, 4, 5],
            &[
                (1, 2, 4),
                (1, 3, 8),
                (2, 3, 3),
                (2, 4, 5),
                (3, 4, 2),
                (3, 5, 6),
                (4, 5, 7),
            ],
        );

        let prim_report = prim(&graph, 1);
        let kruskal_report = kruskal(&graph);

        assert_eq!(prim_report.edges.len(), 4);
        assert_eq!(kruskal_report.edges.len(), 4);
        assert_eq!(prim_report.total_weight, kruskal_report.total_weight);
        assert!(!prim_report.disconnected);
        assert!(!kruskal_report.disconnected);
    }

    #[test]
    fn single_node_graph_has_empty_connected_tree() {
        let graph = snapshot(&[42], &[]);

        let prim_report = prim(&graph, 42);
        assert!(prim_report.edges.is_empty());
        assert_eq!(prim_report.total_weight, 0);
        assert!(!prim_report.disconnected);

        let kruskal_report = kruskal(&graph);
        assert!(kruskal_report.edges.is_empty());
        assert!(!kruskal_report.disconnected);
    }

    #[test]
    fn prim_trace_logs_edge_additions_and_relaxations() {
        let graph = snapshot(&[1, 2, 3], &[(1, 2, 5), (1, 3, 3), (2, 3, 2)]);
        let report = prim(&graph, 1);

        assert!(report.trace.contains("  Updated key of node 2: 5 (via node 1)"));
        assert!(report.trace.contains("  Updated key of node 2: 2 (via node 3)"));
        assert!(report.trace.contains("Added edge: 1 → 3 (weight: 3)"));
        assert!(report.trace.contains("Added edge: 3 → 2 (weight: 2)"));
        assert_eq!(report.total_weight, 5);
    }
}
