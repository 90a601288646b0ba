use itertools::Itertools;
use std::collections::{BTreeMap, HashSet};

use super::graph::{GraphSnapshot, NodeId};
use super::heap::MinHeap;
use super::report::{reconstruct_path, render_path, tree_highlight_edges, ShortestPathReport, Trace};

/// Dijkstra's label-setting shortest paths from `source`. Weights are
/// positive, so once a node is popped and finalized its distance never
/// improves again; stale lazy-deletion heap entries are skipped via the
/// finalized set.
pub(super) fn dijkstra(snapshot: &GraphSnapshot, source: NodeId) -> ShortestPathReport {
    let mut distances: BTreeMap<NodeId, Option<u64>> = BTreeMap::new();
    let mut predecessors: BTreeMap<NodeId, Option<NodeId>> = BTreeMap::new();
    for &node in snapshot.nodes() {
        distances.insert(node, (node == source).then_some(0));
        predecessors.insert(node, None);
    }

    let mut finalized: HashSet<NodeId> = HashSet::new();
    let mut heap = MinHeap::new();
    heap.push(source, 0);

    let mut trace = Trace::new();
    trace.line(format!("Starting Dijkstra's algorithm from node {source}"));
    trace.line(format!(
        "Initial distances: {{{}}}",
        snapshot
            .nodes()
            .iter()
            .map(|&node| match distances[&node] {
                Some(d) => format!("{node}: {d}"),
                None => format!("{node}: inf"),
            })
            .join(", ")
    ));

    while let Some((current, _)) = heap.pop() {
        if !finalized.insert(current) {
            // stale entry for an already-finalized node
            continue;
        }

        let current_distance = match distances[&current] {
            Some(d) => d,
            None => continue,
        };

        trace.blank();
        trace.line(format!(
            "Visiting node {current} (distance: {current_distance})"
        ));

        for &(neighbor, weight) in snapshot.neighbors(current) {
            if finalized.contains(&neighbor) {
                continue;
            }

            let candidate = current_distance + u64::from(weight);
            if distances[&neighbor].map_or(true, |d| candidate < d) {
                distances.insert(neighbor, Some(candidate));
                predecessors.insert(neighbor, Some(current));
                heap.push(neighbor, candidate);
                trace.line(format!(
                    "  Updated distance to node {neighbor}: {candidate} (via node {current})"
                ));
            }
        }
    }

    trace.blank();
    trace.line("--- Final Shortest Paths ---");

    let mut paths: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
    for &node in snapshot.nodes() {
        let path = match distances[&node] {
            Some(_) => reconstruct_path(&predecessors, source, node),
            None => Vec::new(),
        };

        if node == source {
            trace.line(format!("Node {node}: 0 (source)"));
        } else {
            match distances[&node] {
                None => trace.line(format!("Node {node}: unreachable")),
                Some(distance) => trace.line(format!(
                    "Node {node}: {distance} [Path: {}]",
                    render_path(&path)
                )),
            }
        }

        paths.insert(node, path);
    }

    let highlight_edges = tree_highlight_edges(snapshot.nodes(), &predecessors);
    ShortestPathReport {
        distances,
        predecessors,
        paths,
        trace: trace.finish(),
        highlight_edges,
    }
}
