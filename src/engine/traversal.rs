use itertools::Itertools;
use std::collections::{BTreeMap, HashSet, VecDeque};

use super::graph::{GraphSnapshot, NodeId};
use super::report::{reconstruct_path, render_path, tree_highlight_edges, Trace, TraversalReport};

/// Breadth-first search from `source` (validated by the dispatcher),
/// recording hop distances and BFS parents. Shortest-by-hop-count paths are
/// listed in the trace for every reachable node; unreachable nodes are called
/// out explicitly.
pub(super) fn bfs(snapshot: &GraphSnapshot, source: NodeId) -> TraversalReport {
    let mut visited: Vec<NodeId> = Vec::new();
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut trace = Trace::new();

    let mut parents: BTreeMap<NodeId, Option<NodeId>> = BTreeMap::new();
    let mut distances: BTreeMap<NodeId, Option<u32>> = BTreeMap::new();
    for &node in snapshot.nodes() {
        parents.insert(node, None);
        distances.insert(node, (node == source).then_some(0));
    }

    seen.insert(source);
    visited.push(source);
    queue.push_back(source);

    trace.line(format!("Starting BFS from node {source}"));
    trace.line(format!("Queue: [{source}]"));

    while let Some(current) = queue.pop_front() {
        let current_distance = distances[&current].unwrap_or(0);

        trace.blank();
        trace.line(format!(
            "Visiting node {current} (distance: {current_distance})"
        ));

        let neighbors = snapshot.neighbors(current);
        trace.line(format!(
            "  Neighbors: [{}]",
            neighbors.iter().map(|(n, _)| n).join(", ")
        ));

        for &(neighbor, _) in neighbors {
            if seen.insert(neighbor) {
                visited.push(neighbor);
                queue.push_back(neighbor);
                parents.insert(neighbor, Some(current));
                distances.insert(neighbor, Some(current_distance + 1));
                trace.line(format!(
                    "  Added node {neighbor} to queue (distance: {})",
                    current_distance + 1
                ));
            }
        }
    }

    trace.blank();
    trace.line("--- BFS Traversal Complete ---");
    trace.line(format!("Visited {} nodes", visited.len()));

    trace.blank();
    trace.line("Distances from source:");
    for &node in snapshot.nodes() {
        match distances[&node] {
            None => trace.line(format!("Node {node}: unreachable")),
            Some(distance) => {
                let path = reconstruct_path(&parents, source, node);
                trace.line(format!(
                    "Node {node}: {distance} hops [Path: {}]",
                    render_path(&path)
                ));
            }
        }
    }

    let highlight_edges = tree_highlight_edges(snapshot.nodes(), &parents);
    TraversalReport {
        visited,
        parents,
        hop_distances: Some(distances),
        discovery_times: None,
        finish_times: None,
        trace: trace.finish(),
        highlight_edges,
    }
}

struct Frame {
    node: NodeId,
    depth: usize,
    cursor: usize,
}

/// Depth-first search from `source` with discovery/finish timestamps: a
/// single counter, bumped once per discovery and once per finish. Runs on an
/// explicit stack so deep graphs cannot blow the call stack, but the trace
/// keeps the recursive shape (two-space indent per level, back edges logged
/// where they are encountered).
pub(super) fn dfs(snapshot: &GraphSnapshot, source: NodeId) -> TraversalReport {
    let mut visited: Vec<NodeId> = Vec::new();
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut trace = Trace::new();
    let mut time = 0u32;

    let mut parents: BTreeMap<NodeId, Option<NodeId>> = BTreeMap::new();
    let mut discovery: BTreeMap<NodeId, Option<u32>> = BTreeMap::new();
    let mut finish: BTreeMap<NodeId, Option<u32>> = BTreeMap::new();
    for &node in snapshot.nodes() {
        parents.insert(node, None);
        discovery.insert(node, None);
        finish.insert(node, None);
    }

    trace.line(format!("Starting DFS from node {source}"));

    seen.insert(source);
    visited.push(source);
    time += 1;
    discovery.insert(source, Some(time));
    trace.line(format!("Discovered node {source} at time {time}"));

    let mut stack = vec![Frame {
        node: source,
        depth: 0,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let depth = frame.depth;
        let indent = "  ".repeat(depth);
        let neighbors = snapshot.neighbors(node);

        if frame.cursor >= neighbors.len() {
            time += 1;
            finish.insert(node, Some(time));
            trace.line(format!("{indent}Finished node {node} at time {time}"));
            stack.pop();
            continue;
        }

        let (neighbor, _) = neighbors[frame.cursor];
        frame.cursor += 1;

        if seen.insert(neighbor) {
            parents.insert(neighbor, Some(node));
            visited.push(neighbor);
            trace.line(format!("{indent}  Exploring edge {node} → {neighbor}"));

            time += 1;
            discovery.insert(neighbor, Some(time));
            let child_indent = "  ".repeat(depth + 1);
            trace.line(format!("{child_indent}Discovered node {neighbor} at time {time}"));

            stack.push(Frame {
                node: neighbor,
                depth: depth + 1,
                cursor: 0,
            });
        } else {
            trace.line(format!(
                "{indent}  Node {neighbor} already visited (back edge)"
            ));
        }
    }

    let unreachable: Vec<NodeId> = snapshot
        .nodes()
        .iter()
        .copied()
        .filter(|node| !seen.contains(node))
        .collect();
    if !unreachable.is_empty() {
        trace.blank();
        trace.line(format!(
            "Unreachable nodes: [{}]",
            unreachable.iter().join(", ")
        ));
    }

    trace.blank();
    trace.line("--- DFS Traversal Complete ---");
    trace.line(format!("Visited {} nodes", visited.len()));

    trace.blank();
    trace.line("Discovery/Finish times:");
    for &node in snapshot.nodes() {
        if let (Some(d), Some(f)) = (discovery[&node], finish[&node]) {
            trace.line(format!("Node {node}: discovered at {d}, finished at {f}"));
        }
    }

    let highlight_edges = tree_highlight_edges(snapshot.nodes(), &parents);
    TraversalReport {
        visited,
        parents,
        hop_distances: None,
        discovery_times: Some(discovery),
        finish_times: Some(finish),
        trace: trace.finish(),
        highlight_edges,
    }
}
