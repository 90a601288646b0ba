use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

use super::graph::{NodeId, WeightedEdge};

/// Edge the editor should visually emphasize when displaying a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightEdge {
    pub source: NodeId,
    pub target: NodeId,
}

/// BFS/DFS result. `hop_distances` is populated by BFS, the time maps by
/// DFS; unvisited nodes carry `None` so every snapshot node has an entry.
#[derive(Debug, Serialize)]
pub struct TraversalReport {
    pub visited: Vec<NodeId>,
    pub parents: BTreeMap<NodeId, Option<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hop_distances: Option<BTreeMap<NodeId, Option<u32>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovery_times: Option<BTreeMap<NodeId, Option<u32>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_times: Option<BTreeMap<NodeId, Option<u32>>>,
    pub trace: String,
    pub highlight_edges: Vec<HighlightEdge>,
}

/// Dijkstra result. A `None` distance marks an unreachable node; its path is
/// empty.
#[derive(Debug, Serialize)]
pub struct ShortestPathReport {
    pub distances: BTreeMap<NodeId, Option<u64>>,
    pub predecessors: BTreeMap<NodeId, Option<NodeId>>,
    pub paths: BTreeMap<NodeId, Vec<NodeId>>,
    pub trace: String,
    pub highlight_edges: Vec<HighlightEdge>,
}

/// Prim/Kruskal result. `disconnected` is a warning, not a failure: the edge
/// list then spans only part of the graph.
#[derive(Debug, Serialize)]
pub struct SpanningTreeReport {
    pub edges: Vec<WeightedEdge>,
    pub total_weight: u64,
    pub disconnected: bool,
    pub trace: String,
    pub highlight_edges: Vec<HighlightEdge>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmReport {
    Traversal(TraversalReport),
    ShortestPaths(ShortestPathReport),
    SpanningTree(SpanningTreeReport),
}

impl AlgorithmReport {
    pub fn trace(&self) -> &str {
        match self {
            Self::Traversal(r) => &r.trace,
            Self::ShortestPaths(r) => &r.trace,
            Self::SpanningTree(r) => &r.trace,
        }
    }

    pub fn highlight_edges(&self) -> &[HighlightEdge] {
        match self {
            Self::Traversal(r) => &r.highlight_edges,
            Self::ShortestPaths(r) => &r.highlight_edges,
            Self::SpanningTree(r) => &r.highlight_edges,
        }
    }
}

/// Line-oriented builder for the human-readable step log.
#[derive(Debug, Default)]
pub(super) struct Trace {
    lines: Vec<String>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

pub(super) fn render_path(path: &[NodeId]) -> String {
    path.iter().join(" → ")
}

/// Walks parent pointers back from `target`; empty if `target` is not in the
/// tree rooted at `source`.
pub(super) fn reconstruct_path(
    parents: &BTreeMap<NodeId, Option<NodeId>>,
    source: NodeId,
    target: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;

    while let Some(&Some(parent)) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }

    path.reverse();
    if path[0] == source {
        path
    } else {
        Vec::new()
    }
}

/// One highlight edge per parent pointer, in snapshot node order.
pub(super) fn tree_highlight_edges(
    nodes: &[NodeId],
    parents: &BTreeMap<NodeId, Option<NodeId>>,
) -> Vec<HighlightEdge> {
    nodes
        .iter()
        .filter_map(|&node| {
            parents.get(&node).copied().flatten().map(|parent| HighlightEdge {
                source: parent,
                target: node,
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn parents_of(pairs: &[(NodeId, Option<NodeId>)]) -> BTreeMap<NodeId, Option<NodeId>> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn reconstructs_rooted_paths() {
        let parents = parents_of(&[(1, None), (2, Some(1)), (3, Some(2)), (4, None)]);

        assert_eq!(reconstruct_path(&parents, 1, 3), vec![1, 2, 3]);
        assert_eq!(reconstruct_path(&parents, 1, 1), vec![1]);
        // node 4 has no chain back to the source
        assert!(reconstruct_path(&parents, 1, 4).is_empty());
    }

    #[test]
    fn highlight_edges_follow_node_order() {
        let parents = parents_of(&[(1, None), (2, Some(1)), (3, Some(1)), (4, None)]);

        assert_eq!(
            tree_highlight_edges(&[3, 2, 1, 4], &parents),
            vec![
                HighlightEdge { source: 1, target: 3 },
                HighlightEdge { source: 1, target: 2 },
            ]
        );
    }

    #[test]
    fn trace_joins_lines() {
        let mut trace = Trace::new();
        trace.line("first");
        trace.blank();
        trace.line("second");

        assert_eq!(trace.finish(), "first\n\nsecond");
    }
}
