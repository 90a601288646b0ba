pub mod disjoint_set;
pub mod error;
pub mod graph;
pub mod heap;
pub mod report;

mod shortest_path;
mod spanning_tree;
mod traversal;

pub use error::EngineError;
pub use graph::{GraphSnapshot, NodeId, Weight, WeightedEdge};
pub use report::{AlgorithmReport, HighlightEdge};

use serde::{Deserialize, Serialize};

/// The closed set of algorithms the editor can run. Unknown names are
/// rejected at deserialization, so the dispatcher match stays exhaustive.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Prim,
    Kruskal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Prim,
        Algorithm::Kruskal,
    ];

    /// Kruskal is the only algorithm independent of node selection.
    pub fn requires_source(self) -> bool {
        !matches!(self, Algorithm::Kruskal)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra's algorithm",
            Algorithm::Prim => "Prim's algorithm",
            Algorithm::Kruskal => "Kruskal's algorithm",
        })
    }
}

/// Single entry point for external collaborators: validates the snapshot and
/// source selection, then runs the requested algorithm to completion on an
/// immutable copy of the graph. Never mutates the caller's collections and
/// never panics on caller input.
pub fn run(
    algorithm: Algorithm,
    nodes: Vec<NodeId>,
    edges: Vec<WeightedEdge>,
    source: Option<NodeId>,
) -> Result<AlgorithmReport, EngineError> {
    if nodes.is_empty() {
        return Err(EngineError::EmptyGraph);
    }

    let snapshot = GraphSnapshot::new(nodes, edges)?;

    let source = if algorithm.requires_source() {
        let source = source.ok_or(EngineError::MissingSource { algorithm })?;
        if !snapshot.contains(source) {
            return Err(EngineError::UnknownNode { node: source });
        }
        Some(source)
    } else {
        None
    };

    Ok(match algorithm {
        Algorithm::Bfs => {
            AlgorithmReport::Traversal(traversal::bfs(&snapshot, source.unwrap_or_default()))
        }
        Algorithm::Dfs => {
            AlgorithmReport::Traversal(traversal::dfs(&snapshot, source.unwrap_or_default()))
        }
        Algorithm::Dijkstra => AlgorithmReport::ShortestPaths(shortest_path::dijkstra(
            &snapshot,
            source.unwrap_or_default(),
        )),
        Algorithm::Prim => AlgorithmReport::SpanningTree(spanning_tree::prim(
            &snapshot,
            source.unwrap_or_default(),
        )),
        Algorithm::Kruskal => AlgorithmReport::SpanningTree(spanning_tree::kruskal(&snapshot)),
    })
}
