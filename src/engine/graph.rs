use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::EngineError;

pub type NodeId = u32;
pub type Weight = u32;

fn default_weight() -> Weight {
    1
}

/// Undirected weighted edge between two editor nodes. `(a, b)` and `(b, a)`
/// denote the same edge; the editor guarantees uniqueness before an edge is
/// ever created, so the engine does not check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeightedEdge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// Immutable per-invocation view of the editor's graph. Owns its node and
/// edge lists; algorithms never touch caller-owned collections.
///
/// Node ids are editor-assigned and need not be contiguous, so the snapshot
/// keeps a dense index per node. The adjacency list is symmetric and has an
/// entry for every node, isolated ones included.
#[derive(Debug)]
pub struct GraphSnapshot {
    nodes: Vec<NodeId>,
    edges: Vec<WeightedEdge>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<(NodeId, Weight)>>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<NodeId>, edges: Vec<WeightedEdge>) -> Result<Self, EngineError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, &node) in nodes.iter().enumerate() {
            if index.insert(node, i).is_some() {
                return Err(EngineError::DuplicateNode { node });
            }
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        for edge in &edges {
            if edge.source == edge.target {
                return Err(EngineError::SelfLoop { node: edge.source });
            }

            if edge.weight == 0 {
                return Err(EngineError::InvalidWeight {
                    from: edge.source,
                    to: edge.target,
                    weight: edge.weight,
                });
            }

            let (su, sv) = match (index.get(&edge.source), index.get(&edge.target)) {
                (Some(&su), Some(&sv)) => (su, sv),
                (None, _) => return Err(EngineError::UnknownNode { node: edge.source }),
                (_, None) => return Err(EngineError::UnknownNode { node: edge.target }),
            };

            adjacency[su].push((edge.target, edge.weight));
            adjacency[sv].push((edge.source, edge.weight));
        }

        Ok(Self {
            nodes,
            edges,
            index,
            adjacency,
        })
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).copied()
    }

    /// Neighbors of `node` in edge-insertion order; empty for unknown ids so
    /// lookups never fail mid-traversal.
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        self.index
            .get(&node)
            .map(|&i| self.adjacency[i].as_slice())
            .unwrap_or(&[])
    }
}
