use super::graph::{NodeId, Weight};
use super::Algorithm;

/// Reportable engine failures. Disconnected graphs and unreachable nodes are
/// deliberately absent: those are legitimate results, flagged in the report
/// itself rather than raised as errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Graph is empty. Please add some nodes first.")]
    EmptyGraph,

    #[error("Please select a source node for {algorithm}.")]
    MissingSource { algorithm: Algorithm },

    #[error("Node {node} does not exist in the graph.")]
    UnknownNode { node: NodeId },

    #[error("Node {node} appears more than once in the snapshot.")]
    DuplicateNode { node: NodeId },

    #[error("Edge from node {node} to itself is not allowed.")]
    SelfLoop { node: NodeId },

    // endpoint fields deliberately not named `source`: thiserror would treat
    // such a field as the error's cause
    #[error("Edge {from} - {to} has invalid weight {weight}; weights must be positive.")]
    InvalidWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },
}
