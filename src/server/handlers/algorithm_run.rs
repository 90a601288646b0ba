use tracing::debug;

use super::common::*;
use crate::engine::{self, Algorithm, AlgorithmReport, NodeId, WeightedEdge};

#[derive(Debug, Deserialize, Serialize)]
pub struct AlgorithmRunRequest {
    pub algorithm: Algorithm,
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<WeightedEdge>,
    pub source_id: Option<NodeId>,
}

#[derive(Serialize)]
struct Response {
    status: &'static str,
    data: AlgorithmReport,
}

/// Runs the requested algorithm on the snapshot carried by the request body.
/// Validation failures come back as 400 with the engine's message; a panic
/// inside the engine is caught at this boundary and surfaced as a generic
/// 500, never a crashed process.
pub async fn algorithm_run_handler(
    State(_app_data): State<Arc<AppState>>,
    Json(body): Json<AlgorithmRunRequest>,
) -> HandlerResult<impl IntoResponse> {
    debug!(
        "run request: {:?} ({} nodes, {} edges)",
        body.algorithm,
        body.nodes.len(),
        body.edges.len()
    );

    let AlgorithmRunRequest {
        algorithm,
        nodes,
        edges,
        source_id,
    } = body;

    let report = tokio::task::spawn_blocking(move || engine::run(algorithm, nodes, edges, source_id))
        .await
        .map_err(debug_to_err_response)?
        .map_err(engine_to_err_response)?;

    Ok(Json(Response {
        status: "success",
        data: report,
    }))
}
