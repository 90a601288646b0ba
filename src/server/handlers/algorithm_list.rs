use super::common::*;
use crate::engine::Algorithm;

#[derive(Debug, Serialize)]
pub struct AlgorithmInfo {
    name: Algorithm,
    label: String,
    requires_source: bool,
}

#[derive(Serialize)]
struct Response {
    status: &'static str,
    algorithms: Vec<AlgorithmInfo>,
}

pub fn get_algorithm_list() -> Vec<AlgorithmInfo> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| AlgorithmInfo {
            name: algorithm,
            label: algorithm.to_string(),
            requires_source: algorithm.requires_source(),
        })
        .collect()
}

/// Catalog for the editor's algorithm dropdown.
pub async fn algorithm_list_handler() -> HandlerResult<impl IntoResponse> {
    Ok(Json(Response {
        status: "ok",
        algorithms: get_algorithm_list(),
    }))
}
