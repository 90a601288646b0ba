pub use crate::server::app_state::AppState;

pub use axum::extract::State;
pub use axum::http::StatusCode;
pub use axum::{response::IntoResponse, Json};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
use tracing::debug;

use crate::engine::EngineError;

pub(super) fn debug_to_err_response<T: std::fmt::Debug>(
    err: T,
) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"status": "error", "message": format!("Error running algorithm: {err:?}")})),
    )
}

pub(super) fn engine_to_err_response(err: EngineError) -> (StatusCode, Json<serde_json::Value>) {
    debug!("engine rejected request: {err}");
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"status": "error", "message": err.to_string()})),
    )
}

pub type HandlerErr = (StatusCode, Json<serde_json::Value>);
pub type HandlerResult<T> = Result<T, HandlerErr>;
