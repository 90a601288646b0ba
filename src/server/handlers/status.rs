use super::common::*;

#[derive(Serialize)]
struct Response {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
}

pub async fn status_handler(
    State(app_data): State<Arc<AppState>>,
) -> HandlerResult<impl IntoResponse> {
    Ok(Json(Response {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: app_data.uptime().as_secs(),
    }))
}
