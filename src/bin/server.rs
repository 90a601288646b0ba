use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use dotenv::dotenv;

use graphpad_server::server::{app_state::AppState, router::create_router};

use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use axum_server::tls_rustls::RustlsConfig;

const BIND_ADDRESS: [u8; 4] = [0, 0, 0, 0];

async fn http_server(app_state: Arc<AppState>, opts: Arc<Opts>) -> Result<(), anyhow::Error> {
    let app = create_router(app_state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from((BIND_ADDRESS, opts.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Start listening on for HTTP on {addr:?}");
    Ok(axum::serve(listener, app).await?)
}

async fn https_server(app_state: Arc<AppState>, opts: Arc<Opts>) -> Result<(), anyhow::Error> {
    let app = create_router(app_state);

    // configure certificate and private key used by https
    let tls_config = RustlsConfig::from_pem_file(
        PathBuf::from("certs").join("cert.pem"),
        PathBuf::from("certs").join("privkey.pem"),
    )
    .await
    .expect("Loading TLS certificates failed (expected files at certs/{cert,privkey}.pem); will only serve on HTTP port.");

    let addr = SocketAddr::from((BIND_ADDRESS, opts.https_port));
    info!("Start listening on for HTTPS on {addr:?}");
    Ok(axum_server::bind_rustls(addr, tls_config)
        .serve(app.into_make_service())
        .await?)
}

#[derive(StructOpt)]
struct Opts {
    #[structopt(short = "-h", long, default_value = "8000")]
    http_port: u16,
    #[structopt(short = "-s", long, default_value = "8080")]
    https_port: u16,

    #[structopt(long)]
    no_https: bool,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let opts = Arc::new(Opts::from_args());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graphpad_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = Arc::new(AppState::new());

    if !opts.no_https {
        tokio::spawn(https_server(app_state.clone(), opts.clone()));
    }
    http_server(app_state, opts.clone()).await.unwrap()
}
