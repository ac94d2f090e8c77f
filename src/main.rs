mod app;
mod routes;
mod types;
mod utils;

use std::env;
use tracing::{info, Level};

use crate::app::AppConfig;
use crate::utils::rail_client::HUXLEY_HOST;

#[tokio::main]
async fn main() {
    let debug = env::var("APP_ENV").is_ok_and(|v| v == "development");

    tracing_subscriber::fmt()
        .with_max_level(if debug { Level::DEBUG } else { Level::INFO })
        .init();

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);

    let app = app::gen_app(AppConfig {
        huxley_host: HUXLEY_HOST.to_string(),
        static_dir: "static".to_string(),
    });

    info!("Listening on port {}...", port);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    axum::serve(listener, app).await.unwrap();
}
