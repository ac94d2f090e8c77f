use crate::{routes::apply_routes, types::app_state::AppState, utils::rail_client::RailClient};
use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir};

#[derive(Clone)]
pub struct AppConfig {
    pub huxley_host: String,
    pub static_dir: String,
}

pub fn gen_app(config: AppConfig) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        rail_client: RailClient::new(config.huxley_host),
    };

    // Anything the API routes don't claim falls through to the static
    // frontend; directory requests resolve to index.html.
    apply_routes(Router::new())
        .fallback_service(ServeDir::new(config.static_dir))
        .layer(cors_middleware)
        .with_state(state)
}
