use crate::{
    types::app_state::AppState,
    utils::{
        app_error::AppError,
        rail_client,
        service_filter::{filter_train_services, MAX_ARRIVAL_SERVICES, WEST_HORNDON_NAME},
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

/// Departures from Fenchurch Street, filtered to the services calling at
/// West Horndon and capped at five entries.
pub async fn get_fenchurch_street_arrivals(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mut board = state
        .rail_client
        .fetch_departures(rail_client::FENCHURCH_STREET)
        .await
        .map_err(|e| {
            error!("Failed to fetch Fenchurch Street departures: {}", e);
            AppError::new(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        })?;

    filter_train_services(&mut board, WEST_HORNDON_NAME, MAX_ARRIVAL_SERVICES);

    Ok((StatusCode::OK, Json(board)).into_response())
}
