use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, rail_client},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use tracing::error;

/// The West Horndon departure board, passed through from upstream unmodified.
/// Unlike the arrivals boards this one is not filtered by destination.
#[cfg_attr(test, debug_handler)]
pub async fn get_departures(State(state): State<AppState>) -> Result<Response, AppError> {
    let board = state
        .rail_client
        .fetch_departures(rail_client::WEST_HORNDON)
        .await
        .map_err(|e| {
            error!("Failed to fetch West Horndon departures: {}", e);
            AppError::new(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        })?;

    Ok((StatusCode::OK, Json(board)).into_response())
}
