use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_departures;
mod get_fenchurch_street_arrivals;
mod get_southend_arrivals;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/api/departures", get(get_departures::get_departures))
        .route(
            "/api/arrivals/fenchurch-street",
            get(get_fenchurch_street_arrivals::get_fenchurch_street_arrivals),
        )
        .route(
            "/api/arrivals/southend",
            get(get_southend_arrivals::get_southend_arrivals),
        )
}
