use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/events", post(handlers::record_form))
        .route("/chart.svg", get(handlers::chart_svg))
        .route("/api/events", post(handlers::record))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/average", get(handlers::get_average))
        .route("/api/series", get(handlers::get_series))
        .with_state(state)
}
