use crate::errors::AppError;
use crate::models::{AverageQuery, AverageResponse, RecordResponse, SeriesResponse, Summary};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use std::num::NonZeroU32;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    let summary = tracker.summary(state.config.recent_days);
    Html(render_index(&summary, &tracker.chart_svg(), state.config.average_days))
}

pub async fn record(State(state): State<AppState>) -> Result<Json<RecordResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let event = tracker.record().await?;

    Ok(Json(RecordResponse {
        recorded_at: event.to_rfc3339(),
        summary: tracker.summary(state.config.recent_days),
    }))
}

pub async fn record_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.tracker.lock().await.record().await?;
    Ok(Redirect::to("/"))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<Summary> {
    let tracker = state.tracker.lock().await;
    Json(tracker.summary(state.config.recent_days))
}

pub async fn get_average(
    State(state): State<AppState>,
    Query(query): Query<AverageQuery>,
) -> Result<Json<AverageResponse>, AppError> {
    let days = match query.days {
        Some(days) => NonZeroU32::new(days)
            .ok_or_else(|| AppError::bad_request("days must be a positive integer"))?,
        None => state.config.average_days,
    };

    let tracker = state.tracker.lock().await;
    let average = tracker.rolling_average(days);

    Ok(Json(AverageResponse {
        days: days.get(),
        reference_day: tracker.today().to_string(),
        average,
        display: format!("{average:.2}"),
    }))
}

pub async fn get_series(State(state): State<AppState>) -> Json<SeriesResponse> {
    Json(state.tracker.lock().await.series())
}

pub async fn chart_svg(State(state): State<AppState>) -> impl IntoResponse {
    let svg = state.tracker.lock().await.chart_svg();
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg)
}
