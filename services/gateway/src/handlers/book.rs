use crate::error::AppError;
use crate::models::BookStatsResponse;
use crate::state::AppState;
use axum::{extract::State, Json};
use matching_engine::DepthSnapshot;

pub async fn depth(State(state): State<AppState>) -> Result<Json<DepthSnapshot>, AppError> {
    let snapshot = state.engine.depth().await?;
    Ok(Json(snapshot))
}

pub async fn stats(State(state): State<AppState>) -> Result<Json<BookStatsResponse>, AppError> {
    let open_orders = state.engine.order_count().await?;
    Ok(Json(BookStatsResponse { open_orders }))
}
