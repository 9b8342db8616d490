use crate::handlers::{book, order};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/orders", post(order::add_order))
        .route("/orders/:id", delete(order::cancel_order))
        .route("/orders/:id/modify", post(order::modify_order))
        .route("/book", get(book::depth))
        .route("/book/stats", get(book::stats));

    Router::new()
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
