use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/items", get(handlers::get_items))
        .route("/api/chart", get(handlers::get_chart))
        .with_state(state)
}
