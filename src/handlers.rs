use crate::dashboard::{Dashboard, DashboardView};
use crate::errors::AppError;
use crate::models::{ChartQuery, ItemsResponse};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use std::sync::Arc;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let dashboard = load_dashboard(&state).await?;
    Ok(Html(render_index(&state.title, dashboard.options())))
}

pub async fn get_items(State(state): State<AppState>) -> Result<Json<ItemsResponse>, AppError> {
    let dashboard = load_dashboard(&state).await?;
    Ok(Json(ItemsResponse {
        table: state.sales.table_name().to_string(),
        items: dashboard.options().to_vec(),
    }))
}

pub async fn get_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<DashboardView>, AppError> {
    let dashboard = load_dashboard(&state).await?;
    let item = query
        .item
        .or_else(|| dashboard.default_item().map(str::to_string))
        .unwrap_or_default();

    Ok(Json(dashboard.on_selection_changed(&item)))
}

async fn load_dashboard(state: &AppState) -> Result<Arc<Dashboard>, AppError> {
    Ok(state.sales.dashboard().await?)
}
