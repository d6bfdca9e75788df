use axum::Json;
use axum::extract::{Query, State};
use folio_core::Category;
use folio_reporting::ViewJson;
use std::sync::Arc;

use crate::models::{AppError, SelectionQuery};
use crate::state::AppState;

pub async fn publications(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<ViewJson>, AppError> {
    let selection = query.resolve(&state.default_selection)?;
    let view = state.catalog.view(&selection);
    Ok(Json(ViewJson::from(&view)))
}

pub async fn categories(State(state): State<Arc<AppState>>) -> Json<Vec<Category>> {
    Json(state.catalog.categories())
}
