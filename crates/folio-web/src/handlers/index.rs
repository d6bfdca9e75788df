use axum::extract::{Query, State};
use axum::response::Html;
use std::sync::Arc;

use crate::models::{AppError, SelectionQuery};
use crate::state::AppState;
use crate::template;

pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Html<String>, AppError> {
    let selection = query.resolve(&state.default_selection)?;
    Ok(template::render_index(&state, &selection))
}
