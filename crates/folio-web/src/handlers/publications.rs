use axum::extract::{Query, State};
use axum::response::Html;
use std::sync::Arc;

use crate::models::{AppError, SelectionQuery};
use crate::state::AppState;
use crate::template;

/// The publication list alone, for swapping into `#publications-grid`.
pub async fn fragment(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Html<String>, AppError> {
    let selection = query.resolve(&state.default_selection)?;
    tracing::debug!(filter = %selection.filter, sort = %selection.sort, "rendering fragment");
    Ok(template::render_fragment(&state, &selection))
}
