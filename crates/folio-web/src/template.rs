use axum::response::Html;
use folio_core::Selection;

use crate::state::AppState;

/// Render the full page for `selection`.
pub fn render_index(state: &AppState, selection: &Selection) -> Html<String> {
    let view = state.catalog.view(selection);
    Html(folio_reporting::render_page(
        &state.catalog,
        &view,
        &state.options,
    ))
}

/// Render only the publication list for `selection`.
pub fn render_fragment(state: &AppState, selection: &Selection) -> Html<String> {
    let view = state.catalog.view(selection);
    Html(folio_reporting::publication_list(
        &view,
        state.options.stagger_ms,
    ))
}
