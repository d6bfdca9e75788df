use folio_core::{Catalog, Selection};
use folio_reporting::RenderOptions;

/// Shared application state accessible from all handlers.
///
/// Read-only after startup: every request derives its own [`Selection`]
/// from the query string and renders against this catalog.
pub struct AppState {
    pub catalog: Catalog,
    pub options: RenderOptions,
    /// Selection used for controls missing from the query.
    pub default_selection: Selection,
}
