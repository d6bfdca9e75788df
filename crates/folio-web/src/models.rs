use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::{CoreError, Selection};
use serde::Deserialize;

/// Selection controls as they arrive in a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionQuery {
    pub filter: Option<String>,
    pub sort: Option<String>,
}

impl SelectionQuery {
    /// Selection for this query; absent controls keep `defaults`.
    pub fn resolve(&self, defaults: &Selection) -> Result<Selection, CoreError> {
        defaults
            .clone()
            .override_with(self.filter.as_deref(), self.sort.as_deref())
    }
}

/// Handler error: a bad control value is the client's fault, anything else ours.
#[derive(Debug)]
pub struct AppError(pub CoreError);

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            CoreError::UnknownSortOrder(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(status = status.as_u16(), error = %self.0, "request failed");
        (status, self.0.to_string()).into_response()
    }
}
