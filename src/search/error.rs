use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Outcome categories a caller has to distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad paging input from the user.
    InvalidArgument,
    /// Unknown genre, or nothing on the requested page.
    NotFound,
    /// Selector text outside the closed `SearchBy` / `OrderBy` domains.
    Unsupported,
    /// The record source failed.
    Internal,
}

/// Every way a search can fail. `Display` is the user-facing message.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Number of Results must be more than 0 but was: {0}")]
    InvalidNumberOfResults(i32),

    #[error("Page Number must be more than 0 but was: {0}")]
    InvalidPageNumber(i32),

    #[error("The requested genre was not found: {0}")]
    GenreNotFound(String),

    #[error("Could not find any movies for the search: {0}")]
    NoMoviesFound(String),

    #[error("Unsupported {selector} value: {value}")]
    Unsupported {
        selector: &'static str,
        value: String,
    },

    #[error("Movie source unavailable")]
    Source(#[from] anyhow::Error),
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::InvalidNumberOfResults(_) | QueryError::InvalidPageNumber(_) => {
                ErrorKind::InvalidArgument
            }
            QueryError::GenreNotFound(_) | QueryError::NoMoviesFound(_) => ErrorKind::NotFound,
            QueryError::Unsupported { .. } => ErrorKind::Unsupported,
            QueryError::Source(_) => ErrorKind::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            // Selectors arrive as query-string text, so an unknown one is a bad request
            ErrorKind::InvalidArgument | ErrorKind::Unsupported => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            QueryError::Source(e) => tracing::error!("Search failed: {:?}", e),
            _ => tracing::warn!("Search rejected ({}): {}", status, self),
        }
        (status, self.to_string()).into_response()
    }
}
