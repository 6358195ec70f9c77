use std::io;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::utils::escape_html;

/// Custom error types for the wiki application
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("invalid path")]
    InvalidPath,
    #[error("render error: {0}")]
    Render(String),
    #[error("configuration error: {0}")]
    Config(String),
}

/// Body served when a document has no source text.
pub fn not_found_page(id: &str) -> String {
    format!(
        "Document was not found - <a href=\"/{}?edit\">create</a>",
        escape_html(id)
    )
}

fn html(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response()
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        match self {
            WikiError::NotFound(id) => html(StatusCode::NOT_FOUND, not_found_page(&id)),
            WikiError::InvalidPath => StatusCode::BAD_REQUEST.into_response(),
            WikiError::Render(e) => html(
                StatusCode::BAD_GATEWAY,
                format!("<p>Render error: {}</p>", escape_html(&e)),
            ),
            WikiError::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("I/O error: {}", e),
            )
                .into_response(),
            WikiError::Config(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {}", e),
            )
                .into_response(),
        }
    }
}
