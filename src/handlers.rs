use axum::{
    Router,
    extract::{Path as AxumPath, RawQuery, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::errors::WikiError;
use crate::services::ensure_safe_id;
use crate::types::AppState;
use crate::utils::{is_edit_request, normalize_path};

/// Document served for `/`.
pub const INDEX_DOCUMENT: &str = "index";

/// Build the wiki router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/*path", get(handle_path))
        .with_state(state)
}

/// Handle root path requests
pub async fn handle_root(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, WikiError> {
    serve_document(&state, INDEX_DOCUMENT, query.as_deref()).await
}

/// Handle path requests
pub async fn handle_path(
    State(state): State<AppState>,
    AxumPath(path): AxumPath<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, WikiError> {
    log::info!("Path request received: '{}'", path);

    let id = normalize_path(&path);
    let id = if id.is_empty() { INDEX_DOCUMENT.to_string() } else { id };
    if let Err(e) = ensure_safe_id(&id) {
        log::warn!("Invalid url '{}'", path);
        return Err(e);
    }

    serve_document(&state, &id, query.as_deref()).await
}

async fn serve_document(
    state: &AppState,
    id: &str,
    query: Option<&str>,
) -> Result<Response, WikiError> {
    if is_edit_request(query) {
        log::info!("Going into edit mode for '{}'", id);
        return Ok(Html("Editing document ...").into_response());
    }

    let page = state.cache.fetch(id).await?;
    match page.into_html() {
        Some(html) => Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response()),
        None => Err(WikiError::NotFound(id.to_string())),
    }
}
