use std::sync::Arc;

use crate::services::{Backend, CacheService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CacheService<Backend>>,
}

/// Result of looking a document up through the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Served from a cache entry at least as new as its source.
    Cached(Vec<u8>),
    /// Rendered during this request and written to the cache.
    Rendered(Vec<u8>),
    /// No source document exists.
    Missing,
}

impl Page {
    pub fn into_html(self) -> Option<Vec<u8>> {
        match self {
            Page::Cached(html) | Page::Rendered(html) => Some(html),
            Page::Missing => None,
        }
    }
}
