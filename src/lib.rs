//! Plainwiki - a small wiki server for a line-oriented markup dialect
//!
//! Source documents live under `data/` as `.txt` files and are rendered to
//! HTML on demand; rendered pages are kept under `cached/` and regenerated
//! whenever their source is newer.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod render;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, RendererKind};
pub use errors::WikiError;
pub use handlers::router;
pub use render::{render_document, render_line};
pub use services::{Backend, CacheService, FileService, Render};
pub use types::{AppState, Page};
