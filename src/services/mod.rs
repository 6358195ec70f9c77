pub mod cache_service;
pub mod file_service;
pub mod renderer;

pub use cache_service::CacheService;
pub use file_service::{FileService, ensure_safe_id};
pub use renderer::{Backend, InProcessRenderer, ProcessRenderer, Render};
