use std::sync::Arc;

use tokio::net::TcpListener;

use plainwiki::logger::Logger;
use plainwiki::{AppState, Backend, CacheService, Config, FileService, WikiError, router};

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    if let Err(e) = Logger::init() {
        eprintln!("failed to install logger: {e}");
    }

    let config = Config::from_env()?;
    if !config.data_dir.is_dir() {
        log::warn!("Data directory {:?} does not exist", config.data_dir);
    }
    log::info!("Renderer: {:?}", config.renderer);

    let files = FileService::new(config.data_dir.clone(), config.cache_dir.clone());
    let cache = CacheService::new(files, Backend::from(config.renderer.clone()));
    let state = AppState { cache: Arc::new(cache) };

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    log::info!("Wiki listening on http://{}", addr);
    axum::serve(listener, router(state)).await.map_err(WikiError::from)
}
