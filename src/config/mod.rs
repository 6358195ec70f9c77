use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::errors::WikiError;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_CACHE_DIR: &str = "cached";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 12345;

/// Extension of source documents under the data directory.
pub const SOURCE_EXTENSION: &str = "txt";
/// Extension of rendered documents under the cache directory.
pub const CACHE_EXTENSION: &str = "html";

/// How source documents are turned into HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererKind {
    /// Render inside the server process.
    InProcess,
    /// Run an external program with the source path as its only argument.
    Process(PathBuf),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub renderer: RendererKind,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            renderer: RendererKind::InProcess,
        }
    }

    /// Defaults overlaid with `PLAINWIKI_*` environment variables.
    pub fn from_env() -> Result<Self, WikiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WikiError> {
        let mut config = Self::new();
        if let Some(dir) = lookup("PLAINWIKI_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("PLAINWIKI_CACHE_DIR") {
            config.cache_dir = PathBuf::from(dir);
        }
        if let Some(host) = lookup("PLAINWIKI_HOST") {
            host.parse::<IpAddr>()
                .map_err(|e| WikiError::Config(format!("PLAINWIKI_HOST '{}': {}", host, e)))?;
            config.host = host;
        }
        if let Some(port) = lookup("PLAINWIKI_PORT") {
            config.port = port
                .parse()
                .map_err(|e| WikiError::Config(format!("PLAINWIKI_PORT '{}': {}", port, e)))?;
        }
        if let Some(program) = lookup("PLAINWIKI_RENDERER").filter(|p| !p.is_empty()) {
            config.renderer = RendererKind::Process(PathBuf::from(program));
        }
        Ok(config)
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> Result<SocketAddr, WikiError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| WikiError::Config(format!("host '{}': {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
