use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use log::debug;
use tokio::fs;

use crate::config::{CACHE_EXTENSION, SOURCE_EXTENSION};
use crate::errors::WikiError;

/// Reject identifiers that could escape the data or cache roots.
pub fn ensure_safe_id(id: &str) -> Result<(), WikiError> {
    if id.is_empty() {
        return Err(WikiError::InvalidPath);
    }
    for comp in Path::new(id).components() {
        match comp {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(WikiError::InvalidPath);
            }
        }
    }
    Ok(())
}

/// Maps document identifiers onto the `data/` and `cached/` trees.
#[derive(Debug, Clone)]
pub struct FileService {
    data_dir: PathBuf,
    cache_dir: PathBuf,
}

impl FileService {
    pub fn new(data_dir: PathBuf, cache_dir: PathBuf) -> Self {
        debug!("Creating FileService with data {:?} and cache {:?}", data_dir, cache_dir);
        Self { data_dir, cache_dir }
    }

    /// `data/<id>.txt`
    pub fn source_path(&self, id: &str) -> PathBuf {
        self.data_dir.join(format!("{id}.{SOURCE_EXTENSION}"))
    }

    /// `cached/<id>.html`
    pub fn cache_path(&self, id: &str) -> PathBuf {
        self.cache_dir.join(format!("{id}.{CACHE_EXTENSION}"))
    }

    /// Modification time of a regular file, `None` when it does not exist.
    pub async fn modified(&self, path: &Path) -> Result<Option<SystemTime>, WikiError> {
        match fs::metadata(path).await {
            Ok(meta) if meta.is_file() => Ok(Some(meta.modified()?)),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WikiError::Io(e)),
        }
    }

    pub async fn read(&self, path: &Path) -> Result<Vec<u8>, WikiError> {
        let bytes = fs::read(path).await?;
        debug!("Read {:?}, {} bytes", path, bytes.len());
        Ok(bytes)
    }

    /// Write `bytes` to `path`, creating parent directories as needed.
    pub async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), WikiError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, bytes).await?;
        debug!("Wrote {:?}, {} bytes", path, bytes.len());
        Ok(())
    }

    /// Remove a file. Returns `false` if there was nothing to remove.
    pub async fn remove(&self, path: &Path) -> Result<bool, WikiError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(WikiError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_ids() {
        assert!(ensure_safe_id("Main").is_ok());
        assert!(ensure_safe_id("docs/intro").is_ok());
        assert!(ensure_safe_id("../etc/passwd").is_err());
        assert!(ensure_safe_id("docs/../../secret").is_err());
        assert!(ensure_safe_id("/etc/passwd").is_err());
        assert!(ensure_safe_id("").is_err());
    }

    #[test]
    fn layout_uses_fixed_extensions() {
        let files = FileService::new(PathBuf::from("data"), PathBuf::from("cached"));
        assert_eq!(files.source_path("docs/intro"), PathBuf::from("data/docs/intro.txt"));
        assert_eq!(files.cache_path("docs/intro"), PathBuf::from("cached/docs/intro.html"));
    }

    #[tokio::test]
    async fn missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = FileService::new(dir.path().join("data"), dir.path().join("cached"));
        let path = files.cache_path("nothing");
        assert_eq!(files.modified(&path).await.unwrap(), None);
        assert!(!files.remove(&path).await.unwrap());
    }

    #[tokio::test]
    async fn write_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let files = FileService::new(dir.path().join("data"), dir.path().join("cached"));
        let path = files.cache_path("deep/nested/page");
        files.write(&path, b"<h1>x</h1>").await.unwrap();
        assert!(files.modified(&path).await.unwrap().is_some());
        assert_eq!(files.read(&path).await.unwrap(), b"<h1>x</h1>");
        assert!(files.remove(&path).await.unwrap());
    }
}
