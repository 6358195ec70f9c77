use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::config::RendererKind;
use crate::errors::WikiError;
use crate::render::render_document;

/// Turns a source document on disk into HTML.
///
/// Failures come back as `Err`, never as HTML, so callers can keep error text
/// out of the cache.
pub trait Render: Send + Sync {
    fn render(&self, source: &Path) -> impl Future<Output = Result<Vec<u8>, WikiError>> + Send;
}

/// Renders inside the current process.
#[derive(Debug, Clone, Default)]
pub struct InProcessRenderer;

impl Render for InProcessRenderer {
    async fn render(&self, source: &Path) -> Result<Vec<u8>, WikiError> {
        let bytes = tokio::fs::read(source)
            .await
            .map_err(|e| WikiError::Render(format!("{}: {}", source.display(), e)))?;
        Ok(render_document(&String::from_utf8_lossy(&bytes)).into_bytes())
    }
}

/// Runs `<program> <source>` and takes its standard output.
#[derive(Debug, Clone)]
pub struct ProcessRenderer {
    program: PathBuf,
}

impl ProcessRenderer {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }
}

impl Render for ProcessRenderer {
    async fn render(&self, source: &Path) -> Result<Vec<u8>, WikiError> {
        let output = Command::new(&self.program)
            .arg(source)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| WikiError::Render(format!("{}: {}", self.program.display(), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("{} exited with {}", self.program.display(), output.status),
                text => text.to_string(),
            };
            return Err(WikiError::Render(reason));
        }
        Ok(output.stdout)
    }
}

/// Renderer selected by configuration.
#[derive(Debug, Clone)]
pub enum Backend {
    InProcess(InProcessRenderer),
    Process(ProcessRenderer),
}

impl From<RendererKind> for Backend {
    fn from(kind: RendererKind) -> Self {
        match kind {
            RendererKind::InProcess => Backend::InProcess(InProcessRenderer),
            RendererKind::Process(program) => Backend::Process(ProcessRenderer::new(program)),
        }
    }
}

impl Render for Backend {
    async fn render(&self, source: &Path) -> Result<Vec<u8>, WikiError> {
        match self {
            Backend::InProcess(renderer) => renderer.render(source).await,
            Backend::Process(renderer) => renderer.render(source).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_process_renders_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("page.txt");
        std::fs::write(&source, "== Hi ==\n[[a|b]]").unwrap();
        let html = InProcessRenderer.render(&source).await.unwrap();
        assert_eq!(html, b"<h2> Hi </h2><a href=\"b\">a</a>");
    }

    #[tokio::test]
    async fn in_process_missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InProcessRenderer.render(&dir.path().join("nope.txt")).await.unwrap_err();
        assert!(matches!(err, WikiError::Render(_)));
    }

    #[tokio::test]
    async fn missing_program_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Backend::from(RendererKind::Process(dir.path().join("no-such-renderer")));
        let err = renderer.render(&dir.path().join("page.txt")).await.unwrap_err();
        assert!(matches!(err, WikiError::Render(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn process_output_and_failure_are_distinct() {
        let renderer = ProcessRenderer::new(PathBuf::from("cat"));
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("page.txt");
        std::fs::write(&source, "<p>raw</p>").unwrap();
        assert_eq!(renderer.render(&source).await.unwrap(), b"<p>raw</p>");

        let err = renderer.render(&dir.path().join("absent.txt")).await.unwrap_err();
        match err {
            WikiError::Render(reason) => assert!(reason.contains("absent.txt")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
