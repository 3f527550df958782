use async_trait::async_trait;
use std::path::PathBuf;

use super::ByteSource;
use crate::error::{BicDirError, Result};

/// Local filesystem source for an already-downloaded archive
pub struct LocalFileSource {
    path: PathBuf,
    locator: String,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let locator = path.display().to_string();
        Self { path, locator }
    }
}

#[async_trait]
impl ByteSource for LocalFileSource {
    async fn collect(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| BicDirError::transport(&self.locator, e))
    }

    fn locator(&self) -> &str {
        &self.locator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_file_contents() {
        let path = std::env::temp_dir().join(format!("bicdir-local-{}.bin", std::process::id()));
        std::fs::write(&path, b"archive bytes").unwrap();

        let source = LocalFileSource::new(&path);
        let bytes = source.collect().await.unwrap();
        assert_eq!(bytes, b"archive bytes");

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_a_transport_error() {
        let source = LocalFileSource::new("/nonexistent/bicdir-test.zip");
        let err = source.collect().await.unwrap_err();
        assert!(matches!(err, BicDirError::Transport { .. }));
    }
}
