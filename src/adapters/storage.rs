use crate::core::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// 從本機 JSON 檔讀取目錄
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for LocalFileSource {
    async fn read_all(&self) -> Result<Vec<u8>> {
        match tokio::fs::read(&self.path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CatalogError::SourceNotFound {
                path: self.path.display().to_string(),
            }),
            Err(e) => Err(CatalogError::IoError(e)),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_read_existing_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[]").unwrap();

        let source = LocalFileSource::new(temp_file.path());
        assert_eq!(source.read_all().await.unwrap(), b"[]");
    }

    #[tokio::test]
    async fn test_missing_file_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalFileSource::new(dir.path().join("data_items.json"));

        let err = source.read_all().await.unwrap_err();
        assert!(matches!(err, CatalogError::SourceNotFound { .. }));
        assert!(source.describe().ends_with("data_items.json"));
    }
}
