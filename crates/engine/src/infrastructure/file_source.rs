//! Sheets stored as JSON files on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use crate::infrastructure::ports::{RepoError, SheetSource};

/// Reference that reads the sheet from standard input.
pub const STDIN_REFERENCE: &str = "-";

/// Loads sheets from JSON files.
///
/// Relative references resolve against `root`; absolute ones are used as-is.
/// The reference `-` reads standard input.
pub struct FileSheetSource {
    root: PathBuf,
}

impl FileSheetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    async fn read_stdin() -> Result<String, RepoError> {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .map_err(|e| RepoError::io(STDIN_REFERENCE, e))?;
        Ok(text)
    }
}

#[async_trait]
impl SheetSource for FileSheetSource {
    async fn load(&self, reference: &str) -> Result<serde_json::Value, RepoError> {
        let text = if reference == STDIN_REFERENCE {
            Self::read_stdin().await?
        } else {
            let path = self.resolve(reference);
            tracing::debug!(path = %path.display(), "Reading sheet file");
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => text,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    return Err(RepoError::not_found(path.display()))
                }
                Err(e) => return Err(RepoError::io(path.display(), e)),
            }
        };

        Ok(serde_json::from_str(&text)?)
    }
}
