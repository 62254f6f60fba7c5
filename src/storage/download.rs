/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Destinations for files returned by the API
//!
//! A download hands its bytes to a [`DownloadSink`] exactly once. The
//! default [`FileDownloadSink`] writes them under a directory; tests use
//! [`MemoryDownloadSink`] to inspect what was delivered.

use crate::error::AppError;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::info;

/// Receives downloaded files
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Stores `bytes` under `file_name`
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<(), AppError>;
}

/// Sink writing each file into a directory
#[derive(Debug, Clone)]
pub struct FileDownloadSink {
    dir: PathBuf,
}

impl FileDownloadSink {
    /// Creates a sink writing into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path a file named `file_name` is written to
    #[must_use]
    pub fn target(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

#[async_trait]
impl DownloadSink for FileDownloadSink {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<(), AppError> {
        if !self.dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(&self.dir).await?;
        }
        let target = self.target(file_name);
        tokio::fs::write(&target, bytes).await?;
        info!("Saved {} bytes to {}", bytes.len(), target.display());
        Ok(())
    }
}

/// A file delivered to a [`MemoryDownloadSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    /// Name the file was saved under
    pub file_name: String,
    /// File contents
    pub bytes: Vec<u8>,
}

/// Sink keeping every delivered file in memory
#[derive(Debug, Default)]
pub struct MemoryDownloadSink {
    files: Mutex<Vec<DownloadedFile>>,
}

impl MemoryDownloadSink {
    /// Creates an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the files delivered so far, in order
    pub async fn files(&self) -> Vec<DownloadedFile> {
        self.files.lock().await.clone()
    }
}

#[async_trait]
impl DownloadSink for MemoryDownloadSink {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<(), AppError> {
        self.files.lock().await.push(DownloadedFile {
            file_name: file_name.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}
