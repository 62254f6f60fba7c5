/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Token persistence
//!
//! The session token lives in a single key-value slot named `"token"`.
//! [`MemoryTokenStore`] keeps it for the lifetime of the process and
//! [`FileTokenStore`] keeps it in a small JSON document on disk so a
//! later process can reuse it.

use crate::constants::TOKEN_KEY;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;

/// Persistent slot for the session token
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, if any
    async fn load(&self) -> Result<Option<String>, AppError>;

    /// Replaces the stored token
    async fn save(&self, token: &str) -> Result<(), AppError>;

    /// Removes the stored token
    async fn clear(&self) -> Result<(), AppError>;
}

/// Token store kept in process memory
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &str) -> Result<(), AppError> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        *self.token.write().await = None;
        Ok(())
    }
}

/// Token store backed by a JSON object on disk
///
/// The document is a flat object; only the `"token"` key is touched and
/// any other keys are preserved on rewrite.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileTokenStore {
    /// Creates a store reading and writing `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Map<String, Value>, AppError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Map::new()),
            Ok(bytes) => match serde_json::from_slice::<Value>(&bytes)? {
                Value::Object(map) => Ok(map),
                other => Err(AppError::InvalidInput(format!(
                    "token file {} does not hold a JSON object: {other}",
                    self.path.display()
                ))),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, document: &Map<String, Value>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>, AppError> {
        let _guard = self.lock.read().await;
        let document = self.read_document().await?;
        Ok(document
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .map(String::from))
    }

    async fn save(&self, token: &str) -> Result<(), AppError> {
        let _guard = self.lock.write().await;
        let mut document = self.read_document().await?;
        document.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_document(&document).await?;
        debug!("Token saved to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        let _guard = self.lock.write().await;
        let mut document = self.read_document().await?;
        if document.remove(TOKEN_KEY).is_some() {
            self.write_document(&document).await?;
            debug!("Token removed from {}", self.path.display());
        }
        Ok(())
    }
}
