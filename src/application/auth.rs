/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Session handling for the Foodgram API
//!
//! The session is the single owner of the authentication token. It reads
//! the token from its [`TokenStore`] every time a request is built, so a
//! token written by one call is visible to the next one, and it exposes
//! explicit `set_token` / `clear_token` operations for sign-in and sign-out.

use crate::application::config::Config;
use crate::constants::TOKEN_SCHEME;
use crate::error::AppError;
use crate::storage::token::{FileTokenStore, MemoryTokenStore, TokenStore};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// How an endpoint treats the authorization header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Never sends the header
    Anonymous,
    /// Sends the header when a token is stored; anonymous access is expected
    Optional,
    /// Sends the header when a token is stored; the server rejects anonymous callers
    Required,
}

/// Authentication context shared by every request of a client
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Creates a session over `store`
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Creates a session whose token only lives in memory
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Creates the session described by `config`: file-backed when a token path is set
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        match &config.storage.token_path {
            Some(path) => {
                debug!("Using token file {}", path.display());
                Self::new(Arc::new(FileTokenStore::new(path)))
            }
            None => Self::in_memory(),
        }
    }

    /// Current token, read from the store
    pub async fn token(&self) -> Result<Option<String>, AppError> {
        self.store.load().await
    }

    /// Stores `token` as the current token
    pub async fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.store.save(token).await
    }

    /// Forgets the current token
    pub async fn clear_token(&self) -> Result<(), AppError> {
        self.store.clear().await
    }

    /// Checks if a token is currently stored
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.token().await?.is_some())
    }

    /// Value of the authorization header for `mode`, if one should be sent
    ///
    /// # Returns
    /// * `Ok(Some("Token <token>"))` - a token is stored and `mode` allows it
    /// * `Ok(None)` - anonymous endpoint, or no token stored
    pub async fn authorization(&self, mode: AuthMode) -> Result<Option<String>, AppError> {
        if mode == AuthMode::Anonymous {
            return Ok(None);
        }
        Ok(self
            .token()
            .await?
            .map(|token| format!("{TOKEN_SCHEME} {token}")))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("store", &"dyn TokenStore")
            .finish()
    }
}
