/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! # Foodgram Client
//!
//! Rust client for the Foodgram recipe-sharing REST API.
//!
//! The crate wraps one HTTP client behind [`application::client::Client`], which:
//! - injects the `authorization: Token <token>` header when a token is stored
//! - normalizes every response into a typed value or an [`error::AppError`]
//! - persists the sign-in token through a pluggable [`storage::token::TokenStore`]
//! - saves the downloaded shopping list through a [`storage::download::DownloadSink`]
//!
//! ## Example
//! ```ignore
//! use foodgram_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.signin("cook@example.com", "secret").await?;
//! let recipes = client.get_recipes(&RecipeQuery::default()).await?;
//! ```

/// Application layer: client, session, configuration and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by every operation
pub mod error;
/// HTTP plumbing, request and response models
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Domain entities returned by the API
pub mod presentation;
/// Token persistence and download sinks
pub mod storage;
/// Environment and logging helpers
pub mod utils;

/// Crate version, taken from `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
