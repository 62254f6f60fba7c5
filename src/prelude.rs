/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/25
******************************************************************************/

//! # Foodgram Client Prelude
//!
//! Imports the types and traits needed for most interactions with the
//! Foodgram API.
//!
//! ## Usage
//!
//! ```rust
//! use foodgram_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8000");
//! let client = Client::new(config).unwrap();
//! let query = RecipeQuery::new().with_is_favorited(1);
//! assert_eq!(query.page, 1);
//! # let _ = client;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Foodgram API client
pub use crate::application::config::{Config, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, FoodgramResult};

// ============================================================================
// CLIENT, SESSION AND SERVICES
// ============================================================================

/// Foodgram client
pub use crate::application::client::Client;

/// Session and per-endpoint authentication mode
pub use crate::application::auth::{AuthMode, Session};

/// Service interfaces implemented by the client
pub use crate::application::interfaces::{AccountService, RecipeService, UserService};

/// HTTP transport and response normalization
pub use crate::model::http::{HttpClient, check_file_download_response, check_response};

/// Normalized response
pub use crate::model::responses::{ApiResponse, RecipeEntryResponse, RecipeWriteResponse};

// ============================================================================
// REQUEST MODELS
// ============================================================================

/// Sign-in models
pub use crate::model::auth::{AuthToken, SignInRequest};

/// Request bodies and query builders
pub use crate::model::requests::{
    AvatarRequest, ChangePasswordRequest, IngredientAmount, NewRecipe, RecipeForm, RecipeQuery,
    ResetPasswordRequest, SignUpRequest, SubscriptionsQuery, UsersQuery,
};

// ============================================================================
// DOMAIN MODELS
// ============================================================================

/// Entities returned by the API
pub use crate::presentation::{
    Author, Avatar, Ingredient, Page, Recipe, RecipeIngredient, RecipeLink, ShortRecipe,
    Subscription, Tag, User,
};

// ============================================================================
// STORAGE
// ============================================================================

/// Storage configuration
pub use crate::storage::config::StorageConfig;

/// Download destinations
pub use crate::storage::download::{
    DownloadSink, DownloadedFile, FileDownloadSink, MemoryDownloadSink,
};

/// Token stores
pub use crate::storage::token::{FileTokenStore, MemoryTokenStore, TokenStore};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types used in the public API
pub use reqwest::{Method, StatusCode};
