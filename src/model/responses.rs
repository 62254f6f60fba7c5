/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::IngredientAmount;
use crate::presentation::recipe::ShortRecipe;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful response after normalization
///
/// A response either carried a JSON body, which has been parsed, or it
/// carried nothing the client understands (204, or a non-JSON success), in
/// which case only the status line and headers are kept.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    /// JSON body, parsed
    Json {
        /// HTTP status
        status: StatusCode,
        /// Parsed body
        body: Value,
    },
    /// Status and headers only; the body was not read
    Opaque {
        /// HTTP status
        status: StatusCode,
        /// Response headers
        headers: HeaderMap,
    },
}

impl ApiResponse {
    /// HTTP status of the response
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiResponse::Json { status, .. } | ApiResponse::Opaque { status, .. } => *status,
        }
    }

    /// Returns true for the JSON variant
    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self, ApiResponse::Json { .. })
    }

    /// Parsed body, if any
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json { body, .. } => Some(body),
            ApiResponse::Opaque { .. } => None,
        }
    }

    /// Maps the JSON body to `T`
    ///
    /// # Returns
    /// * `Ok(T)` - the body deserialized
    /// * `Err(AppError::UnexpectedBody)` - the response had no JSON body
    /// * `Err(AppError::Json)` - the body does not match `T`
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, AppError> {
        match self {
            ApiResponse::Json { body, .. } => Ok(serde_json::from_value(body)?),
            ApiResponse::Opaque { status, .. } => Err(AppError::UnexpectedBody(status)),
        }
    }
}

/// Recipe as echoed back by the create and update endpoints
///
/// The write serializer returns ingredient and tag references rather than
/// the expanded read shape of [`Recipe`](crate::presentation::recipe::Recipe).
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecipeWriteResponse {
    /// Recipe identifier
    pub id: u64,
    /// Recipe title
    pub name: String,
    /// Stored image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Cooking instructions
    #[serde(default)]
    pub text: String,
    /// Ingredient lines as `{id, amount}`
    #[serde(default)]
    pub ingredients: Vec<IngredientAmount>,
    /// Tag identifiers
    #[serde(default)]
    pub tags: Vec<u64>,
    /// Cooking time in minutes
    pub cooking_time: u32,
}

/// Favorite or shopping-cart entry returned when a recipe is added
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecipeEntryResponse {
    /// Entry identifier
    pub id: u64,
    /// Owner of the entry
    pub user: u64,
    /// The recipe that was added
    pub recipe: ShortRecipe,
}
