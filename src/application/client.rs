/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Client for the Foodgram API
//!
//! [`Client`] implements every endpoint method through the
//! [`AccountService`], [`RecipeService`] and [`UserService`] interfaces.
//! Each method is one request normalized by
//! [`check_response`](crate::model::http::check_response); sign-in also
//! applies its timeout and unwraps field errors, sign-out forgets the
//! token, and the shopping list download goes through a [`DownloadSink`].
//!
//! # Example
//! ```ignore
//! use foodgram_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.signin("cook@example.com", "secret").await?;
//! let favorites = client
//!     .get_recipes(&RecipeQuery::new().with_is_favorited(1))
//!     .await?;
//! ```

use crate::application::auth::{AuthMode, Session};
use crate::application::config::Config;
use crate::application::interfaces::{AccountService, RecipeService, UserService};
use crate::constants::SHOPPING_LIST_FILE_NAME;
use crate::error::AppError;
use crate::model::auth::{AuthToken, SignInRequest, signin_field_message};
use crate::model::http::HttpClient;
use crate::model::requests::{
    AvatarRequest, ChangePasswordRequest, NewRecipe, RecipeForm, RecipeQuery, ResetPasswordRequest,
    SignUpRequest, SubscriptionsQuery, UsersQuery,
};
use crate::model::responses::{ApiResponse, RecipeEntryResponse, RecipeWriteResponse};
use crate::presentation::catalog::{Ingredient, Tag};
use crate::presentation::page::Page;
use crate::presentation::recipe::{Recipe, RecipeLink};
use crate::presentation::user::{Avatar, Subscription, User};
use crate::storage::download::{DownloadSink, FileDownloadSink};
use crate::storage::token::TokenStore;
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info, warn};

static SHARED: OnceCell<Client> = OnceCell::new();

/// Foodgram API client
///
/// Cheap to clone; clones share the transport, session and download sink.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
    download_sink: Arc<dyn DownloadSink>,
}

impl Client {
    /// Creates a client from `config`
    ///
    /// The token is kept in the file named by `storage.token_path`, or in
    /// memory when unset. Downloads are written into `storage.download_dir`.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let session = Session::from_config(&config);
        Self::with_session(config, session)
    }

    /// Creates a client using an explicit session
    pub fn with_session(config: Config, session: Session) -> Result<Self, AppError> {
        let download_sink = Arc::new(FileDownloadSink::new(config.storage.download_dir.clone()));
        let http_client = Arc::new(HttpClient::new(Arc::new(config), session)?);
        Ok(Self {
            http_client,
            download_sink,
        })
    }

    /// Creates a client whose token lives in `store`
    pub fn with_token_store(config: Config, store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        Self::with_session(config, Session::new(store))
    }

    /// Replaces the destination of downloaded files
    #[must_use]
    pub fn with_download_sink(mut self, sink: Arc<dyn DownloadSink>) -> Self {
        self.download_sink = sink;
        self
    }

    /// Process-wide client built from the environment on first use
    pub fn shared() -> Result<&'static Client, AppError> {
        SHARED.get_or_try_init(|| Client::new(Config::new()))
    }

    /// Session holding the token
    #[must_use]
    pub fn session(&self) -> &Session {
        self.http_client.session()
    }

    /// Configuration of this client
    #[must_use]
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Underlying transport
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("http_client", &self.http_client)
            .finish()
    }
}

/// Turns a sign-in rejection carrying an `email` or `password` field error into its message
fn translate_signin_error(err: AppError) -> AppError {
    match &err {
        AppError::Api { body, .. } => match signin_field_message(body) {
            Some(message) => AppError::Validation(message),
            None => err,
        },
        _ => err,
    }
}

#[async_trait]
impl AccountService for Client {
    async fn signin(&self, email: &str, password: &str) -> Result<AuthToken, AppError> {
        info!("Sending signin request for {}", email);
        let body = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let timeout = self.config().rest_api.signin_timeout();

        let exchange = self.http_client.request(
            Method::POST,
            "/api/auth/token/login/",
            AuthMode::Anonymous,
            &[],
            Some(&body),
        );
        let response = match tokio::time::timeout(timeout, exchange).await {
            Ok(result) => result.map_err(translate_signin_error)?,
            Err(_) => {
                warn!("Signin cancelled after {:?}", timeout);
                return Err(AppError::Timeout);
            }
        };

        let token: AuthToken = match response {
            ApiResponse::Opaque { status, .. } => {
                warn!("Signin answered {} without a JSON body", status);
                AuthToken::default()
            }
            json => json.into_json()?,
        };
        match &token.auth_token {
            Some(value) => {
                self.session().set_token(value).await?;
                info!("Signin successful");
            }
            None => warn!("Signin response carried no auth_token"),
        }
        Ok(token)
    }

    async fn signout(&self) -> Result<(), AppError> {
        info!("Signing out");
        self.http_client
            .execute(
                Method::POST,
                "/api/auth/token/logout/",
                AuthMode::Required,
                None::<&()>,
            )
            .await?;
        self.session().clear_token().await?;
        info!("Signed out, token cleared");
        Ok(())
    }

    async fn signup(&self, request: &SignUpRequest) -> Result<User, AppError> {
        info!("Registering {}", request.email);
        let user: User = self
            .http_client
            .fetch(
                Method::POST,
                "/api/users/",
                AuthMode::Anonymous,
                &[],
                Some(request),
            )
            .await?;
        debug!("Registered user {}", user.id);
        Ok(user)
    }

    async fn get_user_data(&self) -> Result<User, AppError> {
        self.http_client
            .get("/api/users/me/", AuthMode::Required)
            .await
    }

    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        info!("Changing password");
        let body = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.http_client
            .execute(
                Method::POST,
                "/api/users/set_password/",
                AuthMode::Required,
                Some(&body),
            )
            .await
    }

    async fn change_avatar(&self, file: &str) -> Result<Avatar, AppError> {
        let body = AvatarRequest {
            avatar: file.to_string(),
        };
        self.http_client
            .fetch(
                Method::PUT,
                "/api/users/me/avatar/",
                AuthMode::Required,
                &[],
                Some(&body),
            )
            .await
    }

    async fn delete_avatar(&self) -> Result<(), AppError> {
        self.http_client
            .execute(
                Method::DELETE,
                "/api/users/me/avatar/",
                AuthMode::Required,
                None::<&()>,
            )
            .await
    }

    async fn reset_password(&self, email: &str) -> Result<(), AppError> {
        info!("Requesting password reset for {}", email);
        let body = ResetPasswordRequest {
            email: email.to_string(),
        };
        self.http_client
            .execute(
                Method::POST,
                "/api/users/reset_password/",
                AuthMode::Anonymous,
                Some(&body),
            )
            .await
    }
}

#[async_trait]
impl RecipeService for Client {
    async fn get_recipes(&self, query: &RecipeQuery) -> Result<Page<Recipe>, AppError> {
        debug!("Getting recipes page {}", query.page);
        let page: Page<Recipe> = self
            .http_client
            .fetch(
                Method::GET,
                "/api/recipes/",
                AuthMode::Optional,
                &query.query_pairs(),
                None::<&()>,
            )
            .await?;
        debug!("Recipes obtained: {} of {}", page.len(), page.count);
        Ok(page)
    }

    async fn get_recipe(&self, recipe_id: u64) -> Result<Recipe, AppError> {
        let path = format!("/api/recipes/{recipe_id}/");
        self.http_client.get(&path, AuthMode::Optional).await
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<RecipeWriteResponse, AppError> {
        info!("Creating recipe {}", recipe.name);
        self.http_client
            .fetch(
                Method::POST,
                "/api/recipes/",
                AuthMode::Required,
                &[],
                Some(recipe),
            )
            .await
    }

    async fn update_recipe(
        &self,
        form: &RecipeForm,
        image_updated: bool,
    ) -> Result<RecipeWriteResponse, AppError> {
        info!("Updating recipe {}", form.recipe_id);
        let path = format!("/api/recipes/{}/", form.recipe_id);
        let body = form.to_update_body(image_updated);
        self.http_client
            .fetch(Method::PATCH, &path, AuthMode::Required, &[], Some(&body))
            .await
    }

    async fn delete_recipe(&self, recipe_id: u64) -> Result<(), AppError> {
        info!("Deleting recipe {}", recipe_id);
        let path = format!("/api/recipes/{recipe_id}/");
        self.http_client
            .execute(Method::DELETE, &path, AuthMode::Required, None::<&()>)
            .await
    }

    async fn add_to_favorites(&self, recipe_id: u64) -> Result<RecipeEntryResponse, AppError> {
        let path = format!("/api/recipes/{recipe_id}/favorite/");
        self.http_client
            .fetch(Method::POST, &path, AuthMode::Required, &[], None::<&()>)
            .await
    }

    async fn remove_from_favorites(&self, recipe_id: u64) -> Result<(), AppError> {
        let path = format!("/api/recipes/{recipe_id}/favorite/");
        self.http_client
            .execute(Method::DELETE, &path, AuthMode::Required, None::<&()>)
            .await
    }

    async fn add_to_orders(&self, recipe_id: u64) -> Result<RecipeEntryResponse, AppError> {
        let path = format!("/api/recipes/{recipe_id}/shopping_cart/");
        self.http_client
            .fetch(Method::POST, &path, AuthMode::Required, &[], None::<&()>)
            .await
    }

    async fn remove_from_orders(&self, recipe_id: u64) -> Result<(), AppError> {
        let path = format!("/api/recipes/{recipe_id}/shopping_cart/");
        self.http_client
            .execute(Method::DELETE, &path, AuthMode::Required, None::<&()>)
            .await
    }

    async fn copy_recipe_link(&self, recipe_id: u64) -> Result<RecipeLink, AppError> {
        let path = format!("/api/recipes/{recipe_id}/get-link/");
        self.http_client.get(&path, AuthMode::Anonymous).await
    }

    async fn download_shopping_cart(&self) -> Result<(), AppError> {
        info!("Downloading shopping list");
        self.http_client
            .download(
                "/api/recipes/download_shopping_cart/",
                AuthMode::Required,
                self.download_sink.as_ref(),
                SHOPPING_LIST_FILE_NAME,
            )
            .await
    }

    async fn get_ingredients(&self, name: &str) -> Result<Vec<Ingredient>, AppError> {
        let ingredients: Vec<Ingredient> = self
            .http_client
            .fetch(
                Method::GET,
                "/api/ingredients/",
                AuthMode::Anonymous,
                &[("name", name.to_string())],
                None::<&()>,
            )
            .await?;
        debug!("Ingredients matching '{}': {}", name, ingredients.len());
        Ok(ingredients)
    }

    async fn get_tags(&self) -> Result<Vec<Tag>, AppError> {
        self.http_client.get("/api/tags/", AuthMode::Anonymous).await
    }
}

#[async_trait]
impl UserService for Client {
    async fn get_user(&self, user_id: u64) -> Result<User, AppError> {
        let path = format!("/api/users/{user_id}/");
        self.http_client.get(&path, AuthMode::Optional).await
    }

    async fn get_users(&self, query: &UsersQuery) -> Result<Page<User>, AppError> {
        self.http_client
            .fetch(
                Method::GET,
                "/api/users/",
                AuthMode::Required,
                &query.query_pairs(),
                None::<&()>,
            )
            .await
    }

    async fn get_subscriptions(
        &self,
        query: &SubscriptionsQuery,
    ) -> Result<Page<Subscription>, AppError> {
        debug!("Getting subscriptions page {}", query.page);
        self.http_client
            .fetch(
                Method::GET,
                "/api/users/subscriptions/",
                AuthMode::Required,
                &query.query_pairs(),
                None::<&()>,
            )
            .await
    }

    async fn subscribe(&self, author_id: u64) -> Result<Subscription, AppError> {
        info!("Subscribing to author {}", author_id);
        let path = format!("/api/users/{author_id}/subscribe/");
        self.http_client
            .fetch(Method::POST, &path, AuthMode::Required, &[], None::<&()>)
            .await
    }

    async fn delete_subscriptions(&self, author_id: u64) -> Result<(), AppError> {
        info!("Unsubscribing from author {}", author_id);
        let path = format!("/api/users/{author_id}/subscribe/");
        self.http_client
            .execute(Method::DELETE, &path, AuthMode::Required, None::<&()>)
            .await
    }
}
