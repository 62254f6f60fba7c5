use crate::error::AppError;
use crate::model::auth::AuthToken;
use crate::model::requests::SignUpRequest;
use crate::presentation::user::{Avatar, User};
use async_trait::async_trait;

/// Interface for sign-in, sign-up and profile management
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Signs in with email and password
    ///
    /// On success the returned token is also saved in the session. The
    /// request is cancelled after the configured sign-in timeout.
    ///
    /// # Returns
    /// * `Ok(AuthToken)` - the login response
    /// * `Err(AppError::Timeout)` - the request did not settle in time
    /// * `Err(AppError::Validation)` - the backend rejected the `email` or `password` field
    async fn signin(&self, email: &str, password: &str) -> Result<AuthToken, AppError>;

    /// Invalidates the current token on the server and forgets it locally
    async fn signout(&self) -> Result<(), AppError>;

    /// Registers a new account
    async fn signup(&self, request: &SignUpRequest) -> Result<User, AppError>;

    /// Gets the profile of the signed-in user
    async fn get_user_data(&self) -> Result<User, AppError>;

    /// Changes the password of the signed-in user
    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError>;

    /// Uploads a new avatar given as a base64 data URL
    async fn change_avatar(&self, file: &str) -> Result<Avatar, AppError>;

    /// Removes the avatar of the signed-in user
    async fn delete_avatar(&self) -> Result<(), AppError>;

    /// Requests a password reset email
    async fn reset_password(&self, email: &str) -> Result<(), AppError>;
}
