use crate::error::AppError;
use crate::model::requests::{SubscriptionsQuery, UsersQuery};
use crate::presentation::page::Page;
use crate::presentation::user::{Subscription, User};
use async_trait::async_trait;

/// Interface for user profiles and subscriptions
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets a public profile
    async fn get_user(&self, user_id: u64) -> Result<User, AppError>;

    /// Lists users
    async fn get_users(&self, query: &UsersQuery) -> Result<Page<User>, AppError>;

    /// Lists the authors the caller follows
    async fn get_subscriptions(
        &self,
        query: &SubscriptionsQuery,
    ) -> Result<Page<Subscription>, AppError>;

    /// Follows an author
    async fn subscribe(&self, author_id: u64) -> Result<Subscription, AppError>;

    /// Unfollows an author
    async fn delete_subscriptions(&self, author_id: u64) -> Result<(), AppError>;
}
