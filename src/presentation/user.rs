use crate::presentation::recipe::ShortRecipe;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Public profile of a Foodgram user
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct User {
    /// User identifier
    pub id: u64,
    /// Email address (login field)
    #[serde(default)]
    pub email: String,
    /// Unique username
    pub username: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Whether the requesting user follows this one; `false` for anonymous callers
    #[serde(default)]
    pub is_subscribed: bool,
    /// Avatar URL
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Name shown in listings: `first_name last_name`, or the username when both are empty
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Response of the avatar upload endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Avatar {
    /// URL of the stored avatar
    pub avatar: Option<String>,
}

/// Followed author together with a preview of their recipes
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Subscription {
    /// The followed author
    #[serde(flatten)]
    pub user: User,
    /// Latest recipes, capped by `recipes_limit`
    #[serde(default)]
    pub recipes: Vec<ShortRecipe>,
    /// Total number of recipes by this author
    #[serde(default)]
    pub recipes_count: u64,
}
