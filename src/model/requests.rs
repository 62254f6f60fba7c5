/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_RECIPES_LIMIT};
use crate::model::utils::coerce_number;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query pairs appended to a request URL, in order
pub type QueryPairs = Vec<(&'static str, String)>;

/// Filters for the recipe listing
///
/// Defaults to the first page of six recipes with no filters. `author` is
/// only sent when set, the two flags only when non-zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeQuery {
    /// Page number, starting at 1
    pub page: u32,
    /// Recipes per page
    pub limit: u32,
    /// Only recipes by this author
    pub author: Option<u64>,
    /// `1` to only list the caller's favorites
    pub is_favorited: u8,
    /// `1` to only list recipes in the caller's shopping cart
    pub is_in_shopping_cart: u8,
}

impl Default for RecipeQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            author: None,
            is_favorited: 0,
            is_in_shopping_cart: 0,
        }
    }
}

impl RecipeQuery {
    /// Creates the default query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Filter by author
    #[must_use]
    pub fn with_author(mut self, author: u64) -> Self {
        self.author = Some(author);
        self
    }

    /// Set the favorites filter
    #[must_use]
    pub fn with_is_favorited(mut self, is_favorited: u8) -> Self {
        self.is_favorited = is_favorited;
        self
    }

    /// Set the shopping cart filter
    #[must_use]
    pub fn with_is_in_shopping_cart(mut self, is_in_shopping_cart: u8) -> Self {
        self.is_in_shopping_cart = is_in_shopping_cart;
        self
    }

    /// Query pairs sent to the listing endpoint
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(author) = self.author {
            pairs.push(("author", author.to_string()));
        }
        if self.is_favorited != 0 {
            pairs.push(("is_favorited", self.is_favorited.to_string()));
        }
        if self.is_in_shopping_cart != 0 {
            pairs.push(("is_in_shopping_cart", self.is_in_shopping_cart.to_string()));
        }
        pairs
    }
}

/// Paging for the user listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsersQuery {
    /// Page number, starting at 1
    pub page: u32,
    /// Users per page
    pub limit: u32,
}

impl Default for UsersQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl UsersQuery {
    /// Query pairs sent to the user listing
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        vec![("page", self.page.to_string()), ("limit", self.limit.to_string())]
    }
}

/// Paging for the subscriptions listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionsQuery {
    /// Page number, starting at 1
    pub page: u32,
    /// Authors per page
    pub limit: u32,
    /// Recipes embedded per author
    pub recipes_limit: u32,
}

impl Default for SubscriptionsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            recipes_limit: DEFAULT_RECIPES_LIMIT,
        }
    }
}

impl SubscriptionsQuery {
    /// Creates the query for `page` with default limits
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Query pairs sent to the subscriptions listing
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("recipes_limit", self.recipes_limit.to_string()),
        ]
    }
}

/// Registration form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SignUpRequest {
    /// Email, also the login
    pub email: String,
    /// Password
    pub password: String,
    /// Unique username
    pub username: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
}

/// Password change form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    /// Current password
    pub current_password: String,
    /// Replacement password
    pub new_password: String,
}

/// Avatar upload, the image encoded as a base64 data URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvatarRequest {
    /// `data:image/png;base64,...`
    pub avatar: String,
}

/// Password reset request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    /// Account email
    pub email: String,
}

/// Ingredient reference with the amount a recipe uses
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientAmount {
    /// Ingredient identifier
    pub id: u64,
    /// Amount in the ingredient's measurement unit
    pub amount: u32,
}

/// Body for creating a recipe
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NewRecipe {
    /// Recipe title
    pub name: String,
    /// Image as a base64 data URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Cooking time in minutes
    pub cooking_time: u32,
    /// Cooking instructions
    pub text: String,
    /// Ingredient lines
    pub ingredients: Vec<IngredientAmount>,
    /// Tag identifiers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<u64>,
}

/// Recipe edit form as filled in by a user
///
/// `cooking_time` is kept as typed and converted to a number when the
/// update body is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecipeForm {
    /// Recipe being edited
    pub recipe_id: u64,
    /// Recipe title
    pub name: String,
    /// Image as a base64 data URL, or the current image URL when unchanged
    pub image: Option<String>,
    /// Cooking time as entered
    pub cooking_time: String,
    /// Cooking instructions
    pub text: String,
    /// Ingredient lines
    pub ingredients: Vec<IngredientAmount>,
    /// Tag identifiers
    #[serde(default)]
    pub tags: Vec<u64>,
}

/// Serialized body of a recipe update
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipeUpdateBody {
    /// Recipe title
    pub name: String,
    /// Recipe identifier
    pub id: u64,
    /// New image; omitted so the backend keeps the stored one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Cooking time as a JSON number, or `null` when the input was not numeric
    pub cooking_time: Value,
    /// Cooking instructions
    pub text: String,
    /// Ingredient lines
    pub ingredients: Vec<IngredientAmount>,
    /// Tag identifiers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<u64>,
}

impl RecipeForm {
    /// Builds the PATCH body, sending the image only when `image_updated` is set
    #[must_use]
    pub fn to_update_body(&self, image_updated: bool) -> RecipeUpdateBody {
        RecipeUpdateBody {
            name: self.name.clone(),
            id: self.recipe_id,
            image: if image_updated { self.image.clone() } else { None },
            cooking_time: coerce_number(&self.cooking_time),
            text: self.text.clone(),
            ingredients: self.ingredients.clone(),
            tags: self.tags.clone(),
        }
    }
}
