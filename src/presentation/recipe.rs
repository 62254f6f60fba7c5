use crate::presentation::catalog::Tag;
use crate::presentation::user::User;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Recipe author as serialized by the backend
///
/// Full profiles are returned by the standard serializer; some backend
/// builds only send the author's string representation.
#[derive(Debug, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Author {
    /// Full public profile
    Profile(User),
    /// String representation only
    Name(String),
}

impl Default for Author {
    fn default() -> Self {
        Author::Name(String::new())
    }
}

impl Author {
    /// Identifier of the author, when the full profile is available
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        match self {
            Author::Profile(user) => Some(user.id),
            Author::Name(_) => None,
        }
    }
}

/// Ingredient line of a recipe
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecipeIngredient {
    /// Ingredient identifier
    pub id: u64,
    /// Ingredient name
    #[serde(default)]
    pub name: String,
    /// Unit the amount is expressed in
    #[serde(default)]
    pub measurement_unit: String,
    /// Amount used by the recipe
    pub amount: u32,
}

/// Full recipe
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Recipe {
    /// Recipe identifier
    pub id: u64,
    /// Recipe author
    #[serde(default)]
    pub author: Author,
    /// Recipe title
    pub name: String,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Cooking instructions
    #[serde(default)]
    pub text: String,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    /// Tags attached to the recipe
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Cooking time in minutes
    #[serde(default)]
    pub cooking_time: u32,
    /// Publication timestamp
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,
    /// Whether the requesting user favorited the recipe
    #[serde(default)]
    pub is_favorited: bool,
    /// Whether the recipe is in the requesting user's shopping cart
    #[serde(default)]
    pub is_in_shopping_cart: bool,
}

/// Compact recipe returned by favorite, cart and subscription endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShortRecipe {
    /// Recipe identifier
    pub id: u64,
    /// Recipe title
    pub name: String,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Cooking time in minutes
    #[serde(default)]
    pub cooking_time: u32,
}

impl From<&Recipe> for ShortRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            image: recipe.image.clone(),
            cooking_time: recipe.cooking_time,
        }
    }
}

/// Short shareable link to a recipe
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecipeLink {
    /// The short link
    #[serde(rename = "short-link")]
    pub short_link: String,
}
