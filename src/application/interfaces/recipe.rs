use crate::error::AppError;
use crate::model::requests::{NewRecipe, RecipeForm, RecipeQuery};
use crate::model::responses::{RecipeEntryResponse, RecipeWriteResponse};
use crate::presentation::catalog::{Ingredient, Tag};
use crate::presentation::page::Page;
use crate::presentation::recipe::{Recipe, RecipeLink};
use async_trait::async_trait;

/// Interface for recipes, favorites, the shopping cart and the ingredient catalog
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Lists recipes, optionally filtered by author, favorites or cart
    async fn get_recipes(&self, query: &RecipeQuery) -> Result<Page<Recipe>, AppError>;

    /// Gets one recipe
    async fn get_recipe(&self, recipe_id: u64) -> Result<Recipe, AppError>;

    /// Creates a recipe
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<RecipeWriteResponse, AppError>;

    /// Updates a recipe
    ///
    /// # Arguments
    /// * `form` - the edited recipe
    /// * `image_updated` - send the image; when false the stored image is kept
    async fn update_recipe(
        &self,
        form: &RecipeForm,
        image_updated: bool,
    ) -> Result<RecipeWriteResponse, AppError>;

    /// Deletes a recipe
    async fn delete_recipe(&self, recipe_id: u64) -> Result<(), AppError>;

    /// Adds a recipe to the caller's favorites
    async fn add_to_favorites(&self, recipe_id: u64) -> Result<RecipeEntryResponse, AppError>;

    /// Removes a recipe from the caller's favorites
    async fn remove_from_favorites(&self, recipe_id: u64) -> Result<(), AppError>;

    /// Adds a recipe to the caller's shopping cart
    async fn add_to_orders(&self, recipe_id: u64) -> Result<RecipeEntryResponse, AppError>;

    /// Removes a recipe from the caller's shopping cart
    async fn remove_from_orders(&self, recipe_id: u64) -> Result<(), AppError>;

    /// Gets a short link to a recipe
    async fn copy_recipe_link(&self, recipe_id: u64) -> Result<RecipeLink, AppError>;

    /// Downloads the shopping list and saves it through the client's download sink
    async fn download_shopping_cart(&self) -> Result<(), AppError>;

    /// Searches ingredients by name prefix
    async fn get_ingredients(&self, name: &str) -> Result<Vec<Ingredient>, AppError>;

    /// Lists all tags
    async fn get_tags(&self) -> Result<Vec<Tag>, AppError>;
}
