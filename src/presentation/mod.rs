/// Ingredient and tag catalog models
pub mod catalog;
/// Paginated list envelope
pub mod page;
/// Recipe models
pub mod recipe;
/// User, avatar and subscription models
pub mod user;

pub use catalog::*;
pub use page::*;
pub use recipe::*;
pub use user::*;
