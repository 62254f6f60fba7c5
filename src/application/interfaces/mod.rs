/// Account service interface
pub mod account;
/// Recipe service interface
pub mod recipe;
/// User and subscription service interface
pub mod user;

pub use account::*;
pub use recipe::*;
pub use user::*;
