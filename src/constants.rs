/// Default number of items per page for recipe and user listings
pub const DEFAULT_PAGE_SIZE: u32 = 6;
/// Default number of recipes embedded in each subscription entry
pub const DEFAULT_RECIPES_LIMIT: u32 = 3;
/// Default timeout in seconds for the sign-in request
pub const DEFAULT_SIGNIN_TIMEOUT_SECS: u64 = 10;
/// File name given to the downloaded shopping list
pub const SHOPPING_LIST_FILE_NAME: &str = "shopping-list";
/// Key of the persisted token slot
pub const TOKEN_KEY: &str = "token";
/// Scheme prefix of the authorization header value
pub const TOKEN_SCHEME: &str = "Token";
/// Content type sent with every request
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// User agent string used in HTTP requests to identify this client to the Foodgram API
pub const USER_AGENT: &str = "foodgram-client/0.1.0";
