/// Storage configuration
pub mod config;
/// Destinations for downloaded files
pub mod download;
/// Persistent slot holding the session token
pub mod token;
