/// Session and token handling
pub mod auth;
/// Foodgram client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces grouping the endpoint methods
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
