/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
/// Sign-in models and field-error extraction
pub mod auth;
/// HTTP client, request plumbing and response normalization
pub mod http;
/// Request bodies and query builders
pub mod requests;
/// Normalized response type
pub mod responses;
/// Value coercion helpers
pub mod utils;
