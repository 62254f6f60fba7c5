/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields whose validation messages are surfaced directly by sign-in, in priority order
pub const SIGNIN_MESSAGE_FIELDS: [&str; 2] = ["email", "password"];

/// Body of the login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Response of the login endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AuthToken {
    /// Issued token; absent when the backend answers without one
    #[serde(default)]
    pub auth_token: Option<String>,
}

/// Renders a field error value the way it is shown to users
///
/// Strings are returned as is, arrays are joined with `,` and any other
/// JSON value is rendered compactly.
#[must_use]
pub fn field_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(field_message)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Extracts the first sign-in field message (`email`, then `password`) from an error body
#[must_use]
pub fn signin_field_message(body: &Value) -> Option<String> {
    let fields = body.as_object()?;
    SIGNIN_MESSAGE_FIELDS
        .iter()
        .find_map(|field| fields.get(*field))
        .map(field_message)
}
