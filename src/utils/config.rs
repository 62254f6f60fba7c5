/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::error;

/// Reads `env_var` and parses it, falling back to `default` when the
/// variable is missing or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is absent or malformed
///
/// # Returns
///
/// The parsed value or `default`
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads `env_var` and parses it, returning `None` when it is missing or malformed
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|val| val.parse::<T>().ok())
}

/// Reads `env_var` as a file-system path, ignoring empty values
pub fn get_env_path(env_var: &str) -> Option<PathBuf> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .map(PathBuf::from)
}
