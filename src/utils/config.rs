/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an environment variable
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// `Ok(None)` if the variable is unset, `Err(raw)` with the raw value if it
/// does not parse, `Ok(Some(value))` otherwise
fn read_env<T: FromStr>(env_var: &str) -> Result<Option<T>, String> {
    match env::var(env_var) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| raw),
        Err(_) => Ok(None),
    }
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value used when the variable is unset or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_env(env_var) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(raw) => {
            warn!("Failed to parse {}: {}, using default", env_var, raw);
            default
        }
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    read_env(env_var).ok().flatten()
}
