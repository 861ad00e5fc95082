//! Environment variable credentials.
//!
//! The event gateway token is never passed on the command line; it is read
//! from the environment once at startup and wrapped in a [`SecretString`].

use secrecy::SecretString;

/// Environment variable holding the event gateway bearer token.
pub const AUTH_TOKEN_ENV: &str = "AUTH_TOKEN";

/// Read a token from the environment variable `var`.
///
/// Unset, empty, and non-Unicode values all mean "no token".
pub fn token_from_env(var: &str) -> Option<SecretString> {
    match std::env::var(var) {
        Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val)),
        Ok(_) => None,
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => {
            tracing::warn!(var, "ignoring non-unicode token environment variable");
            None
        }
    }
}
