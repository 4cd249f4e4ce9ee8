mod commands;
mod load_dotenv;

pub use commands::{run_command, CommandError, CommandOutput};
pub use load_dotenv::load_dotenv;

pub mod base_path;

use std::env;

/// Value of an environment variable, or `default` if unset or not unicode.
pub fn env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

/// Boolean environment switch. Accepts the usual spellings; anything
/// unrecognised falls back to `default`.
pub fn env_flag(var: &str, default: bool) -> bool {
    match env::var(var).map(|v| v.trim().to_ascii_lowercase()) {
        Ok(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Ok(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        Ok(v) => {
            log::warn!("Ignoring unrecognised value '{v}' for {var}");
            default
        }
        Err(_) => default,
    }
}
