use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_RAPIDAPI_BASE_URL: &str = "https://fresh-linkedin-profile-data.p.rapidapi.com";
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "cohere/command-r-plus";
pub const DEFAULT_COMPLETION_MAX_TOKENS: u32 = 4000;
pub const DEFAULT_SITE_URL: &str = "http://localhost";
pub const DEFAULT_APP_NAME: &str = "linsight";
pub const DEFAULT_MAX_POSTS: u32 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 120;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: u32| -> Result<u32, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let nonzero = |var: &str, value: u64| -> Result<(), ConfigError> {
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    };

    let profile_api_key = require("RAPIDAPI_KEY")?;
    let completion_api_key = require("OPENROUTER_API_KEY")?;

    let site_url = or_default("LINSIGHT_SITE_URL", DEFAULT_SITE_URL);
    let app_name = or_default("LINSIGHT_APP_NAME", DEFAULT_APP_NAME);

    let max_posts = parse_u32("LINSIGHT_MAX_POSTS", DEFAULT_MAX_POSTS)?;
    nonzero("LINSIGHT_MAX_POSTS", u64::from(max_posts))?;

    let completion_model = or_default("LINSIGHT_COMPLETION_MODEL", DEFAULT_COMPLETION_MODEL);
    let completion_max_tokens = parse_u32(
        "LINSIGHT_COMPLETION_MAX_TOKENS",
        DEFAULT_COMPLETION_MAX_TOKENS,
    )?;
    nonzero(
        "LINSIGHT_COMPLETION_MAX_TOKENS",
        u64::from(completion_max_tokens),
    )?;

    let request_timeout_secs = parse_u64(
        "LINSIGHT_REQUEST_TIMEOUT_SECS",
        DEFAULT_REQUEST_TIMEOUT_SECS,
    )?;
    nonzero("LINSIGHT_REQUEST_TIMEOUT_SECS", request_timeout_secs)?;
    let completion_timeout_secs = parse_u64(
        "LINSIGHT_COMPLETION_TIMEOUT_SECS",
        DEFAULT_COMPLETION_TIMEOUT_SECS,
    )?;
    nonzero("LINSIGHT_COMPLETION_TIMEOUT_SECS", completion_timeout_secs)?;

    let rapidapi_base_url = or_default("LINSIGHT_RAPIDAPI_BASE_URL", DEFAULT_RAPIDAPI_BASE_URL);
    let openrouter_base_url =
        or_default("LINSIGHT_OPENROUTER_BASE_URL", DEFAULT_OPENROUTER_BASE_URL);
    let log_level = or_default("LINSIGHT_LOG_LEVEL", "warn");

    Ok(AppConfig {
        profile_api_key,
        completion_api_key,
        site_url,
        app_name,
        max_posts,
        completion_model,
        completion_max_tokens,
        request_timeout_secs,
        completion_timeout_secs,
        rapidapi_base_url,
        openrouter_base_url,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
