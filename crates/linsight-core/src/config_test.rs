use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("RAPIDAPI_KEY", "rapid-test-key");
    m.insert("OPENROUTER_API_KEY", "router-test-key");
    m
}

#[test]
fn build_app_config_fails_without_rapidapi_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "RAPIDAPI_KEY"),
        "expected MissingEnvVar(RAPIDAPI_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_openrouter_key() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("RAPIDAPI_KEY", "rapid-test-key");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "OPENROUTER_API_KEY"),
        "expected MissingEnvVar(OPENROUTER_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_key_as_missing() {
    let mut map = full_env();
    map.insert("OPENROUTER_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "OPENROUTER_API_KEY"),
        "expected MissingEnvVar(OPENROUTER_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.profile_api_key, "rapid-test-key");
    assert_eq!(cfg.completion_api_key, "router-test-key");
    assert_eq!(cfg.site_url, "http://localhost");
    assert_eq!(cfg.app_name, "linsight");
    assert_eq!(cfg.max_posts, 10);
    assert_eq!(cfg.completion_model, "cohere/command-r-plus");
    assert_eq!(cfg.completion_max_tokens, 4000);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.completion_timeout_secs, 120);
    assert_eq!(cfg.rapidapi_base_url, DEFAULT_RAPIDAPI_BASE_URL);
    assert_eq!(cfg.openrouter_base_url, DEFAULT_OPENROUTER_BASE_URL);
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn attribution_overrides() {
    let mut map = full_env();
    map.insert("LINSIGHT_SITE_URL", "https://example.org");
    map.insert("LINSIGHT_APP_NAME", "Profile Reviewer");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.site_url, "https://example.org");
    assert_eq!(cfg.app_name, "Profile Reviewer");
}

#[test]
fn max_posts_override() {
    let mut map = full_env();
    map.insert("LINSIGHT_MAX_POSTS", "25");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_posts, 25);
}

#[test]
fn max_posts_invalid() {
    let mut map = full_env();
    map.insert("LINSIGHT_MAX_POSTS", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LINSIGHT_MAX_POSTS"),
        "expected InvalidEnvVar(LINSIGHT_MAX_POSTS), got: {result:?}"
    );
}

#[test]
fn max_posts_zero_is_rejected() {
    let mut map = full_env();
    map.insert("LINSIGHT_MAX_POSTS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LINSIGHT_MAX_POSTS"),
        "expected InvalidEnvVar(LINSIGHT_MAX_POSTS), got: {result:?}"
    );
}

#[test]
fn completion_max_tokens_invalid() {
    let mut map = full_env();
    map.insert("LINSIGHT_COMPLETION_MAX_TOKENS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LINSIGHT_COMPLETION_MAX_TOKENS"),
        "expected InvalidEnvVar(LINSIGHT_COMPLETION_MAX_TOKENS), got: {result:?}"
    );
}

#[test]
fn request_timeout_override() {
    let mut map = full_env();
    map.insert("LINSIGHT_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_zero_is_rejected() {
    let mut map = full_env();
    map.insert("LINSIGHT_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LINSIGHT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(LINSIGHT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn completion_timeout_invalid() {
    let mut map = full_env();
    map.insert("LINSIGHT_COMPLETION_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LINSIGHT_COMPLETION_TIMEOUT_SECS"),
        "expected InvalidEnvVar(LINSIGHT_COMPLETION_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn base_url_and_model_overrides() {
    let mut map = full_env();
    map.insert("LINSIGHT_RAPIDAPI_BASE_URL", "http://127.0.0.1:9000");
    map.insert("LINSIGHT_OPENROUTER_BASE_URL", "http://127.0.0.1:9001/v1");
    map.insert("LINSIGHT_COMPLETION_MODEL", "openai/gpt-4o-mini");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.rapidapi_base_url, "http://127.0.0.1:9000");
    assert_eq!(cfg.openrouter_base_url, "http://127.0.0.1:9001/v1");
    assert_eq!(cfg.completion_model, "openai/gpt-4o-mini");
}

#[test]
fn debug_output_redacts_api_keys() {
    let cfg = build_app_config(lookup_from_map(&full_env())).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("rapid-test-key"));
    assert!(!debug.contains("router-test-key"));
    assert!(debug.contains("[redacted]"));
}
