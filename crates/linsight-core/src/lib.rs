//! Shared configuration, domain types, and pure pipeline steps for linsight.

pub mod app_config;
pub mod config;
pub mod error;
pub mod profile;
pub mod prompt;
pub mod validate;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use profile::{AnalysisResult, PostRecord, ProfileRecord};
pub use prompt::build_analysis_prompt;
pub use validate::{validate_profile_url, PROFILE_URL_PREFIX};
