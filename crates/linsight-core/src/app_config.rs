#[derive(Clone)]
pub struct AppConfig {
    /// `RapidAPI` key for the profile-data provider.
    pub profile_api_key: String,
    /// `OpenRouter` key for the completion provider.
    pub completion_api_key: String,
    /// Sent as `Referer` to the completion API for attribution.
    pub site_url: String,
    /// Sent as `X-Title` to the completion API for attribution.
    pub app_name: String,
    pub max_posts: u32,
    pub completion_model: String,
    pub completion_max_tokens: u32,
    pub request_timeout_secs: u64,
    pub completion_timeout_secs: u64,
    pub rapidapi_base_url: String,
    pub openrouter_base_url: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("profile_api_key", &"[redacted]")
            .field("completion_api_key", &"[redacted]")
            .field("site_url", &self.site_url)
            .field("app_name", &self.app_name)
            .field("max_posts", &self.max_posts)
            .field("completion_model", &self.completion_model)
            .field("completion_max_tokens", &self.completion_max_tokens)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("completion_timeout_secs", &self.completion_timeout_secs)
            .field("rapidapi_base_url", &self.rapidapi_base_url)
            .field("openrouter_base_url", &self.openrouter_base_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}
