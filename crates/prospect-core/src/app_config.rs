use std::path::PathBuf;

/// What to do when the city/state cannot be resolved to coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeocodeFailurePolicy {
    /// Skip the nearby search and keep the text-search results.
    #[default]
    TextOnly,
    /// Abort the whole run before any search request is issued.
    Abort,
}

impl std::fmt::Display for GeocodeFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeocodeFailurePolicy::TextOnly => write!(f, "text-only"),
            GeocodeFailurePolicy::Abort => write!(f, "abort"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub google_maps_api_key: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub search_radius_m: u32,
    pub page_token_delay_ms: u64,
    pub max_pages: usize,
    pub output_path: PathBuf,
    pub geocode_failure: GeocodeFailurePolicy,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_maps_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("search_radius_m", &self.search_radius_m)
            .field("page_token_delay_ms", &self.page_token_delay_ms)
            .field("max_pages", &self.max_pages)
            .field("output_path", &self.output_path)
            .field("geocode_failure", &self.geocode_failure)
            .finish()
    }
}
