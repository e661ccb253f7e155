//! StormGlass client configuration

/// Configuration for the StormGlass API client
#[derive(Clone)]
pub struct StormGlassConfig {
    /// Base URL of the API, without trailing slash
    pub api_url: String,

    /// Token sent verbatim in the `Authorization` header
    pub api_token: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for StormGlassConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StormGlassConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_api_url() -> String {
    "https://api.stormglass.io/v2".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for StormGlassConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StormGlassConfig {
    /// Create a configuration for the given endpoint and token
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_token: api_token.into(),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("api_url must not be empty".to_string());
        }

        if self.api_token.is_empty() {
            return Err("api_token must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
