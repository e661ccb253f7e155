//! Application configuration
//!
//! Loaded once at startup from built-in defaults, an optional config file and
//! `SURFCAST__*` environment variables, in that order of precedence.

use std::path::Path;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use integration_stormglass::StormGlassConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Prefix for environment variable overrides
const ENV_PREFIX: &str = "SURFCAST";

/// Root of the configuration tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application settings
    pub app: AppSection,
}

/// `[app]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    /// External resources used by the application
    pub resources: ResourcesConfig,
}

/// `[app.resources]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// StormGlass forecast API
    pub storm_glass: StormGlassAppConfig,
}

/// `[app.resources.storm_glass]` section
#[derive(Clone, Serialize, Deserialize)]
pub struct StormGlassAppConfig {
    /// Base URL of the API
    pub api_url: String,

    /// API token (sensitive - uses `SecretString`)
    #[serde(skip_serializing)]
    pub api_token: SecretString,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for StormGlassAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StormGlassAppConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl StormGlassAppConfig {
    /// Convert to `integration_stormglass`'s `StormGlassConfig`
    #[must_use]
    pub fn to_stormglass_config(&self) -> StormGlassConfig {
        StormGlassConfig {
            api_url: self.api_url.clone(),
            api_token: self.api_token.expose_secret().to_string(),
            timeout_secs: self.timeout_secs,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and environment
    ///
    /// Without an explicit `path`, a `config.{toml,yaml,json}` in the working
    /// directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        Self::from_builder(
            Self::defaults()?
                .add_source(file)
                // e.g. SURFCAST__APP__RESOURCES__STORM_GLASS__API_TOKEN
                .add_source(Self::environment()),
        )
    }

    /// Get the StormGlass settings
    #[must_use]
    pub const fn storm_glass(&self) -> &StormGlassAppConfig {
        &self.app.resources.storm_glass
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default(
                "app.resources.storm_glass.api_url",
                "https://api.stormglass.io/v2",
            )?
            .set_default("app.resources.storm_glass.api_token", "")?
            .set_default("app.resources.storm_glass.timeout_secs", 10)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
