//! StormGlass marine forecast integration
//!
//! Client for the StormGlass point forecast API (<https://stormglass.io>).
//! Fetches hourly wave, swell and wind readings for a coordinate pair and
//! normalizes them to a single forecast source.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_stormglass::{ForecastClient, StormGlassClient, StormGlassConfig};
//!
//! let config = StormGlassConfig::new("https://api.stormglass.io/v2", "my-token");
//! let client = StormGlassClient::new(config)?;
//!
//! let points = client.fetch_points(-33.79, 151.28).await?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod transport;

pub use client::{ForecastClient, STORM_GLASS_PARAMS, STORM_GLASS_SOURCE, StormGlassClient};
pub use config::StormGlassConfig;
pub use error::StormGlassError;
pub use models::{ForecastPoint, SourceValues, StormGlassForecastResponse, StormGlassPoint};
pub use transport::{
    HttpTransport, ReqwestTransport, RequestOptions, TransportError, TransportResponse,
};
