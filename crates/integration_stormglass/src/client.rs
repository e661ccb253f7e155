//! StormGlass forecast client
//!
//! HTTP client for the StormGlass `/weather/point` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::config::StormGlassConfig;
use crate::error::StormGlassError;
use crate::models::{ForecastPoint, StormGlassForecastResponse};
use crate::transport::{HttpTransport, ReqwestTransport, RequestOptions};

/// Forecast source whose readings are kept during normalization
pub const STORM_GLASS_SOURCE: &str = "noaa";

/// Fields requested from the API, comma separated
pub const STORM_GLASS_PARAMS: &str =
    "swellDirection,swellHeight,swellPeriod,waveDirection,waveHeight,windDirection,windSpeed";

/// Client trait for fetching normalized forecast points
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetch the forecast for a coordinate pair
    ///
    /// Entries missing any reading for [`STORM_GLASS_SOURCE`] are dropped;
    /// the remaining ones keep the provider's order.
    async fn fetch_points(&self, lat: f64, lng: f64)
    -> Result<Vec<ForecastPoint>, StormGlassError>;
}

/// StormGlass API client over an injectable transport
#[derive(Debug)]
pub struct StormGlassClient<T = ReqwestTransport> {
    transport: T,
    config: StormGlassConfig,
}

impl StormGlassClient<ReqwestTransport> {
    /// Create a client using the default `reqwest` transport
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: StormGlassConfig) -> Result<Self, StormGlassError> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> StormGlassClient<T> {
    /// Create a client that sends its requests through `transport`
    pub const fn with_transport(config: StormGlassConfig, transport: T) -> Self {
        Self { transport, config }
    }

    /// Build the point forecast URL for a coordinate pair
    fn build_url(&self, lat: f64, lng: f64) -> String {
        format!(
            "{}/weather/point?params={}&source={}&lat={}&lng={}",
            self.config.api_url.trim_end_matches('/'),
            STORM_GLASS_PARAMS,
            STORM_GLASS_SOURCE,
            lat,
            lng
        )
    }

    fn request_options(&self) -> RequestOptions {
        RequestOptions::new().with_header("Authorization", self.config.api_token.as_str())
    }

    /// Keep complete entries and collapse each field to its source reading
    fn normalize_response(response: &StormGlassForecastResponse) -> Vec<ForecastPoint> {
        response
            .hours
            .iter()
            .filter_map(|point| ForecastPoint::from_source(point, STORM_GLASS_SOURCE))
            .collect()
    }
}

#[async_trait]
impl<T: HttpTransport> ForecastClient for StormGlassClient<T> {
    #[instrument(skip(self))]
    async fn fetch_points(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<ForecastPoint>, StormGlassError> {
        let url = self.build_url(lat, lng);
        debug!(url = %url, "Fetching point forecast");

        let response = self
            .transport
            .get(&url, &self.request_options())
            .await
            .map_err(|e| {
                let err = StormGlassError::from(e);
                warn!(error = %err, "StormGlass request failed");
                err
            })?;

        let body: StormGlassForecastResponse = serde_json::from_value(response.data)
            .map_err(|e| {
                warn!(error = %e, "Unexpected StormGlass payload");
                StormGlassError::ClientRequest(e.to_string())
            })?;

        let points = Self::normalize_response(&body);
        debug!(
            received = body.hours.len(),
            kept = points.len(),
            "Normalized point forecast"
        );

        Ok(points)
    }
}
