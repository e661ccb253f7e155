//! StormGlass data models
//!
//! Wire types for the `/weather/point` endpoint and the normalized
//! forecast point handed to callers.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Readings of a single field keyed by forecast source (e.g. `"noaa"`, `"sg"`)
///
/// The provider returns one entry per model it has data for. Entries are kept
/// as raw JSON and only the requested source is converted, so a malformed
/// reading from another model cannot fail the whole response. A field that is
/// `null` or not an object decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SourceValues(HashMap<String, Value>);

impl<'de> Deserialize<'de> for SourceValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Object(entries) => Self(entries.into_iter().collect()),
            _ => Self::default(),
        })
    }
}

impl SourceValues {
    /// Get the numeric reading reported by `source`, if any
    #[must_use]
    pub fn get(&self, source: &str) -> Option<f64> {
        self.0.get(source).and_then(Value::as_f64)
    }

    /// Get the reading reported by `source` only when it is usable
    ///
    /// Zero and NaN readings count as absent.
    #[must_use]
    pub fn usable(&self, source: &str) -> Option<f64> {
        self.get(source).filter(|v| *v != 0.0 && !v.is_nan())
    }

    /// Number of sources present for this field
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no source reported this field
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SourceValues {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Value::from(v)))
                .collect(),
        )
    }
}

/// One hourly entry as returned by StormGlass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StormGlassPoint {
    /// ISO 8601 timestamp of the entry
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub wave_height: SourceValues,
    #[serde(default)]
    pub wave_direction: SourceValues,
    #[serde(default)]
    pub swell_direction: SourceValues,
    #[serde(default)]
    pub swell_height: SourceValues,
    #[serde(default)]
    pub swell_period: SourceValues,
    #[serde(default)]
    pub wind_direction: SourceValues,
    #[serde(default)]
    pub wind_speed: SourceValues,
}

/// Body of a `/weather/point` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StormGlassForecastResponse {
    /// Hourly entries in provider order
    pub hours: Vec<StormGlassPoint>,
}

/// Forecast for a single point in time, one value per field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// ISO 8601 timestamp, passed through as received
    pub time: String,
    /// Swell direction in degrees
    pub swell_direction: f64,
    /// Swell height in meters
    pub swell_height: f64,
    /// Swell period in seconds
    pub swell_period: f64,
    /// Wave direction in degrees
    pub wave_direction: f64,
    /// Wave height in meters
    pub wave_height: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Wind speed in meters per second
    pub wind_speed: f64,
}

impl ForecastPoint {
    /// Project a raw point onto the readings of a single source
    ///
    /// Returns `None` unless the timestamp is set and every field has a
    /// usable reading for `source`; incomplete entries are never partially
    /// converted.
    #[must_use]
    pub fn from_source(point: &StormGlassPoint, source: &str) -> Option<Self> {
        let time = point.time.as_deref().filter(|t| !t.is_empty())?;

        Some(Self {
            time: time.to_string(),
            swell_direction: point.swell_direction.usable(source)?,
            swell_height: point.swell_height.usable(source)?,
            swell_period: point.swell_period.usable(source)?,
            wave_direction: point.wave_direction.usable(source)?,
            wave_height: point.wave_height.usable(source)?,
            wind_direction: point.wind_direction.usable(source)?,
            wind_speed: point.wind_speed.usable(source)?,
        })
    }
}
