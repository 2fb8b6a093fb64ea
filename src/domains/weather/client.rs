//! WeatherAPI.com HTTP client.
//!
//! A single generic GET helper: every tool picks an [`Endpoint`], builds its
//! query parameters and lets the client append the API key.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{WeatherError, WeatherResult};
use crate::core::config::Config;

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Ordered query parameters forwarded to the upstream API.
pub type QueryParams = Vec<(&'static str, String)>;

/// Upstream endpoints exposed by WeatherAPI.com.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Current,
    Forecast,
    History,
    Astronomy,
    Search,
    Timezone,
    Sports,
}

impl Endpoint {
    /// Path segment appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Current => "current.json",
            Self::Forecast => "forecast.json",
            Self::History => "history.json",
            Self::Astronomy => "astronomy.json",
            Self::Search => "search.json",
            Self::Timezone => "timezone.json",
            Self::Sports => "sports.json",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Access to the upstream weather API.
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// GET `endpoint` with `params` and return the decoded JSON body.
    async fn fetch(&self, endpoint: Endpoint, params: QueryParams) -> WeatherResult<Value>;
}

/// reqwest-backed [`WeatherApi`] implementation.
#[derive(Clone)]
pub struct WeatherApiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherApiClient {
    /// Create a client for `base_url`.
    ///
    /// A missing or empty `api_key` is accepted here; calls fail later with
    /// [`WeatherError::Configuration`].
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> WeatherResult<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Create a client from the server configuration.
    pub fn from_config(config: &Config) -> WeatherResult<Self> {
        Self::new(
            config.weather.base_url.clone(),
            config.credentials.weather_api_key.clone(),
        )
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }
}

impl fmt::Debug for WeatherApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[async_trait]
impl WeatherApi for WeatherApiClient {
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    async fn fetch(&self, endpoint: Endpoint, mut params: QueryParams) -> WeatherResult<Value> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| WeatherError::configuration("Weather API key not set."))?;

        let url = self.url(endpoint);
        debug!(url = %url, params = ?params, "Calling weather API");

        params.push(("key", api_key.clone()));

        let response = self.http.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            let message = extract_error_message(&body);
            warn!(status = status.as_u16(), "Weather API returned an error: {}", message);
            return Err(WeatherError::upstream(status.as_u16(), message));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Pull `error.message` out of an upstream error envelope, falling back to
/// the raw body.
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
