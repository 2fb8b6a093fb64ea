//! Forecast tool.
//!
//! Up to 14 days of forecast, with optional air quality and alerts.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::{Number, Value};
use tracing::instrument;

use super::ToolDefinition;
use super::common::default_flag;
use crate::domains::weather::{Endpoint, WeatherApi, WeatherError, WeatherResult};

/// Smallest accepted `days` value.
pub const MIN_FORECAST_DAYS: i64 = 1;

/// Largest accepted `days` value.
pub const MAX_FORECAST_DAYS: i64 = 14;

fn default_days() -> i64 {
    1
}

/// Accept any whole JSON number for `days`.
///
/// Integers beyond `i64` saturate, as do whole floats (`3.0` is 3), so every
/// out-of-range count still reaches [`validate_days`].
fn deserialize_days<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = Number::deserialize(deserializer)?;
    if let Some(days) = number.as_i64() {
        return Ok(days);
    }
    if number.as_u64().is_some() {
        return Ok(i64::MAX);
    }
    match number.as_f64() {
        Some(days) if days.is_finite() && days.fract() == 0.0 => Ok(days as i64),
        _ => Err(D::Error::custom(format!(
            "invalid value: {number}, expected a whole number of days"
        ))),
    }
}

/// Parameters for the forecast tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WeatherForecastParams {
    #[schemars(description = "Location: city name, 'lat,lon', postcode, IATA code or IP address")]
    pub q: String,

    #[schemars(with = "i64", description = "Number of forecast days, 1 to 14 (default: 1)")]
    #[serde(default = "default_days", deserialize_with = "deserialize_days")]
    pub days: i64,

    #[schemars(description = "Include air quality data: \"yes\" or \"no\" (default: \"no\")")]
    #[serde(default = "default_flag")]
    pub aqi: String,

    #[schemars(description = "Include weather alerts: \"yes\" or \"no\" (default: \"no\")")]
    #[serde(default = "default_flag")]
    pub alerts: String,
}

/// Forecast tool - forwards to `forecast.json`.
#[derive(Debug, Clone)]
pub struct WeatherForecastTool;

/// Reject day counts outside 1..=14.
pub fn validate_days(days: i64) -> WeatherResult<()> {
    if (MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS).contains(&days) {
        Ok(())
    } else {
        Err(WeatherError::invalid_argument(
            "'days' must be between 1 and 14.",
        ))
    }
}

#[async_trait]
impl ToolDefinition for WeatherForecastTool {
    const NAME: &'static str = "weather_forecast";
    const DESCRIPTION: &'static str = "Get weather forecast (1-14 days) for a location.";

    type Params = WeatherForecastParams;

    #[instrument(skip_all, fields(q = %params.q, days = params.days))]
    async fn execute(params: &Self::Params, api: &dyn WeatherApi) -> WeatherResult<Value> {
        validate_days(params.days)?;

        api.fetch(
            Endpoint::Forecast,
            vec![
                ("q", params.q.clone()),
                ("days", params.days.to_string()),
                ("aqi", params.aqi.clone()),
                ("alerts", params.alerts.clone()),
            ],
        )
        .await
    }
}
