use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::{
    error::WeatherError,
    model::{CurrentWeather, WeatherRequest},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

/// Build the city-name query URL: `?q=<city>&units=<units>&appid=<key>`.
///
/// Values are form-encoded, so spaces become `+`.
pub fn build_query_url(
    base_url: &str,
    request: &WeatherRequest,
    api_key: &str,
) -> Result<Url, WeatherError> {
    Url::parse_with_params(
        base_url,
        &[
            ("q", request.city.as_str()),
            ("units", request.units.as_query_str()),
            ("appid", api_key),
        ],
    )
    .map_err(|source| WeatherError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u16,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

fn parse_current(body: &str, request: &WeatherRequest) -> Result<CurrentWeather, WeatherError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body).map_err(WeatherError::Decode)?;

    let weather = parsed
        .weather
        .into_iter()
        .next()
        .ok_or(WeatherError::MissingCondition)?;

    Ok(CurrentWeather {
        city: parsed.name,
        condition_code: weather.id,
        description: weather.description,
        temperature: parsed.main.temp,
        units: request.units,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<CurrentWeather, WeatherError> {
        let url = build_query_url(&self.base_url, request, &self.api_key)?;
        debug!(city = %request.city, units = request.units.as_query_str(), "requesting current weather");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "OpenWeather request failed");
            return Err(WeatherError::from_status(status));
        }

        let body = res.text().await?;
        let current = parse_current(&body, request)?;
        debug!(code = current.condition_code, temp = current.temperature, "decoded response");

        Ok(current)
    }
}
