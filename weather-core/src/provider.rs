use crate::{Config, CurrentWeather, WeatherError, WeatherRequest};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<CurrentWeather, WeatherError>;
}

/// Construct the OpenWeather provider from config.
///
/// `env_key` is the value of `OPENWEATHER_API_KEY`, if set.
pub fn provider_from_config(
    config: &Config,
    env_key: Option<String>,
) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let api_key = config.resolve_api_key(env_key)?;
    Ok(Box::new(OpenWeatherProvider::with_base_url(
        api_key,
        config.base_url().to_string(),
    )))
}
