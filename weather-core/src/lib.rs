//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider and its query URL
//! - Condition-code classification and error classification
//! - Shared domain models (requests, responses)
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use condition::{Condition, ConditionColor};
pub use config::{Config, OpenWeatherConfig};
pub use error::WeatherError;
pub use model::{CurrentWeather, Units, WeatherRequest};
pub use provider::{OpenWeatherProvider, WeatherProvider};
